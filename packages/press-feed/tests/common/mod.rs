// Common test utilities

pub mod fixtures;
pub mod sources;

pub use fixtures::*;
pub use sources::*;
