//! Where fetch failures go
//!
//! The page never shows a fetch error. The loader reports it here instead,
//! so production logs it and tests can assert it happened.

use std::sync::{Mutex, PoisonError};

use crate::dom::Role;
use crate::error::FeedError;

pub trait Diagnostics: Send + Sync {
    fn fetch_failed(&self, container: Role, error: &FeedError);
}

/// Logs failures through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn fetch_failed(&self, container: Role, error: &FeedError) {
        tracing::error!(
            container = container.element_id(),
            error = %error,
            "Error loading press releases, showing sample data"
        );
    }
}

/// Keeps every reported failure in memory
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    failures: Mutex<Vec<(Role, String)>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reported failures as (container, error message)
    pub fn failures(&self) -> Vec<(Role, String)> {
        self.failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn fetch_failed(&self, container: Role, error: &FeedError) {
        self.failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((container, error.to_string()));
    }
}
