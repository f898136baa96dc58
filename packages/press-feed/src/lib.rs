//! Press release feed
//!
//! Loads press releases from the site API into page containers, renders them
//! as cards for the homepage grid or the news list, falls back to built-in
//! samples when the API is unreachable, and filters the rendered news list by
//! search text and category.
//!
//! # Example
//!
//! ```rust,ignore
//! use press_feed::{page, FeedConfig, HttpPressReleaseSource, InMemoryDocument, Loader, MatchPolicy};
//!
//! let config = FeedConfig::from_env()?;
//! let loader = Loader::new(HttpPressReleaseSource::from_config(&config)?);
//! let doc = InMemoryDocument::news_page();
//!
//! let mut ready = page::ready(&doc, &loader, &config, MatchPolicy::Combined).await;
//! ready.filters.search(&doc, "fintech");
//! ```

pub mod client;
pub mod config;
pub mod diagnostics;
pub mod dom;
pub mod error;
pub mod filter;
pub mod loader;
pub mod page;
pub mod render;
pub mod samples;
pub mod types;

pub use client::{HttpPressReleaseSource, PressReleaseSource};
pub use config::FeedConfig;
pub use diagnostics::{Diagnostics, RecordingDiagnostics, TracingDiagnostics};
pub use dom::{Document, InMemoryDocument, RenderedItem, Role};
pub use error::{FeedError, Result};
pub use filter::{FilterControl, FilterEngine, FilterState, MatchPolicy, UiEvent};
pub use loader::{LoadOutcome, Loader};
pub use page::{ready, ReadyPage};
pub use render::{extract_title_from_filename, render_card, render_list, Layout};
pub use samples::sample_press_releases;
pub use types::PressRelease;
