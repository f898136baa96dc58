//! Fetch-render-fallback for a single container

use std::sync::Arc;

use crate::client::PressReleaseSource;
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::dom::{Document, Role};
use crate::render::{loading_placeholder, no_results, render_list};
use crate::samples::sample_press_releases;

/// What a load ended up putting in the container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The container is not on this page
    Skipped,
    /// Cards for the fetched records
    Rendered { count: usize },
    /// The endpoint answered with no records
    Empty,
    /// The fetch failed and the sample records were shown
    Fallback,
}

/// Loads press releases into page containers.
///
/// Each call makes exactly one request. Failures never leave `load`: they are
/// reported to [`Diagnostics`] and the sample records are rendered instead.
pub struct Loader<S> {
    source: S,
    diagnostics: Arc<dyn Diagnostics>,
}

impl<S: PressReleaseSource> Loader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            diagnostics: Arc::new(TracingDiagnostics),
        }
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fill `container` with up to `limit` press releases.
    ///
    /// The loading placeholder is written before the request is issued.
    pub async fn load<D>(&self, doc: &D, container: Role, limit: u32) -> LoadOutcome
    where
        D: Document + ?Sized,
    {
        let Some(layout) = container.layout() else {
            tracing::warn!(role = ?container, "Refusing to load press releases into a control");
            return LoadOutcome::Skipped;
        };

        if !doc.has_element(container) || !doc.set_inner_html(container, loading_placeholder()) {
            tracing::debug!(container = container.element_id(), "Container not on page, skipping");
            return LoadOutcome::Skipped;
        }

        match self.source.list(limit).await {
            Ok(records) if records.is_empty() => {
                tracing::info!(container = container.element_id(), "No press releases found");
                doc.set_inner_html(container, no_results());
                LoadOutcome::Empty
            }
            Ok(records) => {
                tracing::info!(
                    container = container.element_id(),
                    count = records.len(),
                    "Rendering press releases"
                );
                doc.set_inner_html(container, &render_list(&records, layout));
                LoadOutcome::Rendered {
                    count: records.len(),
                }
            }
            Err(e) => {
                self.diagnostics.fetch_failed(container, &e);
                doc.set_inner_html(container, &render_list(&sample_press_releases(), layout));
                LoadOutcome::Fallback
            }
        }
    }
}
