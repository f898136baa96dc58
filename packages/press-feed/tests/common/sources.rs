use async_trait::async_trait;
use press_feed::{
    Document, FeedError, InMemoryDocument, PressRelease, PressReleaseSource, Result, Role,
};
use std::sync::{Arc, Mutex};

/// Always returns the same records and remembers the limits it was asked for
pub struct FixedSource {
    records: Vec<PressRelease>,
    limits: Mutex<Vec<u32>>,
}

impl FixedSource {
    pub fn new(records: Vec<PressRelease>) -> Self {
        Self {
            records,
            limits: Mutex::new(Vec::new()),
        }
    }

    pub fn limits(&self) -> Vec<u32> {
        let mut limits = self.limits.lock().unwrap().clone();
        limits.sort_unstable();
        limits
    }
}

#[async_trait]
impl PressReleaseSource for FixedSource {
    async fn list(&self, limit: u32) -> Result<Vec<PressRelease>> {
        self.limits.lock().unwrap().push(limit);
        Ok(self
            .records
            .iter()
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

/// Fails every request with the configured error kind
pub enum FailingSource {
    Network,
    Status(u16),
    Malformed,
}

#[async_trait]
impl PressReleaseSource for FailingSource {
    async fn list(&self, _limit: u32) -> Result<Vec<PressRelease>> {
        Err(match self {
            FailingSource::Network => FeedError::Network("connection refused".into()),
            FailingSource::Status(status) => FeedError::Api {
                status: *status,
                message: "upstream unavailable".into(),
            },
            FailingSource::Malformed => FeedError::Parse("expected value at line 1".into()),
        })
    }
}

/// What the container held at the moment the request was issued
#[derive(Debug, Clone, Default)]
pub struct ContainerAtRequest {
    pub inner_html: String,
    pub item_count: usize,
}

/// Records the container state when `list` is called, then returns records
pub struct ObservingSource {
    doc: Arc<InMemoryDocument>,
    container: Role,
    records: Vec<PressRelease>,
    seen: Mutex<Option<ContainerAtRequest>>,
}

impl ObservingSource {
    pub fn new(doc: Arc<InMemoryDocument>, container: Role, records: Vec<PressRelease>) -> Self {
        Self {
            doc,
            container,
            records,
            seen: Mutex::new(None),
        }
    }

    pub fn seen(&self) -> Option<ContainerAtRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl PressReleaseSource for ObservingSource {
    async fn list(&self, _limit: u32) -> Result<Vec<PressRelease>> {
        *self.seen.lock().unwrap() = Some(ContainerAtRequest {
            inner_html: self.doc.inner_html(self.container).unwrap_or_default(),
            item_count: self.doc.item_texts(self.container).len(),
        });
        Ok(self.records.clone())
    }
}
