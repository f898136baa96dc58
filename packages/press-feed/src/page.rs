//! Page-ready bootstrap: one load per container present, filters bound

use crate::client::PressReleaseSource;
use crate::config::FeedConfig;
use crate::dom::{Document, Role};
use crate::filter::{FilterEngine, MatchPolicy};
use crate::loader::{LoadOutcome, Loader};

/// Result of running the page-ready hook
#[derive(Debug, Clone)]
pub struct ReadyPage {
    pub news: LoadOutcome,
    pub homepage: LoadOutcome,
    pub filters: FilterEngine,
}

/// Initialise a page once its structure is available.
///
/// Filters are bound before any request goes out so user input during the
/// fetch is handled against whatever the container holds. Both containers
/// load concurrently; absent ones are skipped.
pub async fn ready<S, D>(
    doc: &D,
    loader: &Loader<S>,
    config: &FeedConfig,
    policy: MatchPolicy,
) -> ReadyPage
where
    S: PressReleaseSource,
    D: Document + ?Sized,
{
    let filters = FilterEngine::bind(doc, policy);

    let (news, homepage) = futures::join!(
        loader.load(doc, Role::NewsContainer, config.news_limit),
        loader.load(doc, Role::HomepageContainer, config.homepage_limit),
    );

    tracing::info!(?news, ?homepage, "Page ready");

    ReadyPage {
        news,
        homepage,
        filters,
    }
}
