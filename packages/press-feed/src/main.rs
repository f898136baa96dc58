//! Snapshot CLI: run the page-ready hook against the configured API and print
//! the resulting container markup.
//!
//! ```bash
//! press-feed render --page news --query fintech --industry finance
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use press_feed::{
    ready, FeedConfig, FilterControl, HttpPressReleaseSource, InMemoryDocument, Loader,
    MatchPolicy, Role, UiEvent,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "press-feed", about = "Render the press release feed as a page would")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load a page and print its container markup
    Render {
        #[arg(long, value_enum, default_value_t = PageKind::News)]
        page: PageKind,

        /// Search text typed into the news search box
        #[arg(long)]
        query: Option<String>,

        /// Industry selector value
        #[arg(long)]
        industry: Option<String>,

        /// Type selector value
        #[arg(long = "type")]
        kind: Option<String>,

        /// Require cards to match the search text and the selectors together
        #[arg(long)]
        combined: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PageKind {
    Home,
    News,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays pure markup
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,press_feed=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = FeedConfig::from_env().context("Failed to load configuration")?;

    match cli.command {
        Command::Render {
            page,
            query,
            industry,
            kind,
            combined,
        } => {
            let source = HttpPressReleaseSource::from_config(&config)
                .context("Failed to create HTTP client")?;
            let loader = Loader::new(source);

            let (doc, container) = match page {
                PageKind::Home => (InMemoryDocument::homepage(), Role::HomepageContainer),
                PageKind::News => (InMemoryDocument::news_page(), Role::NewsContainer),
            };
            let policy = if combined {
                MatchPolicy::Combined
            } else {
                MatchPolicy::default()
            };

            let mut page = ready(&doc, &loader, &config, policy).await;

            let mut events = Vec::new();
            if let Some(value) = industry {
                events.push(UiEvent::FilterChanged {
                    control: FilterControl::Industry,
                    value,
                });
            }
            if let Some(value) = kind {
                events.push(UiEvent::FilterChanged {
                    control: FilterControl::Type,
                    value,
                });
            }
            if let Some(query) = query {
                events.push(UiEvent::SearchInput(query));
            }

            for event in events {
                if page.filters.handle(&doc, event.clone()).is_none() {
                    tracing::warn!(?event, "Control not on this page, event ignored");
                }
            }

            let html = doc
                .visible_html(container)
                .context("Container missing from page")?;
            println!("{}", html.trim());
        }
    }

    Ok(())
}
