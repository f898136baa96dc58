//! Search and category filtering over rendered news cards
//!
//! The engine keeps the current query and selector values and recomputes the
//! visibility of every card under the news container whenever one of them
//! changes. Matching is a case-insensitive substring test against the card's
//! full text, and an empty value never constrains.

use crate::dom::{Document, Role};

/// How search and category selectors interact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// A search pass only looks at the query and a filter pass only at the
    /// selectors. Whichever pass ran last decides visibility.
    #[default]
    Independent,
    /// A card must match the query and every selector
    Combined,
}

/// The two category selectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterControl {
    Industry,
    Type,
}

impl FilterControl {
    pub fn role(&self) -> Role {
        match self {
            FilterControl::Industry => Role::IndustryFilter,
            FilterControl::Type => Role::TypeFilter,
        }
    }
}

/// User input the engine reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    SearchInput(String),
    FilterChanged { control: FilterControl, value: String },
}

/// Current query and selector values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub industry: String,
    pub kind: String,
}

impl FilterState {
    fn query_matches(&self, text: &str) -> bool {
        contains_ignore_case(text, &self.query)
    }

    fn selectors_match(&self, text: &str) -> bool {
        contains_ignore_case(text, &self.industry) && contains_ignore_case(text, &self.kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    Search,
    Filter,
}

/// Visibility controller bound to whichever controls exist on the page
#[derive(Debug, Clone)]
pub struct FilterEngine {
    policy: MatchPolicy,
    state: FilterState,
    search_bound: bool,
    industry_bound: bool,
    type_bound: bool,
    last_pass: Pass,
}

impl FilterEngine {
    /// Bind to the page's search input and selectors, seeding the state from
    /// their current values. Missing controls stay unbound and their events
    /// are ignored.
    pub fn bind<D>(doc: &D, policy: MatchPolicy) -> Self
    where
        D: Document + ?Sized,
    {
        let search_bound = doc.has_element(Role::SearchInput);
        let industry_bound = doc.has_element(Role::IndustryFilter);
        let type_bound = doc.has_element(Role::TypeFilter);

        let state = FilterState {
            query: doc.value(Role::SearchInput).unwrap_or_default(),
            industry: doc.value(Role::IndustryFilter).unwrap_or_default(),
            kind: doc.value(Role::TypeFilter).unwrap_or_default(),
        };

        tracing::debug!(
            search_bound,
            industry_bound,
            type_bound,
            ?policy,
            "Filter engine bound"
        );

        Self {
            policy,
            state,
            search_bound,
            industry_bound,
            type_bound,
            last_pass: Pass::Search,
        }
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn is_bound(&self) -> bool {
        self.search_bound || self.industry_bound || self.type_bound
    }

    /// Apply one event. Returns the number of visible cards, or `None` if the
    /// event came from a control that is not on the page.
    pub fn handle<D>(&mut self, doc: &D, event: UiEvent) -> Option<usize>
    where
        D: Document + ?Sized,
    {
        match event {
            UiEvent::SearchInput(query) => self.search(doc, query),
            UiEvent::FilterChanged { control, value } => self.select(doc, control, value),
        }
    }

    /// Search input changed
    pub fn search<D>(&mut self, doc: &D, query: impl Into<String>) -> Option<usize>
    where
        D: Document + ?Sized,
    {
        if !self.search_bound {
            return None;
        }
        self.state.query = query.into();
        self.last_pass = Pass::Search;
        Some(self.recompute(doc, Pass::Search))
    }

    /// A category selector changed
    pub fn select<D>(
        &mut self,
        doc: &D,
        control: FilterControl,
        value: impl Into<String>,
    ) -> Option<usize>
    where
        D: Document + ?Sized,
    {
        match control {
            FilterControl::Industry if self.industry_bound => {
                self.state.industry = value.into();
            }
            FilterControl::Type if self.type_bound => {
                self.state.kind = value.into();
            }
            _ => return None,
        }
        self.last_pass = Pass::Filter;
        Some(self.recompute(doc, Pass::Filter))
    }

    /// Re-apply the current state, e.g. after the news list was re-rendered
    pub fn refresh<D>(&self, doc: &D) -> usize
    where
        D: Document + ?Sized,
    {
        self.recompute(doc, self.last_pass)
    }

    fn recompute<D>(&self, doc: &D, pass: Pass) -> usize
    where
        D: Document + ?Sized,
    {
        let mut visible_count = 0;
        for (index, text) in doc.item_texts(Role::NewsContainer).iter().enumerate() {
            let visible = self.is_visible(text, pass);
            doc.set_item_visible(Role::NewsContainer, index, visible);
            if visible {
                visible_count += 1;
            }
        }

        tracing::debug!(
            query = %self.state.query,
            industry = %self.state.industry,
            kind = %self.state.kind,
            visible_count,
            "Filtered press releases"
        );
        visible_count
    }

    fn is_visible(&self, text: &str, pass: Pass) -> bool {
        match (self.policy, pass) {
            (MatchPolicy::Combined, _) => {
                self.state.query_matches(text) && self.state.selectors_match(text)
            }
            (MatchPolicy::Independent, Pass::Search) => self.state.query_matches(text),
            (MatchPolicy::Independent, Pass::Filter) => self.state.selectors_match(text),
        }
    }
}

/// Empty needles match everything
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}
