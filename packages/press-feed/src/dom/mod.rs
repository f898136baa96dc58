//! Page capability interface
//!
//! The loader and filter engine never touch a concrete page. They look
//! elements up by [`Role`] through a [`Document`], so the pipeline runs the
//! same against a browser binding or the in-memory page in [`memory`].

pub mod memory;

pub use memory::{InMemoryDocument, RenderedItem};

use crate::render::Layout;

/// The page elements the feed knows about. All of them are optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    HomepageContainer,
    NewsContainer,
    SearchInput,
    IndustryFilter,
    TypeFilter,
}

impl Role {
    /// Element id used by the site markup
    pub fn element_id(&self) -> &'static str {
        match self {
            Role::HomepageContainer => "homepage-prs",
            Role::NewsContainer => "news-grid",
            Role::SearchInput => "searchInput",
            Role::IndustryFilter => "industryFilter",
            Role::TypeFilter => "typeFilter",
        }
    }

    /// Card layout for containers, `None` for controls
    pub fn layout(&self) -> Option<Layout> {
        match self {
            Role::HomepageContainer => Some(Layout::Compact),
            Role::NewsContainer => Some(Layout::Expanded),
            _ => None,
        }
    }

    pub fn is_container(&self) -> bool {
        self.layout().is_some()
    }

    pub fn from_element_id(id: &str) -> Option<Role> {
        [
            Role::HomepageContainer,
            Role::NewsContainer,
            Role::SearchInput,
            Role::IndustryFilter,
            Role::TypeFilter,
        ]
        .into_iter()
        .find(|role| role.element_id() == id)
    }
}

/// Element lookups and mutations the feed needs from a page.
///
/// Methods take `&self`: concurrent loads write into disjoint containers and
/// implementations handle their own interior mutability.
pub trait Document: Send + Sync {
    fn has_element(&self, role: Role) -> bool;

    /// Replace an element's content. Returns `false` if the element is absent.
    fn set_inner_html(&self, role: Role, html: &str) -> bool;

    fn inner_html(&self, role: Role) -> Option<String>;

    /// Current value of an input or select control
    fn value(&self, role: Role) -> Option<String>;

    /// Full text of each rendered item under a container, in document order
    fn item_texts(&self, role: Role) -> Vec<String>;

    /// Show or hide the rendered item at `index`. Out of range is a no-op.
    fn set_item_visible(&self, role: Role, index: usize, visible: bool);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_ids_round_trip() {
        for role in [
            Role::HomepageContainer,
            Role::NewsContainer,
            Role::SearchInput,
            Role::IndustryFilter,
            Role::TypeFilter,
        ] {
            assert_eq!(Role::from_element_id(role.element_id()), Some(role));
        }
        assert_eq!(Role::from_element_id("sidebar"), None);
    }

    #[test]
    fn test_container_layouts() {
        assert_eq!(Role::HomepageContainer.layout(), Some(Layout::Compact));
        assert_eq!(Role::NewsContainer.layout(), Some(Layout::Expanded));
        assert!(!Role::SearchInput.is_container());
    }
}
