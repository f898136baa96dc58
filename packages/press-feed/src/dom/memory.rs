//! In-memory page used by tests and the snapshot CLI

use scraper::{Html, Selector};
use std::collections::HashMap;
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

use super::{Document, Role};
use crate::render::CARD_MARKER;

static CARD_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(&format!("[{CARD_MARKER}]")).expect("valid card selector")
});

/// One rendered card as the page sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedItem {
    pub html: String,
    pub text: String,
    pub visible: bool,
}

#[derive(Debug, Clone, Default)]
struct Element {
    inner_html: String,
    value: String,
    items: Vec<RenderedItem>,
}

/// A page holding only the elements it was built with
#[derive(Debug, Default)]
pub struct InMemoryDocument {
    elements: Mutex<HashMap<Role, Element>>,
}

impl InMemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty element for `role`
    pub fn with_element(self, role: Role) -> Self {
        self.lock().entry(role).or_default();
        self
    }

    /// Add a control with an initial value
    pub fn with_value(self, role: Role, value: impl Into<String>) -> Self {
        self.lock().entry(role).or_default().value = value.into();
        self
    }

    /// Homepage layout: just the homepage grid
    pub fn homepage() -> Self {
        Self::new().with_element(Role::HomepageContainer)
    }

    /// News layout: list container, search box and both selectors
    pub fn news_page() -> Self {
        Self::new()
            .with_element(Role::NewsContainer)
            .with_element(Role::SearchInput)
            .with_element(Role::IndustryFilter)
            .with_element(Role::TypeFilter)
    }

    /// Change a control's value, as the user typing or selecting would
    pub fn set_value(&self, role: Role, value: impl Into<String>) {
        if let Some(element) = self.lock().get_mut(&role) {
            element.value = value.into();
        }
    }

    pub fn items(&self, role: Role) -> Vec<RenderedItem> {
        self.lock()
            .get(&role)
            .map(|element| element.items.clone())
            .unwrap_or_default()
    }

    /// Text of the items currently shown
    pub fn visible_texts(&self, role: Role) -> Vec<String> {
        self.items(role)
            .into_iter()
            .filter(|item| item.visible)
            .map(|item| item.text)
            .collect()
    }

    pub fn visibility(&self, role: Role) -> Vec<bool> {
        self.items(role).iter().map(|item| item.visible).collect()
    }

    /// Container markup with hidden cards left out. Containers holding no
    /// cards (loading, empty state) return their markup unchanged.
    pub fn visible_html(&self, role: Role) -> Option<String> {
        let elements = self.lock();
        let element = elements.get(&role)?;
        if element.items.is_empty() {
            return Some(element.inner_html.clone());
        }

        Some(
            element
                .items
                .iter()
                .filter(|item| item.visible)
                .map(|item| item.html.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Role, Element>> {
        self.elements.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Document for InMemoryDocument {
    fn has_element(&self, role: Role) -> bool {
        self.lock().contains_key(&role)
    }

    fn set_inner_html(&self, role: Role, html: &str) -> bool {
        let mut elements = self.lock();
        let Some(element) = elements.get_mut(&role) else {
            return false;
        };

        element.inner_html = html.to_string();
        element.items = parse_items(html);
        true
    }

    fn inner_html(&self, role: Role) -> Option<String> {
        self.lock().get(&role).map(|element| element.inner_html.clone())
    }

    fn value(&self, role: Role) -> Option<String> {
        self.lock().get(&role).map(|element| element.value.clone())
    }

    fn item_texts(&self, role: Role) -> Vec<String> {
        self.items(role).into_iter().map(|item| item.text).collect()
    }

    fn set_item_visible(&self, role: Role, index: usize, visible: bool) {
        if let Some(item) = self
            .lock()
            .get_mut(&role)
            .and_then(|element| element.items.get_mut(index))
        {
            item.visible = visible;
        }
    }
}

/// Every marked card becomes a visible item carrying its text content
fn parse_items(html: &str) -> Vec<RenderedItem> {
    let fragment = Html::parse_fragment(html);
    fragment
        .select(&CARD_SELECTOR)
        .map(|el| RenderedItem {
            html: el.html(),
            text: el.text().collect::<String>(),
            visible: true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{no_results, render_list, Layout};
    use crate::types::PressRelease;

    #[test]
    fn test_missing_element_is_not_written() {
        let doc = InMemoryDocument::homepage();
        assert!(!doc.set_inner_html(Role::NewsContainer, "<p>hi</p>"));
        assert!(!doc.has_element(Role::NewsContainer));
        assert!(doc.set_inner_html(Role::HomepageContainer, "<p>hi</p>"));
    }

    #[test]
    fn test_rendered_cards_become_items() {
        let records = vec![
            PressRelease {
                title: Some("Acme raises funds".into()),
                ..Default::default()
            },
            PressRelease {
                title: Some("Beta & Sons win grant".into()),
                ..Default::default()
            },
        ];
        let doc = InMemoryDocument::news_page();
        doc.set_inner_html(Role::NewsContainer, &render_list(&records, Layout::Expanded));

        let texts = doc.item_texts(Role::NewsContainer);
        assert_eq!(texts.len(), 2);
        assert!(texts[0].contains("Acme raises funds"));
        // entities decode back to the record text
        assert!(texts[1].contains("Beta & Sons win grant"));
        assert_eq!(doc.visibility(Role::NewsContainer), vec![true, true]);
    }

    #[test]
    fn test_state_fragment_has_no_items() {
        let doc = InMemoryDocument::news_page();
        doc.set_inner_html(Role::NewsContainer, no_results());
        assert!(doc.item_texts(Role::NewsContainer).is_empty());
        assert_eq!(
            doc.visible_html(Role::NewsContainer).as_deref(),
            Some(no_results())
        );
    }

    #[test]
    fn test_visibility_and_visible_html() {
        let doc = InMemoryDocument::news_page();
        let html = r#"<article data-press-release>one</article><article data-press-release>two</article>"#;
        doc.set_inner_html(Role::NewsContainer, html);

        doc.set_item_visible(Role::NewsContainer, 0, false);
        doc.set_item_visible(Role::NewsContainer, 9, false);

        assert_eq!(doc.visible_texts(Role::NewsContainer), vec!["two".to_string()]);
        let visible = doc.visible_html(Role::NewsContainer).unwrap();
        assert!(visible.contains("two") && !visible.contains("one"));
    }

    #[test]
    fn test_control_values() {
        let doc = InMemoryDocument::new().with_value(Role::IndustryFilter, "finance");
        assert_eq!(doc.value(Role::IndustryFilter).as_deref(), Some("finance"));
        doc.set_value(Role::IndustryFilter, "");
        assert_eq!(doc.value(Role::IndustryFilter).as_deref(), Some(""));
        assert_eq!(doc.value(Role::TypeFilter), None);
    }
}
