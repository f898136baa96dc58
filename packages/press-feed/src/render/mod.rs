//! Markup rendering for press release cards
//!
//! Rendering is a pure function of the records and the [`Layout`]. The caller
//! already knows which container it is populating, so the layout is passed in
//! rather than discovered from the page.

mod card;
mod states;
mod title;

pub use card::{render_compact_card, render_expanded_card};
pub use states::{loading_placeholder, no_results};
pub use title::{extract_title_from_filename, FALLBACK_TITLE};

use crate::types::PressRelease;

/// Attribute carried by every rendered card. The filter engine scans
/// elements with this marker.
pub const CARD_MARKER: &str = "data-press-release";

/// Card template selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Homepage grid card
    Compact,
    /// News list card
    Expanded,
}

/// Render one record as a card
pub fn render_card(record: &PressRelease, layout: Layout) -> String {
    match layout {
        Layout::Compact => render_compact_card(record),
        Layout::Expanded => render_expanded_card(record),
    }
}

/// Render every record, preserving order
pub fn render_list(records: &[PressRelease], layout: Layout) -> String {
    records
        .iter()
        .map(|record| render_card(record, layout))
        .collect::<Vec<_>>()
        .join("")
}

/// Escape text for use in element content and quoted attribute values
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
