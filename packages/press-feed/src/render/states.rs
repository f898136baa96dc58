//! Fixed loading and empty-state fragments

/// Shown synchronously while the list request is in flight
pub fn loading_placeholder() -> &'static str {
    r#"
        <div class="text-center py-8" data-feed-state="loading">
            <div class="inline-block animate-spin rounded-full h-8 w-8 border-b-2 border-gray-900"></div>
            <p class="mt-2 text-gray-500">Loading press releases...</p>
        </div>
    "#
}

/// Shown when the endpoint succeeds with an empty list
pub fn no_results() -> &'static str {
    r#"
        <div class="text-center py-8 text-gray-500" data-feed-state="empty">
            <p>No press releases found.</p>
        </div>
    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::CARD_MARKER;

    #[test]
    fn test_state_fragments_are_not_cards() {
        assert!(!loading_placeholder().contains(CARD_MARKER));
        assert!(!no_results().contains(CARD_MARKER));
        assert!(no_results().contains("No press releases found."));
    }
}
