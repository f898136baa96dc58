//! Headline derivation for records that arrive without a title

use regex::Regex;
use std::sync::LazyLock;

/// Title used when no filename is available
pub const FALLBACK_TITLE: &str = "Press Release";

static RE_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.[A-Za-z][A-Za-z0-9]*$").expect("valid extension regex"));

static RE_TIMESTAMP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{13}$").expect("valid timestamp regex"));

/// Turn an upload filename into a headline.
///
/// `my-company-launch-1700000000000.html` becomes `My Company Launch`: the
/// extension and the trailing millisecond timestamp are dropped, `-` and `_`
/// become spaces, and each word gets an upper-cased first character with the
/// rest kept as-is.
pub fn extract_title_from_filename(filename: Option<&str>) -> String {
    let Some(filename) = filename.filter(|f| !f.is_empty()) else {
        return FALLBACK_TITLE.to_string();
    };

    let stem = RE_EXTENSION.replace(filename, "");
    let stem = RE_TIMESTAMP.replace(&stem, "");
    let spaced = stem.replace(&['-', '_'][..], " ");

    let title = spaced
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    if title.is_empty() {
        FALLBACK_TITLE.to_string()
    } else {
        title
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
