//! Card templates for the two layouts

use super::{escape_html, extract_title_from_filename};
use crate::types::PressRelease;

const COMPACT_SUMMARY_PLACEHOLDER: &str = "Click to read the full press release announcement.";
const EXPANDED_SUMMARY_PLACEHOLDER: &str = "Read the full press release for more details.";

/// Fields shared by both templates, already escaped
struct CardFields {
    title: String,
    timestamp: String,
    url: String,
}

impl CardFields {
    fn from_record(record: &PressRelease) -> Self {
        let title = match record.title() {
            Some(title) => title.to_string(),
            None => extract_title_from_filename(record.filename()),
        };

        Self {
            title: escape_html(&title),
            timestamp: escape_html(record.timestamp().unwrap_or_default()),
            url: escape_html(record.url().unwrap_or("#")),
        }
    }
}

/// Homepage grid card. Shows the CRO number when present, never the industry.
pub fn render_compact_card(record: &PressRelease) -> String {
    let CardFields {
        title,
        timestamp,
        url,
    } = CardFields::from_record(record);

    let summary = escape_html(record.summary().unwrap_or(COMPACT_SUMMARY_PLACEHOLDER));
    let verified_via = escape_html(
        record
            .domain()
            .or_else(|| record.company())
            .unwrap_or("company domain"),
    );
    let cro = match record.cro_number() {
        Some(cro) => format!(
            r#"<span class="ml-2">• CRO: {}</span>"#,
            escape_html(cro)
        ),
        None => String::new(),
    };

    format!(
        r#"
            <div class="bg-white rounded-lg border p-6 hover:shadow-lg transition-shadow" data-press-release>
                <div class="mb-4">
                    <span class="inline-block px-2 py-1 bg-green-100 text-green-700 text-xs font-medium rounded">
                        VERIFIED
                    </span>
                    <span class="text-sm text-gray-500 ml-2">{timestamp}</span>
                </div>
                <h3 class="font-semibold mb-2 line-clamp-2">
                    {title}
                </h3>
                <p class="text-gray-600 text-sm mb-4 line-clamp-3">
                    {summary}
                </p>
                <div class="flex items-center text-xs text-gray-500 mb-4">
                    <span>✓ Verified via {verified_via}</span>
                    {cro}
                </div>
                <a href="{url}" class="text-sm font-medium text-black hover:underline">
                    Read more →
                </a>
            </div>
        "#
    )
}

/// News list card. Shows the industry tag when present, never the CRO number.
pub fn render_expanded_card(record: &PressRelease) -> String {
    let CardFields {
        title,
        timestamp,
        url,
    } = CardFields::from_record(record);

    let summary = escape_html(record.summary().unwrap_or(EXPANDED_SUMMARY_PLACEHOLDER));
    let company = escape_html(record.company().unwrap_or("Verified Company"));
    let industry = match record.industry() {
        Some(industry) => format!(
            r#"<span class="text-xs font-medium text-gray-500 uppercase">{}</span>"#,
            escape_html(industry)
        ),
        None => String::new(),
    };
    let domain = match record.domain() {
        Some(domain) => format!(r#"<span class="ml-3">• {}</span>"#, escape_html(domain)),
        None => String::new(),
    };

    format!(
        r#"
            <article class="bg-white rounded-lg border p-6 hover:shadow-lg transition-shadow" data-press-release>
                <div class="flex items-start justify-between mb-4">
                    <div class="flex items-center space-x-3">
                        <span class="inline-block px-2 py-1 bg-green-100 text-green-700 text-xs font-medium rounded">
                            VERIFIED
                        </span>
                        {industry}
                        <span class="text-sm text-gray-500">{timestamp}</span>
                    </div>
                </div>

                <h2 class="text-xl font-bold mb-3">
                    <a href="{url}" class="hover:text-blue-600">
                        {title}
                    </a>
                </h2>

                <p class="text-gray-600 mb-4 line-clamp-2">
                    {summary}
                </p>

                <div class="flex items-center justify-between">
                    <div class="flex items-center text-sm text-gray-500">
                        <span>✓ {company}</span>
                        {domain}
                    </div>
                    <a href="{url}" class="text-sm font-medium text-black hover:underline">
                        Read more →
                    </a>
                </div>
            </article>
        "#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_record() -> PressRelease {
        PressRelease {
            title: Some("Acme raises funds".into()),
            summary: Some("Series B led by Example Ventures.".into()),
            time_ago: Some("2 hours ago".into()),
            date: Some("2025-03-01".into()),
            url: Some("/news/acme.html".into()),
            company: Some("Acme Ltd".into()),
            domain: Some("acme.ie".into()),
            cro_number: Some("654321".into()),
            industry: Some("finance".into()),
            filename: Some("ignored-1700000000000.html".into()),
        }
    }

    #[test]
    fn test_compact_card_gates_fields() {
        let html = render_compact_card(&full_record());

        assert!(html.contains("Acme raises funds"));
        assert!(html.contains("2 hours ago"));
        assert!(!html.contains("2025-03-01"));
        assert!(html.contains("✓ Verified via acme.ie"));
        assert!(html.contains("• CRO: 654321"));
        assert!(html.contains(r#"href="/news/acme.html""#));
        assert!(!html.contains("finance"));
        assert!(!html.contains("<article"));
    }

    #[test]
    fn test_expanded_card_gates_fields() {
        let html = render_expanded_card(&full_record());

        assert!(html.contains("<article"));
        assert!(html.contains("finance"));
        assert!(html.contains("✓ Acme Ltd"));
        assert!(html.contains("• acme.ie"));
        assert!(!html.contains("654321"));
        assert!(!html.contains("CRO"));
        assert_eq!(html.matches(r#"href="/news/acme.html""#).count(), 2);
    }

    #[test]
    fn test_empty_record_uses_defaults() {
        let record = PressRelease::default();

        let compact = render_compact_card(&record);
        assert!(compact.contains("Press Release"));
        assert!(compact.contains(COMPACT_SUMMARY_PLACEHOLDER));
        assert!(compact.contains("✓ Verified via company domain"));
        assert!(compact.contains(r##"href="#""##));
        assert!(!compact.contains("CRO"));

        let expanded = render_expanded_card(&record);
        assert!(expanded.contains("Press Release"));
        assert!(expanded.contains(EXPANDED_SUMMARY_PLACEHOLDER));
        assert!(expanded.contains("✓ Verified Company"));
        assert!(!expanded.contains("uppercase\">"));
    }

    #[test]
    fn test_compact_falls_back_to_company_for_verification() {
        let record = PressRelease {
            company: Some("Beta Co".into()),
            ..Default::default()
        };
        assert!(render_compact_card(&record).contains("✓ Verified via Beta Co"));
    }

    #[test]
    fn test_title_derived_from_filename() {
        let record = PressRelease {
            filename: Some("my-company-launch-1700000000000.html".into()),
            ..Default::default()
        };
        assert!(render_expanded_card(&record).contains("My Company Launch"));
    }

    #[test]
    fn test_record_text_is_escaped() {
        let record = PressRelease {
            title: Some("<script>alert(1)</script>".into()),
            url: Some(r#"/x" onclick="y"#.into()),
            ..Default::default()
        };
        let html = render_compact_card(&record);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains(r#"href="/x&quot; onclick=&quot;y""#));
    }
}
