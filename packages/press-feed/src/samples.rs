//! Built-in records shown when the list endpoint cannot be reached

use crate::types::PressRelease;

fn sample(
    title: &str,
    company: &str,
    domain: &str,
    time_ago: &str,
    summary: &str,
    url: &str,
    industry: &str,
) -> PressRelease {
    PressRelease {
        title: Some(title.to_string()),
        company: Some(company.to_string()),
        domain: Some(domain.to_string()),
        time_ago: Some(time_ago.to_string()),
        summary: Some(summary.to_string()),
        url: Some(url.to_string()),
        industry: Some(industry.to_string()),
        ..Default::default()
    }
}

/// The three fallback records, in display order
pub fn sample_press_releases() -> Vec<PressRelease> {
    vec![
        sample(
            "TechCorp Ireland Announces €5M Expansion",
            "TechCorp Ireland",
            "techcorp.ie",
            "2 hours ago",
            "Leading software company creates 50 new jobs in Dublin tech hub.",
            "/news/sample-techcorp.html",
            "technology",
        ),
        sample(
            "GreenEnergy Solutions Wins EU Grant",
            "GreenEnergy Solutions",
            "greenenergy.ie",
            "4 hours ago",
            "Cork-based renewable energy firm secures €2M for innovative solar project.",
            "/news/sample-greenenergy.html",
            "renewable",
        ),
        sample(
            "FinTech Startup Raises €10M Series A",
            "FinTech Startup",
            "fintech.ie",
            "Yesterday",
            "Dublin fintech revolutionizing payments for SMEs across Europe.",
            "/news/sample-fintech.html",
            "finance",
        ),
    ]
}
