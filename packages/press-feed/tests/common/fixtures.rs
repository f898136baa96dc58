use press_feed::PressRelease;

/// A record with only a title and an industry
pub fn titled(title: &str, industry: &str) -> PressRelease {
    PressRelease {
        title: Some(title.to_string()),
        industry: Some(industry.to_string()),
        ..Default::default()
    }
}

/// Numbered records `Release 1`..`Release n`
pub fn numbered(n: usize) -> Vec<PressRelease> {
    (1..=n)
        .map(|i| PressRelease {
            title: Some(format!("Release {i}")),
            company: Some(format!("Company {i}")),
            url: Some(format!("/news/release-{i}.html")),
            ..Default::default()
        })
        .collect()
}
