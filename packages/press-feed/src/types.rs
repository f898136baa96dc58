//! Press release records as returned by the list endpoint
//!
//! The backend does not enforce a shape, so every field is optional and a
//! value of the wrong JSON type degrades to a string or to "absent" instead of
//! failing the whole list.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single press release record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PressRelease {
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub time_ago: Option<String>,
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub cro_number: Option<String>,
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl PressRelease {
    /// Build a record from one element of the `prs` array.
    ///
    /// Anything that is not an object becomes a record with no fields.
    pub fn from_value(value: &Value) -> Self {
        PressRelease::deserialize(value).unwrap_or_default()
    }

    pub fn title(&self) -> Option<&str> {
        present(&self.title)
    }

    pub fn summary(&self) -> Option<&str> {
        present(&self.summary)
    }

    /// `timeAgo` wins over `date`
    pub fn timestamp(&self) -> Option<&str> {
        present(&self.time_ago).or_else(|| present(&self.date))
    }

    pub fn url(&self) -> Option<&str> {
        present(&self.url)
    }

    pub fn company(&self) -> Option<&str> {
        present(&self.company)
    }

    pub fn domain(&self) -> Option<&str> {
        present(&self.domain)
    }

    pub fn cro_number(&self) -> Option<&str> {
        present(&self.cro_number)
    }

    pub fn industry(&self) -> Option<&str> {
        present(&self.industry)
    }

    pub fn filename(&self) -> Option<&str> {
        present(&self.filename)
    }
}

/// Extract the record list from a list endpoint body.
///
/// A missing or non-array `prs` field is an empty list.
pub fn records_from_body(body: &Value) -> Vec<PressRelease> {
    match body.get("prs") {
        Some(Value::Array(items)) => items.iter().map(PressRelease::from_value).collect(),
        _ => Vec::new(),
    }
}

/// Empty strings count as absent.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}
