use crate::models::document::{is_truthy, Document};
use chrono::{DateTime, NaiveDate, SecondsFormat, TimeZone, Utc};
use serde::Deserialize;
use serde_json::Value;

/// The subset of a commit body that gets persisted. Everything else in the
/// request is dropped on deserialization.
#[derive(Debug, Deserialize, Clone)]
pub struct NewCommit {
    #[serde(rename = "commitId")]
    pub commit_id: Option<Value>,

    #[serde(rename = "repoId")]
    pub repo_id: Option<Value>,

    #[serde(rename = "userId")]
    pub user_id: Option<Value>,

    pub message: Option<Value>,

    #[serde(rename = "createdAt")]
    pub created_at: Option<Value>,
}

impl NewCommit {
    pub fn from_body(body: Document) -> serde_json::Result<Self> {
        serde_json::from_value(Value::Object(body))
    }

    /// Builds the stored document, or `None` when `createdAt` is present but
    /// cannot be read as a point in time.
    pub fn into_document(self, now: DateTime<Utc>) -> Option<Document> {
        let created_at = resolve_timestamp(self.created_at.as_ref(), now)?;

        let mut doc = Document::new();
        let fields = [
            ("commitId", self.commit_id),
            ("repoId", self.repo_id),
            ("userId", self.user_id),
            ("message", self.message),
        ];
        for (name, value) in fields {
            if let Some(v) = value {
                doc.insert(name.to_string(), v);
            }
        }
        doc.insert(
            "createdAt".to_string(),
            Value::String(created_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
        Some(doc)
    }
}

/// Falsy or absent means `now`; otherwise an RFC 3339 string, a bare
/// `YYYY-MM-DD` date (midnight UTC) or epoch milliseconds, fractions truncated.
pub fn resolve_timestamp(value: Option<&Value>, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let value = match value {
        Some(v) if is_truthy(v) => v,
        _ => return Some(now),
    };

    match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
                    .map(|dt| dt.and_utc())
            }),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single()),
        _ => None,
    }
}
