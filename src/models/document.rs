use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A schema-less JSON object as stored in a collection.
pub type Document = Map<String, Value>;

/// Field under which the store keeps the identity it assigns at insert time.
pub const IDENTITY_FIELD: &str = "_id";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Repositories,
    Issues,
    PullRequests,
    Commits,
    Forks,
    Stars,
}

impl Collection {
    pub fn name(self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Repositories => "repositories",
            Collection::Issues => "issues",
            Collection::PullRequests => "pullRequests",
            Collection::Commits => "commits",
            Collection::Forks => "forks",
            Collection::Stars => "stars",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Counts reported by a filtered update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub matched: u64,
    pub modified: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,

    #[serde(rename = "updatedCount", skip_serializing_if = "Option::is_none")]
    pub updated_count: Option<u64>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            updated_count: None,
        }
    }

    pub fn with_count(message: impl Into<String>, count: u64) -> Self {
        Self {
            message: message.into(),
            updated_count: Some(count),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// JavaScript-style truthiness, used where a field counts as "missing" when
/// it is present but empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn collection_names_match_storage_layout() {
        assert_eq!(Collection::PullRequests.name(), "pullRequests");
        assert_eq!(Collection::Repositories.to_string(), "repositories");
    }

    #[test]
    fn message_response_omits_absent_count() {
        let plain = serde_json::to_value(MessageResponse::new("done")).unwrap();
        assert_eq!(plain, json!({ "message": "done" }));

        let counted = serde_json::to_value(MessageResponse::with_count("done", 2)).unwrap();
        assert_eq!(counted, json!({ "message": "done", "updatedCount": 2 }));
    }

    #[test]
    fn truthiness_follows_falsy_values() {
        for falsy in [json!(null), json!(false), json!(0), json!(""), json!(0.0)] {
            assert!(!is_truthy(&falsy), "{falsy} should be falsy");
        }
        for truthy in [json!("open"), json!(1), json!(true), json!([]), json!({})] {
            assert!(is_truthy(&truthy), "{truthy} should be truthy");
        }
    }
}
