//! Event Payloads
//!
//! The payload shape depends on the event kind and is never validated.
//! Accessors return `None` (or zero) when a field is absent or has an
//! unexpected type.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Kind-dependent details attached to an activity event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct Payload(Map<String, Value>);

impl Payload {
    /// Creates an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw value for a key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns a string field, if present and a string.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Number of entries in `commits`, or 0 when it is missing or not an array.
    pub fn commit_count(&self) -> usize {
        self.get("commits")
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }

    /// The `action` field (e.g. "opened", "closed" on issue events).
    pub fn action(&self) -> Option<&str> {
        self.str_field("action")
    }

    /// The `ref_type` field on create events ("branch", "tag", "repository").
    pub fn ref_type(&self) -> Option<&str> {
        self.str_field("ref_type")
    }

    /// The `member.login` field on member events.
    pub fn member_login(&self) -> Option<&str> {
        self.get("member")
            .and_then(|member| member.get("login"))
            .and_then(Value::as_str)
    }

    /// Returns true if the payload has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Payload(map),
            _ => Payload::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_commit_count() {
        let payload = Payload::from(json!({ "commits": [1, 2, 3] }));
        assert_eq!(payload.commit_count(), 3);

        let empty = Payload::from(json!({ "commits": [] }));
        assert_eq!(empty.commit_count(), 0);
    }

    #[test]
    fn test_commit_count_missing_or_wrong_type() {
        assert_eq!(Payload::new().commit_count(), 0);
        assert_eq!(Payload::from(json!({ "commits": null })).commit_count(), 0);
        assert_eq!(Payload::from(json!({ "commits": "abc" })).commit_count(), 0);
        assert_eq!(Payload::from(json!({ "commits": 5 })).commit_count(), 0);
    }

    #[test]
    fn test_string_accessors() {
        let payload = Payload::from(json!({
            "action": "opened",
            "ref_type": "branch",
            "member": { "login": "octocat" }
        }));

        assert_eq!(payload.action(), Some("opened"));
        assert_eq!(payload.ref_type(), Some("branch"));
        assert_eq!(payload.member_login(), Some("octocat"));
    }

    #[test]
    fn test_string_accessors_reject_non_strings() {
        let payload = Payload::from(json!({
            "action": 7,
            "ref_type": null,
            "member": "octocat"
        }));

        assert_eq!(payload.action(), None);
        assert_eq!(payload.ref_type(), None);
        assert_eq!(payload.member_login(), None);
    }

    #[test]
    fn test_non_object_values_become_empty() {
        assert!(Payload::from(Value::Null).is_empty());
        assert!(Payload::from(json!([1, 2])).is_empty());
        assert!(Payload::from(json!("text")).is_empty());
    }

    #[test]
    fn test_deserialize_null_payload() {
        let payload: Payload = serde_json::from_str("null").unwrap();
        assert!(payload.is_empty());

        let payload: Payload = serde_json::from_str(r#"{"action":"closed"}"#).unwrap();
        assert_eq!(payload.action(), Some("closed"));
    }
}
