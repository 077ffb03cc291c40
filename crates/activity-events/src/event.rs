//! Activity Events
//!
//! One record per entry of the `/users/{username}/events` response. Only
//! the fields used for display are decoded; everything else is ignored.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::kind::EventKind;
use crate::payload::Payload;

/// Repository an event happened in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repo {
    #[serde(default)]
    pub name: Option<String>,
}

impl Repo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// A single public activity event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEvent {
    /// Wire type name, e.g. "PushEvent"
    #[serde(rename = "type")]
    pub event_type: String,
    /// Repository the event belongs to
    #[serde(default, deserialize_with = "lenient_repo")]
    pub repo: Option<Repo>,
    /// Kind-dependent details
    #[serde(default)]
    pub payload: Payload,
}

impl ActivityEvent {
    /// Creates an event of the given type with no repository and an empty payload.
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            repo: None,
            payload: Payload::default(),
        }
    }

    /// Sets the repository name.
    pub fn with_repo(mut self, name: impl Into<String>) -> Self {
        self.repo = Some(Repo::new(name));
        self
    }

    /// Sets the payload. Non-object values produce an empty payload.
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Payload::from(payload);
        self
    }

    /// Returns the kind this event's type name maps to.
    pub fn kind(&self) -> EventKind {
        EventKind::parse(&self.event_type)
    }

    /// Returns the repository name when present and non-empty.
    pub fn repo_name(&self) -> Option<&str> {
        self.repo
            .as_ref()
            .and_then(|repo| repo.name.as_deref())
            .filter(|name| !name.is_empty())
    }

    /// Serializes the event to a single JSON line.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a single event.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Deserializes a JSON array of events.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Decodes `repo`, treating `null` and non-object values as absent.
fn lenient_repo<'de, D>(deserializer: D) -> Result<Option<Repo>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Object(map) => Ok(Some(Repo {
            name: map.get("name").and_then(Value::as_str).map(str::to_string),
        })),
        _ => Ok(None),
    }
}
