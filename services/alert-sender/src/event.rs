//! Domain types handed to the sender by the upstream dispatcher

use std::fmt::Write as _;

use chrono::DateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Trigger state of a monitored metric.
///
/// Declaration order is the precedence used to pick the subject state of a
/// batch: a later variant dominates an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum State {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "WARN")]
    Warn,
    #[serde(rename = "ERROR")]
    Error,
    #[serde(rename = "NODATA")]
    NoData,
    #[serde(rename = "EXCEPTION")]
    Exception,
    #[serde(rename = "TEST")]
    Test,
}

impl State {
    pub fn as_str(&self) -> &'static str {
        match self {
            State::Ok => "OK",
            State::Warn => "WARN",
            State::Error => "ERROR",
            State::NoData => "NODATA",
            State::Exception => "EXCEPTION",
            State::Test => "TEST",
        }
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One observed state transition of a metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unix timestamp in seconds
    pub timestamp: i64,
    pub metric: String,
    #[serde(default)]
    pub value: Option<f64>,
    pub old_state: State,
    pub state: State,
    #[serde(default)]
    pub message: Option<String>,
}

impl Event {
    /// Render the timestamp in `tz` using a strftime `format`.
    ///
    /// Falls back to RFC 3339 when the format string is invalid and to the raw
    /// number when the timestamp is out of range.
    pub fn format_timestamp(&self, tz: &Tz, format: &str) -> String {
        let Some(utc) = DateTime::from_timestamp(self.timestamp, 0) else {
            return self.timestamp.to_string();
        };
        let local = utc.with_timezone(tz);
        let mut out = String::new();
        if write!(out, "{}", local.format(format)).is_err() {
            tracing::debug!("Invalid timestamp format '{}', using RFC 3339", format);
            return local.to_rfc3339();
        }
        out
    }

    pub fn metric_value(&self) -> String {
        match self.value {
            Some(v) => v.to_string(),
            None => "null".to_string(),
        }
    }

    /// The free-text message, if present and non-empty
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }
}

/// Chronologically ordered batch of events for one trigger
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationEvents(pub Vec<Event>);

impl NotificationEvents {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.0.iter()
    }

    /// Dominant new state across the batch, `None` for an empty batch
    pub fn subject_state(&self) -> Option<State> {
        self.iter().map(|e| e.state).max()
    }
}

impl From<Vec<Event>> for NotificationEvents {
    fn from(events: Vec<Event>) -> Self {
        Self(events)
    }
}

impl<'a> IntoIterator for &'a NotificationEvents {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Trigger metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriggerData {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub desc: String,
    /// Unique, in display order
    #[serde(default)]
    pub tags: Vec<String>,
}

impl TriggerData {
    /// All tags bracketed, e.g. `[db][prod]`
    pub fn tag_list(&self) -> String {
        self.bracketed_tags(self.tags.len())
    }

    /// The first `count` tags bracketed
    pub fn bracketed_tags(&self, count: usize) -> String {
        self.tags.iter().take(count).fold(String::new(), |mut out, tag| {
            out.push('[');
            out.push_str(tag);
            out.push(']');
            out
        })
    }
}

/// Notification destination
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactData {
    #[serde(default)]
    pub id: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    pub value: String,
}

/// A complete send request as produced by the dispatcher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationBatch {
    pub trigger: TriggerData,
    pub contact: ContactData,
    #[serde(default)]
    pub events: NotificationEvents,
    #[serde(default)]
    pub throttled: bool,
}
