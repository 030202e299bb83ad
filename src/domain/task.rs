use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Backend identifier of a task item (the `_id` field on the wire)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TaskId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Status column a task item belongs to.
///
/// Variants are declared in board order, which is also their `Ord` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Backlog,
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// All statuses in column order
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Backlog,
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    /// Bucket used for items whose status label is not recognized
    pub const DEFAULT: TaskStatus = TaskStatus::Backlog;

    /// Wire label, e.g. `IN_PROGRESS`
    pub fn label(&self) -> &'static str {
        match self {
            Self::Backlog => "BACKLOG",
            Self::Pending => "PENDING",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
        }
    }

    /// Column header text: the label with the underscore replaced by a space
    pub fn column_title(&self) -> String {
        self.label().replacen('_', " ", 1)
    }

    /// Human readable name used on dashboard cards
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::Pending => "Pending",
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
        }
    }

    /// Badge color shown next to a column's item count
    pub fn badge_color(&self) -> &'static str {
        match self {
            Self::Backlog => "#757575",
            Self::Pending => "#ff9800",
            Self::InProgress => "#03a9f4",
            Self::Completed => "#4caf50",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for TaskStatus {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Column ids from a UI may be "in progress" or "in-progress"
        let normalized = s.trim().to_uppercase().replace([' ', '-'], "_");
        TaskStatus::ALL
            .into_iter()
            .find(|status| status.label() == normalized)
            .ok_or_else(|| crate::error::BoardError::UnknownStatus(s.to_string()))
    }
}

/// Status field as carried by a task item.
///
/// Only exact wire labels are recognized. Anything else (other casing,
/// `null`, a missing field, a non-string value) is kept as raw text so it is
/// never rewritten on the backend; such items are shown in the default column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum StatusLabel {
    Known(TaskStatus),
    Unrecognized(String),
}

impl StatusLabel {
    /// Column this label places an item in
    pub fn bucket(&self) -> TaskStatus {
        match self {
            Self::Known(status) => *status,
            Self::Unrecognized(_) => TaskStatus::DEFAULT,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(status) => status.label(),
            Self::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl From<TaskStatus> for StatusLabel {
    fn from(status: TaskStatus) -> Self {
        Self::Known(status)
    }
}

impl From<String> for StatusLabel {
    fn from(raw: String) -> Self {
        match TaskStatus::ALL.into_iter().find(|status| status.label() == raw) {
            Some(status) => Self::Known(status),
            None => Self::Unrecognized(raw),
        }
    }
}

impl Default for StatusLabel {
    /// A missing status
    fn default() -> Self {
        Self::Unrecognized(String::new())
    }
}

impl<'de> Deserialize<'de> for StatusLabel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
            Some(serde_json::Value::String(raw)) => Self::from(raw),
            Some(other) => Self::Unrecognized(other.to_string()),
            None => Self::default(),
        })
    }
}

impl From<StatusLabel> for String {
    fn from(label: StatusLabel) -> Self {
        match label {
            StatusLabel::Known(status) => status.label().to_string(),
            StatusLabel::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A task item as served by the `/todos/` endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItem {
    #[serde(rename = "_id")]
    pub id: TaskId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub status: StatusLabel,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "due_date")]
    pub due_date: Option<NaiveDate>,
}

impl TaskItem {
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            status: StatusLabel::Known(status),
            due_date: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Column this item is shown in
    pub fn bucket(&self) -> TaskStatus {
        self.status.bucket()
    }

    /// Due date caption for a card, e.g. `Due: 1/15/2026`
    pub fn due_caption(&self) -> Option<String> {
        self.due_date
            .map(|d| format!("Due: {}/{}/{}", d.month(), d.day(), d.year()))
    }
}

/// Lenient due date codec.
///
/// Accepts a plain date, an RFC 3339 timestamp or a naive ISO timestamp.
/// Anything else is dropped with a warning rather than failing the whole
/// payload.
mod due_date {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(|s| {
            let parsed = parse(s);
            if parsed.is_none() {
                tracing::warn!(value = s, "ignoring unparsable due date");
            }
            parsed
        }))
    }

    pub(super) fn parse(s: &str) -> Option<NaiveDate> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
            .or_else(|| {
                NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
                    .ok()
                    .map(|dt| dt.date())
            })
    }
}
