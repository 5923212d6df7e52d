use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::error::TodoError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct TodoId(pub i64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum TodoStatus { Pending, Completed }

impl TodoStatus {
    /// Every known status, in tab order.
    pub const ALL: [TodoStatus; 2] = [TodoStatus::Pending, TodoStatus::Completed];

    pub fn as_str(self) -> &'static str {
        match self { TodoStatus::Pending => "pending", TodoStatus::Completed => "completed" }
    }

    pub fn toggled(self) -> Self {
        match self { TodoStatus::Pending => TodoStatus::Completed, TodoStatus::Completed => TodoStatus::Pending }
    }

    pub fn is_completed(self) -> bool { matches!(self, TodoStatus::Completed) }

    /// Lenient decoding for values read back from storage or the wire.
    /// Anything unrecognized is shown as pending.
    pub fn from_stored(s: &str) -> Self { s.parse().unwrap_or(TodoStatus::Pending) }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for TodoStatus {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TodoStatus::Pending),
            "completed" => Ok(TodoStatus::Completed),
            other => Err(TodoError::InvalidStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub body: String,
    #[serde(deserialize_with = "lenient_status")]
    pub status: TodoStatus,
}

fn lenient_status<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TodoStatus, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Ok(TodoStatus::from_stored(&raw))
}

/// The set of statuses a list view asks the collaborator for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct StatusFilter(BTreeSet<TodoStatus>);

impl StatusFilter {
    pub fn all() -> Self { Self(TodoStatus::ALL.into_iter().collect()) }

    pub fn only(status: TodoStatus) -> Self { Self(BTreeSet::from([status])) }

    pub fn none() -> Self { Self(BTreeSet::new()) }

    pub fn contains(&self, status: TodoStatus) -> bool { self.0.contains(&status) }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = TodoStatus> + '_ { self.0.iter().copied() }
}

impl Default for StatusFilter {
    fn default() -> Self { Self::only(TodoStatus::Pending) }
}

impl FromIterator<TodoStatus> for StatusFilter {
    fn from_iter<I: IntoIterator<Item = TodoStatus>>(iter: I) -> Self { Self(iter.into_iter().collect()) }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatus {
    pub todo_id: TodoId,
    pub status: TodoStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTodo {
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_stored_status_reads_as_pending() {
        let todo: Todo = serde_json::from_str(r#"{"id":3,"body":"x","status":"archived"}"#).unwrap();
        assert_eq!(todo.status, TodoStatus::Pending);
    }

    #[test]
    fn strict_status_rejects_unknown_values() {
        assert!(matches!("done".parse::<TodoStatus>(), Err(TodoError::InvalidStatus(s)) if s == "done"));
        assert!(serde_json::from_str::<UpdateStatus>(r#"{"todoId":1,"status":"done"}"#).is_err());
    }

    #[test]
    fn filter_defaults_to_pending_and_serializes_as_list() {
        let filter = StatusFilter::default();
        assert!(filter.contains(TodoStatus::Pending));
        assert!(!filter.contains(TodoStatus::Completed));
        assert_eq!(serde_json::to_string(&StatusFilter::all()).unwrap(), r#"["pending","completed"]"#);
    }
}
