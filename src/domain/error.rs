use thiserror::Error;

use super::todo::TodoId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TodoError {
    #[error("todo {0} not found")]
    NotFound(TodoId),
    #[error("invalid status: {0}")]
    InvalidStatus(String),
    #[error("invalid view: {0}")]
    InvalidView(String),
    #[error("todo body must not be empty")]
    EmptyBody,
}
