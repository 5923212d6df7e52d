use tracing::warn;

use crate::domain::todo::CreateTodo;

use super::in_flight::InFlight;
use super::messages::{Request, Response};

/// Draft text for a new todo plus its own in-flight guard.
#[derive(Debug, Clone, Default)]
pub struct CreateTodoForm {
    draft: String,
    creating: InFlight,
    last_error: Option<String>,
}

impl CreateTodoForm {
    pub fn draft(&self) -> &str { &self.draft }

    pub fn is_creating(&self) -> bool { self.creating.is_active() }

    pub fn last_error(&self) -> Option<&str> { self.last_error.as_deref() }

    pub fn push(&mut self, c: char) { self.draft.push(c); }

    pub fn pop(&mut self) { self.draft.pop(); }

    pub fn clear(&mut self) { self.draft.clear(); }

    pub fn submit(&mut self) -> Option<Request> {
        let body = self.draft.trim();
        if body.is_empty() { return None; }
        if !self.creating.try_acquire() { return None; }
        Some(Request::Create(CreateTodo { body: body.to_string() }))
    }

    /// Returns true when the todo was created and lists should refetch.
    pub fn apply(&mut self, response: Response) -> bool {
        let Response::Created(result) = response else { return false };
        self.creating.release();
        match result {
            Ok(_) => {
                self.draft.clear();
                self.last_error = None;
                true
            }
            Err(e) => {
                warn!(error = %e, "creating todo failed");
                self.last_error = Some(e.to_string());
                false
            }
        }
    }
}
