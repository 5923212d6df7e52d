use tracing::{debug, warn};

use crate::domain::todo::{StatusFilter, Todo, TodoId, UpdateStatus};

use super::in_flight::InFlight;
use super::messages::{Request, Response};
use super::row_style::Row;

/// View-model for one list of todos scoped by a status filter.
///
/// The list never edits its todos locally. Every mutation is a [`Request`];
/// a successful mutation answers with a fresh `GetAll`, and the todos are
/// replaced wholesale by whatever that fetch returns.
#[derive(Debug, Clone)]
pub struct TodoListView {
    statuses: StatusFilter,
    todos: Vec<Todo>,
    loaded: bool,
    toggling: InFlight,
    deleting: InFlight,
    last_error: Option<String>,
}

impl TodoListView {
    pub fn new(statuses: StatusFilter) -> Self {
        Self { statuses, todos: Vec::new(), loaded: false, toggling: InFlight::default(), deleting: InFlight::default(), last_error: None }
    }

    pub fn statuses(&self) -> &StatusFilter { &self.statuses }

    pub fn todos(&self) -> &[Todo] { &self.todos }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> + '_ { self.todos.iter().map(Row::from) }

    /// True once any fetch has succeeded.
    pub fn is_loaded(&self) -> bool { self.loaded }

    pub fn is_toggling(&self) -> bool { self.toggling.is_active() }

    pub fn is_deleting(&self) -> bool { self.deleting.is_active() }

    pub fn last_error(&self) -> Option<&str> { self.last_error.as_deref() }

    pub fn fetch(&self) -> Request { Request::GetAll { statuses: self.statuses.clone() } }

    /// Re-scopes the list; a fetch is only needed when the filter changed.
    pub fn set_statuses(&mut self, statuses: StatusFilter) -> Option<Request> {
        if statuses == self.statuses { return None; }
        self.statuses = statuses;
        Some(self.fetch())
    }

    pub fn toggle_status(&mut self, id: TodoId) -> Option<Request> {
        let status = self.todos.iter().find(|t| t.id == id)?.status;
        if !self.toggling.try_acquire() {
            debug!(%id, "toggle suppressed, another toggle is in flight");
            return None;
        }
        Some(Request::UpdateStatus(UpdateStatus { todo_id: id, status: status.toggled() }))
    }

    pub fn delete(&mut self, id: TodoId) -> Option<Request> {
        if !self.deleting.try_acquire() {
            debug!(%id, "delete suppressed, another delete is in flight");
            return None;
        }
        Some(Request::Delete { id })
    }

    /// Folds a collaborator response into the view. Returns the follow-up
    /// fetch when a mutation succeeded.
    pub fn apply(&mut self, response: Response) -> Option<Request> {
        match response {
            Response::Fetched(Ok(todos)) => {
                self.todos = todos;
                self.loaded = true;
                self.last_error = None;
                None
            }
            Response::Fetched(Err(e)) => {
                warn!(error = %e, "fetching todos failed");
                self.last_error = Some(e.to_string());
                None
            }
            Response::StatusUpdated(result) => {
                self.toggling.release();
                self.after_mutation(result.map(|_| ()))
            }
            Response::Deleted(result) => {
                self.deleting.release();
                self.after_mutation(result)
            }
            Response::Created(_) => None,
        }
    }

    fn after_mutation(&mut self, result: anyhow::Result<()>) -> Option<Request> {
        match result {
            Ok(()) => Some(self.fetch()),
            Err(e) => {
                warn!(error = %e, "todo mutation failed");
                self.last_error = Some(e.to_string());
                None
            }
        }
    }
}

impl Default for TodoListView {
    fn default() -> Self { Self::new(StatusFilter::default()) }
}
