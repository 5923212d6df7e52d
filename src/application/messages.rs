use crate::domain::todo::{CreateTodo, StatusFilter, Todo, TodoId, UpdateStatus};

use super::filter_page::ViewKey;

/// A call the event loop should make against the collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    GetAll { statuses: StatusFilter },
    UpdateStatus(UpdateStatus),
    Delete { id: TodoId },
    Create(CreateTodo),
}

impl Request {
    pub fn name(&self) -> &'static str {
        match self {
            Request::GetAll { .. } => "todo.getAll",
            Request::UpdateStatus(_) => "todoStatus.update",
            Request::Delete { .. } => "todo.delete",
            Request::Create(_) => "todo.create",
        }
    }

    /// The response of this request's kind carrying `error`.
    pub fn failed(&self, error: anyhow::Error) -> Response {
        match self {
            Request::GetAll { .. } => Response::Fetched(Err(error)),
            Request::UpdateStatus(_) => Response::StatusUpdated(Err(error)),
            Request::Delete { .. } => Response::Deleted(Err(error)),
            Request::Create(_) => Response::Created(Err(error)),
        }
    }
}

/// The collaborator's answer to a [`Request`], one variant per request kind.
#[derive(Debug)]
pub enum Response {
    Fetched(anyhow::Result<Vec<Todo>>),
    StatusUpdated(anyhow::Result<Todo>),
    Deleted(anyhow::Result<()>),
    Created(anyhow::Result<Todo>),
}

impl Response {
    pub fn error(&self) -> Option<&anyhow::Error> {
        match self {
            Response::Fetched(r) => r.as_ref().err(),
            Response::StatusUpdated(r) => r.as_ref().err(),
            Response::Deleted(r) => r.as_ref().err(),
            Response::Created(r) => r.as_ref().err(),
        }
    }
}

/// Which component issued a request and receives its completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    List(ViewKey),
    CreateForm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub target: Target,
    pub request: Request,
}

#[derive(Debug)]
pub struct Completion {
    pub target: Target,
    pub response: Response,
}
