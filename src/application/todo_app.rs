use tracing::debug;

use crate::domain::error::TodoError;
use crate::domain::todo::TodoId;

use super::create_form::CreateTodoForm;
use super::filter_page::{FilterPage, ViewKey};
use super::messages::{Completion, Dispatch, Target};

/// The page and the create form, with completions routed back to whichever
/// of them issued the request.
#[derive(Debug, Clone, Default)]
pub struct TodoApp {
    pub page: FilterPage,
    pub form: CreateTodoForm,
}

impl TodoApp {
    pub fn new(page: FilterPage) -> Self { Self { page, form: CreateTodoForm::default() } }

    /// Requests issued when the app is first shown.
    pub fn start(&self) -> Dispatch { self.page.mount_active() }

    pub fn select_view(&mut self, key: ViewKey) -> Result<Dispatch, TodoError> {
        self.page.select_view(key)?;
        Ok(self.page.mount_active())
    }

    pub fn next_view(&mut self) -> Dispatch {
        self.page.select_next();
        self.page.mount_active()
    }

    pub fn prev_view(&mut self) -> Dispatch {
        self.page.select_prev();
        self.page.mount_active()
    }

    pub fn toggle(&mut self, id: TodoId) -> Option<Dispatch> {
        let target = Target::List(self.page.selected());
        self.page.active_mut().toggle_status(id).map(|request| Dispatch { target, request })
    }

    pub fn delete(&mut self, id: TodoId) -> Option<Dispatch> {
        let target = Target::List(self.page.selected());
        self.page.active_mut().delete(id).map(|request| Dispatch { target, request })
    }

    pub fn submit(&mut self) -> Option<Dispatch> {
        self.form.submit().map(|request| Dispatch { target: Target::CreateForm, request })
    }

    pub fn apply(&mut self, completion: Completion) -> Option<Dispatch> {
        debug!(target_view = ?completion.target, failed = completion.response.error().is_some(), "request completed");
        match completion.target {
            Target::List(key) => self.page.apply(key, completion.response),
            Target::CreateForm => self.form.apply(completion.response).then(|| self.page.mount_active()),
        }
    }
}
