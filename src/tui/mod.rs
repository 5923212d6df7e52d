pub mod input;
pub mod render;
pub mod selection;

use tracing::warn;

use crate::application::{
    messages::{Completion, Dispatch},
    todo_app::TodoApp,
};
use crate::domain::todo::TodoId;

use input::{Action, Mode};
use selection::Selection;

pub enum Step {
    Continue(Option<Dispatch>),
    Quit,
}

/// Terminal-side state: the app plus the input mode and row cursor.
#[derive(Debug, Default)]
pub struct Ui {
    pub app: TodoApp,
    pub mode: Mode,
    selection: Selection,
}

impl Ui {
    pub fn new(app: TodoApp) -> Self { Self { app, mode: Mode::Browse, selection: Selection::default() } }

    pub fn selected_id(&self) -> Option<TodoId> { self.selection.current() }

    pub fn selected_index(&self) -> Option<usize> { self.selection.index() }

    fn visible_ids(&self) -> Vec<TodoId> { self.app.page.active().todos().iter().map(|t| t.id).collect() }

    pub fn handle(&mut self, action: Action) -> Step {
        let ids = self.visible_ids();
        let dispatch = match action {
            Action::Quit => return Step::Quit,
            Action::Up => { self.selection.up(&ids); None }
            Action::Down => { self.selection.down(&ids); None }
            Action::NextView => { self.selection.reset(); Some(self.app.next_view()) }
            Action::PrevView => { self.selection.reset(); Some(self.app.prev_view()) }
            Action::SelectView(idx) => {
                let key = self.app.page.keys().nth(idx);
                match key {
                Some(key) => match self.app.select_view(key) {
                    Ok(d) => { self.selection.reset(); Some(d) }
                    Err(e) => { warn!(error = %e, "cannot select view"); None }
                },
                None => None,
            }
            }
            Action::Toggle => self.selection.current().and_then(|id| self.app.toggle(id)),
            Action::Delete => self.selection.current().and_then(|id| self.app.delete(id)),
            Action::Compose => { self.mode = Mode::Compose; None }
            Action::Input(c) => { self.app.form.push(c); None }
            Action::Backspace => { self.app.form.pop(); None }
            Action::Submit => {
                self.mode = Mode::Browse;
                self.app.submit()
            }
            Action::Cancel => {
                self.mode = Mode::Browse;
                self.app.form.clear();
                None
            }
        };
        self.sync_selection();
        Step::Continue(dispatch)
    }

    pub fn complete(&mut self, completion: Completion) -> Option<Dispatch> {
        let follow_up = self.app.apply(completion);
        self.sync_selection();
        follow_up
    }

    fn sync_selection(&mut self) {
        let ids = self.visible_ids();
        self.selection.sync(&ids);
    }
}
