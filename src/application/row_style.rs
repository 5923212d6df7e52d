use crate::domain::todo::{Todo, TodoId, TodoStatus};

/// How a row is drawn, derived from its status alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowStyle {
    pub checked: bool,
    pub strikethrough: bool,
    pub darker: bool,
    /// Body text drawn in the subdued tone.
    pub muted: bool,
}

impl RowStyle {
    pub const PLAIN: RowStyle = RowStyle { checked: false, strikethrough: false, darker: false, muted: false };
    pub const DONE: RowStyle = RowStyle { checked: true, strikethrough: true, darker: true, muted: true };

    pub fn for_status(status: TodoStatus) -> Self {
        match status {
            TodoStatus::Pending => Self::PLAIN,
            TodoStatus::Completed => Self::DONE,
        }
    }
}

/// One rendered todo, keyed by its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row<'a> {
    pub id: TodoId,
    pub body: &'a str,
    pub style: RowStyle,
}

impl<'a> From<&'a Todo> for Row<'a> {
    fn from(todo: &'a Todo) -> Self {
        Row { id: todo.id, body: &todo.body, style: RowStyle::for_status(todo.status) }
    }
}
