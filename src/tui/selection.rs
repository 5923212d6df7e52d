use crate::domain::todo::TodoId;

/// Cursor over the visible rows that follows a todo by id across refetches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    index: usize,
    id: Option<TodoId>,
}

impl Selection {
    pub fn current(&self) -> Option<TodoId> { self.id }

    pub fn index(&self) -> Option<usize> { self.id.map(|_| self.index) }

    /// Re-anchors on the selected id; if it is gone, stays at the same
    /// position, clamped to the new length.
    pub fn sync(&mut self, ids: &[TodoId]) {
        if ids.is_empty() {
            self.id = None;
            return;
        }
        match self.id.and_then(|id| ids.iter().position(|&i| i == id)) {
            Some(pos) => self.index = pos,
            None => self.index = self.index.min(ids.len() - 1),
        }
        self.id = Some(ids[self.index]);
    }

    pub fn up(&mut self, ids: &[TodoId]) {
        self.sync(ids);
        if self.id.is_some() && self.index > 0 {
            self.index -= 1;
            self.id = Some(ids[self.index]);
        }
    }

    pub fn down(&mut self, ids: &[TodoId]) {
        self.sync(ids);
        if self.id.is_some() && self.index + 1 < ids.len() {
            self.index += 1;
            self.id = Some(ids[self.index]);
        }
    }

    pub fn reset(&mut self) { *self = Self::default(); }
}
