use std::fmt;
use std::str::FromStr;

use crate::domain::error::TodoError;
use crate::domain::todo::{StatusFilter, TodoStatus};

use super::messages::{Dispatch, Response, Target};
use super::todo_list::TodoListView;

/// Identifies one tab: the aggregate view or a single status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKey {
    All,
    Status(TodoStatus),
}

impl ViewKey {
    pub fn label(self) -> &'static str {
        match self { ViewKey::All => "All", ViewKey::Status(s) => s.as_str() }
    }
}

impl fmt::Display for ViewKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self { ViewKey::All => f.write_str("all"), ViewKey::Status(s) => f.write_str(s.as_str()) }
    }
}

impl FromStr for ViewKey {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" { return Ok(ViewKey::All); }
        s.parse::<TodoStatus>().map(ViewKey::Status).map_err(|_| TodoError::InvalidView(s.to_string()))
    }
}

/// Hosts one [`TodoListView`] per status category plus an "all" view and
/// tracks which one is visible.
#[derive(Debug, Clone)]
pub struct FilterPage {
    views: Vec<(ViewKey, TodoListView)>,
    selected: usize,
}

impl FilterPage {
    pub fn new(statuses: &[TodoStatus]) -> Self {
        let all = statuses.iter().copied().collect::<StatusFilter>();
        let mut views = vec![(ViewKey::All, TodoListView::new(all))];
        views.extend(statuses.iter().map(|&s| (ViewKey::Status(s), TodoListView::new(StatusFilter::only(s)))));
        Self { views, selected: 0 }
    }

    pub fn keys(&self) -> impl Iterator<Item = ViewKey> + '_ { self.views.iter().map(|(k, _)| *k) }

    pub fn selected(&self) -> ViewKey { self.views[self.selected].0 }

    pub fn selected_index(&self) -> usize { self.selected }

    /// Switches the visible view. Purely local; no request is issued here.
    pub fn select_view(&mut self, key: ViewKey) -> Result<(), TodoError> {
        let idx = self.views.iter().position(|(k, _)| *k == key).ok_or_else(|| TodoError::InvalidView(key.to_string()))?;
        self.selected = idx;
        Ok(())
    }

    pub fn select_next(&mut self) { self.selected = (self.selected + 1) % self.views.len(); }

    pub fn select_prev(&mut self) { self.selected = (self.selected + self.views.len() - 1) % self.views.len(); }

    pub fn active(&self) -> &TodoListView { &self.views[self.selected].1 }

    pub fn active_mut(&mut self) -> &mut TodoListView { &mut self.views[self.selected].1 }

    pub fn view(&self, key: ViewKey) -> Option<&TodoListView> {
        self.views.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn view_mut(&mut self, key: ViewKey) -> Option<&mut TodoListView> {
        self.views.iter_mut().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// The fetch the visible view makes when it is shown.
    pub fn mount_active(&self) -> Dispatch {
        Dispatch { target: Target::List(self.selected()), request: self.active().fetch() }
    }

    /// Routes a response to the view that asked for it.
    pub fn apply(&mut self, key: ViewKey, response: Response) -> Option<Dispatch> {
        let request = self.view_mut(key)?.apply(response)?;
        Some(Dispatch { target: Target::List(key), request })
    }
}

impl Default for FilterPage {
    fn default() -> Self { Self::new(&TodoStatus::ALL) }
}
