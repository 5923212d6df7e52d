#[cfg(test)]
mod tests {
    use super::super::messages::{Request, Response};
    use super::super::row_style::RowStyle;
    use super::super::todo_list::TodoListView;
    use crate::domain::todo::{StatusFilter, Todo, TodoId, TodoStatus, UpdateStatus};

    fn todo(id: i64, body: &str, status: TodoStatus) -> Todo {
        Todo { id: TodoId(id), body: body.into(), status }
    }

    fn loaded(statuses: StatusFilter, todos: Vec<Todo>) -> TodoListView {
        let mut view = TodoListView::new(statuses);
        assert_eq!(view.apply(Response::Fetched(Ok(todos))), None);
        view
    }

    #[test]
    fn default_filter_is_pending_only() {
        let view = TodoListView::default();
        assert_eq!(view.fetch(), Request::GetAll { statuses: StatusFilter::only(TodoStatus::Pending) });
    }

    #[test]
    fn rows_reflect_status() {
        let view = loaded(StatusFilter::all(), vec![todo(1, "A", TodoStatus::Pending), todo(2, "B", TodoStatus::Completed)]);
        let rows: Vec<_> = view.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].id, rows[0].body, rows[0].style), (TodoId(1), "A", RowStyle::PLAIN));
        assert_eq!((rows[1].id, rows[1].body, rows[1].style), (TodoId(2), "B", RowStyle::DONE));
        assert!(rows[1].style.checked && rows[1].style.strikethrough && rows[1].style.darker);
    }

    #[test]
    fn rows_are_exactly_what_the_collaborator_returned() {
        // A completed todo in a pending-only list is still shown: no client-side filtering.
        let view = loaded(StatusFilter::default(), vec![todo(4, "odd", TodoStatus::Completed)]);
        assert_eq!(view.todos(), &[todo(4, "odd", TodoStatus::Completed)]);
    }

    #[test]
    fn toggle_requests_opposite_status_then_refetches() {
        let mut view = loaded(StatusFilter::default(), vec![todo(5, "x", TodoStatus::Pending)]);
        let req = view.toggle_status(TodoId(5));
        assert_eq!(req, Some(Request::UpdateStatus(UpdateStatus { todo_id: TodoId(5), status: TodoStatus::Completed })));
        assert!(view.is_toggling());

        let follow_up = view.apply(Response::StatusUpdated(Ok(todo(5, "x", TodoStatus::Completed))));
        assert_eq!(follow_up, Some(view.fetch()));
        assert!(!view.is_toggling());
    }

    #[test]
    fn second_toggle_is_suppressed_across_rows_until_resolution() {
        let mut view = loaded(StatusFilter::all(), vec![todo(1, "a", TodoStatus::Pending), todo(2, "b", TodoStatus::Completed)]);
        assert!(view.toggle_status(TodoId(1)).is_some());
        assert_eq!(view.toggle_status(TodoId(1)), None);
        assert_eq!(view.toggle_status(TodoId(2)), None);

        assert_eq!(view.apply(Response::StatusUpdated(Err(anyhow::anyhow!("boom")))), None);
        assert_eq!(view.last_error(), Some("boom"));
        assert_eq!(
            view.toggle_status(TodoId(2)),
            Some(Request::UpdateStatus(UpdateStatus { todo_id: TodoId(2), status: TodoStatus::Pending }))
        );
    }

    #[test]
    fn toggling_an_unknown_id_does_nothing() {
        let mut view = loaded(StatusFilter::default(), vec![]);
        assert_eq!(view.toggle_status(TodoId(9)), None);
        assert!(!view.is_toggling());
    }

    #[test]
    fn delete_guard_is_independent_of_toggle_guard() {
        let mut view = loaded(StatusFilter::default(), vec![todo(7, "x", TodoStatus::Pending), todo(8, "y", TodoStatus::Pending)]);
        assert!(view.toggle_status(TodoId(8)).is_some());
        assert_eq!(view.delete(TodoId(7)), Some(Request::Delete { id: TodoId(7) }));
        assert_eq!(view.delete(TodoId(8)), None);
    }

    #[test]
    fn delete_success_refetches_and_next_render_drops_the_row() {
        let mut view = loaded(StatusFilter::default(), vec![todo(7, "x", TodoStatus::Pending), todo(8, "y", TodoStatus::Pending)]);
        view.delete(TodoId(7));
        assert_eq!(view.apply(Response::Deleted(Ok(()))), Some(view.fetch()));
        assert!(!view.is_deleting());

        view.apply(Response::Fetched(Ok(vec![todo(8, "y", TodoStatus::Pending)])));
        assert!(view.rows().all(|r| r.id != TodoId(7)));
    }

    #[test]
    fn failed_fetch_keeps_last_successful_list() {
        let mut view = loaded(StatusFilter::default(), vec![todo(1, "a", TodoStatus::Pending)]);
        view.apply(Response::Fetched(Err(anyhow::anyhow!("offline"))));
        assert_eq!(view.todos().len(), 1);
        assert_eq!(view.last_error(), Some("offline"));

        let mut fresh = TodoListView::default();
        fresh.apply(Response::Fetched(Err(anyhow::anyhow!("offline"))));
        assert!(fresh.todos().is_empty());
        assert!(!fresh.is_loaded());
    }

    #[test]
    fn last_fetch_to_resolve_wins() {
        let mut view = loaded(StatusFilter::all(), vec![]);
        view.apply(Response::Fetched(Ok(vec![todo(1, "new", TodoStatus::Completed)])));
        view.apply(Response::Fetched(Ok(vec![todo(1, "new", TodoStatus::Pending)])));
        assert_eq!(view.todos()[0].status, TodoStatus::Pending);
    }

    #[test]
    fn changing_filter_refetches_once() {
        let mut view = TodoListView::default();
        assert_eq!(view.set_statuses(StatusFilter::default()), None);
        let req = view.set_statuses(StatusFilter::all());
        assert_eq!(req, Some(Request::GetAll { statuses: StatusFilter::all() }));
    }
}
