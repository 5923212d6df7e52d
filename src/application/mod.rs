pub mod create_form;
pub mod dispatcher;
pub mod filter_page;
pub mod in_flight;
pub mod messages;
pub mod row_style;
pub mod todo_app;
pub mod todo_list;
mod todo_list_tests;
