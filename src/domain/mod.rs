pub mod error;
pub mod remote;
pub mod todo;
