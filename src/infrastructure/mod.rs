pub mod config;
pub mod logging;
pub mod sqlite_api;
