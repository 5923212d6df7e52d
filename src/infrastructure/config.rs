use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://todos.db";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_LOG_FILE: &str = "todo-tabs.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// `EnvFilter` directives; `None` falls back to `RUST_LOG`, then `info`.
    pub log_filter: Option<String>,
    pub log_file: PathBuf,
}

impl Config {
    /// Reads `.env` (if present) and then the process environment.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr.parse::<SocketAddr>().with_context(|| format!("invalid BIND_ADDR {bind_addr:?}"))?;
        let log_filter = lookup("TODO_LOG").or_else(|| lookup("RUST_LOG"));
        let log_file = lookup("TODO_LOG_FILE").map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));
        Ok(Self { database_url, bind_addr, log_filter, log_file })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let c = config(&[]).unwrap();
        assert_eq!(c.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(c.bind_addr, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(c.log_filter, None);
        assert_eq!(c.log_file, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn todo_log_wins_over_rust_log() {
        let c = config(&[("RUST_LOG", "warn"), ("TODO_LOG", "todo_tabs=debug")]).unwrap();
        assert_eq!(c.log_filter.as_deref(), Some("todo_tabs=debug"));
    }

    #[test]
    fn bad_bind_addr_is_an_error() {
        assert!(config(&[("BIND_ADDR", "nowhere")]).is_err());
    }
}
