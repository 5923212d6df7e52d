use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
}

/// Logs to stdout; used by the server.
pub fn init_stdout(directives: Option<&str>) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives))
        .init();
}

/// Logs to an appended file so the terminal client's screen stays clean.
pub fn init_file(directives: Option<&str>, path: &Path) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
