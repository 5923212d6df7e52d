use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use sqlx::{sqlite::{SqlitePoolOptions, SqliteRow}, Pool, Row, Sqlite};

use crate::domain::{
    error::TodoError,
    remote::TodoApi,
    todo::{CreateTodo, StatusFilter, Todo, TodoId, TodoStatus, UpdateStatus},
};

/// Stored status with anything unrecognized read as pending.
const STATUS_EXPR: &str = "CASE WHEN status IN ('pending', 'completed') THEN status ELSE 'pending' END";

/// Collaborator backed by a SQLite table, used in-process by the terminal
/// client and behind the RPC server.
#[derive(Clone)]
pub struct SqliteTodoApi {
    pool: Arc<Pool<Sqlite>>,
}

impl SqliteTodoApi {
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = pool_options(database_url).connect(database_url).await?;
        Ok(Self { pool: Arc::new(pool) })
    }

    pub async fn init(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS todos (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                body TEXT NOT NULL,
                status TEXT NOT NULL
            )",
        )
        .execute(&*self.pool)
        .await?;
        Ok(())
    }

    async fn get(&self, id: TodoId) -> Result<Option<Todo>> {
        let sql = format!("SELECT id, body, {STATUS_EXPR} AS status FROM todos WHERE id = ?1");
        let row = sqlx::query(&sql)
            .bind(id.0)
            .fetch_optional(&*self.pool)
            .await?;
        Ok(row.map(row_to_todo))
    }
}

#[async_trait]
impl TodoApi for SqliteTodoApi {
    async fn get_all(&self, statuses: &StatusFilter) -> Result<Vec<Todo>> {
        if statuses.is_empty() { return Ok(Vec::new()); }
        let placeholders = statuses.iter().map(|_| "?").collect::<Vec<_>>().join(", ");
        let sql = format!("SELECT id, body, {STATUS_EXPR} AS status FROM todos WHERE {STATUS_EXPR} IN ({placeholders}) ORDER BY id ASC");
        let mut query = sqlx::query(&sql);
        for status in statuses.iter() {
            query = query.bind(status.as_str());
        }
        let rows = query.fetch_all(&*self.pool).await?;
        Ok(rows.into_iter().map(row_to_todo).collect())
    }

    async fn update_status(&self, input: UpdateStatus) -> Result<Todo> {
        let result = sqlx::query("UPDATE todos SET status = ?2 WHERE id = ?1")
            .bind(input.todo_id.0)
            .bind(input.status.as_str())
            .execute(&*self.pool)
            .await?;
        if result.rows_affected() == 0 { return Err(TodoError::NotFound(input.todo_id).into()); }
        self.get(input.todo_id).await?.ok_or_else(|| TodoError::NotFound(input.todo_id).into())
    }

    async fn delete(&self, id: TodoId) -> Result<()> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?1")
            .bind(id.0)
            .execute(&*self.pool)
            .await?;
        if result.rows_affected() == 0 { return Err(TodoError::NotFound(id).into()); }
        Ok(())
    }

    async fn create(&self, input: CreateTodo) -> Result<Todo> {
        let body = input.body.trim();
        if body.is_empty() { return Err(TodoError::EmptyBody.into()); }
        let status = TodoStatus::Pending;
        let result = sqlx::query("INSERT INTO todos (body, status) VALUES (?1, ?2)")
            .bind(body)
            .bind(status.as_str())
            .execute(&*self.pool)
            .await?;
        Ok(Todo { id: TodoId(result.last_insert_rowid()), body: body.to_string(), status })
    }
}

fn row_to_todo(row: SqliteRow) -> Todo {
    let id: i64 = row.get("id");
    let body: String = row.get("body");
    let status: String = row.get("status");
    Todo { id: TodoId(id), body, status: TodoStatus::from_stored(&status) }
}

fn pool_options(database_url: &str) -> SqlitePoolOptions {
    if !is_memory(database_url) { return SqlitePoolOptions::new().max_connections(5); }
    // Each connection to an in-memory database is a separate database, and
    // the one pooled connection must never be recycled.
    SqlitePoolOptions::new().max_connections(1).min_connections(1).idle_timeout(None).max_lifetime(None)
}

fn is_memory(database_url: &str) -> bool {
    database_url.starts_with("sqlite::memory:") || database_url.contains("mode=memory")
}

/// Creates the SQLite file and its parent directories for file-backed URLs.
pub fn prepare_sqlite_file(database_url: &str) -> Result<()> {
    if is_memory(database_url) { return Ok(()); }
    if let Some(path) = database_url.strip_prefix("sqlite://") {
        let path = path.split('?').next().unwrap_or(path);
        // On Windows, absolute paths may look like /C:/path
        let path = if cfg!(windows) && path.len() >= 3 && path.as_bytes()[0] == b'/' && path.as_bytes()[2] == b':' { &path[1..] } else { path };
        use std::{fs, fs::OpenOptions, path::Path};
        let p = Path::new(path);
        if let Some(parent) = p.parent() { if !parent.as_os_str().is_empty() { fs::create_dir_all(parent)?; } }
        if !p.exists() { OpenOptions::new().create(true).append(true).open(p)?; }
    }
    Ok(())
}
