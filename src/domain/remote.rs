use async_trait::async_trait;

use super::todo::{CreateTodo, StatusFilter, Todo, TodoId, UpdateStatus};

/// The backend query/mutation surface the list views consume.
#[async_trait]
pub trait TodoApi: Send + Sync + 'static {
    async fn get_all(&self, statuses: &StatusFilter) -> anyhow::Result<Vec<Todo>>;
    async fn update_status(&self, input: UpdateStatus) -> anyhow::Result<Todo>;
    async fn delete(&self, id: TodoId) -> anyhow::Result<()>;
    async fn create(&self, input: CreateTodo) -> anyhow::Result<Todo>;
}
