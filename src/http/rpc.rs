use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use http::StatusCode;
use serde::Deserialize;

use super::types::ApiError;
use crate::domain::{
    remote::TodoApi,
    todo::{CreateTodo, StatusFilter, Todo, TodoId, UpdateStatus},
};

pub struct AppState<A: TodoApi> { pub api: Arc<A> }

impl<A: TodoApi> Clone for AppState<A> {
    fn clone(&self) -> Self { Self { api: self.api.clone() } }
}

/// JSON procedures over a [`TodoApi`], one route per procedure name.
pub fn router<A: TodoApi>(state: AppState<A>) -> Router {
    Router::new()
        .route("/rpc/todo.getAll", post(get_all::<A>))
        .route("/rpc/todo.create", post(create::<A>))
        .route("/rpc/todo.delete", post(delete::<A>))
        .route("/rpc/todoStatus.update", post(update_status::<A>))
        .with_state(state)
}

#[derive(Deserialize)]
struct GetAllInput { #[serde(default)] statuses: Option<StatusFilter> }

#[derive(Deserialize)]
struct DeleteInput { id: TodoId }

async fn get_all<A: TodoApi>(State(state): State<AppState<A>>, Json(input): Json<GetAllInput>) -> Result<Json<Vec<Todo>>, ApiError> {
    let statuses = input.statuses.unwrap_or_default();
    Ok(Json(state.api.get_all(&statuses).await?))
}

async fn create<A: TodoApi>(State(state): State<AppState<A>>, Json(input): Json<CreateTodo>) -> Result<Json<Todo>, ApiError> {
    let todo = state.api.create(input).await?;
    tracing::info!(id = %todo.id, "todo created");
    Ok(Json(todo))
}

async fn delete<A: TodoApi>(State(state): State<AppState<A>>, Json(input): Json<DeleteInput>) -> Result<StatusCode, ApiError> {
    state.api.delete(input.id).await?;
    tracing::info!(id = %input.id, "todo deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn update_status<A: TodoApi>(State(state): State<AppState<A>>, Json(input): Json<UpdateStatus>) -> Result<Json<Todo>, ApiError> {
    Ok(Json(state.api.update_status(input).await?))
}
