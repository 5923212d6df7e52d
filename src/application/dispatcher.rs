use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error};

use crate::domain::remote::TodoApi;

use super::messages::{Completion, Dispatch, Request, Response};

/// Runs one request against the collaborator.
pub async fn execute<A: TodoApi + ?Sized>(api: &A, request: Request) -> Response {
    match request {
        Request::GetAll { statuses } => Response::Fetched(api.get_all(&statuses).await),
        Request::UpdateStatus(input) => Response::StatusUpdated(api.update_status(input).await),
        Request::Delete { id } => Response::Deleted(api.delete(id).await),
        Request::Create(input) => Response::Created(api.create(input).await),
    }
}

/// Issues requests on their own tasks and hands each completion back to the
/// event loop through a channel. Requests are never cancelled.
pub struct Dispatcher<A: TodoApi> {
    api: Arc<A>,
    tx: UnboundedSender<Completion>,
}

impl<A: TodoApi> Clone for Dispatcher<A> {
    fn clone(&self) -> Self { Self { api: self.api.clone(), tx: self.tx.clone() } }
}

impl<A: TodoApi> Dispatcher<A> {
    pub fn new(api: A) -> (Self, UnboundedReceiver<Completion>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { api: Arc::new(api), tx }, rx)
    }

    pub fn dispatch(&self, dispatch: Dispatch) {
        let Dispatch { target, request } = dispatch;
        debug!(?target, request = request.name(), "dispatching");
        let api = self.api.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let name = request.name();
            let fallback = request.clone();
            // A panicking call still has to complete, or its guard never releases.
            let response = match tokio::spawn(async move { execute(&*api, request).await }).await {
                Ok(response) => response,
                Err(e) => {
                    error!(request = name, error = %e, "request task failed");
                    fallback.failed(anyhow::anyhow!("{name} failed: {e}"))
                }
            };
            // The receiver is gone only when the event loop has exited.
            let _ = tx.send(Completion { target, response });
        });
    }
}
