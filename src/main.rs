use std::sync::Arc;

use todo_tabs::{
    http::{routing, rpc},
    infrastructure::{config::Config, logging, sqlite_api::{prepare_sqlite_file, SqliteTodoApi}},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    logging::init_stdout(config.log_filter.as_deref());

    prepare_sqlite_file(&config.database_url)?;
    let api = SqliteTodoApi::connect(&config.database_url).await?;
    api.init().await?;
    let router = routing::app(rpc::router(rpc::AppState { api: Arc::new(api) }));

    let addr = config.bind_addr;
    tracing::info!(%addr, database_url = %config.database_url, "listening");
    axum::serve(tokio::net::TcpListener::bind(addr).await?, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal::ctrl_c;
    let _ = ctrl_c().await;
    tracing::info!("shutdown");
}
