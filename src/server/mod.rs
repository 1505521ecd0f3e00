pub mod handlers;
mod page;
mod types;

pub use handlers::AppState;

use crate::{Result, config::Config, model};
use axum::{Router, routing::get};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::estimate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // The server never starts without a model
    let model = model::load(&config.model.path).await?;

    let app = router(AppState::new(model, config.server.mode));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {} ({:?} mode)", addr, config.server.mode);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
