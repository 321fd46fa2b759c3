//! HTTP handlers

pub mod health;
pub mod states;

pub use health::health;

use crate::storage::session;
use crate::AppState;
use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use hbnb_core::Store;
use tower_http::trace::TraceLayer;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/states_list", get(states::list))
        .layer(middleware::from_fn_with_state(state.clone(), unit_of_work))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs each request as its own unit of work and closes it once the
/// response is ready, whatever the handler returned.
async fn unit_of_work(State(state): State<AppState>, request: Request, next: Next) -> Response {
    session::scope(async move {
        let response = next.run(request).await;
        if let Err(e) = state.storage.close().await {
            tracing::warn!("Failed to close storage after request: {}", e);
        }
        response
    })
    .await
}
