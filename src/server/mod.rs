//! HTTP service - read-only JSON endpoints over a shared catalog

use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use crate::catalog::Catalog;
use crate::ui::Icons;

pub mod routes;

/// Default cap on search results when the request gives no limit
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Server state
pub struct AppState {
    pub catalog: Catalog,
    pub search_limit: usize,
}

impl AppState {
    pub fn new(catalog: Catalog, search_limit: Option<usize>) -> Self {
        Self {
            catalog,
            search_limit: search_limit.unwrap_or(DEFAULT_SEARCH_LIMIT),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/topics", get(routes::list_topics))
        .route("/topics/{id}", get(routes::get_topic))
        .route("/categories", get(routes::list_categories))
        .route("/categories/{category}", get(routes::list_category))
        .route("/search", get(routes::search))
        .route("/questions", get(routes::questions))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start_server(port: u16, state: AppState) -> anyhow::Result<()> {
    let topics = state.catalog.len();
    let app = router(Arc::new(state));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Serving {} topics on {}", topics, addr);
    println!("{} Server running at http://{}", Icons::GLOBE, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
