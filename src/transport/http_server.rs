use std::sync::Arc;

use axum::{Router, middleware, routing::get};
use tower_http::trace::TraceLayer;

use crate::{
    server::AppState,
    transport::{
        middleware::add_response_headers,
        routes::{info, manifests, pages},
    },
};

const API: &str = "/api";

/// Page routes are not listed here: every path outside `/api` and
/// `/version` goes through the route table, which owns the page bindings.
pub fn router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new().route("/manifests/{format}", get(manifests::get_manifest));

    Router::new()
        .nest(API, api_routes)
        .route("/version", get(info::get_version))
        .fallback(pages::render_page)
        .layer(middleware::from_fn(add_response_headers))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
