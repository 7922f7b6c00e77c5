use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{Method, StatusCode, Uri},
};
use serde_json::Value;
use tracing::error;

use super::{fetch_error, navigation_error};
use crate::{
    common::ApiError, media::FetchError, navigation::HashLocation, server::AppState,
};

/// Any page path: resolve it in the route table and render the view model.
pub async fn render_page(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
) -> Result<Json<Value>, ApiError> {
    let path = uri.path();
    if method != Method::GET && method != Method::HEAD {
        return Err(ApiError::new(
            StatusCode::METHOD_NOT_ALLOWED,
            format!("{method} is not supported for pages"),
            path,
        ));
    }

    let location = HashLocation::from_parts(path, uri.query());
    let navigation = state
        .routes
        .navigate(location)
        .await
        .map_err(|e| navigation_error(&e, path))?;

    let view = navigation.view.name();
    navigation
        .view
        .render(&navigation.context)
        .await
        .map(Json)
        .map_err(|e| match e.downcast_ref::<FetchError>() {
            Some(fetch) => fetch_error(fetch, path),
            None => {
                error!("Rendering view `{}` failed: {}", view, e);
                ApiError::internal(e.to_string(), path)
            }
        })
}
