use std::sync::Arc;

use axum::{
    Json,
    extract::{OriginalUri, Path, State},
};

use super::fetch_error;
use crate::{common::ApiError, media::ManifestResponse, server::AppState};

/// GET /api/manifests/{format}
///
/// Relays the upstream manifest as-is.
pub async fn get_manifest(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    Path(format): Path<String>,
) -> Result<Json<ManifestResponse>, ApiError> {
    tracing::debug!("GET /api/manifests/{}", format);
    state
        .source
        .fetch_named(&format)
        .await
        .map(Json)
        .map_err(|e| fetch_error(&e, uri.path()))
}
