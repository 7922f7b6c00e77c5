/// GET /version
pub async fn get_version() -> String {
    tracing::debug!("GET /version");
    env!("CARGO_PKG_VERSION").to_string()
}
