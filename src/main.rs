use std::sync::Arc;

use mediaview::{
    common::{
        banner::{BannerInfo, print_banner},
        logger,
        types::AnyResult,
    },
    configs::Config,
    server::AppState,
    transport,
};
use tracing::info;

#[tokio::main]
async fn main() -> AnyResult<()> {
    let config = Config::load()?;
    logger::init(config.logging.as_ref());

    let state = Arc::new(AppState::from_config(config)?);

    let address = state.config.server.address();
    print_banner(&BannerInfo::default(), &address, &state.config.media.base_url);

    let app = transport::http_server::router(state);

    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("mediaview listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("mediaview stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
