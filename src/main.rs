use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cams_gateway::api::router;
use cams_gateway::backend::{BackendConfig, BackendHttpClient};
use cams_gateway::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "cams_gateway=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = BackendConfig::from_env();
    if config.api_base_url.is_none() {
        // 인증 요청은 요청 시점에 설정 오류로 응답함 (기동은 막지 않음)
        warn!("BACKEND_API_URL is not set; auth flows will report a configuration error");
    }

    let backend = Arc::new(BackendHttpClient::new(config.clone())?);
    let state = AppState { backend, config };

    let app = router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
