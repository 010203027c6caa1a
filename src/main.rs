use std::sync::Arc;

use tokio::signal;

use dotenvy::dotenv;

use loufranktv_api::app::create_app;
use loufranktv_api::config::AppConfig;
use loufranktv_api::email::{ResendClient, RESEND_API_BASE};
use loufranktv_api::state::SharedAppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::fmt::init();

  let config = AppConfig::from_env();
  if !config.email_configured() {
    tracing::warn!("RESEND_API_KEY not set; email endpoints will answer with a not-configured response");
  }

  let provider = Arc::new(ResendClient::new(
    config.resend_api_key.clone().unwrap_or_default(),
    RESEND_API_BASE,
  ));

  let bind_addr = config.bind_addr.clone();
  let state = SharedAppState::new(config, provider);
  let app = create_app(state);

  let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

  tracing::info!("Server running on http://{}", bind_addr);

  axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
  };

  #[cfg(unix)]
  let terminate = async {
    signal::unix::signal(signal::unix::SignalKind::terminate())
      .expect("Failed to install signal handler")
      .recv()
      .await;
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  tracing::info!("Received termination signal, shutting down gracefully...");
}
