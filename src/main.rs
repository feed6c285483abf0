use std::sync::Arc;

use tokio::signal;

use dotenvy::dotenv;

use form_relay_api::app::create_app;
use form_relay_api::config::Config;
use form_relay_api::email::EmailService;
use form_relay_api::state::SharedAppState;
use form_relay_api::utils::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  init_tracing();

  let config = Config::from_env()?;

  let email_service = EmailService::new(config.smtp.clone())?;
  let app_state = SharedAppState::new(Arc::new(email_service), &config);
  let app = create_app(app_state);

  let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;

  tracing::info!("Server running on port {}", config.port);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = signal::ctrl_c().await {
      tracing::error!("Failed to install Ctrl+C handler: {}", e);
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
      Ok(mut stream) => {
        stream.recv().await;
      }
      Err(e) => {
        tracing::error!("Failed to install signal handler: {}", e);
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  tracing::info!("Received termination signal, shutting down gracefully...");
}
