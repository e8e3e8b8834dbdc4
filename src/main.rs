use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;
use tracing_subscriber::EnvFilter;

use expert_link::config::Config;
use expert_link::sheets::SheetsClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Load config
    let config = Config::from_env().expect("Failed to load configuration");

    // Init tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    tracing::info!("Starting expert-link");

    let store = Arc::new(SheetsClient::new(
        config.sheets_api_base.clone(),
        config.spreadsheet_id.clone(),
        config.sheets_access_token.clone(),
    ));

    // Output of the bundle-styles binary, inlined into the form page.
    let inline_css = match std::fs::read_to_string(&config.styles_path) {
        Ok(css) => css,
        Err(_) => {
            tracing::warn!("No bundled stylesheet at {}", config.styles_path);
            String::new()
        }
    };

    let addr = SocketAddr::new(config.host, config.port);
    let app = expert_link::build_app(store, config, inline_css);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
