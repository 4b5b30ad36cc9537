//! nightswitch server binary.
//!
//! Serves the appearance page and its stylesheet; the theme logic itself
//! runs client-side against localStorage and the body class list.

#[cfg(target_arch = "wasm32")]
fn main() {
    // Hydrate the server-rendered page; the theme provider applies the
    // resolved marker during its first client-side effect.
    dioxus::launch(nightswitch::app::App);
}

#[cfg(all(feature = "server", not(target_arch = "wasm32")))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::{routing::get, Router};
    use std::net::SocketAddr;
    use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    use nightswitch::{api, config, ui};

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nightswitch=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Starting nightswitch v{} ({})",
        env!("NIGHTSWITCH_VERSION"),
        env!("NIGHTSWITCH_GIT_SHA")
    );

    let config = config::load_config()?;
    tracing::info!("Configuration loaded, port: {}", config.port);

    let state = api::AppState::new();

    let app = Router::new()
        .route("/", get(ui::home_page))
        .route("/assets/style.css", get(ui::style_css))
        .route("/status", get(api::status_handler))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
#[cfg(all(feature = "server", not(target_arch = "wasm32")))]
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
