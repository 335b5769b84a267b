use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;

use apikit::logging::init_tracing;
use apikit::middleware::panic::install_panic_hook;
use apikit::router::init_router;
use apikit::state::init_app_state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let state = init_app_state().context("failed to load settings")?;
    init_tracing(&state.settings);
    install_panic_hook();

    let settings = state.settings.clone();
    settings.token();

    let app = init_router(state);

    let listener = TcpListener::bind(settings.addr)
        .await
        .with_context(|| format!("failed to bind {}", settings.addr))?;

    tracing::info!(
        project = %settings.project_name,
        version = %settings.project_version,
        "Server running on http://{}",
        settings.addr
    );
    tracing::info!("Swagger UI available at http://{}/api/docs", settings.addr);
    tracing::info!("ReDoc available at http://{}/api/redoc", settings.addr);
    tracing::info!("Scalar UI available at http://{}/api/scalar", settings.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
