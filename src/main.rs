mod catalog;
mod config;
mod grid;
mod page;
mod routes;
mod state;

use state::StartupError;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // Missing .env is fine; the process environment still applies.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env().inspect_err(|e| tracing::error!(error = %e, "invalid configuration"))?;
    let port = config.port;
    let state =
        state::AppState::from_config(config).inspect_err(|e| tracing::error!(error = %e, "startup failed"))?;

    tracing::info!(
        concessions = state.concessions.len(),
        rows = state.config.matrix.rows,
        columns = state.config.matrix.columns,
        base_url = %state.config.base_url,
        "concession catalog ready"
    );

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "concession menu listening");
    axum::serve(listener, app).await?;
    Ok(())
}
