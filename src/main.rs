use std::env;
use std::sync::Arc;
mod app;
mod auth;
mod config;
mod db;
mod error;
mod handlers;
mod response;

use app::build_router;
use auth::services::AuthService;
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn setup_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Si RUST_LOG n'est pas défini, utiliser ces règles par défaut
        tracing_subscriber::EnvFilter::new(
            "info,healthtrack_auth=debug,hyper_util=warn,tower_http=info",
        )
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

// ----------------- Main -----------------

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();
    tracing::info!("Starting healthtrack-auth...");

    let config = Config::from_env()?;
    tracing::info!("Running in {} mode", config.environment.as_str());

    // Le pool de connexions lit DATABASE_URL; propage l'URL composée
    // quand seule la forme éclatée (POSTGRES_*) est fournie
    if env::var("DATABASE_URL").is_err() {
        unsafe {
            env::set_var("DATABASE_URL", &config.database_url);
        }
    }

    let service = Arc::new(AuthService::new(config.lockout_policy()));
    let app = build_router(service, &config);

    let addr = format!("{}:{}", config.server_host, config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Server running at http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
