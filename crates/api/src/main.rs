//! Agenda Hub - meeting scheduling and team chat service

use std::sync::Arc;

use agendahub_lib::{build_router, AppContext};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; environment variables still apply.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = agendahub_infra::config::load()?;
    let ctx = Arc::new(AppContext::new(config.clone())?);

    let mut scheduler = ctx.reminder_scheduler();
    if config.reminders.enabled {
        scheduler.start().await?;
    } else {
        info!("reminder scheduler disabled by configuration");
    }

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr).await?;
    info!(addr = %config.server.bind_addr, "listening");

    axum::serve(listener, build_router(Arc::clone(&ctx)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if scheduler.is_running() {
        scheduler.stop().await?;
    }
    info!("shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        return;
    }
    info!("shutdown signal received");
}
