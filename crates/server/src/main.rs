use std::sync::Arc;

use anyhow::Result;
use common::Config;
use server::{router, AppState};
use tokio::net::TcpListener;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    let _ = dotenv::dotenv();

    // Configure tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::from_env()?;

    // Keep the guard alive so queued events are flushed on shutdown
    let _sentry = config.sentry_dsn.clone().map(|dsn| {
        info!("Error reporting enabled");
        sentry::init(sentry::ClientOptions {
            dsn: Some(dsn),
            release: sentry::release_name!(),
            ..Default::default()
        })
    });

    let state = AppState::from_config(&config)?;
    let app = router(Arc::new(state));

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Gamethread server listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
