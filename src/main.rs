mod model;
mod server;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    notifier::{LogNotifier, Notifier},
    router, scheduler, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    startup::seed_admin(&db, &config).await?;

    let notifier: Arc<dyn Notifier> = Arc::new(LogNotifier);

    let _scheduler = scheduler::reports::start_scheduler(db.clone(), notifier.clone()).await?;

    let app = router::router()
        .with_state(AppState::new(db, notifier, config.export_dir.clone()))
        .layer(session);

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
