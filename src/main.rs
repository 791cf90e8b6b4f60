mod model;
mod server;

use std::net::SocketAddr;

use tokio::{net::TcpListener, signal};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, router, scheduler::data_retention,
    service::setup_code::SetupCodeService, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    startup::create_upload_dir(&config).await?;

    let setup_code_service = SetupCodeService::new();
    startup::check_for_admin(&db, &setup_code_service).await?;

    let scheduler_db = db.clone();
    let scheduler_upload_dir = config.upload_dir.clone();
    tokio::spawn(async move {
        if let Err(e) = data_retention::start_scheduler(scheduler_db, scheduler_upload_dir).await {
            tracing::error!("Data retention scheduler error: {}", e);
        }
    });

    let app = router::router(&config)?
        .with_state(AppState::new(
            db,
            setup_code_service,
            config.upload_dir.clone(),
        ))
        .layer(session);

    let listener = TcpListener::bind(config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    // Connect info feeds the login rate limiter and consent audit records
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server shut down");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }

        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install terminate handler: {}", e);
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
}
