//! Referral network service entry point.
//!
//! Loads configuration from the environment, seeds the repositories from the
//! registry file and starts the HTTP server.
use std::sync::Arc;

use actix_web::{
    middleware::{self, Logger},
    web, App, HttpServer,
};
use color_eyre::{eyre::WrapErr, Result};
use dotenvy::dotenv;
use futures::future::try_join_all;
use log::info;

use referral_network::{
    api::routes::configure_routes,
    config::{load_config, Registry, ServerConfig},
    constants::DEFAULT_SHUTDOWN_TIMEOUT_SECONDS,
    domain::TransactionBuilder,
    logging::setup_logging,
    models::AppState,
    repositories::{InMemoryBlinkRepository, InMemoryProjectRepository, Repository},
    services::SolanaProvider,
};

async fn initialize_app_state(
    server_config: &ServerConfig,
    registry: Registry,
) -> Result<web::Data<AppState>> {
    let provider = SolanaProvider::new(&server_config.rpc_url, server_config.rpc_timeout_seconds)
        .wrap_err("Failed to create Solana provider")?;

    let project_repository = Arc::new(InMemoryProjectRepository::new());
    let blink_repository = Arc::new(InMemoryBlinkRepository::new());

    try_join_all(
        registry
            .projects
            .into_iter()
            .map(|project| project_repository.create(project)),
    )
    .await
    .wrap_err("Failed to initialize project repository")?;

    try_join_all(
        registry
            .blinks
            .into_iter()
            .map(|blink| blink_repository.create(blink)),
    )
    .await
    .wrap_err("Failed to initialize blink repository")?;

    info!(
        "Serving {} projects and {} blinks, account resolution is {:?}",
        project_repository.count().await?,
        blink_repository.count().await?,
        server_config.resolution_policy
    );

    Ok(web::Data::new(AppState {
        project_repository,
        blink_repository,
        transaction_builder: Arc::new(TransactionBuilder::new(
            Arc::new(provider),
            server_config.resolution_policy,
        )),
        action_icon_path: server_config.action_icon_path.clone(),
    }))
}

#[actix_web::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();
    color_eyre::install()?;
    setup_logging()?;

    let config = ServerConfig::from_env();

    let registry =
        load_config(&config.config_file_path).wrap_err("Failed to load config file")?;
    let app_state = initialize_app_state(&config, registry).await?;

    info!("Starting server on {}:{}", config.host, config.port);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::DefaultHeaders::new())
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .configure(configure_routes)
    })
    .bind((config.host.as_str(), config.port))
    .wrap_err_with(|| format!("Failed to bind {}:{}", config.host, config.port))?
    .shutdown_timeout(DEFAULT_SHUTDOWN_TIMEOUT_SECONDS);

    info!("Server running at http://{}:{}", config.host, config.port);

    server.run().await?;
    Ok(())
}
