use actix_web::{web, HttpServer};
use anyhow::Context;
use otp_api::app::{create_app, AppState};
use otp_api::telemetry::init_tracing;
use otp_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging)?;

    tracing::info!(
        environment = %config.environment,
        bind_address = %config.server.bind_address(),
        "Starting phone OTP server"
    );

    let state = web::Data::new(AppState::from_config(&config));
    let bind_address = config.server.bind_address();
    let workers = config.server.workers;
    let keep_alive = std::time::Duration::from_secs(config.server.keep_alive);

    let app_config = config.clone();
    let mut server = HttpServer::new(move || create_app(state.clone(), &app_config))
        .keep_alive(keep_alive);
    if workers > 0 {
        server = server.workers(workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await
        .context("Server terminated with an error")?;

    tracing::info!("Server stopped");
    Ok(())
}
