//! Application state and factory
//!
//! This module wires the services into the application state and provides
//! the factory for creating the Actix-web application.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App};
use otp_core::services::{
    AuthService, Clock, InMemoryOtpStore, InMemoryRateLimiter, OtpDeliveryTrait, OtpService,
    OtpServiceConfig, SystemClock, TokenService, TokenServiceConfig,
};
use otp_infra::{create_message_service, DeliveryAdapter};
use otp_shared::AppConfig;
use tracing_actix_web::TracingLogger;

use crate::handlers::{json_error_handler, not_found};
use crate::middleware::create_cors;
use crate::routes::{health, otp};

/// Application state shared by all workers
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    pub fn new(auth_service: Arc<AuthService>) -> Self {
        Self { auth_service }
    }

    /// Build the production wiring: wall clock and the configured delivery provider
    pub fn from_config(config: &AppConfig) -> Self {
        let provider = create_message_service(&config.delivery);
        tracing::info!(provider = provider.provider_name(), "Passcode delivery provider selected");
        if !provider.is_available() {
            tracing::warn!(
                provider = provider.provider_name(),
                event = "delivery_unavailable",
                "Delivery provider cannot send; send-otp and resend-otp will fail"
            );
        }
        let delivery = Arc::new(DeliveryAdapter::new(provider, config.otp.code_ttl_minutes));
        Self::with_collaborators(config, Arc::new(SystemClock), delivery)
    }

    /// Build the state around an explicit clock and delivery channel
    pub fn with_collaborators(
        config: &AppConfig,
        clock: Arc<dyn Clock>,
        delivery: Arc<dyn OtpDeliveryTrait>,
    ) -> Self {
        let rate_limiter = Arc::new(InMemoryRateLimiter::new(config.rate_limit.clone(), clock.clone()));
        let otp_service = Arc::new(OtpService::new(
            Arc::new(InMemoryOtpStore::new()),
            rate_limiter,
            clock,
            OtpServiceConfig::from(&config.otp),
        ));

        let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth.jwt)));
        if !token_service.has_signing_key() {
            tracing::warn!(
                event = "jwt_secret_missing",
                "JWT secret is not configured; verification will fail with a server error"
            );
        }

        Self::new(Arc::new(AuthService::new(
            otp_service,
            delivery,
            token_service,
            config.phone.clone(),
        )))
    }
}

/// Register the routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check)).service(
        web::scope("/api")
            .route("/send-otp", web::post().to(otp::send_otp))
            .route("/verify-otp", web::post().to(otp::verify_otp))
            .route("/resend-otp", web::post().to(otp::resend_otp)),
    );
}

/// Create and configure the application with all dependencies
pub fn create_app(
    state: web::Data<AppState>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let json_config = web::JsonConfig::default()
        .limit(config.server.max_payload_size)
        .error_handler(json_error_handler);

    App::new()
        .app_data(state)
        .app_data(json_config)
        // Middleware order: CORS runs inside the request span
        .wrap(create_cors(&config.cors))
        .wrap(TracingLogger::default())
        .configure(configure)
        .default_service(web::route().to(not_found))
}
