//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - Credential signing configuration
//! - `delivery` - Outbound message provider selection
//! - `environment` - Environment detection and logging configuration
//! - `otp` - Passcode lifetime, attempt and resend ceilings, phone format
//! - `rate_limit` - Per-phone issuance rate limiting
//! - `server` - HTTP server and CORS configuration

pub mod auth;
pub mod delivery;
pub mod environment;
pub mod otp;
pub mod rate_limit;
pub mod server;

use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig};
pub use delivery::DeliveryConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use otp::{OtpConfig, PhoneConfig};
pub use rate_limit::RateLimitConfig;
pub use server::{CorsConfig, ServerConfig};

/// Prefix for structured environment overrides (`OTP_RATE_LIMIT__MAX_PER_WINDOW=5`)
pub const ENV_PREFIX: &str = "OTP";

// Upper bounds keep every duration derived from config far inside chrono's range
const MAX_CODE_TTL_MINUTES: i64 = 24 * 60;
const MAX_TOKEN_EXPIRY_DAYS: i64 = 3650;
const MAX_RATE_WINDOW_SECONDS: u64 = 7 * 24 * 60 * 60;

/// Errors raised while assembling the application configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Source(#[from] config::ConfigError),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Credential signing configuration
    pub auth: AuthConfig,

    /// Passcode policy
    #[serde(default)]
    pub otp: OtpConfig,

    /// Accepted phone number format
    #[serde(default)]
    pub phone: PhoneConfig,

    /// Rate limiting configuration
    #[serde(default)]
    pub rate_limit: RateLimitConfig,

    /// Message delivery configuration
    #[serde(default)]
    pub delivery: DeliveryConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig::new("127.0.0.1", 3000),
            auth: AuthConfig::default(),
            otp: OtpConfig::default(),
            phone: PhoneConfig::default(),
            rate_limit: RateLimitConfig::default(),
            delivery: DeliveryConfig::development(),
            cors: CorsConfig::development(),
            logging: LoggingConfig::for_environment(Environment::Development),
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig::new("0.0.0.0", 3000),
            auth: AuthConfig::default(),
            otp: OtpConfig::default(),
            phone: PhoneConfig::default(),
            rate_limit: RateLimitConfig::default(),
            delivery: DeliveryConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Production),
        }
    }

    /// Defaults for the given environment
    pub fn for_environment(environment: Environment) -> Self {
        match environment {
            Environment::Development => Self::development(),
            Environment::Production => Self::production(),
            Environment::Staging => {
                let mut config = Self::production();
                config.environment = Environment::Staging;
                config.logging = LoggingConfig::for_environment(Environment::Staging);
                config
            }
        }
    }

    /// Load configuration for the detected environment.
    ///
    /// Layers, lowest precedence first:
    /// 1. built-in defaults for the environment
    /// 2. optional `config.<environment>.toml`
    /// 3. `OTP_`-prefixed variables, `__` separating nested keys
    /// 4. conventional variables: `HOST`, `PORT`, `JWT_SECRET`, `DELIVERY_PROVIDER`
    pub fn load() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let defaults = Self::for_environment(environment);

        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&defaults)?)
            .add_source(config::File::with_name(environment.config_file()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut app_config: AppConfig = settings.try_deserialize()?;
        app_config.apply_env_overrides()?;
        app_config.validate()?;
        Ok(app_config)
    }

    /// Reject values the services cannot turn into timestamps or ceilings
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("otp.code_ttl_minutes", self.otp.code_ttl_minutes, 1..=MAX_CODE_TTL_MINUTES)?;
        check_range("otp.max_attempts", self.otp.max_attempts, 1..=u32::MAX)?;
        check_range("otp.max_resends", self.otp.max_resends, 1..=u32::MAX)?;
        check_range("auth.jwt.expiry_days", self.auth.jwt.expiry_days, 1..=MAX_TOKEN_EXPIRY_DAYS)?;
        check_range("rate_limit.max_per_window", self.rate_limit.max_per_window, 1..=u32::MAX)?;
        check_range("rate_limit.window_seconds", self.rate_limit.window_seconds, 1..=MAX_RATE_WINDOW_SECONDS)?;
        Ok(())
    }

    /// Apply the conventional, unprefixed environment variables
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }

        if let Ok(port) = env::var("PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT".to_string(),
                value: port.clone(),
            })?;
        }

        if let Ok(secret) = env::var("JWT_SECRET") {
            if !secret.trim().is_empty() {
                self.auth.jwt.secret = Some(secret);
            }
        }

        if let Ok(provider) = env::var("DELIVERY_PROVIDER") {
            self.delivery.provider = provider;
        }

        Ok(())
    }
}

fn check_range<T>(key: &str, value: T, range: std::ops::RangeInclusive<T>) -> Result<(), ConfigError>
where
    T: PartialOrd + std::fmt::Display,
{
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}
