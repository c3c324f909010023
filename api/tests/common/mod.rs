//! Shared helpers for the HTTP integration tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use actix_web::web;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use otp_api::AppState;
use otp_core::services::{ManualClock, OtpDeliveryTrait};
use otp_core::PhoneKey;
use otp_shared::{AppConfig, JwtConfig};

pub const PHONE: &str = "+911234567890";
pub const JWT_SECRET: &str = "http-test-secret";

/// Delivery channel that keeps the last code per phone
#[derive(Default)]
pub struct RecordingDelivery {
    codes: Mutex<HashMap<String, String>>,
    pub fail: Mutex<bool>,
}

impl RecordingDelivery {
    pub fn last_code(&self, phone: &str) -> Option<String> {
        self.codes.lock().unwrap().get(phone).cloned()
    }

    pub fn sent_count(&self) -> usize {
        self.codes.lock().unwrap().len()
    }
}

#[async_trait]
impl OtpDeliveryTrait for RecordingDelivery {
    async fn send_otp(&self, phone: &PhoneKey, code: &str) -> Result<String, String> {
        if *self.fail.lock().unwrap() {
            return Err("provider down".to_string());
        }
        self.codes
            .lock()
            .unwrap()
            .insert(phone.as_str().to_string(), code.to_string());
        Ok("recorded".to_string())
    }
}

pub struct TestContext {
    pub config: AppConfig,
    pub clock: Arc<ManualClock>,
    pub delivery: Arc<RecordingDelivery>,
    pub state: web::Data<AppState>,
}

pub fn test_config(secret: Option<&str>) -> AppConfig {
    let mut config = AppConfig::development();
    config.auth.jwt = match secret {
        Some(secret) => JwtConfig::new(secret),
        None => JwtConfig::default(),
    };
    config.delivery.console_output = false;
    config
}

pub fn context() -> TestContext {
    context_with(test_config(Some(JWT_SECRET)))
}

pub fn context_with(config: AppConfig) -> TestContext {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 5, 20, 12, 0, 0).unwrap(),
    ));
    let delivery = Arc::new(RecordingDelivery::default());
    let state = web::Data::new(AppState::with_collaborators(
        &config,
        clock.clone(),
        delivery.clone(),
    ));
    TestContext {
        config,
        clock,
        delivery,
        state,
    }
}
