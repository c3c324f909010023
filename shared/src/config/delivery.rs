//! Message delivery configuration

use serde::{Deserialize, Serialize};

/// Outbound message provider selection
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeliveryConfig {
    /// Provider name: "mock" prints codes to the console, "none" fails every delivery
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Whether the mock provider echoes messages to stdout
    #[serde(default = "default_console_output")]
    pub console_output: bool,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            console_output: default_console_output(),
        }
    }
}

impl DeliveryConfig {
    /// Console delivery for local development
    pub fn development() -> Self {
        Self {
            provider: "mock".to_string(),
            console_output: true,
        }
    }
}

fn default_provider() -> String {
    "none".to_string()
}

fn default_console_output() -> bool {
    true
}
