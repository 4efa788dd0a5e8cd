//! Configuration structures consumed across the workspace

use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub reminders: ReminderConfig,
    /// Start with the demo meeting roster loaded.
    pub seed_demo_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            auth: AuthConfig::default(),
            reminders: ReminderConfig::default(),
            seed_demo_data: true,
        }
    }
}

/// HTTP surface configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: "127.0.0.1:8787".to_string() }
    }
}

/// Hosted auth service endpoint and public key
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub base_url: String,
    pub anon_key: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { base_url: "http://127.0.0.1:54321".to_string(), anon_key: String::new() }
    }
}

/// Reminder sweep cadence
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReminderConfig {
    /// Cron expression driving the notification sweep.
    pub cron_expression: String,
    pub enabled: bool,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self { cron_expression: "0 * * * * *".to_string(), enabled: true }
    }
}
