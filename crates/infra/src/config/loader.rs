//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `AGENDAHUB_BIND_ADDR`: HTTP bind address
//! - `AGENDAHUB_AUTH_BASE_URL`: Hosted auth service base URL
//! - `AGENDAHUB_AUTH_ANON_KEY`: Hosted auth service public key
//! - `AGENDAHUB_REMINDER_CRON`: Cron expression for the notification sweep
//! - `AGENDAHUB_REMINDERS_ENABLED`: Whether the sweep runs (true/false)
//! - `AGENDAHUB_SEED_DEMO_DATA`: Whether the demo roster is loaded
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.toml` or `./config.json` (current working directory)
//! 2. `./agendahub.toml` or `./agendahub.json` (current working directory)
//! 3. `../` and `../../` variants of the above

use std::path::{Path, PathBuf};

use agendahub_domain::{AgendaError, AuthConfig, Config, ReminderConfig, Result, ServerConfig};

/// Load configuration with automatic fallback strategy.
///
/// First attempts to load from environment variables. If the required
/// variables are missing, falls back to loading from a config file; when no
/// file exists either, the defaults apply.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "environment incomplete, trying file");
            match load_from_file(None) {
                Ok(config) => Ok(config),
                Err(_) => {
                    tracing::info!("no configuration found, using defaults");
                    Ok(Config::default())
                }
            }
        }
    }
}

/// Load configuration from environment variables.
///
/// The auth endpoint variables are required; everything else falls back to
/// its default.
pub fn load_from_env() -> Result<Config> {
    let base_url = env_var("AGENDAHUB_AUTH_BASE_URL")?;
    let anon_key = env_var("AGENDAHUB_AUTH_ANON_KEY")?;

    let defaults = Config::default();
    let bind_addr =
        std::env::var("AGENDAHUB_BIND_ADDR").unwrap_or(defaults.server.bind_addr);
    let cron_expression =
        std::env::var("AGENDAHUB_REMINDER_CRON").unwrap_or(defaults.reminders.cron_expression);
    let reminders_enabled = env_bool("AGENDAHUB_REMINDERS_ENABLED", true);
    let seed_demo_data = env_bool("AGENDAHUB_SEED_DEMO_DATA", true);

    Ok(Config {
        server: ServerConfig { bind_addr },
        auth: AuthConfig { base_url, anon_key },
        reminders: ReminderConfig { cron_expression, enabled: reminders_enabled },
        seed_demo_data,
    })
}

/// Load configuration from a file.
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(AgendaError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            AgendaError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| AgendaError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content, format detected by extension.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| AgendaError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| AgendaError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(AgendaError::Config(format!("Unsupported config format: {extension}"))),
    }
}

fn probe_config_paths() -> Option<PathBuf> {
    const NAMES: [&str; 4] = ["config.toml", "config.json", "agendahub.toml", "agendahub.json"];
    const PREFIXES: [&str; 3] = [".", "..", "../.."];

    for prefix in PREFIXES {
        for name in NAMES {
            let candidate = Path::new(prefix).join(name);
            if candidate.exists() {
                return Some(candidate);
            }
        }
    }
    None
}

fn env_var(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| AgendaError::Config(format!("Missing environment variable: {name}")))
}

fn env_bool(name: &str, default: bool) -> bool {
    std::env::var(name).map(|v| v == "true" || v == "1").unwrap_or(default)
}
