use crate::app_config::AppConfig;
use crate::suppliers::SupplierEndpoints;
use crate::ConfigError;

const DEFAULT_ACME_URL: &str = "https://5f2be0b4ffc88500167b85a0.mockapi.io/suppliers/acme";
const DEFAULT_PATAGONIA_URL: &str =
    "https://5f2be0b4ffc88500167b85a0.mockapi.io/suppliers/patagonia";
const DEFAULT_PAPERFLIES_URL: &str =
    "https://5f2be0b4ffc88500167b85a0.mockapi.io/suppliers/paperflies";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap` instead of `set_var`/`remove_var`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let bind_addr = parse_addr("HOTELDM_BIND_ADDR", "0.0.0.0:8090")?;
    let log_level = or_default("HOTELDM_LOG_LEVEL", "info");

    let refresh_interval_secs = parse_u64("HOTELDM_REFRESH_INTERVAL_SECS", "5")?;
    if refresh_interval_secs == 0 {
        return Err(invalid(
            "HOTELDM_REFRESH_INTERVAL_SECS",
            "must be greater than zero".to_string(),
        ));
    }

    let supplier_endpoints = SupplierEndpoints {
        acme: or_default("HOTELDM_ACME_URL", DEFAULT_ACME_URL),
        patagonia: or_default("HOTELDM_PATAGONIA_URL", DEFAULT_PATAGONIA_URL),
        paperflies: or_default("HOTELDM_PAPERFLIES_URL", DEFAULT_PAPERFLIES_URL),
    };

    let supplier_request_timeout_secs = parse_u64("HOTELDM_SUPPLIER_REQUEST_TIMEOUT_SECS", "30")?;
    let supplier_user_agent = or_default(
        "HOTELDM_SUPPLIER_USER_AGENT",
        "hoteldm/0.1 (hotel-data-merge)",
    );
    let supplier_max_retries = parse_u32("HOTELDM_SUPPLIER_MAX_RETRIES", "2")?;
    let supplier_retry_backoff_base_secs =
        parse_u64("HOTELDM_SUPPLIER_RETRY_BACKOFF_BASE_SECS", "1")?;

    Ok(AppConfig {
        bind_addr,
        log_level,
        refresh_interval_secs,
        supplier_endpoints,
        supplier_request_timeout_secs,
        supplier_user_agent,
        supplier_max_retries,
        supplier_retry_backoff_base_secs,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
