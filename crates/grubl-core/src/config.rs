use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

const DEFAULT_GEOCODE_BASE_URL: &str = "https://maps.googleapis.com";
const DEFAULT_PLACES_BASE_URL: &str = "https://places.googleapis.com";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
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
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can pass a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    // The key is checked before anything else so a missing credential is
    // reported up front rather than as a failed request later.
    let non_blank = |var: &str| lookup(var).ok().filter(|key| !key.trim().is_empty());
    let google_api_key = non_blank("GRUBL_GOOGLE_API_KEY")
        .or_else(|| non_blank("GOOGLE_API_KEY"))
        .ok_or_else(|| ConfigError::MissingEnvVar("GRUBL_GOOGLE_API_KEY".to_string()))?;

    let env = parse_environment(&or_default("GRUBL_ENV", "development"))?;
    let log_level = or_default("GRUBL_LOG_LEVEL", "info");

    let request_timeout_secs = parse_u64("GRUBL_REQUEST_TIMEOUT_SECS", "10")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "GRUBL_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "timeout must be greater than zero".to_string(),
        });
    }

    let geocode_base_url = or_default("GRUBL_GEOCODE_BASE_URL", DEFAULT_GEOCODE_BASE_URL);
    let places_base_url = or_default("GRUBL_PLACES_BASE_URL", DEFAULT_PLACES_BASE_URL);
    let locale_suffix = lookup("GRUBL_LOCALE_SUFFIX")
        .ok()
        .filter(|s| !s.trim().is_empty());
    let photo_max_width_px = parse_u32("GRUBL_PHOTO_MAX_WIDTH_PX", "800")?;
    let user_agent = or_default("GRUBL_USER_AGENT", "grubl/0.1 (venue-search)");

    Ok(AppConfig {
        google_api_key,
        env,
        log_level,
        request_timeout_secs,
        geocode_base_url,
        places_base_url,
        locale_suffix,
        photo_max_width_px,
        user_agent,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "GRUBL_ENV".to_string(),
            reason: format!("expected development, test or production, got \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
