use std::collections::HashMap;
use std::env::VarError;

use super::*;
use crate::localize_address;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("GRUBL_GOOGLE_API_KEY", "test-key");
    m
}

#[test]
fn parse_environment_known_values() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn build_app_config_fails_without_api_key() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "GRUBL_GOOGLE_API_KEY"),
        "expected MissingEnvVar(GRUBL_GOOGLE_API_KEY), got: {result:?}"
    );
}

#[test]
fn build_app_config_treats_blank_api_key_as_missing() {
    let mut map = HashMap::new();
    map.insert("GRUBL_GOOGLE_API_KEY", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
}

#[test]
fn build_app_config_falls_back_to_google_api_key() {
    let mut map = HashMap::new();
    map.insert("GOOGLE_API_KEY", "fallback-key");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.google_api_key, "fallback-key");
}

#[test]
fn blank_primary_api_key_falls_back_to_google_api_key() {
    let mut map = HashMap::new();
    map.insert("GRUBL_GOOGLE_API_KEY", "  ");
    map.insert("GOOGLE_API_KEY", "fallback-key");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.google_api_key, "fallback-key");
}

#[test]
fn build_app_config_succeeds_with_defaults() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.google_api_key, "test-key");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.request_timeout_secs, 10);
    assert_eq!(cfg.geocode_base_url, "https://maps.googleapis.com");
    assert_eq!(cfg.places_base_url, "https://places.googleapis.com");
    assert!(cfg.locale_suffix.is_none());
    assert_eq!(cfg.photo_max_width_px, 800);
    assert_eq!(cfg.user_agent, "grubl/0.1 (venue-search)");
}

#[test]
fn build_app_config_fails_on_invalid_env() {
    let mut map = full_env();
    map.insert("GRUBL_ENV", "producton");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "GRUBL_ENV"),
        "expected InvalidEnvVar(GRUBL_ENV), got: {result:?}"
    );
}

#[test]
fn request_timeout_override() {
    let mut map = full_env();
    map.insert("GRUBL_REQUEST_TIMEOUT_SECS", "3");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 3);
}

#[test]
fn request_timeout_invalid() {
    let mut map = full_env();
    map.insert("GRUBL_REQUEST_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "GRUBL_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(GRUBL_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn request_timeout_zero_is_rejected() {
    let mut map = full_env();
    map.insert("GRUBL_REQUEST_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
}

#[test]
fn photo_width_invalid() {
    let mut map = full_env();
    map.insert("GRUBL_PHOTO_MAX_WIDTH_PX", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "GRUBL_PHOTO_MAX_WIDTH_PX"),
        "expected InvalidEnvVar(GRUBL_PHOTO_MAX_WIDTH_PX), got: {result:?}"
    );
}

#[test]
fn locale_suffix_is_applied_to_addresses() {
    let mut map = full_env();
    map.insert("GRUBL_LOCALE_SUFFIX", "Singapore");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        localize_address("  Lot 1 ", cfg.locale_suffix.as_deref()),
        "Lot 1, Singapore"
    );
}

#[test]
fn blank_locale_suffix_is_ignored() {
    let mut map = full_env();
    map.insert("GRUBL_LOCALE_SUFFIX", "  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.locale_suffix.is_none());
    assert_eq!(localize_address("Lot 1", cfg.locale_suffix.as_deref()), "Lot 1");
}

#[test]
fn debug_output_redacts_api_key() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("test-key"), "key leaked: {rendered}");
    assert!(rendered.contains("[redacted]"));
}
