#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub google_api_key: String,
    pub env: Environment,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub geocode_base_url: String,
    pub places_base_url: String,
    /// Appended to every address before geocoding, e.g. `"Singapore"`.
    pub locale_suffix: Option<String>,
    pub photo_max_width_px: u32,
    pub user_agent: String,
}

/// `"Lot 1"` + `Some("Singapore")` -> `"Lot 1, Singapore"`. A blank suffix is ignored.
#[must_use]
pub fn localize_address(address: &str, locale_suffix: Option<&str>) -> String {
    let address = address.trim();
    match locale_suffix.map(str::trim) {
        Some(suffix) if !suffix.is_empty() => format!("{address}, {suffix}"),
        _ => address.to_string(),
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("google_api_key", &"[redacted]")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("geocode_base_url", &self.geocode_base_url)
            .field("places_base_url", &self.places_base_url)
            .field("locale_suffix", &self.locale_suffix)
            .field("photo_max_width_px", &self.photo_max_width_px)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
