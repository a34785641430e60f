//! HTTP client for the geocoding and places endpoints.
//!
//! Wraps `reqwest` with API key handling, a bounded request timeout, and
//! typed response decoding. Endpoint methods live in [`crate::geocode`] and
//! [`crate::nearby`]; this module owns construction and the shared request
//! plumbing.

use std::time::Duration;

use grubl_core::AppConfig;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::error::PlacesError;
use crate::normalize::PhotoUrls;
use crate::types::ErrorEnvelope;

const DEFAULT_GEOCODE_BASE_URL: &str = "https://maps.googleapis.com/";
const DEFAULT_PLACES_BASE_URL: &str = "https://places.googleapis.com/";
const DEFAULT_USER_AGENT: &str = "grubl/0.1 (venue-search)";
const DEFAULT_PHOTO_MAX_WIDTH_PX: u32 = 800;
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Client for the geocoding and nearby-search APIs.
///
/// Use [`PlacesClient::new`] for production, [`PlacesClient::from_config`]
/// when an [`AppConfig`] is at hand, or [`PlacesClient::with_base_urls`] to
/// point at a mock server in tests.
pub struct PlacesClient {
    pub(crate) client: Client,
    pub(crate) api_key: String,
    pub(crate) geocode_base: Url,
    pub(crate) places_base: Url,
    pub(crate) photo_max_width_px: u32,
}

impl PlacesClient {
    /// Creates a client pointed at the production endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, PlacesError> {
        Self::with_base_urls(
            api_key,
            timeout_secs,
            DEFAULT_GEOCODE_BASE_URL,
            DEFAULT_PLACES_BASE_URL,
        )
    }

    /// Creates a client with custom base URLs (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the `reqwest::Client` cannot be
    /// built, or [`PlacesError::InvalidBaseUrl`] if either URL is invalid.
    pub fn with_base_urls(
        api_key: &str,
        timeout_secs: u64,
        geocode_base_url: &str,
        places_base_url: &str,
    ) -> Result<Self, PlacesError> {
        Self::build(
            api_key,
            timeout_secs,
            DEFAULT_USER_AGENT,
            geocode_base_url,
            places_base_url,
        )
    }

    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// Same as [`PlacesClient::with_base_urls`].
    pub fn from_config(config: &AppConfig) -> Result<Self, PlacesError> {
        let client = Self::build(
            &config.google_api_key,
            config.request_timeout_secs,
            &config.user_agent,
            &config.geocode_base_url,
            &config.places_base_url,
        )?;
        Ok(client.with_photo_max_width(config.photo_max_width_px))
    }

    /// Sets the `maxWidthPx` used in synthesized photo URLs.
    #[must_use]
    pub fn with_photo_max_width(mut self, px: u32) -> Self {
        self.photo_max_width_px = px;
        self
    }

    fn build(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        geocode_base_url: &str,
        places_base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            geocode_base: parse_base_url(geocode_base_url)?,
            places_base: parse_base_url(places_base_url)?,
            photo_max_width_px: DEFAULT_PHOTO_MAX_WIDTH_PX,
        })
    }

    /// Photo URL synthesis bound to this client's base URL and key.
    pub(crate) fn photo_urls(&self) -> PhotoUrls<'_> {
        PhotoUrls::new(&self.places_base, &self.api_key, self.photo_max_width_px)
    }

    /// Sends a request and decodes a 2xx JSON body into `T`.
    ///
    /// Non-2xx responses are turned into [`PlacesError::Api`], using Google's
    /// error envelope when the body carries one.
    pub(crate) async fn send_json<T>(
        &self,
        request: RequestBuilder,
        context: &str,
    ) -> Result<T, PlacesError>
    where
        T: DeserializeOwned,
    {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(api_error(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: context.to_string(),
            source: e,
        })
    }
}

/// Normalise so the URL ends with exactly one slash and `Url::join` appends
/// rather than replacing the last path segment.
fn parse_base_url(raw: &str) -> Result<Url, PlacesError> {
    let normalised = format!("{}/", raw.trim_end_matches('/'));
    Url::parse(&normalised).map_err(|e| PlacesError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })
}

fn api_error(status: reqwest::StatusCode, body: &str) -> PlacesError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => PlacesError::Api {
            status: envelope
                .error
                .status
                .unwrap_or_else(|| status.as_u16().to_string()),
            message: envelope
                .error
                .message
                .unwrap_or_else(|| "unknown error".to_string()),
        },
        Err(_) => PlacesError::Api {
            status: status.as_u16().to_string(),
            message: body.chars().take(200).collect(),
        },
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
