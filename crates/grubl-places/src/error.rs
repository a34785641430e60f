use thiserror::Error;

/// Errors returned by [`crate::PlacesClient`].
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Network, TLS or timeout failure from the underlying HTTP client.
    ///
    /// The request URL is stripped on conversion: geocoding requests carry
    /// the API key in their query string.
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// The service answered with an error status or a non-2xx response.
    #[error("API error {status}: {message}")]
    Api { status: String, message: String },

    /// The geocoder found nothing for the address.
    #[error("no results for address \"{address}\"")]
    NoResults { address: String },

    /// The response parsed but lacks a field the caller depends on.
    #[error("malformed response for {context}: {reason}")]
    Malformed { context: String, reason: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("address must not be empty")]
    EmptyAddress,

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl From<reqwest::Error> for PlacesError {
    fn from(e: reqwest::Error) -> Self {
        PlacesError::Http(e.without_url())
    }
}

impl PlacesError {
    /// `true` when the address could not be resolved, as opposed to the
    /// request itself failing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PlacesError::NoResults { .. } | PlacesError::Malformed { .. } | PlacesError::EmptyAddress
        )
    }
}
