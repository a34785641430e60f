//! Forward and reverse geocoding.

use grubl_core::Coordinates;
use reqwest::Url;

use crate::client::PlacesClient;
use crate::error::PlacesError;
use crate::types::GeocodeResponse;

const GEOCODE_PATH: &str = "maps/api/geocode/json";

impl PlacesClient {
    /// Resolves a free-text address to the first geocoding result.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::EmptyAddress`] if `address` is blank; no request is sent.
    /// - [`PlacesError::NoResults`] if the geocoder found nothing.
    /// - [`PlacesError::Malformed`] if the first result has no location.
    /// - [`PlacesError::Api`] on a non-`OK` status or non-2xx response.
    /// - [`PlacesError::Http`] on network failure or timeout.
    /// - [`PlacesError::Deserialize`] if the body has an unexpected shape.
    pub async fn resolve_coordinates(&self, address: &str) -> Result<Coordinates, PlacesError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(PlacesError::EmptyAddress);
        }

        tracing::debug!(address, "geocoding address");
        let url = self.geocode_url(&[("address", address)]);
        let body: GeocodeResponse = self
            .send_json(self.client.get(url), &format!("geocode(address={address})"))
            .await?;
        Self::check_geocode_status(&body, address)?;

        let first = body
            .results
            .into_iter()
            .next()
            .ok_or_else(|| PlacesError::NoResults {
                address: address.to_string(),
            })?;
        let location = first
            .geometry
            .and_then(|g| g.location)
            .ok_or_else(|| PlacesError::Malformed {
                context: format!("geocode(address={address})"),
                reason: "first result has no geometry.location".to_string(),
            })?;

        Ok(Coordinates::new(location.lat, location.lng))
    }

    /// Turns coordinates into the first result's formatted address.
    ///
    /// Backs "search near me": the returned text is what the user would
    /// otherwise have typed into the location field.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`PlacesClient::resolve_coordinates`]; a first result
    /// without `formatted_address` is [`PlacesError::Malformed`].
    pub async fn reverse_geocode(&self, coordinates: Coordinates) -> Result<String, PlacesError> {
        let latlng = coordinates.to_string();
        tracing::debug!(%latlng, "reverse geocoding");
        let url = self.geocode_url(&[("latlng", &latlng)]);
        let body: GeocodeResponse = self
            .send_json(self.client.get(url), &format!("geocode(latlng={latlng})"))
            .await?;
        Self::check_geocode_status(&body, &latlng)?;

        body.results
            .into_iter()
            .next()
            .ok_or_else(|| PlacesError::NoResults {
                address: latlng.clone(),
            })?
            .formatted_address
            .filter(|a| !a.trim().is_empty())
            .ok_or_else(|| PlacesError::Malformed {
                context: format!("geocode(latlng={latlng})"),
                reason: "first result has no formatted_address".to_string(),
            })
    }

    pub(crate) fn geocode_url(&self, extra: &[(&str, &str)]) -> Url {
        let mut url = self
            .geocode_base
            .join(GEOCODE_PATH)
            .unwrap_or_else(|_| self.geocode_base.clone());
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        url
    }

    /// Maps the geocoder's `status` field onto the error taxonomy.
    fn check_geocode_status(body: &GeocodeResponse, address: &str) -> Result<(), PlacesError> {
        match body.status.as_deref() {
            None | Some("OK") => Ok(()),
            Some("ZERO_RESULTS") => Err(PlacesError::NoResults {
                address: address.to_string(),
            }),
            Some(other) => Err(PlacesError::Api {
                status: other.to_string(),
                message: body
                    .error_message
                    .clone()
                    .unwrap_or_else(|| "unknown error".to_string()),
            }),
        }
    }
}
