//! Nearby venue search.

use grubl_core::{Coordinates, SearchFilters, Venue};
use reqwest::Url;

use crate::client::PlacesClient;
use crate::error::PlacesError;
use crate::normalize::normalize_place;
use crate::types::{
    Circle, LocationRestriction, NearbySearchRequest, NearbySearchResponse, PlaceLatLng,
};

const NEARBY_PATH: &str = "v1/places:searchNearby";

/// Response attributes requested from the places API. Only what the cards
/// need; widening this raises the per-request billing tier.
pub const FIELD_MASK: &[&str] = &[
    "places.displayName",
    "places.rating",
    "places.id",
    "places.location",
    "places.priceLevel",
    "places.userRatingCount",
    "places.primaryType",
    "places.types",
    "places.photos",
];

impl PlacesClient {
    /// Searches for venues around `center` matching `filters`.
    ///
    /// Returns an empty list when nothing matched. Places without a location
    /// are skipped with a warning.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Api`] on a non-2xx response.
    /// - [`PlacesError::Http`] on network failure or timeout.
    /// - [`PlacesError::Deserialize`] if the body has an unexpected shape.
    pub async fn search_nearby(
        &self,
        center: Coordinates,
        filters: &SearchFilters,
    ) -> Result<Vec<Venue>, PlacesError> {
        let request = build_nearby_request(center, filters);
        let url = self.nearby_url();

        tracing::debug!(
            %center,
            radius = filters.radius().meters(),
            types = ?filters.included_types(),
            "searching nearby places"
        );

        let body: NearbySearchResponse = self
            .send_json(
                self.client
                    .post(url)
                    .header("X-Goog-Api-Key", &self.api_key)
                    .header("X-Goog-FieldMask", FIELD_MASK.join(","))
                    .json(&request),
                &format!("searchNearby(center={center})"),
            )
            .await?;

        let photos = self.photo_urls();
        let venues: Vec<Venue> = body
            .places
            .into_iter()
            .filter_map(|raw| {
                normalize_place(raw, &photos)
                    .map_err(|e| {
                        tracing::warn!(error = %e, "search_nearby: skipping place");
                    })
                    .ok()
            })
            .collect();

        tracing::debug!(count = venues.len(), "nearby search returned venues");
        Ok(venues)
    }

    pub(crate) fn nearby_url(&self) -> Url {
        self.places_base
            .join(NEARBY_PATH)
            .unwrap_or_else(|_| self.places_base.clone())
    }
}

/// Builds the request body. `priceLevels` and `openNow` are only sent when
/// the user set them.
pub(crate) fn build_nearby_request(
    center: Coordinates,
    filters: &SearchFilters,
) -> NearbySearchRequest<'_> {
    NearbySearchRequest {
        included_types: filters.included_types(),
        location_restriction: LocationRestriction {
            circle: Circle {
                center: PlaceLatLng {
                    latitude: center.latitude,
                    longitude: center.longitude,
                },
                radius: f64::from(filters.radius().meters()),
            },
        },
        price_levels: filters.price_levels().iter().copied().collect(),
        open_now: filters.open_now().then_some(true),
    }
}

#[cfg(test)]
mod tests {
    use grubl_core::{PriceLevel, SearchRadius};
    use serde_json::json;

    use super::*;

    fn filters() -> SearchFilters {
        SearchFilters::new(
            "Lot 1",
            SearchRadius::try_from(800).unwrap(),
            ["restaurant", "cafe"],
        )
        .unwrap()
    }

    #[test]
    fn request_omits_unset_filters() {
        let filters = filters();
        let body = serde_json::to_value(build_nearby_request(
            Coordinates::new(1.3, 103.8),
            &filters,
        ))
        .unwrap();
        assert_eq!(
            body,
            json!({
                "includedTypes": ["restaurant", "cafe"],
                "locationRestriction": {
                    "circle": {
                        "center": { "latitude": 1.3, "longitude": 103.8 },
                        "radius": 800.0
                    }
                }
            })
        );
    }

    #[test]
    fn request_includes_price_levels_and_open_now() {
        let filters = filters()
            .with_price_levels([PriceLevel::Expensive, PriceLevel::Inexpensive])
            .with_open_now(true);
        let body = serde_json::to_value(build_nearby_request(
            Coordinates::new(1.3, 103.8),
            &filters,
        ))
        .unwrap();
        assert_eq!(
            body["priceLevels"],
            json!(["PRICE_LEVEL_INEXPENSIVE", "PRICE_LEVEL_EXPENSIVE"])
        );
        assert_eq!(body["openNow"], json!(true));
    }

    #[test]
    fn field_mask_lists_exactly_the_card_fields() {
        assert_eq!(
            FIELD_MASK.join(","),
            "places.displayName,places.rating,places.id,places.location,places.priceLevel,\
             places.userRatingCount,places.primaryType,places.types,places.photos"
        );
    }

    #[test]
    fn nearby_url_joins_base() {
        let client = PlacesClient::with_base_urls(
            "k",
            10,
            "https://maps.googleapis.com",
            "https://places.googleapis.com/",
        )
        .unwrap();
        assert_eq!(
            client.nearby_url().as_str(),
            "https://places.googleapis.com/v1/places:searchNearby"
        );
    }
}
