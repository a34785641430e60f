//! Wire types for the geocoding and places endpoints.
//!
//! Every field the services may omit is an `Option` or defaults to empty so
//! that a sparse payload still decodes; deciding what is required happens
//! in [`crate::geocode`] and [`crate::normalize`].

use grubl_core::PriceLevel;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Geocoding
// ---------------------------------------------------------------------------

/// `GET /maps/api/geocode/json` response.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    /// `"OK"`, `"ZERO_RESULTS"`, `"REQUEST_DENIED"`, ...
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub location: Option<LatLng>,
}

#[derive(Debug, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

// ---------------------------------------------------------------------------
// places:searchNearby
// ---------------------------------------------------------------------------

/// Request body for `POST /v1/places:searchNearby`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbySearchRequest<'a> {
    pub included_types: &'a [String],
    pub location_restriction: LocationRestriction,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub price_levels: Vec<PriceLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_now: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct LocationRestriction {
    pub circle: Circle,
}

#[derive(Debug, Serialize)]
pub struct Circle {
    pub center: PlaceLatLng,
    pub radius: f64,
}

/// `{ "latitude": .., "longitude": .. }` as used by the places API.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlaceLatLng {
    pub latitude: f64,
    pub longitude: f64,
}

/// `POST /v1/places:searchNearby` response. `places` is omitted entirely
/// when nothing matched.
#[derive(Debug, Deserialize)]
pub struct NearbySearchResponse {
    #[serde(default)]
    pub places: Vec<RawPlace>,
}

/// One place restricted to the fields named in the field mask.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPlace {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub display_name: Option<LocalizedText>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_rating_count: Option<u32>,
    #[serde(default)]
    pub price_level: Option<PriceLevel>,
    #[serde(default)]
    pub primary_type: Option<String>,
    #[serde(default)]
    pub types: Option<Vec<String>>,
    #[serde(default)]
    pub location: Option<PlaceLatLng>,
    #[serde(default)]
    pub photos: Option<Vec<RawPhoto>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedText {
    pub text: String,
    #[serde(default)]
    pub language_code: Option<String>,
}

/// A photo handle; `name` looks like `places/{id}/photos/{ref}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPhoto {
    pub name: String,
    #[serde(default)]
    pub width_px: Option<u32>,
    #[serde(default)]
    pub height_px: Option<u32>,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Google's JSON error envelope: `{ "error": { "code", "message", "status" } }`.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
