//! Clients for the geocoding and nearby-search endpoints.

pub mod client;
pub mod error;
pub mod geocode;
pub mod nearby;
pub mod normalize;
pub mod types;

pub use client::PlacesClient;
pub use error::PlacesError;
pub use normalize::{normalize_place, PhotoUrls};
