//! Normalization from raw places records to [`grubl_core::Venue`].

use grubl_core::{Coordinates, Venue};
use reqwest::Url;

use crate::error::PlacesError;
use crate::types::RawPlace;

/// Builds photo media URLs: `{base}v1/{photo name}/media?maxWidthPx=..&key=..`.
#[derive(Debug, Clone, Copy)]
pub struct PhotoUrls<'a> {
    base: &'a Url,
    api_key: &'a str,
    max_width_px: u32,
}

impl<'a> PhotoUrls<'a> {
    #[must_use]
    pub fn new(base: &'a Url, api_key: &'a str, max_width_px: u32) -> Self {
        Self {
            base,
            api_key,
            max_width_px,
        }
    }

    /// Returns `None` for an empty name or one that does not form a valid URL.
    #[must_use]
    pub fn media_url(&self, photo_name: &str) -> Option<String> {
        let photo_name = photo_name.trim().trim_matches('/');
        if photo_name.is_empty() {
            return None;
        }
        let mut url = self.base.join(&format!("v1/{photo_name}/media")).ok()?;
        url.query_pairs_mut()
            .append_pair("maxWidthPx", &self.max_width_px.to_string())
            .append_pair("key", self.api_key);
        Some(url.into())
    }
}

/// Normalizes a [`RawPlace`] into a [`Venue`].
///
/// Fields absent from the payload stay `None`; only the location is
/// required, because a venue that cannot be placed cannot be opened in maps.
///
/// # Errors
///
/// Returns [`PlacesError::Malformed`] if the place has no location.
pub fn normalize_place(raw: RawPlace, photos: &PhotoUrls<'_>) -> Result<Venue, PlacesError> {
    let Some(location) = raw.location else {
        return Err(PlacesError::Malformed {
            context: format!("place {}", raw.id.as_deref().unwrap_or("<no id>")),
            reason: "missing location".to_string(),
        });
    };

    let photo_url = raw
        .photos
        .as_deref()
        .and_then(<[_]>::first)
        .and_then(|photo| photos.media_url(&photo.name));

    Ok(Venue {
        id: raw.id.filter(|id| !id.is_empty()),
        name: raw.display_name.map(|n| n.text),
        rating: raw.rating,
        rating_count: raw.user_rating_count,
        price_level: raw.price_level,
        primary_type: raw.primary_type,
        types: raw.types,
        coordinates: Coordinates::new(location.latitude, location.longitude),
        photo_url,
    })
}

#[cfg(test)]
mod tests {
    use grubl_core::PriceLevel;

    use super::*;
    use crate::types::{LocalizedText, PlaceLatLng, RawPhoto};

    fn base() -> Url {
        Url::parse("https://places.googleapis.com/").unwrap()
    }

    fn located() -> RawPlace {
        RawPlace {
            location: Some(PlaceLatLng {
                latitude: 1.3,
                longitude: 103.8,
            }),
            ..RawPlace::default()
        }
    }

    #[test]
    fn sparse_place_keeps_fields_unset() {
        let base = base();
        let photos = PhotoUrls::new(&base, "k", 800);
        let venue = normalize_place(located(), &photos).unwrap();
        assert_eq!(venue.id, None);
        assert_eq!(venue.name, None);
        assert_eq!(venue.rating, None);
        assert_eq!(venue.rating_count, None);
        assert_eq!(venue.price_level, None);
        assert_eq!(venue.primary_type, None);
        assert_eq!(venue.types, None);
        assert_eq!(venue.photo_url, None);
        assert_eq!(venue.coordinates, Coordinates::new(1.3, 103.8));
    }

    #[test]
    fn full_place_is_copied_faithfully() {
        let base = base();
        let photos = PhotoUrls::new(&base, "secret", 800);
        let raw = RawPlace {
            id: Some("ChIJabc".to_string()),
            display_name: Some(LocalizedText {
                text: "Hawker Hall".to_string(),
                language_code: Some("en".to_string()),
            }),
            rating: Some(0.0),
            user_rating_count: Some(0),
            price_level: Some(PriceLevel::Inexpensive),
            primary_type: Some("food_court".to_string()),
            types: Some(vec!["food_court".to_string(), "food".to_string()]),
            photos: Some(vec![RawPhoto {
                name: "places/ChIJabc/photos/AX1".to_string(),
                width_px: Some(1200),
                height_px: None,
            }]),
            ..located()
        };

        let venue = normalize_place(raw, &photos).unwrap();
        assert_eq!(venue.id.as_deref(), Some("ChIJabc"));
        assert_eq!(venue.name.as_deref(), Some("Hawker Hall"));
        assert_eq!(venue.rating, Some(0.0));
        assert_eq!(venue.rating_count, Some(0));
        assert_eq!(venue.price_level, Some(PriceLevel::Inexpensive));
        assert_eq!(venue.primary_type.as_deref(), Some("food_court"));
        assert_eq!(
            venue.types,
            Some(vec!["food_court".to_string(), "food".to_string()])
        );
        assert_eq!(
            venue.photo_url.as_deref(),
            Some("https://places.googleapis.com/v1/places/ChIJabc/photos/AX1/media?maxWidthPx=800&key=secret")
        );
    }

    #[test]
    fn missing_location_is_malformed() {
        let base = base();
        let photos = PhotoUrls::new(&base, "k", 800);
        let raw = RawPlace {
            id: Some("x".to_string()),
            ..RawPlace::default()
        };
        let err = normalize_place(raw, &photos).unwrap_err();
        assert!(matches!(err, PlacesError::Malformed { .. }), "got {err:?}");
    }

    #[test]
    fn media_url_ignores_blank_names() {
        let base = base();
        let photos = PhotoUrls::new(&base, "k", 400);
        assert!(photos.media_url("  ").is_none());
        assert_eq!(
            photos.media_url("places/a/photos/b").as_deref(),
            Some("https://places.googleapis.com/v1/places/a/photos/b/media?maxWidthPx=400&key=k")
        );
    }
}
