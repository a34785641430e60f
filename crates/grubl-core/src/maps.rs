//! Deep links into the maps application.

use std::fmt;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::venue::Venue;

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/";
const MAPS_DIRECTIONS_URL: &str = "https://www.google.com/maps/dir/";

/// A maps URL pointing at one venue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapsLink(String);

impl MapsLink {
    /// Links by place id when the venue has one, otherwise by coordinates.
    #[must_use]
    pub fn for_venue(venue: &Venue) -> Self {
        match venue.id.as_deref().filter(|id| !id.is_empty()) {
            Some(place_id) => Self(format!(
                "{MAPS_SEARCH_URL}?api=1&query={}&query_place_id={}",
                utf8_percent_encode(venue.name.as_deref().unwrap_or(""), NON_ALPHANUMERIC),
                utf8_percent_encode(place_id, NON_ALPHANUMERIC),
            )),
            None => Self(format!(
                "{MAPS_DIRECTIONS_URL}?api=1&destination={},{}",
                venue.coordinates.latitude, venue.coordinates.longitude
            )),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MapsLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::venue::Coordinates;

    #[test]
    fn link_uses_place_id_and_encoded_name() {
        let venue = Venue {
            id: Some("ChIJ123".to_string()),
            name: Some("Tom & Jerry's".to_string()),
            ..Venue::at(Coordinates::new(1.3, 103.8))
        };
        assert_eq!(
            MapsLink::for_venue(&venue).as_str(),
            "https://www.google.com/maps/search/?api=1&query=Tom%20%26%20Jerry%27s&query_place_id=ChIJ123"
        );
    }

    #[test]
    fn link_falls_back_to_coordinates() {
        let venue = Venue::at(Coordinates::new(1.3, 103.8));
        assert_eq!(
            MapsLink::for_venue(&venue).to_string(),
            "https://www.google.com/maps/dir/?api=1&destination=1.3,103.8"
        );
    }

    #[test]
    fn empty_id_counts_as_missing() {
        let venue = Venue {
            id: Some(String::new()),
            ..Venue::at(Coordinates::new(-33.5, 151.25))
        };
        assert!(MapsLink::for_venue(&venue)
            .as_str()
            .ends_with("destination=-33.5,151.25"));
    }
}
