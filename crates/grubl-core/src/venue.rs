//! Venue records shared by the places client, the selection flow and cards.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FilterError;

/// A WGS84 point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Parses `"lat,lng"` as typed on the command line.
impl FromStr for Coordinates {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| FilterError::InvalidCoordinates {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| invalid("expected \"lat,lng\""))?;
        let latitude: f64 = lat
            .trim()
            .parse()
            .map_err(|_| invalid("latitude is not a number"))?;
        let longitude: f64 = lng
            .trim()
            .parse()
            .map_err(|_| invalid("longitude is not a number"))?;

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(invalid("latitude must be within -90..=90"));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(invalid("longitude must be within -180..=180"));
        }

        Ok(Self::new(latitude, longitude))
    }
}

/// Price tier as reported by the places API (`PRICE_LEVEL_*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PriceLevel {
    #[serde(rename = "PRICE_LEVEL_FREE")]
    Free,
    #[serde(rename = "PRICE_LEVEL_INEXPENSIVE")]
    Inexpensive,
    #[serde(rename = "PRICE_LEVEL_MODERATE")]
    Moderate,
    #[serde(rename = "PRICE_LEVEL_EXPENSIVE")]
    Expensive,
    #[serde(rename = "PRICE_LEVEL_VERY_EXPENSIVE")]
    VeryExpensive,
    /// `PRICE_LEVEL_UNSPECIFIED` and any value this build does not know.
    #[serde(rename = "PRICE_LEVEL_UNSPECIFIED")]
    Unspecified,
}

impl<'de> Deserialize<'de> for PriceLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(PriceLevel::SELECTABLE
            .into_iter()
            .find(|level| level.api_name() == raw)
            .unwrap_or(PriceLevel::Unspecified))
    }
}

impl PriceLevel {
    /// Tiers a user can filter on, cheapest first.
    pub const SELECTABLE: [PriceLevel; 5] = [
        PriceLevel::Free,
        PriceLevel::Inexpensive,
        PriceLevel::Moderate,
        PriceLevel::Expensive,
        PriceLevel::VeryExpensive,
    ];

    /// The wire name sent in search requests.
    #[must_use]
    pub fn api_name(self) -> &'static str {
        match self {
            PriceLevel::Free => "PRICE_LEVEL_FREE",
            PriceLevel::Inexpensive => "PRICE_LEVEL_INEXPENSIVE",
            PriceLevel::Moderate => "PRICE_LEVEL_MODERATE",
            PriceLevel::Expensive => "PRICE_LEVEL_EXPENSIVE",
            PriceLevel::VeryExpensive => "PRICE_LEVEL_VERY_EXPENSIVE",
            PriceLevel::Unspecified => "PRICE_LEVEL_UNSPECIFIED",
        }
    }

    /// Short label shown on cards; `None` when the tier carries no information.
    #[must_use]
    pub fn label(self) -> Option<&'static str> {
        match self {
            PriceLevel::Free => Some("Free"),
            PriceLevel::Inexpensive => Some("$"),
            PriceLevel::Moderate => Some("$$"),
            PriceLevel::Expensive => Some("$$$"),
            PriceLevel::VeryExpensive => Some("$$$$"),
            PriceLevel::Unspecified => None,
        }
    }

    /// Lowercase name accepted on the command line.
    #[must_use]
    pub fn cli_name(self) -> &'static str {
        match self {
            PriceLevel::Free => "free",
            PriceLevel::Inexpensive => "inexpensive",
            PriceLevel::Moderate => "moderate",
            PriceLevel::Expensive => "expensive",
            PriceLevel::VeryExpensive => "very-expensive",
            PriceLevel::Unspecified => "unspecified",
        }
    }
}

/// Accepts the CLI name, the wire name, or the `$` label.
impl FromStr for PriceLevel {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        PriceLevel::SELECTABLE
            .into_iter()
            .find(|level| {
                needle.eq_ignore_ascii_case(level.cli_name())
                    || needle.eq_ignore_ascii_case(level.api_name())
                    || Some(needle) == level.label()
            })
            .ok_or_else(|| FilterError::UnknownPriceLevel(s.to_string()))
    }
}

/// One place returned by a nearby search.
///
/// Optional fields are `None` when the upstream payload omitted them, so a
/// missing rating is distinguishable from a rating of zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: Option<String>,
    pub name: Option<String>,
    pub rating: Option<f64>,
    pub rating_count: Option<u32>,
    pub price_level: Option<PriceLevel>,
    pub primary_type: Option<String>,
    pub types: Option<Vec<String>>,
    pub coordinates: Coordinates,
    /// Fully-qualified photo media URL.
    pub photo_url: Option<String>,
}

impl Venue {
    /// A venue with only coordinates set.
    #[must_use]
    pub fn at(coordinates: Coordinates) -> Self {
        Self {
            id: None,
            name: None,
            rating: None,
            rating_count: None,
            price_level: None,
            primary_type: None,
            types: None,
            coordinates,
            photo_url: None,
        }
    }

    /// Name for display, or `"Unknown"`.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }
}
