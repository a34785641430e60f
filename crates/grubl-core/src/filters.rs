//! Search parameters collected by the form and consumed by one search.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::error::FilterError;
use crate::options::{place_type_option, PLACE_TYPE_OPTIONS, RADIUS_OPTIONS};
use crate::venue::PriceLevel;

/// A search radius from the supported set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchRadius(u32);

impl SearchRadius {
    /// Smallest supported radius, preselected by the form.
    pub const DEFAULT: SearchRadius = SearchRadius(RADIUS_OPTIONS[0]);

    #[must_use]
    pub fn meters(self) -> u32 {
        self.0
    }
}

impl Default for SearchRadius {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for SearchRadius {
    type Error = FilterError;

    fn try_from(meters: u32) -> Result<Self, Self::Error> {
        if RADIUS_OPTIONS.contains(&meters) {
            Ok(Self(meters))
        } else {
            Err(FilterError::UnsupportedRadius(meters))
        }
    }
}

impl fmt::Display for SearchRadius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m", self.0)
    }
}

/// Validated search parameters.
///
/// `included_types` is never empty and only holds catalog codes, in the
/// order they were first selected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchFilters {
    location_text: String,
    radius: SearchRadius,
    included_types: Vec<String>,
    price_levels: BTreeSet<PriceLevel>,
    open_now: bool,
}

impl SearchFilters {
    /// Builds filters from form input.
    ///
    /// # Errors
    ///
    /// - [`FilterError::EmptyLocation`] if `location_text` is blank.
    /// - [`FilterError::NoPlaceTypes`] if `types` yields nothing.
    /// - [`FilterError::UnknownPlaceType`] for a code outside the catalog.
    pub fn new<I, S>(
        location_text: &str,
        radius: SearchRadius,
        types: I,
    ) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let location_text = location_text.trim();
        if location_text.is_empty() {
            return Err(FilterError::EmptyLocation);
        }

        let mut included_types: Vec<String> = Vec::new();
        for code in types {
            let code = code.as_ref().trim();
            if place_type_option(code).is_none() {
                return Err(FilterError::UnknownPlaceType(code.to_string()));
            }
            if !included_types.iter().any(|t| t == code) {
                included_types.push(code.to_string());
            }
        }
        if included_types.is_empty() {
            return Err(FilterError::NoPlaceTypes);
        }

        Ok(Self {
            location_text: location_text.to_string(),
            radius,
            included_types,
            price_levels: BTreeSet::new(),
            open_now: false,
        })
    }

    /// Filters with every catalog type selected, as the form starts out.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::EmptyLocation`] if `location_text` is blank.
    pub fn with_all_types(location_text: &str, radius: SearchRadius) -> Result<Self, FilterError> {
        Self::new(
            location_text,
            radius,
            PLACE_TYPE_OPTIONS.iter().map(|opt| opt.code),
        )
    }

    /// Restricts results to the given price tiers. `Unspecified` is dropped.
    #[must_use]
    pub fn with_price_levels<I>(mut self, levels: I) -> Self
    where
        I: IntoIterator<Item = PriceLevel>,
    {
        self.price_levels = levels
            .into_iter()
            .filter(|level| *level != PriceLevel::Unspecified)
            .collect();
        self
    }

    #[must_use]
    pub fn with_open_now(mut self, open_now: bool) -> Self {
        self.open_now = open_now;
        self
    }

    /// Adds `code` if absent, removes it if present.
    ///
    /// Removing the last selected type is refused; the call returns `Ok(false)`
    /// and the selection is unchanged. Returns `Ok(true)` when the selection
    /// changed.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::UnknownPlaceType`] for a code outside the catalog.
    pub fn toggle_type(&mut self, code: &str) -> Result<bool, FilterError> {
        if place_type_option(code).is_none() {
            return Err(FilterError::UnknownPlaceType(code.to_string()));
        }
        if let Some(pos) = self.included_types.iter().position(|t| t == code) {
            if self.included_types.len() == 1 {
                return Ok(false);
            }
            self.included_types.remove(pos);
        } else {
            self.included_types.push(code.to_string());
        }
        Ok(true)
    }

    #[must_use]
    pub fn location_text(&self) -> &str {
        &self.location_text
    }

    #[must_use]
    pub fn radius(&self) -> SearchRadius {
        self.radius
    }

    #[must_use]
    pub fn included_types(&self) -> &[String] {
        &self.included_types
    }

    #[must_use]
    pub fn price_levels(&self) -> &BTreeSet<PriceLevel> {
        &self.price_levels
    }

    #[must_use]
    pub fn open_now(&self) -> bool {
        self.open_now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radius(m: u32) -> SearchRadius {
        SearchRadius::try_from(m).unwrap()
    }

    #[test]
    fn radius_accepts_supported_values_only() {
        for m in RADIUS_OPTIONS {
            assert_eq!(radius(m).meters(), m);
        }
        assert_eq!(
            SearchRadius::try_from(500),
            Err(FilterError::UnsupportedRadius(500))
        );
        assert_eq!(SearchRadius::default().meters(), 200);
    }

    #[test]
    fn new_rejects_blank_location() {
        let err = SearchFilters::new("   ", radius(800), ["restaurant"]).unwrap_err();
        assert_eq!(err, FilterError::EmptyLocation);
    }

    #[test]
    fn new_rejects_empty_type_set() {
        let err = SearchFilters::new("Lot 1", radius(800), Vec::<String>::new()).unwrap_err();
        assert_eq!(err, FilterError::NoPlaceTypes);
    }

    #[test]
    fn new_rejects_unknown_type() {
        let err = SearchFilters::new("Lot 1", radius(800), ["car_wash"]).unwrap_err();
        assert_eq!(err, FilterError::UnknownPlaceType("car_wash".to_string()));
    }

    #[test]
    fn new_trims_location_and_dedupes_types() {
        let filters =
            SearchFilters::new("  Lot 1 ", radius(400), ["cafe", "bar", "cafe"]).unwrap();
        assert_eq!(filters.location_text(), "Lot 1");
        assert_eq!(filters.included_types(), ["cafe", "bar"]);
        assert!(filters.price_levels().is_empty());
        assert!(!filters.open_now());
    }

    #[test]
    fn with_all_types_selects_the_whole_catalog() {
        let filters = SearchFilters::with_all_types("Lot 1", SearchRadius::default()).unwrap();
        assert_eq!(filters.included_types().len(), PLACE_TYPE_OPTIONS.len());
    }

    #[test]
    fn toggle_type_refuses_to_remove_last_type() {
        let mut filters = SearchFilters::new("Lot 1", radius(200), ["bakery"]).unwrap();
        assert_eq!(filters.toggle_type("bakery"), Ok(false));
        assert_eq!(filters.included_types(), ["bakery"]);

        assert_eq!(filters.toggle_type("bar"), Ok(true));
        assert_eq!(filters.toggle_type("bakery"), Ok(true));
        assert_eq!(filters.included_types(), ["bar"]);
    }

    #[test]
    fn price_levels_drop_unspecified() {
        let filters = SearchFilters::new("Lot 1", radius(200), ["bar"])
            .unwrap()
            .with_price_levels([PriceLevel::Moderate, PriceLevel::Unspecified])
            .with_open_now(true);
        assert_eq!(filters.price_levels().len(), 1);
        assert!(filters.price_levels().contains(&PriceLevel::Moderate));
        assert!(filters.open_now());
    }
}
