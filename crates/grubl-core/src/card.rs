//! Card view of a single venue.

use std::fmt;

use crate::options::{emoji_for, humanize_type, FALLBACK_EMOJI, IGNORED_PLACE_TYPES};
use crate::venue::Venue;

/// Everything a front end needs to draw one venue card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueCard {
    pub title: String,
    pub emoji: &'static str,
    pub tags: Vec<String>,
    pub rating_line: String,
    pub price_line: String,
    pub photo_url: Option<String>,
}

impl VenueCard {
    #[must_use]
    pub fn from_venue(venue: &Venue) -> Self {
        let emoji = venue
            .primary_type
            .as_deref()
            .and_then(emoji_for)
            .unwrap_or(FALLBACK_EMOJI);

        let tags = venue
            .types
            .iter()
            .flatten()
            .filter(|t| emoji_for(t).is_some() && !IGNORED_PLACE_TYPES.contains(&t.as_str()))
            .map(|t| humanize_type(t))
            .collect();

        let rating_line = match (venue.rating, venue.rating_count) {
            (Some(rating), Some(count)) => format!("{rating} ⭐ ({count})"),
            (Some(rating), None) => format!("{rating} ⭐"),
            (None, _) => "No ratings yet".to_string(),
        };

        let price_line = venue
            .price_level
            .and_then(|level| level.label())
            .unwrap_or("No price data")
            .to_string();

        Self {
            title: venue.display_name().to_string(),
            emoji,
            tags,
            rating_line,
            price_line,
            photo_url: venue.photo_url.clone(),
        }
    }
}

impl fmt::Display for VenueCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}  {}", self.emoji, self.title)?;
        if !self.tags.is_empty() {
            writeln!(f, "   [{}]", self.tags.join("] ["))?;
        }
        writeln!(f, "   {}", self.rating_line)?;
        write!(f, "   {}", self.price_line)?;
        if let Some(url) = &self.photo_url {
            write!(f, "\n   photo: {url}")?;
        }
        Ok(())
    }
}
