//! Flow states and the browsing view over one session's results.

use grubl_core::{Coordinates, MapsLink, Venue, VenueCard};

use crate::cursor::BrowseCursor;

/// Monotonic id of a search session. Larger ids are newer.
pub type SessionId = u64;

/// Why a session ended with an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchFailure {
    /// The location resolved to nothing.
    LocationNotFound { address: String },
    /// The geocoding request failed.
    ResolveFailed { reason: String },
    /// Coordinates resolved but the venue search failed.
    SearchFailed { reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum FlowState {
    /// Form visible, nothing searched yet.
    Idle,
    /// Both requests of `session` are in flight.
    Loading { session: SessionId, location: String },
    Browsing(Browse),
}

impl FlowState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, FlowState::Loading { .. })
    }

    #[must_use]
    pub fn browse(&self) -> Option<&Browse> {
        match self {
            FlowState::Browsing(browse) => Some(browse),
            _ => None,
        }
    }
}

/// One session's results and the cursor into them.
///
/// The list never changes after construction; only the cursor moves.
#[derive(Debug, Clone, PartialEq)]
pub struct Browse {
    session: SessionId,
    center: Option<Coordinates>,
    venues: Vec<Venue>,
    cursor: BrowseCursor,
    failure: Option<SearchFailure>,
}

impl Browse {
    #[must_use]
    pub fn new(session: SessionId, center: Coordinates, venues: Vec<Venue>) -> Self {
        Self {
            session,
            center: Some(center),
            cursor: BrowseCursor::new(venues.len()),
            venues,
            failure: None,
        }
    }

    /// An empty result set carrying the reason the session failed.
    #[must_use]
    pub fn failed(session: SessionId, center: Option<Coordinates>, failure: SearchFailure) -> Self {
        Self {
            session,
            center,
            venues: Vec::new(),
            cursor: BrowseCursor::new(0),
            failure: Some(failure),
        }
    }

    #[must_use]
    pub fn session(&self) -> SessionId {
        self.session
    }

    /// Resolved search center, when resolution succeeded.
    #[must_use]
    pub fn center(&self) -> Option<Coordinates> {
        self.center
    }

    #[must_use]
    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    #[must_use]
    pub fn cursor(&self) -> BrowseCursor {
        self.cursor
    }

    #[must_use]
    pub fn failure(&self) -> Option<&SearchFailure> {
        self.failure.as_ref()
    }

    /// `true` for "no places found", whether or not the search failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }

    #[must_use]
    pub fn current(&self) -> Option<&Venue> {
        self.venues.get(self.cursor.index())
    }

    #[must_use]
    pub fn current_card(&self) -> Option<VenueCard> {
        self.current().map(VenueCard::from_venue)
    }

    #[must_use]
    pub fn cards(&self) -> Vec<VenueCard> {
        self.venues.iter().map(VenueCard::from_venue).collect()
    }

    /// Whether reject would move; the reject control is disabled otherwise.
    #[must_use]
    pub fn can_reject(&self) -> bool {
        !self.cursor.is_last()
    }

    /// Discards the current venue and shows the next one. Returns `false`
    /// at the last item.
    pub fn reject(&mut self) -> bool {
        self.cursor.advance()
    }

    /// Deep link for the current venue. Leaves the cursor and list as they are.
    #[must_use]
    pub fn accept(&self) -> Option<MapsLink> {
        self.current().map(MapsLink::for_venue)
    }
}
