//! User-facing notifications emitted by the flow.

use grubl_places::PlacesError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// The location could not be resolved to coordinates.
    NotFound,
    /// A request failed to complete.
    Network,
}

/// A non-blocking message for the user. Diagnostics go to the log; this
/// only carries what should be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub(crate) fn for_resolve_error(err: &PlacesError) -> Self {
        if err.is_not_found() {
            Self {
                kind: NoticeKind::NotFound,
                message: "Could not find coordinates for the provided address.".to_string(),
            }
        } else {
            Self {
                kind: NoticeKind::Network,
                message: "Failed to fetch coordinates.".to_string(),
            }
        }
    }

    pub(crate) fn for_search_error() -> Self {
        Self {
            kind: NoticeKind::Network,
            message: "Failed to fetch places.".to_string(),
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
