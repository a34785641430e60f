//! The selection flow: `Idle -> Loading -> Browsing`.
//!
//! Each search gets a new [`SessionId`]. Starting a session and publishing
//! its results both happen under one lock, and results are only published
//! when their session is still the latest, so a slow earlier search can
//! never overwrite a newer one. Sessions started with
//! [`SelectionFlow::spawn_search`] are additionally aborted when superseded.

use std::sync::Arc;

use grubl_core::{localize_address, AppConfig, MapsLink, SearchFilters, VenueCard};
use grubl_places::{PlacesClient, PlacesError};
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::Mutex;
use tokio::task::{AbortHandle, JoinHandle};

use crate::notice::Notice;
use crate::state::{Browse, FlowState, SearchFailure, SessionId};

struct Inner {
    state: FlowState,
    latest: SessionId,
    in_flight: Option<AbortHandle>,
}

/// Drives search sessions and holds the browsing state.
///
/// User-facing failures are pushed to the `notices` channel; the flow
/// itself never fails.
pub struct SelectionFlow {
    client: PlacesClient,
    locale_suffix: Option<String>,
    notices: UnboundedSender<Notice>,
    inner: Mutex<Inner>,
}

impl SelectionFlow {
    #[must_use]
    pub fn new(client: PlacesClient, notices: UnboundedSender<Notice>) -> Self {
        Self {
            client,
            locale_suffix: None,
            notices,
            inner: Mutex::new(Inner {
                state: FlowState::Idle,
                latest: 0,
                in_flight: None,
            }),
        }
    }

    /// Builds the places client and locale handling from configuration.
    ///
    /// # Errors
    ///
    /// Returns the [`PlacesError`] from [`PlacesClient::from_config`].
    pub fn from_config(
        config: &AppConfig,
        notices: UnboundedSender<Notice>,
    ) -> Result<Self, PlacesError> {
        let client = PlacesClient::from_config(config)?;
        Ok(Self::new(client, notices).with_locale_suffix(config.locale_suffix.clone()))
    }

    /// Suffix appended to every location before geocoding.
    #[must_use]
    pub fn with_locale_suffix(mut self, suffix: Option<String>) -> Self {
        self.locale_suffix = suffix;
        self
    }

    #[must_use]
    pub fn client(&self) -> &PlacesClient {
        &self.client
    }

    /// A copy of the current state.
    pub async fn state(&self) -> FlowState {
        self.inner.lock().await.state.clone()
    }

    /// Runs one session to completion on the current task.
    ///
    /// Returns the session's id. Whether its results were published can be
    /// read from [`SelectionFlow::state`]: they were if the browsing
    /// session matches.
    pub async fn run_search(&self, filters: SearchFilters) -> SessionId {
        let session = self.begin(filters.location_text()).await;
        self.run_session(session, &filters).await;
        session
    }

    /// Starts a session on a new task, aborting the previous spawned session
    /// if it is still running.
    pub async fn spawn_search(self: &Arc<Self>, filters: SearchFilters) -> JoinHandle<()> {
        // The handle is stored under the same lock that allocated the
        // session, so the next `begin` always finds it.
        let mut inner = self.inner.lock().await;
        let session = Self::begin_locked(&mut inner, filters.location_text());
        let flow = Arc::clone(self);
        let handle = tokio::spawn(async move {
            flow.run_session(session, &filters).await;
        });
        inner.in_flight = Some(handle.abort_handle());
        handle
    }

    /// Returns to the form. Any in-flight session is abandoned.
    pub async fn cancel(&self) {
        let mut inner = self.inner.lock().await;
        inner.latest += 1;
        if let Some(previous) = inner.in_flight.take() {
            previous.abort();
        }
        inner.state = FlowState::Idle;
        tracing::debug!(superseded_by = inner.latest, "flow reset to idle");
    }

    /// Rejects the current venue. Returns `false` when nothing moved.
    pub async fn reject(&self) -> bool {
        let mut inner = self.inner.lock().await;
        match &mut inner.state {
            FlowState::Browsing(browse) => browse.reject(),
            _ => false,
        }
    }

    /// Deep link for the current venue; browsing continues afterwards.
    pub async fn accept(&self) -> Option<MapsLink> {
        let inner = self.inner.lock().await;
        let browse = inner.state.browse()?;
        let link = browse.accept()?;
        tracing::info!(
            session = browse.session(),
            index = browse.cursor().index(),
            %link,
            "venue accepted"
        );
        Some(link)
    }

    pub async fn current_card(&self) -> Option<VenueCard> {
        self.inner
            .lock()
            .await
            .state
            .browse()
            .and_then(Browse::current_card)
    }

    /// Allocates a session id and enters `Loading` in one locked write.
    async fn begin(&self, location: &str) -> SessionId {
        let mut inner = self.inner.lock().await;
        Self::begin_locked(&mut inner, location)
    }

    fn begin_locked(inner: &mut Inner, location: &str) -> SessionId {
        inner.latest += 1;
        let session = inner.latest;
        if let Some(previous) = inner.in_flight.take() {
            previous.abort();
        }
        inner.state = FlowState::Loading {
            session,
            location: location.to_string(),
        };
        tracing::info!(session, location, "search started");
        session
    }

    /// Resolve, then search. The search is skipped when resolution fails.
    async fn run_session(&self, session: SessionId, filters: &SearchFilters) {
        let address = localize_address(filters.location_text(), self.locale_suffix.as_deref());

        let (browse, notice) = match self.client.resolve_coordinates(&address).await {
            Err(e) => {
                tracing::warn!(session, %address, error = %e, "coordinate resolution failed");
                let failure = if e.is_not_found() {
                    SearchFailure::LocationNotFound {
                        address: address.clone(),
                    }
                } else {
                    SearchFailure::ResolveFailed {
                        reason: e.to_string(),
                    }
                };
                (
                    Browse::failed(session, None, failure),
                    Some(Notice::for_resolve_error(&e)),
                )
            }
            Ok(center) => match self.client.search_nearby(center, filters).await {
                Ok(venues) => {
                    tracing::info!(session, count = venues.len(), "search finished");
                    (Browse::new(session, center, venues), None)
                }
                Err(e) => {
                    tracing::warn!(session, %center, error = %e, "venue search failed");
                    (
                        Browse::failed(
                            session,
                            Some(center),
                            SearchFailure::SearchFailed {
                                reason: e.to_string(),
                            },
                        ),
                        Some(Notice::for_search_error()),
                    )
                }
            },
        };

        self.commit(browse, notice).await;
    }

    /// Publishes `browse` if its session is still the latest. Stale results
    /// and their notices are dropped.
    async fn commit(&self, browse: Browse, notice: Option<Notice>) -> bool {
        let session = browse.session();
        {
            let mut inner = self.inner.lock().await;
            if inner.latest != session {
                tracing::debug!(session, latest = inner.latest, "discarding stale session");
                return false;
            }
            inner.state = FlowState::Browsing(browse);
            inner.in_flight = None;
        }

        if let Some(notice) = notice {
            if self.notices.send(notice).is_err() {
                tracing::debug!(session, "notice receiver dropped");
            }
        }
        true
    }
}
