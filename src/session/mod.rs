//! Prediction session
//!
//! Owns one [`Selection`] and the latest forecast, and drives the
//! `Idle -> Loading -> Success | Failed` cycle. Each load is tagged with a
//! sequence number; a completion for anything but the most recent load is
//! discarded, so overlapping requests can never apply out of order.

use crate::client::{ClientError, PredictionApi, PredictionRequest, PredictionResponse};
use crate::location::Location;
use crate::selection::{Metal, Purity, Selection};
use chrono::{DateTime, Utc};

/// Message shown for any failed load
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load predictions. Please try again.";

/// Where the current prediction cycle is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    /// Nothing requested yet
    Idle,
    /// A request is in flight
    Loading,
    /// The latest request succeeded
    Success,
    /// The latest request failed; retry is available
    Failed,
}

/// A load that has been started but not completed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    /// Sequence number to pass back to [`PredictionSession::complete`]
    pub seq: u64,
    /// Request built from the selection at the time the load started
    pub request: PredictionRequest,
}

/// What happened to a completed request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Response replaced the current forecast
    Applied,
    /// Failure recorded; previous forecast kept
    Failed,
    /// A newer load was started since; result dropped
    Stale,
}

/// Dashboard state container
#[derive(Debug, Clone)]
pub struct PredictionSession {
    selection: Selection,
    state: FetchState,
    predictions: Option<PredictionResponse>,
    error: Option<String>,
    latest_seq: u64,
    fetched_at: Option<DateTime<Utc>>,
}

impl Default for PredictionSession {
    fn default() -> Self {
        Self::new(Selection::default())
    }
}

impl PredictionSession {
    /// Session starting from `selection`, with no forecast loaded
    pub fn new(selection: Selection) -> Self {
        Self {
            selection,
            state: FetchState::Idle,
            predictions: None,
            error: None,
            latest_seq: 0,
            fetched_at: None,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn state(&self) -> FetchState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == FetchState::Loading
    }

    /// Latest successful forecast, kept across failures
    pub fn predictions(&self) -> Option<&PredictionResponse> {
        self.predictions.as_ref()
    }

    /// User-facing error from the latest load
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// When the current forecast was applied
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    /// Sequence number of the most recent load
    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    /// Change metal (resetting purity and weight) and start a reload
    pub fn set_metal(&mut self, metal: Metal) -> PendingRequest {
        self.selection.set_metal(metal);
        self.begin_load()
    }

    /// Change location and start a reload
    pub fn set_location(&mut self, location: Location) -> PendingRequest {
        self.selection.set_location(location);
        self.begin_load()
    }

    /// Change purity and start a reload
    pub fn set_purity(&mut self, purity: Option<Purity>) -> PendingRequest {
        self.selection.set_purity(purity);
        self.begin_load()
    }

    /// Change weight and start a reload
    pub fn set_unit(&mut self, unit: u32) -> PendingRequest {
        self.selection.set_unit(unit);
        self.begin_load()
    }

    /// Enter `Loading` for the current selection
    ///
    /// Clears any previous error. The forecast on display is kept until a
    /// new one arrives.
    pub fn begin_load(&mut self) -> PendingRequest {
        self.latest_seq += 1;
        self.state = FetchState::Loading;
        self.error = None;

        let request = PredictionRequest::from(&self.selection);
        tracing::debug!(seq = self.latest_seq, ?request, "Loading predictions");

        PendingRequest {
            seq: self.latest_seq,
            request,
        }
    }

    /// Re-issue the request for whatever the selection is now
    pub fn retry(&mut self) -> PendingRequest {
        tracing::info!(previous = ?self.state, "Retrying predictions");
        self.begin_load()
    }

    /// Apply the result of the load tagged `seq`
    pub fn complete(
        &mut self,
        seq: u64,
        result: Result<PredictionResponse, ClientError>,
    ) -> Completion {
        if seq != self.latest_seq {
            tracing::warn!(
                seq,
                latest = self.latest_seq,
                "Discarding response from superseded request"
            );
            return Completion::Stale;
        }

        match result {
            Ok(data) => {
                self.predictions = Some(data);
                self.fetched_at = Some(Utc::now());
                self.state = FetchState::Success;
                Completion::Applied
            }
            Err(e) => {
                tracing::warn!(seq, error = %e, "Failed to load predictions");
                self.error = Some(LOAD_ERROR_MESSAGE.to_string());
                self.state = FetchState::Failed;
                Completion::Failed
            }
        }
    }

    /// Start a load, wait for it, and apply the result
    pub async fn load<A>(&mut self, api: &A) -> Completion
    where
        A: PredictionApi + ?Sized,
    {
        let pending = self.begin_load();
        self.run(api, pending).await
    }

    /// Await a load started with one of the setters, [`begin_load`] or
    /// [`retry`], and apply the result
    ///
    /// [`begin_load`]: PredictionSession::begin_load
    /// [`retry`]: PredictionSession::retry
    pub async fn run<A>(&mut self, api: &A, pending: PendingRequest) -> Completion
    where
        A: PredictionApi + ?Sized,
    {
        let result = api.fetch_predictions(&pending.request).await;
        self.complete(pending.seq, result)
    }
}
