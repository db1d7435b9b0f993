//! Request lifecycle controller
//!
//! Wraps the gateway call in an explicit state machine. Created `Idle`;
//! `Loading` is entered only from `Idle` or a terminal state, and the
//! terminal states only from `Loading`. At most one submission is in
//! flight; there is no cancellation and no client-side timeout, so a hung
//! request stays `Loading`.

use std::sync::{Mutex, PoisonError};

use tracing::{error, info, warn};

use crate::gateway::AnalysisApi;
use crate::stores::{FileSelection, FileSlot};
use crate::view_model::ResultViewModel;
use synergyfit_shared::models::UserPreferences;
use synergyfit_shared::types::AnalysisResult;

/// Lifecycle of the single analysis request
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState {
    /// No request issued yet
    Idle,
    /// Request in flight; no result or error available
    Loading,
    /// Terminal success; the result is immutable once set
    Succeeded(AnalysisResult),
    /// Terminal failure with the normalized human-readable cause
    Failed(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            RequestState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Synchronous answer to a `trigger` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// The submission ran to a terminal state
    Submitted,
    /// Precondition failure: these slots are still empty; no state
    /// transition happened and the gateway was not called
    MissingInput(Vec<FileSlot>),
    /// A submission is already in flight; the call was ignored
    AlreadyInFlight,
}

/// Owns the single `RequestState` cell and drives it through the gateway
///
/// The state mutex is held only for reads and writes, never across the
/// network await, so the presentation layer can observe `Loading`
/// mid-flight.
pub struct AnalysisController<A> {
    api: A,
    state: Mutex<RequestState>,
}

impl<A: AnalysisApi> AnalysisController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: Mutex::new(RequestState::Idle),
        }
    }

    /// Snapshot of the current request state
    pub fn state(&self) -> RequestState {
        self.lock_state().clone()
    }

    /// The four renderable sections of a succeeded result, if any
    pub fn view_model(&self) -> Option<ResultViewModel> {
        self.lock_state().result().map(ResultViewModel::project)
    }

    /// Run one submission cycle.
    ///
    /// Re-entrant calls while `Loading` are ignored rather than spawning a
    /// second request; an incomplete selection is signalled synchronously
    /// without touching the state or the gateway.
    pub async fn trigger(
        &self,
        files: &FileSelection,
        prefs: &UserPreferences,
    ) -> TriggerOutcome {
        {
            let mut state = self.lock_state();
            if state.is_loading() {
                warn!("Submission already in flight; trigger ignored");
                return TriggerOutcome::AlreadyInFlight;
            }

            let missing = files.missing_slots();
            if !missing.is_empty() {
                info!(missing = ?missing, "Submission blocked on missing input");
                return TriggerOutcome::MissingInput(missing);
            }

            // Re-submission discards the previous terminal state.
            *state = RequestState::Loading;
        }

        let outcome = self.api.submit(files, prefs).await;

        let mut state = self.lock_state();
        *state = match outcome {
            Ok(result) => RequestState::Succeeded(result),
            Err(err) => {
                error!("Analysis submission failed: {err}");
                RequestState::Failed(err.to_string())
            }
        };
        TriggerOutcome::Submitted
    }

    // Poison-tolerant: a panicked test thread must not wedge the state cell.
    fn lock_state(&self) -> std::sync::MutexGuard<'_, RequestState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_accessors() {
        assert!(!RequestState::Idle.is_loading());
        assert!(RequestState::Loading.is_loading());
        assert_eq!(RequestState::Failed("boom".into()).error(), Some("boom"));
        assert!(RequestState::Idle.result().is_none());
    }
}
