//! Per-screen state holders.
//!
//! A screen owns its request state, runs the fetches for its flow, and
//! exposes a [`View`] for the rendering layer. Screens never share state.

mod cache;
mod roster;
mod rounds;

use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::error::SportsError;

pub use cache::SingleSlotCache;
pub use roster::{filter_roster, is_excluded, RosterScreen, TeamCard, EXCLUDED_TEAMS};
pub use rounds::{MatchCard, Phase, RoundsScreen, NO_MATCHES};

/// What the rendering layer should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View<T> {
    /// A fetch is in flight; show a busy indicator.
    Loading,
    /// The last fetch failed; show the message in place of the list.
    Error(String),
    /// The fetch succeeded with nothing to show.
    Empty,
    Ready(T),
}

impl<T> View<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, View::Loading)
    }
}

/// How a screen operation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Fresh data was fetched and stored.
    Loaded,
    /// Data was served from the screen's cache without a request.
    Cached,
    /// The request failed; the error message is stored on the screen.
    Failed,
    /// Nothing to do (no selection, or a one-shot fetch already ran).
    Skipped,
    /// The screen was torn down before the fetch settled; its result was dropped.
    Ignored,
}

/// Loading flag, error message and payload of one fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestState<T> {
    pub loading: bool,
    pub error: Option<String>,
    pub data: T,
}

impl<T: Default> RequestState<T> {
    /// State of a fetch that starts as soon as the screen is shown.
    pub fn pending() -> Self {
        Self {
            loading: true,
            error: None,
            data: T::default(),
        }
    }

    /// State of a fetch that waits for user input.
    pub fn idle() -> Self {
        Self {
            loading: false,
            error: None,
            data: T::default(),
        }
    }
}

impl<T> RequestState<T> {
    pub(crate) fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Store the result of a settled fetch. The loading flag is cleared on
    /// both paths; a failure keeps the previous payload.
    pub(crate) fn settle(
        &mut self,
        result: Result<T, SportsError>,
        message: impl FnOnce(&SportsError) -> String,
    ) -> Outcome {
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = data;
                self.error = None;
                Outcome::Loaded
            }
            Err(e) => {
                self.error = Some(message(&e));
                Outcome::Failed
            }
        }
    }

    /// Drop the result of a fetch whose screen is gone.
    pub(crate) fn abandon(&mut self) -> Outcome {
        self.loading = false;
        Outcome::Ignored
    }
}

/// Handle that marks a screen as gone.
///
/// Fetches that settle after [`Teardown::cancel`] are ignored instead of
/// writing into the screen. Dropping the screen cancels it as well.
#[derive(Debug, Clone)]
pub struct Teardown(CancellationToken);

impl Teardown {
    pub fn cancel(&self) {
        self.0.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.is_cancelled()
    }
}

/// Run `fut` unless `token` fires first.
pub(crate) async fn unless_torn_down<F: Future>(
    token: &CancellationToken,
    fut: F,
) -> Option<F::Output> {
    if token.is_cancelled() {
        return None;
    }
    tokio::select! {
        biased;
        _ = token.cancelled() => None,
        out = fut => Some(out),
    }
}
