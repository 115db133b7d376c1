//! The seams between the screens and the remote APIs.
//!
//! Each screen is generic over one of these traits. The HTTP clients in
//! [`crate::client`] implement them for production use; tests plug in
//! in-memory fakes.

use std::future::Future;
use std::sync::Arc;

use crate::error::Result;
use crate::model::{Match, Round, RoundId, Team};

/// Source of soccer rounds and their matches.
pub trait RoundsProvider {
    /// All selectable rounds, in provider order.
    fn rounds(&self) -> impl Future<Output = Result<Vec<Round>>> + Send;

    /// Matches scheduled in `round`, in provider order.
    fn round_matches(&self, round: RoundId) -> impl Future<Output = Result<Vec<Match>>> + Send;
}

/// Source of the unfiltered basketball team list.
pub trait RosterProvider {
    fn teams(&self) -> impl Future<Output = Result<Vec<Team>>> + Send;
}

impl<P: RoundsProvider + Send + Sync> RoundsProvider for Arc<P> {
    fn rounds(&self) -> impl Future<Output = Result<Vec<Round>>> + Send {
        (**self).rounds()
    }

    fn round_matches(&self, round: RoundId) -> impl Future<Output = Result<Vec<Match>>> + Send {
        (**self).round_matches(round)
    }
}

impl<P: RosterProvider + Send + Sync> RosterProvider for Arc<P> {
    fn teams(&self) -> impl Future<Output = Result<Vec<Team>>> + Send {
        (**self).teams()
    }
}
