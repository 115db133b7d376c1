//! Soccer round schedules and basketball rosters for a small sports app.
//!
//! The crate holds everything below the UI: the two provider clients, the
//! per-screen state holders and the [`View`] each screen renders from.

pub use client::{BasketballClient, SoccerClient};
pub use config::{BasketballConfig, Config, Secret, SoccerConfig};
pub use error::{Result, SportsError};
pub use model::*;
pub use provider::{RosterProvider, RoundsProvider};
pub use screen::{
    filter_roster, MatchCard, Outcome, Phase, RequestState, RosterScreen, RoundsScreen,
    SingleSlotCache, TeamCard, Teardown, View, EXCLUDED_TEAMS, NO_MATCHES,
};

pub(crate) mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod screen;
