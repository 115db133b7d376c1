use std::time::Duration;

use itertools::Itertools;
use serde::Serialize;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, warn};

use super::{unless_torn_down, Outcome, RequestState, SingleSlotCache, Teardown, View};
use crate::config::DEFAULT_MATCHES_DELAY;
use crate::model::{Match, Round, RoundId};
use crate::provider::RoundsProvider;

/// Text shown when a round has no matches.
pub const NO_MATCHES: &str = "no matches found for this round";

/// Where the round/match flow currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    Idle,
    RoundsLoading,
    RoundsReady,
    RoundsError,
    MatchesLoading,
    MatchesReady,
    MatchesError,
    TornDown,
}

/// One rendered row of the match list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchCard {
    pub id: u64,
    pub home_name: String,
    pub home_crest: String,
    pub score: String,
    pub away_name: String,
    pub away_crest: String,
    pub date: String,
    pub time: String,
    pub venue: String,
}

impl From<&Match> for MatchCard {
    fn from(m: &Match) -> Self {
        Self {
            id: m.id,
            home_name: m.home.name.clone(),
            home_crest: m.home.crest_url.clone(),
            score: m.score.clone(),
            away_name: m.away.name.clone(),
            away_crest: m.away.crest_url.clone(),
            date: m.date.clone(),
            time: m.time.clone(),
            venue: m.venue_name().to_string(),
        }
    }
}

/// State holder for the "pick a round, see its matches" screen.
///
/// Rounds are loaded once per screen and kept in a [`SingleSlotCache`]
/// owned by the screen; matches are loaded on demand for the selected
/// round after a fixed delay.
pub struct RoundsScreen<P> {
    provider: P,
    matches_delay: Duration,
    cache: SingleSlotCache<Vec<Round>>,
    selected: Option<RoundId>,
    rounds: RequestState<Vec<Round>>,
    matches: RequestState<Vec<Match>>,
    phase: Phase,
    token: CancellationToken,
}

impl<P: RoundsProvider> RoundsScreen<P> {
    pub fn new(provider: P) -> Self {
        Self::with_delay(provider, DEFAULT_MATCHES_DELAY)
    }

    pub fn with_delay(provider: P, matches_delay: Duration) -> Self {
        Self {
            provider,
            matches_delay,
            cache: SingleSlotCache::new(),
            selected: None,
            rounds: RequestState::pending(),
            matches: RequestState::idle(),
            phase: Phase::Idle,
            token: CancellationToken::new(),
        }
    }

    /// Load the selectable rounds, from the screen cache when filled.
    #[instrument(skip(self))]
    pub async fn load_rounds(&mut self) -> Outcome {
        if self.token.is_cancelled() {
            return Outcome::Ignored;
        }

        if let Some(rounds) = self.cache.get() {
            debug!(count = rounds.len(), "serving rounds from cache");
            self.rounds.data = rounds;
            self.rounds.loading = false;
            // A cache hit must not rewind a screen that already shows matches.
            if matches!(
                self.phase,
                Phase::Idle | Phase::RoundsLoading | Phase::RoundsError
            ) {
                self.phase = Phase::RoundsReady;
            }
            return Outcome::Cached;
        }

        self.rounds.begin();
        self.phase = Phase::RoundsLoading;

        let settled = unless_torn_down(&self.token, self.provider.rounds()).await;
        let Some(result) = settled else {
            self.phase = Phase::TornDown;
            return self.rounds.abandon();
        };

        if let Ok(rounds) = &result {
            debug!(count = rounds.len(), "loaded rounds");
            self.cache.store(rounds.clone());
        }
        let outcome = self.rounds.settle(result, |e| {
            warn!(error = %e, "failed to fetch rounds");
            "failed to fetch rounds".to_string()
        });
        self.phase = match outcome {
            Outcome::Loaded => Phase::RoundsReady,
            _ => Phase::RoundsError,
        };
        outcome
    }

    pub fn select_round(&mut self, round: Option<RoundId>) {
        self.selected = round;
    }

    /// Load matches for the selected round. Without a selection this does
    /// nothing.
    pub async fn search(&mut self) -> Outcome {
        match self.selected {
            Some(round) => self.load_matches(round).await,
            None => Outcome::Skipped,
        }
    }

    /// Load the matches of `round`, replacing the current list on success.
    #[instrument(skip(self))]
    pub async fn load_matches(&mut self, round: RoundId) -> Outcome {
        if self.token.is_cancelled() {
            return Outcome::Ignored;
        }

        self.matches.begin();
        self.phase = Phase::MatchesLoading;

        let delay = self.matches_delay;
        let provider = &self.provider;
        let fetch = async move {
            sleep(delay).await;
            provider.round_matches(round).await
        };
        let settled = unless_torn_down(&self.token, fetch).await;
        let Some(result) = settled else {
            self.phase = Phase::TornDown;
            return self.matches.abandon();
        };

        if let Ok(matches) = &result {
            debug!(count = matches.len(), %round, "loaded matches");
        }
        let outcome = self.matches.settle(result, |e| {
            warn!(error = %e, %round, "failed to fetch matches");
            format!("failed to fetch matches for round {round}")
        });
        self.phase = match outcome {
            Outcome::Loaded => Phase::MatchesReady,
            _ => Phase::MatchesError,
        };
        outcome
    }

    /// Handle for the view layer to mark this screen as gone.
    pub fn teardown_handle(&self) -> Teardown {
        Teardown(self.token.clone())
    }

    pub fn teardown(&self) {
        self.token.cancel();
    }

    pub fn view(&self) -> View<Vec<MatchCard>> {
        if self.rounds.loading || self.matches.loading {
            View::Loading
        } else if let Some(error) = self.error() {
            View::Error(error.to_string())
        } else if self.matches.data.is_empty() {
            View::Empty
        } else {
            View::Ready(self.matches.data.iter().map(MatchCard::from).collect_vec())
        }
    }

    /// The most recent error; a match lookup error hides a rounds error.
    pub fn error(&self) -> Option<&str> {
        self.matches
            .error
            .as_deref()
            .or(self.rounds.error.as_deref())
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds.data
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches.data
    }

    pub fn selected_round(&self) -> Option<RoundId> {
        self.selected
    }

    pub fn rounds_loading(&self) -> bool {
        self.rounds.loading
    }

    pub fn matches_loading(&self) -> bool {
        self.matches.loading
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn cache(&self) -> &SingleSlotCache<Vec<Round>> {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut SingleSlotCache<Vec<Round>> {
        &mut self.cache
    }
}

impl<P> Drop for RoundsScreen<P> {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
