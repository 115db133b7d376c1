use itertools::Itertools;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, warn};

use super::{unless_torn_down, Outcome, RequestState, Teardown, View};
use crate::model::{Roster, Team};
use crate::provider::RosterProvider;

/// Team names the basketball screen never shows.
pub const EXCLUDED_TEAMS: [&str; 2] = ["Panevezys W", "Perth"];

/// Whether `name` is on the exclusion list. Matching is exact.
pub fn is_excluded(name: &str) -> bool {
    EXCLUDED_TEAMS.contains(&name)
}

/// Drop excluded teams, keeping the provider's order for the rest.
pub fn filter_roster(teams: impl IntoIterator<Item = Team>) -> Roster {
    teams
        .into_iter()
        .filter(|team| !is_excluded(&team.name))
        .collect_vec()
}

/// One rendered row of the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamCard {
    pub id: u64,
    pub name: String,
    pub logo: Option<String>,
}

impl From<&Team> for TeamCard {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id,
            name: team.name.clone(),
            logo: team.logo.clone(),
        }
    }
}

/// State holder for the basketball team list.
///
/// The roster is fetched once, when the screen is activated, and stays
/// as-is for the screen's lifetime.
pub struct RosterScreen<P> {
    provider: P,
    roster: RequestState<Roster>,
    activated: bool,
    token: CancellationToken,
}

impl<P: RosterProvider> RosterScreen<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            roster: RequestState::pending(),
            activated: false,
            token: CancellationToken::new(),
        }
    }

    /// Fetch and filter the roster. Only the first call does anything.
    #[instrument(skip(self))]
    pub async fn load_roster(&mut self) -> Outcome {
        if self.token.is_cancelled() {
            return Outcome::Ignored;
        }
        if self.activated {
            return Outcome::Skipped;
        }
        self.activated = true;
        self.roster.begin();

        let settled = unless_torn_down(&self.token, self.provider.teams()).await;
        let Some(result) = settled else {
            return self.roster.abandon();
        };

        let result = result.map(|teams| {
            let fetched = teams.len();
            let roster = filter_roster(teams);
            debug!(fetched, kept = roster.len(), "loaded roster");
            roster
        });
        self.roster.settle(result, |e| {
            warn!(error = %e, "failed to fetch basketball teams");
            e.to_string()
        })
    }

    pub fn teardown_handle(&self) -> Teardown {
        Teardown(self.token.clone())
    }

    pub fn teardown(&self) {
        self.token.cancel();
    }

    pub fn view(&self) -> View<Vec<TeamCard>> {
        if self.roster.loading {
            View::Loading
        } else if let Some(error) = &self.roster.error {
            View::Error(error.clone())
        } else {
            View::Ready(self.roster.data.iter().map(TeamCard::from).collect_vec())
        }
    }

    pub fn roster(&self) -> &[Team] {
        &self.roster.data
    }

    pub fn error(&self) -> Option<&str> {
        self.roster.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.roster.loading
    }
}

impl<P> Drop for RosterScreen<P> {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::error::{Result, SportsError};

    struct FakeRoster {
        teams: Option<Vec<Team>>,
        calls: AtomicUsize,
    }

    impl FakeRoster {
        fn ok(teams: Vec<Team>) -> Self {
            Self {
                teams: Some(teams),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                teams: None,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl RosterProvider for FakeRoster {
        async fn teams(&self) -> Result<Vec<Team>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.teams
                .clone()
                .ok_or_else(|| SportsError::UnexpectedStatus {
                    url: "/teams?limit=10".to_string(),
                    status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                })
        }
    }

    #[test]
    fn test_filter_removes_excluded_and_keeps_order() {
        let teams = vec![
            Team::new(1, "Perth"),
            Team::new(2, "Lakers"),
            Team::new(3, "Panevezys W"),
            Team::new(4, "Celtics"),
            Team::new(5, "Perth Wildcats"),
            Team::new(6, "perth"),
        ];
        let names = filter_roster(teams)
            .into_iter()
            .map(|t| t.name)
            .collect_vec();
        assert_eq!(names, vec!["Lakers", "Celtics", "Perth Wildcats", "perth"]);
    }

    #[test]
    fn test_filter_is_pure() {
        let teams = vec![Team::new(1, "Perth"), Team::new(2, "Lakers")];
        assert_eq!(filter_roster(teams.clone()), filter_roster(teams));
    }

    #[tokio::test]
    async fn test_load_roster_filters() {
        let mut screen = RosterScreen::new(FakeRoster::ok(vec![
            Team::new(1, "Perth"),
            Team::new(2, "Lakers"),
        ]));
        assert!(screen.view().is_loading());

        assert_eq!(screen.load_roster().await, Outcome::Loaded);

        assert_eq!(screen.roster(), &[Team::new(2, "Lakers")]);
        assert!(!screen.is_loading());
        assert_eq!(
            screen.view(),
            View::Ready(vec![TeamCard {
                id: 2,
                name: "Lakers".to_string(),
                logo: None,
            }])
        );
    }

    #[tokio::test]
    async fn test_load_roster_server_error() {
        let mut screen = RosterScreen::new(FakeRoster::failing());

        assert_eq!(screen.load_roster().await, Outcome::Failed);

        assert!(!screen.is_loading());
        assert!(screen.roster().is_empty());
        let error = screen.error().unwrap();
        assert!(error.contains("Internal Server Error"));
        assert_eq!(screen.view(), View::Error(error.to_string()));
    }

    #[tokio::test]
    async fn test_load_roster_runs_once() {
        let provider = Arc::new(FakeRoster::ok(vec![Team::new(2, "Lakers")]));
        let mut screen = RosterScreen::new(provider.clone());

        assert_eq!(screen.load_roster().await, Outcome::Loaded);
        assert_eq!(screen.load_roster().await, Outcome::Skipped);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_roster_is_ready_not_empty() {
        let mut screen = RosterScreen::new(FakeRoster::ok(vec![Team::new(1, "Perth")]));
        screen.load_roster().await;
        assert_eq!(screen.view(), View::Ready(vec![]));
    }

    #[tokio::test]
    async fn test_torn_down_roster_is_ignored() {
        let provider = Arc::new(FakeRoster::ok(vec![Team::new(2, "Lakers")]));
        let mut screen = RosterScreen::new(provider.clone());
        screen.teardown_handle().cancel();

        assert_eq!(screen.load_roster().await, Outcome::Ignored);
        assert!(screen.roster().is_empty());
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_teardown_keeps_roster_error() {
        let mut screen = RosterScreen::new(FakeRoster::failing());
        assert_eq!(screen.load_roster().await, Outcome::Failed);
        let error = screen.error().unwrap().to_string();
        screen.teardown();

        assert_eq!(screen.load_roster().await, Outcome::Ignored);
        assert_eq!(screen.error(), Some(error.as_str()));
        assert_eq!(screen.view(), View::Error(error));
    }
}
