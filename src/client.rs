use tracing::instrument;

use crate::api;
use crate::config::{BasketballConfig, Config, SoccerConfig};
use crate::error::Result;
use crate::model::{Match, Round, RoundId, Team};
use crate::provider::{RosterProvider, RoundsProvider};

/// Client for the soccer schedule API.
///
/// Wraps a [`reqwest::Client`] and the provider settings; every request
/// carries the configured bearer token.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> sports_feed::Result<()> {
/// use sports_feed::{Config, SoccerClient};
///
/// let config = Config::from_env()?;
/// let client = SoccerClient::from_config(&config)?;
/// let rounds = client.get_rounds().await?;
/// println!("Found {} rounds", rounds.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SoccerClient {
    http: reqwest::Client,
    config: SoccerConfig,
}

impl SoccerClient {
    /// Create a client with a default [`reqwest::Client`].
    pub fn new(config: SoccerConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client, config: SoccerConfig) -> Self {
        Self {
            http: client,
            config,
        }
    }

    /// Create a client from the full configuration, honouring its timeout.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::with_client(
            config.http_client()?,
            config.soccer.clone(),
        ))
    }

    /// Fetch all rounds of the championship.
    #[instrument(skip(self))]
    pub async fn get_rounds(&self) -> Result<Vec<Round>> {
        api::soccer::get_rounds(&self.http, &self.config).await
    }

    /// Fetch the matches of a single round.
    #[instrument(skip(self))]
    pub async fn get_round_matches(&self, round: RoundId) -> Result<Vec<Match>> {
        api::soccer::get_round_matches(&self.http, &self.config, round).await
    }
}

impl RoundsProvider for SoccerClient {
    async fn rounds(&self) -> Result<Vec<Round>> {
        self.get_rounds().await
    }

    async fn round_matches(&self, round: RoundId) -> Result<Vec<Match>> {
        self.get_round_matches(round).await
    }
}

/// Client for the basketball team API.
///
/// Every request carries the RapidAPI key and host headers.
#[derive(Debug, Clone)]
pub struct BasketballClient {
    http: reqwest::Client,
    config: BasketballConfig,
}

impl BasketballClient {
    /// Create a client with a default [`reqwest::Client`].
    pub fn new(config: BasketballConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a client using the provided [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: BasketballConfig) -> Self {
        Self {
            http: client,
            config,
        }
    }

    /// Create a client from the full configuration, honouring its timeout.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::with_client(
            config.http_client()?,
            config.basketball.clone(),
        ))
    }

    /// Fetch one page of teams, unfiltered.
    #[instrument(skip(self))]
    pub async fn get_teams(&self) -> Result<Vec<Team>> {
        api::basketball::get_teams(&self.http, &self.config).await
    }
}

impl RosterProvider for BasketballClient {
    async fn teams(&self) -> Result<Vec<Team>> {
        self.get_teams().await
    }
}
