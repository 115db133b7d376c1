use std::fmt;
use std::time::Duration;

use tracing::debug;

use crate::error::{Result, SportsError};

pub const DEFAULT_SOCCER_URL: &str = "https://api.api-futebol.com.br/v1/campeonatos/10";
pub const DEFAULT_BASKETBALL_URL: &str = "https://basketball-highlights-api.p.rapidapi.com";
pub const DEFAULT_BASKETBALL_HOST: &str = "basketball-highlights-api.p.rapidapi.com";
pub const DEFAULT_ROSTER_LIMIT: u32 = 10;
pub const DEFAULT_MATCHES_DELAY: Duration = Duration::from_secs(2);

/// A credential that never shows up in `Debug` output or logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

/// Soccer provider settings.
#[derive(Debug, Clone)]
pub struct SoccerConfig {
    /// Championship base URL, without the trailing `/rodadas/`.
    pub base_url: String,
    /// Bearer token sent in the `Authorization` header.
    pub token: Secret,
}

/// Basketball provider settings.
#[derive(Debug, Clone)]
pub struct BasketballConfig {
    pub base_url: String,
    /// Value of the `x-rapidapi-key` header.
    pub api_key: Secret,
    /// Value of the `x-rapidapi-host` header.
    pub api_host: String,
    /// Page size requested from the roster endpoint.
    pub roster_limit: u32,
}

/// Everything the two screens need to reach their providers.
#[derive(Debug, Clone)]
pub struct Config {
    pub soccer: SoccerConfig,
    pub basketball: BasketballConfig,
    /// Fixed pause before every match lookup.
    pub matches_delay: Duration,
    /// Per-request timeout. `None` keeps reqwest's default of no timeout.
    pub request_timeout: Option<Duration>,
}

impl Config {
    /// Load the configuration from the process environment, after merging a
    /// `.env` file from the working directory if there is one.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "loaded .env file");
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required = |name: &'static str| var(name).ok_or(SportsError::MissingConfig { name });

        let soccer = SoccerConfig {
            base_url: trim_base(var("SOCCER_API_URL").unwrap_or_else(|| DEFAULT_SOCCER_URL.into())),
            token: Secret::new(required("SOCCER_API_TOKEN")?),
        };

        let basketball = BasketballConfig {
            base_url: trim_base(
                var("BASKETBALL_API_URL").unwrap_or_else(|| DEFAULT_BASKETBALL_URL.into()),
            ),
            api_key: Secret::new(required("BASKETBALL_API_KEY")?),
            api_host: var("BASKETBALL_API_HOST").unwrap_or_else(|| DEFAULT_BASKETBALL_HOST.into()),
            roster_limit: parse_var(&var, "BASKETBALL_ROSTER_LIMIT")?
                .unwrap_or(DEFAULT_ROSTER_LIMIT),
        };

        let matches_delay = parse_var(&var, "SOCCER_MATCHES_DELAY_MS")?
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_MATCHES_DELAY);
        let request_timeout =
            parse_var(&var, "SPORTS_REQUEST_TIMEOUT_SECS")?.map(Duration::from_secs);

        Ok(Self {
            soccer,
            basketball,
            matches_delay,
            request_timeout,
        })
    }

    /// Build the shared HTTP client honouring [`Config::request_timeout`].
    pub fn http_client(&self) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder.build().map_err(SportsError::ClientBuild)
    }
}

fn parse_var<T: std::str::FromStr>(
    var: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>> {
    var(name)
        .map(|value| {
            value
                .parse()
                .map_err(|_| SportsError::InvalidConfig { name, value })
        })
        .transpose()
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
