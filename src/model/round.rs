use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::common::null_as_default;

pub(crate) const MATCH_DATE_FORMAT: &str = "%d/%m/%Y";
pub(crate) const MATCH_TIME_FORMAT: &str = "%H:%M";

/// Venue text shown when a match has no venue attached.
pub const UNKNOWN_VENUE: &str = "unknown venue";

/// Identifier of a competition round. The provider sends it as a number,
/// older payloads as a numeric string; both are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawRoundId")]
pub struct RoundId(pub u32);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRoundId {
    Number(u32),
    Text(String),
}

impl TryFrom<RawRoundId> for RoundId {
    type Error = std::num::ParseIntError;

    fn try_from(raw: RawRoundId) -> Result<Self, Self::Error> {
        match raw {
            RawRoundId::Number(n) => Ok(RoundId(n)),
            RawRoundId::Text(s) => s.trim().parse().map(RoundId),
        }
    }
}

impl From<u32> for RoundId {
    fn from(id: u32) -> Self {
        RoundId(id)
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A selectable round of the competition schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    #[serde(rename = "rodada")]
    pub round: RoundId,
    #[serde(rename = "nome", default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Round {
    pub fn new(round: impl Into<RoundId>) -> Self {
        Self {
            round: round.into(),
            name: None,
            slug: None,
            status: None,
        }
    }

    /// Label used by round pickers.
    pub fn label(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Round {}", self.round))
    }
}

/// Payload of a single round lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoundDetail {
    #[serde(rename = "partidas", default, deserialize_with = "null_as_default")]
    pub matches: Vec<Match>,
}

/// A scheduled game between two teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    #[serde(rename = "partida_id")]
    pub id: u64,
    #[serde(rename = "time_mandante")]
    pub home: MatchTeam,
    #[serde(rename = "time_visitante")]
    pub away: MatchTeam,
    #[serde(rename = "placar", default, deserialize_with = "null_as_default")]
    pub score: String,
    #[serde(rename = "data_realizacao", default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(rename = "hora_realizacao", default, deserialize_with = "null_as_default")]
    pub time: String,
    #[serde(rename = "estadio", default)]
    pub venue: Option<Venue>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Match {
    /// Popular name of the venue, or [`UNKNOWN_VENUE`] when the provider
    /// left it out.
    pub fn venue_name(&self) -> &str {
        self.venue
            .as_ref()
            .and_then(|v| v.name.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_VENUE)
    }

    /// Kickoff as a local date time, when both date and time are filled in.
    pub fn kickoff(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::parse_from_str(self.date.trim(), MATCH_DATE_FORMAT).ok()?;
        let time = NaiveTime::parse_from_str(self.time.trim(), MATCH_TIME_FORMAT).ok()?;
        Some(date.and_time(time))
    }
}

/// One side of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchTeam {
    #[serde(rename = "time_id", default)]
    pub id: Option<u64>,
    #[serde(rename = "nome_popular", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "sigla", default)]
    pub abbreviation: Option<String>,
    #[serde(rename = "escudo", default, deserialize_with = "null_as_default")]
    pub crest_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    #[serde(rename = "estadio_id", default)]
    pub id: Option<u64>,
    #[serde(rename = "nome_popular", default)]
    pub name: Option<String>,
}
