use tracing::{debug, instrument};

use crate::api;
use crate::config::SoccerConfig;
use crate::error::Result;
use crate::model::{Match, Round, RoundDetail, RoundId};

#[instrument(skip(client, config))]
pub(crate) async fn get_rounds(client: &reqwest::Client, config: &SoccerConfig) -> Result<Vec<Round>> {
    let url = format!("{}/rodadas/", config.base_url);
    let request = client.get(&url).bearer_auth(config.token.expose());
    let rounds: Vec<Round> = api::get_json(request, &url).await?;
    debug!(count = rounds.len(), "parsed rounds");
    Ok(rounds)
}

#[instrument(skip(client, config))]
pub(crate) async fn get_round_matches(
    client: &reqwest::Client,
    config: &SoccerConfig,
    round: RoundId,
) -> Result<Vec<Match>> {
    let url = format!("{}/rodadas/{round}", config.base_url);
    let request = client.get(&url).bearer_auth(config.token.expose());
    let detail: RoundDetail = api::get_json(request, &url).await?;
    debug!(count = detail.matches.len(), %round, "parsed round matches");
    Ok(detail.matches)
}
