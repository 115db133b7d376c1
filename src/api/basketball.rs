use tracing::{debug, instrument};

use crate::api;
use crate::config::BasketballConfig;
use crate::error::Result;
use crate::model::{Team, TeamsPage};

pub(crate) const RAPIDAPI_KEY_HEADER: &str = "x-rapidapi-key";
pub(crate) const RAPIDAPI_HOST_HEADER: &str = "x-rapidapi-host";

#[instrument(skip(client, config))]
pub(crate) async fn get_teams(
    client: &reqwest::Client,
    config: &BasketballConfig,
) -> Result<Vec<Team>> {
    let url = format!("{}/teams?limit={}", config.base_url, config.roster_limit);
    let request = client
        .get(&url)
        .header(RAPIDAPI_KEY_HEADER, config.api_key.expose())
        .header(RAPIDAPI_HOST_HEADER, &config.api_host);
    let page: TeamsPage = api::get_json(request, &url).await?;
    debug!(count = page.data.len(), "parsed teams");
    Ok(page.data)
}
