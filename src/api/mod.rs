pub(crate) mod basketball;
pub(crate) mod soccer;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Result, SportsError};

/// Send a prepared request and decode the JSON body into `T`.
///
/// Non-success statuses are reported as [`SportsError::UnexpectedStatus`]
/// before the body is looked at.
pub(crate) async fn get_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
    url: &str,
) -> Result<T> {
    debug!(url, "fetching");

    let response = request.send().await.map_err(|e| SportsError::Http {
        url: url.to_owned(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(SportsError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    let body = response.text().await.map_err(|e| SportsError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })?;

    serde_json::from_str(&body).map_err(|e| SportsError::Decode {
        url: url.to_owned(),
        source: e,
    })
}
