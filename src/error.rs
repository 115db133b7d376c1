/// All errors that can occur while talking to the sports data providers.
#[derive(thiserror::Error, Debug)]
pub enum SportsError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The response body was not the JSON shape we expected.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    /// A required configuration value was not set.
    #[error("missing configuration value {name}")]
    MissingConfig { name: &'static str },

    /// A configuration value was set but could not be parsed.
    #[error("invalid configuration value {name}={value:?}")]
    InvalidConfig { name: &'static str, value: String },

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, SportsError>;
