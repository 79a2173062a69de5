use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the client.
///
/// Transport failures are reqwest's untouched; decode failures are always
/// loud (there is no lenient fallback to untyped data); an unexpected HTTP
/// status only becomes an error when the configuration asks for it.
#[derive(Debug, Error)]
pub enum SonarrError {
    #[error("unexpected response status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),

    #[error("failed to read configuration: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}
