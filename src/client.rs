use crate::config::SonarrConfig;
use crate::error::SonarrError;
use crate::http::HttpClient;

/// Entry point for talking to one Sonarr instance. Operations live in the
/// per-resource `endpoints` modules; this type only owns the transport.
///
/// Every operation returns `Result<Option<T>, SonarrError>`: `Some` on the
/// documented success status, `None` on an unexpected status when the config
/// opts out of erroring, and `Err` otherwise.
#[derive(Debug, Clone)]
pub struct SonarrClient {
    pub(crate) http: HttpClient,
}

impl SonarrClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn from_config(config: &SonarrConfig) -> Result<Self, SonarrError> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }
}
