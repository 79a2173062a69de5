use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;
use tracing::{debug, warn};
use url::Url;

use crate::config::SonarrConfig;
use crate::error::SonarrError;

const API_PREFIX: &str = "api/v3";

/// Percent-encode a value for substitution into a path template.
pub(crate) fn encode_segment(value: impl Display) -> String {
    urlencoding::encode(&value.to_string()).into_owned()
}

/// A not-yet-dispatched request: method, relative path (segments already
/// percent-encoded), query mapping, and optional JSON body. Endpoint code
/// builds one of these; the transport turns it into a reqwest call.
#[derive(Debug, Clone)]
pub(crate) struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// Append a query parameter only when a value is present; unset optional
    /// parameters never reach the wire.
    pub fn query_opt(self, key: &'static str, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.query(key, v),
            None => self,
        }
    }

    /// List-valued parameters repeat the key once per element.
    pub fn query_all<V: ToString>(mut self, key: &'static str, values: &[V]) -> Self {
        for v in values {
            self.query.push((key, v.to_string()));
        }
        self
    }

    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, SonarrError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Resolve against the instance base URL, producing the final URL with
    /// the `/api/v3` prefix and the encoded query string.
    pub fn url(&self, base: &str) -> Result<Url, SonarrError> {
        let mut url = Url::parse(&format!(
            "{}/{}/{}",
            base.trim_end_matches('/'),
            API_PREFIX,
            self.path
        ))?;
        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }
}

/// Thin wrapper around `reqwest::Client` carrying the instance base URL, API
/// key, and the unexpected-status policy. Cheap to clone.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    api_key: String,
    error_on_unexpected_status: bool,
}

impl HttpClient {
    pub fn new(config: &SonarrConfig) -> Result<Self, SonarrError> {
        // Fail on a bad base URL at construction time, not per request.
        config.parsed_base_url()?;
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("sonarr-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            error_on_unexpected_status: config.error_on_unexpected_status,
        })
    }

    async fn send(&self, request: ApiRequest) -> Result<(StatusCode, Vec<u8>), SonarrError> {
        let url = request.url(&self.base_url)?;
        debug!(method = %request.method, url = %url, "dispatching request");

        let mut builder = self
            .client
            .request(request.method, url)
            .header("X-Api-Key", &self.api_key);
        if let Some(body) = &request.body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();
        Ok((status, body))
    }

    /// Dispatch and decode the success body into `T`.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<Option<T>, SonarrError> {
        let (status, body) = self.send(request).await?;
        dispatch_json(status, &body, self.error_on_unexpected_status)
    }

    /// Dispatch an operation whose success response carries no useful body.
    pub(crate) async fn execute_empty(
        &self,
        request: ApiRequest,
    ) -> Result<Option<()>, SonarrError> {
        let (status, body) = self.send(request).await?;
        dispatch_empty(status, &body, self.error_on_unexpected_status)
    }
}

/// Status dispatch for JSON responses: decode on success, and otherwise
/// either raise or swallow depending on the configured policy.
pub(crate) fn dispatch_json<T: DeserializeOwned>(
    status: StatusCode,
    body: &[u8],
    error_on_unexpected: bool,
) -> Result<Option<T>, SonarrError> {
    if status.is_success() {
        let value = serde_json::from_slice(body)?;
        return Ok(Some(value));
    }
    unexpected(status, body, error_on_unexpected).map(|_| None)
}

pub(crate) fn dispatch_empty(
    status: StatusCode,
    body: &[u8],
    error_on_unexpected: bool,
) -> Result<Option<()>, SonarrError> {
    if status.is_success() {
        return Ok(Some(()));
    }
    unexpected(status, body, error_on_unexpected).map(|_| None)
}

fn unexpected(status: StatusCode, body: &[u8], raise: bool) -> Result<(), SonarrError> {
    let body = String::from_utf8_lossy(body).into_owned();
    if raise {
        return Err(SonarrError::UnexpectedStatus { status, body });
    }
    warn!(status = %status, "unexpected response status, returning None");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn path_parameters_are_percent_encoded() {
        assert_eq!(encode_segment(42), "42");
        assert_eq!(encode_segment("a/b c"), "a%2Fb%20c");
    }

    #[test]
    fn unset_query_parameters_are_excluded() {
        let request = ApiRequest::get(format!("series/{}", encode_segment(42)))
            .query_opt("includeSeasonImages", None::<bool>);
        let url = request.url("http://localhost:8989").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8989/api/v3/series/42");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn present_query_parameters_are_encoded() {
        let request = ApiRequest::get("series/lookup").query("term", "breaking bad & more");
        let url = request.url("http://localhost:8989").unwrap();
        assert_eq!(
            url.query().unwrap(),
            "term=breaking+bad+%26+more"
        );
    }

    #[test]
    fn list_parameters_repeat_the_key() {
        let request = ApiRequest::get("episodefile").query_all("episodeFileIds", &[1, 2, 3]);
        let url = request.url("http://localhost:8989").unwrap();
        assert_eq!(
            url.query().unwrap(),
            "episodeFileIds=1&episodeFileIds=2&episodeFileIds=3"
        );
    }

    #[test]
    fn base_url_trailing_slash_does_not_double() {
        let request = ApiRequest::get("health");
        let url = request.url("http://localhost:8989/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8989/api/v3/health");
    }

    #[test]
    fn body_serializes_only_set_fields() {
        let request = ApiRequest::post("tag")
            .json(&json!({ "label": "favorites" }))
            .unwrap();
        assert_eq!(request.body, Some(json!({ "label": "favorites" })));
    }

    #[test]
    fn unexpected_status_raises_when_configured() {
        let result: Result<Option<serde_json::Value>, _> =
            dispatch_json(StatusCode::NOT_FOUND, b"missing", true);
        match result {
            Err(SonarrError::UnexpectedStatus { status, body }) => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(body, "missing");
            }
            other => panic!("expected UnexpectedStatus, got {other:?}"),
        }
    }

    #[test]
    fn unexpected_status_yields_none_when_not_configured() {
        let result: Result<Option<serde_json::Value>, _> =
            dispatch_json(StatusCode::NOT_FOUND, b"missing", false);
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn malformed_success_body_fails_loudly() {
        let result: Result<Option<serde_json::Value>, _> =
            dispatch_json(StatusCode::OK, b"not json", true);
        assert!(matches!(result, Err(SonarrError::Decode(_))));
    }
}
