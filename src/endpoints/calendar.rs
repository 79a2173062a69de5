use chrono::{DateTime, Utc};
use tracing::instrument;

use crate::client::SonarrClient;
use crate::error::SonarrError;
use crate::http::ApiRequest;
use crate::models::episode::EpisodeResource;

impl SonarrClient {
    /// Episodes airing in the given window. The server defaults the window to
    /// roughly the current day when unset.
    #[instrument(skip(self))]
    pub async fn get_calendar(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
        unmonitored: Option<bool>,
        include_series: Option<bool>,
    ) -> Result<Option<Vec<EpisodeResource>>, SonarrError> {
        let request = ApiRequest::get("calendar")
            .query_opt("start", start.map(|d| d.to_rfc3339()))
            .query_opt("end", end.map(|d| d.to_rfc3339()))
            .query_opt("unmonitored", unmonitored)
            .query_opt("includeSeries", include_series);
        self.http.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SonarrConfig;
    use crate::field::Field;
    use chrono::TimeZone;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn window_bounds_are_iso8601() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/calendar"))
            .and(query_param("start", "2024-02-01T00:00:00+00:00"))
            .and(query_param("unmonitored", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": 1, "seriesId": 5, "airDateUtc": "2024-02-01T20:00:00Z" }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client =
            SonarrClient::from_config(&SonarrConfig::new(server.uri(), "test-key")).unwrap();
        let start = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let episodes = client
            .get_calendar(Some(start), None, Some(true), None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(episodes[0].id, Field::Value(1));
    }
}
