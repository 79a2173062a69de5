use chrono::{DateTime, Utc};
use tracing::instrument;

use crate::client::SonarrClient;
use crate::error::SonarrError;
use crate::http::ApiRequest;
use crate::models::common::{PageRequest, PagingResource};
use crate::models::history::{EpisodeHistoryEventType, HistoryResource};

impl SonarrClient {
    #[instrument(skip(self, paging))]
    pub async fn get_history(
        &self,
        paging: &PageRequest,
        event_type: Option<EpisodeHistoryEventType>,
        episode_id: Option<i32>,
        include_series: Option<bool>,
        include_episode: Option<bool>,
    ) -> Result<Option<PagingResource<HistoryResource>>, SonarrError> {
        let request = paging
            .apply(ApiRequest::get("history"))
            .query_opt("eventType", event_type.map(|e| e.as_str()))
            .query_opt("episodeId", episode_id)
            .query_opt("includeSeries", include_series)
            .query_opt("includeEpisode", include_episode);
        self.http.execute(request).await
    }

    /// Unpaged history from a point in time forward.
    #[instrument(skip(self))]
    pub async fn history_since(
        &self,
        date: DateTime<Utc>,
        event_type: Option<EpisodeHistoryEventType>,
    ) -> Result<Option<Vec<HistoryResource>>, SonarrError> {
        let request = ApiRequest::get("history/since")
            .query("date", date.to_rfc3339())
            .query_opt("eventType", event_type.map(|e| e.as_str()));
        self.http.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::SonarrClient;
    use crate::config::SonarrConfig;
    use crate::field::Field;
    use crate::models::common::PageRequest;
    use crate::models::history::EpisodeHistoryEventType;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn history_filters_by_event_type() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/history"))
            .and(query_param("eventType", "grabbed"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "page": 1,
                "pageSize": 10,
                "totalRecords": 1,
                "records": [{ "id": 12, "eventType": "grabbed" }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client =
            SonarrClient::from_config(&SonarrConfig::new(server.uri(), "test-key")).unwrap();
        let page = client
            .get_history(
                &PageRequest::default(),
                Some(EpisodeHistoryEventType::Grabbed),
                None,
                None,
                None,
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            page.records.value().unwrap()[0].event_type,
            Field::Value(EpisodeHistoryEventType::Grabbed)
        );
    }
}
