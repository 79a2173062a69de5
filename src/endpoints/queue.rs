use tracing::instrument;

use crate::client::SonarrClient;
use crate::error::SonarrError;
use crate::http::{encode_segment, ApiRequest};
use crate::models::common::{PageRequest, PagingResource};
use crate::models::queue::{QueueResource, QueueStatusResource};

impl SonarrClient {
    #[instrument(skip(self, paging))]
    pub async fn get_queue(
        &self,
        paging: &PageRequest,
        include_unknown_series_items: Option<bool>,
        include_series: Option<bool>,
        include_episode: Option<bool>,
    ) -> Result<Option<PagingResource<QueueResource>>, SonarrError> {
        let request = paging
            .apply(ApiRequest::get("queue"))
            .query_opt("includeUnknownSeriesItems", include_unknown_series_items)
            .query_opt("includeSeries", include_series)
            .query_opt("includeEpisode", include_episode);
        self.http.execute(request).await
    }

    /// Remove a queue item, optionally also from the download client and onto
    /// the blocklist.
    #[instrument(skip(self))]
    pub async fn delete_queue_item(
        &self,
        id: i32,
        remove_from_client: Option<bool>,
        blocklist: Option<bool>,
    ) -> Result<Option<()>, SonarrError> {
        let request = ApiRequest::delete(format!("queue/{}", encode_segment(id)))
            .query_opt("removeFromClient", remove_from_client)
            .query_opt("blocklist", blocklist);
        self.http.execute_empty(request).await
    }

    #[instrument(skip(self))]
    pub async fn queue_status(&self) -> Result<Option<QueueStatusResource>, SonarrError> {
        self.http.execute(ApiRequest::get("queue/status")).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::SonarrClient;
    use crate::config::SonarrConfig;
    use crate::field::Field;
    use crate::models::common::{PageRequest, SortDirection};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> SonarrClient {
        SonarrClient::from_config(&SonarrConfig::new(server.uri(), "test-key")).unwrap()
    }

    #[tokio::test]
    async fn queue_paging_knobs_reach_the_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/queue"))
            .and(query_param("page", "2"))
            .and(query_param("pageSize", "10"))
            .and(query_param("sortDirection", "descending"))
            .and(query_param_is_missing("sortKey"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "page": 2,
                "pageSize": 10,
                "totalRecords": 11,
                "records": [{ "id": 99, "title": "Some.Release", "status": "downloading" }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let paging = PageRequest {
            page: Some(2),
            page_size: Some(10),
            sort_key: None,
            sort_direction: Some(SortDirection::Descending),
        };
        let page = client_for(&server)
            .get_queue(&paging, None, None, None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(page.total_records, Field::Value(11));
        assert_eq!(page.records.value().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_passes_client_flags() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/v3/queue/99"))
            .and(query_param("removeFromClient", "true"))
            .and(query_param("blocklist", "false"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server)
            .delete_queue_item(99, Some(true), Some(false))
            .await
            .unwrap();
    }
}
