use tracing::instrument;

use crate::client::SonarrClient;
use crate::error::SonarrError;
use crate::http::ApiRequest;
use crate::models::common::{PageRequest, PagingResource};
use crate::models::log::LogResource;

impl SonarrClient {
    #[instrument(skip(self, paging))]
    pub async fn get_logs(
        &self,
        paging: &PageRequest,
        level: Option<&str>,
    ) -> Result<Option<PagingResource<LogResource>>, SonarrError> {
        let request = paging
            .apply(ApiRequest::get("log"))
            .query_opt("level", level);
        self.http.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::SonarrClient;
    use crate::config::SonarrConfig;
    use crate::field::Field;
    use crate::models::common::PageRequest;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn level_filter_reaches_the_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/log"))
            .and(query_param("level", "warn"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "page": 1,
                "pageSize": 50,
                "totalRecords": 1,
                "records": [{ "id": 7, "level": "warn", "message": "Rejected release" }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client =
            SonarrClient::from_config(&SonarrConfig::new(server.uri(), "test-key")).unwrap();
        let page = client
            .get_logs(&PageRequest::default(), Some("warn"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            page.records.value().unwrap()[0].level,
            Field::Value("warn".to_string())
        );
    }
}
