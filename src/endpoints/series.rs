use tracing::instrument;

use crate::client::SonarrClient;
use crate::error::SonarrError;
use crate::http::{encode_segment, ApiRequest};
use crate::models::series::SeriesResource;

impl SonarrClient {
    #[instrument(skip(self))]
    pub async fn list_series(
        &self,
        tvdb_id: Option<i32>,
        include_season_images: Option<bool>,
    ) -> Result<Option<Vec<SeriesResource>>, SonarrError> {
        let request = ApiRequest::get("series")
            .query_opt("tvdbId", tvdb_id)
            .query_opt("includeSeasonImages", include_season_images);
        self.http.execute(request).await
    }

    #[instrument(skip(self))]
    pub async fn get_series(&self, id: i32) -> Result<Option<SeriesResource>, SonarrError> {
        let request = ApiRequest::get(format!("series/{}", encode_segment(id)));
        self.http.execute(request).await
    }

    /// Search the metadata provider by free-text term (`GET /series/lookup`).
    #[instrument(skip(self))]
    pub async fn lookup_series(
        &self,
        term: &str,
    ) -> Result<Option<Vec<SeriesResource>>, SonarrError> {
        let request = ApiRequest::get("series/lookup").query("term", term);
        self.http.execute(request).await
    }

    #[instrument(skip(self, series))]
    pub async fn add_series(
        &self,
        series: &SeriesResource,
    ) -> Result<Option<SeriesResource>, SonarrError> {
        let request = ApiRequest::post("series").json(series)?;
        self.http.execute(request).await
    }

    #[instrument(skip(self, series))]
    pub async fn update_series(
        &self,
        id: i32,
        series: &SeriesResource,
        move_files: Option<bool>,
    ) -> Result<Option<SeriesResource>, SonarrError> {
        let request = ApiRequest::put(format!("series/{}", encode_segment(id)))
            .query_opt("moveFiles", move_files)
            .json(series)?;
        self.http.execute(request).await
    }

    #[instrument(skip(self))]
    pub async fn delete_series(
        &self,
        id: i32,
        delete_files: Option<bool>,
        add_import_list_exclusion: Option<bool>,
    ) -> Result<Option<()>, SonarrError> {
        let request = ApiRequest::delete(format!("series/{}", encode_segment(id)))
            .query_opt("deleteFiles", delete_files)
            .query_opt("addImportListExclusion", add_import_list_exclusion);
        self.http.execute_empty(request).await
    }
}

#[cfg(test)]
mod tests {
    use crate::config::SonarrConfig;
    use crate::client::SonarrClient;
    use crate::error::SonarrError;
    use crate::field::Field;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> SonarrClient {
        let config = SonarrConfig::new(server.uri(), "test-key");
        SonarrClient::from_config(&config).unwrap()
    }

    #[tokio::test]
    async fn get_series_hits_the_documented_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/series/42"))
            .and(header("X-Api-Key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 42,
                "title": "Breaking Bad",
                "status": "ended"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let series = client_for(&server).get_series(42).await.unwrap().unwrap();
        assert_eq!(series.id, Field::Value(42));
        assert_eq!(series.title, Field::Value("Breaking Bad".to_string()));
    }

    #[tokio::test]
    async fn add_series_posts_only_set_fields_as_json() {
        let server = MockServer::start().await;
        let body = json!({
            "title": "Dark",
            "tvdbId": 332484,
            "qualityProfileId": 1,
            "rootFolderPath": "/tv",
            "monitored": true
        });
        Mock::given(method("POST"))
            .and(path("/api/v3/series"))
            .and(header("content-type", "application/json"))
            .and(body_json(body.clone()))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 7, "title": "Dark" })))
            .expect(1)
            .mount(&server)
            .await;

        let series = serde_json::from_value(body).unwrap();
        let created = client_for(&server)
            .add_series(&series)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(created.id, Field::Value(7));
    }

    #[tokio::test]
    async fn lookup_series_percent_encodes_the_term() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/series/lookup"))
            .and(query_param("term", "breaking bad"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let results = client_for(&server)
            .lookup_series("breaking bad")
            .await
            .unwrap()
            .unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn unexpected_status_surfaces_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/series/1"))
            .respond_with(ResponseTemplate::new(404).set_body_string("NotFound"))
            .mount(&server)
            .await;

        let error = client_for(&server).get_series(1).await.unwrap_err();
        match error {
            SonarrError::UnexpectedStatus { status, body } => {
                assert_eq!(status.as_u16(), 404);
                assert_eq!(body, "NotFound");
            }
            other => panic!("expected UnexpectedStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unexpected_status_returns_none_when_disabled() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/series/1"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let mut config = SonarrConfig::new(server.uri(), "test-key");
        config.error_on_unexpected_status = false;
        let client = SonarrClient::from_config(&config).unwrap();
        assert!(client.get_series(1).await.unwrap().is_none());
    }
}
