use tracing::instrument;

use crate::client::SonarrClient;
use crate::error::SonarrError;
use crate::http::{encode_segment, ApiRequest};
use crate::models::episode_file::{EpisodeFileListResource, EpisodeFileResource};

impl SonarrClient {
    /// List files either per series or by explicit ids; Sonarr expects one of
    /// the two.
    #[instrument(skip(self))]
    pub async fn list_episode_files(
        &self,
        series_id: Option<i32>,
        episode_file_ids: Option<&[i32]>,
    ) -> Result<Option<Vec<EpisodeFileResource>>, SonarrError> {
        let mut request = ApiRequest::get("episodefile").query_opt("seriesId", series_id);
        if let Some(ids) = episode_file_ids {
            request = request.query_all("episodeFileIds", ids);
        }
        self.http.execute(request).await
    }

    #[instrument(skip(self))]
    pub async fn get_episode_file(
        &self,
        id: i32,
    ) -> Result<Option<EpisodeFileResource>, SonarrError> {
        let request = ApiRequest::get(format!("episodefile/{}", encode_segment(id)));
        self.http.execute(request).await
    }

    #[instrument(skip(self))]
    pub async fn delete_episode_file(&self, id: i32) -> Result<Option<()>, SonarrError> {
        let request = ApiRequest::delete(format!("episodefile/{}", encode_segment(id)));
        self.http.execute_empty(request).await
    }

    #[instrument(skip(self, body))]
    pub async fn delete_episode_files(
        &self,
        body: &EpisodeFileListResource,
    ) -> Result<Option<()>, SonarrError> {
        let request = ApiRequest::delete("episodefile/bulk").json(body)?;
        self.http.execute_empty(request).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::SonarrClient;
    use crate::config::SonarrConfig;
    use crate::field::Field;
    use crate::models::episode_file::EpisodeFileListResource;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> SonarrClient {
        SonarrClient::from_config(&SonarrConfig::new(server.uri(), "test-key")).unwrap()
    }

    #[tokio::test]
    async fn list_by_series_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/episodefile"))
            .and(query_param("seriesId", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": 2, "seriesId": 5, "relativePath": "Season 01/S01E01.mkv" }
            ])))
            .mount(&server)
            .await;

        let files = client_for(&server)
            .list_episode_files(Some(5), None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(files[0].id, Field::Value(2));
    }

    #[tokio::test]
    async fn bulk_delete_sends_ids_in_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/v3/episodefile/bulk"))
            .and(body_json(json!({ "episodeFileIds": [2, 3] })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let body = EpisodeFileListResource {
            episode_file_ids: Field::Value(vec![2, 3]),
        };
        client_for(&server)
            .delete_episode_files(&body)
            .await
            .unwrap();
    }
}
