use tracing::instrument;

use crate::client::SonarrClient;
use crate::error::SonarrError;
use crate::http::{encode_segment, ApiRequest};
use crate::models::profile::{LanguageProfileResource, QualityProfileResource};

impl SonarrClient {
    #[instrument(skip(self))]
    pub async fn list_quality_profiles(
        &self,
    ) -> Result<Option<Vec<QualityProfileResource>>, SonarrError> {
        self.http.execute(ApiRequest::get("qualityprofile")).await
    }

    #[instrument(skip(self))]
    pub async fn get_quality_profile(
        &self,
        id: i32,
    ) -> Result<Option<QualityProfileResource>, SonarrError> {
        let request = ApiRequest::get(format!("qualityprofile/{}", encode_segment(id)));
        self.http.execute(request).await
    }

    #[instrument(skip(self, profile))]
    pub async fn create_quality_profile(
        &self,
        profile: &QualityProfileResource,
    ) -> Result<Option<QualityProfileResource>, SonarrError> {
        let request = ApiRequest::post("qualityprofile").json(profile)?;
        self.http.execute(request).await
    }

    #[instrument(skip(self, profile))]
    pub async fn update_quality_profile(
        &self,
        id: i32,
        profile: &QualityProfileResource,
    ) -> Result<Option<QualityProfileResource>, SonarrError> {
        let request =
            ApiRequest::put(format!("qualityprofile/{}", encode_segment(id))).json(profile)?;
        self.http.execute(request).await
    }

    #[instrument(skip(self))]
    pub async fn delete_quality_profile(&self, id: i32) -> Result<Option<()>, SonarrError> {
        let request = ApiRequest::delete(format!("qualityprofile/{}", encode_segment(id)));
        self.http.execute_empty(request).await
    }

    #[instrument(skip(self))]
    pub async fn list_language_profiles(
        &self,
    ) -> Result<Option<Vec<LanguageProfileResource>>, SonarrError> {
        self.http.execute(ApiRequest::get("languageprofile")).await
    }

    #[instrument(skip(self))]
    pub async fn get_language_profile(
        &self,
        id: i32,
    ) -> Result<Option<LanguageProfileResource>, SonarrError> {
        let request = ApiRequest::get(format!("languageprofile/{}", encode_segment(id)));
        self.http.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::SonarrClient;
    use crate::config::SonarrConfig;
    use crate::field::Field;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn quality_profiles_decode_nested_groups() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/qualityprofile"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "id": 1,
                    "name": "HD-720p",
                    "cutoff": 4,
                    "items": [
                        { "quality": { "id": 4, "name": "HDTV-720p" }, "allowed": true }
                    ]
                }
            ])))
            .mount(&server)
            .await;

        let client =
            SonarrClient::from_config(&SonarrConfig::new(server.uri(), "test-key")).unwrap();
        let profiles = client.list_quality_profiles().await.unwrap().unwrap();
        assert_eq!(profiles[0].name, Field::Value("HD-720p".to_string()));
        assert_eq!(profiles[0].cutoff, Field::Value(4));
    }
}
