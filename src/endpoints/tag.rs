use tracing::instrument;

use crate::client::SonarrClient;
use crate::error::SonarrError;
use crate::http::{encode_segment, ApiRequest};
use crate::models::tag::{TagDetailsResource, TagResource};

impl SonarrClient {
    #[instrument(skip(self))]
    pub async fn list_tags(&self) -> Result<Option<Vec<TagResource>>, SonarrError> {
        self.http.execute(ApiRequest::get("tag")).await
    }

    #[instrument(skip(self))]
    pub async fn get_tag(&self, id: i32) -> Result<Option<TagResource>, SonarrError> {
        let request = ApiRequest::get(format!("tag/{}", encode_segment(id)));
        self.http.execute(request).await
    }

    #[instrument(skip(self, tag))]
    pub async fn create_tag(&self, tag: &TagResource) -> Result<Option<TagResource>, SonarrError> {
        let request = ApiRequest::post("tag").json(tag)?;
        self.http.execute(request).await
    }

    #[instrument(skip(self, tag))]
    pub async fn update_tag(
        &self,
        id: i32,
        tag: &TagResource,
    ) -> Result<Option<TagResource>, SonarrError> {
        let request = ApiRequest::put(format!("tag/{}", encode_segment(id))).json(tag)?;
        self.http.execute(request).await
    }

    #[instrument(skip(self))]
    pub async fn delete_tag(&self, id: i32) -> Result<Option<()>, SonarrError> {
        let request = ApiRequest::delete(format!("tag/{}", encode_segment(id)));
        self.http.execute_empty(request).await
    }

    #[instrument(skip(self))]
    pub async fn list_tag_details(&self) -> Result<Option<Vec<TagDetailsResource>>, SonarrError> {
        self.http.execute(ApiRequest::get("tag/detail")).await
    }

    #[instrument(skip(self))]
    pub async fn get_tag_details(
        &self,
        id: i32,
    ) -> Result<Option<TagDetailsResource>, SonarrError> {
        let request = ApiRequest::get(format!("tag/detail/{}", encode_segment(id)));
        self.http.execute(request).await
    }
}
