use tracing::instrument;

use crate::client::SonarrClient;
use crate::error::SonarrError;
use crate::http::{encode_segment, ApiRequest};
use crate::models::rootfolder::RootFolderResource;

impl SonarrClient {
    #[instrument(skip(self))]
    pub async fn list_root_folders(&self) -> Result<Option<Vec<RootFolderResource>>, SonarrError> {
        self.http.execute(ApiRequest::get("rootfolder")).await
    }

    #[instrument(skip(self))]
    pub async fn get_root_folder(
        &self,
        id: i32,
    ) -> Result<Option<RootFolderResource>, SonarrError> {
        let request = ApiRequest::get(format!("rootfolder/{}", encode_segment(id)));
        self.http.execute(request).await
    }

    #[instrument(skip(self, folder))]
    pub async fn add_root_folder(
        &self,
        folder: &RootFolderResource,
    ) -> Result<Option<RootFolderResource>, SonarrError> {
        let request = ApiRequest::post("rootfolder").json(folder)?;
        self.http.execute(request).await
    }

    #[instrument(skip(self))]
    pub async fn delete_root_folder(&self, id: i32) -> Result<Option<()>, SonarrError> {
        let request = ApiRequest::delete(format!("rootfolder/{}", encode_segment(id)));
        self.http.execute_empty(request).await
    }
}
