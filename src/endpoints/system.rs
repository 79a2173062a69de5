use tracing::instrument;

use crate::client::SonarrClient;
use crate::error::SonarrError;
use crate::http::{encode_segment, ApiRequest};
use crate::models::localization::LocalizationResource;
use crate::models::system::{
    DiskSpaceResource, HealthResource, HostConfigResource, SystemResource, UpdateResource,
};

impl SonarrClient {
    #[instrument(skip(self))]
    pub async fn system_status(&self) -> Result<Option<SystemResource>, SonarrError> {
        self.http.execute(ApiRequest::get("system/status")).await
    }

    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<Option<Vec<HealthResource>>, SonarrError> {
        self.http.execute(ApiRequest::get("health")).await
    }

    #[instrument(skip(self))]
    pub async fn disk_space(&self) -> Result<Option<Vec<DiskSpaceResource>>, SonarrError> {
        self.http.execute(ApiRequest::get("diskspace")).await
    }

    #[instrument(skip(self))]
    pub async fn host_config(&self) -> Result<Option<HostConfigResource>, SonarrError> {
        self.http.execute(ApiRequest::get("config/host")).await
    }

    #[instrument(skip(self, config))]
    pub async fn update_host_config(
        &self,
        id: i32,
        config: &HostConfigResource,
    ) -> Result<Option<HostConfigResource>, SonarrError> {
        let request = ApiRequest::put(format!("config/host/{}", encode_segment(id))).json(config)?;
        self.http.execute(request).await
    }

    #[instrument(skip(self))]
    pub async fn list_updates(&self) -> Result<Option<Vec<UpdateResource>>, SonarrError> {
        self.http.execute(ApiRequest::get("update")).await
    }

    #[instrument(skip(self))]
    pub async fn get_localization(&self) -> Result<Option<LocalizationResource>, SonarrError> {
        self.http.execute(ApiRequest::get("localization")).await
    }
}
