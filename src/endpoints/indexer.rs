use tracing::instrument;

use crate::client::SonarrClient;
use crate::error::SonarrError;
use crate::http::{encode_segment, ApiRequest};
use crate::models::indexer::IndexerResource;

impl SonarrClient {
    #[instrument(skip(self))]
    pub async fn list_indexers(&self) -> Result<Option<Vec<IndexerResource>>, SonarrError> {
        self.http.execute(ApiRequest::get("indexer")).await
    }

    #[instrument(skip(self))]
    pub async fn get_indexer(&self, id: i32) -> Result<Option<IndexerResource>, SonarrError> {
        let request = ApiRequest::get(format!("indexer/{}", encode_segment(id)));
        self.http.execute(request).await
    }

    /// Available implementations, each carrying a `presets` tree of
    /// ready-made configurations.
    #[instrument(skip(self))]
    pub async fn list_indexer_schema(&self) -> Result<Option<Vec<IndexerResource>>, SonarrError> {
        self.http.execute(ApiRequest::get("indexer/schema")).await
    }

    #[instrument(skip(self, indexer))]
    pub async fn create_indexer(
        &self,
        indexer: &IndexerResource,
    ) -> Result<Option<IndexerResource>, SonarrError> {
        let request = ApiRequest::post("indexer").json(indexer)?;
        self.http.execute(request).await
    }

    #[instrument(skip(self, indexer))]
    pub async fn update_indexer(
        &self,
        id: i32,
        indexer: &IndexerResource,
    ) -> Result<Option<IndexerResource>, SonarrError> {
        let request = ApiRequest::put(format!("indexer/{}", encode_segment(id))).json(indexer)?;
        self.http.execute(request).await
    }

    #[instrument(skip(self))]
    pub async fn delete_indexer(&self, id: i32) -> Result<Option<()>, SonarrError> {
        let request = ApiRequest::delete(format!("indexer/{}", encode_segment(id)));
        self.http.execute_empty(request).await
    }

    /// Ask the server to verify a candidate configuration without saving it.
    #[instrument(skip(self, indexer))]
    pub async fn test_indexer(&self, indexer: &IndexerResource) -> Result<Option<()>, SonarrError> {
        let request = ApiRequest::post("indexer/test").json(indexer)?;
        self.http.execute_empty(request).await
    }
}
