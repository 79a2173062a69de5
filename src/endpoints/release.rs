use tracing::instrument;

use crate::client::SonarrClient;
use crate::error::SonarrError;
use crate::http::ApiRequest;
use crate::models::release::ReleaseResource;

impl SonarrClient {
    /// Interactive search results for an episode or a whole season.
    #[instrument(skip(self))]
    pub async fn list_releases(
        &self,
        episode_id: Option<i32>,
        series_id: Option<i32>,
        season_number: Option<i32>,
    ) -> Result<Option<Vec<ReleaseResource>>, SonarrError> {
        let request = ApiRequest::get("release")
            .query_opt("episodeId", episode_id)
            .query_opt("seriesId", series_id)
            .query_opt("seasonNumber", season_number);
        self.http.execute(request).await
    }

    /// Hand a previously listed release back for download; the body needs the
    /// guid and the indexer id it was listed from ([`ReleaseResource::grab`]).
    #[instrument(skip(self, release))]
    pub async fn grab_release(
        &self,
        release: &ReleaseResource,
    ) -> Result<Option<ReleaseResource>, SonarrError> {
        let request = ApiRequest::post("release").json(release)?;
        self.http.execute(request).await
    }
}
