use tracing::instrument;

use crate::client::SonarrClient;
use crate::error::SonarrError;
use crate::http::{encode_segment, ApiRequest};
use crate::models::episode::{EpisodeResource, EpisodesMonitoredResource};

impl SonarrClient {
    #[instrument(skip(self))]
    pub async fn list_episodes(
        &self,
        series_id: i32,
        season_number: Option<i32>,
        episode_file_id: Option<i32>,
        include_images: Option<bool>,
    ) -> Result<Option<Vec<EpisodeResource>>, SonarrError> {
        let request = ApiRequest::get("episode")
            .query("seriesId", series_id)
            .query_opt("seasonNumber", season_number)
            .query_opt("episodeFileId", episode_file_id)
            .query_opt("includeImages", include_images);
        self.http.execute(request).await
    }

    #[instrument(skip(self))]
    pub async fn get_episode(&self, id: i32) -> Result<Option<EpisodeResource>, SonarrError> {
        let request = ApiRequest::get(format!("episode/{}", encode_segment(id)));
        self.http.execute(request).await
    }

    #[instrument(skip(self, episode))]
    pub async fn update_episode(
        &self,
        id: i32,
        episode: &EpisodeResource,
    ) -> Result<Option<EpisodeResource>, SonarrError> {
        let request = ApiRequest::put(format!("episode/{}", encode_segment(id))).json(episode)?;
        self.http.execute(request).await
    }

    /// Toggle monitoring for a batch of episodes (`PUT /episode/monitor`).
    #[instrument(skip(self, body))]
    pub async fn set_episodes_monitored(
        &self,
        body: &EpisodesMonitoredResource,
    ) -> Result<Option<()>, SonarrError> {
        let request = ApiRequest::put("episode/monitor").json(body)?;
        self.http.execute_empty(request).await
    }
}
