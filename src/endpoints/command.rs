use tracing::instrument;

use crate::client::SonarrClient;
use crate::error::SonarrError;
use crate::http::{encode_segment, ApiRequest};
use crate::models::command::{CommandBody, CommandResource};

impl SonarrClient {
    #[instrument(skip(self))]
    pub async fn list_commands(&self) -> Result<Option<Vec<CommandResource>>, SonarrError> {
        self.http.execute(ApiRequest::get("command")).await
    }

    #[instrument(skip(self))]
    pub async fn get_command(&self, id: i32) -> Result<Option<CommandResource>, SonarrError> {
        let request = ApiRequest::get(format!("command/{}", encode_segment(id)));
        self.http.execute(request).await
    }

    /// Enqueue a server-side task such as `RefreshSeries` or `RssSync`.
    #[instrument(skip(self, body))]
    pub async fn run_command(
        &self,
        body: &CommandBody,
    ) -> Result<Option<CommandResource>, SonarrError> {
        let request = ApiRequest::post("command").json(body)?;
        self.http.execute(request).await
    }
}
