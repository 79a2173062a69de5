use tracing::instrument;

use crate::client::SonarrClient;
use crate::error::SonarrError;
use crate::http::{encode_segment, ApiRequest};
use crate::models::notification::NotificationResource;

impl SonarrClient {
    #[instrument(skip(self))]
    pub async fn list_notifications(
        &self,
    ) -> Result<Option<Vec<NotificationResource>>, SonarrError> {
        self.http.execute(ApiRequest::get("notification")).await
    }

    #[instrument(skip(self))]
    pub async fn get_notification(
        &self,
        id: i32,
    ) -> Result<Option<NotificationResource>, SonarrError> {
        let request = ApiRequest::get(format!("notification/{}", encode_segment(id)));
        self.http.execute(request).await
    }

    #[instrument(skip(self))]
    pub async fn list_notification_schema(
        &self,
    ) -> Result<Option<Vec<NotificationResource>>, SonarrError> {
        self.http
            .execute(ApiRequest::get("notification/schema"))
            .await
    }

    #[instrument(skip(self, notification))]
    pub async fn create_notification(
        &self,
        notification: &NotificationResource,
    ) -> Result<Option<NotificationResource>, SonarrError> {
        let request = ApiRequest::post("notification").json(notification)?;
        self.http.execute(request).await
    }

    #[instrument(skip(self, notification))]
    pub async fn update_notification(
        &self,
        id: i32,
        notification: &NotificationResource,
    ) -> Result<Option<NotificationResource>, SonarrError> {
        let request =
            ApiRequest::put(format!("notification/{}", encode_segment(id))).json(notification)?;
        self.http.execute(request).await
    }

    #[instrument(skip(self))]
    pub async fn delete_notification(&self, id: i32) -> Result<Option<()>, SonarrError> {
        let request = ApiRequest::delete(format!("notification/{}", encode_segment(id)));
        self.http.execute_empty(request).await
    }

    #[instrument(skip(self, notification))]
    pub async fn test_notification(
        &self,
        notification: &NotificationResource,
    ) -> Result<Option<()>, SonarrError> {
        let request = ApiRequest::post("notification/test").json(notification)?;
        self.http.execute_empty(request).await
    }
}
