use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::models::episode::EpisodeResource;
use crate::models::quality::{Language, QualityModel};
use crate::models::series::SeriesResource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DownloadProtocol {
    Unknown,
    Usenet,
    Torrent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QueueStatus {
    Unknown,
    Queued,
    Paused,
    Downloading,
    Completed,
    Failed,
    Warning,
    Delay,
    DownloadClientUnavailable,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrackedDownloadStatus {
    Ok,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrackedDownloadState {
    Downloading,
    ImportPending,
    Importing,
    Imported,
    FailedPending,
    Failed,
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedDownloadStatusMessage {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub title: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub messages: Field<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueResource {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub id: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub series_id: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub episode_id: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub season_number: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub series: Field<SeriesResource>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub episode: Field<EpisodeResource>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub languages: Field<Vec<Language>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub quality: Field<QualityModel>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub size: Field<f64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub title: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub sizeleft: Field<f64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub timeleft: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub estimated_completion_time: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub added: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub status: Field<QueueStatus>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub tracked_download_status: Field<TrackedDownloadStatus>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub tracked_download_state: Field<TrackedDownloadState>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub status_messages: Field<Vec<TrackedDownloadStatusMessage>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub error_message: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub download_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub protocol: Field<DownloadProtocol>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub download_client: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub output_path: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub episode_has_file: Field<bool>,
}

/// Aggregate counters shown in the UI sidebar (`GET /queue/status`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueStatusResource {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub total_count: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub count: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub unknown_count: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub errors: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub warnings: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub unknown_errors: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub unknown_warnings: Field<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn queue_item_decodes_tracked_download_state() {
        let item: QueueResource = serde_json::from_value(json!({
            "id": 99,
            "title": "Some.Release.S01E01",
            "status": "downloading",
            "trackedDownloadStatus": "warning",
            "trackedDownloadState": "importPending",
            "protocol": "torrent",
            "statusMessages": [
                { "title": "Some.Release.S01E01", "messages": ["No files found"] }
            ]
        }))
        .unwrap();
        assert_eq!(
            item.tracked_download_state,
            Field::Value(TrackedDownloadState::ImportPending)
        );
        assert_eq!(item.protocol, Field::Value(DownloadProtocol::Torrent));
    }

    #[test]
    fn unknown_queue_status_is_rejected() {
        let result: Result<QueueResource, _> =
            serde_json::from_value(json!({ "status": "exploded" }));
        assert!(result.is_err());
    }
}
