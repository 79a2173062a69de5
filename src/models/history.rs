use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::field::Field;
use crate::models::episode::EpisodeResource;
use crate::models::quality::{Language, QualityModel};
use crate::models::series::SeriesResource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EpisodeHistoryEventType {
    Unknown,
    Grabbed,
    SeriesFolderImported,
    DownloadFolderImported,
    DownloadFailed,
    EpisodeFileDeleted,
    EpisodeFileRenamed,
    DownloadIgnored,
}

impl EpisodeHistoryEventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EpisodeHistoryEventType::Unknown => "unknown",
            EpisodeHistoryEventType::Grabbed => "grabbed",
            EpisodeHistoryEventType::SeriesFolderImported => "seriesFolderImported",
            EpisodeHistoryEventType::DownloadFolderImported => "downloadFolderImported",
            EpisodeHistoryEventType::DownloadFailed => "downloadFailed",
            EpisodeHistoryEventType::EpisodeFileDeleted => "episodeFileDeleted",
            EpisodeHistoryEventType::EpisodeFileRenamed => "episodeFileRenamed",
            EpisodeHistoryEventType::DownloadIgnored => "downloadIgnored",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResource {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub id: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub episode_id: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub series_id: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub source_title: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub languages: Field<Vec<Language>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub quality: Field<QualityModel>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub quality_cutoff_not_met: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub date: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub download_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub event_type: Field<EpisodeHistoryEventType>,
    /// Event-specific key/value payload; keys vary by event type.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub data: Field<HashMap<String, Option<String>>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub episode: Field<EpisodeResource>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub series: Field<SeriesResource>,
}
