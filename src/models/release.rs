use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::models::quality::{Language, QualityModel};
use crate::models::queue::DownloadProtocol;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseResource {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub guid: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub quality: Field<QualityModel>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub quality_weight: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub age: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub age_hours: Field<f64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub age_minutes: Field<f64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub size: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub indexer_id: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub indexer: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub release_group: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub release_hash: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub title: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub full_season: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub scene_source: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub season_number: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub languages: Field<Vec<Language>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub language_weight: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub series_title: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub episode_numbers: Field<Vec<i32>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub absolute_episode_numbers: Field<Vec<i32>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub mapped_season_number: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub mapped_episode_numbers: Field<Vec<i32>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub approved: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub temporarily_rejected: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub rejected: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub tvdb_id: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub tv_rage_id: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub rejections: Field<Vec<String>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub publish_date: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub comment_url: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub download_url: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub info_url: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub episode_requested: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub download_allowed: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub release_weight: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub protocol: Field<DownloadProtocol>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub seeders: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub leechers: Field<i32>,
}

impl ReleaseResource {
    /// Minimal body for grabbing a previously listed release
    /// (`POST /release` wants the guid plus the indexer it came from).
    pub fn grab(guid: impl Into<String>, indexer_id: i32) -> Self {
        Self {
            guid: Field::Value(guid.into()),
            indexer_id: Field::Value(indexer_id),
            ..Self::default()
        }
    }
}
