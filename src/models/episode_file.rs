use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::models::quality::{Language, QualityModel};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaInfoResource {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub id: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub audio_bitrate: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub audio_channels: Field<f64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub audio_codec: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub audio_languages: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub audio_stream_count: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub video_bit_depth: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub video_bitrate: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub video_codec: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub video_fps: Field<f64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub video_dynamic_range: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub resolution: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub run_time: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub scan_type: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub subtitles: Field<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeFileResource {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub id: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub series_id: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub season_number: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub relative_path: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub path: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub size: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub date_added: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub scene_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub release_group: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub languages: Field<Vec<Language>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub quality: Field<QualityModel>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub media_info: Field<MediaInfoResource>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub quality_cutoff_not_met: Field<bool>,
}

/// Body for the bulk episode-file delete (`DELETE /episodefile/bulk`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeFileListResource {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub episode_file_ids: Field<Vec<i32>>,
}
