use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::models::common::MediaCover;
use crate::models::episode_file::EpisodeFileResource;
use crate::models::series::SeriesResource;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeResource {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub id: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub series_id: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub tvdb_id: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub episode_file_id: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub season_number: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub episode_number: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub title: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub air_date: Field<NaiveDate>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub air_date_utc: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub last_search_time: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub runtime: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub finale_type: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub overview: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub episode_file: Field<EpisodeFileResource>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub has_file: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub monitored: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub absolute_episode_number: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub scene_absolute_episode_number: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub scene_episode_number: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub scene_season_number: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub unverified_scene_numbering: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub end_time: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub grab_date: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub series: Field<SeriesResource>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub images: Field<Vec<MediaCover>>,
}

/// Body for the bulk monitor toggle (`PUT /episode/monitor`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodesMonitoredResource {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub episode_ids: Field<Vec<i32>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub monitored: Field<bool>,
}
