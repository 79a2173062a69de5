use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::models::common::{MediaCover, Ratings};
use crate::models::quality::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesStatusType {
    Continuing,
    Ended,
    Upcoming,
    Deleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesTypes {
    Standard,
    Daily,
    Anime,
}

/// Which episodes to monitor when a series is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MonitorTypes {
    Unknown,
    All,
    Future,
    Missing,
    Existing,
    FirstSeason,
    LastSeason,
    LatestSeason,
    Pilot,
    Recent,
    MonitorSpecials,
    UnmonitorSpecials,
    None,
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NewItemMonitorTypes {
    All,
    None,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternateTitleResource {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub title: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub season_number: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub scene_season_number: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub scene_origin: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub comment: Field<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonStatisticsResource {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub next_airing: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub previous_airing: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub episode_file_count: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub episode_count: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub total_episode_count: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub size_on_disk: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub release_groups: Field<Vec<String>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub percent_of_episodes: Field<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonResource {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub season_number: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub monitored: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub statistics: Field<SeasonStatisticsResource>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub images: Field<Vec<MediaCover>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesStatisticsResource {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub season_count: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub episode_file_count: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub episode_count: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub total_episode_count: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub size_on_disk: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub release_groups: Field<Vec<String>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub percent_of_episodes: Field<f64>,
}

/// Behavior toggles honored once, when the series is first added.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSeriesOptions {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub ignore_episodes_with_files: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub ignore_episodes_without_files: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub monitor: Field<MonitorTypes>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub search_for_missing_episodes: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub search_for_cutoff_unmet_episodes: Field<bool>,
}

/// A tracked (or to-be-added) series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesResource {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub id: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub title: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub alternate_titles: Field<Vec<AlternateTitleResource>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub sort_title: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub status: Field<SeriesStatusType>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub ended: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub profile_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub overview: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub next_airing: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub previous_airing: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub network: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub air_time: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub images: Field<Vec<MediaCover>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub original_language: Field<Language>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_poster: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub seasons: Field<Vec<SeasonResource>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub year: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub path: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub quality_profile_id: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub season_folder: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub monitored: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub monitor_new_items: Field<NewItemMonitorTypes>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub use_scene_numbering: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub runtime: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub tvdb_id: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub tv_rage_id: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub tv_maze_id: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub tmdb_id: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub first_aired: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub last_aired: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub series_type: Field<SeriesTypes>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub clean_title: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub imdb_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub title_slug: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub root_folder_path: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub folder: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub certification: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub genres: Field<Vec<String>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub tags: Field<Vec<i32>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub added: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub add_options: Field<AddSeriesOptions>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub ratings: Field<Ratings>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub statistics: Field<SeriesStatisticsResource>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub episodes_changed: Field<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn series_round_trips_with_nested_seasons() {
        let raw = json!({
            "id": 5,
            "title": "Breaking Bad",
            "status": "ended",
            "seriesType": "standard",
            "monitored": true,
            "seasons": [
                { "seasonNumber": 1, "monitored": true },
                { "seasonNumber": 2, "monitored": false }
            ],
            "tags": [1, 3],
            "added": "2019-05-19T05:33:01Z"
        });
        let series: SeriesResource = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(series.status, Field::Value(SeriesStatusType::Ended));
        assert_eq!(series.seasons.value().unwrap().len(), 2);
        // Unset fields stay off the wire; known fields reproduce the input.
        assert_eq!(serde_json::to_value(&series).unwrap(), raw);
    }

    #[test]
    fn nullable_fields_distinguish_null_from_absent() {
        let series: SeriesResource =
            serde_json::from_value(json!({ "imdbId": null })).unwrap();
        assert!(series.imdb_id.is_null());
        assert!(series.title.is_unset());
        let encoded = serde_json::to_value(&series).unwrap();
        assert_eq!(encoded, json!({ "imdbId": null }));
    }

    #[test]
    fn unknown_monitor_type_is_rejected() {
        let result: Result<AddSeriesOptions, _> =
            serde_json::from_value(json!({ "monitor": "everything" }));
        assert!(result.is_err());
    }

    #[test]
    fn first_aired_round_trips_as_iso8601() {
        let series: SeriesResource =
            serde_json::from_value(json!({ "firstAired": "2008-01-20T00:00:00Z" })).unwrap();
        let encoded = serde_json::to_value(&series).unwrap();
        let again: SeriesResource = serde_json::from_value(encoded).unwrap();
        assert_eq!(again.first_aired, series.first_aired);
    }
}
