use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::http::ApiRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MediaCoverTypes {
    Unknown,
    Poster,
    Banner,
    Fanart,
    Screenshot,
    Headshot,
    Clearlogo,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaCover {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub cover_type: Field<MediaCoverTypes>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub url: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_url: Field<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ratings {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub votes: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub value: Field<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    Default,
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Default => "default",
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

/// One page of a paged listing (queue, history, logs).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingResource<T> {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub page: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub page_size: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub sort_key: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub sort_direction: Field<SortDirection>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub total_records: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub records: Field<Vec<T>>,
}

/// Caller-side paging knobs shared by the paged endpoints. Anything left
/// `None` stays off the query string and the server default applies.
#[derive(Debug, Clone, Default)]
pub struct PageRequest {
    pub page: Option<i32>,
    pub page_size: Option<i32>,
    pub sort_key: Option<String>,
    pub sort_direction: Option<SortDirection>,
}

impl PageRequest {
    pub(crate) fn apply(&self, request: ApiRequest) -> ApiRequest {
        request
            .query_opt("page", self.page)
            .query_opt("pageSize", self.page_size)
            .query_opt("sortKey", self.sort_key.as_deref())
            .query_opt("sortDirection", self.sort_direction.map(|d| d.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn paging_resource_decodes_records() {
        let page: PagingResource<i32> = serde_json::from_value(json!({
            "page": 1,
            "pageSize": 10,
            "sortKey": "date",
            "sortDirection": "descending",
            "totalRecords": 2,
            "records": [5, 6]
        }))
        .unwrap();
        assert_eq!(page.records, Field::Value(vec![5, 6]));
        assert_eq!(page.sort_direction, Field::Value(SortDirection::Descending));
    }

    #[test]
    fn page_request_leaves_defaults_off_the_query() {
        let request = PageRequest::default().apply(ApiRequest::get("log"));
        let url = request.url("http://localhost:8989").unwrap();
        assert_eq!(url.query(), None);
    }

    #[test]
    fn page_request_applies_set_knobs() {
        let paging = PageRequest {
            page: Some(2),
            page_size: Some(20),
            sort_key: None,
            sort_direction: Some(SortDirection::Ascending),
        };
        let url = paging
            .apply(ApiRequest::get("history"))
            .url("http://localhost:8989")
            .unwrap();
        assert_eq!(
            url.query().unwrap(),
            "page=2&pageSize=20&sortDirection=ascending"
        );
    }
}
