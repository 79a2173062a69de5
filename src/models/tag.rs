use serde::{Deserialize, Serialize};

use crate::field::Field;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagResource {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub id: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub label: Field<String>,
}

impl TagResource {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: Field::Unset,
            label: Field::Value(label.into()),
        }
    }
}

/// A tag plus the ids of everything referencing it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagDetailsResource {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub id: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub label: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub delay_profile_ids: Field<Vec<i32>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub import_list_ids: Field<Vec<i32>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub notification_ids: Field<Vec<i32>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub restriction_ids: Field<Vec<i32>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub indexer_ids: Field<Vec<i32>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub download_client_ids: Field<Vec<i32>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub auto_tag_ids: Field<Vec<i32>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub series_ids: Field<Vec<i32>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_tag_body_omits_the_id() {
        let tag = TagResource::new("favorites");
        assert_eq!(
            serde_json::to_value(&tag).unwrap(),
            json!({ "label": "favorites" })
        );
    }

    #[test]
    fn tag_details_round_trip() {
        let raw = json!({
            "id": 2,
            "label": "anime",
            "notificationIds": [],
            "seriesIds": [5, 9]
        });
        let details: TagDetailsResource = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&details).unwrap(), raw);
    }
}
