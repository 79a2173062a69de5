use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::field::Field;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogResource {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub id: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub time: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub exception: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub exception_type: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub level: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub logger: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub message: Field<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn log_entry_round_trips() {
        let raw = json!({
            "id": 7,
            "time": "2024-02-01T10:00:00Z",
            "level": "warn",
            "logger": "DownloadDecisionMaker",
            "message": "Rejected release",
            "exception": null
        });
        let entry: LogResource = serde_json::from_value(raw.clone()).unwrap();
        assert!(entry.exception.is_null());
        assert_eq!(serde_json::to_value(&entry).unwrap(), raw);
    }
}
