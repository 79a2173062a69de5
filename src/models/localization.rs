use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::field::Field;

/// UI translation strings. The key set is not part of the API contract, so
/// the whole payload is collected into an open string map instead of being
/// given named fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizationResource {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub identifier: Field<String>,
    #[serde(flatten)]
    pub strings: HashMap<String, Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn arbitrary_keys_are_collected() {
        let localization: LocalizationResource = serde_json::from_value(json!({
            "identifier": "en",
            "AddSeries": "Add Series",
            "Calendar": "Calendar",
            "Missing": null
        }))
        .unwrap();
        assert_eq!(localization.identifier, Field::Value("en".to_string()));
        assert_eq!(
            localization.strings["AddSeries"],
            Some("Add Series".to_string())
        );
        assert_eq!(localization.strings["Missing"], None);
    }
}
