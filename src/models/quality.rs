use serde::{Deserialize, Serialize};

use crate::field::Field;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QualitySource {
    Unknown,
    Television,
    TelevisionRaw,
    Web,
    WebRip,
    Dvd,
    Bluray,
    BlurayRaw,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quality {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub id: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub source: Field<QualitySource>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub resolution: Field<i32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Revision {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub version: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub real: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub is_repack: Field<bool>,
}

/// A concrete quality paired with its revision, as attached to files,
/// releases, and queue items.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityModel {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub quality: Field<Quality>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub revision: Field<Revision>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub id: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn quality_model_round_trips() {
        let raw = json!({
            "quality": { "id": 4, "name": "HDTV-720p", "source": "television", "resolution": 720 },
            "revision": { "version": 1, "real": 0, "isRepack": false }
        });
        let model: QualityModel = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(
            model.quality.value().unwrap().source,
            Field::Value(QualitySource::Television)
        );
        assert_eq!(serde_json::to_value(&model).unwrap(), raw);
    }

    #[test]
    fn unknown_quality_source_is_rejected() {
        let result: Result<Quality, _> =
            serde_json::from_value(json!({ "source": "betamax" }));
        assert!(result.is_err());
    }
}
