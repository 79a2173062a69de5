use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::models::quality::{Language, Quality};

/// One entry in a quality profile. A group entry carries nested `items`
/// instead of a single `quality`; groups never nest further in practice, but
/// the shape is an owned tree either way.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityProfileItemResource {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub id: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub quality: Field<Quality>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub items: Field<Vec<QualityProfileItemResource>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub allowed: Field<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityProfileResource {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub id: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub upgrade_allowed: Field<bool>,
    /// Quality id the profile upgrades towards.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub cutoff: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub items: Field<Vec<QualityProfileItemResource>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileLanguageItemResource {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub language: Field<Language>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub allowed: Field<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageProfileResource {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub id: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub upgrade_allowed: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub cutoff: Field<Language>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub languages: Field<Vec<ProfileLanguageItemResource>>,
}
