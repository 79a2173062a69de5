use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::models::provider::{ProviderFieldResource, ProviderMessage};

/// A notification connection. Shares the provider shape with indexers,
/// including the self-referential `presets` tree on schema entries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResource {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub id: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub fields: Field<Vec<ProviderFieldResource>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub implementation_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub implementation: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub config_contract: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub info_link: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub message: Field<ProviderMessage>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub tags: Field<Vec<i32>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub presets: Field<Vec<NotificationResource>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub link: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub on_grab: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub on_download: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub on_upgrade: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub on_rename: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub on_series_add: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub on_series_delete: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub on_episode_file_delete: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub on_episode_file_delete_for_upgrade: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub on_health_issue: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub on_health_restored: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub on_application_update: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub on_manual_interaction_required: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub include_health_warnings: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub supports_on_grab: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub supports_on_download: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub supports_on_upgrade: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub supports_on_rename: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub supports_on_health_issue: Field<bool>,
}
