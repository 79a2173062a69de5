use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::models::provider::{ProviderFieldResource, ProviderMessage};
use crate::models::queue::DownloadProtocol;

/// An indexer definition. Schema entries carry a `presets` list of further
/// `IndexerResource` instances: a tree of ready-made configurations, never a
/// cycle.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexerResource {
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
    pub presets: Field<Vec<IndexerResource>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub enable_rss: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub enable_automatic_search: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub enable_interactive_search: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub supports_rss: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub supports_search: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub protocol: Field<DownloadProtocol>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub priority: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub download_client_id: Field<i32>,
}
