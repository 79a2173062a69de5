use serde::{Deserialize, Serialize};

use crate::field::Field;

/// One configurable setting exposed by a provider implementation (an indexer
/// or a notification connection). Values are implementation-defined, so the
/// `value` stays an untyped JSON value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderFieldResource {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub order: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub label: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub unit: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub help_text: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub help_text_warning: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub help_link: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub value: Field<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset", rename = "type")]
    pub field_type: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub advanced: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub select_options: Field<Vec<SelectOptionResource>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub section: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub hidden: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub privacy: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub placeholder: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub is_float: Field<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectOptionResource {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub value: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub order: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub hint: Field<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProviderMessageType {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderMessage {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub message: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset", rename = "type")]
    pub message_type: Field<ProviderMessageType>,
}
