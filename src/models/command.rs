use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::field::Field;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CommandStatus {
    Queued,
    Started,
    Completed,
    Failed,
    Aborted,
    Cancelled,
    Orphaned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CommandPriority {
    Normal,
    High,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CommandTrigger {
    Unspecified,
    Manual,
    Scheduled,
}

/// Body for `POST /command`. The name selects the task; the id fields scope
/// it. Only the fields relevant to the named command should be set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandBody {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub series_id: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub series_ids: Field<Vec<i32>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub season_number: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub episode_ids: Field<Vec<i32>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub send_updates_to_client: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub update_scheduled_task: Field<bool>,
}

impl CommandBody {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Field::Value(name.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResource {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub id: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub command_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub message: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub body: Field<CommandBody>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub priority: Field<CommandPriority>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub status: Field<CommandStatus>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub result: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub queued: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub started: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub ended: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub duration: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub exception: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub trigger: Field<CommandTrigger>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub state_change_time: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub send_updates_to_client: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub update_scheduled_task: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub last_execution_time: Field<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn command_body_carries_only_set_fields() {
        let mut body = CommandBody::named("RefreshSeries");
        body.series_id = Field::Value(5);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "name": "RefreshSeries", "seriesId": 5 })
        );
    }

    #[test]
    fn command_resource_decodes_status() {
        let command: CommandResource = serde_json::from_value(json!({
            "id": 1,
            "name": "RefreshSeries",
            "status": "started",
            "trigger": "manual",
            "queued": "2024-02-01T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(command.status, Field::Value(CommandStatus::Started));
        assert_eq!(command.trigger, Field::Value(CommandTrigger::Manual));
    }
}
