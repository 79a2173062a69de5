use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::field::Field;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HealthCheckResult {
    Ok,
    Notice,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResource {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub id: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub source: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset", rename = "type")]
    pub check_type: Field<HealthCheckResult>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub message: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub wiki_url: Field<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskSpaceResource {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub path: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub label: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub free_space: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub total_space: Field<i64>,
}

/// Instance metadata from `GET /system/status`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemResource {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub app_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub instance_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub version: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub build_time: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub is_debug: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub is_production: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub is_admin: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub startup_path: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub app_data: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub os_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub os_version: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub is_linux: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub is_osx: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub is_windows: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub is_docker: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub branch: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub authentication: Field<AuthenticationType>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub migration_version: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub url_base: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub runtime_version: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub runtime_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub start_time: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub package_version: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub package_author: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub package_update_mechanism: Field<UpdateMechanism>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthenticationType {
    None,
    Basic,
    Forms,
    External,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthenticationRequiredType {
    Enabled,
    DisabledForLocalAddresses,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UpdateMechanism {
    BuiltIn,
    Script,
    External,
    Apt,
    Docker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProxyType {
    Http,
    Socks4,
    Socks5,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CertificateValidationType {
    Enabled,
    DisabledForLocalAddresses,
    Disabled,
}

/// Host-level settings (`/config/host`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostConfigResource {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub id: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub bind_address: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub port: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub ssl_port: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub enable_ssl: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub launch_browser: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub authentication_method: Field<AuthenticationType>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub authentication_required: Field<AuthenticationRequiredType>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub analytics_enabled: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub username: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub password: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub log_level: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub branch: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub api_key: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub ssl_cert_path: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub url_base: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub instance_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub application_url: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub update_automatically: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub update_mechanism: Field<UpdateMechanism>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub update_script_path: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub proxy_enabled: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub proxy_type: Field<ProxyType>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub proxy_hostname: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub proxy_port: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub proxy_username: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub proxy_password: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub proxy_bypass_filter: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub proxy_bypass_local_addresses: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub certificate_validation: Field<CertificateValidationType>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub backup_folder: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub backup_interval: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub backup_retention: Field<i32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateChanges {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub new: Field<Vec<String>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub fixed: Field<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResource {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub id: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub version: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub branch: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub release_date: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub file_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub url: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub installed: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub installed_on: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub installable: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub latest: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub changes: Field<UpdateChanges>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub hash: Field<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn health_check_type_uses_wire_names() {
        let health: HealthResource = serde_json::from_value(json!({
            "source": "UpdateCheck",
            "type": "warning",
            "message": "Unable to update",
            "wikiUrl": "https://wiki.servarr.com"
        }))
        .unwrap();
        assert_eq!(health.check_type, Field::Value(HealthCheckResult::Warning));
    }

    #[test]
    fn host_config_round_trips_auth_enums() {
        let raw = json!({
            "id": 1,
            "bindAddress": "*",
            "port": 8989,
            "authenticationMethod": "forms",
            "authenticationRequired": "disabledForLocalAddresses",
            "updateMechanism": "builtIn",
            "certificateValidation": "enabled"
        });
        let config: HostConfigResource = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(
            config.authentication_method,
            Field::Value(AuthenticationType::Forms)
        );
        assert_eq!(serde_json::to_value(&config).unwrap(), raw);
    }
}
