use serde::{Deserialize, Serialize};

use crate::field::Field;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnmappedFolder {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub path: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub relative_path: Field<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootFolderResource {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub id: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub path: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub accessible: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub free_space: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub unmapped_folders: Field<Vec<UnmappedFolder>>,
}

impl RootFolderResource {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: Field::Value(path.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn root_folder_decodes_unmapped_folders() {
        let folder: RootFolderResource = serde_json::from_value(json!({
            "id": 1,
            "path": "/tv",
            "accessible": true,
            "freeSpace": 500000000000i64,
            "unmappedFolders": [
                { "name": "Old Show", "path": "/tv/Old Show", "relativePath": "Old Show" }
            ]
        }))
        .unwrap();
        assert_eq!(folder.unmapped_folders.value().unwrap().len(), 1);
    }
}
