//! Generator input.

use serde::{Deserialize, Serialize};

use crate::{InterfaceError, InterfaceFunction};

/// A symbol imported from a Solidity source path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImportSpec {
    pub symbol: String,
    pub path: String,
}

impl ImportSpec {
    pub fn new(symbol: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            path: path.into(),
        }
    }
}

/// Everything the generator needs to render one system library.
///
/// `namespace` is empty for systems registered in the root namespace.
/// `resource_id` is a literal token (usually a `0x`-prefixed bytes32) copied
/// into the output unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub library_name: String,
    pub system_label: String,
    pub system_name: String,
    pub namespace: String,
    pub resource_id: String,
    #[serde(default)]
    pub functions: Vec<InterfaceFunction>,
    #[serde(default)]
    pub errors: Vec<InterfaceError>,
    #[serde(default)]
    pub imports: Vec<ImportSpec>,
    pub world_import_path: String,
    pub store_import_path: String,
}

impl RenderOptions {
    /// Returns true if the system lives in the root namespace.
    pub fn is_root_namespace(&self) -> bool {
        self.namespace.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(namespace: &str) -> RenderOptions {
        RenderOptions {
            library_name: "MoveSystemLib".to_string(),
            system_label: "MoveSystem".to_string(),
            system_name: "MoveSystem".to_string(),
            namespace: namespace.to_string(),
            resource_id: "0x00".to_string(),
            functions: Vec::new(),
            errors: Vec::new(),
            imports: Vec::new(),
            world_import_path: "@latticexyz/world/src".to_string(),
            store_import_path: "@latticexyz/store/src".to_string(),
        }
    }

    #[test]
    fn test_root_namespace() {
        assert!(options("").is_root_namespace());
        assert!(!options("app").is_root_namespace());
    }

    #[test]
    fn test_deserialize_json() {
        let json = r#"{
            "library_name": "MoveSystemLib",
            "system_label": "MoveSystem",
            "system_name": "MoveSystem",
            "namespace": "app",
            "resource_id": "0x00",
            "functions": [{ "name": "move", "parameters": ["int32 x"] }],
            "world_import_path": "@latticexyz/world/src",
            "store_import_path": "@latticexyz/store/src"
        }"#;
        let parsed: RenderOptions = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.functions.len(), 1);
        assert!(parsed.errors.is_empty());
        assert!(parsed.imports.is_empty());
    }
}
