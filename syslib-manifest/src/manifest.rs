//! Manifest types describing one system.

use serde::Deserialize;
use syslib_ir::{ImportSpec, InterfaceError, InterfaceFunction, RenderOptions};

use crate::resource_id::encode_system_id;

/// Default import path for world sources.
pub const DEFAULT_WORLD_PATH: &str = "@latticexyz/world/src";

/// Default import path for store sources.
pub const DEFAULT_STORE_PATH: &str = "@latticexyz/store/src";

/// Root manifest for a system library.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// System metadata
    pub system: SystemConfig,

    /// Import roots for world and store sources
    #[serde(default)]
    pub paths: PathsConfig,

    /// Extra imports the library needs (the system interface, custom types)
    #[serde(default)]
    pub imports: Vec<ImportSpec>,

    /// Functions exposed by the system, in declaration order
    #[serde(default)]
    pub functions: Vec<InterfaceFunction>,

    /// Custom errors declared by the system
    #[serde(default)]
    pub errors: Vec<InterfaceError>,
}

/// `[system]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SystemConfig {
    /// System name as registered in the world
    pub name: String,

    /// Label used to derive generated names; defaults to `name`
    pub label: Option<String>,

    /// Owning namespace; empty for the root namespace
    #[serde(default)]
    pub namespace: String,

    /// Library name; defaults to `<label>Lib`
    pub library: Option<String>,

    /// Resource id; derived from namespace and name when omitted
    pub resource_id: Option<String>,
}

impl SystemConfig {
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    pub fn library(&self) -> String {
        self.library
            .clone()
            .unwrap_or_else(|| format!("{}Lib", self.label()))
    }

    pub fn resource_id(&self) -> String {
        self.resource_id
            .clone()
            .unwrap_or_else(|| encode_system_id(&self.namespace, &self.name))
    }
}

/// `[paths]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    #[serde(default = "default_world_path")]
    pub world: String,
    #[serde(default = "default_store_path")]
    pub store: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            world: default_world_path(),
            store: default_store_path(),
        }
    }
}

fn default_world_path() -> String {
    DEFAULT_WORLD_PATH.to_string()
}

fn default_store_path() -> String {
    DEFAULT_STORE_PATH.to_string()
}

impl Manifest {
    /// Lower the manifest into generator input, applying defaults.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            library_name: self.system.library(),
            system_label: self.system.label().to_string(),
            system_name: self.system.name.clone(),
            namespace: self.system.namespace.clone(),
            resource_id: self.system.resource_id(),
            functions: self.functions.clone(),
            errors: self.errors.clone(),
            imports: self.imports.clone(),
            world_import_path: self.paths.world.clone(),
            store_import_path: self.paths.store.clone(),
        }
    }
}
