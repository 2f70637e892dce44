//! System manifest parsing and validation.
//!
//! A manifest describes one system: its name and namespace, the functions
//! and errors it exposes, and the imports the generated library needs.
//! [`Manifest::render_options`] lowers it into generator input.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod parse;
pub mod resource_id;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use manifest::{DEFAULT_STORE_PATH, DEFAULT_WORLD_PATH, Manifest, PathsConfig, SystemConfig};
pub use parse::{ManifestFormat, parse_manifest};
pub use validate::ParseContext;
