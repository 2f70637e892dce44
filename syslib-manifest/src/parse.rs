//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use syslib_ir::Parameter;
use tracing::debug;

use crate::{
    Error, Manifest, Result,
    error::SourceContext,
    resource_id::{NAME_BYTES, NAMESPACE_BYTES, is_valid_resource_id},
    validate::ParseContext,
};

/// Manifest encodings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ManifestFormat {
    #[default]
    Toml,
    Json,
}

impl ManifestFormat {
    /// JSON for a `.json` extension, TOML otherwise.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ManifestFormat::Json,
            _ => ManifestFormat::Toml,
        }
    }
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "system.toml", ManifestFormat::Toml)
    }
}

impl Manifest {
    /// Parse a manifest file; the format follows the file extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        debug!(path = %path.display(), "loaded system manifest");
        parse_manifest(
            &content,
            &path.display().to_string(),
            ManifestFormat::from_path(path),
        )
    }

    /// Parse a manifest from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(
        content: &str,
        filename: &str,
        format: ManifestFormat,
    ) -> Result<Self> {
        parse_manifest(content, filename, format)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str, format: ManifestFormat) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = match format {
        ManifestFormat::Toml => toml::from_str(content).map_err(|e| source_ctx.toml_error(e))?,
        ManifestFormat::Json => {
            serde_json::from_str(content).map_err(|e| source_ctx.json_error(e))?
        }
    };
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);
    let system = &manifest.system;

    if system.name.is_empty() {
        return Err(ctx.validation_error("system name cannot be empty", ""));
    }
    if system.name.len() > NAME_BYTES {
        return Err(ctx.validation_error(
            format!(
                "system name '{}' is {} bytes long, at most {} are allowed",
                system.name,
                system.name.len(),
                NAME_BYTES
            ),
            &system.name,
        ));
    }
    if system.namespace.len() > NAMESPACE_BYTES {
        return Err(ctx.validation_error(
            format!(
                "namespace '{}' is {} bytes long, at most {} are allowed",
                system.namespace,
                system.namespace.len(),
                NAMESPACE_BYTES
            ),
            &system.namespace,
        ));
    }
    if let Some(resource_id) = &system.resource_id {
        if !is_valid_resource_id(resource_id) {
            return Err(ctx.validation_error(
                "resource id must be '0x' followed by 64 hex digits",
                resource_id,
            ));
        }
    }

    ctx.validate_name(system.label(), "system label")?;
    ctx.validate_name(&system.library(), "library")?;

    for import in &manifest.imports {
        ctx.validate_name(&import.symbol, "import")?;
        if import.path.is_empty() {
            return Err(ctx.validation_error(
                format!("import '{}' has an empty path", import.symbol),
                &import.symbol,
            ));
        }
    }

    for function in &manifest.functions {
        ctx.validate_name(&function.name, "function")?;
        let fn_ctx = ctx.push(&function.name);
        validate_parameters(&fn_ctx, &function.name, &function.parameters, true)?;
        validate_parameters(&fn_ctx, &function.name, &function.return_parameters, false)?;
    }

    for error in &manifest.errors {
        ctx.validate_name(&error.name, "error")?;
        validate_parameters(&ctx.push(&error.name), &error.name, &error.parameters, false)?;
    }

    Ok(())
}

/// Parameter names, when present, must be identifiers. Function inputs must
/// all be named since the generated variants pass them through by name.
fn validate_parameters(
    ctx: &ParseContext<'_>,
    owner: &str,
    params: &[Parameter],
    require_names: bool,
) -> Result<()> {
    for (position, param) in params.iter().enumerate() {
        match param.name() {
            Some(name) => ctx.validate_name(name, "parameter")?,
            None if require_names => {
                return Err(ctx.validation_error(
                    format!(
                        "parameter {} ('{}') of '{}' must be named",
                        position, param, owner
                    ),
                    owner,
                ));
            }
            None => {}
        }
    }
    Ok(())
}
