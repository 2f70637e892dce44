use syslib_ir::RenderOptions;
use tracing::debug;

use crate::{error::Result, library::render_system_library};

/// Solidity generator that produces one system library per [`RenderOptions`].
pub struct Generator<'a> {
    options: &'a RenderOptions,
}

impl<'a> Generator<'a> {
    pub fn new(options: &'a RenderOptions) -> Self {
        Self { options }
    }

    /// File the library is conventionally written to, `<Lib>.sol`.
    pub fn file_name(&self) -> String {
        format!("{}.sol", self.options.library_name)
    }

    /// Render the library source. Nothing is returned on error.
    pub fn render(&self) -> Result<String> {
        debug!(
            library = %self.options.library_name,
            namespace = %self.options.namespace,
            functions = self.options.functions.len(),
            errors = self.options.errors.len(),
            "rendering system library"
        );
        let source = render_system_library(self.options)?;
        debug!(bytes = source.len(), "rendered system library");
        Ok(source)
    }
}
