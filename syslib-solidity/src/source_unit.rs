//! SourceUnit abstraction for structured Solidity file generation.
//!
//! Provides a high-level API for generating Solidity files with a header
//! banner, organized imports and body content.

use syslib_codegen::{CodeBuilder, CodeFragment, Renderable};

use crate::ast::Import;

/// Banner written at the top of every generated file.
pub const SOLIDITY_HEADER: &str = "// SPDX-License-Identifier: MIT
pragma solidity >=0.8.24;

/* Autogenerated file. Do not edit manually. */";

/// A structured representation of a Solidity source file.
///
/// Organizes code into three sections: header, imports, and body. Each
/// section is rendered in order with blank lines between them, and body
/// elements are separated by a single blank line.
#[derive(Default)]
pub struct SourceUnit {
    header: Option<String>,
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl SourceUnit {
    /// Create a new empty SourceUnit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header banner.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Add imports from an iterator.
    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add several renderables as a single body element (no blank lines between them).
    pub fn add_group<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        let fragments: Vec<CodeFragment> = nodes
            .into_iter()
            .flat_map(|node| node.to_fragments())
            .collect();
        if !fragments.is_empty() {
            self.body.push(fragments);
        }
        self
    }

    /// Render the file with Solidity indentation (2 spaces).
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::solidity();
        let mut sections = 0;

        // 1. Header banner
        if let Some(header) = &self.header {
            for line in header.lines() {
                if line.is_empty() {
                    builder.push_blank();
                } else {
                    builder.push_line(line);
                }
            }
            sections += 1;
        }

        // 2. Imports
        if !self.imports.is_empty() {
            if sections > 0 {
                builder.push_blank();
            }
            for import in &self.imports {
                builder.emit(import);
            }
            sections += 1;
        }

        // 3. Body with blank lines between elements
        for fragments in &self.body {
            if sections > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
            sections += 1;
        }

        builder.build()
    }
}
