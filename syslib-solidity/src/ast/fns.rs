//! Solidity function builder.

use syslib_codegen::{CodeBuilder, CodeFragment, Renderable};
use syslib_ir::Parameter;

use crate::fragments::{render_arguments, render_return_clause};

/// Function visibility. Library helpers are only ever internal or private.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Internal,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Internal => "internal",
            Visibility::Private => "private",
        }
    }
}

/// Mutability keyword written in a function signature.
///
/// `NonPayable` writes no keyword at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mutability {
    #[default]
    NonPayable,
    View,
    Pure,
}

impl Mutability {
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Mutability::NonPayable => None,
            Mutability::View => Some("view"),
            Mutability::Pure => Some("pure"),
        }
    }
}

/// Builder for Solidity functions.
#[derive(Debug, Clone)]
pub struct Function {
    name: String,
    params: Vec<Parameter>,
    visibility: Visibility,
    mutability: Mutability,
    returns: Vec<Parameter>,
    body: Vec<CodeFragment>,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            visibility: Visibility::default(),
            mutability: Mutability::default(),
            returns: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    pub fn params(mut self, params: impl IntoIterator<Item = Parameter>) -> Self {
        self.params.extend(params);
        self
    }

    pub fn private(mut self) -> Self {
        self.visibility = Visibility::Private;
        self
    }

    pub fn mutability(mut self, mutability: Mutability) -> Self {
        self.mutability = mutability;
        self
    }

    pub fn returns(mut self, param: Parameter) -> Self {
        self.returns.push(param);
        self
    }

    pub fn returns_all(mut self, params: impl IntoIterator<Item = Parameter>) -> Self {
        self.returns.extend(params);
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(line));
        self
    }

    /// Add pre-built fragments to the function body.
    pub fn body(mut self, fragments: impl IntoIterator<Item = CodeFragment>) -> Self {
        self.body.extend(fragments);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Format the function signature, including the opening brace.
    pub fn signature(&self) -> String {
        let mut signature = format!(
            "function {}({}) {}",
            self.name,
            render_arguments(&self.params),
            self.visibility.as_str()
        );
        if let Some(keyword) = self.mutability.keyword() {
            signature.push(' ');
            signature.push_str(keyword);
        }
        let returns = render_return_clause(&self.returns);
        if !returns.is_empty() {
            signature.push(' ');
            signature.push_str(&returns);
        }
        signature.push_str(" {");
        signature
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::solidity();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Function {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            self.signature(),
            self.body.clone(),
            Some("}".to_string()),
        )]
    }
}
