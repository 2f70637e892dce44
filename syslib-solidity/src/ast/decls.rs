//! Single-line Solidity declarations.

use syslib_codegen::{CodeFragment, Renderable};
use syslib_ir::Parameter;

use crate::fragments::render_arguments;

/// `error Name(args);`
#[derive(Debug, Clone)]
pub struct ErrorDecl {
    name: String,
    params: Vec<Parameter>,
}

impl ErrorDecl {
    pub fn new(name: impl Into<String>, params: impl IntoIterator<Item = Parameter>) -> Self {
        Self {
            name: name.into(),
            params: params.into_iter().collect(),
        }
    }
}

impl Renderable for ErrorDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!(
            "error {}({});",
            self.name,
            render_arguments(&self.params)
        ))]
    }
}

/// User-defined value type: `type Name is bytes32;`
#[derive(Debug, Clone)]
pub struct UserType {
    name: String,
    underlying: String,
}

impl UserType {
    pub fn new(name: impl Into<String>, underlying: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            underlying: underlying.into(),
        }
    }
}

impl Renderable for UserType {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!(
            "type {} is {};",
            self.name, self.underlying
        ))]
    }
}

/// File-level constant, optionally preceded by a line comment.
#[derive(Debug, Clone)]
pub struct Constant {
    ty: String,
    name: String,
    value: String,
    comment: Option<String>,
}

impl Constant {
    pub fn new(ty: impl Into<String>, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
            value: value.into(),
            comment: None,
        }
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

impl Renderable for Constant {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(comment) = &self.comment {
            fragments.push(CodeFragment::comment(comment));
        }
        fragments.push(CodeFragment::line(format!(
            "{} constant {} = {};",
            self.ty, self.name, self.value
        )));
        fragments
    }
}

/// Global library binding: `using Lib for Type global;`
#[derive(Debug, Clone)]
pub struct UsingFor {
    library: String,
    target: String,
}

impl UsingFor {
    pub fn global(library: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            library: library.into(),
            target: target.into(),
        }
    }
}

impl Renderable for UsingFor {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!(
            "using {} for {} global;",
            self.library, self.target
        ))]
    }
}
