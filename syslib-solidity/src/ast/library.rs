//! Solidity library builder.

use syslib_codegen::{CodeFragment, Renderable};

/// A `library Name { ... }` block with an optional NatSpec header.
///
/// Members are separated by one blank line. A member may span several
/// declarations (for example, a group of error declarations).
#[derive(Debug, Clone, Default)]
pub struct Library {
    name: String,
    doc: Vec<String>,
    members: Vec<Vec<CodeFragment>>,
}

impl Library {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a NatSpec line (e.g. `@title Foo`).
    pub fn doc(mut self, line: impl Into<String>) -> Self {
        self.doc.push(line.into());
        self
    }

    /// Add a member (any Renderable).
    pub fn member<R: Renderable>(mut self, node: R) -> Self {
        self.members.push(node.to_fragments());
        self
    }

    /// Add several members.
    pub fn members<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        self.members
            .extend(nodes.into_iter().map(|node| node.to_fragments()));
        self
    }

    /// Add a member made of raw fragments; empty groups are skipped.
    pub fn group(mut self, fragments: Vec<CodeFragment>) -> Self {
        if !fragments.is_empty() {
            self.members.push(fragments);
        }
        self
    }
}

impl Renderable for Library {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if !self.doc.is_empty() {
            fragments.push(CodeFragment::natspec(self.doc.iter().cloned()));
        }

        let mut body = Vec::new();
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::Blank);
            }
            body.extend(member.iter().cloned());
        }

        fragments.push(CodeFragment::block(
            format!("library {} {{", self.name),
            body,
            Some("}".to_string()),
        ));
        fragments
    }
}
