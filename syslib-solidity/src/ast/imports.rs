//! Solidity import builder.

use syslib_codegen::{CodeBuilder, CodeFragment, Renderable};

/// A named import: `import { A, B } from "path";`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    from: String,
    symbols: Vec<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            symbols: Vec::new(),
        }
    }

    /// Import a named symbol.
    pub fn named(mut self, symbol: impl Into<String>) -> Self {
        self.symbols.push(symbol.into());
        self
    }

    pub fn path(&self) -> &str {
        &self.from
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Build the import as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::solidity();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!(
            "import {{ {} }} from \"{}\";",
            self.symbols.join(", "),
            self.from
        ))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_symbol() {
        let i = Import::new("@latticexyz/store/src/ResourceId.sol")
            .named("ResourceId")
            .build();
        assert_eq!(
            i,
            "import { ResourceId } from \"@latticexyz/store/src/ResourceId.sol\";\n"
        );
    }

    #[test]
    fn test_multiple_symbols() {
        let i = Import::new("./types.sol")
            .named("Position")
            .named("Direction")
            .build();
        assert_eq!(i, "import { Position, Direction } from \"./types.sol\";\n");
    }
}
