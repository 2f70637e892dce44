//! Solidity struct builder.

use syslib_codegen::{CodeFragment, Renderable};
use syslib_ir::Parameter;

/// Builder for Solidity structs.
#[derive(Debug, Clone)]
pub struct Struct {
    name: String,
    fields: Vec<Parameter>,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, ty: impl Into<String>, name: impl Into<String>) -> Self {
        self.fields.push(Parameter::named(ty, name));
        self
    }
}

impl Renderable for Struct {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let body = self
            .fields
            .iter()
            .map(|field| CodeFragment::line(format!("{};", field)))
            .collect();

        vec![CodeFragment::block(
            format!("struct {} {{", self.name),
            body,
            Some("}".to_string()),
        )]
    }
}

#[cfg(test)]
mod tests {
    use syslib_codegen::CodeBuilder;

    use super::*;

    #[test]
    fn test_struct() {
        let s = Struct::new("CallWrapper")
            .field("ResourceId", "systemId")
            .field("address", "from");

        let mut builder = CodeBuilder::solidity();
        builder.emit(&s);
        assert_eq!(
            builder.build(),
            "struct CallWrapper {\n  ResourceId systemId;\n  address from;\n}\n"
        );
    }
}
