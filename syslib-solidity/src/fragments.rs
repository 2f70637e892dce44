//! Small, pure renderers shared by every call form.
//!
//! Each function here is a deterministic function of its inputs and produces
//! either a string or a handful of [`CodeFragment`]s.

use syslib_codegen::{CodeFragment, Renderable, generation::ImportCollector};
use syslib_ir::{ImportSpec, InterfaceError, InterfaceFunction, Parameter};

use crate::{
    ast::{ErrorDecl, Import},
    error::{RenderError, Result},
};

/// Join parameter declarations into a comma-separated list.
///
/// Returns an empty string for an empty sequence.
pub fn render_arguments(params: &[Parameter]) -> String {
    params
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Join parameter names into a call argument list.
///
/// Every parameter must be named; `function` is only used for the error.
pub fn render_argument_names(function: &str, params: &[Parameter]) -> Result<String> {
    let names = params
        .iter()
        .enumerate()
        .map(|(position, param)| {
            param.name().ok_or_else(|| RenderError::UnnamedParameter {
                function: function.to_string(),
                position,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(names.join(", "))
}

/// `returns (<args>)`, or an empty string when nothing is returned.
pub fn render_return_clause(returns: &[Parameter]) -> String {
    if returns.is_empty() {
        return String::new();
    }
    format!("returns ({})", render_arguments(returns))
}

/// One import per distinct path, in first-seen order.
///
/// Duplicate `(symbol, path)` pairs collapse. Symbols listed in `defined` are
/// declared by the generated unit itself and are dropped before the ambiguity
/// check, as are paths left without symbols.
pub fn render_imports(imports: &[ImportSpec], defined: &[&str]) -> Result<Vec<Import>> {
    let mut collector = ImportCollector::new();
    for spec in imports {
        collector.add(&spec.path, &spec.symbol);
    }
    for symbol in defined {
        collector.remove_symbol(symbol);
    }

    for spec in imports {
        let modules = collector.modules_for(&spec.symbol);
        if let [first, second, ..] = modules.as_slice() {
            return Err(RenderError::AmbiguousImport {
                symbol: spec.symbol.clone(),
                first: first.to_string(),
                second: second.to_string(),
            });
        }
    }

    Ok(collector
        .iter()
        .map(|(path, symbols)| {
            symbols
                .iter()
                .fold(Import::new(path), |import, symbol| import.named(symbol))
        })
        .collect())
}

/// One `error` declaration per entry, in input order.
pub fn render_errors(errors: &[InterfaceError]) -> Vec<CodeFragment> {
    errors
        .iter()
        .flat_map(|error| ErrorDecl::new(&error.name, error.parameters.clone()).to_fragments())
        .collect()
}

/// `abi.encodeCall(<Interface>.<function>, (<names>))`
pub fn render_encode_call(interface: &str, function: &InterfaceFunction) -> Result<String> {
    let names = render_argument_names(&function.name, &function.parameters)?;
    Ok(format!(
        "abi.encodeCall({}.{}, ({}))",
        interface, function.name, names
    ))
}

/// Evaluate `expression` and decode its bytes into the declared return types.
///
/// Without return values the expression is emitted as a bare statement.
/// Otherwise the result is decoded positionally, in declared order.
pub fn render_abi_decode(expression: &str, returns: &[Parameter]) -> Vec<CodeFragment> {
    if returns.is_empty() {
        return vec![CodeFragment::line(format!("{};", expression))];
    }

    let types = returns
        .iter()
        .map(|param| param.ty.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    vec![
        CodeFragment::line(format!("bytes memory result = {};", expression)),
        CodeFragment::line(format!("return abi.decode(result, ({}));", types)),
    ]
}

#[cfg(test)]
mod tests {
    use syslib_ir::DataLocation;

    use super::*;

    fn p(decl: &str) -> Parameter {
        decl.parse().unwrap()
    }

    #[test]
    fn test_render_arguments() {
        assert_eq!(render_arguments(&[]), "");
        assert_eq!(
            render_arguments(&[p("int32 x"), p("string memory name")]),
            "int32 x, string memory name"
        );
    }

    #[test]
    fn test_render_argument_names() {
        let names = render_argument_names("move", &[p("int32 x"), p("int32 y")]).unwrap();
        assert_eq!(names, "x, y");
        assert_eq!(render_argument_names("ping", &[]).unwrap(), "");
    }

    #[test]
    fn test_render_argument_names_unnamed() {
        let err = render_argument_names("move", &[p("int32 x"), p("int32")]).unwrap_err();
        assert_eq!(
            err,
            RenderError::UnnamedParameter {
                function: "move".to_string(),
                position: 1
            }
        );
    }

    #[test]
    fn test_render_return_clause() {
        assert_eq!(render_return_clause(&[]), "");
        assert_eq!(render_return_clause(&[p("bool")]), "returns (bool)");
        assert_eq!(
            render_return_clause(&[p("uint256 total"), p("bytes memory")]),
            "returns (uint256 total, bytes memory)"
        );
    }

    #[test]
    fn test_render_imports_groups_by_path() {
        let imports = render_imports(
            &[
                ImportSpec::new("Systems", "world/Systems.sol"),
                ImportSpec::new("IWorldCall", "world/IWorldKernel.sol"),
                ImportSpec::new("IWorldErrors", "world/IWorldKernel.sol"),
                ImportSpec::new("Systems", "world/Systems.sol"),
            ],
            &[],
        )
        .unwrap();

        let rendered: Vec<String> = imports.iter().map(Import::build).collect();
        assert_eq!(
            rendered,
            vec![
                "import { Systems } from \"world/Systems.sol\";\n",
                "import { IWorldCall, IWorldErrors } from \"world/IWorldKernel.sol\";\n",
            ]
        );
    }

    #[test]
    fn test_render_imports_prunes_defined_symbols() {
        let imports = render_imports(
            &[
                ImportSpec::new("CallWrapper", "old/Wrappers.sol"),
                ImportSpec::new("Position", "types.sol"),
            ],
            &["CallWrapper", "RootCallWrapper"],
        )
        .unwrap();

        assert_eq!(imports.len(), 1);
        assert_eq!(imports[0].path(), "types.sol");
    }

    #[test]
    fn test_render_imports_defined_symbol_from_several_paths() {
        let imports = render_imports(
            &[
                ImportSpec::new("CallWrapper", "a.sol"),
                ImportSpec::new("CallWrapper", "b.sol"),
            ],
            &["CallWrapper", "RootCallWrapper"],
        )
        .unwrap();

        assert!(imports.is_empty());
    }

    #[test]
    fn test_render_imports_ambiguous() {
        let err = render_imports(
            &[
                ImportSpec::new("Position", "a.sol"),
                ImportSpec::new("Position", "b.sol"),
            ],
            &[],
        )
        .unwrap_err();

        assert_eq!(
            err,
            RenderError::AmbiguousImport {
                symbol: "Position".to_string(),
                first: "a.sol".to_string(),
                second: "b.sol".to_string(),
            }
        );
    }

    #[test]
    fn test_render_errors_preserves_order() {
        let errors = [
            InterfaceError::new("Zeta"),
            InterfaceError::new("Alpha").param(p("uint256 amount")),
        ];
        assert_eq!(
            render_errors(&errors),
            vec![
                CodeFragment::line("error Zeta();"),
                CodeFragment::line("error Alpha(uint256 amount);"),
            ]
        );
    }

    #[test]
    fn test_render_encode_call() {
        let f = InterfaceFunction::new("move")
            .param(p("int32 x"))
            .param(p("int32 y"));
        assert_eq!(
            render_encode_call("MoveSystem", &f).unwrap(),
            "abi.encodeCall(MoveSystem.move, (x, y))"
        );

        let empty = InterfaceFunction::new("reset");
        assert_eq!(
            render_encode_call("MoveSystem", &empty).unwrap(),
            "abi.encodeCall(MoveSystem.reset, ())"
        );
    }

    #[test]
    fn test_render_abi_decode_without_returns() {
        assert_eq!(
            render_abi_decode("dispatch()", &[]),
            vec![CodeFragment::line("dispatch();")]
        );
    }

    #[test]
    fn test_render_abi_decode_uses_declared_types_in_order() {
        let returns = [
            p("uint256 count"),
            Parameter::named("string", "label").with_location(DataLocation::Memory),
            p("bool"),
        ];
        assert_eq!(
            render_abi_decode("dispatch()", &returns),
            vec![
                CodeFragment::line("bytes memory result = dispatch();"),
                CodeFragment::line("return abi.decode(result, (uint256, string, bool));"),
            ]
        );
    }
}
