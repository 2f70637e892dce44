use syslib_codegen::CodeFragment;
use syslib_ir::InterfaceFunction;

use super::{CallForm, CallWrapper, wrapper_variant};
use crate::{
    ast::Function,
    error::Result,
    fragments::{render_abi_decode, render_encode_call},
};

const ROOT_GUARD_COMMENT: &str =
    "if the contract calling this function is a root system, it should use `callAsRoot`";

/// Variant called on a [`CallWrapper`], dispatching through the world.
///
/// Read-only functions are sent with `staticcall` so the callee cannot
/// mutate state; a failed call re-raises the callee's revert data unchanged.
/// Mutating functions go through `call` or `callFrom` depending on whether
/// the wrapper carries a `from` address.
pub struct ForwardedCall<'a> {
    interface: &'a str,
    guard_error: &'a str,
}

impl<'a> ForwardedCall<'a> {
    pub fn new(interface: &'a str, guard_error: &'a str) -> Self {
        Self {
            interface,
            guard_error,
        }
    }

    fn guard(&self) -> Vec<CodeFragment> {
        vec![
            CodeFragment::comment(ROOT_GUARD_COMMENT),
            CodeFragment::line(format!(
                "if (address(_world()) == address(this)) revert {}();",
                self.guard_error
            )),
        ]
    }
}

fn static_dispatch(function: &InterfaceFunction) -> Vec<CodeFragment> {
    let mut fragments = vec![
        CodeFragment::line("bytes memory worldCall = self.from == address(0)"),
        CodeFragment::indent(vec![
            CodeFragment::line("? abi.encodeCall(IWorldCall.call, (self.systemId, systemCall))"),
            CodeFragment::line(
                ": abi.encodeCall(IWorldCall.callFrom, (self.from, self.systemId, systemCall));",
            ),
        ]),
        CodeFragment::line(
            "(bool success, bytes memory returnData) = address(_world()).staticcall(worldCall);",
        ),
        CodeFragment::line("if (!success) revertWithBytes(returnData);"),
    ];
    fragments.extend(render_abi_decode(
        "abi.decode(returnData, (bytes))",
        &function.return_parameters,
    ));
    fragments
}

fn transactional_dispatch(function: &InterfaceFunction) -> Vec<CodeFragment> {
    render_abi_decode(
        "self.from == address(0) ? _world().call(self.systemId, systemCall) : _world().callFrom(self.from, self.systemId, systemCall)",
        &function.return_parameters,
    )
}

impl CallForm for ForwardedCall<'_> {
    fn name(&self) -> &'static str {
        "forwarded"
    }

    fn render(&self, function: &InterfaceFunction) -> Result<Option<Function>> {
        let system_call = render_encode_call(self.interface, function)?;

        let dispatch = if function.state_mutability.is_read_only() {
            static_dispatch(function)
        } else {
            transactional_dispatch(function)
        };

        let rendered = wrapper_variant::<CallWrapper>(function)
            .body(self.guard())
            .body_line(format!("bytes memory systemCall = {};", system_call))
            .body(dispatch);
        Ok(Some(rendered))
    }
}

#[cfg(test)]
mod tests {
    use syslib_ir::{Parameter, StateMutability};

    use super::*;

    fn render(function: &InterfaceFunction) -> String {
        ForwardedCall::new("MoveSystem", "MoveSystemLib_CallingFromRootSystem")
            .render(function)
            .unwrap()
            .unwrap()
            .build()
    }

    #[test]
    fn test_nonpayable_without_returns() {
        let f = InterfaceFunction::new("move")
            .param(Parameter::named("int32", "x"))
            .param(Parameter::named("int32", "y"));

        assert_eq!(
            render(&f),
            "\
function move(CallWrapper memory self, int32 x, int32 y) internal {
  // if the contract calling this function is a root system, it should use `callAsRoot`
  if (address(_world()) == address(this)) revert MoveSystemLib_CallingFromRootSystem();
  bytes memory systemCall = abi.encodeCall(MoveSystem.move, (x, y));
  self.from == address(0) ? _world().call(self.systemId, systemCall) : _world().callFrom(self.from, self.systemId, systemCall);
}
"
        );
    }

    #[test]
    fn test_view_with_returns() {
        let f = InterfaceFunction::new("isOpen")
            .mutability(StateMutability::View)
            .returns(Parameter::new("bool"));

        assert_eq!(
            render(&f),
            "\
function isOpen(CallWrapper memory self) internal view returns (bool) {
  // if the contract calling this function is a root system, it should use `callAsRoot`
  if (address(_world()) == address(this)) revert MoveSystemLib_CallingFromRootSystem();
  bytes memory systemCall = abi.encodeCall(MoveSystem.isOpen, ());
  bytes memory worldCall = self.from == address(0)
    ? abi.encodeCall(IWorldCall.call, (self.systemId, systemCall))
    : abi.encodeCall(IWorldCall.callFrom, (self.from, self.systemId, systemCall));
  (bool success, bytes memory returnData) = address(_world()).staticcall(worldCall);
  if (!success) revertWithBytes(returnData);
  bytes memory result = abi.decode(returnData, (bytes));
  return abi.decode(result, (bool));
}
"
        );
    }

    #[test]
    fn test_payable_dispatches_transactionally() {
        let f = InterfaceFunction::new("deposit").mutability(StateMutability::Payable);
        let out = render(&f);

        assert!(out.starts_with("function deposit(CallWrapper memory self) internal {"));
        assert!(out.contains("_world().callFrom(self.from, self.systemId, systemCall);"));
        assert!(!out.contains("staticcall"));
    }

    #[test]
    fn test_guard_is_present_for_every_mutability() {
        for mutability in [
            StateMutability::Pure,
            StateMutability::View,
            StateMutability::Nonpayable,
            StateMutability::Payable,
        ] {
            let f = InterfaceFunction::new("f").mutability(mutability);
            assert!(
                render(&f).contains("revert MoveSystemLib_CallingFromRootSystem();"),
                "missing guard for {}",
                mutability
            );
        }
    }

    #[test]
    fn test_address_payable_parameter() {
        let f = InterfaceFunction::new("withdraw")
            .param("address payable to".parse::<Parameter>().unwrap())
            .returns(Parameter::new("address payable"));
        let out = render(&f);

        assert!(out.starts_with(
            "function withdraw(CallWrapper memory self, address payable to) internal returns (address payable) {"
        ));
        assert!(out.contains("abi.encodeCall(MoveSystem.withdraw, (to));"));
        assert!(out.contains("return abi.decode(result, (address payable));"));
    }

    #[test]
    fn test_unnamed_parameter_is_an_error() {
        let f = InterfaceFunction::new("move").param(Parameter::new("int32"));
        let form = ForwardedCall::new("MoveSystem", "Guard");
        assert!(form.render(&f).is_err());
    }
}
