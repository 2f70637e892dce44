use syslib_ir::{InterfaceFunction, StateMutability};

use super::{CallForm, RootCallWrapper, wrapper_variant};
use crate::{
    ast::Function,
    error::Result,
    fragments::{render_abi_decode, render_encode_call},
};

/// Returns true if a root variant exists for a function with the given
/// mutability.
///
/// Static calls between two root systems are not supported by the world, so
/// a system in the root namespace only gets root variants for non-payable
/// functions.
pub fn has_root_variant(root_namespace: bool, state_mutability: StateMutability) -> bool {
    !root_namespace || state_mutability.is_nonpayable()
}

/// Variant called on a [`RootCallWrapper`] from code running as a root system.
///
/// Bypasses world dispatch: read-only functions use
/// `SystemCall.staticcallOrRevert`, mutating ones use
/// `SystemCall.callWithHooksOrRevert` and forward `msg.value`.
pub struct RootCall<'a> {
    interface: &'a str,
    root_namespace: bool,
}

impl<'a> RootCall<'a> {
    pub fn new(interface: &'a str, root_namespace: bool) -> Self {
        Self {
            interface,
            root_namespace,
        }
    }
}

impl CallForm for RootCall<'_> {
    fn name(&self) -> &'static str {
        "root"
    }

    fn render(&self, function: &InterfaceFunction) -> Result<Option<Function>> {
        if !has_root_variant(self.root_namespace, function.state_mutability) {
            return Ok(None);
        }

        let system_call = render_encode_call(self.interface, function)?;
        let dispatch = if function.state_mutability.is_read_only() {
            "SystemCall.staticcallOrRevert(self.from, self.systemId, systemCall)"
        } else {
            "SystemCall.callWithHooksOrRevert(self.from, self.systemId, systemCall, msg.value)"
        };

        let rendered = wrapper_variant::<RootCallWrapper>(function)
            .body_line(format!("bytes memory systemCall = {};", system_call))
            .body(render_abi_decode(dispatch, &function.return_parameters));
        Ok(Some(rendered))
    }
}

#[cfg(test)]
mod tests {
    use syslib_ir::Parameter;

    use super::*;

    const ALL: [StateMutability; 4] = [
        StateMutability::Pure,
        StateMutability::View,
        StateMutability::Nonpayable,
        StateMutability::Payable,
    ];

    #[test]
    fn test_has_root_variant() {
        for mutability in ALL {
            assert!(has_root_variant(false, mutability));
        }
        assert!(has_root_variant(true, StateMutability::Nonpayable));
        assert!(!has_root_variant(true, StateMutability::Pure));
        assert!(!has_root_variant(true, StateMutability::View));
        assert!(!has_root_variant(true, StateMutability::Payable));
    }

    #[test]
    fn test_omitted_in_root_namespace() {
        let form = RootCall::new("AccessSystem", true);
        let f = InterfaceFunction::new("hasAccess")
            .mutability(StateMutability::View)
            .returns(Parameter::new("bool"));
        assert!(form.render(&f).unwrap().is_none());
    }

    #[test]
    fn test_nonpayable_in_root_namespace() {
        let form = RootCall::new("AccessSystem", true);
        let f = InterfaceFunction::new("grant").param(Parameter::named("address", "grantee"));

        assert_eq!(
            form.render(&f).unwrap().unwrap().build(),
            "\
function grant(RootCallWrapper memory self, address grantee) internal {
  bytes memory systemCall = abi.encodeCall(AccessSystem.grant, (grantee));
  SystemCall.callWithHooksOrRevert(self.from, self.systemId, systemCall, msg.value);
}
"
        );
    }

    #[test]
    fn test_view_with_returns() {
        let form = RootCall::new("MoveSystem", false);
        let f = InterfaceFunction::new("position")
            .mutability(StateMutability::View)
            .returns(Parameter::named("int32", "x"))
            .returns(Parameter::named("int32", "y"));

        assert_eq!(
            form.render(&f).unwrap().unwrap().build(),
            "\
function position(RootCallWrapper memory self) internal view returns (int32 x, int32 y) {
  bytes memory systemCall = abi.encodeCall(MoveSystem.position, ());
  bytes memory result = SystemCall.staticcallOrRevert(self.from, self.systemId, systemCall);
  return abi.decode(result, (int32, int32));
}
"
        );
    }

    #[test]
    fn test_has_no_guard() {
        let form = RootCall::new("MoveSystem", false);
        let out = form
            .render(&InterfaceFunction::new("move"))
            .unwrap()
            .unwrap()
            .build();
        assert!(!out.contains("_CallingFromRootSystem"));
    }
}
