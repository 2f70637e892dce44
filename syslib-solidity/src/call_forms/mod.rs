//! Call-form renderers, one per calling convention.
//!
//! Every interface function is rendered once per call form. All variants
//! share the function's name and differ in their leading receiver parameter:
//!
//! - [`DirectCall`] - receiver is the handle type; forwards to [`ForwardedCall`]
//! - [`ForwardedCall`] - receiver is [`CallWrapper`]; dispatches through the world
//! - [`RootCall`] - receiver is [`RootCallWrapper`]; dispatches via `SystemCall`
//!
//! The two wrapper structs have identical fields, so they are modelled as
//! distinct types here: a renderer picks its receiver through the
//! [`ContextWrapper`] implementation it is written against.

mod direct;
mod forwarded;
mod root;

pub use direct::DirectCall;
pub use forwarded::ForwardedCall;
pub use root::{RootCall, has_root_variant};
use syslib_ir::{DataLocation, InterfaceFunction, Parameter, StateMutability};

use crate::{
    ast::{Function, Mutability, Struct},
    error::Result,
};

/// A context wrapper struct carried as the receiver of a call variant.
pub trait ContextWrapper {
    /// Solidity struct name.
    const NAME: &'static str;

    /// `struct <NAME> { ResourceId systemId; address from; }`
    fn declaration() -> Struct {
        Struct::new(Self::NAME)
            .field("ResourceId", "systemId")
            .field("address", "from")
    }

    /// `<NAME> memory self`
    fn receiver() -> Parameter {
        Parameter::named(Self::NAME, "self").with_location(DataLocation::Memory)
    }

    /// Struct constructor expression.
    fn construct(system_id: &str, from: &str) -> String {
        format!("{}({}, {})", Self::NAME, system_id, from)
    }
}

/// Wrapper for calls dispatched through the world, optionally on behalf of `from`.
pub struct CallWrapper;

impl ContextWrapper for CallWrapper {
    const NAME: &'static str = "CallWrapper";
}

/// Wrapper for calls made from a root system, bypassing world dispatch.
pub struct RootCallWrapper;

impl ContextWrapper for RootCallWrapper {
    const NAME: &'static str = "RootCallWrapper";
}

/// Renders one variant of an interface function for a calling convention.
pub trait CallForm {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Render the variant, or `None` when this convention has no variant for
    /// the function.
    fn render(&self, function: &InterfaceFunction) -> Result<Option<Function>>;
}

/// Mutability written on every generated variant.
///
/// `pure` becomes `view` because each variant reads the store address.
/// Internal functions cannot be payable, so `payable` writes no keyword.
pub(crate) fn variant_mutability(state_mutability: StateMutability) -> Mutability {
    if state_mutability.is_read_only() {
        Mutability::View
    } else {
        Mutability::NonPayable
    }
}

/// Signature shared by all variants: receiver first, then the declared
/// parameters and return values.
pub(crate) fn variant(function: &InterfaceFunction, receiver: Parameter) -> Function {
    Function::new(&function.name)
        .param(receiver)
        .params(function.parameters.iter().cloned())
        .mutability(variant_mutability(function.state_mutability))
        .returns_all(function.return_parameters.iter().cloned())
}

/// Signature for a variant whose receiver is a context wrapper.
pub(crate) fn wrapper_variant<W: ContextWrapper>(function: &InterfaceFunction) -> Function {
    variant(function, W::receiver())
}
