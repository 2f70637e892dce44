use syslib_ir::{InterfaceFunction, Parameter};

use super::{CallForm, CallWrapper, ContextWrapper, variant};
use crate::{ast::Function, error::Result, fragments::render_argument_names};

/// Variant called directly on the handle value.
///
/// Builds a [`CallWrapper`] with a zero `from` address (call as the caller
/// itself) and delegates to the forwarded variant. No guard is emitted here;
/// the forwarded variant carries it.
pub struct DirectCall<'a> {
    handle_type: &'a str,
}

impl<'a> DirectCall<'a> {
    pub fn new(handle_type: &'a str) -> Self {
        Self { handle_type }
    }
}

impl CallForm for DirectCall<'_> {
    fn name(&self) -> &'static str {
        "direct"
    }

    fn render(&self, function: &InterfaceFunction) -> Result<Option<Function>> {
        let args = render_argument_names(&function.name, &function.parameters)?;
        let call = format!(
            "{}.{}({})",
            CallWrapper::construct("self.toResourceId()", "address(0)"),
            function.name,
            args
        );
        let statement = if function.has_returns() {
            format!("return {};", call)
        } else {
            format!("{};", call)
        };

        let receiver = Parameter::named(self.handle_type, "self");
        Ok(Some(variant(function, receiver).body_line(statement)))
    }
}
