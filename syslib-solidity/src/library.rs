//! Assembles a complete system library source file.

use syslib_codegen::naming::lower_first;
use syslib_ir::{DataLocation, ImportSpec, InterfaceError, Parameter, RenderOptions};
use tracing::debug;

use crate::{
    ast::{Constant, Function, Library, Mutability, UserType, UsingFor},
    call_forms::{
        CallForm, CallWrapper, ContextWrapper, DirectCall, ForwardedCall, RootCall,
        RootCallWrapper,
    },
    error::Result,
    fragments::{render_errors, render_imports},
    source_unit::{SOLIDITY_HEADER, SourceUnit},
};

const LIBRARY_DEV_NOTE: &str = "@dev This library is automatically generated from the corresponding system contract. Do not edit manually.";

/// Names derived from the render options that callers rely on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryNames {
    /// Library name, e.g. `MoveSystemLib`.
    pub library: String,
    /// Handle type, `<SystemLabel>Type`.
    pub handle_type: String,
    /// Handle constant, the system label with a lower-case first character.
    pub handle_constant: String,
    /// Error raised when the forwarded variant runs inside a root system.
    pub guard_error: String,
}

impl LibraryNames {
    pub fn new(options: &RenderOptions) -> Self {
        Self {
            library: options.library_name.clone(),
            handle_type: format!("{}Type", options.system_label),
            handle_constant: lower_first(&options.system_label),
            guard_error: format!("{}_CallingFromRootSystem", options.library_name),
        }
    }

    /// Symbols declared by the generated unit; imports of these are dropped.
    fn defined(&self) -> [&str; 5] {
        [
            self.library.as_str(),
            self.handle_type.as_str(),
            self.handle_constant.as_str(),
            CallWrapper::NAME,
            RootCallWrapper::NAME,
        ]
    }
}

/// Caller imports followed by the world and store symbols the library uses.
fn library_imports(options: &RenderOptions) -> Vec<ImportSpec> {
    let world = &options.world_import_path;
    let store = &options.store_import_path;

    let mut imports = options.imports.clone();
    imports.extend([
        ImportSpec::new("revertWithBytes", format!("{}/revertWithBytes.sol", world)),
        ImportSpec::new("IWorldCall", format!("{}/IWorldKernel.sol", world)),
        ImportSpec::new("SystemCall", format!("{}/SystemCall.sol", world)),
        ImportSpec::new("Systems", format!("{}/codegen/tables/Systems.sol", world)),
        ImportSpec::new("ResourceId", format!("{}/ResourceId.sol", store)),
        ImportSpec::new("StoreSwitch", format!("{}/StoreSwitch.sol", store)),
    ]);
    imports
}

/// Guard error first, then the system's own errors in declared order.
fn library_errors(names: &LibraryNames, options: &RenderOptions) -> Vec<InterfaceError> {
    std::iter::once(InterfaceError::new(&names.guard_error))
        .chain(options.errors.iter().cloned())
        .collect()
}

/// Wrapper constructors, resource id conversions, address lookup and the
/// world accessor.
fn utility_functions(names: &LibraryNames) -> Vec<Function> {
    let handle = &names.handle_type;
    let this = || Parameter::named(handle, "self");
    let wrapper = |name: &str| Parameter::new(name).with_location(DataLocation::Memory);

    vec![
        Function::new("callFrom")
            .param(this())
            .param(Parameter::named("address", "from"))
            .mutability(Mutability::Pure)
            .returns(wrapper(CallWrapper::NAME))
            .body_line(format!(
                "return {};",
                CallWrapper::construct("self.toResourceId()", "from")
            )),
        Function::new("callAsRoot")
            .param(this())
            .mutability(Mutability::View)
            .returns(wrapper(RootCallWrapper::NAME))
            .body_line(format!(
                "return {};",
                RootCallWrapper::construct("self.toResourceId()", "msg.sender")
            )),
        Function::new("callAsRootFrom")
            .param(this())
            .param(Parameter::named("address", "from"))
            .mutability(Mutability::Pure)
            .returns(wrapper(RootCallWrapper::NAME))
            .body_line(format!(
                "return {};",
                RootCallWrapper::construct("self.toResourceId()", "from")
            )),
        Function::new("toResourceId")
            .param(this())
            .mutability(Mutability::Pure)
            .returns(Parameter::new("ResourceId"))
            .body_line(format!("return ResourceId.wrap({}.unwrap(self));", handle)),
        Function::new("fromResourceId")
            .param(Parameter::named("ResourceId", "resourceId"))
            .mutability(Mutability::Pure)
            .returns(Parameter::new(handle))
            .body_line(format!("return {}.wrap(resourceId.unwrap());", handle)),
        Function::new("getAddress")
            .param(this())
            .mutability(Mutability::View)
            .returns(Parameter::new("address"))
            .body_line("return Systems.getSystem(self.toResourceId());"),
        Function::new("_world")
            .private()
            .mutability(Mutability::View)
            .returns(Parameter::new("IWorldCall"))
            .body_line("return IWorldCall(StoreSwitch.getStoreAddress());"),
    ]
}

/// Render the complete library source for one system.
///
/// Output order: header, imports, handle type, handle constant, the two
/// wrapper structs, the library (errors, direct variants, forwarded variants,
/// root variants, utilities) and the global `using` bindings.
pub fn render_system_library(options: &RenderOptions) -> Result<String> {
    let names = LibraryNames::new(options);
    let imports = render_imports(&library_imports(options), &names.defined())?;

    let direct = DirectCall::new(&names.handle_type);
    let forwarded = ForwardedCall::new(&options.system_label, &names.guard_error);
    let root = RootCall::new(&options.system_label, options.is_root_namespace());
    let forms: [&dyn CallForm; 3] = [&direct, &forwarded, &root];

    let mut library = Library::new(&names.library)
        .doc(format!("@title {}", names.library))
        .doc(LIBRARY_DEV_NOTE)
        .group(render_errors(&library_errors(&names, options)));

    for form in forms {
        for function in &options.functions {
            match form.render(function)? {
                Some(variant) => {
                    debug!(function = %function.name, form = form.name(), "rendered variant");
                    library = library.member(variant);
                }
                None => debug!(
                    function = %function.name,
                    form = form.name(),
                    "no variant: static calls between root systems are unsupported"
                ),
            }
        }
    }
    let library = library.members(utility_functions(&names));

    let handle_constant = Constant::new(
        &names.handle_type,
        &names.handle_constant,
        format!("{}.wrap({})", names.handle_type, options.resource_id),
    )
    .comment(format!(
        "equivalent to WorldResourceIdLib.encode({{ typeId: RESOURCE_SYSTEM, namespace: \"{}\", name: \"{}\" }})",
        options.namespace, options.system_name
    ));

    let unit = SourceUnit::new()
        .header(SOLIDITY_HEADER)
        .imports(imports)
        .add(UserType::new(&names.handle_type, "bytes32"))
        .add(handle_constant)
        .add(CallWrapper::declaration())
        .add(RootCallWrapper::declaration())
        .add(library)
        .add_group([
            UsingFor::global(&names.library, &names.handle_type),
            UsingFor::global(&names.library, CallWrapper::NAME),
            UsingFor::global(&names.library, RootCallWrapper::NAME),
        ]);

    Ok(unit.render())
}
