//! Solidity renderer for system call libraries.
//!
//! Given a system's interface ([`RenderOptions`]), produces the source of a
//! library exposing every function in three calling conventions:
//!
//! - direct, called on the system's handle constant
//! - forwarded, called on a [`CallWrapper`](call_forms::CallWrapper) and
//!   dispatched through the world, optionally on behalf of another address
//! - root, called on a [`RootCallWrapper`](call_forms::RootCallWrapper) from
//!   a root system, bypassing the world's access checks
//!
//! ```
//! use syslib_ir::{InterfaceFunction, Parameter, RenderOptions};
//! use syslib_solidity::Generator;
//!
//! let options = RenderOptions {
//!     library_name: "MoveSystemLib".to_string(),
//!     system_label: "MoveSystem".to_string(),
//!     system_name: "MoveSystem".to_string(),
//!     namespace: "app".to_string(),
//!     resource_id: "0x01".to_string(),
//!     functions: vec![
//!         InterfaceFunction::new("move")
//!             .param(Parameter::named("int32", "x"))
//!             .param(Parameter::named("int32", "y")),
//!     ],
//!     errors: Vec::new(),
//!     imports: Vec::new(),
//!     world_import_path: "@latticexyz/world/src".to_string(),
//!     store_import_path: "@latticexyz/store/src".to_string(),
//! };
//!
//! let source = Generator::new(&options).render().unwrap();
//! assert!(source.contains("library MoveSystemLib {"));
//! ```

pub mod ast;
pub mod call_forms;
mod error;
pub mod fragments;
mod generator;
mod library;
mod source_unit;

pub use error::{RenderError, Result};
pub use generator::Generator;
pub use library::{LibraryNames, render_system_library};
pub use source_unit::{SOLIDITY_HEADER, SourceUnit};
pub use syslib_ir::RenderOptions;
