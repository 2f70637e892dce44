//! Solidity AST builders for the declarations a system library is made of.
//!
//! These provide a high-level API for constructing Solidity syntax, which is
//! rendered to [`CodeFragment`](syslib_codegen::CodeFragment)s and emitted
//! through a `CodeBuilder`.

mod decls;
mod fns;
mod imports;
mod library;
mod structs;

pub use decls::{Constant, ErrorDecl, UserType, UsingFor};
pub use fns::{Function, Mutability, Visibility};
pub use imports::Import;
pub use library::Library;
pub use structs::Struct;
