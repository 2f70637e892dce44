//! Interface model for the syslib system library generator.
//!
//! These types describe a system contract's callable surface: its functions,
//! custom errors and the imports its generated library needs. They are
//! constructed once by whoever parses the contract interface and read exactly
//! once by the generator.
//!
//! # Architecture
//!
//! ```text
//! system.toml → syslib-manifest (parsing) → syslib-ir (RenderOptions) → syslib-solidity
//! ```
//!
//! The IR types are designed to be:
//! - Passive (no rendering logic beyond `Display` of declarations)
//! - Serde-friendly, so callers can build them from any format
//! - Free of Solidity type validation: type strings are opaque

mod interface;
mod options;
mod param;

pub use interface::{InterfaceError, InterfaceFunction, StateMutability};
pub use options::{ImportSpec, RenderOptions};
pub use param::{DataLocation, Parameter, ParseParameterError};
