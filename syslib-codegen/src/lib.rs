//! Shared code generation utilities for the syslib generator.
//!
//! This crate provides the language-agnostic pieces the Solidity renderer is
//! assembled from.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`generation`] - Output management (ImportCollector)
//! - [`naming`] - Identifier conventions and reserved words

pub mod builder;
pub mod generation;
pub mod naming;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
