//! Output management utilities.

mod imports;

pub use imports::ImportCollector;
