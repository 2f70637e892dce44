use thiserror::Error;

/// Result type for library rendering.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Reasons a system library cannot be rendered.
///
/// Any error aborts rendering of the whole library; partial output is never
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("symbol '{symbol}' is imported from both '{first}' and '{second}'")]
    AmbiguousImport {
        symbol: String,
        first: String,
        second: String,
    },

    #[error("parameter {position} of function '{function}' has no name")]
    UnnamedParameter { function: String, position: usize },
}
