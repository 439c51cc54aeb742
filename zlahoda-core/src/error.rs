use thiserror::Error;

/// Errors produced while building search conditions
#[derive(Debug, Error)]
pub enum PatternError {
    /// A caller-supplied tag pattern failed to compile
    #[error("Invalid tag pattern: {0}")]
    InvalidTagPattern(#[from] regex::Error),
}
