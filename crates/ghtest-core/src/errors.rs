//! Cross-cutting error types for ghtest.
//!
//! Domain-specific errors (`ConfigError`, `DocumentError`, `GenerateError`)
//! live in their respective crates.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A dialect name did not match any supported output dialect.
    #[error("Unknown dialect '{0}' (expected one of: mstest, xunit)")]
    UnknownDialect(String),
}
