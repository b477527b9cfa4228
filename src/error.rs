//! Crate-wide error type.

use thiserror::Error;

/// Errors surfaced by the registry and its surrounding tooling.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Two sources supplied the same agent id. Fatal at load time: the
    /// source set is misconfigured and the registry refuses to guess.
    #[error("Duplicate agent id: {0}")]
    DuplicateId(String),

    /// Lookup for an id that was never loaded. Recoverable; callers should
    /// surface "unknown agent" to their user.
    #[error("Agent not found: {0}")]
    NotFound(String),

    /// Configuration, I/O, or path-resolution failure.
    #[error("Configuration error: {0}")]
    Config(String),
}
