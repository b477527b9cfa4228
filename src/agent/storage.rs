//! Persona storage: enumerate persona documents from a source.

pub mod dir;

use crate::agent::entry::AgentEntry;
use crate::error::RegistryError;
use std::path::PathBuf;

/// A persona document as found in storage, with its source path retained for
/// diagnostics and CLI output.
#[derive(Debug, Clone)]
pub struct StoredPersona {
    pub entry: AgentEntry,
    pub path: PathBuf,
}

pub trait AgentStorage: Send + Sync {
    /// Enumerate persona documents in a deterministic order.
    fn list(&self) -> Result<Vec<StoredPersona>, RegistryError>;
    /// The directory documents are read from.
    fn dir(&self) -> &std::path::Path;
}

pub use dir::DirAgentStorage;
