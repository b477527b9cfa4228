//! Agent Persona Model
//!
//! Defines the persona entry, the immutable registry over it, and the storage
//! adapters that enumerate persona documents from disk. The registry is built
//! once at startup and is read-only afterward, so concurrent readers need no
//! synchronization.

pub mod commands;
pub mod defaults;
pub mod entry;
pub mod registry;
pub mod storage;
pub mod validate;

pub use entry::{is_valid_slug, title_from_slug, AgentEntry};
pub use registry::AgentRegistry;
pub use storage::{AgentStorage, DirAgentStorage, StoredPersona};
pub use validate::ValidationResult;
