//! Agent command service: single entry point per agent CLI command variant.
//!
//! Owns the command workflow logic; the CLI parses, calls one method per
//! variant, and formats the result.

use crate::agent::defaults::seed_personas;
use crate::agent::registry::AgentRegistry;
use crate::agent::validate::{validate_dir, ValidationResult};
use crate::error::RegistryError;
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub struct AgentCommandService;

/// One row of the list command.
#[derive(Debug, Clone, Serialize)]
pub struct AgentListItem {
    pub id: String,
    pub title: String,
    pub path: Option<PathBuf>,
}

/// Result of the list command.
#[derive(Debug, Clone)]
pub struct AgentListResult {
    pub agents: Vec<AgentListItem>,
}

/// Result of the show command.
#[derive(Debug, Clone, Serialize)]
pub struct AgentShowResult {
    pub id: String,
    pub title: String,
    pub content: String,
    pub path: Option<PathBuf>,
}

/// Result of the validate command.
#[derive(Debug, Clone)]
pub struct AgentValidateResult {
    pub results: Vec<ValidationResult>,
}

/// Result of the init command.
#[derive(Debug, Clone)]
pub struct AgentInitResult {
    pub created: Vec<(String, PathBuf)>,
    pub skipped: Vec<String>,
    pub dry_run: bool,
}

impl AgentCommandService {
    /// List all agents in registry order.
    pub fn list(
        registry: &AgentRegistry,
        paths: &HashMap<String, PathBuf>,
    ) -> Result<AgentListResult, RegistryError> {
        let agents = registry
            .list()
            .map(|(id, title)| AgentListItem {
                id: id.to_string(),
                title: title.to_string(),
                path: paths.get(id).cloned(),
            })
            .collect();
        Ok(AgentListResult { agents })
    }

    /// Show one agent with its full document.
    pub fn show(
        registry: &AgentRegistry,
        paths: &HashMap<String, PathBuf>,
        id: &str,
    ) -> Result<AgentShowResult, RegistryError> {
        let entry = registry.get(id)?;
        Ok(AgentShowResult {
            id: entry.id.clone(),
            title: entry.title.clone(),
            content: entry.content.clone(),
            path: paths.get(id).cloned(),
        })
    }

    /// Validate every persona file in the source directory.
    pub fn validate(dir: &Path) -> Result<AgentValidateResult, RegistryError> {
        let results = validate_dir(dir)?;
        Ok(AgentValidateResult { results })
    }

    /// Write the built-in seed personas into the source directory.
    ///
    /// Existing files are skipped unless `force`; `dry_run` reports the plan
    /// without touching the filesystem.
    pub fn init(dir: &Path, force: bool, dry_run: bool) -> Result<AgentInitResult, RegistryError> {
        let mut created = Vec::new();
        let mut skipped = Vec::new();

        if !dry_run {
            std::fs::create_dir_all(dir).map_err(|e| {
                RegistryError::Config(format!(
                    "Failed to create persona directory {}: {}",
                    dir.display(),
                    e
                ))
            })?;
        }

        for persona in seed_personas() {
            let path = dir.join(format!("{}.md", persona.id));
            if path.exists() && !force {
                skipped.push(persona.id);
                continue;
            }
            if !dry_run {
                std::fs::write(&path, &persona.content).map_err(|e| {
                    RegistryError::Config(format!(
                        "Failed to write persona file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                tracing::info!(agent = %persona.id, "Wrote seed persona");
            }
            created.push((persona.id, path));
        }

        Ok(AgentInitResult {
            created,
            skipped,
            dry_run,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::storage::{AgentStorage, DirAgentStorage};
    use tempfile::TempDir;

    #[test]
    fn test_init_then_list_roundtrip() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("agents");

        let result = AgentCommandService::init(&dir, false, false).unwrap();
        assert!(!result.created.is_empty());
        assert!(result.skipped.is_empty());

        let storage = DirAgentStorage::new(&dir);
        let personas = storage.list().unwrap();
        let registry =
            AgentRegistry::load(personas.iter().map(|p| p.entry.clone())).unwrap();
        assert_eq!(registry.len(), result.created.len());
        assert!(registry.get("debugging").is_ok());
    }

    #[test]
    fn test_init_skips_existing_without_force() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("agents");

        AgentCommandService::init(&dir, false, false).unwrap();
        std::fs::write(dir.join("debugging.md"), "# Debugging\ncustomized").unwrap();

        let second = AgentCommandService::init(&dir, false, false).unwrap();
        assert!(second.created.is_empty());
        assert!(second.skipped.contains(&"debugging".to_string()));
        let content = std::fs::read_to_string(dir.join("debugging.md")).unwrap();
        assert!(content.contains("customized"));

        let forced = AgentCommandService::init(&dir, true, false).unwrap();
        assert!(forced.skipped.is_empty());
        let content = std::fs::read_to_string(dir.join("debugging.md")).unwrap();
        assert!(!content.contains("customized"));
    }

    #[test]
    fn test_init_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("agents");

        let result = AgentCommandService::init(&dir, false, true).unwrap();
        assert!(!result.created.is_empty());
        assert!(!dir.exists());
    }
}
