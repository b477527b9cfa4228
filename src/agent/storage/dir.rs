//! Directory adapter: one persona document per file.

use crate::agent::entry::{is_valid_slug, title_from_content, title_from_slug, AgentEntry};
use crate::agent::storage::{AgentStorage, StoredPersona};
use crate::error::RegistryError;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

const EXTENSIONS: [&str; 2] = ["md", "markdown"];

/// Reads persona documents from a flat directory.
///
/// The agent id is the file stem; the title is the first `# ` heading in the
/// document, falling back to a title-cased slug. Files that cannot become a
/// valid entry are skipped with a warning rather than failing the whole scan;
/// two files that map to the same id are both returned, so the duplicate
/// surfaces at registry load.
pub struct DirAgentStorage {
    dir: PathBuf,
}

impl DirAgentStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn read_persona(&self, path: &Path) -> Option<StoredPersona> {
        let id = match path.file_stem().and_then(OsStr::to_str) {
            Some(stem) => stem.to_string(),
            None => {
                tracing::warn!("Skipping persona file with non-UTF8 name: {:?}", path);
                return None;
            }
        };

        if !is_valid_slug(&id) {
            tracing::warn!(
                "Skipping persona file {}: name '{}' is not a slug",
                path.display(),
                id
            );
            return None;
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!("Failed to read persona file {}: {}", path.display(), e);
                return None;
            }
        };

        if content.trim().is_empty() {
            tracing::warn!("Skipping empty persona file: {}", path.display());
            return None;
        }

        let title = title_from_content(&content).unwrap_or_else(|| title_from_slug(&id));

        Some(StoredPersona {
            entry: AgentEntry::new(id, title, content),
            path: path.to_path_buf(),
        })
    }
}

impl AgentStorage for DirAgentStorage {
    fn list(&self) -> Result<Vec<StoredPersona>, RegistryError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let entries = std::fs::read_dir(&self.dir).map_err(|e| {
            RegistryError::Config(format!(
                "Failed to read persona directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    tracing::warn!(
                        "Failed to read directory entry in {}: {}",
                        self.dir.display(),
                        e
                    );
                    continue;
                }
            };

            let path = entry.path();
            let is_persona = path
                .extension()
                .and_then(OsStr::to_str)
                .map(|ext| EXTENSIONS.contains(&ext))
                .unwrap_or(false);
            if path.is_file() && is_persona {
                paths.push(path);
            }
        }

        // read_dir order is platform-dependent; sort for a stable listing.
        paths.sort();

        Ok(paths
            .iter()
            .filter_map(|path| self.read_persona(path))
            .collect())
    }

    fn dir(&self) -> &Path {
        &self.dir
    }
}
