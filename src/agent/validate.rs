//! Persona source validation.

use crate::agent::entry::{is_valid_slug, title_from_content};
use crate::error::RegistryError;
use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::Path;

/// Validation outcome for a single persona file.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub file: String,
    pub checks: Vec<(String, bool)>,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn new(file: String) -> Self {
        Self {
            file,
            checks: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn add_check(&mut self, description: &str, passed: bool) {
        self.checks.push((description.to_string(), passed));
    }

    pub fn add_error(&mut self, error: String) {
        self.errors.push(error);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.checks.iter().all(|(_, passed)| *passed)
    }

    pub fn passed_checks(&self) -> usize {
        self.checks.iter().filter(|(_, passed)| *passed).count()
    }

    pub fn total_checks(&self) -> usize {
        self.checks.len()
    }
}

/// Validate every candidate persona file in a directory.
///
/// Unlike the registry scan, this does not skip broken files; it reports one
/// [`ValidationResult`] per `*.md`/`*.markdown` file so a user can see exactly
/// why a document would be rejected.
pub fn validate_dir(dir: &Path) -> Result<Vec<ValidationResult>, RegistryError> {
    if !dir.exists() {
        return Err(RegistryError::Config(format!(
            "Persona directory not found: {}",
            dir.display()
        )));
    }

    let entries = std::fs::read_dir(dir).map_err(|e| {
        RegistryError::Config(format!(
            "Failed to read persona directory {}: {}",
            dir.display(),
            e
        ))
    })?;

    let mut paths: Vec<_> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && matches!(
                    path.extension().and_then(OsStr::to_str),
                    Some("md") | Some("markdown")
                )
        })
        .collect();
    paths.sort();

    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut results = Vec::new();

    for path in paths {
        let file = path
            .file_name()
            .and_then(OsStr::to_str)
            .unwrap_or("<non-utf8>")
            .to_string();
        let mut result = ValidationResult::new(file);

        let id = match path.file_stem().and_then(OsStr::to_str) {
            Some(stem) => stem.to_string(),
            None => {
                result.add_error("File name is not valid UTF-8".to_string());
                results.push(result);
                continue;
            }
        };

        if is_valid_slug(&id) {
            result.add_check("Name is slug-form", true);
        } else {
            result.add_error(format!("Name '{}' is not slug-form", id));
        }

        if seen_ids.insert(id.clone()) {
            result.add_check("Id is unique", true);
        } else {
            result.add_error(format!("Duplicate agent id '{}'", id));
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => {
                if content.trim().is_empty() {
                    result.add_error("Document is empty".to_string());
                } else {
                    result.add_check("Document is non-empty UTF-8", true);
                    result.add_check("Title heading present", title_from_content(&content).is_some());
                }
            }
            Err(e) => {
                result.add_error(format!("Failed to read document: {}", e));
            }
        }

        results.push(result);
    }

    Ok(results)
}
