//! Persona entry value type and id/title derivation rules.

use serde::{Deserialize, Serialize};

/// A single agent persona: a named guideline document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentEntry {
    /// Unique identifier in slug form (e.g. `test-creation`)
    pub id: String,
    /// Human-readable title (e.g. `Test Creation`)
    pub title: String,
    /// The guideline document, treated as an opaque blob
    pub content: String,
}

impl AgentEntry {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Check that an id is slug-form: lowercase ASCII alphanumerics and single
/// hyphens, neither leading nor trailing.
pub fn is_valid_slug(id: &str) -> bool {
    if id.is_empty() || id.starts_with('-') || id.ends_with('-') || id.contains("--") {
        return false;
    }
    id.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Derive a display title from a slug: `test-creation` becomes `Test Creation`.
pub fn title_from_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extract the title from a document: the text of the first `# ` heading,
/// or `None` when the document has no top-level heading.
pub fn title_from_content(content: &str) -> Option<String> {
    content.lines().find_map(|line| {
        let line = line.trim_start();
        line.strip_prefix("# ")
            .map(|rest| rest.trim().to_string())
            .filter(|title| !title.is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_slugs() {
        assert!(is_valid_slug("debugging"));
        assert!(is_valid_slug("test-creation"));
        assert!(is_valid_slug("a11y-review"));
    }

    #[test]
    fn test_invalid_slugs() {
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("Test-Creation"));
        assert!(!is_valid_slug("-leading"));
        assert!(!is_valid_slug("trailing-"));
        assert!(!is_valid_slug("double--hyphen"));
        assert!(!is_valid_slug("has space"));
        assert!(!is_valid_slug("under_score"));
    }

    #[test]
    fn test_title_from_slug() {
        assert_eq!(title_from_slug("debugging"), "Debugging");
        assert_eq!(title_from_slug("test-creation"), "Test Creation");
        assert_eq!(title_from_slug("commit-readiness"), "Commit Readiness");
    }

    #[test]
    fn test_title_from_content_first_heading_wins() {
        let doc = "Some preamble\n# Code Review\n# Second Heading\nbody";
        assert_eq!(title_from_content(doc), Some("Code Review".to_string()));
    }

    #[test]
    fn test_title_from_content_absent() {
        assert_eq!(title_from_content("no headings here\n## only h2"), None);
        assert_eq!(title_from_content("#not-a-heading"), None);
        assert_eq!(title_from_content("# "), None);
    }
}
