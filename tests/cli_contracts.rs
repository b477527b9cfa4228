use std::fs;
use std::path::Path;

use agentry::error::RegistryError;
use agentry::tooling::cli::{CliContext, Commands};
use tempfile::TempDir;

/// Point config resolution at the temp dir so a stray or malformed user
/// config on the host cannot leak into the suite.
fn with_config_home<F: FnOnce()>(temp: &TempDir, f: F) {
    std::env::set_var("AGENTRY_CONFIG_HOME", temp.path());
    f();
    std::env::remove_var("AGENTRY_CONFIG_HOME");
}

fn write_persona(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn context_for(dir: &Path) -> CliContext {
    CliContext::new(Some(dir.to_path_buf()), None).unwrap()
}

#[test]
fn list_json_contract_has_required_fields() {
    let temp = TempDir::new().unwrap();
    with_config_home(&temp, || {
        write_persona(temp.path(), "debugging.md", "# Debugging\n\nReproduce first.");
        write_persona(temp.path(), "test-creation.md", "# Test Creation\n\nBehavior.");

        let cli = context_for(temp.path());
        let output = cli
            .execute(&Commands::List {
                format: "json".to_string(),
            })
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.get("total").and_then(|v| v.as_u64()), Some(2));

        let agents = parsed
            .get("agents")
            .and_then(|v| v.as_array())
            .expect("agents array should exist");
        assert_eq!(agents.len(), 2);

        let entry = agents
            .iter()
            .find(|item| {
                item.get("id") == Some(&serde_json::Value::String("debugging".to_string()))
            })
            .expect("debugging should appear in list output");
        assert_eq!(
            entry.get("title").and_then(|v| v.as_str()),
            Some("Debugging")
        );
        assert!(entry.get("path").and_then(|v| v.as_str()).is_some());
    });
}

#[test]
fn list_orders_by_file_name() {
    let temp = TempDir::new().unwrap();
    with_config_home(&temp, || {
        write_persona(temp.path(), "refactoring.md", "# Refactoring");
        write_persona(temp.path(), "code-review.md", "# Code Review");
        write_persona(temp.path(), "debugging.md", "# Debugging");

        let cli = context_for(temp.path());
        let output = cli
            .execute(&Commands::List {
                format: "json".to_string(),
            })
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let ids: Vec<&str> = parsed["agents"]
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["code-review", "debugging", "refactoring"]);
    });
}

#[test]
fn show_json_contract_carries_document() {
    let temp = TempDir::new().unwrap();
    with_config_home(&temp, || {
        write_persona(temp.path(), "debugging.md", "# Debugging\n\nReproduce first.");

        let cli = context_for(temp.path());
        let output = cli
            .execute(&Commands::Show {
                id: "debugging".to_string(),
                format: "json".to_string(),
            })
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.get("id").and_then(|v| v.as_str()), Some("debugging"));
        assert_eq!(
            parsed.get("title").and_then(|v| v.as_str()),
            Some("Debugging")
        );
        let content = parsed.get("content").and_then(|v| v.as_str()).unwrap();
        assert!(content.contains("Reproduce first."));
    });
}

#[test]
fn show_unknown_agent_is_not_found() {
    let temp = TempDir::new().unwrap();
    with_config_home(&temp, || {
        write_persona(temp.path(), "debugging.md", "# Debugging");

        let cli = context_for(temp.path());
        let result = cli.execute(&Commands::Show {
            id: "refactor".to_string(),
            format: "text".to_string(),
        });

        match result {
            Err(RegistryError::NotFound(id)) => assert_eq!(id, "refactor"),
            Err(e) => panic!("unexpected error: {}", e),
            Ok(_) => panic!("expected NotFound"),
        }
    });
}

#[test]
fn duplicate_ids_fail_registry_load() {
    let temp = TempDir::new().unwrap();
    with_config_home(&temp, || {
        write_persona(temp.path(), "refactoring.md", "# Refactoring\none");
        write_persona(temp.path(), "refactoring.markdown", "# Refactoring\ntwo");

        match CliContext::new(Some(temp.path().to_path_buf()), None) {
            Err(RegistryError::DuplicateId(id)) => assert_eq!(id, "refactoring"),
            Err(e) => panic!("unexpected error: {}", e),
            Ok(_) => panic!("expected DuplicateId"),
        }
    });
}

#[test]
fn validate_json_contract_has_required_fields() {
    let temp = TempDir::new().unwrap();
    with_config_home(&temp, || {
        write_persona(temp.path(), "debugging.md", "# Debugging\nbody");
        write_persona(temp.path(), "empty.md", "");

        let cli = context_for(temp.path());
        let output = cli
            .execute(&Commands::Validate {
                format: "json".to_string(),
            })
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.get("total").and_then(|v| v.as_u64()), Some(2));
        assert_eq!(parsed.get("valid_count").and_then(|v| v.as_u64()), Some(1));

        let files = parsed
            .get("files")
            .and_then(|v| v.as_array())
            .expect("files array should exist");
        let empty = files
            .iter()
            .find(|f| f.get("file") == Some(&serde_json::Value::String("empty.md".to_string())))
            .expect("empty.md should appear in validate output");
        assert_eq!(empty.get("valid").and_then(|v| v.as_bool()), Some(false));
        assert!(!empty["errors"].as_array().unwrap().is_empty());
    });
}

#[test]
fn init_then_list_exposes_seed_personas() {
    let temp = TempDir::new().unwrap();
    with_config_home(&temp, || {
        let dir = temp.path().join("agents");

        let cli = CliContext::new(Some(dir.clone()), None).unwrap();
        let output = cli
            .execute(&Commands::Init {
                force: false,
                list: false,
                format: "text".to_string(),
            })
            .unwrap();
        assert!(output.contains("Created"));

        // Fresh context: the registry is immutable once loaded.
        let cli = CliContext::new(Some(dir), None).unwrap();
        let output = cli
            .execute(&Commands::List {
                format: "json".to_string(),
            })
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let ids: Vec<&str> = parsed["agents"]
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["id"].as_str().unwrap())
            .collect();
        assert!(ids.contains(&"debugging"));
        assert!(ids.contains(&"test-creation"));
        assert!(ids.contains(&"commit-readiness"));
    });
}

#[test]
fn init_json_contract_has_required_fields() {
    let temp = TempDir::new().unwrap();
    with_config_home(&temp, || {
        let dir = temp.path().join("agents");

        let cli = CliContext::new(Some(dir.clone()), None).unwrap();
        let output = cli
            .execute(&Commands::Init {
                force: false,
                list: false,
                format: "json".to_string(),
            })
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.get("dry_run").and_then(|v| v.as_bool()), Some(false));
        assert!(parsed.get("skipped").and_then(|v| v.as_array()).is_some());

        let created = parsed
            .get("created")
            .and_then(|v| v.as_array())
            .expect("created array should exist");
        assert!(!created.is_empty());
        let entry = created
            .iter()
            .find(|item| {
                item.get("id") == Some(&serde_json::Value::String("debugging".to_string()))
            })
            .expect("debugging should appear in init output");
        assert!(entry.get("path").and_then(|v| v.as_str()).is_some());

        // Second run: everything already exists, nothing created.
        let parsed: serde_json::Value = serde_json::from_str(
            &cli.execute(&Commands::Init {
                force: false,
                list: false,
                format: "json".to_string(),
            })
            .unwrap(),
        )
        .unwrap();
        assert!(parsed["created"].as_array().unwrap().is_empty());
        assert!(!parsed["skipped"].as_array().unwrap().is_empty());
    });
}

#[test]
fn init_dry_run_creates_nothing() {
    let temp = TempDir::new().unwrap();
    with_config_home(&temp, || {
        let dir = temp.path().join("agents");

        let cli = CliContext::new(Some(dir.clone()), None).unwrap();
        let output = cli
            .execute(&Commands::Init {
                force: false,
                list: true,
                format: "text".to_string(),
            })
            .unwrap();
        assert!(output.contains("Would create"));
        assert!(!dir.exists());
    });
}
