//! CLI Tooling
//!
//! Command-line interface over the persona registry. The context loads the
//! registry once; each command is parsed by clap, dispatched to the command
//! service, and formatted as text or JSON.

use crate::agent::commands::AgentCommandService;
use crate::agent::registry::AgentRegistry;
use crate::agent::storage::{AgentStorage, DirAgentStorage};
use crate::config::{resolve_personas_dir, Config};
use crate::error::RegistryError;
use crate::format::{format_init_text, format_list_text, format_show_text, format_validate_text};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::collections::HashMap;
use std::path::PathBuf;

/// Agentry CLI - Agent persona registry
#[derive(Parser)]
#[command(name = "agentry")]
#[command(about = "Registry and CLI for AI agent persona documents")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Persona directory (overrides AGENTRY_DIR and the config file)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all agents
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show one agent's guideline document
    Show {
        /// Agent id (slug form, e.g. test-creation)
        id: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Validate persona files in the source directory
    Validate {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Initialize the default persona set
    Init {
        /// Force re-initialization (overwrite existing)
        #[arg(long)]
        force: bool,

        /// List what would be initialized without creating
        #[arg(long)]
        list: bool,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

/// CLI execution context: registry loaded once, commands dispatched against it.
pub struct CliContext {
    dir: PathBuf,
    registry: AgentRegistry,
    paths: HashMap<String, PathBuf>,
}

impl CliContext {
    pub fn new(
        cli_dir: Option<PathBuf>,
        config_path: Option<PathBuf>,
    ) -> Result<Self, RegistryError> {
        let config = Config::load(config_path.as_deref())?;
        let dir = resolve_personas_dir(cli_dir, &config)?;

        let storage = DirAgentStorage::new(&dir);
        let personas = storage.list()?;
        let paths = personas
            .iter()
            .map(|p| (p.entry.id.clone(), p.path.clone()))
            .collect();
        let registry = AgentRegistry::load(personas.into_iter().map(|p| p.entry))?;

        Ok(Self {
            dir,
            registry,
            paths,
        })
    }

    pub fn registry(&self) -> &AgentRegistry {
        &self.registry
    }

    pub fn execute(&self, command: &Commands) -> Result<String, RegistryError> {
        match command {
            Commands::List { format } => {
                let result = AgentCommandService::list(&self.registry, &self.paths)?;
                if format == "json" {
                    let payload = json!({
                        "total": result.agents.len(),
                        "agents": result.agents,
                    });
                    Ok(serde_json::to_string_pretty(&payload)
                        .map_err(|e| RegistryError::Config(format!("JSON encoding failed: {}", e)))?)
                } else {
                    Ok(format_list_text(&result))
                }
            }
            Commands::Show { id, format } => {
                let result = AgentCommandService::show(&self.registry, &self.paths, id)?;
                if format == "json" {
                    Ok(serde_json::to_string_pretty(&result)
                        .map_err(|e| RegistryError::Config(format!("JSON encoding failed: {}", e)))?)
                } else {
                    Ok(format_show_text(&result))
                }
            }
            Commands::Validate { format } => {
                let result = AgentCommandService::validate(&self.dir)?;
                if format == "json" {
                    let files: Vec<_> = result
                        .results
                        .iter()
                        .map(|r| {
                            json!({
                                "file": r.file,
                                "valid": r.is_valid(),
                                "passed_checks": r.passed_checks(),
                                "total_checks": r.total_checks(),
                                "errors": r.errors,
                            })
                        })
                        .collect();
                    let valid_count = result.results.iter().filter(|r| r.is_valid()).count();
                    let payload = json!({
                        "total": result.results.len(),
                        "valid_count": valid_count,
                        "files": files,
                    });
                    Ok(serde_json::to_string_pretty(&payload)
                        .map_err(|e| RegistryError::Config(format!("JSON encoding failed: {}", e)))?)
                } else {
                    Ok(format_validate_text(&result))
                }
            }
            Commands::Init {
                force,
                list,
                format,
            } => {
                let result = AgentCommandService::init(&self.dir, *force, *list)?;
                if format == "json" {
                    let created: Vec<_> = result
                        .created
                        .iter()
                        .map(|(id, path)| json!({ "id": id, "path": path }))
                        .collect();
                    let payload = json!({
                        "dry_run": result.dry_run,
                        "created": created,
                        "skipped": result.skipped,
                    });
                    Ok(serde_json::to_string_pretty(&payload)
                        .map_err(|e| RegistryError::Config(format!("JSON encoding failed: {}", e)))?)
                } else {
                    Ok(format_init_text(&result))
                }
            }
        }
    }
}
