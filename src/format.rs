//! Format command results as human-readable text.

use crate::agent::commands::{
    AgentInitResult, AgentListResult, AgentShowResult, AgentValidateResult,
};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline. Respects NO_COLOR and TTY.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Format the agent list as a table.
pub fn format_list_text(data: &AgentListResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Agents")));
    if data.agents.is_empty() {
        out.push_str("No agents found. Run `agentry init` to create the default set.\n");
        return out;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Id", "Title"]);
    for agent in &data.agents {
        table.add_row(vec![agent.id.clone(), agent.title.clone()]);
    }
    out.push_str(&format!("{}\n", table));
    out.push_str(&format!("\nTotal: {}\n", data.agents.len()));
    out
}

/// Format one agent with its full document.
pub fn format_show_text(data: &AgentShowResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", format_section_heading(&data.title)));
    out.push_str(&format!("  Id: {}\n", data.id));
    if let Some(path) = &data.path {
        out.push_str(&format!("  Source: {}\n", path.display()));
    }
    out.push('\n');
    out.push_str(&data.content);
    if !data.content.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// Format validation results, one block per file.
pub fn format_validate_text(data: &AgentValidateResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Validation")));
    if data.results.is_empty() {
        out.push_str("No persona files found.\n");
        return out;
    }
    let mut valid_count = 0;
    for result in &data.results {
        let status = if result.is_valid() {
            valid_count += 1;
            format!("{}", "ok".green())
        } else {
            format!("{}", "failed".red())
        };
        out.push_str(&format!(
            "  {} [{}] ({}/{} checks)\n",
            result.file,
            status,
            result.passed_checks(),
            result.total_checks()
        ));
        for (description, passed) in &result.checks {
            if !passed {
                out.push_str(&format!("      check failed: {}\n", description));
            }
        }
        for error in &result.errors {
            out.push_str(&format!("      error: {}\n", error));
        }
    }
    out.push_str(&format!(
        "\n{} of {} files valid\n",
        valid_count,
        data.results.len()
    ));
    out
}

/// Format the init outcome.
pub fn format_init_text(data: &AgentInitResult) -> String {
    let mut out = String::new();
    let heading = if data.dry_run {
        "Init (dry run)"
    } else {
        "Init"
    };
    out.push_str(&format!("{}\n\n", format_section_heading(heading)));
    for (id, path) in &data.created {
        let verb = if data.dry_run { "Would create" } else { "Created" };
        out.push_str(&format!("  {}: {} -> {}\n", verb, id, path.display()));
    }
    for id in &data.skipped {
        out.push_str(&format!("  Skipped (exists): {}\n", id));
    }
    if data.created.is_empty() && data.skipped.is_empty() {
        out.push_str("  Nothing to do.\n");
    }
    out
}
