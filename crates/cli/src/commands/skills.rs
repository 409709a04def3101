use crate::cli::OutputFormat;
use anyhow::Result;
use pathwise_engine::{get_skills_for_domain, roadmap_checklist, ChecklistEntry};
use std::fmt::Write as _;

/// Handle the `skills` command.
pub(crate) fn handle_skills_command(
    label: Option<&str>,
    have: Option<&[String]>,
    format: OutputFormat,
) -> Result<()> {
    let output = match (have, format) {
        (Some(have), OutputFormat::Json) => {
            serde_json::to_string_pretty(&roadmap_checklist(label, have))?
        }
        (Some(have), OutputFormat::Text) => render_checklist(&roadmap_checklist(label, have)),
        (None, OutputFormat::Json) => serde_json::to_string_pretty(&get_skills_for_domain(label))?,
        (None, OutputFormat::Text) => render_skills(&get_skills_for_domain(label)),
    };
    println!("{}", output.trim_end());
    Ok(())
}

fn render_skills(skills: &[String]) -> String {
    if skills.is_empty() {
        return "(no domain given)".to_string();
    }
    skills.join("\n")
}

fn render_checklist(entries: &[ChecklistEntry]) -> String {
    if entries.is_empty() {
        return "(no domain given)".to_string();
    }

    let acquired = entries.iter().filter(|e| e.acquired).count();
    let mut out = String::new();
    for entry in entries {
        let mark = if entry.acquired { "x" } else { " " };
        let _ = writeln!(out, "[{mark}] {}", entry.skill);
    }
    let _ = write!(out, "{acquired}/{} acquired", entries.len());
    out
}
