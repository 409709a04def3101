use crate::cli::OutputFormat;
use crate::config::Config;
use crate::snapshot::load_snapshot;
use anyhow::Result;
use pathwise_engine::{rank_and_truncate, Domain, ResourceScorer, ScoredItem, SearchResult};
use std::fmt::Write as _;
use std::path::Path;

/// Handle the `search` command.
pub(crate) fn handle_search_command(
    input: &Path,
    limit: Option<usize>,
    format: OutputFormat,
    config: &Config,
) -> Result<()> {
    let snapshot = load_snapshot(input)?;
    let ctx = snapshot.user_context(&config.activity);
    let limit = config.explore.resolve(limit).for_domain(Domain::Resources);
    let candidates = snapshot.catalogs.resources.len();

    let ranked = rank_and_truncate(
        snapshot.catalogs.resources,
        &ctx,
        &ResourceScorer,
        Some(limit),
    );

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&ranked)?),
        OutputFormat::Text => print!("{}", render_text(&ranked, candidates)),
    }
    Ok(())
}

fn render_text(ranked: &[ScoredItem<SearchResult>], candidates: usize) -> String {
    let mut out = String::new();
    if ranked.is_empty() {
        out.push_str("No resources to rank.\n");
        return out;
    }

    let _ = writeln!(out, "Resources ({} of {})", ranked.len(), candidates);
    for (index, scored) in ranked.iter().enumerate() {
        let title = scored.item.title.as_deref().unwrap_or("(untitled)");
        let kind = scored
            .item
            .kind
            .as_ref()
            .map(|k| format!(" [{k}]"))
            .unwrap_or_default();
        let _ = writeln!(out, "{:>3}. {title}{kind}  score {}", index + 1, scored.score);
        if let Some(reason) = &scored.reason {
            let _ = writeln!(out, "     {reason}");
        }
    }
    out
}
