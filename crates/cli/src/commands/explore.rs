use crate::config::Config;
use crate::snapshot::load_snapshot;
use anyhow::Result;
use pathwise_engine::{build_explore_page, ExplorePage};
use std::path::Path;

/// Handle the `explore` command.
pub(crate) fn handle_explore_command(
    input: &Path,
    limit: Option<usize>,
    compact: bool,
    config: &Config,
) -> Result<()> {
    let snapshot = load_snapshot(input)?;
    let ctx = snapshot.user_context(&config.activity);
    let limits = config.explore.resolve(limit);

    let page = build_explore_page(&ctx, snapshot.catalogs, &limits, &config.weights);
    println!("{}", render_page(&page, compact)?);
    Ok(())
}

fn render_page(page: &ExplorePage, compact: bool) -> Result<String> {
    Ok(if compact {
        serde_json::to_string(page)?
    } else {
        serde_json::to_string_pretty(page)?
    })
}
