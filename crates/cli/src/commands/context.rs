use crate::config::Config;
use crate::snapshot::load_snapshot;
use anyhow::Result;
use std::path::Path;

/// Handle the `context` command.
pub(crate) fn handle_context_command(input: &Path, config: &Config) -> Result<()> {
    let snapshot = load_snapshot(input)?;
    let ctx = snapshot.user_context(&config.activity);
    println!("{}", serde_json::to_string_pretty(&ctx)?);
    Ok(())
}
