use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for human-facing commands.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text listing.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Command-line interface for the `pathwise` application.
#[derive(Debug, Parser)]
#[command(
    name = "pathwise",
    version,
    about = "Personalized ranking of learning catalogs"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available `pathwise` commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Ranks every domain of a snapshot and prints the explore page as JSON.
    Explore {
        /// Snapshot file with profile, preferences, activity and catalogs.
        #[arg(long, short, value_name = "FILE")]
        input: PathBuf,
        /// Results per domain (overrides `PATHWISE_EXPLORE_LIMIT` and the config file).
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
        /// Print single-line JSON.
        #[arg(long, default_value_t = false)]
        compact: bool,
    },
    /// Ranks only the snapshot's resources, with reasons.
    Search {
        /// Snapshot file with profile, preferences, activity and catalogs.
        #[arg(long, short, value_name = "FILE")]
        input: PathBuf,
        /// Maximum results (overrides `PATHWISE_EXPLORE_LIMIT` and the config file).
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
        /// Output format: text or json.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Prints the user context derived from a snapshot.
    Context {
        /// Snapshot file with profile, preferences and activity.
        #[arg(long, short, value_name = "FILE")]
        input: PathBuf,
    },
    /// Prints the skill checklist for a category or domain label.
    Skills {
        /// Category or domain label, matched loosely.
        label: Option<String>,
        /// Skills you already have (comma-separated); prints a checklist.
        #[arg(long, value_delimiter = ',', num_args = 0..)]
        have: Option<Vec<String>>,
        /// Output format: text or json.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_explore() {
        let cli = Cli::parse_from(["pathwise", "explore", "--input", "s.json", "--limit", "3"]);
        match cli.command {
            Commands::Explore {
                input,
                limit,
                compact,
            } => {
                assert_eq!(input, PathBuf::from("s.json"));
                assert_eq!(limit, Some(3));
                assert!(!compact);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_skills_have_list() {
        let cli = Cli::parse_from(["pathwise", "skills", "DevOps", "--have", "git,docker"]);
        match cli.command {
            Commands::Skills { label, have, format } => {
                assert_eq!(label.as_deref(), Some("DevOps"));
                assert_eq!(have, Some(vec!["git".to_string(), "docker".to_string()]));
                assert_eq!(format, OutputFormat::Text);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_skills_without_have() {
        let cli = Cli::parse_from(["pathwise", "skills"]);
        match cli.command {
            Commands::Skills { label, have, .. } => {
                assert!(label.is_none());
                assert!(have.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_search_requires_input() {
        assert!(Cli::try_parse_from(["pathwise", "search"]).is_err());
    }
}
