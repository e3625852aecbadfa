//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Table,
    /// JSON output
    Json,
}

/// CLI arguments for approval-quorum
#[derive(Parser, Debug)]
#[command(name = "approval-quorum")]
#[command(author, version, about = "Approval decision engine - votes in, decisions out")]
#[command(long_about = r#"
approval-quorum decides whether a document is Approved, Rejected or still
Pending from its approvers' votes and the active approval policy.

Policies:
  majority         more than half of the approvers approve
  unanimous        every approver approves; one rejection rejects
  min_votes N      at least N approvals
  min_percentage P at least P% of the approvers approve

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./approval.toml       Project-level config
3. ~/.config/approval-quorum/config.toml   Global config

Example:
  approval-quorum evaluate --mode majority --approve 3 --reject 1 --eligible 5
  approval-quorum evaluate --mode min-percentage --threshold 60 --approve 6 --eligible 10
  approval-quorum simulate review.toml --output json
  approval-quorum config --show-sources
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate vote counts against a policy, without any stored state
    Evaluate {
        /// Approval mode (majority, unanimous, min_votes, min_percentage)
        #[arg(short, long)]
        mode: String,

        /// Approval count (min_votes) or percentage (min_percentage)
        #[arg(short, long, default_value_t = 0)]
        threshold: u32,

        /// Number of approve votes
        #[arg(long, default_value_t = 0)]
        approve: usize,

        /// Number of reject votes
        #[arg(long, default_value_t = 0)]
        reject: usize,

        /// Number of users holding the approver role
        #[arg(long)]
        eligible: usize,
    },

    /// Replay a scripted vote sequence against one document
    Simulate {
        /// Script file (TOML)
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,
    },

    /// Show the effective approval configuration and its issues
    Config {
        /// Also list the configuration file locations
        #[arg(long)]
        show_sources: bool,
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
    fn test_parse_evaluate() {
        let cli = Cli::try_parse_from([
            "approval-quorum",
            "-vv",
            "evaluate",
            "--mode",
            "min_votes",
            "--threshold",
            "3",
            "--approve",
            "2",
            "--eligible",
            "5",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.output, OutputFormat::Table);
        match cli.command {
            Command::Evaluate {
                mode,
                threshold,
                approve,
                reject,
                eligible,
            } => {
                assert_eq!(mode, "min_votes");
                assert_eq!((threshold, approve, reject, eligible), (3, 2, 0, 5));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["approval-quorum", "simulate", "s.toml", "--output", "json"])
                .unwrap();
        assert_eq!(cli.output, OutputFormat::Json);
        assert!(matches!(cli.command, Command::Simulate { .. }));
    }

    #[test]
    fn test_eligible_is_required() {
        assert!(Cli::try_parse_from(["approval-quorum", "evaluate", "--mode", "majority"]).is_err());
    }
}
