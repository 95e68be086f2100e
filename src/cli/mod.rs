//! CLI argument parsing for notetree
//!
//! Global flags: --dir, --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod commands;
pub mod parse;
pub mod paths;
pub mod tags;

use clap::Parser;
use std::path::PathBuf;

pub use commands::Commands;
pub use notetree_core::format::OutputFormat;
use parse::parse_format;

/// Notetree - hierarchical notes stored as plain files
#[derive(Parser, Debug)]
#[command(name = "notetree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Storage root directory (defaults to the current directory)
    #[arg(long, global = true, env = "NOTETREE_DIR")]
    pub dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add_with_parent() {
        let cli = Cli::try_parse_from([
            "notetree", "add", "Tasks", "-c", "todo", "--tag", "work", "--parent", "project",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Add(args)) => {
                assert_eq!(args.title, "Tasks");
                assert_eq!(args.content.as_deref(), Some("todo"));
                assert_eq!(args.tag, vec!["work"]);
                assert_eq!(args.parent.as_deref(), Some("project"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_format_flag_is_global() {
        let cli = Cli::try_parse_from(["notetree", "list", "--format", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["notetree", "--format", "xml", "list"]).is_err());
    }
}
