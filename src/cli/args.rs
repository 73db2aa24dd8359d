//! CLI argument parsing and configuration.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};

use crate::error::GridError;
use crate::export::{ExportFormat, DEFAULT_TITLE};
use crate::models::Level;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Parser)]
#[command(
    name = "ccf-grid",
    about = "Stakeholder by framework-level grid of similar work, with tooltips and detail views",
    version,
    propagate_version = true
)]
pub struct Cli {
    /// Append logs to this file (the terminal viewer logs nowhere else)
    #[arg(long, global = true, env = "CCF_GRID_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Log at info level instead of warn
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Browse the grid interactively in the terminal
    View {
        /// Dataset file (JSON array or `const data = [...]` script)
        #[arg(env = "CCF_GRID_DATASET")]
        dataset: PathBuf,

        /// Don't reload when the dataset changes on disk
        #[arg(long)]
        no_watch: bool,
    },

    /// Write the rendered grid as HTML or SVG
    Export {
        /// Dataset file (JSON array or `const data = [...]` script)
        #[arg(env = "CCF_GRID_DATASET")]
        dataset: PathBuf,

        /// Output file (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = ExportFormat::Html)]
        format: ExportFormat,

        /// Include the detail view of one cell, e.g. "Patients::Cognitive Companions"
        #[arg(long)]
        open: Option<CellSelector>,

        /// Document title
        #[arg(long, default_value = DEFAULT_TITLE)]
        title: String,
    },

    /// Print the flattened cells as JSON
    Cells {
        #[arg(env = "CCF_GRID_DATASET")]
        dataset: PathBuf,
    },
}

/// Configuration of the terminal viewer
#[derive(Debug, Clone)]
pub struct ViewConfig {
    pub dataset_path: PathBuf,
    pub watch: bool,
}

/// A `STAKEHOLDER::LEVEL` reference to one cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellSelector {
    pub stakeholder: String,
    pub level: Level,
}

impl FromStr for CellSelector {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GridError::InvalidSelector(s.to_string());
        let (stakeholder, level) = s.rsplit_once("::").ok_or_else(invalid)?;
        let stakeholder = stakeholder.trim();
        if stakeholder.is_empty() {
            return Err(invalid());
        }
        let level = Level::from_label(level.trim()).ok_or_else(invalid)?;
        Ok(Self {
            stakeholder: stakeholder.to_string(),
            level,
        })
    }
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
    fn test_parse_export() {
        let cli = Cli::try_parse_from([
            "ccf-grid",
            "export",
            "data.json",
            "--format",
            "svg",
            "--open",
            "Patients::Cognitive Companions",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Export {
                dataset,
                output,
                format,
                open,
                title,
            } => {
                assert_eq!(dataset, PathBuf::from("data.json"));
                assert!(output.is_none());
                assert_eq!(format, ExportFormat::Svg);
                assert_eq!(
                    open,
                    Some(CellSelector {
                        stakeholder: "Patients".to_string(),
                        level: Level::Companions,
                    })
                );
                assert_eq!(title, DEFAULT_TITLE);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_view_flags() {
        let cli = Cli::try_parse_from(["ccf-grid", "view", "d.json", "--no-watch"]).unwrap();
        assert!(matches!(cli.command, Commands::View { no_watch: true, .. }));
    }

    #[test]
    fn test_selector_parsing() {
        let selector: CellSelector = "Health Systems :: Cognitive Collectives".parse().unwrap();
        assert_eq!(selector.stakeholder, "Health Systems");
        assert_eq!(selector.level, Level::Collectives);

        for bad in ["Patients", "::Cognitive Companions", "Patients::Cognitive Crowds"] {
            let err = bad.parse::<CellSelector>().unwrap_err();
            assert!(matches!(err, GridError::InvalidSelector(_)), "{bad}");
        }
    }
}
