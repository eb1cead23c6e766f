//! Command-line interface for tabstrip.
//!
//! Runs the planner and the reorder resolver against a snapshot file (or a
//! generated demo window) and prints what the tab bar would show or send.
//! Subcommand bodies live in the [`run`] submodule.

mod run;

pub use run::run;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// tabstrip - multi-row tab bar planner and reorder resolver
#[derive(Debug, Parser)]
#[command(name = "tabstrip")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Set debug log level (overrides RUST_LOG and DEBUG_LEVEL)
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevelArg>,
}

/// Log level argument for CLI
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevelArg::Off => log::LevelFilter::Off,
            LogLevelArg::Error => log::LevelFilter::Error,
            LogLevelArg::Warn => log::LevelFilter::Warn,
            LogLevelArg::Info => log::LevelFilter::Info,
            LogLevelArg::Debug => log::LevelFilter::Debug,
            LogLevelArg::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Where the tabs come from
#[derive(Debug, Clone, Args)]
#[group(multiple = false)]
pub struct SourceArgs {
    /// Snapshot JSON file (`{"tabs": [...], "groups": [...]}`)
    #[arg(long, value_name = "FILE")]
    pub snapshot: Option<PathBuf>,

    /// Generate a demo window with this many tabs
    #[arg(long, value_name = "N")]
    pub tabs: Option<u32>,
}

/// Display parameters
#[derive(Debug, Clone, Args)]
pub struct LayoutArgs {
    /// Settings YAML file (defaults when omitted)
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Override the row count
    #[arg(long, value_name = "N")]
    pub rows: Option<usize>,

    /// Override the tabs-per-row capacity
    #[arg(long, value_name = "N")]
    pub per_row: Option<usize>,
}

/// Drop target: a full-order position or the end of a row
#[derive(Debug, Clone, Args)]
#[group(required = true, multiple = false)]
pub struct TargetArgs {
    /// Insert before the tab at this full-order position
    #[arg(long, value_name = "POS")]
    pub to: Option<usize>,

    /// Append to the end of this row
    #[arg(long, value_name = "ROW")]
    pub row: Option<usize>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the full and visible row plans
    Plan {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Search text filtering the visible rows
        #[arg(long, value_name = "TEXT")]
        search: Option<String>,

        /// Collapsed-groups state file (JSON)
        #[arg(long, value_name = "FILE")]
        state: Option<PathBuf>,
    },

    /// Resolve dragging one tab
    Move {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Tab being dragged
        #[arg(long, value_name = "ID")]
        tab: u32,

        #[command(flatten)]
        target: TargetArgs,

        /// Apply the command to the window and print the new order
        #[arg(long)]
        apply: bool,
    },

    /// Resolve dragging a whole group
    MoveGroup {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Group being dragged
        #[arg(long, value_name = "ID")]
        group: i32,

        #[command(flatten)]
        target: TargetArgs,

        /// Apply the command to the window and print the new order
        #[arg(long)]
        apply: bool,
    },
}
