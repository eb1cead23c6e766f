// Library exports for the tab bar core, its tests and the CLI
//
// Data flows one way: a `TabSource` snapshot goes into `TabBar`, the row
// planner and the reorder resolver turn gestures into `Command`s, and a
// `CommandSink` carries them out. The next snapshot closes the loop.

/// Application version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[macro_use]
pub mod debug;

pub mod cli;
pub mod commands;
pub mod config {
    //! Settings re-exports from the `tabstrip-config` sub-crate.
    pub use tabstrip_config::*;
}
pub mod drag;
pub mod layout;
pub mod reorder;
pub mod tab;
pub mod tab_bar;
pub mod traits;

pub use commands::{Command, CommandError, MoveTarget};
pub use layout::{RowPlan, plan_rows, row_drop_to_full_position};
pub use reorder::{
    BlockMove, NoOpReason, Resolution, SingleMove, resolve_group_move, resolve_single_move,
};
pub use tab::{Group, Snapshot, Tab, TabManager, sort_tabs};
pub use tab_bar::TabBar;
