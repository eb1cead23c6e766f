//! Contracts between the tab bar core and the browser-facing shell.
//!
//! The core reads snapshots from a [`TabSource`], reads display
//! parameters from a [`SettingsProvider`], and emits [`Command`]s into a
//! [`CommandSink`]. [`TabManager`](crate::tab::TabManager) implements the
//! first two sides in memory for tests and the CLI.

use crate::commands::{Command, CommandError};
use crate::config::Settings;
use crate::tab::Snapshot;

/// Supplies the current tabs and groups of a window.
pub trait TabSource {
    /// A fresh snapshot; `Tab::index` is dense and zero-based.
    fn snapshot(&self) -> Snapshot;
}

/// Accepts commands for the browser.
///
/// Fire-and-forget from the core's point of view: a returned error is
/// logged, never retried, and the next snapshot is authoritative.
pub trait CommandSink {
    fn send(&mut self, command: Command) -> Result<(), CommandError>;
}

/// Supplies display parameters.
pub trait SettingsProvider {
    /// Current settings, already normalized.
    fn settings(&self) -> Settings;
}

impl SettingsProvider for Settings {
    fn settings(&self) -> Settings {
        self.clone().normalized()
    }
}

/// Collects validated commands; used by the CLI to print what would be sent.
impl CommandSink for Vec<Command> {
    fn send(&mut self, command: Command) -> Result<(), CommandError> {
        self.push(command.validate()?);
        Ok(())
    }
}
