//! Settings for the tabstrip tab bar overlay.
//!
//! - [`Settings`]: display parameters with defaults and range clamping
//! - YAML persistence at the XDG settings path
//! - [`CollapsedGroups`]: per-window collapsed state of tab groups
//! - [`SettingsWatcher`]: hot reload of the settings file

pub mod collapsed;
pub mod defaults;
mod error;
mod persistence;
pub mod settings;
mod types;
#[cfg(feature = "watcher")]
pub mod watcher;

pub use collapsed::{CollapsedGroups, WindowCollapsedMap};
pub use error::ConfigError;
pub use settings::{Settings, parse_hex_color};
pub use types::{BarPosition, LayoutMode, ThemeMode, WhenToShow};
#[cfg(feature = "watcher")]
pub use watcher::{SettingsReloadEvent, SettingsWatcher};
