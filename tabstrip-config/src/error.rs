//! Typed error variants for the tabstrip-config crate.
//!
//! `Settings::load_from` / `Settings::save_to` and the collapsed-group store
//! still return `anyhow::Result`; callers that want to match on the failure
//! mode can `downcast_ref::<ConfigError>()`.
//!
//! # Example
//!
//! ```rust,no_run
//! use tabstrip_config::ConfigError;
//!
//! fn check_load_err(e: &anyhow::Error) {
//!     if let Some(cfg_err) = e.downcast_ref::<ConfigError>() {
//!         match cfg_err {
//!             ConfigError::Io(io) => eprintln!("I/O error: {io}"),
//!             ConfigError::Parse(p) => eprintln!("YAML parse error: {p}"),
//!             ConfigError::Json(j) => eprintln!("state file error: {j}"),
//!             ConfigError::Validation(msg) => eprintln!("Validation: {msg}"),
//!         }
//!     }
//! }
//! ```

use thiserror::Error;

/// Errors that can occur when loading or saving settings and UI state.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing a settings or state file.
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file contained YAML that could not be parsed.
    #[error("YAML parse error in settings: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// The collapsed-group state file contained invalid JSON.
    #[error("JSON error in state file: {0}")]
    Json(#[from] serde_json::Error),

    /// A value failed semantic validation.
    ///
    /// The inner string names the field and the reason.
    #[error("Config validation error: {0}")]
    Validation(String),
}
