//! Per-window collapsed state of tab groups.
//!
//! The browser does not remember which groups the overlay collapsed, so the
//! state lives here: `window id -> group id -> collapsed`, persisted as JSON.
//! Entries for groups that no longer exist are pruned on every snapshot.

use crate::error::ConfigError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Collapsed flags for the groups of one window
pub type WindowCollapsedMap = BTreeMap<i32, bool>;

/// Collapsed-group state for every window
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollapsedGroups {
    windows: BTreeMap<u32, WindowCollapsedMap>,
}

impl CollapsedGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapsed flags for a window (empty when nothing was recorded)
    pub fn get_window(&self, window_id: u32) -> WindowCollapsedMap {
        self.windows.get(&window_id).cloned().unwrap_or_default()
    }

    /// Whether a group is collapsed; unknown groups are expanded.
    pub fn is_collapsed(&self, window_id: u32, group_id: i32) -> bool {
        self.windows
            .get(&window_id)
            .and_then(|map| map.get(&group_id))
            .copied()
            .unwrap_or(false)
    }

    pub fn set_collapsed(&mut self, window_id: u32, group_id: i32, collapsed: bool) {
        self.windows
            .entry(window_id)
            .or_default()
            .insert(group_id, collapsed);
        log::debug!(
            "Group {} in window {} collapsed={}",
            group_id,
            window_id,
            collapsed
        );
    }

    /// Drop entries for groups not in `live_group_ids`.
    ///
    /// Returns true if anything was removed. A window left with no entries is
    /// removed entirely.
    pub fn prune_window(&mut self, window_id: u32, live_group_ids: &[i32]) -> bool {
        let Some(map) = self.windows.get_mut(&window_id) else {
            return false;
        };
        let before = map.len();
        map.retain(|group_id, _| live_group_ids.contains(group_id));
        let changed = map.len() != before;
        if map.is_empty() {
            self.windows.remove(&window_id);
        }
        if changed {
            log::debug!(
                "Pruned {} stale group entries for window {}",
                before - self.windows.get(&window_id).map_or(0, |m| m.len()),
                window_id
            );
        }
        changed
    }

    /// Forget a closed window
    pub fn remove_window(&mut self, window_id: u32) {
        self.windows.remove(&window_id);
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Load state from a JSON file; a missing file is empty state.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .map_err(ConfigError::from)
            .with_context(|| format!("Failed to read state file {}", path.display()))?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let state: CollapsedGroups = serde_json::from_str(&contents)
            .map_err(ConfigError::from)
            .with_context(|| format!("Failed to parse state file {}", path.display()))?;
        Ok(state)
    }

    /// Save state to a JSON file (atomic write)
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::from)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(ConfigError::from)?;
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, json).map_err(ConfigError::from)?;
        fs::rename(&temp_path, path).map_err(ConfigError::from)?;
        Ok(())
    }
}
