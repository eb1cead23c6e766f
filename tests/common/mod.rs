//! Shared integration test helpers for tabstrip.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{plain_tabs, window_with};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a
//! subset of helpers is used per file.

#![allow(dead_code)]

use tabstrip::config::Settings;
use tabstrip::tab::{Group, Snapshot, Tab, TabId, TabManager};
use tabstrip::tab_bar::TabBar;

/// `count` unpinned, ungrouped tabs with ids `1..=count` at indices `0..count`
pub fn plain_tabs(count: usize) -> Vec<Tab> {
    (0..count).map(|i| Tab::new(i as TabId + 1, i)).collect()
}

/// `pinned` pinned tabs followed by `unpinned` unpinned tabs, ids from 1
pub fn mixed_tabs(pinned: usize, unpinned: usize) -> Vec<Tab> {
    (0..pinned + unpinned)
        .map(|i| {
            let tab = Tab::new(i as TabId + 1, i);
            if i < pinned { tab.pinned() } else { tab }
        })
        .collect()
}

/// An in-memory window holding `tabs` and `groups`
pub fn window_with(tabs: Vec<Tab>, groups: Vec<Group>) -> TabManager {
    TabManager::from_snapshot(Snapshot::new(1, tabs, groups))
}

/// A tab bar over `tabs` with the given row layout
pub fn bar_with(tabs: Vec<Tab>, groups: Vec<Group>, rows: usize, per_row: usize) -> TabBar {
    let mut bar = TabBar::new(Settings::default().with_rows(rows, per_row));
    bar.apply_snapshot(Snapshot::new(1, tabs, groups));
    bar
}

/// Ids in the window's current order
pub fn order(window: &TabManager) -> Vec<TabId> {
    window.tab_ids()
}

/// Whether every pinned tab comes before every unpinned tab
pub fn partition_holds(tabs: &[Tab]) -> bool {
    let first_unpinned = tabs.iter().position(|t| !t.pinned).unwrap_or(tabs.len());
    tabs[first_unpinned..].iter().all(|t| !t.pinned)
}
