//! `TabBar` struct definition, constructor and snapshot intake.

use crate::config::Settings;
use crate::drag::DragSession;
use crate::tab::{Snapshot, Tab, TabId, matches_search, normalize_query};
use crate::traits::{SettingsProvider, TabSource};

/// Tab bar controller state
#[derive(Debug, Clone)]
pub struct TabBar {
    /// Latest snapshot from the tab source
    pub(super) snapshot: Snapshot,
    /// Normalized display settings
    pub(super) settings: Settings,
    /// Search query, trimmed and lowercased
    pub(super) search: String,
    /// Snapshot tabs in full order
    pub(super) full_order: Vec<Tab>,
    /// Full order filtered by the search query
    pub(super) visible_order: Vec<Tab>,
    /// Keyboard focus, if any tab was focused explicitly
    pub(super) focused: Option<TabId>,
    /// Current drag, if any
    pub(super) drag: DragSession,
    /// Tab whose context menu is open
    pub(super) context_menu_tab: Option<TabId>,
}

impl TabBar {
    /// Create an empty tab bar
    pub fn new(settings: Settings) -> Self {
        Self {
            snapshot: Snapshot::default(),
            settings: settings.normalized(),
            search: String::new(),
            full_order: Vec::new(),
            visible_order: Vec::new(),
            focused: None,
            drag: DragSession::Idle,
            context_menu_tab: None,
        }
    }

    /// Create a tab bar primed from its collaborators
    pub fn from_sources(source: &impl TabSource, settings: &impl SettingsProvider) -> Self {
        let mut bar = Self::new(settings.settings());
        bar.apply_snapshot(source.snapshot());
        bar
    }

    /// Take a fresh snapshot; it replaces the previous one entirely
    pub fn apply_snapshot(&mut self, snapshot: Snapshot) {
        self.full_order = snapshot.full_order();
        self.snapshot = snapshot;

        if let Some(id) = self.focused
            && self.snapshot.tab(id).is_none()
        {
            self.focused = None;
        }
        if let Some(id) = self.context_menu_tab
            && self.snapshot.tab(id).is_none()
        {
            log::debug!("Context menu target {} closed; hiding menu", id);
            self.context_menu_tab = None;
        }

        self.refilter();
        log::trace!(
            "Snapshot applied: {} tabs, {} groups",
            self.full_order.len(),
            self.snapshot.groups.len()
        );
    }

    pub fn apply_settings(&mut self, settings: Settings) {
        self.settings = settings.normalized();
    }

    /// Set the search box text
    pub fn set_search(&mut self, raw: &str) {
        let query = normalize_query(raw);
        if query != self.search {
            self.search = query;
            self.refilter();
        }
    }

    fn refilter(&mut self) {
        self.visible_order = self
            .full_order
            .iter()
            .filter(|t| matches_search(t, &self.search))
            .cloned()
            .collect();
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    /// Tabs in full order
    pub fn full_order(&self) -> &[Tab] {
        &self.full_order
    }

    /// Tabs matching the search, in full order
    pub fn visible_order(&self) -> &[Tab] {
        &self.visible_order
    }
}

impl Default for TabBar {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
