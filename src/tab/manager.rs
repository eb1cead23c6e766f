//! In-memory window that plays the browser's side of the contract.
//!
//! Keeps tabs in full order and re-derives dense indices after every
//! change, so any snapshot it hands out is one the browser could have
//! produced. Used by the CLI and by the tests that check resolved moves
//! against a live order.

use super::{GROUP_NONE, Group, GroupColor, GroupId, Snapshot, Tab, TabId, WindowId, sort_tabs};
use crate::commands::{Command, CommandError, MoveTarget};
use crate::config::CollapsedGroups;
use crate::traits::{CommandSink, TabSource};
use std::collections::HashSet;

const GROUP_COLOR_CYCLE: [GroupColor; 8] = [
    GroupColor::Blue,
    GroupColor::Red,
    GroupColor::Yellow,
    GroupColor::Green,
    GroupColor::Pink,
    GroupColor::Purple,
    GroupColor::Cyan,
    GroupColor::Orange,
];

/// Tabs and groups of a single window
#[derive(Debug, Clone)]
pub struct TabManager {
    window_id: WindowId,
    /// All tabs, pinned first, in order
    tabs: Vec<Tab>,
    groups: Vec<Group>,
    window_state: String,
    /// Overlay collapse state, kept across snapshots
    collapsed: CollapsedGroups,
    /// Counter for generating unique tab IDs
    next_tab_id: TabId,
    next_group_id: GroupId,
}

impl TabManager {
    /// Create an empty window
    pub fn new(window_id: WindowId) -> Self {
        Self {
            window_id,
            tabs: Vec::new(),
            groups: Vec::new(),
            window_state: "normal".to_string(),
            collapsed: CollapsedGroups::new(),
            next_tab_id: 1,
            next_group_id: 1,
        }
    }

    /// Adopt a snapshot, normalizing it into full order with dense indices
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let next_tab_id = snapshot.tabs.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let next_group_id = snapshot
            .groups
            .iter()
            .map(|g| g.id)
            .chain(snapshot.tabs.iter().map(|t| t.group_id))
            .max()
            .unwrap_or(0)
            .max(0)
            + 1;

        let mut collapsed = CollapsedGroups::new();
        for group in snapshot.groups.iter().filter(|g| g.collapsed) {
            collapsed.set_collapsed(snapshot.window_id, group.id, true);
        }

        let mut mgr = Self {
            window_id: snapshot.window_id,
            tabs: sort_tabs(&snapshot.tabs),
            groups: snapshot.groups,
            window_state: snapshot.window_state,
            collapsed,
            next_tab_id,
            next_group_id,
        };
        mgr.prune_groups();
        mgr.reindex();
        mgr
    }

    /// Replace the collapse state with a persisted store.
    ///
    /// Entries for groups that no longer exist in this window are dropped.
    pub fn with_collapsed_state(mut self, store: CollapsedGroups) -> Self {
        self.collapsed = store;
        for group in &mut self.groups {
            group.collapsed = self.collapsed.is_collapsed(self.window_id, group.id);
        }
        self.prune_groups();
        self
    }

    /// Collapse state of every window this manager has seen
    pub fn collapsed_state(&self) -> &CollapsedGroups {
        &self.collapsed
    }

    /// Append a tab with the given title and make it active
    pub fn push_tab(&mut self, title: impl Into<String>, url: impl Into<String>) -> TabId {
        let id = self.next_tab_id;
        self.next_tab_id += 1;
        let tab = Tab::new(id, self.tabs.len())
            .with_title(title)
            .with_url(url);
        self.tabs.push(tab);
        self.reindex();
        self.set_active(id);
        id
    }

    /// Create an empty group; it disappears again if no tab joins it
    pub fn create_group(&mut self, title: impl Into<String>) -> GroupId {
        let id = self.next_group_id;
        self.next_group_id += 1;
        let mut group = Group::new(id, title);
        group.color = GROUP_COLOR_CYCLE[(id as usize - 1) % GROUP_COLOR_CYCLE.len()];
        self.groups.push(group);
        id
    }

    /// Close a tab by ID.
    /// Returns true if this was the last tab (window should close)
    pub fn close_tab(&mut self, id: TabId) -> Result<bool, CommandError> {
        let idx = self.position(id)?;
        log::info!("Closing tab {} (index {})", id, idx);

        let removed = self.tabs.remove(idx);
        if removed.active && !self.tabs.is_empty() {
            // Prefer the tab at the same index (or previous if at end)
            let new_idx = idx.min(self.tabs.len() - 1);
            self.tabs[new_idx].active = true;
        }

        self.prune_groups();
        self.reindex();
        Ok(self.tabs.is_empty())
    }

    /// Make a tab the only active one
    pub fn activate(&mut self, id: TabId) -> Result<(), CommandError> {
        self.position(id)?;
        self.set_active(id);
        log::debug!("Switched to tab {}", id);
        Ok(())
    }

    /// Move a tab so it ends up at `target`, kept inside its partition.
    /// Returns true if the order changed
    pub fn move_tab_to_index(
        &mut self,
        id: TabId,
        target: MoveTarget,
    ) -> Result<bool, CommandError> {
        self.move_block(&[id], target)
    }

    /// Move tabs as one contiguous block whose first tab lands at `target`.
    ///
    /// The block takes the full-order sequence of its members and the
    /// pinned state of the first of them; members in the other partition
    /// stay where they are. Returns true if the order changed
    pub fn move_block(&mut self, ids: &[TabId], target: MoveTarget) -> Result<bool, CommandError> {
        for &id in ids {
            self.position(id)?;
        }
        let wanted: HashSet<TabId> = ids.iter().copied().collect();
        let Some(pinned) = self
            .tabs
            .iter()
            .find(|t| wanted.contains(&t.id))
            .map(|t| t.pinned)
        else {
            return Err(CommandError::EmptyBlock);
        };

        let before = self.tab_ids();
        let (block, mut remaining): (Vec<Tab>, Vec<Tab>) = std::mem::take(&mut self.tabs)
            .into_iter()
            .partition(|t| wanted.contains(&t.id) && t.pinned == pinned);

        let pinned_remaining = remaining.iter().filter(|t| t.pinned).count();
        let (lo, hi) = if pinned {
            (0, pinned_remaining)
        } else {
            (pinned_remaining, remaining.len())
        };
        let slot = match target {
            MoveTarget::Index(i) => i.clamp(lo, hi),
            MoveTarget::End => hi,
        };

        let tail = remaining.split_off(slot);
        remaining.extend(block);
        remaining.extend(tail);
        self.tabs = remaining;
        self.reindex();

        let moved = self.tab_ids() != before;
        if moved {
            log::debug!("Moved {:?} to {} (slot {})", ids, target, slot);
        }
        Ok(moved)
    }

    /// Pin or unpin a tab.
    ///
    /// Pinning ungroups the tab and puts it at the end of the pinned run;
    /// unpinning puts it at the start of the unpinned run.
    pub fn set_pinned(&mut self, id: TabId, pinned: bool) -> Result<(), CommandError> {
        let idx = self.position(id)?;
        if self.tabs[idx].pinned == pinned {
            return Ok(());
        }

        let mut tab = self.tabs.remove(idx);
        tab.pinned = pinned;
        if pinned {
            tab.group_id = GROUP_NONE;
        }
        let boundary = self.pinned_count();
        self.tabs.insert(boundary, tab);

        self.prune_groups();
        self.reindex();
        log::debug!("Tab {} pinned={}", id, pinned);
        Ok(())
    }

    /// Add a tab to a group, or to a new group when `group_id` is `None`.
    ///
    /// A pinned tab is unpinned first. Joining an existing group places
    /// the tab right after that group's last member. Returns the group id.
    pub fn group_tab(
        &mut self,
        id: TabId,
        group_id: Option<GroupId>,
    ) -> Result<GroupId, CommandError> {
        self.position(id)?;
        if let Some(g) = group_id
            && !self.groups.iter().any(|group| group.id == g)
        {
            return Err(CommandError::NoSuchGroup(g));
        }
        self.set_pinned(id, false)?;

        let group_id = match group_id {
            Some(g) => g,
            None => self.create_group(""),
        };

        let idx = self.position(id)?;
        let mut tab = self.tabs.remove(idx);
        tab.group_id = group_id;
        let insert_at = self
            .tabs
            .iter()
            .rposition(|t| t.group_id == group_id)
            .map(|last| last + 1)
            .unwrap_or(idx);
        self.tabs.insert(insert_at, tab);

        self.prune_groups();
        self.reindex();
        log::debug!("Tab {} joined group {}", id, group_id);
        Ok(group_id)
    }

    /// Remove a tab from its group, placing it just after the group so the
    /// remaining members stay contiguous
    pub fn ungroup_tab(&mut self, id: TabId) -> Result<(), CommandError> {
        let idx = self.position(id)?;
        let group_id = self.tabs[idx].group_id;
        if group_id == GROUP_NONE {
            return Ok(());
        }

        let mut tab = self.tabs.remove(idx);
        tab.group_id = GROUP_NONE;
        let insert_at = self
            .tabs
            .iter()
            .rposition(|t| t.group_id == group_id)
            .map(|last| (last + 1).max(idx))
            .unwrap_or(idx);
        self.tabs.insert(insert_at, tab);

        self.prune_groups();
        self.reindex();
        log::debug!("Tab {} left group {}", id, group_id);
        Ok(())
    }

    pub fn set_group_collapsed(
        &mut self,
        group_id: GroupId,
        collapsed: bool,
    ) -> Result<(), CommandError> {
        let group = self
            .groups
            .iter_mut()
            .find(|g| g.id == group_id)
            .ok_or(CommandError::NoSuchGroup(group_id))?;
        group.collapsed = collapsed;
        self.collapsed
            .set_collapsed(self.window_id, group_id, collapsed);
        Ok(())
    }

    /// Validate and carry out a command
    pub fn apply(&mut self, command: Command) -> Result<(), CommandError> {
        let command = command.validate()?;
        log::debug!("Applying command: {}", command);
        match command {
            Command::Activate(id) => self.activate(id),
            Command::Close(id) => self.close_tab(id).map(|_| ()),
            Command::NewTab => {
                self.push_tab("New Tab", "");
                Ok(())
            }
            Command::SetPinned { tab_id, pinned } => self.set_pinned(tab_id, pinned),
            Command::Move { tab_id, target } => self.move_tab_to_index(tab_id, target).map(|_| ()),
            Command::MoveBlock { tab_ids, target } => self.move_block(&tab_ids, target).map(|_| ()),
            Command::Group { tab_id, group_id } => self.group_tab(tab_id, group_id).map(|_| ()),
            Command::Ungroup(id) => self.ungroup_tab(id),
            Command::SetGroupCollapsed {
                group_id,
                collapsed,
            } => self.set_group_collapsed(group_id, collapsed),
        }
    }

    pub fn set_window_state(&mut self, state: impl Into<String>) {
        self.window_state = state.into();
    }

    pub fn window_id(&self) -> WindowId {
        self.window_id
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn active_tab_id(&self) -> Option<TabId> {
        self.tabs.iter().find(|t| t.active).map(|t| t.id)
    }

    /// Tabs in full order
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn get_tab(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn tab_ids(&self) -> Vec<TabId> {
        self.tabs.iter().map(|t| t.id).collect()
    }

    fn position(&self, id: TabId) -> Result<usize, CommandError> {
        self.tabs
            .iter()
            .position(|t| t.id == id)
            .ok_or(CommandError::NoSuchTab(id))
    }

    fn pinned_count(&self) -> usize {
        self.tabs.iter().filter(|t| t.pinned).count()
    }

    fn set_active(&mut self, id: TabId) {
        for tab in &mut self.tabs {
            tab.active = tab.id == id;
        }
    }

    /// Drop groups that no longer have members, and their collapse state
    fn prune_groups(&mut self) {
        let tabs = &self.tabs;
        self.groups
            .retain(|g| tabs.iter().any(|t| t.group_id == g.id));
        let live: Vec<GroupId> = self.groups.iter().map(|g| g.id).collect();
        self.collapsed.prune_window(self.window_id, &live);
    }

    fn reindex(&mut self) {
        for (idx, tab) in self.tabs.iter_mut().enumerate() {
            tab.index = idx;
            tab.window_id = self.window_id;
        }
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new(1)
    }
}

impl TabSource for TabManager {
    fn snapshot(&self) -> Snapshot {
        Snapshot {
            window_id: self.window_id,
            tabs: self.tabs.clone(),
            groups: self.groups.clone(),
            window_state: self.window_state.clone(),
        }
    }
}

impl CommandSink for TabManager {
    fn send(&mut self, command: Command) -> Result<(), CommandError> {
        self.apply(command)
    }
}
