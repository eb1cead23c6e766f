//! Headless tab bar controller.
//!
//! Holds the latest snapshot and settings, computes the layout a renderer
//! draws, and turns clicks, drags and keys into commands for a
//! [`CommandSink`]. Nothing here draws; a renderer reads [`BarLayout`] and
//! [`TabCell`]s and reports pointer events back.
//!
//! ## Module layout
//!
//! - [`state`]: `TabBar` struct definition and snapshot intake.
//! - [`drag_drop`]: drag start and the three drop kinds (tab, row, group).
//! - [`context_menu`]: right-click menu items and actions.
//! - [`navigation`]: keyboard focus over the visible order.
//! - [`settings_reload`]: applying edits of the watched settings file.
//! - [`tab_cell`]: per-tab display values (label, widths, colors).

mod context_menu;
mod drag_drop;
mod navigation;
mod settings_reload;
mod state;
mod tab_cell;

pub use context_menu::ContextAction;
pub use state::TabBar;
pub use tab_cell::TabCell;

use crate::commands::Command;
use crate::config::BarPosition;
use crate::layout::{RowPlan, plan_rows};
use crate::tab::{GROUP_NONE, GroupId, GroupRun, Tab, TabId, group_runs};
use crate::traits::CommandSink;

/// Everything a renderer needs for one layout pass
#[derive(Debug, Clone)]
pub struct BarLayout<'a> {
    /// Rows over the full order; drop targets are computed against this
    pub full: RowPlan<'a, Tab>,
    /// Rows over the search-filtered order; this is what is drawn
    pub visible: RowPlan<'a, Tab>,
    /// Group runs of each visible row
    pub row_runs: Vec<Vec<GroupRun<'a>>>,
    /// Group headers are draggable only while no search is active
    pub group_drag_enabled: bool,
    /// Single-row mode shows full group headers; multi-row shows chips
    pub use_full_group_header: bool,
    pub position: BarPosition,
    /// No tab matches the search
    pub empty: bool,
}

impl TabBar {
    /// Whether the bar should be shown for the current window state
    pub fn is_visible(&self) -> bool {
        self.settings.enabled
            && self
                .settings
                .when_to_show
                .allows(&self.snapshot.window_state)
    }

    /// Whether an auto-hidden bar should reveal itself for a pointer at
    /// `pointer_y` in a viewport `viewport_height` tall
    pub fn pointer_reveals(&self, pointer_y: f32, viewport_height: f32) -> bool {
        if !self.settings.auto_hide {
            return true;
        }
        let edge = self.settings.activation_edge_px as f32;
        match self.settings.position {
            BarPosition::Top => pointer_y <= edge,
            BarPosition::Bottom => pointer_y >= viewport_height - edge,
        }
    }

    /// Plan the rows for the current snapshot, settings and search.
    pub fn layout(&self) -> BarLayout<'_> {
        let rows = self.settings.row_count;
        let capacity = self.settings.tabs_per_row;
        let full = plan_rows(&self.full_order, rows, capacity);
        let visible = plan_rows(&self.visible_order, rows, capacity);

        let show_groups = self.settings.show_groups;
        let mut row_runs: Vec<Vec<GroupRun<'_>>> = visible
            .rows
            .iter()
            .map(|row| group_runs(row, &self.snapshot.groups, show_groups))
            .collect();
        if self.settings.collapse_groups {
            for run in row_runs.iter_mut().flatten() {
                if !run.is_ungrouped() {
                    run.collapsed = true;
                }
            }
        }

        BarLayout {
            empty: self.visible_order.is_empty(),
            full,
            visible,
            row_runs,
            group_drag_enabled: self.search.is_empty(),
            use_full_group_header: show_groups && rows == 1,
            position: self.settings.position,
        }
    }

    /// Send a command, logging a rejection; returns whether it was accepted.
    ///
    /// A rejected command is not retried: the next snapshot is the truth.
    pub(super) fn send(&self, sink: &mut impl CommandSink, command: Command) -> Option<Command> {
        log::debug!("Issuing command: {}", command);
        match sink.send(command.clone()) {
            Ok(()) => Some(command),
            Err(e) => {
                log::warn!("Command '{}' rejected: {}", command, e);
                None
            }
        }
    }

    pub fn activate(&mut self, tab_id: TabId, sink: &mut impl CommandSink) -> Option<Command> {
        self.focused = Some(tab_id);
        self.send(sink, Command::Activate(tab_id))
    }

    pub fn close(&mut self, tab_id: TabId, sink: &mut impl CommandSink) -> Option<Command> {
        self.send(sink, Command::Close(tab_id))
    }

    /// Close every unpinned tab except `tab_id`
    pub fn close_others(&mut self, tab_id: TabId, sink: &mut impl CommandSink) -> Vec<Command> {
        let victims: Vec<TabId> = self
            .full_order
            .iter()
            .filter(|t| t.id != tab_id && !t.pinned)
            .map(|t| t.id)
            .collect();
        victims
            .into_iter()
            .filter_map(|id| self.send(sink, Command::Close(id)))
            .collect()
    }

    pub fn set_pinned(
        &mut self,
        tab_id: TabId,
        pinned: bool,
        sink: &mut impl CommandSink,
    ) -> Option<Command> {
        self.send(sink, Command::SetPinned { tab_id, pinned })
    }

    /// Put a tab into a new group
    pub fn group_tab(&mut self, tab_id: TabId, sink: &mut impl CommandSink) -> Option<Command> {
        self.send(
            sink,
            Command::Group {
                tab_id,
                group_id: None,
            },
        )
    }

    pub fn ungroup_tab(&mut self, tab_id: TabId, sink: &mut impl CommandSink) -> Option<Command> {
        self.send(sink, Command::Ungroup(tab_id))
    }

    pub fn new_tab(&mut self, sink: &mut impl CommandSink) -> Option<Command> {
        self.send(sink, Command::NewTab)
    }

    /// Flip a group's collapsed state.
    ///
    /// The local snapshot changes at once so the next layout reflects it;
    /// it is reverted if the sink rejects the command.
    pub fn toggle_group_collapsed(
        &mut self,
        group_id: GroupId,
        sink: &mut impl CommandSink,
    ) -> Option<Command> {
        if group_id == GROUP_NONE {
            return None;
        }
        let current = self.snapshot.group(group_id)?.collapsed;
        self.set_local_collapsed(group_id, !current);

        let sent = self.send(
            sink,
            Command::SetGroupCollapsed {
                group_id,
                collapsed: !current,
            },
        );
        if sent.is_none() {
            log::debug!("Reverting collapse of group {}", group_id);
            self.set_local_collapsed(group_id, current);
        }
        sent
    }

    fn set_local_collapsed(&mut self, group_id: GroupId, collapsed: bool) {
        if let Some(group) = self.snapshot.groups.iter_mut().find(|g| g.id == group_id) {
            group.collapsed = collapsed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandError;
    use crate::config::{Settings, WhenToShow};
    use crate::tab::{Group, Snapshot};

    struct RejectAll;

    impl CommandSink for RejectAll {
        fn send(&mut self, command: Command) -> Result<(), CommandError> {
            match command {
                Command::SetGroupCollapsed { group_id, .. } => {
                    Err(CommandError::NoSuchGroup(group_id))
                }
                _ => Err(CommandError::EmptyBlock),
            }
        }
    }

    fn bar_with(tabs: Vec<Tab>, groups: Vec<Group>, settings: Settings) -> TabBar {
        let mut bar = TabBar::new(settings);
        bar.apply_snapshot(Snapshot::new(1, tabs, groups));
        bar
    }

    #[test]
    fn visibility_follows_window_state() {
        let mut settings = Settings::default();
        settings.when_to_show = WhenToShow::Fullscreen;
        let mut bar = bar_with(vec![Tab::new(1, 0)], Vec::new(), settings);
        assert!(!bar.is_visible());

        let mut snapshot = bar.snapshot().clone();
        snapshot.window_state = "fullscreen".to_string();
        bar.apply_snapshot(snapshot);
        assert!(bar.is_visible());

        let mut settings = bar.settings().clone();
        settings.enabled = false;
        bar.apply_settings(settings);
        assert!(!bar.is_visible());
    }

    #[test]
    fn auto_hide_reveals_at_configured_edge() {
        let mut settings = Settings::default();
        settings.auto_hide = true;
        settings.activation_edge_px = 5;
        let bar = bar_with(Vec::new(), Vec::new(), settings.clone());
        // Default position is bottom
        assert!(bar.pointer_reveals(596.0, 600.0));
        assert!(!bar.pointer_reveals(10.0, 600.0));

        settings.position = BarPosition::Top;
        let bar = bar_with(Vec::new(), Vec::new(), settings);
        assert!(bar.pointer_reveals(5.0, 600.0));
        assert!(!bar.pointer_reveals(596.0, 600.0));
    }

    #[test]
    fn layout_plans_full_and_visible_orders() {
        let tabs = vec![
            Tab::new(1, 0).with_title("alpha"),
            Tab::new(2, 1).with_title("beta"),
            Tab::new(3, 2).with_title("alphabet"),
            Tab::new(4, 3).with_title("gamma"),
        ];
        let mut bar = bar_with(tabs, Vec::new(), Settings::default().with_rows(2, 3));
        bar.set_search("  ALPHA ");

        let layout = bar.layout();
        assert_eq!(layout.full.row_lengths, vec![2, 2]);
        assert_eq!(layout.visible.row_lengths, vec![1, 1]);
        assert!(!layout.group_drag_enabled);
        assert!(!layout.use_full_group_header);
        assert!(!layout.empty);

        bar.set_search("zzz");
        assert!(bar.layout().empty);
    }

    #[test]
    fn collapse_setting_collapses_every_group_run() {
        let tabs = vec![Tab::new(1, 0).in_group(4), Tab::new(2, 1)];
        let mut settings = Settings::default();
        settings.collapse_groups = true;
        let bar = bar_with(tabs, vec![Group::new(4, "g")], settings);
        let layout = bar.layout();
        let runs = &layout.row_runs[0];
        assert_eq!(runs.len(), 2);
        assert!(!runs[0].collapsed);
        assert!(runs[1].collapsed);
        assert!(layout.use_full_group_header);
    }

    #[test]
    fn collapse_toggle_reverts_on_rejection() {
        let tabs = vec![Tab::new(1, 0).in_group(4)];
        let mut bar = bar_with(tabs, vec![Group::new(4, "g")], Settings::default());

        assert_eq!(bar.toggle_group_collapsed(4, &mut RejectAll), None);
        assert_eq!(bar.snapshot().group(4).map(|g| g.collapsed), Some(false));

        let mut sent: Vec<Command> = Vec::new();
        assert_eq!(
            bar.toggle_group_collapsed(4, &mut sent),
            Some(Command::SetGroupCollapsed {
                group_id: 4,
                collapsed: true
            })
        );
        assert_eq!(bar.snapshot().group(4).map(|g| g.collapsed), Some(true));
        assert_eq!(bar.toggle_group_collapsed(GROUP_NONE, &mut sent), None);
    }

    #[test]
    fn close_others_spares_pinned_tabs() {
        let tabs = vec![
            Tab::new(1, 0).pinned(),
            Tab::new(2, 1),
            Tab::new(3, 2),
            Tab::new(4, 3),
        ];
        let mut bar = bar_with(tabs, Vec::new(), Settings::default());
        let mut sent: Vec<Command> = Vec::new();
        let closed = bar.close_others(3, &mut sent);
        assert_eq!(closed, vec![Command::Close(2), Command::Close(4)]);
        assert_eq!(sent, closed);
    }
}
