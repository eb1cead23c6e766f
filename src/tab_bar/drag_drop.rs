//! Drag start and drop handling for the tab bar.
//!
//! Every drop ends the drag session, whether or not a command results.
//! Positions are always taken from the full order, so a drop made while
//! a search filters the bar still lands relative to the hidden tabs.

use crate::commands::Command;
use crate::drag::{
    DragSession, GroupDropIntent, TabDropIntent, TabHit, classify_group_drop, classify_tab_drop,
};
use crate::layout::{plan_rows, row_drop_to_full_position};
use crate::reorder::{resolve_group_move, resolve_single_move};
use crate::tab::{GROUP_NONE, GroupId, TabId};
use crate::traits::CommandSink;

use super::TabBar;

impl TabBar {
    /// Start dragging a tab shown in visible row `from_row`
    pub fn begin_tab_drag(&mut self, tab_id: TabId, from_row: usize) {
        self.context_menu_tab = None;
        self.drag.begin_tab(tab_id, from_row);
    }

    /// Start dragging a whole group.
    ///
    /// Refused while a search is active (the drag would carry hidden tabs)
    /// and for the ungrouped run. Returns whether a drag started.
    pub fn begin_group_drag(&mut self, group_id: GroupId) -> bool {
        if group_id == GROUP_NONE || !self.search.is_empty() {
            return false;
        }
        let tab_ids: Vec<TabId> = self
            .full_order
            .iter()
            .filter(|t| t.group_id == group_id)
            .map(|t| t.id)
            .collect();
        if tab_ids.is_empty() {
            return false;
        }
        self.context_menu_tab = None;
        self.drag.begin_group(group_id, tab_ids);
        true
    }

    /// Abandon the current drag without a command
    pub fn cancel_drag(&mut self) {
        if self.drag.end() != DragSession::Idle {
            log::trace!("Drag cancelled");
        }
    }

    /// Pointer released over tab `target_id` drawn in visible row
    /// `target_row` with extent `hit`.
    pub fn handle_tab_drop(
        &mut self,
        target_id: TabId,
        target_row: usize,
        hit: TabHit,
        pointer_x: f32,
        sink: &mut impl CommandSink,
    ) -> Option<Command> {
        match classify_tab_drop(&self.drag, target_id, target_row, hit, pointer_x) {
            TabDropIntent::Adjacent { place_after } => {
                self.drop_on_tab(target_id, place_after, sink)
            }
            TabDropIntent::DeferToRow => self.drop_on_row(target_row, sink),
            TabDropIntent::Ignore => {
                self.drag.end();
                None
            }
        }
    }

    /// Pointer released over the run of `target_group`
    pub fn handle_group_drop(
        &mut self,
        target_group: GroupId,
        hit: TabHit,
        pointer_x: f32,
        sink: &mut impl CommandSink,
    ) -> Option<Command> {
        match classify_group_drop(&self.drag, target_group, hit, pointer_x) {
            GroupDropIntent::Adjacent { place_after } => {
                self.drop_on_group(target_group, place_after, sink)
            }
            GroupDropIntent::Ignore => {
                self.drag.end();
                None
            }
        }
    }

    /// Drop the dragged tab next to `target_id`
    pub fn drop_on_tab(
        &mut self,
        target_id: TabId,
        place_after: bool,
        sink: &mut impl CommandSink,
    ) -> Option<Command> {
        let session = self.drag.end();
        let DragSession::Tab { tab_id, .. } = session else {
            return None;
        };
        let target_pos = self.full_order.iter().position(|t| t.id == target_id)?;
        let desired = target_pos + usize::from(place_after);
        self.issue_single(tab_id, desired, sink)
    }

    /// Drop the dragged tab or group onto the background of visible row
    /// `row`: it goes to the end of that row in the full order.
    pub fn drop_on_row(&mut self, row: usize, sink: &mut impl CommandSink) -> Option<Command> {
        let session = self.drag.end();
        let plan = plan_rows(
            &self.full_order,
            self.settings.row_count,
            self.settings.tabs_per_row,
        );
        let Some(desired) = row_drop_to_full_position(row, &plan) else {
            log::debug!("Drop on row {} ignored: no such row", row);
            return None;
        };

        match session {
            DragSession::Tab { tab_id, .. } => self.issue_single(tab_id, desired, sink),
            DragSession::Group { tab_ids, .. } => self.issue_group(&tab_ids, desired, sink),
            DragSession::Idle => None,
        }
    }

    /// Drop the dragged group before or after `target_group`
    pub fn drop_on_group(
        &mut self,
        target_group: GroupId,
        place_after: bool,
        sink: &mut impl CommandSink,
    ) -> Option<Command> {
        let session = self.drag.end();
        let DragSession::Group { group_id, tab_ids } = session else {
            return None;
        };
        if target_group == GROUP_NONE || target_group == group_id {
            return None;
        }

        let positions = self
            .full_order
            .iter()
            .enumerate()
            .filter(|(_, t)| t.group_id == target_group)
            .map(|(pos, _)| pos);
        let desired = if place_after {
            positions.max()? + 1
        } else {
            positions.min()?
        };
        self.issue_group(&tab_ids, desired, sink)
    }

    fn issue_single(
        &mut self,
        tab_id: TabId,
        desired: usize,
        sink: &mut impl CommandSink,
    ) -> Option<Command> {
        let order = &self.full_order;
        let resolved = resolve_single_move(tab_id, desired, order).into_move()?;
        let sent = self.send(sink, resolved.into());
        if sent.is_some() {
            self.focused = Some(tab_id);
        }
        sent
    }

    fn issue_group(
        &mut self,
        tab_ids: &[TabId],
        desired: usize,
        sink: &mut impl CommandSink,
    ) -> Option<Command> {
        let order = &self.full_order;
        let resolved = resolve_group_move(tab_ids, desired, order).into_move()?;
        let first = resolved.tab_ids.first().copied();
        let sent = self.send(sink, resolved.into());
        if sent.is_some() {
            self.focused = first;
        }
        sent
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::{Command, MoveTarget};
    use crate::config::Settings;
    use crate::drag::{DragSession, TabHit};
    use crate::tab::{Group, Snapshot, Tab};
    use crate::tab_bar::TabBar;

    fn bar(tabs: Vec<Tab>, groups: Vec<Group>, rows: usize, per_row: usize) -> TabBar {
        let mut bar = TabBar::new(Settings::default().with_rows(rows, per_row));
        bar.apply_snapshot(Snapshot::new(1, tabs, groups));
        bar
    }

    fn plain(n: u32) -> Vec<Tab> {
        (0..n).map(|i| Tab::new(i + 1, i as usize)).collect()
    }

    #[test]
    fn drop_after_tab_moves_and_focuses() {
        let mut bar = bar(plain(4), Vec::new(), 1, 12);
        let mut sent: Vec<Command> = Vec::new();
        bar.begin_tab_drag(1, 0);
        let cmd = bar.drop_on_tab(3, true, &mut sent);
        assert_eq!(
            cmd,
            Some(Command::Move {
                tab_id: 1,
                target: MoveTarget::Index(2)
            })
        );
        assert_eq!(bar.drag(), &DragSession::Idle);
        assert_eq!(bar.current_tab_id(), Some(1));
    }

    #[test]
    fn drop_in_place_sends_nothing() {
        let mut bar = bar(plain(3), Vec::new(), 1, 12);
        let mut sent: Vec<Command> = Vec::new();
        bar.begin_tab_drag(2, 0);
        assert_eq!(bar.drop_on_tab(3, false, &mut sent), None);
        assert!(sent.is_empty());
        assert!(!bar.drag().is_active());
    }

    #[test]
    fn row_drop_appends_to_row_end() {
        // Rows of the full order: [1 2 3] [4 5]
        let mut bar = bar(plain(5), Vec::new(), 2, 3);
        let mut sent: Vec<Command> = Vec::new();
        bar.begin_tab_drag(5, 1);
        assert_eq!(
            bar.drop_on_row(0, &mut sent),
            Some(Command::Move {
                tab_id: 5,
                target: MoveTarget::Index(3)
            })
        );

        bar.begin_tab_drag(1, 0);
        assert_eq!(
            bar.drop_on_row(1, &mut sent),
            Some(Command::Move {
                tab_id: 1,
                target: MoveTarget::End
            })
        );
        bar.begin_tab_drag(1, 0);
        assert_eq!(bar.drop_on_row(7, &mut sent), None);
        assert!(!bar.drag().is_active());
    }

    #[test]
    fn cross_row_center_drop_goes_to_row() {
        let mut bar = bar(plain(5), Vec::new(), 2, 3);
        let mut sent: Vec<Command> = Vec::new();
        bar.begin_tab_drag(1, 0);
        // Center of tab 4 in row 1: append to row 1
        let cmd = bar.handle_tab_drop(4, 1, TabHit::new(0.0, 100.0), 50.0, &mut sent);
        assert_eq!(
            cmd,
            Some(Command::Move {
                tab_id: 1,
                target: MoveTarget::End
            })
        );

        // Left edge of tab 4 in row 1: before tab 4
        bar.begin_tab_drag(1, 0);
        let cmd = bar.handle_tab_drop(4, 1, TabHit::new(0.0, 100.0), 5.0, &mut sent);
        assert_eq!(
            cmd,
            Some(Command::Move {
                tab_id: 1,
                target: MoveTarget::Index(2)
            })
        );
    }

    #[test]
    fn group_drop_before_and_after() {
        let tabs = vec![
            Tab::new(1, 0).in_group(7),
            Tab::new(2, 1).in_group(7),
            Tab::new(3, 2),
            Tab::new(4, 3).in_group(9),
            Tab::new(5, 4).in_group(9),
        ];
        let groups = vec![Group::new(7, "a"), Group::new(9, "b")];
        let mut bar = bar(tabs, groups, 1, 12);
        let mut sent: Vec<Command> = Vec::new();

        assert!(bar.begin_group_drag(9));
        assert_eq!(
            bar.drop_on_group(7, false, &mut sent),
            Some(Command::MoveBlock {
                tab_ids: vec![4, 5],
                target: MoveTarget::Index(0)
            })
        );
        assert_eq!(bar.current_tab_id(), Some(4));

        assert!(bar.begin_group_drag(7));
        assert_eq!(
            bar.drop_on_group(9, true, &mut sent),
            Some(Command::MoveBlock {
                tab_ids: vec![1, 2],
                target: MoveTarget::End
            })
        );

        // Onto itself
        assert!(bar.begin_group_drag(7));
        let hit = TabHit::new(0.0, 10.0);
        assert_eq!(bar.handle_group_drop(7, hit, 9.0, &mut sent), None);
        assert!(!bar.drag().is_active());
    }

    #[test]
    fn group_drag_refused_while_searching() {
        let tabs = vec![Tab::new(1, 0).in_group(7).with_title("x")];
        let mut bar = bar(tabs, vec![Group::new(7, "a")], 1, 12);
        bar.set_search("x");
        assert!(!bar.begin_group_drag(7));
        bar.set_search("");
        assert!(bar.begin_group_drag(7));
        bar.cancel_drag();
        assert!(!bar.drag().is_active());
    }
}
