//! Transient drag state and pointer hit classification.
//!
//! A [`DragSession`] lives from drag start to drag end and is the only
//! state the tab bar keeps between layout passes. The classifiers turn
//! pointer geometry into an intent; the tab bar then maps the intent onto
//! a full-order position and the reorder module does the rest.

use crate::tab::{GROUP_NONE, GroupId, TabId};

/// What is being dragged, if anything
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragSession {
    #[default]
    Idle,
    /// A single tab, picked up from `from_row` of the visible plan
    Tab { tab_id: TabId, from_row: usize },
    /// All tabs of a group, in full order
    Group {
        group_id: GroupId,
        tab_ids: Vec<TabId>,
    },
}

impl DragSession {
    pub fn begin_tab(&mut self, tab_id: TabId, from_row: usize) {
        log::trace!("Drag start: tab {} from row {}", tab_id, from_row);
        *self = DragSession::Tab { tab_id, from_row };
    }

    pub fn begin_group(&mut self, group_id: GroupId, tab_ids: Vec<TabId>) {
        log::trace!("Drag start: group {} ({} tabs)", group_id, tab_ids.len());
        *self = DragSession::Group { group_id, tab_ids };
    }

    /// Reset to idle, returning the session that ended.
    ///
    /// Called on drop, cancel and interruption alike.
    pub fn end(&mut self) -> DragSession {
        std::mem::take(self)
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, DragSession::Idle)
    }

    pub fn dragged_tab(&self) -> Option<TabId> {
        match self {
            DragSession::Tab { tab_id, .. } => Some(*tab_id),
            _ => None,
        }
    }

    pub fn dragged_group(&self) -> Option<GroupId> {
        match self {
            DragSession::Group { group_id, .. } => Some(*group_id),
            _ => None,
        }
    }
}

/// Horizontal extent of a drop target, in pointer coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabHit {
    pub left: f32,
    pub width: f32,
}

impl TabHit {
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    fn midpoint(&self) -> f32 {
        self.left + self.width / 2.0
    }

    /// Pointer within the middle half of the target (edges inclusive)
    fn in_center(&self, x: f32) -> bool {
        x >= self.left + self.width * 0.25 && x <= self.left + self.width * 0.75
    }
}

/// How a tab drop over another tab should be handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabDropIntent {
    /// Not a tab drag, or the tab is over itself
    Ignore,
    /// Let the row underneath take the drop (append to that row)
    DeferToRow,
    /// Insert next to the target tab
    Adjacent { place_after: bool },
}

/// Classify a tab being dropped on `target_id`, which sits in `target_row`.
///
/// On a cross-row drag the middle half of the target means "move into
/// this row" and is left to the row; elsewhere the drop goes before or
/// after the target depending on the side of its midpoint.
pub fn classify_tab_drop(
    session: &DragSession,
    target_id: TabId,
    target_row: usize,
    hit: TabHit,
    pointer_x: f32,
) -> TabDropIntent {
    let DragSession::Tab { tab_id, from_row } = session else {
        return TabDropIntent::Ignore;
    };
    if *tab_id == target_id {
        return TabDropIntent::Ignore;
    }

    if *from_row != target_row && hit.in_center(pointer_x) {
        return TabDropIntent::DeferToRow;
    }

    TabDropIntent::Adjacent {
        place_after: pointer_x > hit.midpoint(),
    }
}

/// How a group drop over a group run should be handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupDropIntent {
    Ignore,
    Adjacent { place_after: bool },
}

/// Classify a group being dropped on the run of `target_group`.
///
/// The ungrouped run is never a group target, nor is the dragged group.
pub fn classify_group_drop(
    session: &DragSession,
    target_group: GroupId,
    hit: TabHit,
    pointer_x: f32,
) -> GroupDropIntent {
    let Some(dragged) = session.dragged_group() else {
        return GroupDropIntent::Ignore;
    };
    if target_group == GROUP_NONE || target_group == dragged {
        return GroupDropIntent::Ignore;
    }
    GroupDropIntent::Adjacent {
        place_after: pointer_x > hit.midpoint(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_always_resets() {
        let mut session = DragSession::default();
        assert!(!session.is_active());

        session.begin_tab(4, 1);
        assert!(session.is_active());
        assert_eq!(session.dragged_tab(), Some(4));
        assert_eq!(
            session.end(),
            DragSession::Tab {
                tab_id: 4,
                from_row: 1
            }
        );
        assert_eq!(session, DragSession::Idle);

        session.begin_group(2, vec![5, 6]);
        assert_eq!(session.dragged_group(), Some(2));
        session.end();
        assert!(!session.is_active());
    }

    #[test]
    fn same_row_drop_uses_midpoint() {
        let mut session = DragSession::default();
        session.begin_tab(1, 0);
        let hit = TabHit::new(100.0, 100.0);
        assert_eq!(
            classify_tab_drop(&session, 2, 0, hit, 120.0),
            TabDropIntent::Adjacent { place_after: false }
        );
        // Exactly on the midpoint counts as before
        assert_eq!(
            classify_tab_drop(&session, 2, 0, hit, 150.0),
            TabDropIntent::Adjacent { place_after: false }
        );
        assert_eq!(
            classify_tab_drop(&session, 2, 0, hit, 151.0),
            TabDropIntent::Adjacent { place_after: true }
        );
    }

    #[test]
    fn cross_row_center_defers_to_row() {
        let mut session = DragSession::default();
        session.begin_tab(1, 0);
        let hit = TabHit::new(100.0, 100.0);
        // Center band edges are inclusive
        assert_eq!(
            classify_tab_drop(&session, 2, 1, hit, 125.0),
            TabDropIntent::DeferToRow
        );
        assert_eq!(
            classify_tab_drop(&session, 2, 1, hit, 175.0),
            TabDropIntent::DeferToRow
        );
        assert_eq!(
            classify_tab_drop(&session, 2, 1, hit, 110.0),
            TabDropIntent::Adjacent { place_after: false }
        );
        assert_eq!(
            classify_tab_drop(&session, 2, 1, hit, 190.0),
            TabDropIntent::Adjacent { place_after: true }
        );
    }

    #[test]
    fn tab_drop_ignores_self_and_non_tab_drags() {
        let hit = TabHit::new(0.0, 50.0);
        let mut session = DragSession::default();
        assert_eq!(
            classify_tab_drop(&session, 2, 0, hit, 10.0),
            TabDropIntent::Ignore
        );
        session.begin_tab(2, 0);
        assert_eq!(
            classify_tab_drop(&session, 2, 0, hit, 10.0),
            TabDropIntent::Ignore
        );
        session.begin_group(3, vec![1]);
        assert_eq!(
            classify_tab_drop(&session, 2, 0, hit, 10.0),
            TabDropIntent::Ignore
        );
    }

    #[test]
    fn group_drop_rules() {
        let hit = TabHit::new(0.0, 200.0);
        let mut session = DragSession::default();
        session.begin_group(3, vec![7, 8]);
        assert_eq!(
            classify_group_drop(&session, GROUP_NONE, hit, 10.0),
            GroupDropIntent::Ignore
        );
        assert_eq!(
            classify_group_drop(&session, 3, hit, 10.0),
            GroupDropIntent::Ignore
        );
        assert_eq!(
            classify_group_drop(&session, 5, hit, 150.0),
            GroupDropIntent::Adjacent { place_after: true }
        );

        session.begin_tab(7, 0);
        assert_eq!(
            classify_group_drop(&session, 5, hit, 150.0),
            GroupDropIntent::Ignore
        );
    }
}
