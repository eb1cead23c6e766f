//! Per-row grouping of tabs into contiguous runs for rendering.

use super::{GROUP_NONE, Group, GroupColor, GroupId, Tab};

/// Tabs of one row that share a group, in row order
#[derive(Debug, Clone, PartialEq)]
pub struct GroupRun<'a> {
    pub group_id: GroupId,
    pub title: String,
    pub color: GroupColor,
    pub collapsed: bool,
    pub tabs: Vec<&'a Tab>,
}

impl<'a> GroupRun<'a> {
    fn new(group_id: GroupId, title: String, color: GroupColor, collapsed: bool) -> Self {
        Self {
            group_id,
            title,
            color,
            collapsed,
            tabs: Vec::new(),
        }
    }

    pub fn is_ungrouped(&self) -> bool {
        self.group_id == GROUP_NONE
    }

    /// Tabs to draw: a collapsed real group shows only its active tab.
    pub fn visible_tabs(&self) -> Vec<&'a Tab> {
        if self.collapsed && !self.is_ungrouped() {
            self.tabs
                .iter()
                .copied()
                .filter(|t| t.active)
                .take(1)
                .collect()
        } else {
            self.tabs.clone()
        }
    }

    /// Ids of every tab in the run (what a group drag carries)
    pub fn tab_ids(&self) -> Vec<super::TabId> {
        self.tabs.iter().map(|t| t.id).collect()
    }
}

/// Split a row's tabs into group runs.
///
/// With groups hidden the row is one run. Otherwise the ungrouped run comes
/// first, then one run per group in order of first appearance; empty runs
/// are dropped.
pub fn group_runs<'a>(
    row_tabs: &'a [Tab],
    groups: &[Group],
    show_groups: bool,
) -> Vec<GroupRun<'a>> {
    if !show_groups {
        let mut run = GroupRun::new(GROUP_NONE, "Tabs".to_string(), GroupColor::Grey, false);
        run.tabs = row_tabs.iter().collect();
        return if run.tabs.is_empty() {
            Vec::new()
        } else {
            vec![run]
        };
    }

    let mut runs = vec![GroupRun::new(
        GROUP_NONE,
        "Ungrouped".to_string(),
        GroupColor::Grey,
        false,
    )];

    for tab in row_tabs {
        let slot = match runs.iter().position(|r| r.group_id == tab.group_id) {
            Some(slot) => slot,
            None => {
                let group = groups.iter().find(|g| g.id == tab.group_id);
                runs.push(GroupRun::new(
                    tab.group_id,
                    group
                        .map(|g| g.title.clone())
                        .filter(|t| !t.is_empty())
                        .unwrap_or_else(|| "Group".to_string()),
                    group.map(|g| g.color).unwrap_or_default(),
                    group.is_some_and(|g| g.collapsed),
                ));
                runs.len() - 1
            }
        };
        runs[slot].tabs.push(tab);
    }

    runs.retain(|r| !r.tabs.is_empty());
    runs
}
