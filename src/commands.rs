//! Commands the overlay sends to the browser.

use crate::reorder::{BlockMove, SingleMove};
use crate::tab::{GROUP_NONE, GroupId, TabId};
use thiserror::Error;

pub use crate::reorder::MoveTarget;

/// A request to the command sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Activate(TabId),
    Close(TabId),
    NewTab,
    SetPinned { tab_id: TabId, pinned: bool },
    Move { tab_id: TabId, target: MoveTarget },
    /// Move tabs as one contiguous block, first tab landing at `target`
    MoveBlock {
        tab_ids: Vec<TabId>,
        target: MoveTarget,
    },
    /// Add a tab to `group_id`, or to a fresh group when `None`
    Group {
        tab_id: TabId,
        group_id: Option<GroupId>,
    },
    Ungroup(TabId),
    SetGroupCollapsed { group_id: GroupId, collapsed: bool },
}

/// Command rejected at the sink boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("invalid tab id {0}")]
    InvalidTabId(TabId),
    #[error("invalid group id {0}")]
    InvalidGroupId(GroupId),
    #[error("block move has no valid tab ids")]
    EmptyBlock,
    #[error("no tab with id {0}")]
    NoSuchTab(TabId),
    #[error("no group with id {0}")]
    NoSuchGroup(GroupId),
}

fn valid_tab_id(id: TabId) -> bool {
    id > 0
}

impl Command {
    /// Check the command before it crosses the sink boundary.
    ///
    /// Browser tab ids are positive. A block move drops invalid ids and is
    /// rejected only when none remain; the cleaned command is returned.
    pub fn validate(self) -> Result<Command, CommandError> {
        match self {
            Command::Activate(id)
            | Command::Close(id)
            | Command::Ungroup(id)
            | Command::SetPinned { tab_id: id, .. }
            | Command::Move { tab_id: id, .. } => {
                if valid_tab_id(id) {
                    Ok(self)
                } else {
                    Err(CommandError::InvalidTabId(id))
                }
            }
            Command::Group { tab_id, group_id } => {
                if !valid_tab_id(tab_id) {
                    Err(CommandError::InvalidTabId(tab_id))
                } else if group_id == Some(GROUP_NONE) {
                    Err(CommandError::InvalidGroupId(GROUP_NONE))
                } else {
                    Ok(self)
                }
            }
            Command::SetGroupCollapsed { group_id, .. } => {
                if group_id == GROUP_NONE {
                    Err(CommandError::InvalidGroupId(group_id))
                } else {
                    Ok(self)
                }
            }
            Command::MoveBlock { tab_ids, target } => {
                let tab_ids: Vec<TabId> = tab_ids
                    .into_iter()
                    .filter(|&id| valid_tab_id(id))
                    .collect();
                if tab_ids.is_empty() {
                    Err(CommandError::EmptyBlock)
                } else {
                    Ok(Command::MoveBlock { tab_ids, target })
                }
            }
            Command::NewTab => Ok(self),
        }
    }
}

impl From<SingleMove> for Command {
    fn from(m: SingleMove) -> Self {
        Command::Move {
            tab_id: m.tab_id,
            target: m.target,
        }
    }
}

impl From<BlockMove> for Command {
    fn from(m: BlockMove) -> Self {
        Command::MoveBlock {
            tab_ids: m.tab_ids,
            target: m.target,
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Activate(id) => write!(f, "activate {id}"),
            Command::Close(id) => write!(f, "close {id}"),
            Command::NewTab => write!(f, "new-tab"),
            Command::SetPinned { tab_id, pinned } => {
                write!(f, "{} {tab_id}", if *pinned { "pin" } else { "unpin" })
            }
            Command::Move { tab_id, target } => write!(f, "move {tab_id} -> {target}"),
            Command::MoveBlock { tab_ids, target } => {
                write!(f, "move-block {tab_ids:?} -> {target}")
            }
            Command::Group { tab_id, group_id } => match group_id {
                Some(g) => write!(f, "group {tab_id} into {g}"),
                None => write!(f, "group {tab_id} into new group"),
            },
            Command::Ungroup(id) => write!(f, "ungroup {id}"),
            Command::SetGroupCollapsed {
                group_id,
                collapsed,
            } => write!(
                f,
                "{} group {group_id}",
                if *collapsed { "collapse" } else { "expand" }
            ),
        }
    }
}
