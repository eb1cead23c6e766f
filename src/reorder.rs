//! Drop resolution: turning a drop into one move in the browser's tab order.
//!
//! Every drop becomes a desired insertion point in the full order, which
//! counts the dragged tabs in their current place. Resolution then:
//!
//! 1. removes the source tabs and shifts the insertion point to match,
//! 2. clamps it into the source's partition (pinned tabs stay before
//!    unpinned tabs),
//! 3. maps it onto a concrete browser index, or to "end of window",
//! 4. reports a no-op when the move would not change the order.
//!
//! Nothing here fails. A source that is not in the snapshot, or a move
//! to where the source already sits, resolves to [`Resolution::NoOp`].

use crate::tab::{Tab, TabId};
use std::collections::HashSet;

/// Where a move puts the (first) moved tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveTarget {
    /// Final index of the moved tab (first tab of a block)
    Index(usize),
    /// After the last tab of the window
    End,
}

impl MoveTarget {
    /// The browser API's encoding: `-1` means end of window.
    pub fn as_browser_index(&self) -> i64 {
        match self {
            MoveTarget::Index(i) => *i as i64,
            MoveTarget::End => -1,
        }
    }
}

impl std::fmt::Display for MoveTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveTarget::Index(i) => write!(f, "{i}"),
            MoveTarget::End => write!(f, "end"),
        }
    }
}

/// Why a drop resolved to no command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoOpReason {
    /// The source tab(s) are not in the current full order
    InvalidSource,
    /// The move would leave the order unchanged
    SamePosition,
}

/// Outcome of resolving a drop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<M> {
    Move(M),
    NoOp(NoOpReason),
}

impl<M> Resolution<M> {
    pub fn is_noop(&self) -> bool {
        matches!(self, Resolution::NoOp(_))
    }

    pub fn into_move(self) -> Option<M> {
        match self {
            Resolution::Move(m) => Some(m),
            Resolution::NoOp(_) => None,
        }
    }
}

/// A single tab move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingleMove {
    pub tab_id: TabId,
    pub target: MoveTarget,
}

/// A contiguous block move; `tab_ids` are in full order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockMove {
    pub tab_ids: Vec<TabId>,
    pub target: MoveTarget,
}

/// Resolve dropping `source` at `desired` (insert-before position in the
/// full order, source included). `full` must be sorted with
/// [`sort_tabs`](crate::tab::sort_tabs).
pub fn resolve_single_move(source: TabId, desired: usize, full: &[Tab]) -> Resolution<SingleMove> {
    let Some(tab) = full.iter().find(|t| t.id == source) else {
        log::trace!("Single move: tab {} not in snapshot", source);
        return Resolution::NoOp(NoOpReason::InvalidSource);
    };

    match resolve_block(&[tab], desired, full) {
        Some(target) => {
            log::debug!("Resolved move of tab {} to {}", source, target);
            Resolution::Move(SingleMove {
                tab_id: source,
                target,
            })
        }
        None => {
            log::trace!("Single move of tab {} is a no-op", source);
            Resolution::NoOp(NoOpReason::SamePosition)
        }
    }
}

/// Resolve dropping a whole group at `desired`.
///
/// Only the sources sharing the pinned state of the first one (in full
/// order) move; the block keeps its full-order sequence regardless of the
/// order of `sources`. Ids not in `full` are ignored.
pub fn resolve_group_move(
    sources: &[TabId],
    desired: usize,
    full: &[Tab],
) -> Resolution<BlockMove> {
    let wanted: HashSet<TabId> = sources.iter().copied().collect();
    let found: Vec<&Tab> = full.iter().filter(|t| wanted.contains(&t.id)).collect();
    let Some(first) = found.first() else {
        log::trace!("Group move: none of {:?} in snapshot", sources);
        return Resolution::NoOp(NoOpReason::InvalidSource);
    };

    let pinned = first.pinned;
    let block: Vec<&Tab> = found
        .iter()
        .copied()
        .filter(|t| t.pinned == pinned)
        .collect();
    if block.len() != found.len() {
        log::debug!(
            "Group move: dropping {} tab(s) whose pinned state differs from the first",
            found.len() - block.len()
        );
    }

    let tab_ids: Vec<TabId> = block.iter().map(|t| t.id).collect();
    match resolve_block(&block, desired, full) {
        Some(target) => {
            log::debug!("Resolved block move of {:?} to {}", tab_ids, target);
            Resolution::Move(BlockMove { tab_ids, target })
        }
        None => {
            log::trace!("Block move of {:?} is a no-op", tab_ids);
            Resolution::NoOp(NoOpReason::SamePosition)
        }
    }
}

/// Shared resolution for a non-empty block of same-pinned-state tabs.
///
/// Returns `None` when the move leaves the order unchanged.
fn resolve_block(block: &[&Tab], desired: usize, full: &[Tab]) -> Option<MoveTarget> {
    let ids: HashSet<TabId> = block.iter().map(|t| t.id).collect();
    let pinned = block.first()?.pinned;

    let desired = desired.min(full.len());
    let before = full[..desired]
        .iter()
        .filter(|t| ids.contains(&t.id))
        .count();
    let remaining: Vec<&Tab> = full.iter().filter(|t| !ids.contains(&t.id)).collect();

    let pinned_remaining = remaining.iter().filter(|t| t.pinned).count();
    let mut slot = desired - before;
    slot = if pinned {
        slot.min(pinned_remaining)
    } else {
        slot.max(pinned_remaining)
    };
    slot = slot.min(remaining.len());

    if is_unchanged(block, &remaining, slot, full) {
        return None;
    }

    // The slot in the order without the block is the block's final index;
    // `Tab::index` may be stale or duplicated and is not used here
    Some(if slot < remaining.len() {
        MoveTarget::Index(slot)
    } else {
        MoveTarget::End
    })
}

/// Whether reinserting `block` at `slot` of `remaining` reproduces `full`.
fn is_unchanged(block: &[&Tab], remaining: &[&Tab], slot: usize, full: &[Tab]) -> bool {
    remaining[..slot]
        .iter()
        .chain(block)
        .chain(&remaining[slot..])
        .map(|t| t.id)
        .eq(full.iter().map(|t| t.id))
}
