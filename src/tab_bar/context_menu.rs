//! Context menu for tab options (activate, close, pin, group).

use crate::commands::Command;
use crate::tab::TabId;
use crate::traits::CommandSink;

use super::TabBar;

/// An entry of the tab context menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextAction {
    Activate,
    Close,
    Pin,
    Unpin,
    CloseOthers,
    Ungroup,
    AddToNewGroup,
}

impl ContextAction {
    pub fn label(&self) -> &'static str {
        match self {
            ContextAction::Activate => "Activate tab",
            ContextAction::Close => "Close tab",
            ContextAction::Pin => "Pin tab",
            ContextAction::Unpin => "Unpin tab",
            ContextAction::CloseOthers => "Close other tabs",
            ContextAction::Ungroup => "Ungroup tab",
            ContextAction::AddToNewGroup => "Add to new group",
        }
    }
}

impl TabBar {
    /// Menu entries for `tab_id`, empty if the tab is unknown
    pub fn context_menu_items(&self, tab_id: TabId) -> Vec<ContextAction> {
        let Some(tab) = self.snapshot.tab(tab_id) else {
            return Vec::new();
        };
        vec![
            ContextAction::Activate,
            ContextAction::Close,
            if tab.pinned {
                ContextAction::Unpin
            } else {
                ContextAction::Pin
            },
            ContextAction::CloseOthers,
            if tab.is_grouped() {
                ContextAction::Ungroup
            } else {
                ContextAction::AddToNewGroup
            },
        ]
    }

    /// Open the menu on `tab_id` and return its entries
    pub fn open_context_menu(&mut self, tab_id: TabId) -> Vec<ContextAction> {
        let items = self.context_menu_items(tab_id);
        self.context_menu_tab = if items.is_empty() { None } else { Some(tab_id) };
        items
    }

    pub fn close_context_menu(&mut self) {
        self.context_menu_tab = None;
    }

    pub fn context_menu_tab(&self) -> Option<TabId> {
        self.context_menu_tab
    }

    /// Run a menu entry against the menu's tab and close the menu.
    /// Returns the commands that were accepted.
    pub fn run_context_action(
        &mut self,
        action: ContextAction,
        sink: &mut impl CommandSink,
    ) -> Vec<Command> {
        let Some(tab_id) = self.context_menu_tab.take() else {
            return Vec::new();
        };
        if self.snapshot.tab(tab_id).is_none() {
            return Vec::new();
        }

        log::debug!("Context action '{}' on tab {}", action.label(), tab_id);
        match action {
            ContextAction::Activate => self.activate(tab_id, sink).into_iter().collect(),
            ContextAction::Close => self.close(tab_id, sink).into_iter().collect(),
            ContextAction::Pin => self.set_pinned(tab_id, true, sink).into_iter().collect(),
            ContextAction::Unpin => self.set_pinned(tab_id, false, sink).into_iter().collect(),
            ContextAction::CloseOthers => self.close_others(tab_id, sink),
            ContextAction::Ungroup => self.ungroup_tab(tab_id, sink).into_iter().collect(),
            ContextAction::AddToNewGroup => self.group_tab(tab_id, sink).into_iter().collect(),
        }
    }
}
