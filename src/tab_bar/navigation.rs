//! Keyboard navigation over the visible order.

use crate::commands::Command;
use crate::tab::TabId;
use crate::traits::CommandSink;

use super::TabBar;

impl TabBar {
    /// The tab keyboard actions apply to: the focused tab, else the active
    /// visible tab, else the first visible tab.
    pub fn current_tab_id(&self) -> Option<TabId> {
        let visible = &self.visible_order;
        self.focused
            .filter(|id| visible.iter().any(|t| t.id == *id))
            .or_else(|| visible.iter().find(|t| t.active).map(|t| t.id))
            .or_else(|| visible.first().map(|t| t.id))
    }

    fn current_position(&self) -> usize {
        self.current_tab_id()
            .and_then(|id| self.visible_order.iter().position(|t| t.id == id))
            .unwrap_or(0)
    }

    /// Move focus one tab left, stopping at the first tab
    pub fn focus_prev(&mut self) -> Option<TabId> {
        if self.visible_order.is_empty() {
            return None;
        }
        let pos = self.current_position().saturating_sub(1);
        self.focused = Some(self.visible_order[pos].id);
        self.focused
    }

    /// Move focus one tab right, stopping at the last tab
    pub fn focus_next(&mut self) -> Option<TabId> {
        if self.visible_order.is_empty() {
            return None;
        }
        let pos = (self.current_position() + 1).min(self.visible_order.len() - 1);
        self.focused = Some(self.visible_order[pos].id);
        self.focused
    }

    pub fn activate_focused(&mut self, sink: &mut impl CommandSink) -> Option<Command> {
        let id = self.current_tab_id()?;
        self.activate(id, sink)
    }

    pub fn close_focused(&mut self, sink: &mut impl CommandSink) -> Option<Command> {
        let id = self.current_tab_id()?;
        self.close(id, sink)
    }
}
