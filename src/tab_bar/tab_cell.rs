//! Per-tab display values for the renderer.
//!
//! Width limits, label, status glyph and background color of a single
//! tab, derived from the tab, the settings and the controller state.

use crate::config::{Settings, parse_hex_color};
use crate::tab::{Tab, TabId};

use super::TabBar;

/// Pinned tabs never shrink below this
const PINNED_MIN_WIDTH: u32 = 56;
/// Unpinned tabs never shrink below this
const UNPINNED_MIN_WIDTH: u32 = 140;
/// Status glyphs only fit from this width on
const STATUS_MIN_WIDTH: u32 = 170;
/// Opacity of the tab being dragged
const DRAGGING_ALPHA: u8 = 100;

/// What a renderer needs to draw one tab
#[derive(Debug, Clone, PartialEq)]
pub struct TabCell {
    pub id: TabId,
    /// `None` when a pinned tab is shown as its icon only
    pub label: Option<String>,
    /// Tooltip: title and URL
    pub tooltip: String,
    pub status: Option<&'static str>,
    pub min_width: u32,
    pub max_width: u32,
    /// RGBA background
    pub background: [u8; 4],
    pub active: bool,
    pub focused: bool,
    pub show_close: bool,
}

fn rgb_or_default(value: &str, fallback: [u8; 3]) -> [u8; 3] {
    parse_hex_color(value).unwrap_or(fallback)
}

/// Width limits of a tab: pinned tabs may be narrower than unpinned ones.
pub fn tab_width_limits(tab: &Tab, settings: &Settings) -> (u32, u32) {
    let floor = if tab.pinned {
        PINNED_MIN_WIDTH
    } else {
        UNPINNED_MIN_WIDTH
    };
    let min = settings.tab_min_width.max(floor);
    (min, settings.tab_max_width.max(min))
}

impl TabBar {
    /// Display values for `tab`
    pub fn tab_cell(&self, tab: &Tab) -> TabCell {
        let settings = &self.settings;
        let (min_width, max_width) = tab_width_limits(tab, settings);

        let label = if settings.pinned_icon_only && tab.pinned {
            None
        } else {
            Some(tab.display_title().to_string())
        };
        let status = if min_width >= STATUS_MIN_WIDTH {
            tab.status_indicator()
        } else {
            None
        };

        let [r, g, b] = if tab.active {
            rgb_or_default(&settings.active_tab_highlight, [0x33, 0x33, 0x33])
        } else {
            rgb_or_default(&settings.background_color, [0x1e, 0x1e, 0x1e])
        };
        let alpha = if self.drag.dragged_tab() == Some(tab.id) {
            DRAGGING_ALPHA
        } else {
            255
        };

        TabCell {
            id: tab.id,
            label,
            tooltip: format!("{}\n{}", tab.display_title(), tab.url),
            status,
            min_width,
            max_width,
            background: [r, g, b, alpha],
            active: tab.active,
            focused: self.focused == Some(tab.id),
            show_close: settings.show_close_button,
        }
    }
}
