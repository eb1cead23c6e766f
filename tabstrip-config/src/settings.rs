//! The `Settings` struct: every display parameter of the tab bar overlay.
//!
//! Values coming from disk are untrusted. `Settings::normalized` clamps
//! every numeric field into its supported range and swaps malformed colors
//! for their defaults; `load_from` always returns a normalized value.

use crate::error::ConfigError;
use crate::types::{BarPosition, LayoutMode, ThemeMode, WhenToShow, lenient};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::sync::LazyLock;

/// `#rgb` or `#rrggbb`, compiled once.
static HEX_COLOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}){1,2}$").expect("hex color pattern is valid")
});

pub const BAR_HEIGHT_PERCENT_RANGE: RangeInclusive<u32> = 6..=30;
pub const TAB_MIN_WIDTH_RANGE: RangeInclusive<u32> = 56..=500;
pub const TAB_MAX_WIDTH_RANGE: RangeInclusive<u32> = 80..=800;
pub const ROW_COUNT_RANGE: RangeInclusive<usize> = 1..=6;
pub const TABS_PER_ROW_RANGE: RangeInclusive<usize> = 1..=50;
pub const ICON_SIZE_RANGE: RangeInclusive<u32> = 12..=64;
pub const LABEL_FONT_SIZE_RANGE: RangeInclusive<u32> = 10..=24;
pub const PADDING_RANGE: RangeInclusive<u32> = 2..=24;
pub const AUTO_HIDE_DELAY_MS_RANGE: RangeInclusive<u64> = 300..=10000;
pub const ACTIVATION_EDGE_PX_RANGE: RangeInclusive<u32> = 1..=100;

/// Tab bar overlay settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Master switch for the overlay
    #[serde(default = "crate::defaults::bool_true")]
    pub enabled: bool,

    #[serde(default, deserialize_with = "lenient")]
    pub position: BarPosition,

    #[serde(default, deserialize_with = "lenient")]
    pub layout_mode: LayoutMode,

    /// Bar height as a percentage of the viewport (single-row baseline)
    #[serde(default = "crate::defaults::bar_height_percent")]
    pub bar_height_percent: u32,

    #[serde(default = "crate::defaults::tab_min_width")]
    pub tab_min_width: u32,

    #[serde(default = "crate::defaults::tab_max_width")]
    pub tab_max_width: u32,

    /// Number of display rows the tabs are distributed across
    #[serde(default = "crate::defaults::row_count")]
    pub row_count: usize,

    /// Per-row capacity before rows overflow into the last row
    #[serde(default = "crate::defaults::tabs_per_row")]
    pub tabs_per_row: usize,

    #[serde(default = "crate::defaults::icon_size")]
    pub icon_size: u32,

    #[serde(default = "crate::defaults::label_font_size")]
    pub label_font_size: u32,

    #[serde(default = "crate::defaults::padding")]
    pub padding: u32,

    #[serde(default = "crate::defaults::bool_true")]
    pub show_close_button: bool,

    #[serde(default = "crate::defaults::bool_true")]
    pub show_new_tab_button: bool,

    #[serde(default = "crate::defaults::bool_true")]
    pub show_search_bar: bool,

    /// Render tab groups (headers or chips) instead of a flat strip
    #[serde(default = "crate::defaults::bool_true")]
    pub show_groups: bool,

    /// Draw every group collapsed, whatever its own state
    #[serde(default = "crate::defaults::bool_false")]
    pub collapse_groups: bool,

    #[serde(default, deserialize_with = "lenient")]
    pub theme: ThemeMode,

    #[serde(default = "crate::defaults::background_color")]
    pub background_color: String,

    #[serde(default = "crate::defaults::text_color")]
    pub text_color: String,

    #[serde(default = "crate::defaults::active_tab_highlight")]
    pub active_tab_highlight: String,

    #[serde(default, deserialize_with = "lenient")]
    pub when_to_show: WhenToShow,

    #[serde(default = "crate::defaults::bool_false")]
    pub auto_hide: bool,

    #[serde(default = "crate::defaults::auto_hide_delay_ms")]
    pub auto_hide_delay_ms: u64,

    /// Distance from the docked edge (px) that re-reveals an auto-hidden bar
    #[serde(default = "crate::defaults::activation_edge_px")]
    pub activation_edge_px: u32,

    /// Render pinned tabs as icons only
    #[serde(default = "crate::defaults::bool_false")]
    pub pinned_icon_only: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: crate::defaults::bool_true(),
            position: BarPosition::default(),
            layout_mode: LayoutMode::default(),
            bar_height_percent: crate::defaults::bar_height_percent(),
            tab_min_width: crate::defaults::tab_min_width(),
            tab_max_width: crate::defaults::tab_max_width(),
            row_count: crate::defaults::row_count(),
            tabs_per_row: crate::defaults::tabs_per_row(),
            icon_size: crate::defaults::icon_size(),
            label_font_size: crate::defaults::label_font_size(),
            padding: crate::defaults::padding(),
            show_close_button: crate::defaults::bool_true(),
            show_new_tab_button: crate::defaults::bool_true(),
            show_search_bar: crate::defaults::bool_true(),
            show_groups: crate::defaults::bool_true(),
            collapse_groups: crate::defaults::bool_false(),
            theme: ThemeMode::default(),
            background_color: crate::defaults::background_color(),
            text_color: crate::defaults::text_color(),
            active_tab_highlight: crate::defaults::active_tab_highlight(),
            when_to_show: WhenToShow::default(),
            auto_hide: crate::defaults::bool_false(),
            auto_hide_delay_ms: crate::defaults::auto_hide_delay_ms(),
            activation_edge_px: crate::defaults::activation_edge_px(),
            pinned_icon_only: crate::defaults::bool_false(),
        }
    }
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set row layout (unclamped; call `normalized` before use)
    pub fn with_rows(mut self, row_count: usize, tabs_per_row: usize) -> Self {
        self.row_count = row_count;
        self.tabs_per_row = tabs_per_row;
        self
    }

    pub fn with_position(mut self, position: BarPosition) -> Self {
        self.position = position;
        self
    }

    pub fn with_show_groups(mut self, show_groups: bool) -> Self {
        self.show_groups = show_groups;
        self
    }

    /// Clamp every numeric field into its supported range and replace
    /// malformed colors with their defaults.
    pub fn normalized(mut self) -> Self {
        self.bar_height_percent = clamp(self.bar_height_percent, BAR_HEIGHT_PERCENT_RANGE);
        self.tab_min_width = clamp(self.tab_min_width, TAB_MIN_WIDTH_RANGE);
        self.tab_max_width = clamp(self.tab_max_width, TAB_MAX_WIDTH_RANGE);
        self.row_count = clamp(self.row_count, ROW_COUNT_RANGE);
        self.tabs_per_row = clamp(self.tabs_per_row, TABS_PER_ROW_RANGE);
        self.icon_size = clamp(self.icon_size, ICON_SIZE_RANGE);
        self.label_font_size = clamp(self.label_font_size, LABEL_FONT_SIZE_RANGE);
        self.padding = clamp(self.padding, PADDING_RANGE);
        self.auto_hide_delay_ms = clamp(self.auto_hide_delay_ms, AUTO_HIDE_DELAY_MS_RANGE);
        self.activation_edge_px = clamp(self.activation_edge_px, ACTIVATION_EDGE_PX_RANGE);

        self.background_color =
            color_or_default(&self.background_color, crate::defaults::background_color);
        self.text_color = color_or_default(&self.text_color, crate::defaults::text_color);
        self.active_tab_highlight = color_or_default(
            &self.active_tab_highlight,
            crate::defaults::active_tab_highlight,
        );
        self
    }

    /// Rendered max width of a tab; never below the min width.
    pub fn effective_tab_max_width(&self) -> u32 {
        self.tab_max_width.max(self.tab_min_width)
    }
}

fn clamp<T: PartialOrd + Copy>(value: T, range: RangeInclusive<T>) -> T {
    if value < *range.start() {
        *range.start()
    } else if value > *range.end() {
        *range.end()
    } else {
        value
    }
}

fn color_or_default(value: &str, fallback: fn() -> String) -> String {
    let trimmed = value.trim();
    if HEX_COLOR_PATTERN.is_match(trimmed) {
        trimmed.to_string()
    } else {
        log::debug!("Replacing invalid color {:?} with default", value);
        fallback()
    }
}

/// Parse a `#rgb` / `#rrggbb` color into RGB bytes.
pub fn parse_hex_color(value: &str) -> Result<[u8; 3], ConfigError> {
    let trimmed = value.trim();
    if !HEX_COLOR_PATTERN.is_match(trimmed) {
        return Err(ConfigError::Validation(format!(
            "'{value}' is not a #rgb or #rrggbb color"
        )));
    }
    let digits = &trimmed[1..];
    let channel = |s: &str| u8::from_str_radix(s, 16).unwrap_or(0);
    Ok(if digits.len() == 3 {
        let expand = |i: usize| {
            let d = &digits[i..i + 1];
            channel(&format!("{d}{d}"))
        };
        [expand(0), expand(1), expand(2)]
    } else {
        [
            channel(&digits[0..2]),
            channel(&digits[2..4]),
            channel(&digits[4..6]),
        ]
    })
}
