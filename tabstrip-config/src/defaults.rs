//! Default value functions for settings.
//!
//! Used as `#[serde(default = "crate::defaults::...")]` attributes on
//! `Settings` fields, and by `Settings::normalized` as the fallback for
//! out-of-range colors.

// ── Primitive helpers ──────────────────────────────────────────────────────

pub fn bool_false() -> bool {
    false
}

pub fn bool_true() -> bool {
    true
}

// ── Bar geometry ───────────────────────────────────────────────────────────

pub fn bar_height_percent() -> u32 {
    12
}

pub fn tab_min_width() -> u32 {
    120
}

pub fn tab_max_width() -> u32 {
    250
}

pub fn row_count() -> usize {
    1
}

pub fn tabs_per_row() -> usize {
    12
}

pub fn icon_size() -> u32 {
    28
}

pub fn label_font_size() -> u32 {
    13
}

pub fn padding() -> u32 {
    8
}

// ── Colors ─────────────────────────────────────────────────────────────────

pub fn background_color() -> String {
    "#1e1e1e".to_string()
}

pub fn text_color() -> String {
    "#e6e6e6".to_string()
}

pub fn active_tab_highlight() -> String {
    "#333333".to_string()
}

// ── Auto-hide ──────────────────────────────────────────────────────────────

pub fn auto_hide_delay_ms() -> u64 {
    2000
}

pub fn activation_edge_px() -> u32 {
    5
}
