//! Enumerated settings types for the tab bar overlay.

use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

// ============================================================================
// Bar placement
// ============================================================================

/// Edge of the page the bar is docked to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BarPosition {
    /// Bar along the top edge
    Top,
    /// Bar along the bottom edge (default)
    #[default]
    Bottom,
}

impl BarPosition {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            BarPosition::Top => "Top",
            BarPosition::Bottom => "Bottom",
        }
    }

    /// All available positions for UI iteration
    pub fn all() -> &'static [BarPosition] {
        &[BarPosition::Top, BarPosition::Bottom]
    }
}

impl FromStr for BarPosition {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(BarPosition::Top),
            "bottom" => Ok(BarPosition::Bottom),
            _ => Err(()),
        }
    }
}

/// How the bar shares space with the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// Float above page content (default)
    #[default]
    Overlay,
    /// Pad the page so content is not covered
    Push,
}

impl FromStr for LayoutMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overlay" => Ok(LayoutMode::Overlay),
            "push" => Ok(LayoutMode::Push),
            _ => Err(()),
        }
    }
}

/// Color scheme preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
    /// Use the `background_color` / `text_color` / `active_tab_highlight` fields
    Custom,
}

impl FromStr for ThemeMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            "custom" => Ok(ThemeMode::Custom),
            _ => Err(()),
        }
    }
}

/// Window states in which the bar is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WhenToShow {
    /// Show in every window state (default)
    #[default]
    Always,
    /// Only while the browser window is fullscreen
    Fullscreen,
    /// Only while the browser window is maximized
    Maximized,
}

impl WhenToShow {
    /// Whether the bar should be visible for the given window state string
    /// (`"normal"`, `"maximized"`, `"fullscreen"`, `"minimized"`).
    pub fn allows(&self, window_state: &str) -> bool {
        match self {
            WhenToShow::Always => true,
            WhenToShow::Fullscreen => window_state == "fullscreen",
            WhenToShow::Maximized => window_state == "maximized",
        }
    }
}

impl FromStr for WhenToShow {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(WhenToShow::Always),
            "fullscreen" => Ok(WhenToShow::Fullscreen),
            "maximized" => Ok(WhenToShow::Maximized),
            _ => Err(()),
        }
    }
}

/// Deserialize an enum field, falling back to its default on any value that
/// is not one of the known variant names.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s.trim().parse().unwrap_or_default(),
        Raw::Other(_) => T::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_to_show_filters_window_state() {
        assert!(WhenToShow::Always.allows("normal"));
        assert!(WhenToShow::Fullscreen.allows("fullscreen"));
        assert!(!WhenToShow::Fullscreen.allows("maximized"));
        assert!(WhenToShow::Maximized.allows("maximized"));
        assert!(!WhenToShow::Maximized.allows("normal"));
    }

    #[test]
    fn enum_names_parse() {
        assert_eq!("top".parse::<BarPosition>(), Ok(BarPosition::Top));
        assert_eq!("push".parse::<LayoutMode>(), Ok(LayoutMode::Push));
        assert_eq!("custom".parse::<ThemeMode>(), Ok(ThemeMode::Custom));
        assert!("sideways".parse::<BarPosition>().is_err());
    }
}
