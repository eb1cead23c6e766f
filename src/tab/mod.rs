//! Read-only tab, group and snapshot model.
//!
//! Tabs and groups belong to the browser. The overlay only ever sees
//! snapshots of them and never mutates one in place; every change goes
//! out as a [`Command`](crate::commands::Command) and comes back as a fresh
//! snapshot.

mod grouping;
mod manager;

pub use grouping::{GroupRun, group_runs};
pub use manager::TabManager;

use serde::{Deserialize, Serialize};

/// Unique identifier for a tab within a browser session
pub type TabId = u32;

/// Identifier of a tab group; [`GROUP_NONE`] for ungrouped tabs
pub type GroupId = i32;

/// Identifier of a browser window
pub type WindowId = u32;

/// Sentinel group id of tabs that belong to no group
pub const GROUP_NONE: GroupId = -1;

fn group_none() -> GroupId {
    GROUP_NONE
}

/// Loading state reported by the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TabStatus {
    #[default]
    Unloaded,
    Loading,
    Complete,
}

/// A browser tab as reported by the tab source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    pub id: TabId,
    #[serde(default)]
    pub window_id: WindowId,
    /// Position in the window's true tab order (zero-based, dense)
    pub index: usize,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub fav_icon_url: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub status: TabStatus,
    #[serde(default)]
    pub audible: bool,
    #[serde(default)]
    pub muted: bool,
    #[serde(default = "group_none")]
    pub group_id: GroupId,
}

impl Tab {
    /// Unpinned, ungrouped, inactive tab at `index`
    pub fn new(id: TabId, index: usize) -> Self {
        Self {
            id,
            window_id: 0,
            index,
            title: String::new(),
            url: String::new(),
            fav_icon_url: String::new(),
            active: false,
            pinned: false,
            status: TabStatus::default(),
            audible: false,
            muted: false,
            group_id: GROUP_NONE,
        }
    }

    pub fn pinned(mut self) -> Self {
        self.pinned = true;
        self
    }

    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }

    pub fn in_group(mut self, group_id: GroupId) -> Self {
        self.group_id = group_id;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn is_grouped(&self) -> bool {
        self.group_id != GROUP_NONE
    }

    /// Title to show: the page title, else the URL, else "Untitled"
    pub fn display_title(&self) -> &str {
        if !self.title.trim().is_empty() {
            &self.title
        } else if !self.url.is_empty() {
            &self.url
        } else {
            "Untitled"
        }
    }

    /// Glyph shown next to the title: muted beats audible beats loading.
    pub fn status_indicator(&self) -> Option<&'static str> {
        if self.muted {
            Some("\u{1F507}")
        } else if self.audible {
            Some("\u{1F50A}")
        } else if self.status == TabStatus::Loading {
            Some("\u{2026}")
        } else {
            None
        }
    }
}

/// Color tag of a tab group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GroupColor {
    #[default]
    Grey,
    Blue,
    Red,
    Yellow,
    Green,
    Pink,
    Purple,
    Cyan,
    Orange,
}

impl GroupColor {
    pub fn name(&self) -> &'static str {
        match self {
            GroupColor::Grey => "grey",
            GroupColor::Blue => "blue",
            GroupColor::Red => "red",
            GroupColor::Yellow => "yellow",
            GroupColor::Green => "green",
            GroupColor::Pink => "pink",
            GroupColor::Purple => "purple",
            GroupColor::Cyan => "cyan",
            GroupColor::Orange => "orange",
        }
    }

    /// Swatch color used for group headers and chips
    pub fn hex(&self) -> &'static str {
        match self {
            GroupColor::Grey => "#9ea4a9",
            GroupColor::Blue => "#3c9cff",
            GroupColor::Red => "#d45050",
            GroupColor::Yellow => "#d4b04f",
            GroupColor::Green => "#4aaa62",
            GroupColor::Pink => "#d55aa2",
            GroupColor::Purple => "#8659d9",
            GroupColor::Cyan => "#3db3b3",
            GroupColor::Orange => "#d17f3f",
        }
    }
}

impl From<String> for GroupColor {
    fn from(value: String) -> Self {
        match value.as_str() {
            "blue" => GroupColor::Blue,
            "red" => GroupColor::Red,
            "yellow" => GroupColor::Yellow,
            "green" => GroupColor::Green,
            "pink" => GroupColor::Pink,
            "purple" => GroupColor::Purple,
            "cyan" => GroupColor::Cyan,
            "orange" => GroupColor::Orange,
            _ => GroupColor::Grey,
        }
    }
}

impl From<GroupColor> for String {
    fn from(value: GroupColor) -> Self {
        value.name().to_string()
    }
}

/// A browser tab group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub color: GroupColor,
    /// Collapsed in the overlay (not the browser's own collapsed state)
    #[serde(default)]
    pub collapsed: bool,
}

impl Group {
    pub fn new(id: GroupId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            color: GroupColor::default(),
            collapsed: false,
        }
    }
}

/// Tabs and groups of one window at a point in time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub window_id: WindowId,
    #[serde(default)]
    pub tabs: Vec<Tab>,
    #[serde(default)]
    pub groups: Vec<Group>,
    /// Browser window state: "normal", "maximized", "fullscreen", ...
    #[serde(default = "normal_window_state")]
    pub window_state: String,
}

fn normal_window_state() -> String {
    "normal".to_string()
}

impl Snapshot {
    pub fn new(window_id: WindowId, tabs: Vec<Tab>, groups: Vec<Group>) -> Self {
        Self {
            window_id,
            tabs,
            groups,
            window_state: normal_window_state(),
        }
    }

    pub fn tab(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// Tabs in full order (pinned first, then by index)
    pub fn full_order(&self) -> Vec<Tab> {
        sort_tabs(&self.tabs)
    }
}

/// Sort tabs into the full order: pinned tabs first, then by index.
///
/// The sort is stable, so tabs sharing an index keep their input order.
pub fn sort_tabs(tabs: &[Tab]) -> Vec<Tab> {
    let mut sorted = tabs.to_vec();
    sorted.sort_by(|a, b| b.pinned.cmp(&a.pinned).then(a.index.cmp(&b.index)));
    sorted
}

/// Case-insensitive substring match over title and URL.
///
/// `query` is expected lowercased and trimmed; an empty query matches
/// every tab.
pub fn matches_search(tab: &Tab, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let haystack = format!("{} {}", tab.title, tab.url).to_lowercase();
    haystack.contains(query)
}

/// Normalize raw search box text into a query for [`matches_search`]
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_puts_pinned_first_then_index() {
        let tabs = vec![
            Tab::new(1, 3),
            Tab::new(2, 0).pinned(),
            Tab::new(3, 1),
            Tab::new(4, 2).pinned(),
        ];
        let ids: Vec<TabId> = sort_tabs(&tabs).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 4, 3, 1]);
    }

    #[test]
    fn search_matches_title_or_url_case_insensitively() {
        let tab = Tab::new(1, 0)
            .with_title("Rust Book")
            .with_url("https://doc.rust-lang.org");
        assert!(matches_search(&tab, ""));
        assert!(matches_search(&tab, "rust book"));
        assert!(matches_search(&tab, "lang.org"));
        assert!(!matches_search(&tab, "python"));
        assert_eq!(normalize_query("  DOC "), "doc");
    }

    #[test]
    fn display_title_fallbacks() {
        assert_eq!(Tab::new(1, 0).with_title("A").display_title(), "A");
        let blank = Tab::new(1, 0).with_title("  ").with_url("u");
        assert_eq!(blank.display_title(), "u");
        assert_eq!(Tab::new(1, 0).display_title(), "Untitled");
    }

    #[test]
    fn status_indicator_priority() {
        let mut tab = Tab::new(1, 0);
        assert_eq!(tab.status_indicator(), None);
        tab.status = TabStatus::Loading;
        assert_eq!(tab.status_indicator(), Some("\u{2026}"));
        tab.audible = true;
        assert_eq!(tab.status_indicator(), Some("\u{1F50A}"));
        tab.muted = true;
        assert_eq!(tab.status_indicator(), Some("\u{1F507}"));
    }

    #[test]
    fn snapshot_json_uses_browser_field_names() {
        let json = r#"{
            "windowId": 4,
            "tabs": [{"id": 7, "index": 0, "pinned": true, "groupId": 2, "favIconUrl": "x"}],
            "groups": [{"id": 2, "title": "Work", "color": "magenta"}]
        }"#;
        let snapshot: Snapshot = serde_json::from_str(json).expect("valid snapshot");
        assert_eq!(snapshot.window_id, 4);
        assert_eq!(snapshot.window_state, "normal");
        let tab = snapshot.tab(7).expect("tab present");
        assert!(tab.pinned);
        assert_eq!(tab.group_id, 2);
        assert_eq!(tab.fav_icon_url, "x");
        assert_eq!(snapshot.group(2).map(|g| g.color), Some(GroupColor::Grey));
    }

    #[test]
    fn missing_group_id_means_ungrouped() {
        let tab: Tab = serde_json::from_str(r#"{"id": 1, "index": 0}"#)
            .expect("valid tab");
        assert_eq!(tab.group_id, GROUP_NONE);
        assert!(!tab.is_grouped());
    }
}
