//! Tab identities and the registry that orders them.
//!
//! The tab set is closed: every match on [`Tab`] is exhaustive, so adding a
//! variant fails to compile until the content dispatch and the key table
//! know about it. Left-to-right order is decided by [`registry`] alone.

use std::fmt;

use serde::Serialize;

// ============================================================================
// TAB
// ============================================================================

/// One of the fixed application sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Home,
    Feed,
    Add,
    Account,
    Settings,
}

impl Tab {
    /// Every variant. Display order is the registry's, not this one's.
    pub const ALL: [Tab; 5] = [Tab::Home, Tab::Feed, Tab::Add, Tab::Account, Tab::Settings];

    /// Stable key used as the rendering identity of a tab.
    pub fn key(self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Feed => "feed",
            Tab::Add => "add",
            Tab::Account => "account",
            Tab::Settings => "settings",
        }
    }

    /// Display title, also the placeholder content for the tab's screen.
    pub fn title(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Feed => "Feed",
            Tab::Add => "Add",
            Tab::Account => "Account",
            Tab::Settings => "Settings",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

/// Display record pairing a tab with its icon and label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabInfo {
    /// Rendering identity, derived from `view` so it is the same on every run.
    pub id: &'static str,
    pub view: Tab,
    /// Platform symbol name, resolved to a glyph by [`crate::symbols`].
    pub icon: &'static str,
    pub name: &'static str,
}

impl TabInfo {
    fn new(view: Tab, icon: &'static str, name: &'static str) -> Self {
        TabInfo {
            id: view.key(),
            view,
            icon,
            name,
        }
    }
}

/// Build the ordered tab list. Called once when the shell mounts.
pub fn registry() -> Vec<TabInfo> {
    vec![
        TabInfo::new(Tab::Home, "person", "Home"),
        TabInfo::new(Tab::Feed, "envelope", "Feed"),
        TabInfo::new(Tab::Add, "plus", "Add"),
        TabInfo::new(Tab::Account, "star.fill", "Account"),
        TabInfo::new(Tab::Settings, "gear", "Settings"),
    ]
}

// ============================================================================
// TESTS
// ============================================================================
