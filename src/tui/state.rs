//! TUI state algebra: pure types, zero effects.
//!
//! The selection is an explicit container owned by [`App`]. The content
//! dispatch and every tab button read it by reference; only
//! [`super::update::apply`] writes it.

use crate::tab::{registry, Tab, TabInfo};

// ============================================================================
// SELECTION
// ============================================================================

/// The single source of truth for which tab is active.
///
/// Exactly one tab is selected at any time. Starts on Home.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    current: Tab,
}

impl Default for Selection {
    fn default() -> Self {
        Selection { current: Tab::Home }
    }
}

impl Selection {
    pub fn current(&self) -> Tab {
        self.current
    }

    pub fn is_selected(&self, tab: Tab) -> bool {
        self.current == tab
    }

    /// Select `tab`. Returns false when it was already selected.
    pub fn set(&mut self, tab: Tab) -> bool {
        if self.current == tab {
            return false;
        }
        self.current = tab;
        true
    }
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// Tab registry, populated once on mount and never mutated.
    pub tabs: Vec<TabInfo>,

    /// Currently active tab.
    pub selection: Selection,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    /// Mount the shell: build the registry and select Home.
    pub fn new() -> Self {
        App {
            tabs: registry(),
            selection: Selection::default(),
            should_quit: false,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        App::new()
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key and mouse events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A tab button was activated (clicked).
    Activate(Tab),
    /// Activate the button at a 0-based position in the bar (number keys).
    ActivateAt(usize),
    /// Activate the button to the right of the current one, wrapping.
    Next,
    /// Activate the button to the left of the current one, wrapping.
    Previous,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Make this tab the selection.
    Select(Tab),
    /// Nothing observable changes.
    Unchanged,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TESTS
// ============================================================================
