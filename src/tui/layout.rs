//! Shell geometry: content area on top, tab bar at the bottom.
//!
//! Button width is `(W - MARGIN) / 5`, identical for every button. The
//! buttons sit edge to edge in registry order and the row is centred by
//! equal flexible space on both sides.

use ratatui::layout::{Constraint, Flex, Layout, Rect};

use crate::tab::{Tab, TabInfo};

/// Horizontal cells reserved for outer padding around the button row.
pub const MARGIN: u16 = 40;

/// Rows a single tab button occupies: indicator, icon, label.
pub const BUTTON_HEIGHT: u16 = 3;

/// Separator row plus the button rows.
pub const TAB_BAR_HEIGHT: u16 = 1 + BUTTON_HEIGHT;

/// Width of each tab button for a given total width.
pub fn button_width(total_width: u16) -> u16 {
    total_width.saturating_sub(MARGIN) / Tab::ALL.len() as u16
}

/// Rectangles for every part of the shell, derived from the frame area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellLayout {
    pub content: Rect,
    pub separator: Rect,
    /// One rect per registry entry, left to right.
    pub buttons: Vec<(Tab, Rect)>,
}

impl ShellLayout {
    pub fn new(area: Rect, tabs: &[TabInfo]) -> Self {
        let [content, separator, button_row] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT),
        ])
        .areas(area);

        let width = button_width(area.width);
        let cells = Layout::horizontal(tabs.iter().map(|_| Constraint::Length(width)))
            .flex(Flex::Center)
            .split(button_row);

        let buttons = tabs
            .iter()
            .map(|info| info.view)
            .zip(cells.iter().copied())
            .collect();

        ShellLayout {
            content,
            separator,
            buttons,
        }
    }

    /// The tab whose button contains the given cell, if any.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Tab> {
        self.buttons
            .iter()
            .find(|(_, rect)| {
                column >= rect.x
                    && column < rect.right()
                    && row >= rect.y
                    && row < rect.bottom()
            })
            .map(|(tab, _)| *tab)
    }
}

// ============================================================================
// TESTS
// ============================================================================
