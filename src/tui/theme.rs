//! TUI color semantics and style constants.
//!
//! Color semantics:
//! - Blue: the active tab (accent)
//! - Gray: inactive tabs
//! - Dark gray: the separator above the tab bar

use ratatui::style::{Color, Modifier, Style};

/// Accent color for the active tab and its indicator bar.
pub const ACCENT: Color = Color::Blue;

/// Active tab button. Bold stands in for the drop shadow.
pub const STYLE_ACTIVE: Style = Style::new().fg(ACCENT).add_modifier(Modifier::BOLD);

/// Inactive tab button.
pub const STYLE_INACTIVE: Style = Style::new().fg(Color::Gray);

/// Separator line spanning the width above the buttons.
pub const STYLE_SEPARATOR: Style = Style::new().fg(Color::DarkGray);

/// Placeholder content text.
pub const STYLE_CONTENT: Style = Style::new().fg(Color::White);

/// Glyph repeated across a button to draw the active indicator bar.
pub const INDICATOR_GLYPH: &str = "▔";

/// Glyph repeated across the full width for the separator.
pub const SEPARATOR_GLYPH: &str = "─";
