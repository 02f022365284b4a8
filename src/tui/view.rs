//! Pure rendering: map App state to ratatui widgets.
//!
//! The content area shows the placeholder for the selected tab. Below it a
//! separator spans the full width, then one [`TabButton`] per registry entry.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tab::Tab;

use super::button::TabButton;
use super::layout::ShellLayout;
use super::state::App;
use super::theme;

// ============================================================================
// DISPATCH
// ============================================================================

/// Placeholder content for each screen.
pub fn placeholder_text(tab: Tab) -> &'static str {
    match tab {
        Tab::Home => "Home",
        Tab::Feed => "Feed",
        Tab::Add => "Add",
        Tab::Account => "Account",
        Tab::Settings => "Settings",
    }
}

/// Render the whole shell to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let layout = ShellLayout::new(frame.area(), &app.tabs);

    frame.render_widget(render_content(app.selection.current()), layout.content);
    frame.render_widget(render_separator(layout.separator), layout.separator);

    // Layout rects are built from app.tabs, so the two zip in step
    for (info, (_, rect)) in app.tabs.iter().zip(&layout.buttons) {
        frame.render_widget(TabButton::new(info, &app.selection), *rect);
    }
}

// ============================================================================
// PARTS
// ============================================================================

fn render_content(tab: Tab) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        placeholder_text(tab),
        theme::STYLE_CONTENT,
    )))
    .alignment(Alignment::Center)
}

fn render_separator(area: Rect) -> Paragraph<'static> {
    Paragraph::new(Span::styled(
        theme::SEPARATOR_GLYPH.repeat(area.width as usize),
        theme::STYLE_SEPARATOR,
    ))
}

// ============================================================================
// TESTS
// ============================================================================
