//! A single tab button: indicator bar, icon, label.
//!
//! The look is a pure function of whether the button's tab is the current
//! selection. Activation itself is not handled here; the event loop maps a
//! click inside the button's rect to [`super::state::Action::Activate`].

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Widget;

use crate::symbols;
use crate::tab::TabInfo;

use super::state::Selection;
use super::theme;

/// Visual treatment of a button in one selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStyle {
    /// Icon and label style.
    pub text: Style,
    /// Whether the indicator bar is drawn (inactive buttons keep the row blank).
    pub indicator_visible: bool,
}

impl ButtonStyle {
    pub fn for_state(active: bool) -> Self {
        if active {
            ButtonStyle {
                text: theme::STYLE_ACTIVE,
                indicator_visible: true,
            }
        } else {
            ButtonStyle {
                text: theme::STYLE_INACTIVE,
                indicator_visible: false,
            }
        }
    }
}

/// Widget for one registry entry, reading the shared selection.
pub struct TabButton<'a> {
    pub info: &'a TabInfo,
    pub selection: &'a Selection,
}

impl<'a> TabButton<'a> {
    pub fn new(info: &'a TabInfo, selection: &'a Selection) -> Self {
        TabButton { info, selection }
    }

    pub fn is_active(&self) -> bool {
        self.selection.is_selected(self.info.view)
    }

    pub fn style(&self) -> ButtonStyle {
        ButtonStyle::for_state(self.is_active())
    }
}

impl Widget for TabButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let style = self.style();
        let rows = [
            if style.indicator_visible {
                Line::styled(theme::INDICATOR_GLYPH.repeat(area.width as usize), theme::ACCENT)
            } else {
                Line::raw("")
            },
            Line::styled(symbols::resolve(self.info.icon), style.text),
            Line::styled(self.info.name, style.text),
        ];

        for (offset, line) in rows.into_iter().enumerate() {
            let y = area.y + offset as u16;
            if y >= area.bottom() {
                break;
            }
            let row = Rect::new(area.x, y, area.width, 1);
            line.alignment(Alignment::Center).render(row, buf);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tab::{registry, Tab};
    use ratatui::style::Modifier;

    fn row_text(buf: &Buffer, area: Rect, y: u16) -> String {
        (area.x..area.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn active_style_shows_indicator() {
        let style = ButtonStyle::for_state(true);
        assert!(style.indicator_visible);
        assert_eq!(style.text.fg, Some(theme::ACCENT));
        assert!(style.text.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn inactive_style_hides_indicator() {
        let style = ButtonStyle::for_state(false);
        assert!(!style.indicator_visible);
        assert_eq!(style, ButtonStyle { text: theme::STYLE_INACTIVE, indicator_visible: false });
    }

    #[test]
    fn button_is_active_only_for_its_own_tab() {
        let tabs = registry();
        let mut selection = Selection::default();
        selection.set(Tab::Add);

        let active: Vec<Tab> = tabs
            .iter()
            .filter(|info| TabButton::new(info, &selection).is_active())
            .map(|info| info.view)
            .collect();
        assert_eq!(active, vec![Tab::Add]);
    }

    #[test]
    fn active_button_renders_indicator_icon_and_label() {
        let tabs = registry();
        let selection = Selection::default();
        let area = Rect::new(0, 0, 12, 3);
        let mut buf = Buffer::empty(area);

        TabButton::new(&tabs[0], &selection).render(area, &mut buf);

        assert_eq!(row_text(&buf, area, 0), "▔".repeat(12));
        assert!(row_text(&buf, area, 1).contains('☺'));
        assert!(row_text(&buf, area, 2).contains("Home"));
        assert_eq!(buf[(0, 0)].fg, theme::ACCENT);
    }

    #[test]
    fn inactive_button_leaves_indicator_row_blank() {
        let tabs = registry();
        let selection = Selection::default();
        let area = Rect::new(0, 0, 12, 3);
        let mut buf = Buffer::empty(area);

        TabButton::new(&tabs[1], &selection).render(area, &mut buf);

        assert_eq!(row_text(&buf, area, 0).trim(), "");
        assert!(row_text(&buf, area, 2).contains("Feed"));
    }

    #[test]
    fn zero_width_area_renders_nothing() {
        let tabs = registry();
        let selection = Selection::default();
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 3));

        TabButton::new(&tabs[0], &selection).render(Rect::new(0, 0, 0, 3), &mut buf);

        assert_eq!(buf, Buffer::empty(Rect::new(0, 0, 4, 3)));
    }
}
