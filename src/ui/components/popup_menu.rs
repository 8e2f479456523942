use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};

use crate::menu::entry::{FocusTarget, MENU_TITLE_CLASS, MenuEntry};
use crate::menu::navigable::NavigableMenu;
use crate::ui::theme::Theme;

/// Renders an open `NavigableMenu` as a popup list. Pure presentation;
/// navigation state lives entirely in the menu.
pub struct PopupMenu<'a> {
    pub menu: &'a NavigableMenu,
    pub theme: &'a Theme,
    /// Current global focus, used to highlight the focused row.
    pub focus: Option<FocusTarget>,
}

impl PopupMenu<'_> {
    pub fn desired_height(&self) -> u16 {
        self.menu.len() as u16 + 2
    }

    pub fn desired_width(&self) -> u16 {
        let widest = self
            .menu
            .entries()
            .iter()
            .map(|entry| entry.borrow().label().chars().count())
            .max()
            .unwrap_or(0);
        widest as u16 + 6
    }
}

impl Widget for &PopupMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        Clear.render(area, buf);
        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.menu_bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = Vec::with_capacity(self.menu.len());
        for shared in self.menu.entries() {
            let entry = shared.borrow();

            if entry.class_name().contains(MENU_TITLE_CLASS) {
                lines.push(Line::from(Span::styled(
                    format!(" {} ", entry.label()),
                    Style::default()
                        .fg(colors.menu_title())
                        .add_modifier(Modifier::BOLD),
                )));
                continue;
            }

            let focused = self.focus == Some(entry.focus_target());
            let marker = if entry.is_selected() { "●" } else { " " };
            let text = format!(" {marker} {} ", entry.label());

            let style = if focused {
                Style::default()
                    .fg(colors.focus_fg())
                    .bg(colors.focus_bg())
                    .add_modifier(Modifier::BOLD)
            } else if entry.is_selected() {
                Style::default().fg(colors.selected())
            } else if entry.selectable() {
                Style::default().fg(colors.fg())
            } else {
                Style::default().fg(colors.dim())
            };
            lines.push(Line::from(Span::styled(text, style)));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
