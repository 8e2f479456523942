use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::ui::theme::Theme;

pub struct BarSlot {
    pub label: String,
    pub focused: bool,
    pub pressed: bool,
}

pub struct ControlBar<'a> {
    pub position_secs: u64,
    pub duration_secs: u64,
    pub slots: Vec<BarSlot>,
    pub theme: &'a Theme,
}

pub fn format_clock(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

impl Widget for &ControlBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let clock = format!(
            " {} / {} ",
            format_clock(self.position_secs),
            format_clock(self.duration_secs.max(self.position_secs)),
        );

        let mut spans: Vec<Span> = vec![Span::styled(
            clock.clone(),
            Style::default().fg(colors.fg()),
        )];

        // Progress track fills the space the clock and buttons leave over
        let buttons_width: usize = self
            .slots
            .iter()
            .map(|slot| slot.label.chars().count() + 3)
            .sum();
        let track_width = (inner.width as usize)
            .saturating_sub(clock.chars().count() + buttons_width + 1);
        if track_width > 2 {
            let ratio = if self.duration_secs == 0 {
                0.0
            } else {
                (self.position_secs as f64 / self.duration_secs as f64).min(1.0)
            };
            let filled = (track_width as f64 * ratio).round() as usize;
            spans.push(Span::styled(
                "━".repeat(filled),
                Style::default().fg(colors.bar_filled()),
            ));
            spans.push(Span::styled(
                "─".repeat(track_width - filled),
                Style::default().fg(colors.bar_empty()),
            ));
            spans.push(Span::raw(" "));
        }

        for slot in &self.slots {
            let style = if slot.focused {
                Style::default()
                    .fg(colors.focus_fg())
                    .bg(colors.focus_bg())
                    .add_modifier(Modifier::BOLD)
            } else if slot.pressed {
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.fg())
            };
            spans.push(Span::styled(format!("[{}]", slot.label), style));
            spans.push(Span::raw(" "));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_formats_minutes_and_seconds() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(59), "0:59");
        assert_eq!(format_clock(61), "1:01");
        assert_eq!(format_clock(3600), "60:00");
    }
}
