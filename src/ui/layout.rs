use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Header, playback surface, control bar.
pub struct PlayerLayout {
    pub header: Rect,
    pub surface: Rect,
    pub control_bar: Rect,
}

impl PlayerLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(area);

        Self {
            header: vertical[0],
            surface: vertical[1],
            control_bar: vertical[2],
        }
    }
}

/// Place a popup of the requested size directly above the control bar,
/// left-aligned on `anchor_x` (the triggering button's column) and clamped
/// inside `area`.
pub fn anchored_popup(area: Rect, anchor_x: u16, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height.saturating_sub(3));

    let max_x = area.right().saturating_sub(width);
    let x = anchor_x.clamp(area.x, max_x.max(area.x));

    // Bottom edge sits on top of the control bar
    let bottom = area.bottom().saturating_sub(3);
    let y = bottom.saturating_sub(height).max(area.y);

    Rect::new(x, y, width, height)
}

/// Center a fixed-size panel inside `area`, shrinking it to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_layout_partitions_the_area() {
        let layout = PlayerLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.control_bar.height, 3);
        assert_eq!(layout.surface.height, 20);
        assert_eq!(layout.control_bar.y, 21);
    }

    #[test]
    fn popup_sits_above_the_control_bar() {
        let area = Rect::new(0, 0, 80, 24);
        let popup = anchored_popup(area, 10, 24, 8);
        assert_eq!(popup.bottom(), 21);
        assert_eq!(popup.x, 10);
        assert_eq!(popup.width, 24);
    }

    #[test]
    fn popup_clamps_to_the_right_edge() {
        let area = Rect::new(0, 0, 40, 24);
        let popup = anchored_popup(area, 35, 24, 8);
        assert_eq!(popup.right(), 40);
    }

    #[test]
    fn popup_shrinks_on_tiny_screens() {
        let area = Rect::new(0, 0, 10, 6);
        let popup = anchored_popup(area, 0, 24, 20);
        assert!(popup.width <= area.width);
        assert!(popup.height <= area.height);
    }
}
