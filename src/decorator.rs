//! Window chrome: title bar, buttons and border, drawn in terminal cells.
//!
//! ```text
//! ▌ Notes             [_][□][x]
//! │                           │
//! └───────────────────────────┘
//! ```

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::theme::Theme;
use crate::ui::UiFrame;

const BUTTONS: &str = "[_][□][x]";
const BUTTON_WIDTH: u16 = 3;

/// What a press on the title bar means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    Minimize,
    Maximize,
    Close,
    Drag,
    None,
}

pub trait WindowDecorator: std::fmt::Debug {
    /// Draw chrome over `rect` (the whole window) and clear the body.
    fn render_window(
        &self,
        frame: &mut UiFrame<'_>,
        rect: Rect,
        title: &str,
        focused: bool,
        theme: Theme,
    );

    /// Area left for the window content.
    fn content_rect(&self, rect: Rect) -> Rect;

    fn hit_test(&self, rect: Rect, column: u16, row: u16) -> HeaderAction;
}

#[derive(Debug, Default)]
pub struct DefaultDecorator;

impl DefaultDecorator {
    fn buttons_origin(rect: Rect) -> Option<u16> {
        let width = BUTTON_WIDTH * 3;
        (rect.width > width + 2).then(|| rect.right() - width - 1)
    }
}

impl WindowDecorator for DefaultDecorator {
    fn render_window(
        &self,
        frame: &mut UiFrame<'_>,
        rect: Rect,
        title: &str,
        focused: bool,
        theme: Theme,
    ) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        let body_style = Style::default().bg(theme.window_bg()).fg(theme.window_fg());
        let border_style = Style::default().bg(theme.window_bg()).fg(theme.border());
        let header_style = if focused {
            Style::default()
                .bg(theme.header_active_bg())
                .fg(theme.header_fg())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .bg(theme.header_inactive_bg())
                .fg(theme.header_fg())
        };

        frame.fill(rect, " ", body_style);
        let header = Rect { height: 1, ..rect };
        frame.fill(header, " ", header_style);

        let buttons_x = Self::buttons_origin(rect);
        let title_room = buttons_x
            .map(|x| x.saturating_sub(rect.x + 1))
            .unwrap_or(rect.width.saturating_sub(1));
        frame.set_str(rect.x + 1, rect.y, title, title_room.saturating_sub(1), header_style);
        if let Some(x) = buttons_x {
            frame.set_str(x, rect.y, BUTTONS, BUTTON_WIDTH * 3, header_style);
        }

        if rect.height < 2 {
            return;
        }
        let bottom = rect.bottom() - 1;
        let right = rect.right() - 1;
        for y in rect.y + 1..bottom {
            frame.set_str(rect.x, y, "│", 1, border_style);
            if rect.width > 1 {
                frame.set_str(right, y, "│", 1, border_style);
            }
        }
        for x in rect.x..=right {
            let symbol = if x == rect.x {
                "└"
            } else if x == right {
                "┘"
            } else {
                "─"
            };
            frame.set_str(x, bottom, symbol, 1, border_style);
        }
    }

    fn content_rect(&self, rect: Rect) -> Rect {
        Rect {
            x: rect.x.saturating_add(1),
            y: rect.y.saturating_add(1),
            width: rect.width.saturating_sub(2),
            height: rect.height.saturating_sub(2),
        }
    }

    fn hit_test(&self, rect: Rect, column: u16, row: u16) -> HeaderAction {
        if row != rect.y || column < rect.x || column >= rect.right() {
            return HeaderAction::None;
        }
        if let Some(origin) = Self::buttons_origin(rect)
            && column >= origin
            && column < origin + BUTTON_WIDTH * 3
        {
            return match (column - origin) / BUTTON_WIDTH {
                0 => HeaderAction::Minimize,
                1 => HeaderAction::Maximize,
                _ => HeaderAction::Close,
            };
        }
        HeaderAction::Drag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;

    #[test]
    fn hit_test_finds_buttons_and_drag_area() {
        let deco = DefaultDecorator;
        let rect = Rect::new(10, 5, 30, 10);
        let origin = rect.right() - 10;
        assert_eq!(deco.hit_test(rect, origin, 5), HeaderAction::Minimize);
        assert_eq!(deco.hit_test(rect, origin + 4, 5), HeaderAction::Maximize);
        assert_eq!(deco.hit_test(rect, origin + 8, 5), HeaderAction::Close);
        assert_eq!(deco.hit_test(rect, 12, 5), HeaderAction::Drag);
        assert_eq!(deco.hit_test(rect, 12, 6), HeaderAction::None);
        assert_eq!(deco.hit_test(rect, 9, 5), HeaderAction::None);
    }

    #[test]
    fn narrow_window_has_no_buttons() {
        let deco = DefaultDecorator;
        let rect = Rect::new(0, 0, 8, 4);
        assert_eq!(deco.hit_test(rect, 7, 0), HeaderAction::Drag);
    }

    #[test]
    fn render_draws_title_and_corners() {
        let area = Rect::new(0, 0, 30, 6);
        let mut buffer = Buffer::empty(area);
        {
            let mut frame = UiFrame::from_parts(area, &mut buffer);
            DefaultDecorator.render_window(&mut frame, area, "Notes", true, Theme::Dark);
        }
        assert_eq!(buffer.cell((1, 0)).map(|c| c.symbol()), Some("N"));
        assert_eq!(buffer.cell((0, 5)).map(|c| c.symbol()), Some("└"));
        assert_eq!(buffer.cell((29, 5)).map(|c| c.symbol()), Some("┘"));
        assert_eq!(buffer.cell((28, 0)).map(|c| c.symbol()), Some("]"));
    }

    #[test]
    fn content_rect_is_inset() {
        let rect = Rect::new(2, 2, 10, 6);
        assert_eq!(DefaultDecorator.content_rect(rect), Rect::new(3, 3, 8, 4));
    }
}
