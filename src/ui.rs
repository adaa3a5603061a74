//! UiFrame: a thin wrapper around `ratatui::Frame` that clamps drawing to the
//! visible area, plus the mapping between desktop pixels and terminal cells.
//!
//! Window geometry lives in pixel space so layout math is independent of the
//! terminal. Each cell stands for a `cell_width`×`cell_height` block of
//! pixels and is sampled at its centre: a cell belongs to a window exactly
//! when its centre lies inside the window's pixel rectangle.
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{StatefulWidget, Widget};

use crate::geometry::{Geometry, Viewport};

pub struct UiFrame<'a> {
    area: Rect,
    buffer: &'a mut Buffer,
}

impl<'a> UiFrame<'a> {
    pub fn new(frame: &'a mut Frame<'_>) -> Self {
        let area = frame.area();
        let buffer = frame.buffer_mut();
        Self { area, buffer }
    }

    /// Construct a `UiFrame` directly from an area and buffer. Used by tests
    /// and offscreen rendering.
    pub fn from_parts(area: Rect, buffer: &'a mut Buffer) -> Self {
        Self { area, buffer }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        self.buffer
    }

    fn clip_rect(&self, rect: Rect) -> Option<Rect> {
        let clipped = rect.intersection(self.area);
        if clipped.width == 0 || clipped.height == 0 {
            None
        } else {
            Some(clipped)
        }
    }

    pub fn render_widget<W>(&mut self, widget: W, area: Rect)
    where
        W: Widget,
    {
        if let Some(clipped) = self.clip_rect(area) {
            widget.render(clipped, self.buffer);
        }
    }

    pub fn render_stateful_widget<W>(&mut self, widget: W, area: Rect, state: &mut W::State)
    where
        W: StatefulWidget,
    {
        if let Some(clipped) = self.clip_rect(area) {
            widget.render(clipped, self.buffer, state);
        }
    }

    /// Paint every cell of `rect` with `symbol` in `style`.
    pub fn fill(&mut self, rect: Rect, symbol: &str, style: Style) {
        let Some(clipped) = self.clip_rect(rect) else {
            return;
        };
        for y in clipped.y..clipped.bottom() {
            for x in clipped.x..clipped.right() {
                if let Some(cell) = self.buffer.cell_mut((x, y)) {
                    cell.set_symbol(symbol);
                    cell.set_style(style);
                }
            }
        }
    }

    /// Write `text` starting at `(x, y)`, cut at `max_width` cells and at the
    /// frame edge.
    pub fn set_str(&mut self, x: u16, y: u16, text: &str, max_width: u16, style: Style) {
        if y < self.area.y || y >= self.area.bottom() || x < self.area.x || x >= self.area.right()
        {
            return;
        }
        let available = self.area.right().saturating_sub(x).min(max_width);
        if available == 0 {
            return;
        }
        let text = truncate_to_width(text, available as usize);
        self.buffer.set_string(x, y, text, style);
    }
}

pub fn truncate_to_width(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    value.chars().take(width).collect()
}

/// How many desktop pixels one terminal cell covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellScale {
    pub cell_width: i32,
    pub cell_height: i32,
}

impl CellScale {
    pub fn new(cell_width: i32, cell_height: i32) -> Self {
        Self {
            cell_width: cell_width.max(1),
            cell_height: cell_height.max(1),
        }
    }

    pub fn viewport_for(&self, columns: u16, rows: u16) -> Viewport {
        Viewport::new(
            columns as i32 * self.cell_width,
            rows as i32 * self.cell_height,
        )
    }

    /// Pixel position sampled for a pointer over `(column, row)`.
    pub fn cell_center(&self, column: u16, row: u16) -> (i32, i32) {
        (
            column as i32 * self.cell_width + self.cell_width / 2,
            row as i32 * self.cell_height + self.cell_height / 2,
        )
    }

    // first column whose centre is at or past `px`
    fn edge_x(&self, px: i32) -> i32 {
        (px - self.cell_width / 2 + self.cell_width - 1).div_euclid(self.cell_width)
    }

    fn edge_y(&self, px: i32) -> i32 {
        (px - self.cell_height / 2 + self.cell_height - 1).div_euclid(self.cell_height)
    }

    /// Cells covered by `geometry`, clipped to `bounds`. `None` when nothing
    /// is visible.
    pub fn to_cells(&self, geometry: Geometry, bounds: Rect) -> Option<Rect> {
        let left = self.edge_x(geometry.x).max(bounds.x as i32);
        let top = self.edge_y(geometry.y).max(bounds.y as i32);
        let right = self.edge_x(geometry.right()).min(bounds.right() as i32);
        let bottom = self.edge_y(geometry.bottom()).min(bounds.bottom() as i32);
        if right <= left || bottom <= top {
            return None;
        }
        Some(Rect {
            x: left as u16,
            y: top as u16,
            width: (right - left) as u16,
            height: (bottom - top) as u16,
        })
    }
}

impl Default for CellScale {
    fn default() -> Self {
        Self::new(10, 20)
    }
}
