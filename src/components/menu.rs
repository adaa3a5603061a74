use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{List, ListItem, ListState};

use crate::components::{Component, ComponentContext};
use crate::ui::UiFrame;

/// Vertical list of entries; Enter or a click activates the selected one.
pub struct MenuComponent {
    items: Vec<String>,
    selected: usize,
    offset: usize,
    last_area: Rect,
    activated: Option<usize>,
}

impl MenuComponent {
    pub fn new<T: Into<String>>(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            selected: 0,
            offset: 0,
            last_area: Rect::default(),
            activated: None,
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn set_item(&mut self, index: usize, label: impl Into<String>) {
        if let Some(item) = self.items.get_mut(index) {
            *item = label.into();
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Index activated since the last call, if any.
    pub fn take_activated(&mut self) -> Option<usize> {
        self.activated.take()
    }

    fn bump_selection(&mut self, delta: isize) {
        if self.items.is_empty() {
            self.selected = 0;
            return;
        }
        if delta.is_negative() {
            self.selected = self.selected.saturating_sub(delta.unsigned_abs());
        } else {
            self.selected = (self.selected + delta as usize).min(self.items.len() - 1);
        }
    }

    fn keep_selected_in_view(&mut self, view: usize) {
        if view == 0 || self.items.is_empty() {
            self.offset = 0;
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + view {
            self.offset = self.selected + 1 - view;
        }
    }
}

impl Component for MenuComponent {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        self.last_area = area;
        if area.height == 0 || area.width == 0 {
            return;
        }
        let view = area.height as usize;
        self.keep_selected_in_view(view);
        let items = self
            .items
            .iter()
            .skip(self.offset)
            .take(view)
            .map(|item| ListItem::new(format!(" {item}")))
            .collect::<Vec<_>>();

        let mut state = ListState::default();
        if !self.items.is_empty() && self.selected >= self.offset {
            state.select(Some(self.selected - self.offset));
        }
        let highlight = if ctx.focused() {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default().add_modifier(Modifier::UNDERLINED)
        };
        let list = List::new(items)
            .style(Style::default().fg(ctx.theme().window_fg()))
            .highlight_style(highlight);
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn handle_event(&mut self, event: &Event, _ctx: &ComponentContext) -> bool {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.bump_selection(-1);
                    true
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.bump_selection(1);
                    true
                }
                KeyCode::Home => {
                    self.selected = 0;
                    true
                }
                KeyCode::End => {
                    self.selected = self.items.len().saturating_sub(1);
                    true
                }
                KeyCode::Enter => {
                    if !self.items.is_empty() {
                        self.activated = Some(self.selected);
                    }
                    true
                }
                _ => false,
            },
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let area = self.last_area;
                if mouse.row < area.y
                    || mouse.row >= area.bottom()
                    || mouse.column < area.x
                    || mouse.column >= area.right()
                {
                    return false;
                }
                let index = self.offset + (mouse.row - area.y) as usize;
                if index < self.items.len() {
                    self.selected = index;
                    self.activated = Some(index);
                }
                true
            }
            _ => false,
        }
    }
}
