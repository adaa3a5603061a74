//! The interactive desktop.
//!
//! `Shell` owns a [`Desktop`] and everything around it that the engine
//! treats as external: mounted panels, preferences, sound cues and the
//! session hooks of the privileged panel. It turns terminal input into
//! facade calls and draws the result.
//!
//! ```text
//! +-------------------------------------------+
//! |  wallpaper                                |
//! |   ┌ About ──────[_][□][x]  ┌ Notes ───... |
//! |   │ panel body           │ │              |
//! |   └──────────────────────┘ └───────────── |
//! | [i About] [✎ Notes]            taskbar    |
//! +-------------------------------------------+
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{Event, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::apps::{AppCatalog, CatalogError};
use crate::components::{Component, ComponentContext, SessionHooks, ShellRequest};
use crate::constants::BOTTOM_RESERVE;
use crate::decorator::{DefaultDecorator, HeaderAction, WindowDecorator};
use crate::desktop::{Desktop, DesktopEvent};
use crate::drivers::{InputDriver, OutputDriver};
use crate::event_loop::{ControlFlow, EventLoop};
use crate::geometry::Geometry;
use crate::keybindings::{Action, KeyBindings};
use crate::prefs::{DesktopPreferences, PreferenceStore};
use crate::sound::{CuePlayer, SoundCue};
use crate::ui::{CellScale, UiFrame, truncate_to_width};
use crate::window::WindowId;

const TASKBAR_ENTRY_MAX: usize = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Shutdown,
    Restart,
    Logout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarEntry {
    pub id: WindowId,
    pub x: u16,
    pub width: u16,
    pub label: String,
}

pub struct Shell {
    desktop: Desktop,
    catalog: AppCatalog,
    mounted: HashMap<WindowId, Box<dyn Component>>,
    decorator: Box<dyn WindowDecorator>,
    bindings: KeyBindings,
    scale: CellScale,
    screen: Rect,
    prefs: DesktopPreferences,
    store: Box<dyn PreferenceStore>,
    cues: Box<dyn CuePlayer>,
    session: Rc<RefCell<Vec<SessionAction>>>,
    initial_apps: Vec<String>,
    quit: bool,
}

impl Shell {
    pub fn new(
        catalog: AppCatalog,
        store: Box<dyn PreferenceStore>,
        cues: Box<dyn CuePlayer>,
        scale: CellScale,
        initial_apps: Vec<String>,
    ) -> Self {
        let prefs = DesktopPreferences::load(store.as_ref()).unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring stored preferences");
            DesktopPreferences::default()
        });
        Self {
            desktop: Desktop::default(),
            catalog,
            mounted: HashMap::new(),
            decorator: Box::new(DefaultDecorator),
            bindings: KeyBindings::desktop(),
            scale,
            screen: Rect::default(),
            prefs,
            store,
            cues,
            session: Rc::new(RefCell::new(Vec::new())),
            initial_apps,
            quit: false,
        }
    }

    pub fn desktop(&self) -> &Desktop {
        &self.desktop
    }

    pub fn preferences(&self) -> DesktopPreferences {
        self.prefs
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn is_mounted(&self, id: WindowId) -> bool {
        self.mounted.contains_key(&id)
    }

    /// Size the desktop to the terminal, play the startup cue and open the
    /// initial apps.
    pub fn start(&mut self, columns: u16, rows: u16) {
        tracing::info!(columns, rows, "session started");
        self.resize(columns, rows);
        self.cues.play(SoundCue::Startup);
        self.launch_initial();
        self.flush_events();
    }

    pub fn resize(&mut self, columns: u16, rows: u16) {
        self.screen = Rect::new(0, 0, columns, rows);
        self.desktop
            .set_viewport(self.scale.viewport_for(columns, rows));
    }

    /// Open a window for `app_id` and mount a fresh panel in it.
    pub fn launch(&mut self, app_id: &str) -> Result<WindowId, CatalogError> {
        let (entry, mut component) = self.catalog.launch(app_id)?;
        let id = self.desktop.create_window(entry.id, entry.title, entry.icon);
        if entry.privileged {
            component.install_session_hooks(self.session_hooks());
        }
        self.mounted.insert(id, component);
        Ok(id)
    }

    fn launch_initial(&mut self) {
        for app in self.initial_apps.clone() {
            if let Err(err) = self.launch(&app) {
                tracing::warn!(%err, "skipping initial app");
            }
        }
    }

    fn session_hooks(&self) -> SessionHooks {
        let shutdown = Rc::clone(&self.session);
        let restart = Rc::clone(&self.session);
        let logout = Rc::clone(&self.session);
        SessionHooks::new(
            move || shutdown.borrow_mut().push(SessionAction::Shutdown),
            move || restart.borrow_mut().push(SessionAction::Restart),
            move || logout.borrow_mut().push(SessionAction::Logout),
        )
    }

    /// Cells covered by a window, as drawn.
    pub fn window_rect(&self, id: WindowId) -> Option<Rect> {
        let geometry = self.desktop.display_geometry(id)?;
        self.scale.to_cells(geometry, self.screen)
    }

    /// Cells of the bottom strip reserved for the taskbar.
    pub fn taskbar_rect(&self) -> Option<Rect> {
        let viewport = self.desktop.viewport();
        let strip = Geometry::new(
            0,
            viewport.height - BOTTOM_RESERVE,
            viewport.width,
            BOTTOM_RESERVE,
        );
        self.scale.to_cells(strip, self.screen)
    }

    /// One entry per open window, in open order, left to right.
    pub fn taskbar_entries(&self) -> Vec<TaskbarEntry> {
        let Some(bar) = self.taskbar_rect() else {
            return Vec::new();
        };
        let mut x = bar.x.saturating_add(1);
        let mut entries = Vec::new();
        for record in self.desktop.windows() {
            if x >= bar.right() {
                break;
            }
            let text = if record.minimized {
                format!("({} {})", record.icon, record.title)
            } else {
                format!("{} {}", record.icon, record.title)
            };
            let label = truncate_to_width(&format!("[{text}]"), TASKBAR_ENTRY_MAX);
            let width = (label.chars().count() as u16).min(bar.right() - x);
            entries.push(TaskbarEntry {
                id: record.id,
                x,
                width,
                label,
            });
            x = x.saturating_add(width + 1);
        }
        entries
    }

    /// Topmost visible window whose drawn cells include `(column, row)`.
    pub fn window_at_cell(&self, column: u16, row: u16) -> Option<WindowId> {
        self.desktop
            .stacking_order()
            .into_iter()
            .rev()
            .find(|id| {
                self.window_rect(*id).is_some_and(|rect| {
                    column >= rect.x
                        && column < rect.right()
                        && row >= rect.y
                        && row < rect.bottom()
                })
            })
    }

    fn context_for(&self, id: WindowId) -> ComponentContext {
        ComponentContext::new(
            self.desktop.active() == Some(id),
            self.prefs.theme,
            self.prefs.wallpaper,
        )
    }

    pub fn handle_event(&mut self, event: &Event) -> ControlFlow {
        match event {
            Event::Resize(columns, rows) => self.resize(*columns, *rows),
            Event::Key(key) => self.handle_key(key, event),
            Event::Mouse(mouse) => self.handle_mouse(mouse, event),
            _ => {}
        }
        self.process_session();
        self.flush_events();
        if self.quit {
            ControlFlow::Quit
        } else {
            ControlFlow::Continue
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, event: &Event) {
        if let Some(action) = self.bindings.action_for_key(key) {
            self.perform(action);
            return;
        }
        if let Some(id) = self.desktop.active() {
            self.forward(id, event);
        }
    }

    fn perform(&mut self, action: Action) {
        let active = self.desktop.active();
        match action {
            Action::Quit => self.quit = true,
            Action::LaunchNotes => {
                if let Err(err) = self.launch("notes") {
                    tracing::warn!(%err, "launch failed");
                }
            }
            Action::CloseWindow => {
                if let Some(id) = active {
                    self.desktop.close_window(id);
                }
            }
            Action::MinimizeWindow => {
                if let Some(id) = active {
                    self.desktop.minimize_window(id);
                }
            }
            Action::ToggleMaximize => {
                if let Some(id) = active {
                    self.desktop.maximize_window(id);
                }
            }
            Action::CycleNextWindow => {
                self.desktop.focus_next(true);
            }
            Action::CyclePrevWindow => {
                self.desktop.focus_next(false);
            }
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent, event: &Event) {
        let (px, py) = self.scale.cell_center(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.press(mouse.column, mouse.row, px, py, event)
            }
            MouseEventKind::Drag(MouseButton::Left) if self.desktop.drag_session().is_some() => {
                self.desktop.drag(px, py);
            }
            MouseEventKind::Up(_) => {
                self.desktop.end_drag();
                if let Some(id) = self.desktop.active() {
                    self.forward(id, event);
                }
            }
            _ => {
                if let Some(id) = self.desktop.active() {
                    self.forward(id, event);
                }
            }
        }
    }

    fn press(&mut self, column: u16, row: u16, px: i32, py: i32, event: &Event) {
        if let Some(bar) = self.taskbar_rect()
            && row >= bar.y
            && row < bar.bottom()
        {
            let hit = self
                .taskbar_entries()
                .into_iter()
                .find(|entry| column >= entry.x && column < entry.x + entry.width);
            if let Some(entry) = hit {
                self.desktop.focus_window(entry.id);
            }
            return;
        }

        let Some(id) = self.window_at_cell(column, row) else {
            return;
        };
        let Some(rect) = self.window_rect(id) else {
            return;
        };
        match self.decorator.hit_test(rect, column, row) {
            HeaderAction::Minimize => {
                self.desktop.minimize_window(id);
            }
            HeaderAction::Maximize => {
                self.desktop.maximize_window(id);
            }
            HeaderAction::Close => {
                self.desktop.close_window(id);
            }
            HeaderAction::Drag => {
                self.desktop.focus_window(id);
                if let Some(record) = self.desktop.window(id) {
                    let offset_x = px - record.geometry.x;
                    let offset_y = py - record.geometry.y;
                    self.desktop.start_drag(id, offset_x, offset_y);
                }
            }
            HeaderAction::None => {
                self.desktop.focus_window(id);
                self.forward(id, event);
            }
        }
    }

    fn forward(&mut self, id: WindowId, event: &Event) {
        let ctx = self.context_for(id);
        let Some(component) = self.mounted.get_mut(&id) else {
            return;
        };
        component.handle_event(event, &ctx);
        if let Some(request) = component.take_request() {
            self.apply_request(request);
        }
    }

    fn apply_request(&mut self, request: ShellRequest) {
        match request {
            ShellRequest::ToggleTheme => self.prefs.theme = self.prefs.theme.toggled(),
            ShellRequest::NextWallpaper => self.prefs.wallpaper = self.prefs.wallpaper.next(),
        }
        tracing::debug!(theme = %self.prefs.theme, wallpaper = %self.prefs.wallpaper, "appearance changed");
        if let Err(err) = self.prefs.save(self.store.as_mut()) {
            tracing::warn!(%err, "failed to save preferences");
        }
    }

    fn process_session(&mut self) {
        let actions: Vec<SessionAction> = self.session.borrow_mut().drain(..).collect();
        for action in actions {
            tracing::info!(?action, "session action");
            match action {
                SessionAction::Shutdown => self.quit = true,
                SessionAction::Restart => {
                    self.desktop.close_all();
                    self.launch_initial();
                }
                SessionAction::Logout => self.desktop.close_all(),
            }
        }
    }

    fn flush_events(&mut self) {
        for event in self.desktop.take_events() {
            if let DesktopEvent::Closed(id) = event {
                self.mounted.remove(&id);
            }
            if let Some(cue) = SoundCue::for_event(event) {
                self.cues.play(cue);
            }
        }
    }

    /// Play the shutdown cue. Called once when the session ends.
    pub fn finish(&mut self) {
        tracing::info!(windows = self.desktop.len(), "session ended");
        self.cues.play(SoundCue::Shutdown);
    }

    pub fn render(&mut self, frame: &mut UiFrame<'_>) {
        let theme = self.prefs.theme;
        self.render_wallpaper(frame);

        let active = self.desktop.active();
        for id in self.desktop.stacking_order() {
            let (Some(rect), Some(record)) = (self.window_rect(id), self.desktop.window(id)) else {
                continue;
            };
            let title = format!("{} {}", record.icon, record.title);
            let focused = active == Some(id);
            self.decorator
                .render_window(frame, rect, &title, focused, theme);
            let content = self.decorator.content_rect(rect);
            let ctx = self.context_for(id);
            if let Some(component) = self.mounted.get_mut(&id) {
                component.render(frame, content, &ctx);
            }
        }

        self.render_taskbar(frame);
    }

    fn render_wallpaper(&self, frame: &mut UiFrame<'_>) {
        let theme = self.prefs.theme;
        let wallpaper = self.prefs.wallpaper;
        let area = frame.area();
        let style = Style::default()
            .bg(theme.desktop_bg())
            .fg(theme.wallpaper_fg());
        let buffer = frame.buffer_mut();
        for row in area.y..area.bottom() {
            for column in area.x..area.right() {
                if let Some(cell) = buffer.cell_mut((column, row)) {
                    cell.set_char(wallpaper.glyph_at(column, row));
                    cell.set_style(style);
                }
            }
        }
    }

    fn render_taskbar(&self, frame: &mut UiFrame<'_>) {
        let Some(bar) = self.taskbar_rect() else {
            return;
        };
        let theme = self.prefs.theme;
        let base = Style::default().bg(theme.taskbar_bg()).fg(theme.taskbar_fg());
        frame.fill(bar, " ", base);
        let active = self.desktop.active();
        for entry in self.taskbar_entries() {
            let style = if active == Some(entry.id) {
                base.bg(theme.taskbar_active_bg())
                    .add_modifier(Modifier::BOLD)
            } else {
                base
            };
            frame.set_str(entry.x, bar.y, &entry.label, entry.width, style);
        }
    }
}

/// Run a shell on the given drivers until it quits.
pub fn run<I, O>(shell: &mut Shell, input: I, output: &mut O, poll: Duration) -> io::Result<()>
where
    I: InputDriver,
    O: OutputDriver,
{
    output.enter()?;
    let (columns, rows) = output.size()?;
    shell.start(columns, rows);

    let mut event_loop = EventLoop::new(input, poll);
    let result = event_loop.run(|_, event| match event {
        Some(event) => Ok(shell.handle_event(&event)),
        None => {
            output.draw(|mut frame| shell.render(&mut frame))?;
            Ok(if shell.should_quit() {
                ControlFlow::Quit
            } else {
                ControlFlow::Continue
            })
        }
    });

    shell.finish();
    output.exit()?;
    result
}
