//! Application state

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::core::{Context, StatusLevel};
use crate::shell::breakpoint::{BreakpointMonitor, LayoutMode};
use crate::shell::controller::{DrawerPosition, PanelController};
use crate::shell::focus::FocusManager;
use crate::shell::scroll_lock::ScrollLockManager;
use crate::shell::shortcuts::ShellCommand;
use crate::ui::content::Content;
use crate::ui::drawer::Drawer;
use crate::ui::sidebar::Sidebar;

/// Where key input is routed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Panel,
    Content,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

pub struct App {
    pub should_quit: bool,
    pub help_open: bool,
    pub focus: Focus,
    pub status: Option<StatusMessage>,

    /// Shared context
    pub ctx: Context,

    /// Shell: breakpoint, panel state, side effects
    pub monitor: BreakpointMonitor,
    pub panel: PanelController,
    pub scroll_lock: ScrollLockManager,
    pub focus_guard: FocusManager,

    /// Presentation modules
    pub sidebar: Sidebar,
    pub drawer: Drawer,
    pub content: Content,
}

impl App {
    pub fn new(monitor: BreakpointMonitor, drawer_position: Option<DrawerPosition>) -> Self {
        let mut panel = PanelController::new(monitor.mode());
        if let Some(position) = drawer_position {
            panel.set_drawer_position(position);
        }
        let mut app = Self {
            should_quit: false,
            help_open: false,
            focus: Focus::Content,
            status: None,
            ctx: Context::new(),
            monitor,
            panel,
            scroll_lock: ScrollLockManager::new(),
            focus_guard: FocusManager::new(),
            sidebar: Sidebar::new(),
            drawer: Drawer::new(),
            content: Content::new(),
        };
        app.sync_effects();
        app.sync_context();
        app
    }

    pub fn mode(&self) -> LayoutMode {
        self.monitor.mode()
    }

    /// Apply a controller action and recompute its dependents
    pub fn apply(&mut self, command: ShellCommand) {
        debug!(?command, "shell command");
        match command {
            ShellCommand::ToggleOpen => self.panel.toggle_open(),
            ShellCommand::Close => self.panel.close(),
            ShellCommand::FlipDrawerPosition => {
                self.panel.update_drawer_position(DrawerPosition::flipped);
            }
            ShellCommand::ToggleExpanded => self.panel.toggle_expanded(),
        }
        self.sync_effects();
    }

    pub fn on_resize(&mut self, width: u16) {
        if let Some(mode) = self.monitor.observe(width) {
            info!(width, ?mode, "breakpoint crossed");
            self.panel.on_mode_change(mode);
        }
        // The lock depends on the mode and a resize can change the mode,
        // so re-sync even when no crossing fired.
        self.sync_effects();
    }

    /// Recompute the side effects hanging off `(mode, open)`
    pub fn sync_effects(&mut self) {
        let mode = self.monitor.mode();
        let is_open = self.panel.is_open();
        self.scroll_lock.sync(mode, is_open);

        if self.focus_guard.sync(is_open) {
            self.focus = Focus::Panel;
            self.ctx.nav_cursor = 0;
            let has_handle = mode == LayoutMode::Compact
                && self.panel.drawer_position() == DrawerPosition::Bottom;
            self.drawer.focus_top(has_handle);
        }
        if !is_open && self.focus == Focus::Panel {
            self.focus = Focus::Content;
        }
    }

    /// Sync the shared context with app state
    pub fn sync_context(&mut self) {
        self.ctx.mode = self.monitor.mode();
        self.ctx.panel = self.panel.state();
        self.ctx.scroll_locked = self.scroll_lock.is_engaged();
        self.ctx.panel_focused = self.focus == Focus::Panel;
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Panel => Focus::Content,
            Focus::Content if self.panel.is_open() => Focus::Panel,
            Focus::Content => Focus::Content,
        };
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > Duration::from_secs(3) {
                self.status = None;
            }
        }
    }

    /// Undo every process-wide effect the shell owns. Idempotent; the
    /// scroll lock also clears itself on drop as a last resort.
    pub fn teardown(&mut self) {
        self.scroll_lock.release();
        info!("shell torn down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_at(width: u16) -> App {
        App::new(BreakpointMonitor::new(Some(width), 80), None)
    }

    #[test]
    fn test_mounting_wide_opens_and_focuses_the_panel() {
        let app = app_at(120);
        assert!(app.panel.is_open());
        assert_eq!(app.focus, Focus::Panel);
        assert!(!app.scroll_lock.is_engaged());
    }

    #[test]
    fn test_mounting_compact_starts_closed() {
        let app = app_at(60);
        assert!(!app.panel.is_open());
        assert_eq!(app.focus, Focus::Content);
        assert!(!app.scroll_lock.is_engaged());
    }

    #[test]
    fn test_crossing_breakpoints_drives_visibility_and_lock() {
        let mut app = app_at(120);
        assert!(app.panel.is_open());

        app.on_resize(60);
        assert!(!app.panel.is_open());

        app.apply(ShellCommand::ToggleOpen);
        assert!(app.panel.is_open());
        assert!(app.scroll_lock.is_engaged());

        app.apply(ShellCommand::Close);
        assert!(!app.panel.is_open());
        assert!(!app.scroll_lock.is_engaged());
    }

    #[test]
    fn test_resizes_without_a_crossing_keep_manual_state() {
        let mut app = app_at(60);
        app.apply(ShellCommand::ToggleOpen);
        assert!(app.panel.is_open());

        app.on_resize(70);
        app.on_resize(50);
        assert!(app.panel.is_open());
        assert!(app.scroll_lock.is_engaged());
    }

    #[test]
    fn test_flip_command_uses_the_updater_form() {
        let mut app = app_at(60);
        assert_eq!(app.panel.drawer_position(), DrawerPosition::Bottom);
        app.apply(ShellCommand::FlipDrawerPosition);
        assert_eq!(app.panel.drawer_position(), DrawerPosition::Side);
        app.apply(ShellCommand::FlipDrawerPosition);
        assert_eq!(app.panel.drawer_position(), DrawerPosition::Bottom);
    }

    #[test]
    fn test_expansion_survives_position_round_trip() {
        let mut app = app_at(60);
        app.apply(ShellCommand::ToggleOpen);
        app.apply(ShellCommand::ToggleExpanded);
        app.apply(ShellCommand::FlipDrawerPosition);
        app.apply(ShellCommand::FlipDrawerPosition);
        assert!(app.panel.is_expanded());
    }

    #[test]
    fn test_reopening_grabs_focus_again() {
        let mut app = app_at(120);
        assert_eq!(app.focus, Focus::Panel);
        app.cycle_focus();
        assert_eq!(app.focus, Focus::Content);
        // Unrelated syncs do not steal focus back.
        app.sync_effects();
        assert_eq!(app.focus, Focus::Content);

        app.apply(ShellCommand::Close);
        app.apply(ShellCommand::ToggleOpen);
        assert_eq!(app.focus, Focus::Panel);
    }

    #[test]
    fn test_closing_returns_focus_to_content() {
        let mut app = app_at(120);
        assert_eq!(app.focus, Focus::Panel);
        app.apply(ShellCommand::Close);
        assert_eq!(app.focus, Focus::Content);
    }

    #[test]
    fn test_cycle_focus_needs_an_open_panel() {
        let mut app = app_at(60);
        app.cycle_focus();
        assert_eq!(app.focus, Focus::Content);
        app.apply(ShellCommand::ToggleOpen);
        app.focus = Focus::Content;
        app.cycle_focus();
        assert_eq!(app.focus, Focus::Panel);
    }

    #[test]
    fn test_teardown_always_clears_the_lock() {
        let mut app = app_at(60);
        app.apply(ShellCommand::ToggleOpen);
        assert!(app.scroll_lock.is_engaged());
        app.teardown();
        assert!(!app.scroll_lock.is_engaged());
        app.teardown();
        assert!(!app.scroll_lock.is_engaged());
    }

    #[test]
    fn test_initial_drawer_position_override() {
        let app = App::new(BreakpointMonitor::new(Some(60), 80), Some(DrawerPosition::Side));
        assert_eq!(app.panel.drawer_position(), DrawerPosition::Side);
        assert!(!app.panel.is_open());
    }
}
