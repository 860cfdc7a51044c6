//! Mobile drawer adapter

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::core::{Action, Context, Module};
use crate::shell::controller::DrawerPosition;
use crate::shell::shortcuts::ShellCommand;
use crate::ui::nav::{self, Glyph};

/// Compact-mode drawer. The bottom variant leads with a drag-handle row;
/// Enter or Space on that row resizes the drawer. That binding is the
/// handle's own local handler, kept out of the global dispatcher so the
/// rest of the app never competes with it.
#[derive(Debug, Default)]
pub struct Drawer {
    handle_focused: bool,
}

impl Drawer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the cursor to the drawer's first focus stop: the drag handle
    /// when the bottom drawer is showing, the top nav item otherwise.
    pub fn focus_top(&mut self, has_handle: bool) {
        self.handle_focused = has_handle;
    }

    pub fn handle_focused(&self) -> bool {
        self.handle_focused
    }
}

impl Module for Drawer {
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Action {
        let has_handle = ctx.panel.drawer_position == DrawerPosition::Bottom;
        if !has_handle {
            self.handle_focused = false;
        }

        if self.handle_focused {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    Action::Shell(ShellCommand::ToggleExpanded)
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.handle_focused = false;
                    ctx.nav_cursor = 0;
                    Action::None
                }
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') if has_handle && ctx.nav_cursor == 0 => {
                self.handle_focused = true;
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                nav::cursor_down(ctx);
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                nav::cursor_up(ctx);
                Action::None
            }
            KeyCode::Enter => nav::activate(ctx),
            _ => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        frame.render_widget(Clear, area);
        let block = Block::default().borders(Borders::ALL).title("Menu");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let has_handle = ctx.panel.drawer_position == DrawerPosition::Bottom;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(u16::from(has_handle)),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        if has_handle {
            let style = if self.handle_focused && ctx.panel_focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let hint = if ctx.panel.is_expanded {
                "━━━━ smaller ━━━━"
            } else {
                "━━━━ larger ━━━━"
            };
            frame.render_widget(
                Paragraph::new(hint).style(style).alignment(Alignment::Center),
                chunks[0],
            );
        }

        let close_hint = Paragraph::new(Line::from(Span::styled(
            format!("{} Esc closes ", Glyph::Close.symbol()),
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Right);
        frame.render_widget(close_hint, chunks[1]);

        let selected = (ctx.panel_focused && !self.handle_focused).then_some(ctx.nav_cursor);
        nav::draw_items(frame, chunks[2], ctx, selected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn compact_open_ctx(position: DrawerPosition) -> Context {
        let mut ctx = Context::new();
        ctx.mode = crate::shell::breakpoint::LayoutMode::Compact;
        ctx.panel.is_open = true;
        ctx.panel.drawer_position = position;
        ctx
    }

    #[test]
    fn test_enter_on_the_handle_resizes() {
        let mut drawer = Drawer::new();
        drawer.focus_top(true);
        let mut ctx = compact_open_ctx(DrawerPosition::Bottom);
        let action = drawer.handle_key(press(KeyCode::Enter), &mut ctx);
        assert!(matches!(action, Action::Shell(ShellCommand::ToggleExpanded)));
    }

    #[test]
    fn test_space_on_the_handle_resizes() {
        let mut drawer = Drawer::new();
        drawer.focus_top(true);
        let mut ctx = compact_open_ctx(DrawerPosition::Bottom);
        let action = drawer.handle_key(press(KeyCode::Char(' ')), &mut ctx);
        assert!(matches!(action, Action::Shell(ShellCommand::ToggleExpanded)));
    }

    #[test]
    fn test_moving_off_the_handle_reaches_the_items() {
        let mut drawer = Drawer::new();
        drawer.focus_top(true);
        let mut ctx = compact_open_ctx(DrawerPosition::Bottom);
        drawer.handle_key(press(KeyCode::Down), &mut ctx);
        assert!(!drawer.handle_focused());
        assert_eq!(ctx.nav_cursor, 0);
        let action = drawer.handle_key(press(KeyCode::Enter), &mut ctx);
        assert_eq!(ctx.active_nav, 0);
        assert!(matches!(action, Action::Notify(..)));
    }

    #[test]
    fn test_moving_up_from_the_top_item_returns_to_the_handle() {
        let mut drawer = Drawer::new();
        drawer.focus_top(true);
        let mut ctx = compact_open_ctx(DrawerPosition::Bottom);
        drawer.handle_key(press(KeyCode::Down), &mut ctx);
        drawer.handle_key(press(KeyCode::Up), &mut ctx);
        assert!(drawer.handle_focused());
    }

    #[test]
    fn test_side_drawer_has_no_handle() {
        let mut drawer = Drawer::new();
        drawer.focus_top(false);
        let mut ctx = compact_open_ctx(DrawerPosition::Side);
        let action = drawer.handle_key(press(KeyCode::Char(' ')), &mut ctx);
        assert!(matches!(action, Action::None));
        // Even a stale handle flag cannot resize a side drawer.
        drawer.focus_top(true);
        let action = drawer.handle_key(press(KeyCode::Enter), &mut ctx);
        assert_eq!(ctx.active_nav, 0);
        assert!(matches!(action, Action::Notify(..)));
    }
}
