//! Desktop sidebar adapter

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::core::{Action, Context, Module};
use crate::ui::nav;

/// Fixed sidebar shown on wide layouts. It renders the shared nav list
/// and moves the shared cursor; panel visibility belongs to the
/// controller, not here.
#[derive(Debug, Default)]
pub struct Sidebar;

impl Sidebar {
    pub fn new() -> Self {
        Self
    }
}

impl Module for Sidebar {
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Action {
        match key.code {
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
        let block = Block::default().borders(Borders::RIGHT);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let selected = ctx.panel_focused.then_some(ctx.nav_cursor);
        nav::draw_items(frame, inner, ctx, selected);
    }
}
