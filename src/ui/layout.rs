use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::shell::breakpoint::LayoutMode;
use crate::shell::controller::{DrawerPosition, PanelState};

/// Fixed sidebar width on wide layouts
pub const SIDEBAR_WIDTH: u16 = 32;
/// Height of the top (wide) and bottom (compact) navbars
pub const NAVBAR_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    /// Top bar on wide layouts, bottom bar on compact ones
    pub navbar: Rect,
    /// Zero-width unless the layout is wide and the panel is open
    pub sidebar: Rect,
    pub content: Rect,
    /// Zero-sized unless the layout is compact and the panel is open
    pub drawer: Rect,
    pub status_line: Rect,
}

pub fn areas(size: Rect, mode: LayoutMode, panel: PanelState) -> UiAreas {
    match mode {
        LayoutMode::Wide => wide(size, panel),
        LayoutMode::Compact => compact(size, panel),
    }
}

fn wide(size: Rect, panel: PanelState) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAVBAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(size);

    let sidebar_width = if panel.is_open { SIDEBAR_WIDTH } else { 0 };
    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
        .split(vertical[1]);

    UiAreas {
        size,
        navbar: vertical[0],
        sidebar: main[0],
        content: main[1],
        drawer: Rect::default(),
        status_line: vertical[2],
    }
}

fn compact(size: Rect, panel: PanelState) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(NAVBAR_HEIGHT),
            Constraint::Length(1),
        ])
        .split(size);

    let content = vertical[0];
    let drawer = if panel.is_open {
        drawer_rect(content, panel)
    } else {
        Rect::default()
    };

    UiAreas {
        size,
        navbar: vertical[1],
        sidebar: Rect::default(),
        content,
        drawer,
        status_line: vertical[2],
    }
}

/// The drawer overlays the content: anchored just above the bottom navbar
/// when positioned bottom, pinned to the left edge at full height when
/// positioned side.
fn drawer_rect(content: Rect, panel: PanelState) -> Rect {
    match panel.drawer_position {
        DrawerPosition::Bottom => {
            let height = if panel.is_expanded {
                content.height.saturating_mul(3) / 4
            } else {
                content.height / 3
            };
            let height = height.max(4).min(content.height);
            Rect {
                x: content.x,
                y: content.y + content.height - height,
                width: content.width,
                height,
            }
        }
        DrawerPosition::Side => {
            let width = SIDEBAR_WIDTH
                .min(content.width.saturating_mul(4) / 5)
                .min(content.width);
            Rect {
                x: content.x,
                y: content.y,
                width,
                height: content.height,
            }
        }
    }
}
