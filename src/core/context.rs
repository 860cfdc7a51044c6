//! Shared context passed to modules

use crate::shell::breakpoint::LayoutMode;
use crate::shell::controller::{DrawerPosition, PanelState};

/// Shared context available to all modules. The shell fields are synced
/// from their owners before every draw; the nav fields are owned here and
/// mutated by the panel surfaces.
#[derive(Debug)]
pub struct Context {
    /// Current layout mode
    pub mode: LayoutMode,

    /// Snapshot of the panel controller state
    pub panel: PanelState,

    /// Whether content scrolling is currently suppressed
    pub scroll_locked: bool,

    /// Whether keyboard focus is inside the panel
    pub panel_focused: bool,

    /// Index of the active nav item
    pub active_nav: usize,

    /// Panel cursor over the nav items
    pub nav_cursor: usize,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            mode: LayoutMode::Wide,
            panel: PanelState {
                is_open: true,
                drawer_position: DrawerPosition::Bottom,
                is_expanded: false,
            },
            scroll_locked: false,
            panel_focused: false,
            active_nav: 0,
            nav_cursor: 0,
        }
    }
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }
}
