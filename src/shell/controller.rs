//! Panel visibility state machine

use serde::Deserialize;

use crate::shell::breakpoint::LayoutMode;

/// Where the compact-mode drawer slides in from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawerPosition {
    Bottom,
    Side,
}

impl DrawerPosition {
    pub fn flipped(self) -> Self {
        match self {
            DrawerPosition::Bottom => DrawerPosition::Side,
            DrawerPosition::Side => DrawerPosition::Bottom,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DrawerPosition::Bottom => "bottom",
            DrawerPosition::Side => "side",
        }
    }
}

/// Snapshot of the panel, the single source of truth every navigation
/// surface renders from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelState {
    pub is_open: bool,
    pub drawer_position: DrawerPosition,
    /// Drawn only while the bottom drawer is showing. Never coerced when
    /// the position changes, so switching away and back keeps the size
    /// the user picked.
    pub is_expanded: bool,
}

/// Owns `PanelState` and is its only mutator. Event sources call the
/// methods below; everything else reads the snapshot.
#[derive(Debug)]
pub struct PanelController {
    state: PanelState,
}

impl PanelController {
    /// Open on wide terminals, closed on compact ones.
    pub fn new(mode: LayoutMode) -> Self {
        Self {
            state: PanelState {
                is_open: mode == LayoutMode::Wide,
                drawer_position: DrawerPosition::Bottom,
                is_expanded: false,
            },
        }
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn drawer_position(&self) -> DrawerPosition {
        self.state.drawer_position
    }

    pub fn is_expanded(&self) -> bool {
        self.state.is_expanded
    }

    pub fn toggle_open(&mut self) {
        self.state.is_open = !self.state.is_open;
    }

    pub fn close(&mut self) {
        self.state.is_open = false;
    }

    pub fn set_drawer_position(&mut self, position: DrawerPosition) {
        self.state.drawer_position = position;
    }

    /// Updater form of [`set_drawer_position`](Self::set_drawer_position):
    /// derives the new position from the previous one.
    pub fn update_drawer_position<F>(&mut self, update: F)
    where
        F: FnOnce(DrawerPosition) -> DrawerPosition,
    {
        self.state.drawer_position = update(self.state.drawer_position);
    }

    pub fn toggle_expanded(&mut self) {
        self.state.is_expanded = !self.state.is_expanded;
    }

    /// Breakpoint-crossing hook: landing on `Wide` opens the panel,
    /// landing on `Compact` closes it. Callers only invoke this on actual
    /// crossings (and at mount), so manual toggles survive resizes that
    /// stay on one side of the threshold.
    pub fn on_mode_change(&mut self, mode: LayoutMode) {
        self.state.is_open = mode == LayoutMode::Wide;
    }
}
