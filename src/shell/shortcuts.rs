//! Global keyboard shortcuts for the shell

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::shell::controller::PanelState;

/// Controller actions a key press can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    ToggleOpen,
    Close,
    FlipDrawerPosition,
    /// Produced by the drawer's drag-handle handler, never by the global
    /// dispatcher.
    ToggleExpanded,
}

/// Map a key press to a shell command. The caller runs this against the
/// single event stream before any focused widget sees the key; returning
/// `Some` consumes it, so no later handler runs.
///
/// Esc only matches while the panel is open, leaving it available to
/// whatever else wants it when the panel is closed.
pub fn dispatch(key: KeyEvent, panel: PanelState) -> Option<ShellCommand> {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) if panel.is_open => Some(ShellCommand::Close),
        (KeyCode::Char('b'), mods) if mods.contains(KeyModifiers::CONTROL) => {
            Some(ShellCommand::ToggleOpen)
        }
        (KeyCode::Char('m'), mods) if mods.contains(KeyModifiers::CONTROL) => {
            Some(ShellCommand::FlipDrawerPosition)
        }
        _ => None,
    }
}
