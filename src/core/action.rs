//! Actions that modules can return to communicate with the app

use crate::shell::shortcuts::ShellCommand;

/// Actions returned by modules to communicate state changes
#[derive(Debug, Clone)]
pub enum Action {
    /// No action needed
    None,

    /// Forward a command to the panel controller
    Shell(ShellCommand),

    /// Show notification in the status line
    Notify(String, StatusLevel),
}

/// Notification levels for the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
}
