//! The responsive panel shell: breakpoint detection, visibility state,
//! global shortcuts, and the scroll-lock/focus side effects that hang off
//! panel state.

pub mod breakpoint;
pub mod controller;
pub mod focus;
pub mod scroll_lock;
pub mod shortcuts;

pub use breakpoint::{BreakpointMonitor, LayoutMode, DEFAULT_COMPACT_BELOW};
pub use controller::{DrawerPosition, PanelController, PanelState};
pub use focus::FocusManager;
pub use scroll_lock::ScrollLockManager;
pub use shortcuts::ShellCommand;
