//! Content scroll lock for the compact-mode drawer

use tracing::debug;

use crate::shell::breakpoint::LayoutMode;

/// Suppresses content scrolling while the drawer covers the content on a
/// compact terminal. The lock is engaged exactly when `(mode, open)` is
/// `(Compact, true)`; every other combination leaves the content free.
///
/// Input handlers consult [`is_engaged`](Self::is_engaged) before applying
/// wheel or page-key scrolling.
#[derive(Debug, Default)]
pub struct ScrollLockManager {
    engaged: bool,
}

impl ScrollLockManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute from the current `(mode, open)` pair. Called after every
    /// panel mutation and on every resize, so the lock cannot go stale
    /// when a resize changes the mode out from under a crossing
    /// notification.
    pub fn sync(&mut self, mode: LayoutMode, is_open: bool) {
        let engaged = mode == LayoutMode::Compact && is_open;
        if engaged != self.engaged {
            self.engaged = engaged;
            debug!(engaged, "scroll lock");
        }
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    /// Unconditional release, safe to call any number of times and in any
    /// state. Teardown must leave the content scrollable.
    pub fn release(&mut self) {
        if self.engaged {
            self.engaged = false;
            debug!("scroll lock released on teardown");
        }
    }
}

impl Drop for ScrollLockManager {
    fn drop(&mut self) {
        self.release();
    }
}
