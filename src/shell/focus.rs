//! Focus hand-off into the panel when it opens

/// Detects the closed-to-open edge of the panel so keyboard focus can be
/// moved into the panel container exactly once per opening. Redraws and
/// unrelated state changes re-sync with the same flag and must not steal
/// focus, so only the edge reports.
#[derive(Debug, Default)]
pub struct FocusManager {
    was_open: bool,
}

impl FocusManager {
    /// Starts with the panel considered closed, so a panel that mounts
    /// open grabs focus on the first sync.
    pub fn new() -> Self {
        Self::default()
    }

    /// True exactly when `is_open` went false to true since the last call.
    pub fn sync(&mut self, is_open: bool) -> bool {
        let opened = is_open && !self.was_open;
        self.was_open = is_open;
        opened
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_only_the_opening_edge() {
        let mut focus = FocusManager::new();
        assert!(focus.sync(true));
        assert!(!focus.sync(true));
        assert!(!focus.sync(false));
        assert!(focus.sync(true));
    }

    #[test]
    fn test_redraws_while_open_do_not_steal_focus() {
        let mut focus = FocusManager::new();
        assert!(focus.sync(true));
        for _ in 0..10 {
            assert!(!focus.sync(true));
        }
    }

    #[test]
    fn test_mounting_closed_reports_nothing() {
        let mut focus = FocusManager::new();
        assert!(!focus.sync(false));
        assert!(!focus.sync(false));
    }
}
