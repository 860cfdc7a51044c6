//! Terminal-width breakpoint detection

/// Layout modes separated by the column breakpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Narrow terminal, navigation lives in a drawer
    Compact,
    /// Wide terminal, navigation lives in a fixed sidebar
    Wide,
}

/// Default breakpoint in terminal columns
pub const DEFAULT_COMPACT_BELOW: u16 = 80;

/// Watches the terminal width against a fixed threshold and reports
/// crossings between layout modes. The width at construction decides the
/// initial mode synchronously so dependents can seed their state before
/// the first draw.
#[derive(Debug)]
pub struct BreakpointMonitor {
    compact_below: u16,
    mode: LayoutMode,
}

impl BreakpointMonitor {
    /// `width` is the columns reported at startup; `None` means the size
    /// query failed, in which case the monitor falls back to `Wide`.
    pub fn new(width: Option<u16>, compact_below: u16) -> Self {
        let mode = match width {
            Some(width) => classify(width, compact_below),
            None => LayoutMode::Wide,
        };
        Self { compact_below, mode }
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// Feed a resize. Returns the new mode exactly when the width crossed
    /// the threshold; widths that stay on one side report nothing.
    pub fn observe(&mut self, width: u16) -> Option<LayoutMode> {
        let next = classify(width, self.compact_below);
        if next == self.mode {
            return None;
        }
        self.mode = next;
        Some(next)
    }
}

fn classify(width: u16, compact_below: u16) -> LayoutMode {
    if width < compact_below {
        LayoutMode::Compact
    } else {
        LayoutMode::Wide
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_mode_from_width() {
        let monitor = BreakpointMonitor::new(Some(120), 80);
        assert_eq!(monitor.mode(), LayoutMode::Wide);
        let monitor = BreakpointMonitor::new(Some(79), 80);
        assert_eq!(monitor.mode(), LayoutMode::Compact);
        let monitor = BreakpointMonitor::new(Some(80), 80);
        assert_eq!(monitor.mode(), LayoutMode::Wide);
    }

    #[test]
    fn test_falls_back_to_wide_without_a_size() {
        let monitor = BreakpointMonitor::new(None, 80);
        assert_eq!(monitor.mode(), LayoutMode::Wide);
    }

    #[test]
    fn test_observe_reports_each_crossing_once() {
        let mut monitor = BreakpointMonitor::new(Some(120), 80);
        assert_eq!(monitor.observe(100), None);
        assert_eq!(monitor.observe(60), Some(LayoutMode::Compact));
        assert_eq!(monitor.observe(50), None);
        assert_eq!(monitor.observe(80), Some(LayoutMode::Wide));
        assert_eq!(monitor.observe(200), None);
    }

    #[test]
    fn test_alternating_widths_alternate_modes() {
        let mut monitor = BreakpointMonitor::new(Some(100), 80);
        for _ in 0..3 {
            assert_eq!(monitor.observe(40), Some(LayoutMode::Compact));
            assert_eq!(monitor.observe(140), Some(LayoutMode::Wide));
        }
    }
}
