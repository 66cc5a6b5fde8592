//! Dead-end bookkeeping for the turn loop.

use std::collections::HashSet;

use crate::core::types::Task;

/// Task ids already attempted since the listing last changed.
#[derive(Debug, Clone, Default)]
pub struct AttemptWindow {
    attempted: HashSet<String>,
}

impl AttemptWindow {
    pub fn record(&mut self, task_id: &str) {
        self.attempted.insert(task_id.to_string());
    }

    pub fn contains(&self, task_id: &str) -> bool {
        self.attempted.contains(task_id)
    }

    pub fn clear(&mut self) {
        self.attempted.clear();
    }

    /// Drop tasks already attempted in this window.
    pub fn retain_unattempted(&self, tasks: &mut Vec<Task>) {
        tasks.retain(|task| !self.contains(&task.id));
    }
}

/// Counts consecutive turns without a safe task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StallTracker {
    consecutive_skips: u32,
    max_skips_before_force: u32,
}

impl StallTracker {
    pub fn new(max_skips_before_force: u32) -> Self {
        Self {
            consecutive_skips: 0,
            max_skips_before_force,
        }
    }

    /// Record a turn with no safe task and return the new streak length.
    pub fn record_skip(&mut self) -> u32 {
        self.consecutive_skips = self.consecutive_skips.saturating_add(1);
        self.consecutive_skips
    }

    /// Whether the streak is long enough to force a fallback task.
    pub fn should_force(&self) -> bool {
        self.consecutive_skips >= self.max_skips_before_force
    }

    pub fn reset(&mut self) {
        self.consecutive_skips = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::risk::RiskBand;
    use crate::test_support::task;

    #[test]
    fn window_filters_attempted_ids_until_cleared() {
        let mut window = AttemptWindow::default();
        window.record("a");

        let mut tasks = vec![
            task("a", RiskBand::SureThing, 10),
            task("b", RiskBand::SureThing, 10),
        ];
        window.retain_unattempted(&mut tasks);
        let ids: Vec<&str> = tasks.iter().map(|task| task.id.as_str()).collect();
        assert_eq!(ids, vec!["b"]);

        window.clear();
        assert!(!window.contains("a"));
    }

    #[test]
    fn stall_tracker_forces_at_limit_and_resets() {
        let mut stall = StallTracker::new(3);
        assert_eq!(stall.record_skip(), 1);
        assert_eq!(stall.record_skip(), 2);
        assert!(!stall.should_force());
        assert_eq!(stall.record_skip(), 3);
        assert!(stall.should_force());

        stall.reset();
        assert!(!stall.should_force());
        assert_eq!(stall.record_skip(), 1);
    }
}
