//! Habit Card State
//!
//! Streak-animation baseline kept by each card, and the options-menu close rule.

use crate::config::MENU_CLOSE_GRACE_MS;

/// Values the streak overlay is shown with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakBaseline {
    pub streak: u32,
    pub first_time: bool,
}

impl StreakBaseline {
    /// Baseline for replaying the current streak (also used on resync)
    pub fn current(streak: u32) -> Self {
        Self {
            streak,
            first_time: streak == 0,
        }
    }

    /// Baseline right after a successful registration
    pub fn after_success(previous: u32) -> Self {
        Self {
            streak: previous.saturating_add(1),
            first_time: previous == 0,
        }
    }
}

/// Delay in ms before a press closes the open options menu, or `None` when
/// the menu stays as it is. Presses inside the card never close it; outside
/// presses close it only after the grace delay, never in the same event.
pub fn menu_close_delay(menu_open: bool, pressed_inside: bool) -> Option<u32> {
    (menu_open && !pressed_inside).then_some(MENU_CLOSE_GRACE_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_shows_next_streak() {
        for previous in [0u32, 1, 6, 99] {
            let baseline = StreakBaseline::after_success(previous);
            assert_eq!(baseline.streak, previous + 1);
            assert_eq!(baseline.first_time, previous == 0);
        }
    }

    #[test]
    fn test_current_baseline() {
        assert_eq!(StreakBaseline::current(0), StreakBaseline { streak: 0, first_time: true });
        assert_eq!(StreakBaseline::current(5), StreakBaseline { streak: 5, first_time: false });
    }

    #[test]
    fn test_outside_press_closes_menu_after_grace_delay() {
        let delay = menu_close_delay(true, false);
        assert_eq!(delay, Some(100));
        assert!(delay.is_some_and(|ms| ms > 0));
    }

    #[test]
    fn test_menu_kept_for_inside_press_or_when_closed() {
        assert_eq!(menu_close_delay(true, true), None);
        assert_eq!(menu_close_delay(false, false), None);
        assert_eq!(menu_close_delay(false, true), None);
    }
}
