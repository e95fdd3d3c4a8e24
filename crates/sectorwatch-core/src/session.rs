//! Connected-session tracking and break reminder latch

use std::time::Duration;

/// Reminder intervals shorter than this are clamped up
pub const MIN_REMINDER_INTERVAL: Duration = Duration::from_secs(60);

/// A break reminder that is due
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderDue {
    /// Which interval boundary was crossed (1 for the first reminder)
    pub interval_index: u64,

    /// Connected time accumulated so far
    pub online: Duration,
}

/// Tracks the host's connectivity signal across ticks and latches break
/// reminders to interval boundaries.
///
/// State persists for the life of the process and resets to zero on every
/// disconnected -> connected transition.
#[derive(Debug, Default)]
pub struct SessionTracker {
    last_connected: Option<bool>,
    online_seconds: u64,
    last_interval_index: u64,
}

impl SessionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds spent connected in the current session
    pub fn online_seconds(&self) -> u64 {
        self.online_seconds
    }

    /// Feed one tick's connectivity observation. Called once per second.
    ///
    /// Returns a reminder exactly once per strictly-increasing interval
    /// index; it never re-fires for the same interval.
    pub fn observe(&mut self, connected: bool, reminder_interval: Duration) -> Option<ReminderDue> {
        let was_connected = self.last_connected.unwrap_or(false);
        self.last_connected = Some(connected);

        if !connected {
            self.online_seconds = 0;
            self.last_interval_index = 0;
            return None;
        }

        if !was_connected {
            // First tick after connecting
            self.online_seconds = 0;
            self.last_interval_index = 0;
        }

        self.online_seconds += 1;

        let interval_secs = reminder_interval.as_secs().max(MIN_REMINDER_INTERVAL.as_secs());
        let interval_index = self.online_seconds / interval_secs;

        if interval_index > self.last_interval_index {
            self.last_interval_index = interval_index;
            return Some(ReminderDue {
                interval_index,
                online: Duration::from_secs(self.online_seconds),
            });
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINUTE: Duration = Duration::from_secs(60);

    #[test]
    fn reminder_fires_once_per_interval_boundary() {
        let mut tracker = SessionTracker::new();

        // Ticks 1..=59: nothing
        for _ in 0..59 {
            assert_eq!(tracker.observe(true, MINUTE), None);
        }

        // Tick 60: exactly one reminder
        let due = tracker.observe(true, MINUTE).unwrap();
        assert_eq!(due.interval_index, 1);
        assert_eq!(due.online, Duration::from_secs(60));

        // Ticks 61..=119: latched, nothing fires
        for _ in 0..59 {
            assert_eq!(tracker.observe(true, MINUTE), None);
        }

        // Tick 120: exactly one more
        let due = tracker.observe(true, MINUTE).unwrap();
        assert_eq!(due.interval_index, 2);
    }

    #[test]
    fn disconnect_resets_counters_and_latch() {
        let mut tracker = SessionTracker::new();

        for _ in 0..60 {
            tracker.observe(true, MINUTE);
        }
        assert_eq!(tracker.online_seconds(), 60);

        // Go offline: counters reset
        assert_eq!(tracker.observe(false, MINUTE), None);
        assert_eq!(tracker.online_seconds(), 0);

        // Reconnect: a fresh 60 seconds is needed before the next reminder
        for _ in 0..59 {
            assert_eq!(tracker.observe(true, MINUTE), None);
        }
        let due = tracker.observe(true, MINUTE).unwrap();
        assert_eq!(due.interval_index, 1);
    }

    #[test]
    fn intervals_below_a_minute_are_clamped() {
        let mut tracker = SessionTracker::new();

        // A 1-second interval still only fires at the 60-second boundary
        for _ in 0..59 {
            assert_eq!(tracker.observe(true, Duration::from_secs(1)), None);
        }
        assert!(tracker.observe(true, Duration::from_secs(1)).is_some());
    }

    #[test]
    fn no_reminders_while_disconnected() {
        let mut tracker = SessionTracker::new();

        for _ in 0..300 {
            assert_eq!(tracker.observe(false, MINUTE), None);
        }
        assert_eq!(tracker.online_seconds(), 0);
    }

    #[test]
    fn default_two_hour_interval() {
        let mut tracker = SessionTracker::new();
        let interval = Duration::from_secs(120 * 60);

        for _ in 0..(120 * 60 - 1) {
            assert_eq!(tracker.observe(true, interval), None);
        }
        let due = tracker.observe(true, interval).unwrap();
        assert_eq!(due.online, Duration::from_secs(7200));
    }
}
