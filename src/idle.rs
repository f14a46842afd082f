use embassy_time::{Duration, Instant};

const SECONDS_PER_MINUTE: u64 = 60;

/// Tracks the time of the last accepted command
#[derive(Debug, Clone, Copy)]
pub struct IdleTimer {
    last_activity: Instant,
}

impl IdleTimer {
    pub const fn new(now: Instant) -> Self {
        Self { last_activity: now }
    }

    /// Record activity
    pub fn touch(&mut self, now: Instant) {
        if now > self.last_activity {
            self.last_activity = now;
        }
    }

    /// Check whether `timeout_minutes` elapsed since the last activity.
    ///
    /// A timeout of 0 never expires.
    pub fn is_expired(&self, now: Instant, timeout_minutes: u32) -> bool {
        if timeout_minutes == 0 {
            return false;
        }
        let timeout = Duration::from_secs(u64::from(timeout_minutes) * SECONDS_PER_MINUTE);
        now.checked_duration_since(self.last_activity)
            .is_some_and(|idle| idle >= timeout)
    }
}
