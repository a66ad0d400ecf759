// evasion/throttle.rs

use std::time::Duration;

/// Lossy rate limiter: lets a sample through only when more than
/// `min_interval` has passed since the last one it let through.
/// Rejected samples are dropped, never queued.
#[derive(Debug, Clone)]
pub struct MinIntervalGate {
    min_interval: Duration,
    last_accepted: Option<Duration>,
}

impl MinIntervalGate {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_accepted: None,
        }
    }

    /// `now` is any monotonic timestamp (time since startup)
    pub fn try_accept(&mut self, now: Duration) -> bool {
        let open = match self.last_accepted {
            None => true,
            Some(last) => now.saturating_sub(last) > self.min_interval,
        };

        if open {
            self.last_accepted = Some(now);
        }
        open
    }
}
