use std::time::{Duration, Instant};

/// A restartable one-shot countdown.
///
/// Drives both the per-question answer deadline and the inter-question
/// transition delay. Expiry is reported exactly once per `start()`:
/// `poll_expired` keeps returning `false` after it has fired, and
/// `cancel()` stops the countdown without firing. Restarting re-arms the
/// countdown, so a deadline from one question can never fire against the
/// next.
#[derive(Debug)]
pub struct Countdown {
    limit: Duration,
    deadline: Option<Instant>,
    fired: bool,
}

impl Countdown {
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            deadline: None,
            fired: false,
        }
    }

    /// Reset to the full limit and begin counting down.
    pub fn start(&mut self) {
        self.deadline = Some(Instant::now() + self.limit);
        self.fired = false;
    }

    /// Stop without firing. Called when an answer arrives before expiry.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_running(&self) -> bool {
        self.deadline.is_some() && !self.fired
    }

    /// Time left, zero once expired or when not running.
    pub fn remaining(&self) -> Duration {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or_default()
    }

    /// Whole seconds left, rounded up for a 1-second display resolution.
    pub fn remaining_secs(&self) -> u64 {
        let remaining = self.remaining();
        remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0)
    }

    /// Fraction of the limit still remaining, in `0.0..=1.0`.
    pub fn ratio(&self) -> f64 {
        if self.limit.is_zero() {
            return 0.0;
        }
        (self.remaining().as_secs_f64() / self.limit.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Check for expiry. Returns `true` exactly once per `start()`.
    pub fn poll_expired(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if !self.fired && Instant::now() >= deadline => {
                self.fired = true;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_does_not_fire_before_start() {
        let mut countdown = Countdown::new(Duration::ZERO);
        assert!(!countdown.poll_expired());
        assert!(!countdown.is_running());
    }

    #[test]
    fn test_fires_exactly_once() {
        let mut countdown = Countdown::new(Duration::ZERO);
        countdown.start();
        assert!(countdown.poll_expired());
        assert!(!countdown.poll_expired());
        assert!(!countdown.is_running());
    }

    #[test]
    fn test_cancel_prevents_expiry() {
        let mut countdown = Countdown::new(Duration::ZERO);
        countdown.start();
        countdown.cancel();
        assert!(!countdown.poll_expired());
        assert_eq!(countdown.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_restart_rearms() {
        let mut countdown = Countdown::new(Duration::ZERO);
        countdown.start();
        assert!(countdown.poll_expired());
        countdown.start();
        assert!(countdown.poll_expired());
    }

    #[test]
    fn test_remaining_counts_down_from_limit() {
        let mut countdown = Countdown::new(Duration::from_secs(20));
        countdown.start();
        assert!(!countdown.poll_expired());
        assert!(countdown.remaining_secs() >= 19);
        assert!(countdown.remaining_secs() <= 20);
        assert!(countdown.ratio() > 0.9);
    }
}
