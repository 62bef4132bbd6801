//! "After a delay, run the latest" scheduling.
//!
//! The debouncer never sleeps. The owner asks it for the next deadline, waits
//! however its event loop waits, and then polls. Scheduling while a value is
//! pending replaces the value and pushes the deadline out.

use std::time::{Duration, Instant};

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug)]
struct Pending<T> {
    deadline: Instant,
    value: T,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arm the timer with `value`, cancelling any pending one.
    ///
    /// Returns true when a pending value was superseded.
    pub fn schedule(&mut self, value: T, now: Instant) -> bool {
        let superseded = self.pending.is_some();
        self.pending = Some(Pending {
            deadline: now + self.delay,
            value,
        });
        superseded
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Time left until the pending value is due (zero if overdue)
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Take the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.deadline <= now);
        if !due {
            return None;
        }
        self.pending.take().map(|pending| pending.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(180);

    #[test]
    fn test_fires_only_after_delay() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        assert!(!debouncer.schedule("a", start));
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.poll(start + Duration::from_millis(179)), None);
        assert_eq!(debouncer.poll(start + DELAY), Some("a"));
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(start + DELAY * 2), None);
    }

    #[test]
    fn test_reschedule_keeps_latest_and_moves_deadline() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.schedule("a", start);
        assert!(debouncer.schedule("am", start + Duration::from_millis(100)));
        assert!(debouncer.schedule("ami", start + Duration::from_millis(150)));

        // The first deadline has passed but was cancelled.
        assert_eq!(debouncer.poll(start + DELAY), None);
        assert_eq!(
            debouncer.deadline(),
            Some(start + Duration::from_millis(150) + DELAY)
        );
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(330)),
            Some("ami")
        );
    }

    #[test]
    fn test_remaining_saturates() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        assert_eq!(debouncer.remaining(start), None);

        debouncer.schedule((), start);
        assert_eq!(
            debouncer.remaining(start + Duration::from_millis(80)),
            Some(Duration::from_millis(100))
        );
        assert_eq!(
            debouncer.remaining(start + Duration::from_secs(1)),
            Some(Duration::ZERO)
        );
    }
}
