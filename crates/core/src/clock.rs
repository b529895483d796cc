//! Clock module - the tick-scheduling interface between engine and host.
//!
//! The engine never owns a timer. The host supplies time through [`Clock`]
//! and asks a [`TickSchedule`] how many gravity ticks are due; it then calls
//! the engine's `tick` that many times, serially with input handling.

/// Monotonic millisecond time supplied by the host
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Fixed-interval tick schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSchedule {
    interval_ms: u32,
    next_due_ms: u64,
}

impl TickSchedule {
    /// First tick falls one interval after `now_ms`. A zero interval is
    /// treated as 1ms.
    pub fn new(interval_ms: u32, now_ms: u64) -> Self {
        let interval_ms = interval_ms.max(1);
        Self {
            interval_ms,
            next_due_ms: now_ms + interval_ms as u64,
        }
    }

    pub fn from_clock(interval_ms: u32, clock: &impl Clock) -> Self {
        Self::new(interval_ms, clock.now_ms())
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Number of ticks that became due up to `now_ms`, advancing the schedule
    /// past them. Late polls return every missed tick.
    pub fn poll(&mut self, now_ms: u64) -> u32 {
        if now_ms < self.next_due_ms {
            return 0;
        }
        let interval = self.interval_ms as u64;
        let due = (now_ms - self.next_due_ms) / interval + 1;
        self.next_due_ms += due * interval;
        due.min(u32::MAX as u64) as u32
    }

    pub fn poll_clock(&mut self, clock: &impl Clock) -> u32 {
        self.poll(clock.now_ms())
    }

    /// Milliseconds until the next tick (0 if one is already due)
    pub fn until_next_ms(&self, now_ms: u64) -> u64 {
        self.next_due_ms.saturating_sub(now_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct ManualClock {
        now: Cell<u64>,
    }

    impl ManualClock {
        fn advance(&self, ms: u64) {
            self.now.set(self.now.get() + ms);
        }
    }

    impl Clock for ManualClock {
        fn now_ms(&self) -> u64 {
            self.now.get()
        }
    }

    #[test]
    fn nothing_due_before_first_interval() {
        let mut sched = TickSchedule::new(500, 0);
        assert_eq!(sched.poll(0), 0);
        assert_eq!(sched.poll(499), 0);
        assert_eq!(sched.until_next_ms(499), 1);
    }

    #[test]
    fn one_tick_per_interval() {
        let clock = ManualClock { now: Cell::new(1_000) };
        let mut sched = TickSchedule::from_clock(500, &clock);

        clock.advance(500);
        assert_eq!(sched.poll_clock(&clock), 1);
        assert_eq!(sched.poll_clock(&clock), 0);

        clock.advance(499);
        assert_eq!(sched.poll_clock(&clock), 0);
        clock.advance(1);
        assert_eq!(sched.poll_clock(&clock), 1);
    }

    #[test]
    fn late_poll_reports_missed_ticks() {
        let mut sched = TickSchedule::new(500, 0);
        assert_eq!(sched.poll(1_750), 3);
        assert_eq!(sched.until_next_ms(1_750), 250);
    }

    #[test]
    fn zero_interval_is_clamped() {
        let mut sched = TickSchedule::new(0, 10);
        assert_eq!(sched.interval_ms(), 1);
        assert_eq!(sched.poll(12), 2);
    }
}
