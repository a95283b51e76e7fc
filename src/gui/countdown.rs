use std::time::{
    Duration,
    Instant,
};

/// One named timer slot with cancel-and-reschedule semantics: arming again
/// replaces the previous deadline (last-write-wins), nothing is queued.
/// Used for the search debounce, toast dismiss and per-card copied-revert.
#[derive(Debug, Clone, Copy, Default)]
pub struct Countdown {
    deadline: Option<Instant>,
}

impl Countdown {
    pub fn arm(&mut self, duration: Duration) {
        self.arm_at(Instant::now(), duration);
    }

    pub fn arm_at(&mut self, now: Instant, duration: Duration) {
        self.deadline = Some(now + duration);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_running(&self) -> bool {
        self.is_running_at(Instant::now())
    }

    pub fn is_running_at(&self, now: Instant) -> bool {
        matches!(self.deadline, Some(deadline) if now < deadline)
    }

    /// True exactly once when the deadline has passed; clears the slot.
    pub fn fire(&mut self) -> bool {
        self.fire_at(Instant::now())
    }

    pub fn fire_at(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until the deadline, for scheduling the next repaint.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline.map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }
}
