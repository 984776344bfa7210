use std::time::{Duration, Instant};

/// Handle for one armed settle timer.
///
/// Only the ticket from the most recent arming can release the guard; every
/// later `engage`/`arm_release` supersedes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleTicket {
    generation: u64,
    deadline: Instant,
}

impl SettleTicket {
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn deadline(self) -> Instant {
        self.deadline
    }
}

/// Blocks external range updates from repositioning the handles while a
/// gesture is in flight and for a short settle window after a local emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconciliationGuard {
    engaged: bool,
    generation: u64,
    pending: Option<SettleTicket>,
}

impl ReconciliationGuard {
    #[must_use]
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    #[must_use]
    pub fn pending(&self) -> Option<SettleTicket> {
        self.pending
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Engages without a release timer and cancels any pending one.
    pub fn engage(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.engaged = true;
        self.pending = None;
    }

    /// Engages and arms a release timer that fires `delay` after `now`.
    pub fn arm_release(&mut self, now: Instant, delay: Duration) -> SettleTicket {
        self.generation = self.generation.wrapping_add(1);
        self.engaged = true;
        let ticket = SettleTicket {
            generation: self.generation,
            deadline: now.checked_add(delay).unwrap_or(now),
        };
        self.pending = Some(ticket);
        ticket
    }

    /// Clears the guard when `ticket` is still the current one.
    pub fn release(&mut self, ticket: SettleTicket) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }
        self.engaged = false;
        self.pending = None;
        true
    }

    /// Clears the guard once the pending deadline has passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(ticket) if now >= ticket.deadline => self.release(ticket),
            _ => false,
        }
    }
}
