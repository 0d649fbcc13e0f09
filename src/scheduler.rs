//! Deferred one-shot timers for the auto-hide close
//!
//! The controller never owns real timers; it asks a [`Scheduler`] for a
//! one-shot token and the host reports expiry back via
//! [`crate::ImmersivePanel::timer_fired`]. [`ManualScheduler`] is a
//! deterministic deadline-queue implementation for tests and for hosts
//! whose event loop is purely tick-driven.

use std::time::Duration;

/// Opaque identifier for one scheduled callback
///
/// Tokens are monotonically numbered per scheduler, so a cancelled or
/// already-fired token never collides with a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(pub u64);

/// One-shot deferred scheduling, owned by the host
pub trait Scheduler {
    /// Schedule a callback to fire once after `delay`
    fn schedule_once(&mut self, delay: Duration) -> TimerToken;

    /// Cancel a previously scheduled callback
    ///
    /// Cancelling a token that already fired or was never scheduled is a
    /// no-op, never an error.
    fn cancel(&mut self, token: TimerToken);
}

/// Deadline-queue scheduler driven by an explicit clock
///
/// The host advances the clock with [`ManualScheduler::advance`] and feeds
/// the returned tokens into the controller.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_token: u64,
    // (token, absolute deadline), unordered; drained in deadline order
    pending: Vec<(TimerToken, Duration)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock value
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers still pending
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Advance the clock by `dt`, returning expired tokens in deadline order
    pub fn advance(&mut self, dt: Duration) -> Vec<TimerToken> {
        self.now += dt;
        let now = self.now;

        let mut expired: Vec<(TimerToken, Duration)> = Vec::new();
        self.pending.retain(|&(token, deadline)| {
            if deadline <= now {
                expired.push((token, deadline));
                false
            } else {
                true
            }
        });
        expired.sort_by_key(|&(_, deadline)| deadline);
        expired.into_iter().map(|(token, _)| token).collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_once(&mut self, delay: Duration) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.pending.push((token, self.now + delay));
        tracing::trace!(token = token.0, ?delay, "scheduled one-shot timer");
        token
    }

    fn cancel(&mut self, token: TimerToken) {
        self.pending.retain(|&(t, _)| t != token);
    }
}
