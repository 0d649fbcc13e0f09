//! Scalar progress animation driver
//!
//! Advances a single value from `from` toward `to` over a fixed duration,
//! sampling an easing curve each tick. The host calls [`AnimationDriver::tick`]
//! from its frame loop; there is no thread or timer inside.
//!
//! At most one animation is live at a time: starting a new one cancels the
//! previous one (last-writer-wins, no queuing), and each animation emits
//! exactly one completion.

use std::time::Duration;

use crate::easing::Easing;

/// Identifies one started animation
///
/// Handles are monotonically numbered, so a stale handle never matches a
/// later animation and cancelling it is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationHandle(u64);

/// Result of advancing the driver by one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationTick {
    /// The animation this tick belongs to
    pub handle: AnimationHandle,
    /// Value after this tick
    pub value: f32,
    /// True exactly once per animation, on the tick that reaches the target
    pub completed: bool,
}

#[derive(Debug, Clone)]
struct ActiveAnimation {
    handle: AnimationHandle,
    from: f32,
    to: f32,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

/// Drives a single scalar value between targets
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    value: f32,
    active: Option<ActiveAnimation>,
    next_handle: u64,
}

impl AnimationDriver {
    /// Create a driver resting at `initial`
    pub fn new(initial: f32) -> Self {
        Self {
            value: initial,
            active: None,
            next_handle: 0,
        }
    }

    /// Current value, whether resting or mid-animation
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Whether an animation is in flight
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Handle of the in-flight animation, if any
    pub fn active_handle(&self) -> Option<AnimationHandle> {
        self.active.as_ref().map(|a| a.handle)
    }

    /// Start animating from `from` to `to` over `duration`
    ///
    /// Any in-flight animation is cancelled first; its completion never
    /// fires. A zero `duration` completes on the next tick with a single
    /// update to `to`.
    pub fn start(
        &mut self,
        from: f32,
        to: f32,
        duration: Duration,
        easing: Easing,
    ) -> AnimationHandle {
        if let Some(prev) = self.active.take() {
            tracing::trace!(prev = prev.handle.0, "superseding in-flight animation");
        }
        let handle = AnimationHandle(self.next_handle);
        self.next_handle += 1;
        self.value = from;
        self.active = Some(ActiveAnimation {
            handle,
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing,
        });
        handle
    }

    /// Cancel the animation identified by `handle`
    ///
    /// No further updates and no completion fire for it. Stale or unknown
    /// handles are ignored.
    pub fn cancel(&mut self, handle: AnimationHandle) {
        if self.active.as_ref().map(|a| a.handle) == Some(handle) {
            self.active = None;
        }
    }

    /// Cancel whatever animation is in flight, if any
    pub fn cancel_active(&mut self) {
        self.active = None;
    }

    /// Advance the in-flight animation by `dt`
    ///
    /// Returns `None` when the driver is resting. On the tick that reaches
    /// the target the value snaps exactly to `to` and `completed` is set.
    pub fn tick(&mut self, dt: Duration) -> Option<AnimationTick> {
        let anim = self.active.as_mut()?;
        anim.elapsed += dt;

        let t = if anim.duration.is_zero() {
            1.0
        } else {
            (anim.elapsed.as_secs_f32() / anim.duration.as_secs_f32()).min(1.0)
        };

        let completed = t >= 1.0;
        let handle = anim.handle;
        self.value = if completed {
            // Snap to the exact target so geometry invariants hold bit-exactly
            anim.to
        } else {
            anim.from + (anim.to - anim.from) * anim.easing.apply(t)
        };

        if completed {
            self.active = None;
        }
        Some(AnimationTick {
            handle,
            value: self.value,
            completed,
        })
    }
}
