//! Immersive panel controller
//!
//! Owns the dock-visibility state machine: the immersed flag, the progress
//! animation between shown and hidden geometry, and the auto-hide timer.
//! The host delivers input, timer expiry, and frame ticks; the controller
//! answers with queued [`PanelEvent`]s and input dispositions.
//!
//! Single-threaded by construction. All mutation happens on the host's
//! UI/event thread through `&mut self` calls; the single animation handle
//! and the single pending close token are owned here and nowhere else.

use std::collections::VecDeque;
use std::time::Duration;

use crate::animation::AnimationDriver;
use crate::config::PanelConfig;
use crate::events::{InputDisposition, InputEvent, PanelEvent};
use crate::geometry::{LayoutTarget, PanelGeometry, Rect, Slot};
use crate::scheduler::{Scheduler, TimerToken};

/// Which finish event the live animation owes us
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingFinish {
    Entering,
    Exiting,
}

/// Observable state of the panel
///
/// Derived from the immersed flag and whether an animation is in flight;
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Dock fully visible (progress 1)
    Shown,
    /// Dock fully hidden (progress 0)
    Hidden,
    /// Animating toward hidden
    Entering,
    /// Animating toward shown
    Exiting,
}

/// Collapsible immersive panel: main content area plus a hideable dock
///
/// Generic over `W`, the host's widget handle type for slot content. The
/// controller never inspects the handles; it only enforces the two-slot
/// assignment policy.
#[derive(Debug)]
pub struct ImmersivePanel<W = ()> {
    config: PanelConfig,
    /// True when the dock is hidden or hiding
    immersed: bool,
    container: Rect,
    driver: AnimationDriver,
    pending_finish: Option<PendingFinish>,
    pending_close: Option<TimerToken>,
    /// Timeout stashed while auto-hide is switched off
    remembered_timeout: f32,
    main_content: Option<W>,
    dock_content: Option<W>,
    events: VecDeque<PanelEvent>,
}

impl<W> ImmersivePanel<W> {
    /// Create a panel from config; values are clamped into their domains
    ///
    /// Starts at rest: progress 0 when constructed immersed, else 1.
    pub fn new(config: PanelConfig) -> Self {
        let config = config.sanitized();
        let progress = if config.immersed { 0.0 } else { 1.0 };
        Self {
            immersed: config.immersed,
            container: Rect::default(),
            driver: AnimationDriver::new(progress),
            pending_finish: None,
            pending_close: None,
            remembered_timeout: config.timeout_secs,
            main_content: None,
            dock_content: None,
            events: VecDeque::new(),
            config,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn is_immersed(&self) -> bool {
        self.immersed
    }

    /// Animation progress: 1 = dock fully shown, 0 = fully hidden
    pub fn progress(&self) -> f32 {
        self.driver.value()
    }

    pub fn phase(&self) -> Phase {
        match (self.driver.is_active(), self.immersed) {
            (true, true) => Phase::Entering,
            (true, false) => Phase::Exiting,
            (false, true) => Phase::Hidden,
            (false, false) => Phase::Shown,
        }
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn container(&self) -> Rect {
        self.container
    }

    /// Whether an auto-hide close is currently scheduled
    pub fn has_pending_close(&self) -> bool {
        self.pending_close.is_some()
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Hide the dock
    ///
    /// Cancels any in-flight animation and any pending auto-hide close,
    /// starts animating progress toward 0, flips `immersed` and emits
    /// [`PanelEvent::EnterImmersive`] synchronously. The matching
    /// [`PanelEvent::FinishedEntering`] fires from the tick that completes
    /// the animation.
    pub fn enter_immersive_mode(&mut self, sched: &mut dyn Scheduler) {
        self.cancel_scheduled_close(sched);
        let from = self.driver.value();
        self.driver
            .start(from, 0.0, self.animation_duration(), self.config.transition);
        self.pending_finish = Some(PendingFinish::Entering);
        self.immersed = true;
        tracing::debug!(progress = from, "entering immersive mode");
        self.emit(PanelEvent::EnterImmersive);
        self.emit(PanelEvent::StateChanged);
    }

    /// Reveal the dock
    ///
    /// Cancels any in-flight animation, starts animating progress toward 1,
    /// flips `immersed` and emits [`PanelEvent::ExitImmersive`]
    /// synchronously; [`PanelEvent::FinishedExiting`] fires on completion.
    /// When auto-hide is enabled (and timeout > 0) the deferred close is
    /// (re)scheduled, cancelling any previously scheduled one first.
    pub fn exit_immersive_mode(&mut self, sched: &mut dyn Scheduler) {
        let from = self.driver.value();
        self.driver
            .start(from, 1.0, self.animation_duration(), self.config.transition);
        self.pending_finish = Some(PendingFinish::Exiting);
        self.immersed = false;
        tracing::debug!(progress = from, "exiting immersive mode");
        self.emit(PanelEvent::ExitImmersive);
        self.emit(PanelEvent::StateChanged);
        if self.config.auto_hide {
            self.schedule_close(sched);
        }
    }

    /// Exit if immersed, enter otherwise
    pub fn toggle_state(&mut self, sched: &mut dyn Scheduler) {
        if self.immersed {
            self.exit_immersive_mode(sched);
        } else {
            self.enter_immersive_mode(sched);
        }
    }

    /// Force the immersed state; a no-op when already there
    pub fn set_immersed(&mut self, immersed: bool, sched: &mut dyn Scheduler) {
        if immersed == self.immersed {
            return;
        }
        if immersed {
            self.enter_immersive_mode(sched);
        } else {
            self.exit_immersive_mode(sched);
        }
    }

    /// Advance the show/hide animation by `dt`
    ///
    /// Emits [`PanelEvent::GeometryChanged`] for every value update and the
    /// owed finish event exactly once when the animation completes.
    pub fn tick(&mut self, dt: Duration) {
        let Some(tick) = self.driver.tick(dt) else {
            return;
        };
        self.emit(PanelEvent::GeometryChanged);
        if tick.completed {
            match self.pending_finish.take() {
                Some(PendingFinish::Entering) => {
                    tracing::debug!("finished entering immersive mode");
                    self.emit(PanelEvent::FinishedEntering);
                }
                Some(PendingFinish::Exiting) => {
                    tracing::debug!("finished exiting immersive mode");
                    self.emit(PanelEvent::FinishedExiting);
                }
                None => {}
            }
        }
    }

    /// Report an expired scheduler token
    ///
    /// Enters immersive mode when the token matches the pending auto-hide
    /// close; stale tokens are ignored.
    pub fn timer_fired(&mut self, token: TimerToken, sched: &mut dyn Scheduler) {
        if self.pending_close == Some(token) {
            self.pending_close = None;
            tracing::trace!(token = token.0, "auto-hide timer fired");
            self.enter_immersive_mode(sched);
        }
    }

    /// Cancel the animation and any pending close
    ///
    /// Call before dropping the panel so no stale timer can fire into a
    /// dead controller.
    pub fn teardown(&mut self, sched: &mut dyn Scheduler) {
        self.driver.cancel_active();
        self.pending_finish = None;
        self.cancel_scheduled_close(sched);
    }

    // ========================================================================
    // Input
    // ========================================================================

    /// Feed a raw input event to the panel
    ///
    /// Key presses are process-wide; pointer presses outside the container
    /// bounds are forwarded untouched. With auto-show enabled, the first
    /// event while immersed only reveals the dock and is swallowed; events
    /// while shown reveal (resetting the auto-hide clock) and pass through.
    /// With auto-show disabled every event is forwarded unmodified.
    pub fn handle_input(
        &mut self,
        event: InputEvent,
        sched: &mut dyn Scheduler,
    ) -> InputDisposition {
        match event {
            InputEvent::KeyDown => self.handle_key_down(sched),
            InputEvent::PointerDown { x, y } => self.handle_pointer_down(x, y, sched),
        }
    }

    /// Process-wide key press. With auto-show, the first key while immersed
    /// reveals the dock and is blocked; keys while shown pass through.
    pub fn handle_key_down(&mut self, sched: &mut dyn Scheduler) -> InputDisposition {
        if !self.config.auto_show {
            return InputDisposition::Forward;
        }
        let was_immersed = self.immersed;
        self.exit_immersive_mode(sched);
        // Any keypress resets the auto-hide clock, auto_hide or not
        self.schedule_close(sched);
        if was_immersed {
            InputDisposition::Swallow
        } else {
            InputDisposition::Forward
        }
    }

    /// Pointer press in host coordinates. The first tap while immersed only
    /// reveals the dock; taps while shown reach the normal dispatch chain.
    pub fn handle_pointer_down(
        &mut self,
        x: f32,
        y: f32,
        sched: &mut dyn Scheduler,
    ) -> InputDisposition {
        if !self.container.contains(x, y) {
            return InputDisposition::Forward;
        }
        if !self.config.auto_show {
            return InputDisposition::Forward;
        }
        let was_immersed = self.immersed;
        if !was_immersed {
            self.cancel_scheduled_close(sched);
        }
        self.exit_immersive_mode(sched);
        if was_immersed {
            InputDisposition::Swallow
        } else {
            InputDisposition::Forward
        }
    }

    // ========================================================================
    // Geometry
    // ========================================================================

    /// Set container bounds; slot geometry is derived from these
    pub fn set_container(&mut self, container: Rect) {
        if container != self.container {
            self.container = container;
            self.emit(PanelEvent::GeometryChanged);
        }
    }

    /// Current placement of both slots
    pub fn geometry(&self) -> PanelGeometry {
        PanelGeometry::derive(
            self.container,
            self.driver.value(),
            self.config.max_dock_fraction,
            self.config.fade,
        )
    }

    /// Push both slots' placement into a host layout target
    pub fn sync_layout(&self, target: &mut dyn LayoutTarget) {
        let geometry = self.geometry();
        target.apply(Slot::Main, geometry.main);
        target.apply(Slot::Dock, geometry.dock);
    }

    // ========================================================================
    // Slot content
    // ========================================================================

    /// Assign content to a slot
    ///
    /// The first assignment per slot wins; later assignments are ignored
    /// and return false (the widget is dropped, not an error).
    pub fn set_content(&mut self, slot: Slot, widget: W) -> bool {
        let cell = match slot {
            Slot::Main => &mut self.main_content,
            Slot::Dock => &mut self.dock_content,
        };
        if cell.is_some() {
            tracing::debug!(?slot, "slot already has content, ignoring");
            return false;
        }
        *cell = Some(widget);
        true
    }

    /// Positional convenience mirroring add-widget hosts: the first widget
    /// becomes the main panel content, the second the dock content, any
    /// further additions are no-ops.
    pub fn add_widget(&mut self, widget: W) -> bool {
        if self.main_content.is_none() {
            self.set_content(Slot::Main, widget)
        } else if self.dock_content.is_none() {
            self.set_content(Slot::Dock, widget)
        } else {
            tracing::debug!("both slots filled, ignoring widget");
            false
        }
    }

    pub fn main_content(&self) -> Option<&W> {
        self.main_content.as_ref()
    }

    pub fn dock_content(&self) -> Option<&W> {
        self.dock_content.as_ref()
    }

    // ========================================================================
    // Events
    // ========================================================================

    /// Drain queued notifications in emission order
    pub fn drain_events(&mut self) -> Vec<PanelEvent> {
        self.events.drain(..).collect()
    }

    // ========================================================================
    // Runtime configuration
    // ========================================================================

    pub fn set_auto_show(&mut self, auto_show: bool) {
        self.config.auto_show = auto_show;
    }

    /// Toggle the auto-hide policy
    ///
    /// Turning it off cancels any pending close and stashes the timeout;
    /// turning it back on restores the stashed timeout and schedules a
    /// close only when the dock is currently shown. Toggling on while
    /// hidden changes nothing until the next exit.
    pub fn set_auto_hide(&mut self, auto_hide: bool, sched: &mut dyn Scheduler) {
        if auto_hide == self.config.auto_hide {
            return;
        }
        self.config.auto_hide = auto_hide;
        if auto_hide {
            self.config.timeout_secs = self.remembered_timeout;
            tracing::debug!(timeout = self.config.timeout_secs, "auto-hide enabled");
            if !self.immersed {
                self.schedule_close(sched);
            }
        } else {
            if self.config.timeout_secs > 0.0 {
                self.remembered_timeout = self.config.timeout_secs;
            }
            self.cancel_scheduled_close(sched);
            self.config.timeout_secs = 0.0;
            tracing::debug!("auto-hide disabled");
        }
    }

    /// Seconds of inactivity before auto-hide; 0 disables it
    pub fn set_timeout(&mut self, secs: f32) {
        self.config.timeout_secs = if secs.is_finite() && secs > 0.0 {
            secs
        } else {
            0.0
        };
        if self.config.auto_hide && self.config.timeout_secs > 0.0 {
            self.remembered_timeout = self.config.timeout_secs;
        }
    }

    pub fn set_animation_duration(&mut self, secs: f32) {
        self.config.animation_duration_secs = if secs.is_finite() && secs > 0.0 {
            secs
        } else {
            0.0
        };
    }

    pub fn set_max_dock_fraction(&mut self, fraction: f32) {
        let sanitized = PanelConfig {
            max_dock_fraction: fraction,
            ..self.config
        }
        .sanitized();
        if sanitized.max_dock_fraction != self.config.max_dock_fraction {
            self.config.max_dock_fraction = sanitized.max_dock_fraction;
            self.emit(PanelEvent::GeometryChanged);
        }
    }

    pub fn set_fade(&mut self, fade: bool) {
        if fade != self.config.fade {
            self.config.fade = fade;
            self.emit(PanelEvent::GeometryChanged);
        }
    }

    pub fn set_transition(&mut self, transition: crate::easing::Easing) {
        self.config.transition = transition;
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn animation_duration(&self) -> Duration {
        Duration::from_secs_f32(self.config.animation_duration_secs)
    }

    /// Schedule (or reschedule) the deferred close when timeout > 0
    fn schedule_close(&mut self, sched: &mut dyn Scheduler) {
        if self.config.timeout_secs > 0.0 {
            self.cancel_scheduled_close(sched);
            let delay = Duration::from_secs_f32(self.config.timeout_secs);
            self.pending_close = Some(sched.schedule_once(delay));
        }
    }

    fn cancel_scheduled_close(&mut self, sched: &mut dyn Scheduler) {
        if let Some(token) = self.pending_close.take() {
            sched.cancel(token);
        }
    }

    fn emit(&mut self, event: PanelEvent) {
        self.events.push_back(event);
    }
}

impl<W> Default for ImmersivePanel<W> {
    fn default() -> Self {
        Self::new(PanelConfig::default())
    }
}
