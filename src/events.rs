//! Typed notifications and input events
//!
//! The controller never calls into the host directly; it queues
//! [`PanelEvent`]s which the host drains after each call or tick, and the
//! host feeds raw input in as [`InputEvent`]s, acting on the returned
//! [`InputDisposition`].

/// Notification emitted by the controller
///
/// Begin events (`EnterImmersive`, `ExitImmersive`) fire synchronously
/// inside the transition call; the matching finish events fire from the
/// tick that completes the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    /// The panel started hiding the dock
    EnterImmersive,
    /// The panel started revealing the dock
    ExitImmersive,
    /// The hide animation reached progress 0
    FinishedEntering,
    /// The reveal animation reached progress 1
    FinishedExiting,
    /// The immersed flag flipped; hosts mirroring state should re-read it
    StateChanged,
    /// Progress or container bounds changed; slot geometry is stale
    GeometryChanged,
}

/// Raw input delivered by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Key press; keyboard focus is process-wide, so no position
    KeyDown,
    /// Pointer press in host coordinates
    PointerDown { x: f32, y: f32 },
}

/// What the host should do with the raw event after the controller saw it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputDisposition {
    /// Deliver the event to the normal dispatch chain
    Forward,
    /// Consume the event; it only served to reveal the dock
    Swallow,
}
