//! Immersive panel core
//!
//! This crate provides the state machine for a collapsible "immersive" UI
//! panel: a main content area plus a dock that animates out of view (and
//! back) to give the main area full space. Rendering, widget trees, and
//! the event loop belong to a host toolkit; the host feeds input, timer
//! expiry, and frame ticks into [`ImmersivePanel`] and drains typed
//! [`PanelEvent`] notifications back out.

pub mod animation;
pub mod config;
pub mod config_paths;
pub mod easing;
pub mod events;
pub mod geometry;
pub mod logging;
pub mod panel;
pub mod scheduler;

// Re-export commonly used types
pub use animation::{AnimationDriver, AnimationHandle, AnimationTick};
pub use config::PanelConfig;
pub use easing::Easing;
pub use events::{InputDisposition, InputEvent, PanelEvent};
pub use geometry::{LayoutTarget, PanelGeometry, Rect, Slot, SlotGeometry};
pub use panel::{ImmersivePanel, Phase};
pub use scheduler::{ManualScheduler, Scheduler, TimerToken};
