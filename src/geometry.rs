//! Slot geometry derived from animation progress
//!
//! Positions and sizes for the main panel and dock are a pure function of
//! the container bounds, the current progress, and the configured dock
//! fraction. Nothing here is stored; the controller recomputes on demand.

/// Rectangle for layout calculations
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// The two regions an immersive panel manages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Primary content area, expands when the dock hides
    Main,
    /// Secondary area that slides out of view in immersive mode
    Dock,
}

/// Computed placement for one slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotGeometry {
    pub rect: Rect,
    /// 0 = invisible, 1 = fully opaque
    pub opacity: f32,
}

/// Placement for both slots at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelGeometry {
    pub main: SlotGeometry,
    pub dock: SlotGeometry,
}

impl PanelGeometry {
    /// Derive slot placement from progress
    ///
    /// `progress` is 1 when the dock is fully shown and 0 when hidden. With
    /// `d = max_dock_fraction * container.height`, the dock sits flush at
    /// the container bottom at progress 1 and fully below the visible area
    /// at progress 0; the main panel cedes exactly `d * progress` of its
    /// height. `main.rect.height + d * progress == container.height` holds
    /// exactly for any progress.
    pub fn derive(container: Rect, progress: f32, max_dock_fraction: f32, fade: bool) -> Self {
        let d = max_dock_fraction * container.height;
        let main = SlotGeometry {
            rect: Rect::new(
                container.x,
                container.y + d * progress,
                container.width,
                container.height - d * progress,
            ),
            opacity: 1.0,
        };
        let dock = SlotGeometry {
            rect: Rect::new(
                container.x,
                container.y - d * (1.0 - progress),
                container.width,
                d,
            ),
            opacity: if fade { progress } else { 1.0 },
        };
        Self { main, dock }
    }
}

/// Host integration point that receives computed slot placement
///
/// [`crate::ImmersivePanel::sync_layout`] pushes both slots through this
/// whenever the host wants its widget tree updated.
pub trait LayoutTarget {
    fn apply(&mut self, slot: Slot, geometry: SlotGeometry);
}
