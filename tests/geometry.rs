//! Tests for progress-driven slot geometry
//!
//! These verify the geometry formula through the controller, including
//! mid-animation values and the layout-target push.

mod common;

use std::time::Duration;

use common::{quick_config, test_panel, CONTAINER};
use immersive::{LayoutTarget, PanelConfig, PanelEvent, Slot, SlotGeometry};

#[test]
fn test_height_invariant_holds_mid_animation() {
    let (mut panel, mut sched) = test_panel(quick_config());
    let d = panel.config().max_dock_fraction * CONTAINER.height;

    panel.enter_immersive_mode(&mut sched);
    for _ in 0..20 {
        panel.tick(Duration::from_millis(7));
        let progress = panel.progress();
        let g = panel.geometry();

        assert!((g.main.rect.height + d * progress - CONTAINER.height).abs() < 1e-3);
        assert_eq!(g.main.rect.height, CONTAINER.height - d * progress);
        assert_eq!(g.dock.rect.y, CONTAINER.y - d * (1.0 - progress));
        assert_eq!(g.dock.rect.height, d);
        assert_eq!(g.main.rect.width, CONTAINER.width);
        assert_eq!(g.dock.rect.width, CONTAINER.width);
    }
}

#[test]
fn test_shown_and_hidden_extremes() {
    let (mut panel, mut sched) = test_panel(quick_config());
    let d = 0.2 * CONTAINER.height;

    let shown = panel.geometry();
    assert_eq!(shown.dock.rect.y, CONTAINER.y);
    assert_eq!(shown.main.rect.y, CONTAINER.y + d);
    assert_eq!(shown.dock.opacity, 1.0);

    panel.enter_immersive_mode(&mut sched);
    common::settle(&mut panel, &mut sched);

    let hidden = panel.geometry();
    assert_eq!(hidden.dock.rect.y, CONTAINER.y - d);
    assert_eq!(hidden.main.rect.y, CONTAINER.y);
    assert_eq!(hidden.main.rect.height, CONTAINER.height);
    assert_eq!(hidden.dock.opacity, 0.0);
}

#[test]
fn test_fade_controls_dock_opacity() {
    let config = PanelConfig {
        fade: false,
        ..quick_config()
    };
    let (mut panel, mut sched) = test_panel(config);

    panel.enter_immersive_mode(&mut sched);
    panel.tick(Duration::from_millis(50));
    assert_eq!(panel.geometry().dock.opacity, 1.0);

    panel.set_fade(true);
    let progress = panel.progress();
    assert_eq!(panel.geometry().dock.opacity, progress);
}

#[test]
fn test_ticks_emit_geometry_changed() {
    let (mut panel, mut sched) = test_panel(quick_config());

    panel.enter_immersive_mode(&mut sched);
    panel.drain_events();
    panel.tick(Duration::from_millis(10));

    let events = panel.drain_events();
    assert!(events.contains(&PanelEvent::GeometryChanged));
}

#[test]
fn test_dock_fraction_setter_clamps_and_notifies() {
    let (mut panel, _sched) = test_panel(quick_config());

    panel.set_max_dock_fraction(1.5);
    assert_eq!(panel.config().max_dock_fraction, 1.0);
    assert!(panel.drain_events().contains(&PanelEvent::GeometryChanged));

    // Unusable value falls back to default, still a change from 1.0
    panel.set_max_dock_fraction(-0.3);
    assert_eq!(panel.config().max_dock_fraction, 0.2);

    // No change, no notification
    panel.drain_events();
    panel.set_max_dock_fraction(0.2);
    assert!(panel.drain_events().is_empty());
}

#[derive(Default)]
struct RecordingTarget {
    applied: Vec<(Slot, SlotGeometry)>,
}

impl LayoutTarget for RecordingTarget {
    fn apply(&mut self, slot: Slot, geometry: SlotGeometry) {
        self.applied.push((slot, geometry));
    }
}

#[test]
fn test_sync_layout_pushes_both_slots() {
    let (panel, _sched) = test_panel(quick_config());
    let mut target = RecordingTarget::default();

    panel.sync_layout(&mut target);

    assert_eq!(target.applied.len(), 2);
    assert_eq!(target.applied[0].0, Slot::Main);
    assert_eq!(target.applied[1].0, Slot::Dock);
    assert_eq!(target.applied[0].1, panel.geometry().main);
    assert_eq!(target.applied[1].1, panel.geometry().dock);
}
