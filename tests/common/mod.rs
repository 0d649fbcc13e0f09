//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::time::Duration;

use immersive::{ImmersivePanel, ManualScheduler, PanelConfig, PanelEvent, Rect};

/// Widget handles in tests are plain ids
pub type TestPanel = ImmersivePanel<u32>;

pub const CONTAINER: Rect = Rect {
    x: 0.0,
    y: 0.0,
    width: 800.0,
    height: 600.0,
};

/// Create a panel with container bounds set and startup events drained
pub fn test_panel(config: PanelConfig) -> (TestPanel, ManualScheduler) {
    let mut panel = ImmersivePanel::new(config);
    panel.set_container(CONTAINER);
    panel.drain_events();
    (panel, ManualScheduler::new())
}

/// Default config but with a short animation so tests settle quickly
pub fn quick_config() -> PanelConfig {
    PanelConfig {
        animation_duration_secs: 0.1,
        ..PanelConfig::default()
    }
}

/// Drive panel and scheduler together in 10ms steps for `total`
///
/// Expired timers are fed back into the panel before each tick, the way a
/// host event loop would. Returns every event emitted along the way.
pub fn run_for(
    panel: &mut TestPanel,
    sched: &mut ManualScheduler,
    total: Duration,
) -> Vec<PanelEvent> {
    let step = Duration::from_millis(10);
    let mut events = Vec::new();
    let mut elapsed = Duration::ZERO;
    while elapsed < total {
        for token in sched.advance(step) {
            panel.timer_fired(token, sched);
        }
        panel.tick(step);
        events.extend(panel.drain_events());
        elapsed += step;
    }
    events
}

/// Run past the configured animation duration so the panel settles
pub fn settle(panel: &mut TestPanel, sched: &mut ManualScheduler) -> Vec<PanelEvent> {
    let duration = Duration::from_secs_f32(panel.config().animation_duration_secs);
    run_for(panel, sched, duration + Duration::from_millis(50))
}

/// Count occurrences of `event` in a slice
pub fn count(events: &[PanelEvent], event: PanelEvent) -> usize {
    events.iter().filter(|&&e| e == event).count()
}
