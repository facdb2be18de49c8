//! Animation clock for the solar-system visualization.
//!
//! Orbital phase is a pure function of elapsed wall-clock time since start,
//! so the clock is derived rather than accumulated: each frame samples
//! Bevy's `Time`, which measures from a single startup instant.

use bevy::prelude::*;

/// Resource holding the elapsed time driving orbital phase.
///
/// Sampled once per frame in `PreUpdate` so every `Update` system reads one
/// consistent value. Monotonically non-decreasing; there is no pause or
/// reset in scope.
#[derive(Resource, Clone, Debug, Default)]
pub struct SceneClock {
    /// Seconds since application start.
    pub elapsed: f32,
}

/// Plugin providing the per-frame clock sample.
pub struct ClockPlugin;

impl Plugin for ClockPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneClock>()
            .add_systems(PreUpdate, sample_clock);
    }
}

/// Sample elapsed time from Bevy's clock.
///
/// `Time::elapsed_secs` is derived from the startup instant, so this cannot
/// drift: assigning (not adding) each frame keeps the clock monotone even if
/// a frame is dropped.
fn sample_clock(mut clock: ResMut<SceneClock>, time: Res<Time>) {
    clock.elapsed = time.elapsed_secs();
}
