//! Scene construction and the per-frame animation schedule.
//!
//! `ScenePlugin` is the frame scheduler for the visualization: Bevy's
//! `Update` schedule is the host's display-refresh callback, registered
//! once and vsync-paced by the winit event loop.

pub mod builder;
pub mod materials;
pub mod paths;

use bevy::prelude::*;

use self::builder::SceneBuilderPlugin;
use self::paths::{draw_orbit_paths, draw_satellite_orbit_paths, OrbitPathPlugin};
use crate::orbit::animate_orbits;

// Re-export for use in other modules
pub use self::builder::{CelestialBody, SatelliteOf};
pub use self::paths::OrbitPathSettings;

/// Plugin aggregating scene construction and per-frame animation.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((SceneBuilderPlugin, OrbitPathPlugin))
            // Explicit per-frame ordering:
            // 1. animate_orbits - parametric positions from the clock
            // 2. orbit-path guides - drawn at the final positions
            .add_systems(
                Update,
                (
                    animate_orbits,
                    (draw_orbit_paths, draw_satellite_orbit_paths),
                )
                    .chain(),
            );
    }
}
