//! Orbit-path guide rendering using Bevy Gizmos.
//!
//! Draws a dashed circle for each orbiting body: planet guides are centered
//! on the origin, satellite guides on the parent's current world position.
//! Guides are redrawn every frame (gizmos are immediate-mode) so satellite
//! circles track their moving center.

use bevy::prelude::*;
use std::f32::consts::TAU;

use crate::orbit::Orbit;
use crate::scene::builder::{CelestialBody, SatelliteOf};

/// Plugin providing orbit-path guide settings.
///
/// The drawing systems are added by `ScenePlugin` so they run after the
/// frame's position update.
pub struct OrbitPathPlugin;

impl Plugin for OrbitPathPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitPathSettings>();
    }
}

/// Settings for orbit-path guide rendering.
#[derive(Resource)]
pub struct OrbitPathSettings {
    /// Whether to show the guides.
    pub visible: bool,
    /// Number of segments per circle (higher = smoother).
    pub segments: u32,
    /// Alpha applied to the body's color for its guide.
    pub alpha: f32,
    /// Dash pattern: draw N segments, then skip M, repeating.
    ///
    /// Set to (1, 0) for a solid line.
    pub dash_on: u32,
    pub dash_off: u32,
}

impl Default for OrbitPathSettings {
    fn default() -> Self {
        Self {
            visible: true,
            segments: 128,
            alpha: 0.3,
            dash_on: 2,
            dash_off: 1,
        }
    }
}

/// Draw guides for bodies orbiting the origin (planets).
pub fn draw_orbit_paths(
    mut gizmos: Gizmos,
    settings: Res<OrbitPathSettings>,
    query: Query<(&Orbit, &CelestialBody), Without<SatelliteOf>>,
) {
    if !settings.visible {
        return;
    }

    for (orbit, body) in query.iter() {
        let center = Vec3::new(0.0, orbit.plane_offset, 0.0);
        draw_dashed_circle(
            &mut gizmos,
            center,
            orbit.radius,
            body.color.with_alpha(settings.alpha),
            &settings,
        );
    }
}

/// Draw guides for satellites, centered on the parent's current position.
pub fn draw_satellite_orbit_paths(
    mut gizmos: Gizmos,
    settings: Res<OrbitPathSettings>,
    satellites: Query<(&Orbit, &CelestialBody, &SatelliteOf)>,
    parents: Query<&GlobalTransform>,
) {
    if !settings.visible {
        return;
    }

    for (orbit, body, satellite_of) in satellites.iter() {
        let Ok(parent_transform) = parents.get(satellite_of.0) else {
            continue;
        };
        let center = parent_transform.translation() + Vec3::new(0.0, orbit.plane_offset, 0.0);
        draw_dashed_circle(
            &mut gizmos,
            center,
            orbit.radius,
            body.color.with_alpha(settings.alpha),
            &settings,
        );
    }
}

/// Draw a dashed circle in the y = center.y plane.
///
/// The dash pattern is keyed to the segment index so it doesn't crawl as
/// the camera or the center moves.
fn draw_dashed_circle(
    gizmos: &mut Gizmos,
    center: Vec3,
    radius: f32,
    color: Color,
    settings: &OrbitPathSettings,
) {
    let segments = settings.segments.max(16);
    let on = settings.dash_on.max(1);
    let period = on + settings.dash_off;

    let mut prev: Option<Vec3> = None;
    for i in 0..=segments {
        let angle = (i as f32 / segments as f32) * TAU;
        let pt = center + Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin());

        if let Some(p0) = prev {
            if (i % period) < on {
                gizmos.line(p0, pt, color);
            }
        }
        prev = Some(pt);
    }
}
