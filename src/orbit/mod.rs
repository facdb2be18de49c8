//! Circular orbital motion.
//!
//! Positions are purely parametric: no gravity, no integration. Every
//! orbiting entity carries an [`Orbit`] component and gets its translation
//! rewritten each frame from the elapsed clock time. Satellites are spawned
//! as transform children, so the same parent-relative formula yields
//! compound (epicyclic) world motion through Bevy's transform propagation.

#[cfg(test)]
mod proptest_orbit;

use bevy::prelude::*;

use crate::clock::SceneClock;

/// Orbital parameters for an animated body.
///
/// The world (or parent-relative, for satellites) position at elapsed time
/// `t` is `(radius·cos(t·speed), plane_offset, radius·sin(t·speed))`.
#[derive(Component, Clone, Copy, Debug)]
pub struct Orbit {
    /// Distance from the parent's center.
    pub radius: f32,
    /// Angular speed in radians per elapsed second; sign selects direction.
    pub speed: f32,
    /// Fixed parent-relative y of the orbit plane.
    pub plane_offset: f32,
}

impl Orbit {
    /// Orbit in the parent's y = 0 plane.
    pub fn new(radius: f32, speed: f32) -> Self {
        Self {
            radius,
            speed,
            plane_offset: 0.0,
        }
    }

    /// Orbit with the plane lifted to a fixed parent-relative y.
    pub fn with_plane_offset(radius: f32, speed: f32, plane_offset: f32) -> Self {
        Self {
            radius,
            speed,
            plane_offset,
        }
    }

    /// Parent-relative position at the given elapsed time.
    ///
    /// At `t = 0` this is `(radius, plane_offset, 0)` — the documented
    /// initial-placement convention. No explicit angle wraparound is needed
    /// since the trigonometric functions are periodic.
    pub fn position_at(&self, elapsed: f32) -> Vec3 {
        let angle = elapsed * self.speed;
        Vec3::new(
            self.radius * angle.cos(),
            self.plane_offset,
            self.radius * angle.sin(),
        )
    }

    /// Time for one full revolution, or `None` for a static body.
    pub fn period(&self) -> Option<f32> {
        if self.speed == 0.0 {
            None
        } else {
            Some(std::f32::consts::TAU / self.speed.abs())
        }
    }
}

/// Advance every orbiting body to its position at the current clock time.
///
/// Children's translations are parent-relative, so satellites need no extra
/// composition here; Bevy's transform propagation places them in the world.
/// Only the translation is touched — scale and rotation stay as spawned.
pub fn animate_orbits(clock: Res<SceneClock>, mut query: Query<(&Orbit, &mut Transform)>) {
    for (orbit, mut transform) in query.iter_mut() {
        transform.translation = orbit.position_at(clock.elapsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::PI;

    #[test]
    fn test_initial_placement() {
        let orbit = Orbit::new(35.0, 0.5);
        let pos = orbit.position_at(0.0);
        assert_relative_eq!(pos.x, 35.0);
        assert_relative_eq!(pos.y, 0.0);
        assert_relative_eq!(pos.z, 0.0);
    }

    #[test]
    fn test_half_orbit_negates_x() {
        // At t = π/speed the body has swept half a revolution.
        let orbit = Orbit::new(18.0, 0.8);
        let pos = orbit.position_at(PI / 0.8);
        assert_relative_eq!(pos.x, -18.0, epsilon = 1e-4);
        assert_relative_eq!(pos.z, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_quarter_orbit() {
        let orbit = Orbit::new(10.0, 1.0);
        let pos = orbit.position_at(PI / 2.0);
        assert_relative_eq!(pos.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(pos.z, 10.0, epsilon = 1e-5);
    }

    #[test]
    fn test_plane_offset_fixed() {
        let orbit = Orbit::with_plane_offset(6.0, 1.8, 0.5);
        for t in [0.0, 0.7, 3.1, 42.0] {
            assert_relative_eq!(orbit.position_at(t).y, 0.5);
        }
    }

    #[test]
    fn test_negative_speed_reverses_direction() {
        let forward = Orbit::new(10.0, 0.5);
        let backward = Orbit::new(10.0, -0.5);
        let t = 0.3;
        let f = forward.position_at(t);
        let b = backward.position_at(t);
        assert_relative_eq!(f.x, b.x, epsilon = 1e-5);
        assert_relative_eq!(f.z, -b.z, epsilon = 1e-5);
    }

    #[test]
    fn test_period() {
        let orbit = Orbit::new(10.0, 0.5);
        assert_relative_eq!(orbit.period().unwrap(), std::f32::consts::TAU / 0.5);

        let retrograde = Orbit::new(10.0, -2.0);
        assert_relative_eq!(retrograde.period().unwrap(), std::f32::consts::TAU / 2.0);

        assert!(Orbit::new(10.0, 0.0).period().is_none());
    }
}
