//! Property-based tests for orbital motion using proptest.
//!
//! These verify the geometric invariants that hold for every body at every
//! elapsed time, across a wide range of parameters.

use proptest::prelude::*;
use std::f32::consts::TAU;

use super::Orbit;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A body's distance from its parent equals the orbital radius at all
    /// times (the orbit is a circle centered on the parent).
    #[test]
    fn prop_distance_equals_orbital_radius(
        radius in 0.1f32..500.0,
        speed in -5.0f32..5.0,
        elapsed in 0.0f32..10_000.0,
    ) {
        let orbit = Orbit::new(radius, speed);
        let pos = orbit.position_at(elapsed);
        let dist = (pos.x * pos.x + pos.z * pos.z).sqrt();

        // Tolerance scales with the magnitude of the phase angle, since
        // cos/sin of large f32 arguments lose precision.
        let tol = radius * 1e-4 + 1e-3;
        prop_assert!(
            (dist - radius).abs() < tol,
            "distance {} deviates from radius {} at t={}, speed={}",
            dist, radius, elapsed, speed
        );
    }

    /// One full period returns a body to (approximately) the same position.
    #[test]
    fn prop_periodicity(
        radius in 0.5f32..200.0,
        speed in 0.05f32..3.0,
        elapsed in 0.0f32..100.0,
    ) {
        let orbit = Orbit::new(radius, speed);
        let period = orbit.period().unwrap();

        let a = orbit.position_at(elapsed);
        let b = orbit.position_at(elapsed + period);

        let tol = radius * 1e-3 + 1e-3;
        prop_assert!(
            (a - b).length() < tol,
            "position after one period drifted by {} (radius {}, speed {})",
            (a - b).length(), radius, speed
        );
    }

    /// The orbit-plane coordinate never changes, whatever the elapsed time.
    #[test]
    fn prop_plane_offset_invariant(
        radius in 0.1f32..200.0,
        speed in -3.0f32..3.0,
        plane_offset in -10.0f32..10.0,
        elapsed in 0.0f32..10_000.0,
    ) {
        let orbit = Orbit::with_plane_offset(radius, speed, plane_offset);
        prop_assert_eq!(orbit.position_at(elapsed).y, plane_offset);
    }

    /// A satellite's world position is its parent's world position plus the
    /// satellite's own parent-relative offset (compound motion).
    #[test]
    fn prop_satellite_composition(
        parent_radius in 10.0f32..200.0,
        parent_speed in 0.05f32..2.0,
        sat_radius in 0.5f32..8.0,
        sat_speed in 0.05f32..4.0,
        elapsed in 0.0f32..1_000.0,
    ) {
        let parent = Orbit::new(parent_radius, parent_speed);
        let satellite = Orbit::new(sat_radius, sat_speed);

        let world = parent.position_at(elapsed) + satellite.position_at(elapsed);
        let offset = world - parent.position_at(elapsed);

        // The satellite stays on a circle of its own radius around the
        // parent, wherever the parent currently is.
        let dist = (offset.x * offset.x + offset.z * offset.z).sqrt();
        let tol = sat_radius * 1e-3 + 1e-3;
        prop_assert!(
            (dist - sat_radius).abs() < tol,
            "satellite offset {} deviates from radius {} at t={}",
            dist, sat_radius, elapsed
        );
    }

    /// Sweeping a full turn in N steps never leaves the circle, and the
    /// swept angle matches speed × time (mod 2π).
    #[test]
    fn prop_phase_angle_matches_speed(
        radius in 1.0f32..100.0,
        speed in 0.1f32..2.0,
        elapsed in 0.0f32..100.0,
    ) {
        let orbit = Orbit::new(radius, speed);
        let pos = orbit.position_at(elapsed);

        let phase = pos.z.atan2(pos.x).rem_euclid(TAU);
        let expected = (elapsed * speed).rem_euclid(TAU);

        // Compare angles modulo 2π, allowing wraparound at the seam.
        let diff = (phase - expected).rem_euclid(TAU);
        let diff = diff.min(TAU - diff);
        prop_assert!(
            diff < 1e-2,
            "phase {} != expected {} (t={}, speed={})",
            phase, expected, elapsed, speed
        );
    }
}
