//! Static catalog of celestial bodies for the solar-system visualization.
//!
//! Radii and orbital distances are in render units, chosen for visual
//! balance rather than astronomical accuracy. Orbital speeds are unitless
//! multipliers on elapsed real time (radians per second of wall clock) —
//! deliberately not calibrated to real periods.

use bevy::prelude::*;

/// Sun's render radius.
pub const SUN_RADIUS: f32 = 10.0;

/// Sun's surface color (also used, amplified, as its emissive term).
pub const SUN_COLOR: Color = Color::srgb(1.0, 0.95, 0.4);

/// Authored data for one orbiting body.
///
/// Immutable after construction; the runtime copies `orbital_radius` and
/// `orbital_speed` into an `Orbit` component at spawn time.
#[derive(Clone, Debug)]
pub struct CelestialBodySpec {
    /// Human-readable name, unique within the catalog.
    pub name: &'static str,
    /// Render radius of the sphere.
    pub radius: f32,
    /// Flat base color, used directly when no texture is given (or when the
    /// texture file is missing).
    pub color: Color,
    /// Optional texture path, relative to the assets directory.
    pub texture: Option<&'static str>,
    /// Distance from the parent's center.
    pub orbital_radius: f32,
    /// Angular speed in radians per elapsed second; sign selects direction.
    pub orbital_speed: f32,
    /// Optional satellite orbiting this body (parent-relative).
    pub satellite: Option<SatelliteSpec>,
    /// Optional flat ring around this body.
    pub ring: Option<RingSpec>,
}

/// Authored data for a satellite (e.g. the Moon).
///
/// Positioned relative to its parent's local frame; `plane_offset` lifts the
/// satellite's orbit plane slightly so it doesn't hide behind the parent.
#[derive(Clone, Debug)]
pub struct SatelliteSpec {
    pub name: &'static str,
    pub radius: f32,
    pub color: Color,
    pub texture: Option<&'static str>,
    pub orbital_radius: f32,
    pub orbital_speed: f32,
    /// Fixed parent-relative y of the satellite's orbit plane.
    pub plane_offset: f32,
}

/// Authored data for a planetary ring (e.g. Saturn's).
#[derive(Clone, Debug)]
pub struct RingSpec {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub color: Color,
}

/// The eight planets, in orbital order.
///
/// Earth carries the Moon; Saturn carries its ring. Built at startup and
/// never consulted again once the scene is spawned.
pub fn catalog() -> Vec<CelestialBodySpec> {
    vec![
        CelestialBodySpec {
            name: "Mercury",
            radius: 0.8,
            color: Color::srgb(0.6, 0.6, 0.6),
            texture: None,
            orbital_radius: 18.0,
            orbital_speed: 0.8,
            satellite: None,
            ring: None,
        },
        CelestialBodySpec {
            name: "Venus",
            radius: 1.2,
            color: Color::srgb(0.9, 0.85, 0.7),
            texture: None,
            orbital_radius: 26.0,
            orbital_speed: 0.6,
            satellite: None,
            ring: None,
        },
        CelestialBodySpec {
            name: "Earth",
            radius: 1.3,
            color: Color::srgb(0.2, 0.5, 0.8),
            texture: None,
            orbital_radius: 35.0,
            orbital_speed: 0.5,
            satellite: Some(SatelliteSpec {
                name: "Moon",
                radius: 0.35,
                color: Color::srgb(0.7, 0.7, 0.7),
                texture: None,
                orbital_radius: 6.0,
                orbital_speed: 1.8,
                plane_offset: 0.5,
            }),
            ring: None,
        },
        CelestialBodySpec {
            name: "Mars",
            radius: 1.0,
            color: Color::srgb(0.8, 0.4, 0.2),
            texture: None,
            orbital_radius: 45.0,
            orbital_speed: 0.35,
            satellite: None,
            ring: None,
        },
        CelestialBodySpec {
            name: "Jupiter",
            radius: 4.0,
            color: Color::srgb(0.8, 0.7, 0.6),
            texture: None,
            orbital_radius: 70.0,
            orbital_speed: 0.2,
            satellite: None,
            ring: None,
        },
        CelestialBodySpec {
            name: "Saturn",
            radius: 3.5,
            color: Color::srgb(0.9, 0.85, 0.6),
            texture: None,
            orbital_radius: 90.0,
            orbital_speed: 0.15,
            satellite: None,
            ring: Some(RingSpec {
                inner_radius: 4.5,
                outer_radius: 7.5,
                color: Color::srgb(0.85, 0.78, 0.6),
            }),
        },
        CelestialBodySpec {
            name: "Uranus",
            radius: 2.2,
            color: Color::srgb(0.6, 0.8, 0.9),
            texture: None,
            orbital_radius: 110.0,
            orbital_speed: 0.1,
            satellite: None,
            ring: None,
        },
        CelestialBodySpec {
            name: "Neptune",
            radius: 2.1,
            color: Color::srgb(0.3, 0.5, 0.9),
            texture: None,
            orbital_radius: 130.0,
            orbital_speed: 0.08,
            satellite: None,
            ring: None,
        },
    ]
}
