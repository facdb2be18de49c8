//! Scene construction: lighting, the sun, planets, satellites, and rings.
//!
//! Runs once at startup. Satellites and rings are spawned as transform
//! children of their planet, so they inherit the parent's placement and
//! their own translations stay parent-relative.

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::FRAC_PI_2;

use crate::bodies::{catalog, RingSpec, SatelliteSpec, SUN_COLOR, SUN_RADIUS};
use crate::orbit::Orbit;
use crate::scene::materials::{body_material, sun_material};

/// Point-light intensity of the sun (lumens).
const SUNLIGHT_INTENSITY: f32 = 1.0e8;

/// Point-light range, covering the outermost orbit with margin.
const SUNLIGHT_RANGE: f32 = 2000.0;

/// Ambient brightness so the night sides of bodies stay visible.
const AMBIENT_BRIGHTNESS: f32 = 120.0;

/// Number of background stars.
const STAR_COUNT: usize = 400;

/// Radial shell the starfield occupies.
const STARFIELD_INNER: f32 = 700.0;
const STARFIELD_OUTER: f32 = 1400.0;

/// Component naming a spawned body, with its catalog color (reused for its
/// orbit-path guide).
#[derive(Component, Clone, Debug)]
pub struct CelestialBody {
    pub name: &'static str,
    pub color: Color,
}

/// Component marking a satellite and pointing back at its planet.
#[derive(Component, Clone, Copy, Debug)]
pub struct SatelliteOf(pub Entity);

/// Plugin providing one-time scene construction.
pub struct SceneBuilderPlugin;

impl Plugin for SceneBuilderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_lighting, spawn_solar_system, spawn_starfield));
    }
}

/// Spawn lighting: soft ambient fill plus a point light at the origin
/// acting as sunlight.
fn spawn_lighting(mut commands: Commands) {
    commands.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });

    commands.spawn((
        PointLight {
            intensity: SUNLIGHT_INTENSITY,
            range: SUNLIGHT_RANGE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));

    info!("Scene lighting initialized");
}

/// Spawn the sun and every cataloged planet, with satellites and rings as
/// children.
fn spawn_solar_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
) {
    // Sun: emissive, anchored at the origin, not an orbiting body.
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(SUN_RADIUS))),
        MeshMaterial3d(materials.add(sun_material(SUN_COLOR))),
        Transform::default(),
        CelestialBody {
            name: "Sun",
            color: SUN_COLOR,
        },
    ));

    let specs = catalog();
    for spec in &specs {
        let planet = commands
            .spawn((
                Mesh3d(meshes.add(Sphere::new(spec.radius))),
                MeshMaterial3d(materials.add(body_material(
                    &asset_server,
                    spec.color,
                    spec.texture,
                ))),
                // Initial-placement convention: along +x at the orbital radius.
                Transform::from_xyz(spec.orbital_radius, 0.0, 0.0),
                Orbit::new(spec.orbital_radius, spec.orbital_speed),
                CelestialBody {
                    name: spec.name,
                    color: spec.color,
                },
            ))
            .id();

        if let Some(sat) = &spec.satellite {
            spawn_satellite(
                &mut commands,
                &mut meshes,
                &mut materials,
                &asset_server,
                planet,
                sat,
            );
        }

        if let Some(ring) = &spec.ring {
            spawn_ring(&mut commands, &mut meshes, &mut materials, planet, ring);
        }
    }

    info!("Spawned {} planets", specs.len());
}

/// Spawn a satellite as a child of its planet.
///
/// The child's translation is parent-relative, so the per-frame orbital
/// formula needs no knowledge of the parent's position; Bevy's transform
/// propagation produces the compound world placement.
fn spawn_satellite(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    asset_server: &AssetServer,
    planet: Entity,
    sat: &SatelliteSpec,
) {
    commands.entity(planet).with_children(|children| {
        children.spawn((
            Mesh3d(meshes.add(Sphere::new(sat.radius))),
            MeshMaterial3d(materials.add(body_material(asset_server, sat.color, sat.texture))),
            Transform::from_xyz(sat.orbital_radius, sat.plane_offset, 0.0),
            Orbit::with_plane_offset(sat.orbital_radius, sat.orbital_speed, sat.plane_offset),
            CelestialBody {
                name: sat.name,
                color: sat.color,
            },
            SatelliteOf(planet),
        ));
    });
}

/// Spawn a flat ring as a child of its planet.
///
/// Carries no `Orbit`: it holds a fixed pose in the parent's frame and
/// rides along via transform inheritance.
fn spawn_ring(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    planet: Entity,
    ring: &RingSpec,
) {
    commands.entity(planet).with_children(|children| {
        children.spawn((
            Mesh3d(meshes.add(Annulus::new(ring.inner_radius, ring.outer_radius))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: ring.color,
                double_sided: true,
                cull_mode: None,
                ..default()
            })),
            // Annulus meshes lie in the XY plane; tip into the orbit plane.
            Transform::from_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
        ));
    });
}

/// Spawn a sparse starfield shell around the solar system.
fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let star_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::WHITE * 0.5,
        unlit: true,
        ..default()
    });
    let star_mesh = meshes.add(Sphere::new(0.6));

    let mut rng = rand::thread_rng();
    for _ in 0..STAR_COUNT {
        // Random direction, rejecting near-zero vectors before normalizing.
        let dir = loop {
            let v = Vec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            if v.length_squared() > 1e-3 {
                break v.normalize();
            }
        };
        let radius = rng.gen_range(STARFIELD_INNER..STARFIELD_OUTER);
        let scale = rng.gen_range(0.5..1.5);

        commands.spawn((
            Mesh3d(star_mesh.clone()),
            MeshMaterial3d(star_material.clone()),
            Transform::from_translation(dir * radius).with_scale(Vec3::splat(scale)),
        ));
    }

    info!("Spawned {} background stars", STAR_COUNT);
}
