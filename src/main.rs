//! Orrery - Animated Solar-System Visualization
//!
//! A desktop application rendering the sun, planets, a moon, and a
//! planetary ring on circular orbits, viewed through a damped orbit camera.

use bevy::prelude::*;

use orrery::camera::CameraPlugin;
use orrery::clock::ClockPlugin;
use orrery::scene::ScenePlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .insert_resource(ClearColor(Color::BLACK))
        // Add visualization plugins
        .add_plugins((ClockPlugin, CameraPlugin, ScenePlugin))
        .run();
}
