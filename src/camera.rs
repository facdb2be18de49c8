//! Camera system for the solar-system visualization.
//!
//! Provides damped orbit, zoom, and pan controls around a target point,
//! plus projection aspect updates on window resize.

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    prelude::*,
    window::WindowResized,
};

/// Minimum camera distance from the target (closest zoom).
pub const MIN_DISTANCE: f32 = 20.0;

/// Maximum camera distance from the target (furthest zoom).
pub const MAX_DISTANCE: f32 = 400.0;

/// Default distance showing the full planet set.
pub const DEFAULT_DISTANCE: f32 = 140.0;

/// Default pitch above the ecliptic plane (radians).
pub const DEFAULT_PITCH: f32 = 0.5;

/// Pitch clamp, just short of the poles to avoid gimbal flip.
pub const PITCH_LIMIT: f32 = 1.54;

/// Orbit speed in radians per pixel of mouse motion.
pub const ORBIT_SPEED: f32 = 0.005;

/// Zoom speed multiplier for scroll wheel.
pub const ZOOM_SPEED: f32 = 0.1;

/// Pan speed in target-units per pixel, scaled by current distance.
pub const PAN_SPEED: f32 = 0.0015;

/// Fraction of the outstanding delta applied per frame when damping.
pub const DAMPING_FACTOR: f32 = 0.15;

/// Vertical field of view (radians).
pub const FOV: f32 = 0.9;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Resource owning the orbit-camera state.
///
/// Input systems write the `goal_*` fields; `advance` moves the current
/// state a damped fraction toward the goals each frame, so visible motion
/// decays toward the user's last input rather than snapping.
#[derive(Resource, Clone, Debug)]
pub struct OrbitController {
    /// Point the camera looks at and orbits around.
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub goal_target: Vec3,
    pub goal_yaw: f32,
    pub goal_pitch: f32,
    pub goal_distance: f32,
    pub damping_enabled: bool,
    pub damping_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            yaw: 0.0,
            pitch: DEFAULT_PITCH,
            distance: DEFAULT_DISTANCE,
            goal_target: Vec3::ZERO,
            goal_yaw: 0.0,
            goal_pitch: DEFAULT_PITCH,
            goal_distance: DEFAULT_DISTANCE,
            damping_enabled: true,
            damping_factor: DAMPING_FACTOR,
            min_distance: MIN_DISTANCE,
            max_distance: MAX_DISTANCE,
        }
    }
}

impl OrbitController {
    /// Apply a drag delta (pixels) to the goal orientation.
    pub fn orbit_by(&mut self, delta: Vec2) {
        self.goal_yaw += delta.x * ORBIT_SPEED;
        self.goal_pitch =
            (self.goal_pitch + delta.y * ORBIT_SPEED).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Apply a scroll delta to the goal distance, clamped to the configured
    /// range. Multiplicative, so zoom feels uniform at every scale.
    pub fn zoom_by(&mut self, scroll: f32) {
        let factor = 1.0 - scroll * ZOOM_SPEED;
        self.goal_distance =
            (self.goal_distance * factor).clamp(self.min_distance, self.max_distance);
    }

    /// Apply a drag delta (pixels) to the goal target, moving it in the
    /// camera's view plane. Scaled by distance so panning covers the same
    /// screen fraction at any zoom.
    pub fn pan_by(&mut self, delta: Vec2) {
        let forward = (self.target - self.eye()).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);
        let scale = self.distance * PAN_SPEED;
        self.goal_target += (-right * delta.x + up * delta.y) * scale;
    }

    /// Advance the damped state one frame toward the goals.
    ///
    /// With damping enabled, each call closes `damping_factor` of the
    /// outstanding delta; otherwise the state jumps to the goal. Distance
    /// is re-clamped after the step so no sequence of inputs can leave the
    /// configured range.
    pub fn advance(&mut self) {
        if self.damping_enabled {
            let k = self.damping_factor;
            self.yaw += (self.goal_yaw - self.yaw) * k;
            self.pitch += (self.goal_pitch - self.pitch) * k;
            self.distance += (self.goal_distance - self.distance) * k;
            self.target = self.target.lerp(self.goal_target, k);
        } else {
            self.yaw = self.goal_yaw;
            self.pitch = self.goal_pitch;
            self.distance = self.goal_distance;
            self.target = self.goal_target;
        }
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.distance = self.distance.clamp(self.min_distance, self.max_distance);
    }

    /// Camera position implied by the current state.
    pub fn eye(&self) -> Vec3 {
        let offset = Vec3::new(
            self.pitch.cos() * self.yaw.cos(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.sin(),
        ) * self.distance;
        self.target + offset
    }
}

/// Plugin providing camera spawning, controls, and resize handling.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitController>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (
                    (orbit_input, zoom_input, pan_input),
                    update_camera,
                    handle_resize,
                )
                    .chain(),
            );
    }
}

/// Spawn the main camera with a perspective projection.
fn setup_camera(mut commands: Commands, controller: Res<OrbitController>) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: FOV,
            near: 0.1,
            far: 2000.0,
            ..default()
        }),
        Transform::from_translation(controller.eye()).looking_at(controller.target, Vec3::Y),
        MainCamera,
    ));
}

/// Left-drag orbits the camera around the target.
fn orbit_input(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mut controller: ResMut<OrbitController>,
) {
    if !mouse_buttons.pressed(MouseButton::Left) {
        return;
    }
    if mouse_motion.delta == Vec2::ZERO {
        return;
    }
    controller.orbit_by(mouse_motion.delta);
}

/// Scroll wheel zooms toward/away from the target.
fn zoom_input(
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut controller: ResMut<OrbitController>,
) {
    if mouse_scroll.delta.y == 0.0 {
        return;
    }
    controller.zoom_by(mouse_scroll.delta.y);
}

/// Right-drag pans the target point in the view plane.
fn pan_input(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mut controller: ResMut<OrbitController>,
) {
    if !mouse_buttons.pressed(MouseButton::Right) {
        return;
    }
    if mouse_motion.delta == Vec2::ZERO {
        return;
    }
    controller.pan_by(mouse_motion.delta);
}

/// Advance the damped controller state and place the camera.
pub fn update_camera(
    mut controller: ResMut<OrbitController>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    controller.advance();

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };
    *transform =
        Transform::from_translation(controller.eye()).looking_at(controller.target, Vec3::Y);
}

/// Recompute the projection aspect ratio when the window is resized.
///
/// Idempotent: resizing twice to the same dimensions leaves the projection
/// unchanged. Bevy resizes the render surface itself.
pub fn handle_resize(
    mut resize_events: MessageReader<WindowResized>,
    mut camera_query: Query<&mut Projection, With<MainCamera>>,
) {
    let Some(event) = resize_events.read().last() else {
        return;
    };

    let Ok(mut projection) = camera_query.single_mut() else {
        return;
    };
    let Projection::Perspective(ref mut perspective) = *projection else {
        return;
    };
    apply_resize(perspective, event.width, event.height);
}

/// Recompute the aspect ratio from new viewport dimensions.
///
/// Degenerate dimensions are ignored so a minimized window cannot poison
/// the projection.
pub fn apply_resize(perspective: &mut PerspectiveProjection, width: f32, height: f32) {
    if width <= 0.0 || height <= 0.0 {
        return;
    }
    perspective.aspect_ratio = width / height;
}
