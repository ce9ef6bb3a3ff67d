//! Damped orbit camera around the scene origin
//!
//! Left-drag orbits, the scroll wheel zooms. Input writes target values;
//! the update system eases the live yaw/pitch/distance toward those
//! targets by the configured damping factor each frame, then rebuilds the
//! camera transform so it always faces the origin.

use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;

const MOUSE_SENSITIVITY: f32 = 0.005;
const ZOOM_STEP: f32 = 1.5;
// Keep pitch shy of the poles so yaw stays well-defined
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.05;

#[derive(Resource, Debug, Clone)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub target_yaw: f32,
    pub target_pitch: f32,
    pub target_distance: f32,
    pub damping: f32, // per-frame easing toward targets
    pub min_distance: f32,
    pub max_distance: f32,
}

impl OrbitCamera {
    /// Start on the +Z axis at `distance`, matching the initial camera
    /// position of the scene.
    pub fn new(distance: f32, damping: f32, far: f32) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance,
            target_yaw: 0.0,
            target_pitch: 0.0,
            target_distance: distance,
            damping,
            min_distance: 2.0,
            max_distance: far * 0.5,
        }
    }
}

/// Translate mouse input into orbit targets.
pub fn orbit_input_system(
    buttons: Res<ButtonInput<MouseButton>>,
    mut motion: EventReader<MouseMotion>,
    mut wheel: EventReader<MouseWheel>,
    mut orbit: ResMut<OrbitCamera>,
) {
    if buttons.pressed(MouseButton::Left) {
        for ev in motion.read() {
            orbit.target_yaw -= ev.delta.x * MOUSE_SENSITIVITY;
            orbit.target_pitch -= ev.delta.y * MOUSE_SENSITIVITY;
        }
        orbit.target_pitch = orbit.target_pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    } else {
        // Drop stale deltas so releasing the button doesn't jump the view
        motion.clear();
    }

    for ev in wheel.read() {
        orbit.target_distance = (orbit.target_distance - ev.y * ZOOM_STEP)
            .clamp(orbit.min_distance, orbit.max_distance);
    }
}

/// Ease toward the targets and reposition the camera looking at the origin.
pub fn orbit_update_system(
    mut orbit: ResMut<OrbitCamera>,
    mut query: Query<&mut Transform, With<Camera3d>>,
) {
    let d = orbit.damping;
    orbit.yaw += (orbit.target_yaw - orbit.yaw) * d;
    orbit.pitch += (orbit.target_pitch - orbit.pitch) * d;
    orbit.distance += (orbit.target_distance - orbit.distance) * d;

    let rotation = Quat::from_euler(EulerRot::YXZ, orbit.yaw, orbit.pitch, 0.0);
    for mut transform in &mut query {
        // Camera looks along its local -Z, so placing it on the rotated +Z
        // axis and applying the same rotation keeps the origin centered
        transform.translation = rotation * Vec3::new(0.0, 0.0, orbit.distance);
        transform.rotation = rotation;
    }
}
