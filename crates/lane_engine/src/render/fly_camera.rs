//! Keyboard fly-through camera controller
//!
//! W/S move forward and back, A/D strafe, Q/Z rise and sink, arrow keys turn.

use serde::{Deserialize, Serialize};
use crate::foundation::math::Vec3;
use crate::input::{InputManager, KeyCode};
use crate::render::Camera;

/// Fly camera settings and controller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlyCamera {
    /// Whether the controller moves the camera
    pub enabled: bool,
    /// Movement speed in units per second
    pub move_speed: f32,
    /// Turn speed in radians per second
    pub rotation_speed: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self {
            enabled: true,
            move_speed: 3.0,
            rotation_speed: 1.0,
        }
    }
}

impl FlyCamera {
    /// Move and turn `camera` from the keys currently held
    pub fn update(&self, camera: &mut Camera, input: &InputManager, dt: f32) {
        if !self.enabled || dt <= 0.0 {
            return;
        }

        let axis = |positive: KeyCode, negative: KeyCode| -> f32 {
            f32::from(u8::from(input.is_key_down(positive))) - f32::from(u8::from(input.is_key_down(negative)))
        };

        let turn = axis(KeyCode::Left, KeyCode::Right);
        if turn != 0.0 {
            camera.yaw(turn * self.rotation_speed * dt);
        }

        let tilt = axis(KeyCode::Up, KeyCode::Down);
        if tilt != 0.0 {
            camera.pitch(tilt * self.rotation_speed * dt);
        }

        let movement = camera.direction() * axis(KeyCode::W, KeyCode::S)
            + camera.left() * axis(KeyCode::A, KeyCode::D)
            + camera.up * axis(KeyCode::Q, KeyCode::Z);

        if movement != Vec3::zeros() {
            let position = camera.position + movement * self.move_speed * dt;
            camera.set_position(position);
        }
    }
}
