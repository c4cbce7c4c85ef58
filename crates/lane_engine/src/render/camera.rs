//! # 3D Camera
//!
//! Position plus look-at target, in a right-handed Y-up world. The camera
//! owns no projection matrices; it describes where the view is and where it
//! points, which is all the scene and the physics-facing code need.

use crate::foundation::math::{utils, Quat, Vec3};

/// Below this length a direction is treated as degenerate
const MIN_DIRECTION_LENGTH: f32 = 1e-6;

/// 3D camera
///
/// `direction()` is derived from `position` and `target`, so moving the
/// camera with [`Camera::set_position`] keeps the view direction while
/// [`Camera::look_at`] re-aims it.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,

    /// Point the camera is looking at in world space
    pub target: Vec3,

    /// Up vector for camera orientation (typically +Y)
    pub up: Vec3,

    /// Vertical field of view in radians
    pub fov: f32,

    /// Aspect ratio (width / height)
    pub aspect: f32,
}

impl Camera {
    /// Perspective camera at `position` looking at the origin
    pub fn perspective(position: Vec3, fov_degrees: f32, aspect: f32) -> Self {
        Self {
            position,
            target: Vec3::zeros(),
            up: Vec3::y(),
            fov: utils::deg_to_rad(fov_degrees),
            aspect,
        }
    }

    /// Move the camera, keeping its view direction
    pub fn set_position(&mut self, position: Vec3) {
        let offset = self.target - self.position;
        self.position = position;
        self.target = position + offset;
        log::trace!("Camera position updated to: {:?}", position);
    }

    /// Aim the camera at `target` with the given up vector
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        self.target = target;
        self.up = up;
        log::trace!("Camera look_at updated - target: {:?}, up: {:?}", target, up);
    }

    /// Update the aspect ratio after a viewport change
    pub fn set_aspect_ratio(&mut self, aspect: f32) {
        if (self.aspect - aspect).abs() > 0.01 {
            log::info!("Camera aspect ratio changed: {:.3} -> {:.3}", self.aspect, aspect);
        }
        self.aspect = aspect;
    }

    /// Unit view direction, or `None` when position and target coincide
    pub fn try_direction(&self) -> Option<Vec3> {
        (self.target - self.position).try_normalize(MIN_DIRECTION_LENGTH)
    }

    /// Unit view direction; -Z when position and target coincide
    pub fn direction(&self) -> Vec3 {
        self.try_direction().unwrap_or_else(|| -Vec3::z())
    }

    /// Unit vector pointing to the camera's left
    pub fn left(&self) -> Vec3 {
        self.up
            .cross(&self.direction())
            .try_normalize(MIN_DIRECTION_LENGTH)
            .unwrap_or_else(|| -Vec3::x())
    }

    /// Rotate the view direction around the world up axis
    pub fn yaw(&mut self, angle: f32) {
        let rotation = Quat::from_axis_angle(&Vec3::y_axis(), angle);
        self.rotate_view(rotation);
    }

    /// Tilt the view direction up (positive) or down
    ///
    /// The tilt stops short of looking straight up or down.
    pub fn pitch(&mut self, angle: f32) {
        let Some(axis) = nalgebra::Unit::try_new(self.left(), MIN_DIRECTION_LENGTH) else {
            return;
        };
        let rotation = Quat::from_axis_angle(&axis, -angle);
        let turned = rotation * self.direction();
        if turned.cross(&self.up).norm() > 0.05 {
            self.rotate_view(rotation);
        }
    }

    fn rotate_view(&mut self, rotation: Quat) {
        let offset = self.target - self.position;
        let distance = offset.norm().max(1.0);
        self.target = self.position + rotation * self.direction() * distance;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::perspective(Vec3::new(0.0, 0.0, 10.0), 45.0, 16.0 / 9.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::constants::HALF_PI;
    use approx::assert_relative_eq;

    fn lane_camera() -> Camera {
        let mut camera = Camera::default();
        camera.set_position(Vec3::new(0.0, 6.0, 20.0));
        camera.look_at(Vec3::new(0.0, 2.0, 0.0), Vec3::y());
        camera
    }

    #[test]
    fn test_direction_points_at_target() {
        let camera = lane_camera();
        let expected = Vec3::new(0.0, -4.0, -20.0).normalize();
        assert_relative_eq!(camera.direction(), expected, epsilon = 1e-6);
    }

    #[test]
    fn test_set_position_keeps_direction() {
        let mut camera = lane_camera();
        let before = camera.direction();
        camera.set_position(Vec3::new(3.0, 1.0, 4.0));
        assert_relative_eq!(camera.direction(), before, epsilon = 1e-6);
    }

    #[test]
    fn test_degenerate_direction() {
        let mut camera = Camera::default();
        camera.look_at(camera.position, Vec3::y());
        assert!(camera.try_direction().is_none());
        assert_relative_eq!(camera.direction(), -Vec3::z());
    }

    #[test]
    fn test_yaw_quarter_turn() {
        let mut camera = Camera::default();
        camera.look_at(Vec3::new(0.0, 0.0, 0.0), Vec3::y());
        camera.yaw(HALF_PI);
        assert_relative_eq!(camera.direction(), -Vec3::x(), epsilon = 1e-5);
    }

    #[test]
    fn test_pitch_stops_before_vertical() {
        let mut camera = Camera::default();
        camera.look_at(Vec3::new(0.0, 0.0, 0.0), Vec3::y());

        camera.pitch(0.3);
        assert!(camera.direction().y > 0.0);

        for _ in 0..20 {
            camera.pitch(0.3);
        }
        assert!(camera.direction().y < 1.0);
    }

    #[test]
    fn test_left_is_perpendicular() {
        let camera = lane_camera();
        assert_relative_eq!(camera.left().dot(&camera.direction()), 0.0, epsilon = 1e-6);
        assert_relative_eq!(camera.left(), -Vec3::x(), epsilon = 1e-6);
    }
}
