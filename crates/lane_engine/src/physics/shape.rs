//! Collision shapes and bounding boxes

use serde::{Deserialize, Serialize};
use crate::foundation::math::{abs_rotation_matrix, Quat, Vec3};

/// Shape of a rigid body in its local frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CollisionShape {
    /// Box centred on the origin
    Box {
        /// Half size along each local axis
        half_extents: Vec3,
    },
    /// Sphere centred on the origin
    Sphere {
        /// Sphere radius
        radius: f32,
    },
    /// Cylinder centred on the origin with its axis along local Z
    Cylinder {
        /// Cylinder radius
        radius: f32,
        /// Full length along the axis
        height: f32,
    },
}

impl CollisionShape {
    /// Local half extents of the shape's bounding box
    pub fn half_extents(&self) -> Vec3 {
        match *self {
            Self::Box { half_extents } => half_extents,
            Self::Sphere { radius } => Vec3::repeat(radius),
            Self::Cylinder { radius, height } => Vec3::new(radius, radius, height * 0.5),
        }
    }

    /// World-aligned bounding box at `position` with `rotation`
    pub fn aabb(&self, position: Vec3, rotation: &Quat) -> Aabb {
        let half = match *self {
            Self::Sphere { radius } => Vec3::repeat(radius),
            _ => abs_rotation_matrix(rotation) * self.half_extents(),
        };
        Aabb::from_center_half_extents(position, half)
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Aabb {
    /// Box around `center` reaching `half` along each axis
    pub fn from_center_half_extents(center: Vec3, half: Vec3) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Centre point
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Half size along each axis
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Whether the boxes overlap (touching counts)
    pub fn intersects(&self, other: &Aabb) -> bool {
        (0..3).all(|i| self.min[i] <= other.max[i] && other.min[i] <= self.max[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::constants::HALF_PI;
    use approx::assert_relative_eq;

    #[test]
    fn test_upright_pin_bounds() {
        let pin = CollisionShape::Cylinder { radius: 0.3, height: 2.5 };
        let rotation = Quat::from_euler_angles(-HALF_PI, 0.0, 0.0);

        let aabb = pin.aabb(Vec3::new(0.0, 0.75, 0.0), &rotation);

        assert_relative_eq!(aabb.min, Vec3::new(-0.3, -0.5, -0.3), epsilon = 1e-5);
        assert_relative_eq!(aabb.max, Vec3::new(0.3, 2.0, 0.3), epsilon = 1e-5);
    }

    #[test]
    fn test_sphere_bounds_ignore_rotation() {
        let ball = CollisionShape::Sphere { radius: 0.7 };
        let rotation = Quat::from_euler_angles(0.3, 1.2, -0.4);

        let aabb = ball.aabb(Vec3::zeros(), &rotation);
        assert_relative_eq!(aabb.half_extents(), Vec3::repeat(0.7), epsilon = 1e-6);
    }

    #[test]
    fn test_aabb_intersection() {
        let a = Aabb::from_center_half_extents(Vec3::zeros(), Vec3::repeat(1.0));
        let touching = Aabb::from_center_half_extents(Vec3::new(2.0, 0.0, 0.0), Vec3::repeat(1.0));
        let apart = Aabb::from_center_half_extents(Vec3::new(2.5, 0.0, 0.0), Vec3::repeat(1.0));

        assert!(a.intersects(&touching));
        assert!(!a.intersects(&apart));
        assert_relative_eq!(touching.center(), Vec3::new(2.0, 0.0, 0.0));
    }
}
