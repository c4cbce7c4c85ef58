//! Rigid bodies

use crate::foundation::math::{Quat, Vec3};
use crate::physics::shape::{Aabb, CollisionShape};

/// Description and state of a body in the physics world
///
/// Passed to [`PhysicsWorld::add`](super::PhysicsWorld::add) to create a body
/// and returned by [`PhysicsWorld::body`](super::PhysicsWorld::body) as a
/// snapshot. A mass of zero makes the body static.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidBody {
    /// Collision shape in the body's local frame
    pub shape: CollisionShape,
    /// Mass in kilograms (0 = static)
    pub mass: f32,
    /// World position of the shape's centre
    pub position: Vec3,
    /// World rotation
    pub rotation: Quat,
    /// Linear velocity in units per second
    pub linear_velocity: Vec3,
    /// Angular velocity in radians per second
    pub angular_velocity: Vec3,
    /// Bounciness (0 = no bounce)
    pub restitution: f32,
    /// Friction coefficient
    pub friction: f32,
}

impl RigidBody {
    /// Body at the origin with no rotation or velocity
    pub fn new(shape: CollisionShape, mass: f32) -> Self {
        Self {
            shape,
            mass: mass.max(0.0),
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            linear_velocity: Vec3::zeros(),
            angular_velocity: Vec3::zeros(),
            restitution: 0.0,
            friction: 0.5,
        }
    }

    /// Set the position
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Set the rotation
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the initial velocity
    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.linear_velocity = velocity;
        self
    }

    /// Set restitution and friction
    pub fn with_material(mut self, restitution: f32, friction: f32) -> Self {
        self.restitution = restitution.max(0.0);
        self.friction = friction.max(0.0);
        self
    }

    /// Whether the body has zero mass
    pub fn is_static(&self) -> bool {
        self.mass <= 0.0
    }

    /// Current world bounds
    pub fn aabb(&self) -> Aabb {
        self.shape.aabb(self.position, &self.rotation)
    }
}
