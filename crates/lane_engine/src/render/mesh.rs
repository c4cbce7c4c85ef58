//! Procedural mesh descriptions
//!
//! Meshes are kept as shape parameters; tessellation is left to whatever
//! renderer consumes the scene. Each mesh also knows the collision shape
//! that matches it.

use serde::{Deserialize, Serialize};
use crate::foundation::math::{Vec2, Vec3};
use crate::physics::CollisionShape;

/// Primitive shape of a mesh
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MeshShape {
    /// Axis-aligned box centred on the origin
    Box {
        /// Half size along each axis
        half_extents: Vec3,
    },
    /// UV sphere centred on the origin
    Sphere {
        /// Samples from pole to pole
        z_samples: u32,
        /// Samples around the equator
        radial_samples: u32,
        /// Sphere radius
        radius: f32,
    },
    /// Cylinder centred on the origin, axis along Z
    Cylinder {
        /// Samples along the axis
        axis_samples: u32,
        /// Samples around the circumference
        radial_samples: u32,
        /// Cylinder radius
        radius: f32,
        /// Full length along the axis
        height: f32,
        /// Whether the ends are capped
        closed: bool,
    },
}

/// A renderable mesh
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Shape parameters
    pub shape: MeshShape,
    /// Multiplier applied to texture coordinates
    pub tex_coord_scale: Vec2,
}

impl Mesh {
    fn from_shape(shape: MeshShape) -> Self {
        Self {
            shape,
            tex_coord_scale: Vec2::new(1.0, 1.0),
        }
    }

    /// Box with the given half extents
    pub fn cuboid(half_extents: Vec3) -> Self {
        Self::from_shape(MeshShape::Box { half_extents })
    }

    /// UV sphere
    pub fn sphere(z_samples: u32, radial_samples: u32, radius: f32) -> Self {
        Self::from_shape(MeshShape::Sphere { z_samples, radial_samples, radius })
    }

    /// Cylinder along local Z
    pub fn cylinder(axis_samples: u32, radial_samples: u32, radius: f32, height: f32, closed: bool) -> Self {
        Self::from_shape(MeshShape::Cylinder { axis_samples, radial_samples, radius, height, closed })
    }

    /// Multiply the texture coordinates, tiling a repeating texture
    pub fn scale_texture_coordinates(&mut self, scale: Vec2) -> &mut Self {
        self.tex_coord_scale = self.tex_coord_scale.component_mul(&scale);
        self
    }

    /// Collision shape matching the mesh
    pub fn collision_shape(&self) -> CollisionShape {
        match self.shape {
            MeshShape::Box { half_extents } => CollisionShape::Box { half_extents },
            MeshShape::Sphere { radius, .. } => CollisionShape::Sphere { radius },
            MeshShape::Cylinder { radius, height, .. } => CollisionShape::Cylinder { radius, height },
        }
    }
}
