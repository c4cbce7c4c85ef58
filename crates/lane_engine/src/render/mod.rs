//! Render descriptions
//!
//! Meshes, materials, lights and the camera as plain data. Geometry nodes in
//! the scene graph carry these so a renderer can draw the scene; the engine
//! itself does not rasterize anything.

pub mod camera;
pub mod color;
pub mod fly_camera;
pub mod light;
pub mod material;
pub mod mesh;

pub use camera::Camera;
pub use color::Color;
pub use fly_camera::FlyCamera;
pub use light::{Light, LightKind};
pub use material::{Material, MaterialDefinition};
pub use mesh::{Mesh, MeshShape};
