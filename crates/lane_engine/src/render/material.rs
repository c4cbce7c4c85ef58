//! Material system for rendering

use serde::{Deserialize, Serialize};
use crate::assets::{AssetHandle, Texture};
use crate::render::Color;

/// Shading model a material is rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MaterialDefinition {
    /// Per-pixel lighting with diffuse map and specular shininess
    #[default]
    Lighting,
    /// Flat colour or texture, no lighting
    Unshaded,
}

/// Surface description for a geometry
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Shading model
    pub definition: MaterialDefinition,
    /// Diffuse texture
    pub diffuse_map: Option<AssetHandle<Texture>>,
    /// Diffuse colour, multiplied with the texture
    pub diffuse_color: Color,
    /// Specular exponent
    pub shininess: f32,
}

impl Material {
    /// Create a material with white diffuse and no texture
    pub fn new(definition: MaterialDefinition) -> Self {
        Self {
            definition,
            diffuse_map: None,
            diffuse_color: Color::WHITE,
            shininess: 0.0,
        }
    }

    /// Lit material
    pub fn lighting() -> Self {
        Self::new(MaterialDefinition::Lighting)
    }

    /// Set the diffuse texture
    pub fn with_diffuse_map(mut self, texture: AssetHandle<Texture>) -> Self {
        self.diffuse_map = Some(texture);
        self
    }

    /// Set the diffuse colour
    pub fn with_diffuse_color(mut self, color: Color) -> Self {
        self.diffuse_color = color;
        self
    }

    /// Set the specular exponent
    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess.max(0.0);
        self
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::lighting()
    }
}
