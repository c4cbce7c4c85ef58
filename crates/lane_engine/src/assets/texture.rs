//! Texture assets and their load-time sampling options

use serde::{Deserialize, Serialize};
use crate::assets::{Asset, AssetError, ImageData};

/// Texture coordinate wrapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WrapMode {
    /// Clamp coordinates to the edge texels
    #[default]
    EdgeClamp,
    /// Tile the texture
    Repeat,
}

/// Identifies a texture file plus how it should be sampled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureKey {
    /// Asset path relative to the search paths
    pub path: String,
    /// Build a full mip chain
    #[serde(default)]
    pub generate_mips: bool,
    /// Wrap mode applied on both axes
    #[serde(default)]
    pub wrap: WrapMode,
}

impl TextureKey {
    /// Key with no mips and clamped edges
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            generate_mips: false,
            wrap: WrapMode::EdgeClamp,
        }
    }

    /// Request mipmap generation
    pub fn with_mips(mut self, generate_mips: bool) -> Self {
        self.generate_mips = generate_mips;
        self
    }

    /// Set the wrap mode
    pub fn with_wrap(mut self, wrap: WrapMode) -> Self {
        self.wrap = wrap;
        self
    }

    pub(crate) fn cache_key(&self) -> String {
        format!("{}#mips={}#wrap={:?}", self.path, self.generate_mips, self.wrap)
    }
}

/// A decoded texture ready to hand to a renderer
#[derive(Debug, Clone)]
pub struct Texture {
    /// Pixel data
    pub image: ImageData,
    /// Wrap mode
    pub wrap: WrapMode,
    /// Mip levels including the base level
    pub mip_levels: u32,
}

impl Texture {
    /// Build a texture from decoded pixels using the options in `key`
    pub fn new(image: ImageData, key: &TextureKey) -> Self {
        let mip_levels = if key.generate_mips { image.full_mip_chain() } else { 1 };
        Self {
            image,
            wrap: key.wrap,
            mip_levels,
        }
    }
}

impl Asset for Texture {
    fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        let image = ImageData::from_bytes(bytes)?;
        Ok(Texture::new(image, &TextureKey::new("")))
    }
}
