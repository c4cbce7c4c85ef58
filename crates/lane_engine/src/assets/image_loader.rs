//! Image decoding for texture data
//!
//! Decodes PNG and JPEG into RGBA8 pixels.

use std::path::Path;
use crate::assets::{Asset, AssetError};

/// Decoded RGBA image
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Raw RGBA pixel data
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Number of color channels (always 4 for RGBA)
    pub channels: u8,
}

impl ImageData {
    /// Decode an image held in memory
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| AssetError::LoadFailed(format!("Failed to decode image: {}", e)))?;

        let rgba_img = img.to_rgba8();
        let (width, height) = rgba_img.dimensions();

        log::trace!("Decoded image {}x{}", width, height);

        Ok(Self {
            data: rgba_img.into_raw(),
            width,
            height,
            channels: 4,
        })
    }

    /// Create a solid color image (useful for testing and defaults)
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        let pixel_count = (width * height) as usize;
        let data = color.repeat(pixel_count);

        Self {
            data,
            width,
            height,
            channels: 4,
        }
    }

    /// Write the image as PNG
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), AssetError> {
        image::save_buffer_with_format(
            path.as_ref(),
            &self.data,
            self.width,
            self.height,
            image::ExtendedColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| AssetError::LoadFailed(format!("Failed to write PNG: {}", e)))
    }

    /// Number of mip levels in a full chain down to 1x1
    pub fn full_mip_chain(&self) -> u32 {
        let largest = self.width.max(self.height).max(1);
        u32::BITS - largest.leading_zeros()
    }
}

impl Asset for ImageData {
    fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        ImageData::from_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_color() {
        let image = ImageData::solid_color(2, 3, [1, 2, 3, 4]);
        assert_eq!(image.data.len(), 2 * 3 * 4);
        assert_eq!(&image.data[4..8], &[1, 2, 3, 4]);
    }

    #[test]
    fn test_png_decodes_to_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixel.png");
        ImageData::solid_color(3, 2, [200, 100, 50, 255]).save_png(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let image = ImageData::from_bytes(&bytes).unwrap();

        assert_eq!((image.width, image.height, image.channels), (3, 2, 4));
        assert_eq!(&image.data[0..4], &[200, 100, 50, 255]);
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(matches!(
            ImageData::from_bytes(b"not an image"),
            Err(AssetError::LoadFailed(_))
        ));
    }

    #[test]
    fn test_mip_chain_length() {
        assert_eq!(ImageData::solid_color(1, 1, [0; 4]).full_mip_chain(), 1);
        assert_eq!(ImageData::solid_color(4, 4, [0; 4]).full_mip_chain(), 3);
        assert_eq!(ImageData::solid_color(512, 256, [0; 4]).full_mip_chain(), 10);
    }
}
