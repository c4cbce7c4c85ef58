//! RGBA colours

use serde::{Deserialize, Serialize};

/// Linear RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
    /// Alpha
    pub a: f32,
}

impl Color {
    /// Opaque white
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Opaque black
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Create a colour from components
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Scale every component, alpha included
    pub fn mult(self, scalar: f32) -> Self {
        Self::new(self.r * scalar, self.g * scalar, self.b * scalar, self.a * scalar)
    }

    /// Components as an array
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[f32; 4]> for Color {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mult_scales_all_components() {
        assert_eq!(Color::WHITE.mult(2.0).to_array(), [2.0, 2.0, 2.0, 2.0]);
        assert_eq!(Color::new(0.5, 0.25, 1.0, 1.0).mult(0.8).to_array(), [0.4, 0.2, 0.8, 0.8]);
    }
}
