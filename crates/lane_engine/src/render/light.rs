//! Scene lights

use crate::foundation::math::Vec3;
use crate::render::Color;

/// Light types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    /// Parallel rays, like sunlight
    Directional {
        /// Normalized direction the light travels in
        direction: Vec3,
    },
    /// Cone of light from a point
    Spot {
        /// Light position
        position: Vec3,
        /// Normalized cone axis
        direction: Vec3,
        /// Distance after which the light has no effect
        range: f32,
        /// Full-intensity cone half angle in radians
        inner_angle: f32,
        /// Falloff cone half angle in radians
        outer_angle: f32,
    },
}

/// Light source
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// Light type and placement
    pub kind: LightKind,
    /// Light colour; components above 1 brighten
    pub color: Color,
}

impl Light {
    /// Create a directional light
    pub fn directional(direction: Vec3, color: Color) -> Self {
        Self {
            kind: LightKind::Directional {
                direction: normalize_or_down(direction),
            },
            color,
        }
    }

    /// Create a spot light
    pub fn spot(position: Vec3, direction: Vec3, color: Color, range: f32, inner_angle: f32, outer_angle: f32) -> Self {
        Self {
            kind: LightKind::Spot {
                position,
                direction: normalize_or_down(direction),
                range,
                inner_angle,
                outer_angle: outer_angle.max(inner_angle),
            },
            color,
        }
    }

    /// Direction the light shines in
    pub fn direction(&self) -> Vec3 {
        match self.kind {
            LightKind::Directional { direction } | LightKind::Spot { direction, .. } => direction,
        }
    }
}

fn normalize_or_down(direction: Vec3) -> Vec3 {
    direction.try_normalize(f32::EPSILON).unwrap_or_else(|| -Vec3::y())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::utils::deg_to_rad;
    use approx::assert_relative_eq;

    #[test]
    fn test_directional_normalizes() {
        let sun = Light::directional(Vec3::new(-1.0, -1.0, -1.0), Color::WHITE.mult(0.8));
        let expected = -Vec3::repeat(1.0 / 3.0_f32.sqrt());
        assert_relative_eq!(sun.direction(), expected, epsilon = 1e-6);
    }

    #[test]
    fn test_spot_keeps_cone() {
        let spot = Light::spot(
            Vec3::new(0.0, 6.0, 20.0),
            Vec3::new(0.0, -4.0, -20.0),
            Color::WHITE.mult(2.0),
            100.0,
            deg_to_rad(5.0),
            deg_to_rad(45.0),
        );

        match spot.kind {
            LightKind::Spot { range, inner_angle, outer_angle, .. } => {
                assert_relative_eq!(range, 100.0);
                assert!(inner_angle < outer_angle);
            }
            LightKind::Directional { .. } => panic!("expected spot light"),
        }
        assert_relative_eq!(spot.direction().norm(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_direction_points_down() {
        let light = Light::directional(Vec3::zeros(), Color::WHITE);
        assert_relative_eq!(light.direction(), -Vec3::y());
    }
}
