//! Pin rack layout
//!
//! Pins form a triangle: the first row holds `rows` pins and each row behind
//! it one fewer, shifted half a pin sideways so the pins sit in the gaps.

use lane_engine::foundation::math::Vec3;
use serde::{Deserialize, Serialize};

/// Triangular pin arrangement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RackLayout {
    /// Number of rows; also the pin count of the first row
    pub rows: u32,
    /// X of the first pin in the first row
    pub start_x: f32,
    /// X offset added per row
    pub row_shift: f32,
    /// X offset between neighbouring pins of a row
    pub lateral_spacing: f32,
    /// Z of the first row
    pub start_z: f32,
    /// Z offset added per row
    pub depth_spacing: f32,
    /// Y of every pin
    pub height: f32,
}

impl Default for RackLayout {
    fn default() -> Self {
        Self {
            rows: 6,
            start_x: 2.0,
            row_shift: -0.5,
            lateral_spacing: -1.0,
            start_z: -8.0,
            depth_spacing: 1.0,
            height: 0.75,
        }
    }
}

impl RackLayout {
    /// Pins in row `row` (0-indexed); zero past the last row
    pub fn row_len(&self, row: u32) -> u32 {
        self.rows.saturating_sub(row)
    }

    /// Total pin count, `rows * (rows + 1) / 2`
    pub fn pin_count(&self) -> usize {
        let rows = self.rows as usize;
        rows * (rows + 1) / 2
    }

    /// Position of pin `index` in row `row`
    #[allow(clippy::cast_precision_loss)]
    pub fn pin_position(&self, row: u32, index: u32) -> Vec3 {
        Vec3::new(
            self.start_x + row as f32 * self.row_shift + index as f32 * self.lateral_spacing,
            self.height,
            self.start_z + row as f32 * self.depth_spacing,
        )
    }

    /// Every pin position, row by row
    pub fn pin_positions(&self) -> Vec<Vec3> {
        (0..self.rows)
            .flat_map(|row| (0..self.row_len(row)).map(move |index| self.pin_position(row, index)))
            .collect()
    }
}
