//! Bowling demo configuration
//!
//! Every value has a default matching the stock scene, so the configuration
//! file only needs the settings it changes.

use lane_engine::config::Config;
use lane_engine::core::{AssetConfig, WindowConfig};
use lane_engine::input::{KeyCode, MouseButton, Trigger};
use lane_engine::render::FlyCamera;
use lane_engine::EngineConfig;
use serde::{Deserialize, Serialize};

use crate::rack::RackLayout;

/// Top-level demo configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BowlingConfig {
    /// Engine settings
    pub engine: EngineConfig,
    /// Pin rack layout
    pub rack: RackLayout,
    /// Ball throw settings
    pub throw: ThrowConfig,
    /// Asset paths
    pub assets: SceneAssets,
    /// Light setup
    pub lighting: LightingConfig,
    /// Initial camera pose
    pub camera: CameraPose,
    /// Background colour (RGBA)
    pub background: [f32; 4],
    /// Gravity applied when the rack is built
    pub gravity: [f32; 3],
    /// Sound volumes
    pub volumes: VolumeConfig,
    /// Input bindings
    pub controls: ControlsConfig,
    /// Throw one ball as soon as the scene is built
    pub throw_on_start: bool,
    /// Keyboard camera controller
    pub fly_camera: FlyCamera,
}

impl Default for BowlingConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig {
                window: WindowConfig {
                    title: "Bowling".to_string(),
                    ..WindowConfig::default()
                },
                assets: AssetConfig::default().with_search_paths(["resources"]),
                ..EngineConfig::default()
            },
            rack: RackLayout::default(),
            throw: ThrowConfig::default(),
            assets: SceneAssets::default(),
            lighting: LightingConfig::default(),
            camera: CameraPose::default(),
            background: [0.0, 0.0, 0.2, 0.0],
            gravity: [0.0, -6.0, 0.0],
            volumes: VolumeConfig::default(),
            controls: ControlsConfig::default(),
            throw_on_start: false,
            fly_camera: FlyCamera::default(),
        }
    }
}

impl Config for BowlingConfig {}

/// Ball throw settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrowConfig {
    /// Launch speed in units per second
    pub speed: f32,
    /// Ball radius
    pub ball_radius: f32,
    /// Ball mass
    pub ball_mass: f32,
}

impl Default for ThrowConfig {
    fn default() -> Self {
        Self {
            speed: 8.0,
            ball_radius: 0.7,
            ball_mass: 1.0,
        }
    }
}

/// Asset paths, relative to the engine's search paths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneAssets {
    /// Wall texture
    pub wall_texture: String,
    /// Floor texture
    pub floor_texture: String,
    /// Ball texture
    pub ball_texture: String,
    /// Pin texture
    pub pin_texture: String,
    /// Looping background sound
    pub ambient_sound: String,
    /// Sound played on every throw
    pub throw_sound: String,
}

impl Default for SceneAssets {
    fn default() -> Self {
        Self {
            wall_texture: "Textures/StoneWall.jpg".to_string(),
            floor_texture: "Textures/GrassFloor.jpg".to_string(),
            ball_texture: "Textures/BallMp12.jpg".to_string(),
            pin_texture: "Textures/bowling.jpg".to_string(),
            ambient_sound: "Sound/Environment/River.ogg".to_string(),
            throw_sound: "Sound/Effects/Bang.wav".to_string(),
        }
    }
}

/// Which light the scene uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LightingKind {
    /// Spot light at the camera, aimed along the view
    #[default]
    Spot,
    /// Dim directional light from above
    Directional,
}

/// Light setup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    /// Light type
    pub kind: LightingKind,
    /// Spot light range
    pub spot_range: f32,
    /// Spot inner cone angle in degrees
    pub spot_inner_degrees: f32,
    /// Spot outer cone angle in degrees
    pub spot_outer_degrees: f32,
    /// Spot colour multiplier on white
    pub spot_intensity: f32,
    /// Directional light direction
    pub directional_direction: [f32; 3],
    /// Directional colour multiplier on white
    pub directional_intensity: f32,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            kind: LightingKind::Spot,
            spot_range: 100.0,
            spot_inner_degrees: 5.0,
            spot_outer_degrees: 45.0,
            spot_intensity: 2.0,
            directional_direction: [-1.0, -1.0, -1.0],
            directional_intensity: 0.8,
        }
    }
}

/// Camera placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraPose {
    /// Camera location
    pub position: [f32; 3],
    /// Point the camera looks at
    pub look_at: [f32; 3],
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: [0.0, 6.0, 20.0],
            look_at: [0.0, 2.0, 0.0],
        }
    }
}

/// Sound volumes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeConfig {
    /// Ambient loop volume
    pub ambient: f32,
    /// Throw sound volume
    pub throw: f32,
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self { ambient: 0.2, throw: 0.7 }
    }
}

/// Input bindings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Triggers that throw a ball
    pub throw: Vec<Trigger>,
    /// Triggers that pause or resume physics
    pub gravity: Vec<Trigger>,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            throw: vec![Trigger::Mouse(MouseButton::Left), Trigger::Key(KeyCode::Space)],
            gravity: vec![Trigger::Key(KeyCode::G)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_scene() {
        let config = BowlingConfig::default();
        assert_eq!(config.rack.rows, 6);
        assert_eq!(config.throw.speed, 8.0);
        assert_eq!(config.lighting.kind, LightingKind::Spot);
        assert_eq!(config.engine.window.title, "Bowling");
        assert_eq!(config.engine.assets.search_paths, vec!["resources".to_string()]);
        assert!(!config.throw_on_start);
    }

    #[test]
    fn test_ron_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bowling.ron");

        let mut config = BowlingConfig::default();
        config.rack.rows = 4;
        config.lighting.kind = LightingKind::Directional;
        config.controls.throw = vec![Trigger::Key(KeyCode::Enter)];
        config.save_to_file(&path).unwrap();

        assert_eq!(BowlingConfig::load_from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_toml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bowling.toml");

        let mut config = BowlingConfig::default();
        config.throw.speed = 12.0;
        config.throw_on_start = true;
        config.save_to_file(&path).unwrap();

        assert_eq!(BowlingConfig::load_from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.ron");
        std::fs::write(&path, "(rack: (rows: 3), throw_on_start: true)").unwrap();

        let config = BowlingConfig::load_from_file(&path).unwrap();
        assert_eq!(config.rack.rows, 3);
        assert!(config.throw_on_start);
        assert_eq!(config.throw, ThrowConfig::default());
        assert_eq!(config.assets, SceneAssets::default());
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/bowling.ron");
        let config = BowlingConfig::load_from_file(path).unwrap();

        assert_eq!(config.rack, RackLayout::default());
        assert_eq!(config.throw, ThrowConfig::default());
        assert_eq!(config.controls, ControlsConfig::default());
        assert_eq!(config.lighting.kind, LightingKind::Spot);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = BowlingConfig::load_or_default(dir.path().join("absent.ron")).unwrap();
        assert_eq!(config, BowlingConfig::default());
    }
}
