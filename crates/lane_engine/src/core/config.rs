//! # Engine Configuration
//!
//! Serializable settings for every engine subsystem. Applications usually
//! embed [`EngineConfig`] inside their own configuration type and hand it to
//! [`crate::Engine::run`].
//!
//! All structs use `#[serde(default)]` so a configuration file only needs to
//! mention the values it changes.

use crate::config::Config;
use serde::{Deserialize, Serialize};

/// # Engine Configuration
///
/// Top-level engine settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Window settings
    pub window: WindowConfig,
    /// Asset system settings
    pub assets: AssetConfig,
    /// Physics world settings
    pub physics: PhysicsConfig,
    /// Audio settings
    pub audio: AudioConfig,
    /// Frame rate cap (0 = uncapped)
    pub target_fps: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            assets: AssetConfig::default(),
            physics: PhysicsConfig::default(),
            audio: AudioConfig::default(),
            target_fps: 60,
        }
    }
}

impl EngineConfig {
    /// Configuration for running without a window or audio device
    ///
    /// The frame loop stops after `max_frames` frames.
    pub fn headless(max_frames: u64) -> Self {
        Self {
            window: WindowConfig {
                headless: true,
                max_frames: Some(max_frames),
                ..WindowConfig::default()
            },
            audio: AudioConfig {
                enabled: false,
                ..AudioConfig::default()
            },
            target_fps: 0,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.window.validate()?;
        self.physics.validate()?;
        Ok(())
    }
}

impl Config for EngineConfig {}

/// # Window Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Run without opening a window
    pub headless: bool,
    /// Stop after this many frames (mainly for headless runs)
    pub max_frames: Option<u64>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Lane Engine Application".to_string(),
            width: 1280,
            height: 720,
            headless: false,
            max_frames: None,
        }
    }
}

impl WindowConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.headless && (self.width == 0 || self.height == 0) {
            return Err(format!("Invalid window size {}x{}", self.width, self.height));
        }
        Ok(())
    }

    /// Aspect ratio (width / height)
    #[allow(clippy::cast_precision_loss)]
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

/// # Asset Configuration
///
/// Where assets are searched for, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Asset search paths, tried in order
    pub search_paths: Vec<String>,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            search_paths: vec!["resources".to_string()],
        }
    }
}

impl AssetConfig {
    /// Set the search paths
    pub fn with_search_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_paths = paths.into_iter().map(Into::into).collect();
        self
    }
}

/// # Physics Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Initial gravity vector
    pub gravity: [f32; 3],
    /// Fixed simulation step in seconds
    pub fixed_timestep: f32,
    /// Upper bound on substeps per frame
    pub max_substeps: u32,
    /// Whether the simulation steps at startup
    pub enabled: bool,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: [0.0, -9.81, 0.0],
            fixed_timestep: 1.0 / 60.0,
            max_substeps: 8,
            enabled: true,
        }
    }
}

impl PhysicsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.fixed_timestep.is_nan() || self.fixed_timestep <= 0.0 {
            return Err(format!("Physics timestep must be positive, got {}", self.fixed_timestep));
        }
        if self.max_substeps == 0 {
            return Err("Physics max_substeps must be at least 1".to_string());
        }
        Ok(())
    }
}

/// # Audio Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Open an audio device; when false a silent backend is used
    pub enabled: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effect volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Ambient volume (0.0 - 1.0)
    pub ambient_volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            master_volume: 1.0,
            sfx_volume: 1.0,
            ambient_volume: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_headless_config() {
        let config = EngineConfig::headless(10);
        assert!(config.window.headless);
        assert_eq!(config.window.max_frames, Some(10));
        assert!(!config.audio.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_timestep_rejected() {
        let mut config = EngineConfig::default();
        config.physics.fixed_timestep = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_window_rejected_unless_headless() {
        let mut config = EngineConfig::default();
        config.window.width = 0;
        assert!(config.validate().is_err());

        config.window.headless = true;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_aspect() {
        let window = WindowConfig { width: 1600, height: 800, ..WindowConfig::default() };
        assert!((window.aspect() - 2.0).abs() < f32::EPSILON);
    }
}
