//! Audio system
//!
//! Plays [`AudioNode`]s through a backend, scaling each node's volume by its
//! mixer group.

pub mod asset;
pub mod backend;
pub mod mixer;

pub use asset::{AudioAsset, AudioFormat};
pub use backend::{AudioBackend, Playback, SoundHandle};
pub use mixer::{MixerSystem, VolumeGroup};

use crate::assets::{AssetHandle, AssetManager};
use crate::core::AudioConfig;
use thiserror::Error;

/// Audio errors
#[derive(Error, Debug)]
pub enum AudioError {
    /// The output device could not be opened
    #[error("Audio backend initialization failed: {0}")]
    BackendInitFailed(String),

    /// A sound could not be decoded or started
    #[error("Playback failed: {0}")]
    PlaybackFailed(String),

    /// The clip handle does not refer to a loaded clip
    #[error("Invalid audio handle")]
    InvalidHandle,
}

/// A playable sound: a loaded clip plus how to play it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioNode {
    /// Clip to play
    pub clip: AssetHandle<AudioAsset>,
    /// Node volume before mixing (0.0 - 1.0)
    pub volume: f32,
    /// Restart at the end instead of stopping
    pub looping: bool,
    /// Mixer group the node belongs to
    pub group: VolumeGroup,
}

impl AudioNode {
    /// Non-positional one-shot sound effect at full volume
    pub fn new(clip: AssetHandle<AudioAsset>) -> Self {
        Self {
            clip,
            volume: 1.0,
            looping: false,
            group: VolumeGroup::Sfx,
        }
    }

    /// Set the node volume
    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = volume;
        self
    }

    /// Make the node loop
    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Set the mixer group
    pub fn in_group(mut self, group: VolumeGroup) -> Self {
        self.group = group;
        self
    }
}

/// Engine-owned audio playback
pub struct AudioSystem {
    backend: Box<dyn AudioBackend>,
    mixer: MixerSystem,
}

impl AudioSystem {
    /// Create the audio system for `config`
    pub fn new(config: &AudioConfig) -> Self {
        Self::with_backend(backend::create_backend(config.enabled), MixerSystem::from_config(config))
    }

    /// Create the audio system around an existing backend
    pub fn with_backend(backend: Box<dyn AudioBackend>, mixer: MixerSystem) -> Self {
        log::debug!("Audio system using {} backend", backend.name());
        Self { backend, mixer }
    }

    /// Start playing `node`
    pub fn play(&mut self, assets: &AssetManager, node: &AudioNode) -> Result<SoundHandle, AudioError> {
        let clip = assets.get(node.clip).ok_or(AudioError::InvalidHandle)?;
        let volume = node.volume.clamp(0.0, 1.0) * self.mixer.effective_volume(node.group);

        let handle = self.backend.play_sound(clip.data(), volume, node.looping)?;
        log::debug!("Playing {:?} clip at volume {:.2} (looping: {})", clip.format(), volume, node.looping);
        Ok(handle)
    }

    /// Stop a sound
    pub fn stop(&mut self, handle: SoundHandle) {
        self.backend.stop(handle);
    }

    /// Stop everything
    pub fn stop_all(&mut self) {
        self.backend.stop_all();
    }

    /// Per-frame housekeeping
    pub fn update(&mut self) {
        self.backend.update();
    }

    /// Sounds still playing
    pub fn playing(&self) -> Vec<Playback> {
        self.backend.playing()
    }

    /// Mixer access
    pub fn mixer(&self) -> &MixerSystem {
        &self.mixer
    }

    /// Mutable mixer access
    pub fn mixer_mut(&mut self) -> &mut MixerSystem {
        &mut self.mixer
    }
}
