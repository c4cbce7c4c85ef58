//! Audio backend implementations
//!
//! Platform-independent abstraction over audio playback libraries.

pub mod null_backend;
pub mod rodio_backend;

pub use null_backend::NullBackend;
pub use rodio_backend::RodioBackend;

use crate::audio::AudioError;

/// Handle to a sound started by a backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundHandle(pub u32);

/// What a backend reports about a sound it is still playing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playback {
    /// Handle returned by `play_sound`
    pub handle: SoundHandle,
    /// Output volume
    pub volume: f32,
    /// Restarts when it reaches the end
    pub looping: bool,
}

/// Audio backend trait for platform abstraction
///
/// Backends are single-threaded; they are owned and driven by the engine loop.
pub trait AudioBackend {
    /// Short name for logging
    fn name(&self) -> &'static str;

    /// Play encoded audio from memory
    fn play_sound(&mut self, data: &[u8], volume: f32, looping: bool) -> Result<SoundHandle, AudioError>;

    /// Stop a sound; unknown handles are ignored
    fn stop(&mut self, handle: SoundHandle);

    /// Stop all playing sounds
    fn stop_all(&mut self);

    /// Drop sounds that have finished playing
    fn update(&mut self);

    /// Sounds still playing
    fn playing(&self) -> Vec<Playback>;
}

/// Create the backend for the current settings
///
/// A disabled config, or a machine without a usable output device, gets the
/// silent backend so the application still runs.
pub fn create_backend(enabled: bool) -> Box<dyn AudioBackend> {
    if !enabled {
        log::info!("Audio disabled, using silent backend");
        return Box::new(NullBackend::new());
    }

    match RodioBackend::new() {
        Ok(backend) => Box::new(backend),
        Err(e) => {
            log::warn!("{}; falling back to silent backend", e);
            Box::new(NullBackend::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_audio_uses_null_backend() {
        let backend = create_backend(false);
        assert_eq!(backend.name(), "null");
        assert!(backend.playing().is_empty());
    }
}
