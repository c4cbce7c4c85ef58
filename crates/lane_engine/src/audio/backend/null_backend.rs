//! Silent backend
//!
//! Accepts every sound without producing output. One-shot sounds finish on
//! the next `update`; looping sounds stay until stopped.

use super::{AudioBackend, Playback, SoundHandle};
use crate::audio::AudioError;

/// Backend that plays nothing
#[derive(Debug, Default)]
pub struct NullBackend {
    active: Vec<Playback>,
    next_id: u32,
}

impl NullBackend {
    /// Create a silent backend
    pub fn new() -> Self {
        Self::default()
    }
}

impl AudioBackend for NullBackend {
    fn name(&self) -> &'static str {
        "null"
    }

    fn play_sound(&mut self, data: &[u8], volume: f32, looping: bool) -> Result<SoundHandle, AudioError> {
        if data.is_empty() {
            return Err(AudioError::PlaybackFailed("Empty audio data".to_string()));
        }

        let handle = SoundHandle(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.active.push(Playback { handle, volume, looping });
        Ok(handle)
    }

    fn stop(&mut self, handle: SoundHandle) {
        self.active.retain(|playback| playback.handle != handle);
    }

    fn stop_all(&mut self) {
        self.active.clear();
    }

    fn update(&mut self) {
        self.active.retain(|playback| playback.looping);
    }

    fn playing(&self) -> Vec<Playback> {
        self.active.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shots_finish_on_update() {
        let mut backend = NullBackend::new();
        let river = backend.play_sound(b"OggS", 0.2, true).unwrap();
        backend.play_sound(b"RIFF", 0.7, false).unwrap();
        assert_eq!(backend.playing().len(), 2);

        backend.update();
        let remaining = backend.playing();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].handle, river);
    }

    #[test]
    fn test_stop() {
        let mut backend = NullBackend::new();
        let handle = backend.play_sound(b"OggS", 1.0, true).unwrap();
        backend.stop(handle);
        backend.stop(handle);
        assert!(backend.playing().is_empty());
    }

    #[test]
    fn test_empty_data_fails() {
        let mut backend = NullBackend::new();
        assert!(backend.play_sound(&[], 1.0, false).is_err());
    }
}
