//! Rodio audio backend
//!
//! Each sound gets its own `Sink` so volume and stop apply per sound.
//! Rodio decodes WAV, Ogg Vorbis, MP3 and FLAC.

use super::{AudioBackend, Playback, SoundHandle};
use crate::audio::AudioError;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use std::collections::HashMap;
use std::io::Cursor;

struct ActiveSound {
    sink: Sink,
    looping: bool,
}

/// Rodio-based audio backend
pub struct RodioBackend {
    /// Audio output stream (must be kept alive)
    _output_stream: OutputStream,
    stream_handle: OutputStreamHandle,
    active_sounds: HashMap<SoundHandle, ActiveSound>,
    next_id: u32,
}

impl RodioBackend {
    /// Open the default output device
    pub fn new() -> Result<Self, AudioError> {
        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| AudioError::BackendInitFailed(format!("Failed to create audio output: {}", e)))?;

        log::info!("Rodio audio backend initialized");
        Ok(Self {
            _output_stream: stream,
            stream_handle,
            active_sounds: HashMap::new(),
            next_id: 0,
        })
    }

    fn next_handle(&mut self) -> SoundHandle {
        let handle = SoundHandle(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        handle
    }
}

impl AudioBackend for RodioBackend {
    fn name(&self) -> &'static str {
        "rodio"
    }

    fn play_sound(&mut self, data: &[u8], volume: f32, looping: bool) -> Result<SoundHandle, AudioError> {
        let sink = Sink::try_new(&self.stream_handle)
            .map_err(|e| AudioError::PlaybackFailed(format!("Failed to create sink: {}", e)))?;

        let source = Decoder::new(Cursor::new(data.to_vec()))
            .map_err(|e| AudioError::PlaybackFailed(format!("Failed to decode audio: {}", e)))?;

        sink.set_volume(volume);
        if looping {
            sink.append(source.repeat_infinite());
        } else {
            sink.append(source);
        }

        let handle = self.next_handle();
        self.active_sounds.insert(handle, ActiveSound { sink, looping });
        Ok(handle)
    }

    fn stop(&mut self, handle: SoundHandle) {
        if let Some(sound) = self.active_sounds.remove(&handle) {
            sound.sink.stop();
        }
    }

    fn stop_all(&mut self) {
        for (_, sound) in self.active_sounds.drain() {
            sound.sink.stop();
        }
    }

    fn update(&mut self) {
        self.active_sounds.retain(|_, sound| !sound.sink.empty());
    }

    fn playing(&self) -> Vec<Playback> {
        self.active_sounds
            .iter()
            .map(|(handle, sound)| Playback {
                handle: *handle,
                volume: sound.sink.volume(),
                looping: sound.looping,
            })
            .collect()
    }
}

impl Drop for RodioBackend {
    fn drop(&mut self) {
        self.stop_all();
        log::info!("Rodio audio backend shutdown");
    }
}
