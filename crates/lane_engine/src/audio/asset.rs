//! Audio clip assets
//!
//! Clips keep their encoded bytes; decoding happens in the backend when a
//! clip is played.

use crate::assets::{Asset, AssetError};

/// Encoded audio clip loaded through the asset manager
#[derive(Debug, Clone)]
pub struct AudioAsset {
    data: Vec<u8>,
    format: AudioFormat,
}

/// Audio container formats recognized by their magic bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    /// RIFF/WAVE
    Wav,
    /// Ogg Vorbis
    Ogg,
    /// MP3, with or without an ID3 tag
    Mp3,
    /// FLAC
    Flac,
}

impl AudioAsset {
    /// Wrap already-encoded bytes
    pub fn new(data: Vec<u8>, format: AudioFormat) -> Self {
        Self { data, format }
    }

    /// Encoded bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Detected container format
    pub fn format(&self) -> AudioFormat {
        self.format
    }

    fn detect_format(bytes: &[u8]) -> Option<AudioFormat> {
        match bytes.get(0..4)? {
            b"RIFF" => Some(AudioFormat::Wav),
            b"OggS" => Some(AudioFormat::Ogg),
            b"fLaC" => Some(AudioFormat::Flac),
            [0xFF, 0xFB, _, _] | [0xFF, 0xFA, _, _] | [b'I', b'D', b'3', _] => Some(AudioFormat::Mp3),
            _ => None,
        }
    }
}

impl Asset for AudioAsset {
    fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        if bytes.is_empty() {
            return Err(AssetError::InvalidData("Empty audio file".to_string()));
        }

        let format = Self::detect_format(bytes)
            .ok_or_else(|| AssetError::InvalidData("Unknown audio format".to_string()))?;

        Ok(AudioAsset::new(bytes.to_vec(), format))
    }
}
