//! Audio mixer
//!
//! Volume groups scale every sound in their category; the master group
//! scales everything.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use crate::core::AudioConfig;

/// Volume group categories for independent volume control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VolumeGroup {
    /// Master volume (affects all sounds)
    Master,
    /// Sound effects
    #[default]
    Sfx,
    /// Ambient environmental sounds
    Ambient,
}

/// Audio mixer managing volume groups
pub struct MixerSystem {
    group_volumes: HashMap<VolumeGroup, f32>,
    group_muted: HashMap<VolumeGroup, bool>,
}

impl MixerSystem {
    /// Create a mixer with every group at full volume
    pub fn new() -> Self {
        Self {
            group_volumes: HashMap::new(),
            group_muted: HashMap::new(),
        }
    }

    /// Create a mixer with the group volumes from `config`
    pub fn from_config(config: &AudioConfig) -> Self {
        let mut mixer = Self::new();
        mixer.set_group_volume(VolumeGroup::Master, config.master_volume);
        mixer.set_group_volume(VolumeGroup::Sfx, config.sfx_volume);
        mixer.set_group_volume(VolumeGroup::Ambient, config.ambient_volume);
        mixer
    }

    /// Set volume for a group, clamped to 0.0 - 1.0
    pub fn set_group_volume(&mut self, group: VolumeGroup, volume: f32) {
        self.group_volumes.insert(group, volume.clamp(0.0, 1.0));
    }

    /// Volume for a group
    pub fn group_volume(&self, group: VolumeGroup) -> f32 {
        self.group_volumes.get(&group).copied().unwrap_or(1.0)
    }

    /// Volume for a group after master volume and mute are applied
    pub fn effective_volume(&self, group: VolumeGroup) -> f32 {
        if self.is_muted(group) || self.is_muted(VolumeGroup::Master) {
            return 0.0;
        }
        if group == VolumeGroup::Master {
            return self.group_volume(VolumeGroup::Master);
        }
        self.group_volume(group) * self.group_volume(VolumeGroup::Master)
    }

    /// Mute or unmute a group
    pub fn set_muted(&mut self, group: VolumeGroup, muted: bool) {
        self.group_muted.insert(group, muted);
    }

    /// Check if a group is muted
    pub fn is_muted(&self, group: VolumeGroup) -> bool {
        self.group_muted.get(&group).copied().unwrap_or(false)
    }
}

impl Default for MixerSystem {
    fn default() -> Self {
        Self::new()
    }
}
