//! Core engine configuration

pub mod config;

pub use config::{AssetConfig, AudioConfig, EngineConfig, PhysicsConfig, WindowConfig};
