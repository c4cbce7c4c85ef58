//! # Lane Engine
//!
//! A small game engine for physics-driven 3D demos.
//!
//! ## Features
//!
//! - **Scene Graph**: Named geometry, audio and light descriptions under a single root
//! - **Rigid-Body Physics**: rapier3d world stepped at a fixed rate, with static and dynamic bodies
//! - **Asset Management**: Path-based loading with caching; PNG/JPEG textures, audio clips
//! - **Input Mapping**: Keys and mouse buttons mapped to named actions
//! - **Audio**: Rodio playback with mixer groups and a silent fallback
//! - **Configuration**: RON or TOML files through serde
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lane_engine::prelude::*;
//!
//! struct MyApp;
//!
//! impl Application for MyApp {
//!     fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
//!         engine.input.add_mapping("jump", Trigger::Key(KeyCode::Space));
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
//!         for action in engine.input.drain_actions() {
//!             log::info!("{} pressed: {}", action.name, action.pressed);
//!         }
//!         Ok(())
//!     }
//!
//!     fn cleanup(&mut self, _engine: &mut Engine) {}
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = EngineConfig::default();
//!     let mut app = MyApp;
//!     Engine::run(config, &mut app)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod core;
pub mod config;
pub mod foundation;
pub mod assets;
pub mod audio;
pub mod events;
pub mod input;
pub mod physics;
pub mod render;
pub mod scene;
pub mod window;

mod application;
mod engine;

pub use application::{AppError, AppEvent, Application};
pub use crate::core::EngineConfig;
pub use engine::{Engine, EngineError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        AppError, AppEvent, Application,
        Engine, EngineConfig, EngineError,
        config::Config,
        foundation::math::{Quat, Transform, Vec2, Vec3},
        assets::{Asset, AssetError, AssetHandle, AssetManager, Texture, TextureKey, WrapMode},
        audio::{AudioAsset, AudioNode, VolumeGroup},
        events::ActionDispatcher,
        input::{ActionEvent, InputManager, KeyCode, MouseButton, Trigger},
        physics::{BodyHandle, CollisionShape, PhysicsWorld, RigidBody},
        render::{Camera, Color, FlyCamera, Light, Material, Mesh},
        scene::{Node, NodeId, SceneGraph},
    };
}
