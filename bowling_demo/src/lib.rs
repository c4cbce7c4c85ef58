//! # Bowling Demo
//!
//! Throw balls at a rack of pins on a lane. Left click or Space throws,
//! G pauses and resumes physics, WASD/QZ and the arrow keys fly the camera,
//! Escape quits.
//!
//! The scene is described by [`config::BowlingConfig`]; every value defaults
//! to the stock lane so a configuration file is optional.

pub mod app;
pub mod config;
pub mod rack;
pub mod throw_controller;
pub mod world_scene;

pub use app::BowlingApp;
pub use config::BowlingConfig;
