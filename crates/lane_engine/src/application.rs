//! Application trait and lifecycle management

use crate::assets::AssetError;
use crate::engine::{Engine, EngineError};
use crate::input::{KeyCode, MouseButton};
use thiserror::Error;

/// Application lifecycle trait
///
/// The engine calls `initialize` once, then `handle_event` and `update`
/// every frame, then `cleanup` when the loop ends.
pub trait Application {
    /// Build the scene, load assets and register input mappings
    ///
    /// An error here aborts [`Engine::run`] before the first frame.
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError>;

    /// Per-frame logic, run before the physics step
    ///
    /// `delta_time` is the frame time in seconds.
    fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError>;

    /// React to a window event
    ///
    /// The default hands the event to [`Engine::handle_event`], which feeds the
    /// input manager. Overrides usually still call it.
    fn handle_event(&mut self, engine: &mut Engine, event: AppEvent) -> Result<(), AppError> {
        engine.handle_event(event);
        Ok(())
    }

    /// Called once after the last frame
    fn cleanup(&mut self, engine: &mut Engine);
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Engine failure surfaced to the app
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// An asset could not be found or decoded
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    /// Bad application configuration
    #[error("Config error: {0}")]
    Config(String),

    /// Anything else
    #[error("Application error: {0}")]
    Custom(String),
}

/// Events delivered by the window backend
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Framebuffer size changed
    WindowResized {
        /// Width in pixels
        width: u32,
        /// Height in pixels
        height: u32,
    },

    /// The user asked to close the window
    WindowCloseRequested,

    /// Focus gained (`true`) or lost (`false`)
    Focus(bool),

    /// Key went down (`pressed`) or up
    KeyInput {
        /// Key
        key: KeyCode,
        /// Down or up
        pressed: bool,
    },

    /// Mouse button went down (`pressed`) or up
    MouseButton {
        /// Button
        button: MouseButton,
        /// Down or up
        pressed: bool,
    },

    /// Cursor moved, in window coordinates
    MouseMoved {
        /// Horizontal position
        x: f64,
        /// Vertical position
        y: f64,
    },

    /// Scroll wheel or touchpad scroll
    MouseWheel {
        /// Horizontal offset
        delta_x: f64,
        /// Vertical offset
        delta_y: f64,
    },
}
