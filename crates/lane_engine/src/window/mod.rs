//! Window management
//!
//! The engine talks to its window through [`WindowBackend`]: a GLFW window
//! on desktops, or a headless stand-in for tests and batch runs.

pub mod glfw_window;
pub mod headless;

pub use glfw_window::GlfwWindow;
pub use headless::HeadlessWindow;

use crate::application::AppEvent;
use crate::core::WindowConfig;
use thiserror::Error;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// GLFW could not be initialized
    #[error("GLFW initialization failed: {0}")]
    InitializationFailed(String),

    /// The window could not be created
    #[error("Window creation failed")]
    CreationFailed,
}

/// Window backend used by the frame loop
///
/// Window operations stay on the main thread, so implementations need not be
/// `Send`.
pub trait WindowBackend {
    /// Pump the OS event queue and return the translated events
    fn poll_events(&mut self) -> Vec<AppEvent>;

    /// Whether a close was requested
    fn should_close(&self) -> bool;

    /// Request or cancel closing
    fn set_should_close(&mut self, should_close: bool);

    /// Set the title bar text
    fn set_title(&mut self, title: &str);

    /// Client area size in pixels
    fn size(&self) -> (u32, u32);
}

/// Open the window described by `config`
pub fn create_window(config: &WindowConfig) -> Result<Box<dyn WindowBackend>, WindowError> {
    if config.headless {
        log::info!("Running headless");
        return Ok(Box::new(HeadlessWindow::new(config)));
    }

    Ok(Box::new(GlfwWindow::new(config)?))
}
