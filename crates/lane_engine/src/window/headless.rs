//! Window stand-in for runs without a display

use super::WindowBackend;
use crate::application::AppEvent;
use crate::core::WindowConfig;

/// Invisible window
///
/// Never produces events; the frame budget or [`Engine::quit`](crate::Engine::quit)
/// ends the loop.
pub struct HeadlessWindow {
    title: String,
    size: (u32, u32),
    should_close: bool,
}

impl HeadlessWindow {
    /// Create a headless window with the configured size and title
    pub fn new(config: &WindowConfig) -> Self {
        Self {
            title: config.title.clone(),
            size: (config.width, config.height),
            should_close: false,
        }
    }

    /// Current title
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl WindowBackend for HeadlessWindow {
    fn poll_events(&mut self) -> Vec<AppEvent> {
        Vec::new()
    }

    fn should_close(&self) -> bool {
        self.should_close
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.should_close = should_close;
    }

    fn set_title(&mut self, title: &str) {
        title.clone_into(&mut self.title);
    }

    fn size(&self) -> (u32, u32) {
        self.size
    }
}
