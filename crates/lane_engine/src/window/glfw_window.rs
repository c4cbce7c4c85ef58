//! GLFW-based window
//!
//! Opens a window without a client API and translates GLFW events into
//! [`AppEvent`]s. Keys the engine has no [`KeyCode`] for are dropped.

use super::{WindowBackend, WindowError};
use crate::application::AppEvent;
use crate::core::WindowConfig;
use crate::input::{KeyCode, MouseButton};

/// GLFW window wrapper
pub struct GlfwWindow {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl GlfwWindow {
    /// Create and show the window
    pub fn new(config: &WindowConfig) -> Result<Self, WindowError> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|e| WindowError::InitializationFailed(format!("{:?}", e)))?;

        glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::NoApi));
        glfw.window_hint(glfw::WindowHint::Resizable(true));

        let (mut window, events) = glfw
            .create_window(config.width, config.height, &config.title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed)?;

        window.set_key_polling(true);
        window.set_mouse_button_polling(true);
        window.set_cursor_pos_polling(true);
        window.set_scroll_polling(true);
        window.set_close_polling(true);
        window.set_size_polling(true);
        window.set_focus_polling(true);

        log::info!("Window created: {}x{} '{}'", config.width, config.height, config.title);
        Ok(Self { glfw, window, events })
    }
}

impl WindowBackend for GlfwWindow {
    fn poll_events(&mut self) -> Vec<AppEvent> {
        self.glfw.poll_events();
        glfw::flush_messages(&self.events)
            .filter_map(|(_, event)| translate_event(event))
            .collect()
    }

    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    fn size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_size();
        (u32::try_from(width).unwrap_or(0), u32::try_from(height).unwrap_or(0))
    }
}

fn translate_event(event: glfw::WindowEvent) -> Option<AppEvent> {
    match event {
        glfw::WindowEvent::Key(key, _, action, _) => Some(AppEvent::KeyInput {
            key: map_key(key)?,
            pressed: action != glfw::Action::Release,
        }),
        glfw::WindowEvent::MouseButton(button, action, _) => Some(AppEvent::MouseButton {
            button: map_mouse_button(button)?,
            pressed: action != glfw::Action::Release,
        }),
        glfw::WindowEvent::CursorPos(x, y) => Some(AppEvent::MouseMoved { x, y }),
        glfw::WindowEvent::Scroll(x, y) => Some(AppEvent::MouseWheel { delta_x: x, delta_y: y }),
        glfw::WindowEvent::Close => Some(AppEvent::WindowCloseRequested),
        glfw::WindowEvent::Size(width, height) => Some(AppEvent::WindowResized {
            width: u32::try_from(width).unwrap_or(0),
            height: u32::try_from(height).unwrap_or(0),
        }),
        glfw::WindowEvent::Focus(focused) => Some(AppEvent::Focus(focused)),
        _ => None,
    }
}

fn map_mouse_button(button: glfw::MouseButton) -> Option<MouseButton> {
    match button {
        glfw::MouseButton::Button1 => Some(MouseButton::Left),
        glfw::MouseButton::Button2 => Some(MouseButton::Right),
        glfw::MouseButton::Button3 => Some(MouseButton::Middle),
        _ => None,
    }
}

fn map_key(key: glfw::Key) -> Option<KeyCode> {
    use glfw::Key;

    let code = match key {
        Key::A => KeyCode::A,
        Key::B => KeyCode::B,
        Key::C => KeyCode::C,
        Key::D => KeyCode::D,
        Key::E => KeyCode::E,
        Key::F => KeyCode::F,
        Key::G => KeyCode::G,
        Key::H => KeyCode::H,
        Key::I => KeyCode::I,
        Key::J => KeyCode::J,
        Key::K => KeyCode::K,
        Key::L => KeyCode::L,
        Key::M => KeyCode::M,
        Key::N => KeyCode::N,
        Key::O => KeyCode::O,
        Key::P => KeyCode::P,
        Key::Q => KeyCode::Q,
        Key::R => KeyCode::R,
        Key::S => KeyCode::S,
        Key::T => KeyCode::T,
        Key::U => KeyCode::U,
        Key::V => KeyCode::V,
        Key::W => KeyCode::W,
        Key::X => KeyCode::X,
        Key::Y => KeyCode::Y,
        Key::Z => KeyCode::Z,
        Key::Space => KeyCode::Space,
        Key::Enter => KeyCode::Enter,
        Key::Escape => KeyCode::Escape,
        Key::Up => KeyCode::Up,
        Key::Down => KeyCode::Down,
        Key::Left => KeyCode::Left,
        Key::Right => KeyCode::Right,
        _ => return None,
    };
    Some(code)
}
