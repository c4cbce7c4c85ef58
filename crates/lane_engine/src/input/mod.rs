//! Input management system
//!
//! Raw key and mouse events are tracked as held state and translated into
//! named actions through user-defined mappings. Several triggers may map to
//! one action and one trigger may feed several actions.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Something that can fire an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigger {
    /// Keyboard key
    Key(KeyCode),
    /// Mouse button
    Mouse(MouseButton),
}

/// An action transition produced by a trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionEvent {
    /// Action name as registered with [`InputManager::add_mapping`]
    pub name: String,
    /// True on press, false on release
    pub pressed: bool,
}

#[derive(Debug, Clone)]
struct InputMapping {
    action: String,
    triggers: Vec<Trigger>,
}

/// Input manager
#[derive(Debug, Default)]
pub struct InputManager {
    mappings: Vec<InputMapping>,
    keys_down: HashSet<KeyCode>,
    buttons_down: HashSet<MouseButton>,
    cursor: (f64, f64),
    pending: Vec<ActionEvent>,
}

impl InputManager {
    /// Create an input manager with no mappings
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a trigger to a named action
    ///
    /// Adding the same trigger to an action twice has no effect.
    pub fn add_mapping(&mut self, action: &str, trigger: Trigger) {
        match self.mappings.iter_mut().find(|mapping| mapping.action == action) {
            Some(mapping) => {
                if !mapping.triggers.contains(&trigger) {
                    mapping.triggers.push(trigger);
                }
            }
            None => self.mappings.push(InputMapping {
                action: action.to_string(),
                triggers: vec![trigger],
            }),
        }
        log::debug!("Mapped {:?} to action '{}'", trigger, action);
    }

    /// Remove every trigger of an action
    pub fn remove_mapping(&mut self, action: &str) {
        self.mappings.retain(|mapping| mapping.action != action);
    }

    /// Triggers mapped to an action
    pub fn mappings_for(&self, action: &str) -> &[Trigger] {
        self.mappings
            .iter()
            .find(|mapping| mapping.action == action)
            .map_or(&[], |mapping| mapping.triggers.as_slice())
    }

    /// Handle key input
    ///
    /// Key repeat (a press while already held) does not fire actions again.
    pub fn handle_key_input(&mut self, key: KeyCode, pressed: bool) {
        let changed = if pressed {
            self.keys_down.insert(key)
        } else {
            self.keys_down.remove(&key)
        };

        if changed {
            self.fire(Trigger::Key(key), pressed);
        }
    }

    /// Handle mouse button input
    pub fn handle_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        let changed = if pressed {
            self.buttons_down.insert(button)
        } else {
            self.buttons_down.remove(&button)
        };

        if changed {
            self.fire(Trigger::Mouse(button), pressed);
        }
    }

    /// Handle mouse movement
    pub fn handle_mouse_move(&mut self, x: f64, y: f64) {
        self.cursor = (x, y);
    }

    /// Whether a key is held
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Whether a mouse button is held
    pub fn is_mouse_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    /// Last cursor position in window coordinates
    pub fn cursor_position(&self) -> (f64, f64) {
        self.cursor
    }

    /// Take the action events produced since the last call, in order
    pub fn drain_actions(&mut self) -> Vec<ActionEvent> {
        std::mem::take(&mut self.pending)
    }

    /// Forget held keys and buttons (e.g. when the window loses focus)
    pub fn clear_held(&mut self) {
        self.keys_down.clear();
        self.buttons_down.clear();
    }

    fn fire(&mut self, trigger: Trigger, pressed: bool) {
        for mapping in &self.mappings {
            if mapping.triggers.contains(&trigger) {
                log::trace!("Action '{}' {}", mapping.action, if pressed { "pressed" } else { "released" });
                self.pending.push(ActionEvent {
                    name: mapping.action.clone(),
                    pressed,
                });
            }
        }
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// A key
    A,
    /// B key
    B,
    /// C key
    C,
    /// D key
    D,
    /// E key
    E,
    /// F key
    F,
    /// G key
    G,
    /// H key
    H,
    /// I key
    I,
    /// J key
    J,
    /// K key
    K,
    /// L key
    L,
    /// M key
    M,
    /// N key
    N,
    /// O key
    O,
    /// P key
    P,
    /// Q key
    Q,
    /// R key
    R,
    /// S key
    S,
    /// T key
    T,
    /// U key
    U,
    /// V key
    V,
    /// W key
    W,
    /// X key
    X,
    /// Y key
    Y,
    /// Z key
    Z,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}
