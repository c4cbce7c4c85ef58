//! Action dispatch
//!
//! Handlers are registered per action name and run in registration order.
//! A handler returns `true` to consume the event, which stops it from
//! reaching later handlers for the same action.

use crate::engine::Engine;
use crate::input::ActionEvent;
use std::collections::HashMap;

/// Handler invoked with the application context, the engine and the event
pub type ActionHandler<C> = Box<dyn FnMut(&mut C, &mut Engine, &ActionEvent) -> bool>;

/// Routes action events to the handlers registered for their name
pub struct ActionDispatcher<C> {
    handlers: HashMap<String, Vec<ActionHandler<C>>>,
}

impl<C> ActionDispatcher<C> {
    /// Create a dispatcher with no handlers
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler for `action`
    pub fn register<F>(&mut self, action: &str, handler: F)
    where
        F: FnMut(&mut C, &mut Engine, &ActionEvent) -> bool + 'static,
    {
        self.handlers
            .entry(action.to_string())
            .or_default()
            .push(Box::new(handler));
    }

    /// Whether any handler listens for `action`
    pub fn has_handlers(&self, action: &str) -> bool {
        self.handlers.get(action).is_some_and(|handlers| !handlers.is_empty())
    }

    /// Deliver one event; returns whether a handler consumed it
    pub fn dispatch(&mut self, context: &mut C, engine: &mut Engine, event: &ActionEvent) -> bool {
        let Some(handlers) = self.handlers.get_mut(&event.name) else {
            log::trace!("No handler for action '{}'", event.name);
            return false;
        };

        handlers.iter_mut().any(|handler| handler(context, engine, event))
    }

    /// Deliver every pending action event from the engine's input manager
    ///
    /// Returns how many events were consumed.
    pub fn dispatch_pending(&mut self, context: &mut C, engine: &mut Engine) -> usize {
        let events = engine.input.drain_actions();
        events
            .iter()
            .filter(|event| self.dispatch(context, engine, event))
            .count()
    }
}

impl<C> Default for ActionDispatcher<C> {
    fn default() -> Self {
        Self::new()
    }
}
