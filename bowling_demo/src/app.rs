//! Bowling application
//!
//! Builds the lane on startup and routes the throw and gravity actions to the
//! [`ThrowController`] through an [`ActionDispatcher`].

use lane_engine::events::ActionDispatcher;
use lane_engine::{AppError, Application, Engine};

use crate::config::BowlingConfig;
use crate::throw_controller::{ThrowController, GRAVITY_ACTION, SHOOT_ACTION};
use crate::world_scene::WorldScene;

/// State the action handlers work on
#[derive(Debug)]
pub struct BowlingState {
    /// Scene nodes built at startup
    pub scene: WorldScene,
    /// Ball spawner
    pub throws: ThrowController,
}

/// The bowling demo
pub struct BowlingApp {
    config: BowlingConfig,
    dispatcher: ActionDispatcher<BowlingState>,
    state: Option<BowlingState>,
}

impl BowlingApp {
    /// Create the app; nothing is built until [`Application::initialize`]
    pub fn new(config: BowlingConfig) -> Self {
        let mut dispatcher = ActionDispatcher::new();

        dispatcher.register(SHOOT_ACTION, |state: &mut BowlingState, engine: &mut Engine, event| {
            if event.pressed {
                state.throws.throw_ball(engine);
            }
            true
        });

        dispatcher.register(GRAVITY_ACTION, |_: &mut BowlingState, engine: &mut Engine, event| {
            if event.pressed {
                ThrowController::toggle_gravity(engine);
            }
            true
        });

        Self {
            config,
            dispatcher,
            state: None,
        }
    }

    /// Scene and controller, once initialized
    pub fn state(&self) -> Option<&BowlingState> {
        self.state.as_ref()
    }
}

impl Application for BowlingApp {
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        log::info!("Initializing bowling demo...");
        let (scene, mut throws) = WorldScene::build(engine, &self.config)?;

        if self.config.throw_on_start {
            throws.throw_ball(engine);
        }

        self.state = Some(BowlingState { scene, throws });
        log::info!("Bowling demo initialized");
        Ok(())
    }

    fn update(&mut self, engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
        if let Some(state) = self.state.as_mut() {
            self.dispatcher.dispatch_pending(state, engine);
        }
        Ok(())
    }

    fn cleanup(&mut self, engine: &mut Engine) {
        let balls = self.state.as_ref().map_or(0, |state| state.throws.balls().len());
        log::info!(
            "Bowling demo shutting down after {} frames, {} balls thrown",
            engine.frame_count(),
            balls
        );
    }
}
