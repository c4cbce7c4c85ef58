//! Core engine implementation

use crate::{
    application::{AppEvent, Application},
    assets::AssetManager,
    audio::AudioSystem,
    core::EngineConfig,
    foundation::time::Timer,
    input::{InputManager, KeyCode},
    physics::PhysicsWorld,
    render::{Camera, FlyCamera},
    scene::SceneGraph,
    window::{self, WindowBackend, WindowError},
};
use std::time::Duration;
use thiserror::Error;

/// How often the window title status is refreshed, in seconds
const STATUS_INTERVAL: f32 = 1.0;

/// Main engine struct
///
/// The engine owns every subsystem and drives the frame loop. Applications
/// reach the subsystems through the public fields.
pub struct Engine {
    /// Asset management system
    pub assets: AssetManager,

    /// Scene graph
    pub scene: SceneGraph,

    /// Rigid-body physics
    pub physics: PhysicsWorld,

    /// Active camera
    pub camera: Camera,

    /// Keyboard fly-through controller for the camera
    pub fly_camera: FlyCamera,

    /// Input handling system
    pub input: InputManager,

    /// Audio playback
    pub audio: AudioSystem,

    window: Box<dyn WindowBackend>,
    timer: Timer,
    config: EngineConfig,
    running: bool,
    status_elapsed: f32,
}

impl Engine {
    /// Create a new engine instance
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        log::info!("Initializing engine...");
        config.validate().map_err(EngineError::ConfigError)?;

        let window = window::create_window(&config.window)?;
        let assets = AssetManager::new(&config.assets);
        let physics = PhysicsWorld::new(&config.physics);
        let audio = AudioSystem::new(&config.audio);
        let camera = Camera::perspective(
            crate::foundation::math::Vec3::new(0.0, 0.0, 10.0),
            45.0,
            config.window.aspect(),
        );

        Ok(Self {
            assets,
            scene: SceneGraph::new(),
            physics,
            camera,
            fly_camera: FlyCamera::default(),
            input: InputManager::new(),
            audio,
            window,
            timer: Timer::new(),
            config,
            running: true,
            status_elapsed: 0.0,
        })
    }

    /// Run the engine main loop with the given application
    pub fn run<T: Application>(config: EngineConfig, app: &mut T) -> Result<(), EngineError> {
        let mut engine = Self::new(config)?;

        app.initialize(&mut engine)
            .map_err(|e| EngineError::ApplicationError(format!("App initialization: {}", e)))?;

        log::info!("Starting main loop...");
        engine.timer = Timer::new();

        while engine.running {
            engine.timer.update();
            let delta_time = engine.timer.delta_time();

            for event in engine.window.poll_events() {
                app.handle_event(&mut engine, event)
                    .map_err(|e| EngineError::ApplicationError(format!("App event: {}", e)))?;
            }
            if engine.window.should_close() {
                engine.quit();
            }

            engine.tick(app, delta_time)?;
            engine.update_status(delta_time);
            engine.pace_frame();

            if engine.config.window.max_frames.is_some_and(|max| engine.timer.frame_count() >= max) {
                log::info!("Frame budget of {} reached", engine.timer.frame_count());
                engine.quit();
            }
        }

        app.cleanup(&mut engine);
        engine.audio.stop_all();

        log::info!("Engine shutdown complete");
        Ok(())
    }

    /// Advance one frame by `delta_time` seconds
    ///
    /// Moves the fly camera, updates the application, steps physics, copies
    /// body transforms into the scene and updates audio. Window events must
    /// already have been delivered.
    pub fn tick<T: Application>(&mut self, app: &mut T, delta_time: f32) -> Result<(), EngineError> {
        self.fly_camera.update(&mut self.camera, &self.input, delta_time);

        app.update(self, delta_time)
            .map_err(|e| EngineError::ApplicationError(format!("App update: {}", e)))?;

        let substeps = self.physics.step(delta_time);
        let synced = self.scene.sync_from_physics(&self.physics);
        log::trace!("Frame: {} physics substeps, {} nodes synced", substeps, synced);

        self.audio.update();
        Ok(())
    }

    /// Handle an application event
    ///
    /// Escape and window close quit; input events feed the input manager.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::WindowCloseRequested => self.quit(),
            AppEvent::KeyInput { key: KeyCode::Escape, pressed: true } => self.quit(),
            AppEvent::KeyInput { key, pressed } => self.input.handle_key_input(key, pressed),
            AppEvent::MouseButton { button, pressed } => self.input.handle_mouse_button(button, pressed),
            AppEvent::MouseMoved { x, y } => self.input.handle_mouse_move(x, y),
            AppEvent::WindowResized { width, height } => {
                if width > 0 && height > 0 {
                    #[allow(clippy::cast_precision_loss)]
                    self.camera.set_aspect_ratio(width as f32 / height as f32);
                }
            }
            AppEvent::Focus(false) => self.input.clear_held(),
            AppEvent::Focus(true) | AppEvent::MouseWheel { .. } => {}
        }
    }

    /// Request engine shutdown
    pub fn quit(&mut self) {
        if self.running {
            log::info!("Engine shutdown requested");
        }
        self.running = false;
    }

    /// Whether the frame loop keeps going
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Frames completed by the main loop
    pub fn frame_count(&self) -> u64 {
        self.timer.frame_count()
    }

    fn update_status(&mut self, delta_time: f32) {
        self.status_elapsed += delta_time;
        if self.status_elapsed < STATUS_INTERVAL {
            return;
        }
        self.status_elapsed = 0.0;

        let status = format!(
            "{} | {:.0} fps | {} bodies | physics {}",
            self.config.window.title,
            self.timer.average_fps(),
            self.physics.body_count(),
            if self.physics.is_enabled() { "on" } else { "off" },
        );
        log::trace!("{}", status);
        self.window.set_title(&status);
    }

    fn pace_frame(&self) {
        if self.config.target_fps == 0 {
            return;
        }
        let budget = Duration::from_secs_f64(1.0 / f64::from(self.config.target_fps));
        let spent = self.timer.since_last_frame();
        if let Some(remaining) = budget.checked_sub(spent) {
            std::thread::sleep(remaining);
        }
    }
}

/// Engine errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Engine initialization failed
    #[error("Initialization failed: {0}")]
    InitializationFailed(String),

    /// Invalid engine configuration
    #[error("Config error: {0}")]
    ConfigError(String),

    /// Window error
    #[error("Window error: {0}")]
    WindowError(#[from] WindowError),

    /// Application error
    #[error("Application error: {0}")]
    ApplicationError(String),
}
