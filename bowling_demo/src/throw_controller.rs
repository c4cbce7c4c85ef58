//! Ball throwing and the gravity switch
//!
//! Every throw spawns a fresh ball at the camera and launches it along the
//! view direction. Balls are never cleaned up.

use lane_engine::audio::AudioNode;
use lane_engine::foundation::math::{Transform, Vec3};
use lane_engine::render::{Material, Mesh};
use lane_engine::scene::NodeId;
use lane_engine::Engine;
use nalgebra::Unit;

use crate::config::ThrowConfig;
use crate::world_scene;

/// Action that throws a ball
pub const SHOOT_ACTION: &str = "Shoot";

/// Action that pauses or resumes the physics world
pub const GRAVITY_ACTION: &str = "Gravity";

/// Directions shorter than this cannot be normalized
const MIN_DIRECTION_LENGTH: f32 = 1e-6;

/// Launch velocity along `direction`
///
/// A zero-length direction gives a ball at rest rather than NaN velocity.
pub fn throw_velocity(direction: Vec3, speed: f32) -> Vec3 {
    Unit::try_new(direction, MIN_DIRECTION_LENGTH).map_or_else(Vec3::zeros, |unit| unit.into_inner() * speed)
}

/// Spawns balls and flips the physics switch
#[derive(Debug, Clone)]
pub struct ThrowController {
    ball_mesh: Mesh,
    ball_material: Material,
    throw_sound: AudioNode,
    speed: f32,
    ball_mass: f32,
    balls: Vec<NodeId>,
}

impl ThrowController {
    /// Controller using preloaded ball material and throw sound
    pub fn new(ball_material: Material, throw_sound: AudioNode, config: &ThrowConfig) -> Self {
        Self {
            ball_mesh: Mesh::sphere(32, 32, config.ball_radius),
            ball_material,
            throw_sound,
            speed: config.speed,
            ball_mass: config.ball_mass,
            balls: Vec::new(),
        }
    }

    /// Spawn a ball at the camera and send it along the view direction
    pub fn throw_ball(&mut self, engine: &mut Engine) -> NodeId {
        let position = engine.camera.position;
        let velocity = throw_velocity(engine.camera.target - position, self.speed);

        let (node, body) = world_scene::spawn_body(
            engine,
            "Ball",
            self.ball_mesh,
            self.ball_material.clone(),
            Transform::from_position(position),
            self.ball_mass,
        );
        engine.physics.set_linear_velocity(body, velocity);
        self.balls.push(node);

        if let Err(e) = engine.audio.play(&engine.assets, &self.throw_sound) {
            log::warn!("Throw sound failed: {}", e);
        }

        log::debug!("Ball {} thrown from {:?} with velocity {:?}", self.balls.len(), position, velocity);
        node
    }

    /// Pause or resume the simulation; returns the new state
    pub fn toggle_gravity(engine: &mut Engine) -> bool {
        engine.physics.toggle_enabled()
    }

    /// Balls spawned so far
    pub fn balls(&self) -> &[NodeId] {
        &self.balls
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use lane_engine::assets::AssetManager;
    use lane_engine::audio::AudioAsset;
    use lane_engine::EngineConfig;

    #[test]
    fn test_velocity_is_normalized_direction_times_speed() {
        let velocity = throw_velocity(Vec3::new(0.0, -4.0, -20.0), 8.0);
        assert_relative_eq!(velocity.norm(), 8.0, epsilon = 1e-5);
        assert_relative_eq!(velocity, Vec3::new(0.0, -4.0, -20.0).normalize() * 8.0, epsilon = 1e-5);
    }

    #[test]
    fn test_degenerate_direction_gives_zero_velocity() {
        let velocity = throw_velocity(Vec3::zeros(), 8.0);
        assert_eq!(velocity, Vec3::zeros());
        assert!(velocity.iter().all(|v| v.is_finite()));
    }

    fn engine_with_sound(dir: &std::path::Path) -> (Engine, AudioNode) {
        std::fs::write(dir.join("bang.wav"), b"RIFF....WAVE").unwrap();

        let mut config = EngineConfig::headless(1);
        config.assets.search_paths = vec![dir.display().to_string()];
        let mut engine = Engine::new(config).unwrap();
        let clip = engine.assets.load::<AudioAsset>("bang.wav").unwrap();
        (engine, AudioNode::new(clip).with_volume(0.7))
    }

    #[test]
    fn test_throw_spawns_ball_with_velocity_and_sound() {
        let dir = tempfile::tempdir().unwrap();
        let (mut engine, sound) = engine_with_sound(dir.path());
        engine.camera.set_position(Vec3::new(0.0, 6.0, 20.0));
        engine.camera.look_at(Vec3::new(0.0, 2.0, 0.0), Vec3::y());

        let mut controller = ThrowController::new(Material::lighting(), sound, &ThrowConfig::default());
        let node = controller.throw_ball(&mut engine);

        let ball = engine.scene.get(node).unwrap();
        assert_eq!(ball.name, "Ball");
        assert_relative_eq!(ball.transform.position, Vec3::new(0.0, 6.0, 20.0));

        let body = engine.physics.body(ball.body.unwrap()).unwrap();
        assert_eq!(body.mass, 1.0);
        assert_relative_eq!(body.linear_velocity, engine.camera.direction() * 8.0, epsilon = 1e-5);

        let playing = engine.audio.playing();
        assert_eq!(playing.len(), 1);
        assert!(!playing[0].looping);
    }

    #[test]
    fn test_repeated_throws_from_same_pose_match() {
        let dir = tempfile::tempdir().unwrap();
        let (mut engine, sound) = engine_with_sound(dir.path());
        let mut controller = ThrowController::new(Material::lighting(), sound, &ThrowConfig::default());

        let velocities: Vec<Vec3> = (0..3)
            .map(|_| {
                let node = controller.throw_ball(&mut engine);
                let body = engine.scene.get(node).unwrap().body.unwrap();
                engine.physics.body(body).unwrap().linear_velocity
            })
            .collect();

        assert_eq!(controller.balls().len(), 3);
        assert_eq!(engine.scene.count_named("Ball"), 3);
        assert_eq!(engine.physics.dynamic_body_count(), 3);
        assert!(velocities.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn test_failed_sound_does_not_block_throw() {
        let dir = tempfile::tempdir().unwrap();
        let (mut engine, sound) = engine_with_sound(dir.path());
        // the clip handle now points into an empty manager
        engine.assets = AssetManager::new(&engine.config().assets);

        let mut controller = ThrowController::new(Material::lighting(), sound, &ThrowConfig::default());
        controller.throw_ball(&mut engine);

        assert_eq!(engine.scene.count_named("Ball"), 1);
        assert!(engine.audio.playing().is_empty());
    }

    #[test]
    fn test_gravity_toggle_twice_restores_flag() {
        let mut engine = Engine::new(EngineConfig::headless(1)).unwrap();
        let original = engine.physics.is_enabled();

        assert_eq!(ThrowController::toggle_gravity(&mut engine), !original);
        assert_eq!(ThrowController::toggle_gravity(&mut engine), original);
        assert_eq!(engine.physics.is_enabled(), original);
    }
}
