//! Bowling lane scene setup
//!
//! Builds the static world once at startup: floor, back wall, the pin rack,
//! one light, the ambient loop and the input bindings. Every asset is loaded
//! before anything is attached, so a missing file leaves the scene untouched.

use lane_engine::assets::{AssetHandle, Texture, TextureKey, WrapMode};
use lane_engine::audio::{AudioAsset, AudioNode, VolumeGroup};
use lane_engine::foundation::math::{constants::HALF_PI, utils, Transform, Vec2, Vec3};
use lane_engine::physics::{BodyHandle, RigidBody};
use lane_engine::render::{Color, Light, Material, Mesh};
use lane_engine::scene::{Node, NodeId};
use lane_engine::{AppError, Engine};

use crate::config::{BowlingConfig, LightingKind};
use crate::throw_controller::{ThrowController, GRAVITY_ACTION, SHOOT_ACTION};

/// Attach a geometry node driven by a new rigid body
///
/// The body takes its shape from the mesh and its pose from `transform`.
/// A mass of zero makes it static.
pub(crate) fn spawn_body(
    engine: &mut Engine,
    name: &str,
    mesh: Mesh,
    material: Material,
    transform: Transform,
    mass: f32,
) -> (NodeId, BodyHandle) {
    let body = engine.physics.add(
        RigidBody::new(mesh.collision_shape(), mass)
            .with_position(transform.position)
            .with_rotation(transform.rotation),
    );
    let node = engine
        .scene
        .attach_to_root(Node::geometry(name, mesh, material).with_transform(transform));
    engine.scene.bind_body(node, body);

    log::debug!("Spawned '{}' at {:?} (mass {})", name, transform.position, mass);
    (node, body)
}

/// Assets the scene needs, loaded up front
struct SceneResources {
    wall_texture: AssetHandle<Texture>,
    floor_texture: AssetHandle<Texture>,
    ball_texture: AssetHandle<Texture>,
    pin_texture: AssetHandle<Texture>,
    ambient: AssetHandle<AudioAsset>,
    throw_sound: AssetHandle<AudioAsset>,
}

impl SceneResources {
    fn load(engine: &mut Engine, config: &BowlingConfig) -> Result<Self, AppError> {
        let paths = &config.assets;
        let tiled = |path: &str| TextureKey::new(path).with_mips(true).with_wrap(WrapMode::Repeat);

        Ok(Self {
            wall_texture: engine.assets.load_texture(&tiled(paths.wall_texture.as_str()))?,
            floor_texture: engine.assets.load_texture(&tiled(paths.floor_texture.as_str()))?,
            ball_texture: engine.assets.load_texture(&TextureKey::new(paths.ball_texture.as_str()))?,
            pin_texture: engine.assets.load_texture(&TextureKey::new(paths.pin_texture.as_str()))?,
            ambient: engine.assets.load::<AudioAsset>(&paths.ambient_sound)?,
            throw_sound: engine.assets.load::<AudioAsset>(&paths.throw_sound)?,
        })
    }
}

/// Nodes created by [`WorldScene::build`]
#[derive(Debug)]
pub struct WorldScene {
    /// Floor node
    pub floor: NodeId,
    /// Back wall node
    pub wall: NodeId,
    /// Pins, front row first
    pub pins: Vec<NodeId>,
    /// Ambient sound node
    pub ambient: NodeId,
}

impl WorldScene {
    /// Build the lane into `engine` and return the throw controller for it
    ///
    /// Fails only when an asset cannot be loaded.
    pub fn build(engine: &mut Engine, config: &BowlingConfig) -> Result<(Self, ThrowController), AppError> {
        log::info!("Building bowling scene...");
        let resources = SceneResources::load(engine, config)?;

        Self::setup_camera(engine, config);
        let floor = Self::build_floor(engine, &resources);
        let wall = Self::build_wall(engine, &resources);
        let pins = Self::build_pins(engine, config, &resources);
        Self::add_light(engine, config);
        engine.scene.set_background(Color::from(config.background));
        let ambient = Self::start_ambient(engine, config, &resources);
        Self::register_controls(engine, config);

        let ball_material = Material::lighting()
            .with_diffuse_map(resources.ball_texture)
            .with_shininess(1.0);
        let throw_sound = AudioNode::new(resources.throw_sound)
            .with_volume(config.volumes.throw)
            .in_group(VolumeGroup::Sfx);
        let controller = ThrowController::new(ball_material, throw_sound, &config.throw);

        log::info!(
            "Scene ready: {} nodes, {} bodies, {} pins",
            engine.scene.node_count(),
            engine.physics.body_count(),
            pins.len()
        );
        Ok((Self { floor, wall, pins, ambient }, controller))
    }

    fn setup_camera(engine: &mut Engine, config: &BowlingConfig) {
        engine.camera.set_position(Vec3::from(config.camera.position));
        engine.camera.look_at(Vec3::from(config.camera.look_at), Vec3::y());
        engine.fly_camera = config.fly_camera;
    }

    fn build_floor(engine: &mut Engine, resources: &SceneResources) -> NodeId {
        let mut mesh = Mesh::cuboid(Vec3::new(20.0, 0.1, 15.0));
        mesh.scale_texture_coordinates(Vec2::new(6.0, 3.0));
        let material = Material::lighting().with_diffuse_map(resources.floor_texture);

        let mut transform = Transform::from_position(Vec3::new(0.0, -0.1, 0.0));
        transform.rotate(0.0, HALF_PI, 0.0);

        spawn_body(engine, "Floor", mesh, material, transform, 0.0).0
    }

    fn build_wall(engine: &mut Engine, resources: &SceneResources) -> NodeId {
        let mut mesh = Mesh::cuboid(Vec3::new(8.0, 0.4, 20.0));
        mesh.scale_texture_coordinates(Vec2::new(6.0, 3.0));
        let material = Material::lighting().with_diffuse_map(resources.wall_texture);

        let mut transform = Transform::from_position(Vec3::new(0.0, -0.1, -10.0));
        transform
            .rotate(HALF_PI, 0.0, HALF_PI)
            .translate(Vec3::new(-3.5, 2.0, 0.0));

        spawn_body(engine, "Wall", mesh, material, transform, 0.0).0
    }

    fn build_pins(engine: &mut Engine, config: &BowlingConfig, resources: &SceneResources) -> Vec<NodeId> {
        engine.physics.set_gravity(Vec3::from(config.gravity));
        log::debug!("Racking {} pins in {} rows", config.rack.pin_count(), config.rack.rows);

        let mesh = Mesh::cylinder(10, 15, 0.3, 2.5, true);
        let material = Material::lighting()
            .with_diffuse_map(resources.pin_texture)
            .with_shininess(1.0);

        config
            .rack
            .pin_positions()
            .into_iter()
            .map(|position| {
                let mut transform = Transform::from_position(position);
                transform.rotate(-HALF_PI, 0.0, 0.0);
                spawn_body(engine, "Pin", mesh, material.clone(), transform, 1.0).0
            })
            .collect()
    }

    fn add_light(engine: &mut Engine, config: &BowlingConfig) {
        let lighting = &config.lighting;
        let light = match lighting.kind {
            LightingKind::Spot => Light::spot(
                engine.camera.position,
                engine.camera.direction(),
                Color::WHITE.mult(lighting.spot_intensity),
                lighting.spot_range,
                utils::deg_to_rad(lighting.spot_inner_degrees),
                utils::deg_to_rad(lighting.spot_outer_degrees),
            ),
            LightingKind::Directional => Light::directional(
                Vec3::from(lighting.directional_direction),
                Color::WHITE.mult(lighting.directional_intensity),
            ),
        };
        log::debug!("Adding {:?} light", lighting.kind);
        engine.scene.add_light(light);
    }

    fn start_ambient(engine: &mut Engine, config: &BowlingConfig, resources: &SceneResources) -> NodeId {
        let ambient = AudioNode::new(resources.ambient)
            .with_volume(config.volumes.ambient)
            .looping(true)
            .in_group(VolumeGroup::Ambient);

        if let Err(e) = engine.audio.play(&engine.assets, &ambient) {
            log::warn!("Ambient sound failed: {}", e);
        }
        engine.scene.attach_to_root(Node::audio("Ambient", ambient))
    }

    fn register_controls(engine: &mut Engine, config: &BowlingConfig) {
        for trigger in &config.controls.throw {
            engine.input.add_mapping(SHOOT_ACTION, *trigger);
        }
        for trigger in &config.controls.gravity {
            engine.input.add_mapping(GRAVITY_ACTION, *trigger);
        }
        log::debug!(
            "Controls: {} -> {:?}, {} -> {:?}",
            SHOOT_ACTION,
            engine.input.mappings_for(SHOOT_ACTION),
            GRAVITY_ACTION,
            engine.input.mappings_for(GRAVITY_ACTION)
        );
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use lane_engine::assets::image_loader::ImageData;
    use lane_engine::assets::AssetError;
    use lane_engine::input::{KeyCode, MouseButton, Trigger};
    use lane_engine::render::LightKind;
    use lane_engine::EngineConfig;
    use std::path::Path;

    /// Write stand-in assets for every path in `config` under `root`
    pub(crate) fn write_assets(root: &Path, config: &BowlingConfig) {
        let paths = &config.assets;
        for texture in [&paths.wall_texture, &paths.floor_texture, &paths.ball_texture, &paths.pin_texture] {
            let path = root.join(texture);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            ImageData::solid_color(4, 4, [200, 180, 160, 255]).save_png(&path).unwrap();
        }

        let sounds = [(&paths.ambient_sound, &b"OggS-river"[..]), (&paths.throw_sound, &b"RIFF....WAVE"[..])];
        for (sound, bytes) in sounds {
            let path = root.join(sound);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, bytes).unwrap();
        }
    }

    /// Headless demo configuration reading assets from `root`
    pub(crate) fn test_config(root: &Path, frames: u64) -> BowlingConfig {
        let mut config = BowlingConfig::default();
        config.engine = EngineConfig::headless(frames);
        config.engine.assets.search_paths = vec![root.display().to_string()];
        config
    }

    fn built_scene() -> (tempfile::TempDir, Engine, WorldScene, ThrowController, BowlingConfig) {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path(), 1);
        write_assets(dir.path(), &config);

        let mut engine = Engine::new(config.engine.clone()).unwrap();
        let (scene, controller) = WorldScene::build(&mut engine, &config).unwrap();
        (dir, engine, scene, controller, config)
    }

    #[test]
    fn test_default_scene_contents() {
        let (_dir, engine, scene, _, _) = built_scene();

        assert_eq!(scene.pins.len(), 21);
        assert_eq!(engine.scene.count_named("Pin"), 21);
        assert_eq!(engine.scene.count_named("Floor"), 1);
        assert_eq!(engine.scene.count_named("Wall"), 1);
        assert_eq!(engine.scene.count_named("Ball"), 0);
        assert_eq!(engine.physics.body_count(), 23);
        assert_eq!(engine.physics.dynamic_body_count(), 21);
        assert_relative_eq!(engine.physics.gravity(), Vec3::new(0.0, -6.0, 0.0));
    }

    #[test]
    fn test_static_geometry_placement() {
        let (_dir, engine, scene, _, _) = built_scene();

        let floor = engine.scene.get(scene.floor).unwrap();
        assert_relative_eq!(floor.transform.position, Vec3::new(0.0, -0.1, 0.0));
        assert_relative_eq!(floor.mesh().unwrap().tex_coord_scale, Vec2::new(6.0, 3.0));
        assert!(engine.physics.body(floor.body.unwrap()).unwrap().is_static());

        let wall = engine.scene.get(scene.wall).unwrap();
        assert_relative_eq!(wall.transform.position, Vec3::new(-3.5, 1.9, -10.0), epsilon = 1e-6);
        // the wall stands upright: tall along Y, thin along Z
        let extents = engine.physics.body(wall.body.unwrap()).unwrap().aabb().half_extents();
        assert_relative_eq!(extents, Vec3::new(20.0, 8.0, 0.4), epsilon = 1e-4);
    }

    #[test]
    fn test_pins_stand_upright_on_rack_positions() {
        let (_dir, engine, scene, _, config) = built_scene();

        for (node, expected) in scene.pins.iter().zip(config.rack.pin_positions()) {
            let pin = engine.scene.get(*node).unwrap();
            let body = engine.physics.body(pin.body.unwrap()).unwrap();
            assert_eq!(body.mass, 1.0);
            assert_relative_eq!(body.position, expected);
            assert_relative_eq!(body.aabb().half_extents(), Vec3::new(0.3, 1.25, 0.3), epsilon = 1e-4);
        }
    }

    #[test]
    fn test_spot_light_at_camera() {
        let (_dir, engine, _, _, _) = built_scene();

        assert_relative_eq!(engine.camera.position, Vec3::new(0.0, 6.0, 20.0));
        assert_eq!(engine.scene.lights().len(), 1);
        let light = engine.scene.lights()[0];
        match light.kind {
            LightKind::Spot { position, range, inner_angle, outer_angle, .. } => {
                assert_relative_eq!(position, engine.camera.position);
                assert_relative_eq!(range, 100.0);
                assert_relative_eq!(inner_angle, 5.0_f32.to_radians(), epsilon = 1e-6);
                assert_relative_eq!(outer_angle, 45.0_f32.to_radians(), epsilon = 1e-6);
            }
            LightKind::Directional { .. } => panic!("expected a spot light"),
        }
        assert_relative_eq!(light.direction(), engine.camera.direction(), epsilon = 1e-6);
        assert_eq!(light.color, Color::WHITE.mult(2.0));
        assert_eq!(engine.scene.background(), Color::new(0.0, 0.0, 0.2, 0.0));
    }

    #[test]
    fn test_directional_light_variant() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config(dir.path(), 1);
        config.lighting.kind = LightingKind::Directional;
        write_assets(dir.path(), &config);

        let mut engine = Engine::new(config.engine.clone()).unwrap();
        WorldScene::build(&mut engine, &config).unwrap();

        let light = engine.scene.lights()[0];
        assert!(matches!(light.kind, LightKind::Directional { .. }));
        assert_relative_eq!(light.direction(), Vec3::new(-1.0, -1.0, -1.0).normalize(), epsilon = 1e-6);
        assert_eq!(light.color, Color::WHITE.mult(0.8));
    }

    #[test]
    fn test_ambient_loop_and_controls() {
        let (_dir, engine, scene, _, _) = built_scene();

        let playing = engine.audio.playing();
        assert_eq!(playing.len(), 1);
        assert!(playing[0].looping);
        assert_eq!(engine.scene.get(scene.ambient).unwrap().name, "Ambient");

        assert_eq!(
            engine.input.mappings_for(SHOOT_ACTION),
            &[Trigger::Mouse(MouseButton::Left), Trigger::Key(KeyCode::Space)]
        );
        assert_eq!(engine.input.mappings_for(GRAVITY_ACTION), &[Trigger::Key(KeyCode::G)]);
    }

    #[test]
    fn test_missing_asset_leaves_scene_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path(), 1);
        write_assets(dir.path(), &config);
        std::fs::remove_file(dir.path().join(&config.assets.pin_texture)).unwrap();

        let mut engine = Engine::new(config.engine.clone()).unwrap();
        let result = WorldScene::build(&mut engine, &config);

        assert!(matches!(result, Err(AppError::Asset(AssetError::NotFound(_)))));
        assert_eq!(engine.scene.node_count(), 1);
        assert_eq!(engine.physics.body_count(), 0);
    }

    #[test]
    fn test_empty_rack() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config(dir.path(), 1);
        config.rack.rows = 0;
        write_assets(dir.path(), &config);

        let mut engine = Engine::new(config.engine.clone()).unwrap();
        let (scene, _) = WorldScene::build(&mut engine, &config).unwrap();

        assert!(scene.pins.is_empty());
        assert_eq!(engine.physics.dynamic_body_count(), 0);
    }
}
