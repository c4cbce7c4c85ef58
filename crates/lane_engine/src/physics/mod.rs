//! Physics module for rigid-body simulation
//!
//! [`PhysicsWorld`] wraps a rapier3d pipeline. Bodies are described with
//! [`RigidBody`] on insertion and read back as snapshots, so the rest of the
//! engine never touches rapier types. The world steps at a fixed rate and can
//! be paused as a whole.

pub mod body;
pub mod shape;

pub use body::RigidBody;
pub use shape::{Aabb, CollisionShape};

use crate::core::PhysicsConfig;
use crate::foundation::math::{constants::HALF_PI, Vec3};
use nalgebra::{Isometry3, Translation3};
use rapier3d::dynamics::{
    CCDSolver, ImpulseJointSet, IntegrationParameters, IslandManager, MultibodyJointSet,
    RigidBodyBuilder, RigidBodyHandle, RigidBodySet,
};
use rapier3d::geometry::{BroadPhase, ColliderBuilder, ColliderSet, NarrowPhase};
use rapier3d::pipeline::PhysicsPipeline;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a body in a [`PhysicsWorld`]
    pub struct BodyHandle;
}

/// Engine-side record for one rapier body
///
/// `desc` keeps the shape and material the body was created with; pose and
/// velocity always come from rapier.
#[derive(Debug, Clone, Copy)]
struct BodyEntry {
    rapier: RigidBodyHandle,
    desc: RigidBody,
}

/// The simulation world
pub struct PhysicsWorld {
    entries: SlotMap<BodyHandle, BodyEntry>,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    pipeline: PhysicsPipeline,
    integration: IntegrationParameters,
    islands: IslandManager,
    broad_phase: BroadPhase,
    narrow_phase: NarrowPhase,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd: CCDSolver,
    gravity: Vec3,
    enabled: bool,
    fixed_timestep: f32,
    max_substeps: u32,
    accumulator: f32,
}

impl PhysicsWorld {
    /// Create an empty world
    pub fn new(config: &PhysicsConfig) -> Self {
        let integration = IntegrationParameters {
            dt: config.fixed_timestep,
            ..IntegrationParameters::default()
        };

        Self {
            entries: SlotMap::with_key(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            pipeline: PhysicsPipeline::new(),
            integration,
            islands: IslandManager::new(),
            broad_phase: BroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd: CCDSolver::new(),
            gravity: Vec3::from(config.gravity),
            enabled: config.enabled,
            fixed_timestep: config.fixed_timestep,
            max_substeps: config.max_substeps.max(1),
            accumulator: 0.0,
        }
    }

    /// Insert a body
    ///
    /// Zero mass inserts a fixed body; anything else is dynamic.
    pub fn add(&mut self, body: RigidBody) -> BodyHandle {
        let pose = Isometry3::from_parts(Translation3::from(body.position), body.rotation);
        let builder = if body.is_static() {
            RigidBodyBuilder::fixed()
        } else {
            RigidBodyBuilder::dynamic()
                .linvel(body.linear_velocity)
                .angvel(body.angular_velocity)
        };
        let rapier = self.bodies.insert(builder.position(pose).build());

        let mut collider = match body.shape {
            CollisionShape::Box { half_extents } => {
                ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
            }
            CollisionShape::Sphere { radius } => ColliderBuilder::ball(radius),
            // rapier cylinders run along Y; ours run along local Z
            CollisionShape::Cylinder { radius, height } => {
                ColliderBuilder::cylinder(height * 0.5, radius).rotation(Vec3::x() * HALF_PI)
            }
        }
        .restitution(body.restitution)
        .friction(body.friction);
        if !body.is_static() {
            collider = collider.mass(body.mass);
        }
        self.colliders.insert_with_parent(collider.build(), rapier, &mut self.bodies);

        let handle = self.entries.insert(BodyEntry { rapier, desc: body });
        log::trace!("Added {:?} body {:?} (mass {})", body.shape, handle, body.mass);
        handle
    }

    /// Remove a body, returning its last state if it existed
    pub fn remove(&mut self, handle: BodyHandle) -> Option<RigidBody> {
        let snapshot = self.body(handle)?;
        let entry = self.entries.remove(handle)?;
        self.bodies.remove(
            entry.rapier,
            &mut self.islands,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            true,
        );
        Some(snapshot)
    }

    /// Current state of a body
    pub fn body(&self, handle: BodyHandle) -> Option<RigidBody> {
        let entry = self.entries.get(handle)?;
        let body = self.bodies.get(entry.rapier)?;

        Some(RigidBody {
            position: *body.translation(),
            rotation: *body.rotation(),
            linear_velocity: *body.linvel(),
            angular_velocity: *body.angvel(),
            ..entry.desc
        })
    }

    /// Set a body's linear velocity and wake it
    ///
    /// Returns false if the handle is stale. Static bodies ignore the call.
    pub fn set_linear_velocity(&mut self, handle: BodyHandle, velocity: Vec3) -> bool {
        let Some(entry) = self.entries.get(handle) else {
            return false;
        };
        match self.bodies.get_mut(entry.rapier) {
            Some(body) => {
                body.set_linvel(velocity, true);
                true
            }
            None => false,
        }
    }

    /// Iterate over all bodies
    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, RigidBody)> + '_ {
        self.entries
            .keys()
            .filter_map(|handle| self.body(handle).map(|body| (handle, body)))
    }

    /// Set the gravity vector
    pub fn set_gravity(&mut self, gravity: Vec3) {
        log::debug!("Gravity set to {:?}", gravity);
        self.gravity = gravity;
    }

    /// Current gravity vector
    pub fn gravity(&self) -> Vec3 {
        self.gravity
    }

    /// Enable or disable stepping
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.accumulator = 0.0;
    }

    /// Whether `step` advances the simulation
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Flip the enabled flag and return the new value
    pub fn toggle_enabled(&mut self) -> bool {
        self.set_enabled(!self.enabled);
        log::info!("Physics {}", if self.enabled { "enabled" } else { "disabled" });
        self.enabled
    }

    /// Number of bodies
    pub fn body_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of bodies with non-zero mass
    pub fn dynamic_body_count(&self) -> usize {
        self.entries.values().filter(|entry| !entry.desc.is_static()).count()
    }

    /// Advance the simulation by `dt` seconds
    ///
    /// Time is accumulated and consumed in fixed substeps; leftover time
    /// carries into the next call. Returns the number of substeps taken.
    /// A disabled world does nothing.
    pub fn step(&mut self, dt: f32) -> u32 {
        if !self.enabled || dt <= 0.0 {
            return 0;
        }

        self.accumulator += dt;
        let mut substeps = 0;
        while self.accumulator >= self.fixed_timestep && substeps < self.max_substeps {
            self.substep();
            self.accumulator -= self.fixed_timestep;
            substeps += 1;
        }

        if substeps == self.max_substeps {
            // Falling behind: drop the backlog instead of spiralling.
            self.accumulator = self.accumulator.min(self.fixed_timestep);
        }

        substeps
    }

    fn substep(&mut self) {
        self.pipeline.step(
            &self.gravity,
            &self.integration,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd,
            None,
            &(),
            &(),
        );
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new(&PhysicsConfig::default())
    }
}
