//! Scene graph
//!
//! A tree of named nodes under a single root, plus the scene's lights and
//! background colour. Nodes bound to a rigid body take their transform from
//! the physics world on every [`SceneGraph::sync_from_physics`].

pub mod node;

pub use node::{Node, NodeId, NodeKind};

use crate::foundation::math::Transform;
use crate::physics::{BodyHandle, PhysicsWorld};
use crate::render::{Color, Light};
use slotmap::SlotMap;

/// Scene graph owned by the engine
pub struct SceneGraph {
    nodes: SlotMap<NodeId, Node>,
    root: NodeId,
    lights: Vec<Light>,
    background: Color,
}

impl SceneGraph {
    /// Create a graph holding only the root node
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node::group("Root Node"));
        Self {
            nodes,
            root,
            lights: Vec::new(),
            background: Color::BLACK,
        }
    }

    /// The root node
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Attach `node` under `parent`
    ///
    /// An unknown parent falls back to the root so the node is never lost.
    pub fn attach_child(&mut self, parent: NodeId, mut node: Node) -> NodeId {
        let parent = if self.nodes.contains_key(parent) { parent } else { self.root };
        node.parent = Some(parent);
        node.children.clear();

        let name = node.name.clone();
        let id = self.nodes.insert(node);
        if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children.push(id);
        }

        log::debug!("Attached node '{}' ({:?})", name, id);
        id
    }

    /// Attach `node` under the root
    pub fn attach_to_root(&mut self, node: Node) -> NodeId {
        self.attach_child(self.root, node)
    }

    /// Remove a node and its subtree, returning the node itself
    ///
    /// The root cannot be detached.
    pub fn detach(&mut self, id: NodeId) -> Option<Node> {
        if id == self.root {
            return None;
        }

        let node = self.nodes.remove(id)?;
        if let Some(parent) = node.parent.and_then(|parent| self.nodes.get_mut(parent)) {
            parent.children.retain(|child| *child != id);
        }

        let mut pending = node.children.clone();
        while let Some(child) = pending.pop() {
            if let Some(removed) = self.nodes.remove(child) {
                pending.extend(removed.children);
            }
        }

        Some(node)
    }

    /// Look up a node
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Look up a node for modification
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// First node with `name` in depth-first attach order
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.depth_first().into_iter().find(|id| self.nodes[*id].name == name)
    }

    /// Number of nodes called `name`
    pub fn count_named(&self, name: &str) -> usize {
        self.nodes.values().filter(|node| node.name == name).count()
    }

    /// Number of nodes, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Let `body` drive the transform of node `id`
    pub fn bind_body(&mut self, id: NodeId, body: BodyHandle) -> bool {
        match self.nodes.get_mut(id) {
            Some(node) => {
                node.body = Some(body);
                true
            }
            None => false,
        }
    }

    /// Copy body positions and rotations into their nodes
    ///
    /// Returns how many nodes were updated. Nodes whose body no longer exists
    /// keep their last transform.
    pub fn sync_from_physics(&mut self, physics: &PhysicsWorld) -> usize {
        let mut updated = 0;
        for node in self.nodes.values_mut() {
            let Some(body) = node.body.and_then(|handle| physics.body(handle)) else {
                continue;
            };
            node.transform.position = body.position;
            node.transform.rotation = body.rotation;
            updated += 1;
        }
        updated
    }

    /// World transform of a node, composed through its parents
    pub fn world_transform(&self, id: NodeId) -> Option<Transform> {
        let node = self.nodes.get(id)?;
        let mut world = node.transform;
        let mut parent = node.parent;

        while let Some(parent_id) = parent {
            let parent_node = self.nodes.get(parent_id)?;
            world = Transform {
                position: parent_node.transform.transform_point(world.position),
                rotation: parent_node.transform.rotation * world.rotation,
                scale: parent_node.transform.scale.component_mul(&world.scale),
            };
            parent = parent_node.parent;
        }

        Some(world)
    }

    /// Add a light to the scene
    pub fn add_light(&mut self, light: Light) {
        log::debug!("Added light {:?}", light.kind);
        self.lights.push(light);
    }

    /// Scene lights
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Set the background colour
    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    /// Background colour
    pub fn background(&self) -> Color {
        self.background
    }

    fn depth_first(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            order.push(id);
            if let Some(node) = self.nodes.get(id) {
                stack.extend(node.children.iter().rev());
            }
        }
        order
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PhysicsConfig;
    use crate::foundation::math::{Quat, Vec3};
    use crate::physics::{CollisionShape, RigidBody};
    use crate::render::{Material, Mesh};
    use approx::assert_relative_eq;

    fn pin() -> Node {
        Node::geometry("Pin", Mesh::cylinder(10, 15, 0.3, 2.5, true), Material::lighting())
    }

    #[test]
    fn test_attach_and_count() {
        let mut scene = SceneGraph::new();
        scene.attach_to_root(pin());
        scene.attach_to_root(pin());
        scene.attach_to_root(Node::group("Floor"));

        assert_eq!(scene.count_named("Pin"), 2);
        assert_eq!(scene.node_count(), 4);
        assert_eq!(scene.get(scene.root()).unwrap().children().len(), 3);
    }

    #[test]
    fn test_find_by_name_follows_attach_order() {
        let mut scene = SceneGraph::new();
        let first = scene.attach_to_root(pin());
        scene.attach_to_root(pin());

        assert_eq!(scene.find_by_name("Pin"), Some(first));
        assert_eq!(scene.find_by_name("Ball"), None);
    }

    #[test]
    fn test_detach_removes_subtree() {
        let mut scene = SceneGraph::new();
        let group = scene.attach_to_root(Node::group("Rack"));
        let child = scene.attach_child(group, pin());

        let removed = scene.detach(group).unwrap();
        assert_eq!(removed.name, "Rack");
        assert!(scene.get(child).is_none());
        assert_eq!(scene.node_count(), 1);
        assert!(scene.detach(scene.root()).is_none());
    }

    #[test]
    fn test_sync_copies_body_transform() {
        let mut scene = SceneGraph::new();
        let mut physics = PhysicsWorld::new(&PhysicsConfig::default());

        let rotation = Quat::from_euler_angles(0.5, 0.0, 0.0);
        let body = physics.add(
            RigidBody::new(CollisionShape::Sphere { radius: 0.7 }, 1.0)
                .with_position(Vec3::new(1.0, 2.0, 3.0))
                .with_rotation(rotation),
        );
        let ball = scene.attach_to_root(Node::geometry("Ball", Mesh::sphere(32, 32, 0.7), Material::lighting()));
        scene.attach_to_root(pin());
        assert!(scene.bind_body(ball, body));

        assert_eq!(scene.sync_from_physics(&physics), 1);
        let transform = scene.get(ball).unwrap().transform;
        assert_relative_eq!(transform.position, Vec3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(transform.rotation, rotation, epsilon = 1e-6);

        physics.remove(body);
        assert_eq!(scene.sync_from_physics(&physics), 0);
    }

    #[test]
    fn test_world_transform_composes_parents() {
        let mut scene = SceneGraph::new();
        let rack = scene.attach_to_root(
            Node::group("Rack").with_transform(Transform::from_position(Vec3::new(0.0, 0.0, -8.0))),
        );
        let child = scene.attach_child(rack, pin().with_transform(Transform::from_position(Vec3::new(2.0, 0.75, 0.0))));

        let world = scene.world_transform(child).unwrap();
        assert_relative_eq!(world.position, Vec3::new(2.0, 0.75, -8.0));
    }

    #[test]
    fn test_lights_and_background() {
        let mut scene = SceneGraph::new();
        scene.add_light(Light::directional(Vec3::new(-1.0, -1.0, -1.0), Color::WHITE));
        scene.set_background(Color::new(0.0, 0.0, 0.2, 0.0));

        assert_eq!(scene.lights().len(), 1);
        assert_eq!(scene.background(), Color::new(0.0, 0.0, 0.2, 0.0));
    }
}
