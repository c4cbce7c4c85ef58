//! Scene nodes

use crate::audio::AudioNode;
use crate::foundation::math::Transform;
use crate::physics::BodyHandle;
use crate::render::{Material, Mesh};
use slotmap::new_key_type;

new_key_type! {
    /// Handle to a node in a [`super::SceneGraph`]
    pub struct NodeId;
}

/// What a node holds
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Pure grouping node
    Group,
    /// Renderable geometry
    Geometry {
        /// Shape to draw
        mesh: Mesh,
        /// Surface
        material: Material,
    },
    /// Sound source
    Audio(AudioNode),
}

/// A scene graph node
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Node name; several nodes may share one
    pub name: String,
    /// Payload
    pub kind: NodeKind,
    /// Transform relative to the parent
    pub transform: Transform,
    /// Rigid body driving this node's transform
    pub body: Option<BodyHandle>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    fn with_kind(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            transform: Transform::identity(),
            body: None,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Grouping node
    pub fn group(name: impl Into<String>) -> Self {
        Self::with_kind(name, NodeKind::Group)
    }

    /// Geometry node
    pub fn geometry(name: impl Into<String>, mesh: Mesh, material: Material) -> Self {
        Self::with_kind(name, NodeKind::Geometry { mesh, material })
    }

    /// Audio node
    pub fn audio(name: impl Into<String>, audio: AudioNode) -> Self {
        Self::with_kind(name, NodeKind::Audio(audio))
    }

    /// Set the local transform
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Parent node, `None` for the root
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child nodes in attach order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Mesh of a geometry node
    pub fn mesh(&self) -> Option<&Mesh> {
        match &self.kind {
            NodeKind::Geometry { mesh, .. } => Some(mesh),
            _ => None,
        }
    }

    /// Material of a geometry node
    pub fn material(&self) -> Option<&Material> {
        match &self.kind {
            NodeKind::Geometry { material, .. } => Some(material),
            _ => None,
        }
    }
}
