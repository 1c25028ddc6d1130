use glam::Vec2;
use crate::api::types::EntityId;
use crate::components::mesh::MeshComponent;

/// Visual handle: one on-screen object the engine writes every frame.
/// The host binds a node to each handle once and never re-subscribes.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// Group tag ("planet", "moon", ...) used for bulk replacement.
    pub tag: String,
    /// Inactive handles are skipped when building the instance buffer.
    pub active: bool,
    /// Center position in viewport pixels.
    pub pos: Vec2,
    /// Entities without a mesh are invisible.
    pub mesh: Option<MeshComponent>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec2::ZERO,
            mesh: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_mesh(mut self, mesh: MeshComponent) -> Self {
        self.mesh = Some(mesh);
        self
    }
}
