use crate::api::types::EntityId;
use crate::components::entity::Entity;

/// Flat storage for visual handles.
/// Lookups by id are linear; per-frame paths use `get_mut_at` with the slot
/// the handle was spawned into.
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: Vec::with_capacity(capacity),
        }
    }

    /// Append a handle. Returns its slot, valid until something before it
    /// is despawned.
    pub fn spawn(&mut self, entity: Entity) -> usize {
        self.entities.push(entity);
        self.entities.len() - 1
    }

    /// Remove a handle by ID. Removing an absent ID is a no-op returning None.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        let idx = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.remove(idx))
    }

    /// Remove every handle carrying `tag`, keeping the order of the rest.
    /// Returns how many were removed.
    pub fn despawn_tagged(&mut self, tag: &str) -> usize {
        let before = self.entities.len();
        self.entities.retain(|e| e.tag != tag);
        before - self.entities.len()
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// `get_mut` that checks `slot` first. O(1) while the handle has not
    /// moved; falls back to a search when it has.
    pub fn get_mut_at(&mut self, slot: usize, id: EntityId) -> Option<&mut Entity> {
        if matches!(self.entities.get(slot), Some(e) if e.id == id) {
            return self.entities.get_mut(slot);
        }
        self.get_mut(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    pub fn count_tagged(&self, tag: &str) -> usize {
        self.entities.iter().filter(|e| e.tag == tag).count()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn spawn_and_get() {
        let mut scene = Scene::new();
        let id = EntityId(1);
        scene.spawn(Entity::new(id).with_pos(Vec2::new(10.0, 20.0)));
        assert_eq!(scene.get(id).unwrap().pos, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn get_mut_at_uses_slot_and_survives_shifts() {
        let mut scene = Scene::new();
        let slots: Vec<usize> = (1..=3).map(|i| scene.spawn(Entity::new(EntityId(i)))).collect();
        assert_eq!(slots, vec![0, 1, 2]);

        scene.get_mut_at(2, EntityId(3)).unwrap().pos = Vec2::ONE;
        assert_eq!(scene.get(EntityId(3)).unwrap().pos, Vec2::ONE);

        // Id 3 shifts down to slot 1; the stale slot still resolves it
        scene.despawn(EntityId(1));
        scene.get_mut_at(2, EntityId(3)).unwrap().pos = Vec2::X;
        assert_eq!(scene.get(EntityId(3)).unwrap().pos, Vec2::X);

        assert!(scene.get_mut_at(0, EntityId(1)).is_none());
        assert!(scene.get_mut_at(99, EntityId(1)).is_none());
    }

    #[test]
    fn despawn_twice_is_noop() {
        let mut scene = Scene::new();
        let id = EntityId(7);
        scene.spawn(Entity::new(id));
        assert!(scene.despawn(id).is_some());
        assert!(scene.despawn(id).is_none());
        assert!(scene.is_empty());
    }

    #[test]
    fn despawn_tagged_keeps_others_in_order() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_tag("planet"));
        scene.spawn(Entity::new(EntityId(2)).with_tag("ring"));
        scene.spawn(Entity::new(EntityId(3)).with_tag("planet"));
        scene.spawn(Entity::new(EntityId(4)).with_tag("ring"));

        assert_eq!(scene.despawn_tagged("planet"), 2);
        let ids: Vec<u32> = scene.iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![2, 4]);
        assert_eq!(scene.count_tagged("planet"), 0);
        assert_eq!(scene.despawn_tagged("planet"), 0);
    }
}
