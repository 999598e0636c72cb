//! State transition hooks addressable by name.
//!
//! `game.rs` registers its hook systems here (`"enter_play"`,
//! `"clear_kites"`) and the game state observer runs them by name, so the
//! events module never depends on the game module.

use bevy_ecs::prelude::Resource;
use bevy_ecs::system::SystemId;
use rustc_hash::FxHashMap;

#[derive(Resource, Default)]
pub struct SystemsStore {
    hooks: FxHashMap<&'static str, SystemId>,
}

impl SystemsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `id` under `name`, replacing any previous hook.
    pub fn insert(&mut self, name: &'static str, id: SystemId) {
        self.hooks.insert(name, id);
    }

    pub fn get(&self, name: &str) -> Option<SystemId> {
        self.hooks.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::world::World;

    fn noop() {}

    #[test]
    fn test_lookup_by_name() {
        let mut world = World::new();
        let id = world.register_system(noop);
        let mut store = SystemsStore::new();
        assert!(store.is_empty());
        store.insert("enter_play", id);
        assert_eq!(store.get("enter_play"), Some(id));
        assert_eq!(store.get("clear_kites"), None);
        assert_eq!(store.len(), 1);
    }
}
