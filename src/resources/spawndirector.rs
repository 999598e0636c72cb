//! Spawn cadence and id allocation.
use bevy_ecs::prelude::Resource;

use crate::components::kite::KiteId;

/// State of the spawn lifecycle manager carried between ticks.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct SpawnDirector {
    /// Frames until the next spawn is allowed.
    pub cooldown: u32,
    next_id: u32,
}

impl SpawnDirector {
    /// Allocate a fresh kite id. Ids are never reused within a run.
    pub fn allocate_id(&mut self) -> KiteId {
        let id = KiteId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Restart the spawn cadence for a new game. Ids keep increasing so
    /// stale AI targets from the previous game can never match.
    pub fn reset_cooldown(&mut self) {
        self.cooldown = 0;
    }

    /// Count the cooldown down by one tick; true when spawning is allowed.
    pub fn tick(&mut self) -> bool {
        self.cooldown = self.cooldown.saturating_sub(1);
        self.cooldown == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_across_resets() {
        let mut director = SpawnDirector::default();
        let a = director.allocate_id();
        director.reset_cooldown();
        let b = director.allocate_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_tick_counts_down() {
        let mut director = SpawnDirector {
            cooldown: 2,
            ..Default::default()
        };
        assert!(!director.tick());
        assert!(director.tick());
        assert!(director.tick());
    }
}
