//! Spawn-in state of NPC kites.
//!
//! A freshly spawned kite is visible but non-interactive: the AI, the cut
//! resolver and the spawn capacity check treat it specially until its
//! countdown reaches zero and it becomes [`SpawnState::Active`].

use bevy_ecs::prelude::Component;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpawnState {
    Spawning,
    Active,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct SpawnLifecycle {
    pub state: SpawnState,
    /// Frames remaining until the kite becomes active.
    pub timer: u32,
}

impl SpawnLifecycle {
    pub fn spawning(frames: u32) -> Self {
        Self {
            state: SpawnState::Spawning,
            timer: frames,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == SpawnState::Active
    }

    /// Advance one tick. Returns true on the tick the kite becomes active.
    pub fn tick(&mut self) -> bool {
        if self.state == SpawnState::Active {
            return false;
        }
        self.timer = self.timer.saturating_sub(1);
        if self.timer == 0 {
            self.state = SpawnState::Active;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawning_becomes_active_after_exact_ticks() {
        let mut life = SpawnLifecycle::spawning(3);
        assert!(!life.tick());
        assert!(!life.tick());
        assert!(!life.is_active());
        assert!(life.tick());
        assert!(life.is_active());
        assert!(!life.tick());
    }

    #[test]
    fn test_zero_timer_activates_on_first_tick() {
        let mut life = SpawnLifecycle::spawning(0);
        assert!(life.tick());
        assert!(life.is_active());
    }
}
