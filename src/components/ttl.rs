//! Time-to-live component for automatic entity despawning.
//!
//! The [`Ttl`] component counts frames down. When the remaining count reaches
//! zero the entity is despawned. The cut observer inserts it on kites that
//! were just cut so their falling tail has time to resolve visually before
//! they disappear.
//!
//! # How It Works
//!
//! 1. A kite is cut and receives `Ttl::frames(grace)`
//! 2. The `ttl_system` runs each playing tick:
//!    - Decrements remaining frames by one
//!    - When `remaining == 0`, despawns the entity
//!
//! # Related
//!
//! - [`crate::systems::ttl::ttl_system`] – system that updates and despawns entities
//! - [`crate::events::collision::kite_cut_observer`] – inserts the component

use bevy_ecs::prelude::Component;

/// Frame-count time-to-live; the entity is despawned when it runs out.
///
/// Counting frames rather than seconds keeps removal aligned with the other
/// per-tick counters (spawn timers, kick cooldowns).
#[derive(Component, Debug, Clone, Copy)]
pub struct Ttl {
    /// Remaining frames before despawn.
    pub remaining: u32,
}

impl Ttl {
    /// Create a new Ttl lasting the given number of frames.
    pub fn frames(frames: u32) -> Self {
        Ttl { remaining: frames }
    }
}
