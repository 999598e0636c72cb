//! TTL (Time-to-live) system.
//!
//! Counts [`Ttl`] components down by one frame per playing tick and despawns
//! the entity when the count reaches zero. Cut kites get their `Ttl` from
//! [`kite_cut_observer`](crate::events::collision::kite_cut_observer).

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::ttl::Ttl;

pub fn ttl_system(mut query: Query<(Entity, &mut Ttl)>, mut commands: Commands) {
    for (entity, mut ttl) in query.iter_mut() {
        ttl.remaining = ttl.remaining.saturating_sub(1);
        if ttl.remaining == 0 {
            debug!("Ttl expired for {:?}", entity);
            commands.entity(entity).try_despawn();
        }
    }
}
