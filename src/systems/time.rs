//! Tick clock.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Advance [`WorldTime`] by one tick of `dt` unscaled seconds.
///
/// Runs every tick, paused or not, so `frame_count` numbers ticks rather than
/// playing frames. A negative or non-finite `dt` counts as a zero-length tick.
pub fn update_world_time(world: &mut World, dt: f32) {
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    let mut clock = world.resource_mut::<WorldTime>();
    clock.delta = dt * clock.time_scale;
    clock.elapsed += clock.delta;
    clock.frame_count += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_delta_still_counts_tick() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default().with_time_scale(2.0));
        update_world_time(&mut world, 0.5);
        update_world_time(&mut world, f32::NAN);
        update_world_time(&mut world, -1.0);
        let clock = world.resource::<WorldTime>();
        assert_eq!(clock.frame_count, 3);
        assert_eq!(clock.delta, 0.0);
        assert!((clock.elapsed - 1.0).abs() < 1e-6);
    }
}
