//! Wind update system.
use bevy_ecs::prelude::*;

use crate::resources::gameconfig::GameConfig;
use crate::resources::gameparams::GameParams;
use crate::resources::wind::WindField;
use crate::resources::worldtime::WorldTime;

/// Advance the wind phase by this tick's delta and recompute the force.
pub fn advance_wind(
    time: Res<WorldTime>,
    params: Res<GameParams>,
    config: Res<GameConfig>,
    mut wind: ResMut<WindField>,
) {
    wind.advance(
        time.delta,
        params.wind_speed(),
        params.weather,
        config.physics.wind_strength,
    );
}
