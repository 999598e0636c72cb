//! Player kite systems.
//!
//! - [`player_controller`] turns the [`SteeringIntent`] into the player
//!   kite's pull and kick, and keeps its color in sync with the parameters.
//! - [`publish_player_view`] projects the player kite into [`PlayerView`].
//! - [`player_respawn`] launches a new player kite once the previous one was
//!   removed after being cut.
use bevy_ecs::prelude::*;

use crate::components::kite::{Kick, Kite, KitePull, Player};
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gameparams::GameParams;
use crate::resources::input::SteeringIntent;
use crate::resources::playerinfo::{PlayerKiteInfo, PlayerView};
use crate::resources::playfield::PlayField;
use crate::resources::spawndirector::SpawnDirector;
use crate::systems::spawn::spawn_player_kite;

pub fn player_controller(
    intent: Res<SteeringIntent>,
    params: Res<GameParams>,
    config: Res<GameConfig>,
    mut query: Query<(&mut Kite, &mut KitePull, &mut Kick), With<Player>>,
) {
    for (mut kite, mut pull, mut kick) in query.iter_mut() {
        kick.tick();
        if kite.is_cut {
            pull.set(glam::Vec2::ZERO);
            continue;
        }
        kite.color = params.kite_color;
        pull.set(intent.pull);
        if intent.kick {
            kick.try_kick(config.ai.kick_cooldown_frames);
        }
    }
}

pub fn publish_player_view(
    mut view: ResMut<PlayerView>,
    query: Query<(&Kite, &MapPosition, &RigidBody, &Kick), With<Player>>,
) {
    view.info = query
        .iter()
        .next()
        .map(|(kite, position, body, kick)| PlayerKiteInfo {
            id: kite.id,
            pos: position.pos,
            vel: body.velocity,
            is_kicking: kick.is_kicking,
            is_cut: kite.is_cut,
        });
}

pub fn player_respawn(
    mut commands: Commands,
    mut director: ResMut<SpawnDirector>,
    config: Res<GameConfig>,
    params: Res<GameParams>,
    field: Res<PlayField>,
    players: Query<(), With<Player>>,
) {
    if players.is_empty() {
        spawn_player_kite(
            &mut commands,
            &mut director,
            &config,
            &field,
            params.kite_color,
        );
    }
}
