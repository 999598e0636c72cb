//! Read-only projection of the player kite for the AI.
//!
//! Published once per tick by
//! [`publish_player_view`](crate::systems::player::publish_player_view) so the
//! AI engine can target the player without querying the player entity.
use bevy_ecs::prelude::Resource;
use glam::Vec2;

use crate::components::kite::KiteId;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerKiteInfo {
    pub id: KiteId,
    pub pos: Vec2,
    pub vel: Vec2,
    pub is_kicking: bool,
    pub is_cut: bool,
}

/// `None` while there is no player kite (menu, or between cut and relaunch).
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PlayerView {
    pub info: Option<PlayerKiteInfo>,
}
