//! Serialisable per-tick view of the simulation for the presentation layer.
//!
//! [`capture`] copies everything a renderer needs out of the world: every
//! kite with its tail and AI state, the parameters, the score, the game
//! state and the focus cursors.

use bevy_ecs::prelude::*;
use glam::Vec2;
use serde::Serialize;

use crate::components::kite::{Kick, Kite, KiteId, Player};
use crate::components::kiteai::{AiState, KiteAi, Personality};
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::spawnlifecycle::{SpawnLifecycle, SpawnState};
use crate::components::tail::Tail;
use crate::resources::focus::{MenuFocus, PauseFocus};
use crate::resources::fullscreen::FullScreen;
use crate::resources::gameparams::GameParams;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::wind::WindField;
use crate::resources::worldtime::WorldTime;

#[derive(Debug, Clone, Serialize)]
pub struct KiteSnapshot {
    pub id: KiteId,
    pub is_player: bool,
    pub pos: Vec2,
    pub vel: Vec2,
    pub lift: Vec2,
    pub drag: f32,
    /// Palette color as `#rrggbb`.
    pub color: &'static str,
    pub is_cut: bool,
    pub tail: Vec<Vec2>,
    pub is_kicking: bool,
    pub kick_cooldown: u32,
    pub personality: Option<Personality>,
    pub ai_state: Option<AiState>,
    pub target_id: Option<KiteId>,
    pub roam_target: Option<Vec2>,
    pub spawn_state: Option<SpawnState>,
    pub spawn_timer: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FocusSnapshot {
    pub menu: usize,
    pub last_weather: usize,
    pub pause: usize,
    pub color: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub state: GameStates,
    pub params: GameParams,
    pub focus: FocusSnapshot,
    pub wind: Vec2,
    pub fullscreen: bool,
    /// Kites ordered by id.
    pub kites: Vec<KiteSnapshot>,
}

impl FrameSnapshot {
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| format!("Failed to serialize snapshot: {}", e))
    }
}

type KiteQuery = (
    &'static Kite,
    &'static MapPosition,
    &'static RigidBody,
    &'static Tail,
    &'static Kick,
    Option<&'static KiteAi>,
    Option<&'static SpawnLifecycle>,
    Has<Player>,
);

pub fn capture(world: &mut World) -> FrameSnapshot {
    let mut query = world.query::<KiteQuery>();
    let mut kites: Vec<KiteSnapshot> = query
        .iter(world)
        .map(
            |(kite, position, body, tail, kick, ai, lifecycle, is_player)| KiteSnapshot {
                id: kite.id,
                is_player,
                pos: position.pos,
                vel: body.velocity,
                lift: body.lift,
                drag: body.drag,
                color: kite.color.hex(),
                is_cut: kite.is_cut,
                tail: tail.points().collect(),
                is_kicking: kick.is_kicking,
                kick_cooldown: kick.cooldown,
                personality: ai.map(|a| a.personality),
                ai_state: ai.map(|a| a.state),
                target_id: ai.and_then(|a| a.target),
                roam_target: ai.and_then(|a| a.roam_target),
                spawn_state: lifecycle.map(|l| l.state),
                spawn_timer: lifecycle.map(|l| l.timer),
            },
        )
        .collect();
    kites.sort_by_key(|k| k.id);

    let menu = world.resource::<MenuFocus>();
    let pause = world.resource::<PauseFocus>();
    FrameSnapshot {
        frame: world.resource::<WorldTime>().frame_count,
        state: world.resource::<GameState>().get(),
        params: world.resource::<GameParams>().clone(),
        focus: FocusSnapshot {
            menu: menu.index(),
            last_weather: menu.last_weather(),
            pause: pause.index(),
            color: pause.color_index(),
        },
        wind: world.resource::<WindField>().force,
        fullscreen: world.contains_resource::<FullScreen>(),
        kites,
    }
}

#[cfg(test)]
mod tests {
    use crate::game::Game;
    use crate::resources::gameconfig::GameConfig;
    use crate::resources::gamestate::{GameState, GameStates};

    #[test]
    fn test_snapshot_lists_player_and_serializes() {
        let mut game = Game::new(GameConfig::default()).expect("game");
        game.world_mut()
            .resource_mut::<GameState>()
            .set(GameStates::Playing);
        game.world_mut().run_system_cached(crate::game::enter_play).expect("hook");
        game.tick(1.0 / 60.0);

        let snapshot = game.snapshot();
        assert_eq!(snapshot.state, GameStates::Playing);
        assert_eq!(snapshot.kites.iter().filter(|k| k.is_player).count(), 1);
        let json = snapshot.to_json().expect("json");
        assert!(json.contains("\"is_player\":true"));
        assert!(json.contains("\"state\":"));
    }
}
