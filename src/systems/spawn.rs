//! Spawn lifecycle manager.
//!
//! - [`spawn_timer_system`] counts spawning kites down to active.
//! - [`spawn_director`] keeps the NPC population at the difficulty-derived
//!   capacity, spawning one kite per cooldown at a random field edge.
//! - [`despawn_out_of_bounds`] removes NPC kites that left the field by more
//!   than the margin.
//!
//! Cut kites are removed by the TTL system once their grace period ends.
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{debug, info};

use crate::components::kite::{Kick, Kite, KiteColor, KiteId, KitePull, Player};
use crate::components::kiteai::{KiteAi, Personality};
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::spawnlifecycle::SpawnLifecycle;
use crate::components::tail::Tail;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gameparams::GameParams;
use crate::resources::playfield::PlayField;
use crate::resources::simrng::SimRng;
use crate::resources::spawndirector::SpawnDirector;

/// Components shared by every kite.
fn kite_bundle(
    id: KiteId,
    color: KiteColor,
    pos: Vec2,
    config: &GameConfig,
) -> (Kite, MapPosition, RigidBody, Tail, KitePull, Kick) {
    let mut tail = Tail::new(config.physics.tail_length);
    tail.push(pos);
    (
        Kite::new(id, color),
        MapPosition::from_vec(pos),
        RigidBody::with_max_speed(Some(config.physics.max_speed)),
        tail,
        KitePull::default(),
        Kick::default(),
    )
}

/// Launch the player kite from the field centre.
pub fn spawn_player_kite(
    commands: &mut Commands,
    director: &mut SpawnDirector,
    config: &GameConfig,
    field: &PlayField,
    color: KiteColor,
) -> Entity {
    let id = director.allocate_id();
    info!("Player kite {:?} launched", id);
    commands
        .spawn((kite_bundle(id, color, field.center(), config), Player))
        .id()
}

/// Spawn an NPC kite in the spawning state.
pub fn spawn_npc_kite(
    commands: &mut Commands,
    director: &mut SpawnDirector,
    config: &GameConfig,
    pos: Vec2,
    color: KiteColor,
    personality: Personality,
) -> Entity {
    let id = director.allocate_id();
    info!("Kite {:?} ({:?}) spawning at {:?}", id, personality, pos);
    commands
        .spawn((
            kite_bundle(id, color, pos, config),
            KiteAi::new(personality),
            SpawnLifecycle::spawning(config.spawn.spawn_timer_frames),
        ))
        .id()
}

/// Personality draw weights for a difficulty: peaceful kites give way to
/// aggressive and clever ones as difficulty rises.
pub fn personality_weights(difficulty: f32) -> [f32; 3] {
    let d = difficulty.clamp(0.0, 1.0);
    [0.5 - 0.4 * d, 0.25 + 0.2 * d, 0.25 + 0.2 * d]
}

const PERSONALITIES: [Personality; 3] = [
    Personality::Peaceful,
    Personality::Aggressive,
    Personality::Clever,
];

/// Random point on one of the four field edges.
pub fn edge_point(rng: &mut SimRng, field: &PlayField) -> Vec2 {
    let along = rng.unit();
    match rng.index(4) {
        0 => Vec2::new(along * field.width, 0.0),
        1 => Vec2::new(field.width, along * field.height),
        2 => Vec2::new(along * field.width, field.height),
        _ => Vec2::new(0.0, along * field.height),
    }
}

pub fn spawn_timer_system(mut query: Query<(&Kite, &mut SpawnLifecycle)>) {
    for (kite, mut lifecycle) in query.iter_mut() {
        if lifecycle.tick() {
            debug!("Kite {:?} is now active", kite.id);
        }
    }
}

pub fn spawn_director(
    mut commands: Commands,
    mut director: ResMut<SpawnDirector>,
    mut rng: ResMut<SimRng>,
    config: Res<GameConfig>,
    params: Res<GameParams>,
    field: Res<PlayField>,
    npcs: Query<&Kite, With<SpawnLifecycle>>,
) {
    let ready = director.tick();
    let alive = npcs.iter().filter(|kite| !kite.is_cut).count() as u32;
    let capacity = config.spawn.capacity(params.difficulty());
    if alive >= capacity || !ready {
        return;
    }
    let pos = edge_point(&mut rng, &field);
    let personality = PERSONALITIES[rng.weighted(&personality_weights(params.difficulty()))];
    let color = KiteColor::from_palette_index(rng.index(KiteColor::PALETTE.len()));
    spawn_npc_kite(&mut commands, &mut director, &config, pos, color, personality);
    director.cooldown = config.spawn.spawn_interval_frames;
}

pub fn despawn_out_of_bounds(
    mut commands: Commands,
    field: Res<PlayField>,
    query: Query<(Entity, &Kite, &MapPosition), Without<Player>>,
) {
    for (entity, kite, position) in query.iter() {
        if field.is_beyond_margin(position.pos) {
            debug!("Kite {:?} left the field", kite.id);
            commands.entity(entity).try_despawn();
        }
    }
}
