//! AI behavior engine.
//!
//! Each active, uncut NPC runs a three-state machine (`roaming`,
//! `attacking`, `fleeing`) once per tick. The decision itself is the pure
//! function [`think`]; [`ai_behavior`] gathers the other kites into
//! [`Contact`]s and writes the result into each kite's [`KitePull`] and
//! [`Kick`].
//!
//! Spawning kites only steer toward the field centre. Cut kites go limp.
use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::kite::{Kick, Kite, KiteId, KitePull};
use crate::components::kiteai::{AiState, KiteAi, Personality};
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::spawnlifecycle::SpawnLifecycle;
use crate::resources::gameconfig::{AiTuning, GameConfig};
use crate::resources::gameparams::GameParams;
use crate::resources::playerinfo::PlayerView;
use crate::resources::playfield::PlayField;
use crate::resources::simrng::SimRng;

/// Another kite as seen by the deciding kite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub id: KiteId,
    pub pos: Vec2,
    pub vel: Vec2,
    pub is_kicking: bool,
}

/// Inputs shared by every decision of one tick.
pub struct AiContext<'a> {
    pub tuning: &'a AiTuning,
    pub difficulty: f32,
    pub field: &'a PlayField,
}

fn nearest<'c>(me: &Contact, contacts: &'c [Contact], within: f32) -> Option<&'c Contact> {
    contacts
        .iter()
        .filter(|c| c.id != me.id)
        .map(|c| (c, c.pos.distance(me.pos)))
        .filter(|(_, d)| *d <= within)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(c, _)| c)
}

/// Speed at which `other` approaches `me` along the line between them.
pub fn closing_speed(me: &Contact, other: &Contact) -> f32 {
    let towards_me = (me.pos - other.pos).normalize_or_zero();
    (other.vel - me.vel).dot(towards_me)
}

/// Run one tick of the state machine and return the steering pull.
///
/// `contacts` holds every kite that may be targeted or avoided: the player
/// (unless cut) and the other active, uncut NPCs. The kite itself may be in
/// the list; it is skipped.
pub fn think(
    ai: &mut KiteAi,
    kick: &mut Kick,
    me: &Contact,
    contacts: &[Contact],
    ctx: &AiContext,
    rng: &mut SimRng,
) -> Vec2 {
    let tuning = ctx.tuning;
    let radius = tuning.aggression_radius(ctx.difficulty);
    kick.tick();
    ai.state_frames = ai.state_frames.saturating_add(1);

    match ai.state {
        AiState::Roaming if !ai.personality.can_attack() => {
            if let Some(threat) = nearest(me, contacts, tuning.personal_space) {
                let from = threat.pos;
                ai.enter(AiState::Fleeing);
                ai.flee_from = Some(from);
            }
        }
        AiState::Roaming => {
            if ai.decision_timer == 0 {
                ai.decision_timer = tuning.reevaluate_frames;
                if let Some(target) = nearest(me, contacts, radius) {
                    let id = target.id;
                    ai.enter(AiState::Attacking);
                    ai.target = Some(id);
                }
            } else {
                ai.decision_timer -= 1;
            }
        }
        AiState::Attacking => {
            let target = ai
                .target
                .and_then(|id| contacts.iter().find(|c| c.id == id && c.id != me.id));
            match target {
                None => ai.enter(AiState::Roaming),
                Some(target) => {
                    let distance = target.pos.distance(me.pos);
                    if distance > radius {
                        ai.out_of_range_frames += 1;
                    } else {
                        ai.out_of_range_frames = 0;
                    }
                    let lost = distance > 2.0 * radius
                        || ai.out_of_range_frames > tuning.lose_target_after(ctx.difficulty);
                    if lost {
                        ai.enter(AiState::Roaming);
                    } else if ai.personality == Personality::Clever
                        && distance < 3.0 * tuning.kick_range
                        && (target.is_kicking
                            || closing_speed(me, target) > tuning.closing_speed)
                    {
                        let from = target.pos;
                        ai.enter(AiState::Fleeing);
                        ai.flee_from = Some(from);
                    } else if distance <= tuning.kick_range
                        && kick.try_kick(tuning.kick_cooldown_frames)
                    {
                        let from = target.pos;
                        ai.enter(AiState::Fleeing);
                        ai.flee_from = Some(from);
                    }
                }
            }
        }
        AiState::Fleeing => {
            if ai.state_frames >= tuning.flee_frames {
                ai.enter(AiState::Roaming);
            }
        }
    }

    steer(ai, me, contacts, ctx, rng)
}

fn steer(
    ai: &mut KiteAi,
    me: &Contact,
    contacts: &[Contact],
    ctx: &AiContext,
    rng: &mut SimRng,
) -> Vec2 {
    match ai.state {
        AiState::Attacking => ai
            .target
            .and_then(|id| contacts.iter().find(|c| c.id == id))
            .map(|t| (t.pos - me.pos).normalize_or_zero())
            .unwrap_or(Vec2::ZERO),
        AiState::Fleeing => match ai.flee_from {
            Some(from) => {
                let away = (me.pos - from).normalize_or_zero();
                if away == Vec2::ZERO { Vec2::NEG_Y } else { away }
            }
            None => Vec2::NEG_Y,
        },
        AiState::Roaming => {
            let reached = ai
                .roam_target
                .is_none_or(|t| t.distance(me.pos) <= ctx.tuning.roam_reach);
            if reached {
                let inset = ctx.field.size() * 0.1;
                ai.roam_target = Some(inset + rng.point_in(ctx.field.size() - inset * 2.0));
            }
            ai.roam_target
                .map(|t| (t - me.pos).normalize_or_zero())
                .unwrap_or(Vec2::ZERO)
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub fn ai_behavior(
    config: Res<GameConfig>,
    params: Res<GameParams>,
    field: Res<PlayField>,
    player: Res<PlayerView>,
    mut rng: ResMut<SimRng>,
    mut query: Query<(
        Entity,
        &Kite,
        &MapPosition,
        &RigidBody,
        &SpawnLifecycle,
        &mut KiteAi,
        &mut KitePull,
        &mut Kick,
    )>,
) {
    let mut contacts: Vec<Contact> = Vec::new();
    if let Some(info) = player.info.filter(|p| !p.is_cut) {
        contacts.push(Contact {
            id: info.id,
            pos: info.pos,
            vel: info.vel,
            is_kicking: info.is_kicking,
        });
    }
    let mut order: Vec<(KiteId, Entity)> = Vec::new();
    for (entity, kite, position, body, lifecycle, _, _, kick) in query.iter() {
        order.push((kite.id, entity));
        if !kite.is_cut && lifecycle.is_active() {
            contacts.push(Contact {
                id: kite.id,
                pos: position.pos,
                vel: body.velocity,
                is_kicking: kick.is_kicking,
            });
        }
    }
    order.sort_unstable();

    let ctx = AiContext {
        tuning: &config.ai,
        difficulty: params.difficulty(),
        field: &field,
    };
    for (_, entity) in order {
        let Ok((_, kite, position, body, lifecycle, mut ai, mut pull, mut kick)) =
            query.get_mut(entity)
        else {
            continue;
        };
        if kite.is_cut {
            kick.tick();
            pull.set(Vec2::ZERO);
            continue;
        }
        if !lifecycle.is_active() {
            pull.set((field.center() - position.pos).normalize_or_zero());
            continue;
        }
        let me = Contact {
            id: kite.id,
            pos: position.pos,
            vel: body.velocity,
            is_kicking: kick.is_kicking,
        };
        let direction = think(&mut ai, &mut kick, &me, &contacts, &ctx, &mut rng);
        pull.set(direction);
    }
}
