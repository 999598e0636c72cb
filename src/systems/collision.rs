//! Cut resolver.
//!
//! A kite is cut when the tail of another kite passes within the cut radius
//! of its body. A kicking kite turns this around: its body severs any tail it
//! touches and the tail's owner is cut. [`find_cuts`] decides the cuts of one
//! tick over a list of
//! interactive kites; [`cut_resolver`] applies them, awards the score and
//! triggers one [`KiteCutEvent`] per cut.
//!
//! Rules
//! - Only active, uncut kites take part (spawning kites are ignored).
//! - Kites are processed in id order; a kite cut earlier in the tick can
//!   neither cut nor be cut again.
//! - The newest `tail_head_skip` tail points never cut.
//! - A kicking body reaches `kick_reach` times the cut radius and wins over
//!   the plain tail contact.
use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::kite::{Kick, Kite, KiteId, Player};
use crate::components::mapposition::MapPosition;
use crate::components::spawnlifecycle::SpawnLifecycle;
use crate::components::tail::Tail;
use crate::events::collision::KiteCutEvent;
use crate::resources::gameconfig::{CutTuning, GameConfig};
use crate::resources::gameparams::GameParams;

/// A kite taking part in cut resolution.
#[derive(Debug, Clone, Copy)]
pub struct CutBody<'a> {
    pub entity: Entity,
    pub id: KiteId,
    pub pos: Vec2,
    pub tail: &'a Tail,
    pub is_kicking: bool,
    pub is_player: bool,
}

/// One resolved cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cut {
    pub victim: Entity,
    pub victim_id: KiteId,
    pub cutter_id: KiteId,
    pub victim_is_player: bool,
    pub cutter_is_player: bool,
}

/// Resolve the cuts of one tick. `bodies` must be sorted by id.
///
/// Each uncut kite's tail is tested against every other uncut body. A
/// kicking body within the kick reach severs the tail and cuts its owner;
/// otherwise a body within the cut radius is cut by the tail.
pub fn find_cuts(bodies: &[CutBody<'_>], tuning: &CutTuning) -> Vec<Cut> {
    let kick_radius = tuning.cut_radius * tuning.kick_reach;
    let mut is_cut = vec![false; bodies.len()];
    let mut cuts = Vec::new();
    for (i, owner) in bodies.iter().enumerate() {
        for (j, body) in bodies.iter().enumerate() {
            if is_cut[i] {
                break;
            }
            if i == j || is_cut[j] {
                continue;
            }
            let (victim, cutter) = if body.is_kicking
                && owner.tail.touches(body.pos, kick_radius, tuning.tail_head_skip)
            {
                (i, j)
            } else if owner.tail.touches(body.pos, tuning.cut_radius, tuning.tail_head_skip) {
                (j, i)
            } else {
                continue;
            };
            is_cut[victim] = true;
            cuts.push(Cut {
                victim: bodies[victim].entity,
                victim_id: bodies[victim].id,
                cutter_id: bodies[cutter].id,
                victim_is_player: bodies[victim].is_player,
                cutter_is_player: bodies[cutter].is_player,
            });
        }
    }
    cuts
}

type CutQueryData = (
    Entity,
    &'static mut Kite,
    &'static MapPosition,
    &'static Tail,
    &'static Kick,
    Option<&'static SpawnLifecycle>,
    Has<Player>,
);

pub fn cut_resolver(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut params: ResMut<GameParams>,
    mut query: Query<CutQueryData>,
) {
    let cuts = {
        let mut bodies: Vec<CutBody<'_>> = query
            .iter()
            .filter(|(_, kite, _, _, _, lifecycle, _)| {
                !kite.is_cut && lifecycle.is_none_or(|l| l.is_active())
            })
            .map(|(entity, kite, position, tail, kick, _, is_player)| CutBody {
                entity,
                id: kite.id,
                pos: position.pos,
                tail,
                is_kicking: kick.is_kicking,
                is_player,
            })
            .collect();
        bodies.sort_by_key(|b| b.id);
        find_cuts(&bodies, &config.cut)
    };

    for cut in cuts {
        let Ok((_, mut kite, ..)) = query.get_mut(cut.victim) else {
            continue;
        };
        if !kite.cut() {
            continue;
        }
        let points = if cut.cutter_is_player && !cut.victim_is_player {
            config.cut.points(params.difficulty())
        } else {
            0
        };
        params.add_score(points);
        commands.trigger(KiteCutEvent {
            victim: cut.victim,
            victim_id: cut.victim_id,
            cutter_id: cut.cutter_id,
            victim_is_player: cut.victim_is_player,
            points,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_tail(from: Vec2, to: Vec2, points: usize) -> Tail {
        let mut tail = Tail::new(points);
        for i in 0..points {
            tail.push(from.lerp(to, i as f32 / (points - 1) as f32));
        }
        tail
    }

    fn body<'a>(n: u32, pos: Vec2, tail: &'a Tail) -> CutBody<'a> {
        CutBody {
            entity: Entity::PLACEHOLDER,
            id: KiteId(n),
            pos,
            tail,
            is_kicking: false,
            is_player: false,
        }
    }

    fn tuning() -> CutTuning {
        CutTuning {
            cut_radius: 10.0,
            kick_reach: 2.0,
            tail_head_skip: 0,
            points_per_cut: 10,
        }
    }

    #[test]
    fn test_tail_crossing_body_cuts_body_owner() {
        let a_tail = line_tail(Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0), 10);
        let b_tail = line_tail(Vec2::new(500.0, 500.0), Vec2::new(500.0, 600.0), 10);
        let bodies = [
            body(1, Vec2::new(100.0, 0.0), &a_tail),
            body(2, Vec2::new(50.0, 5.0), &b_tail),
        ];
        let cuts = find_cuts(&bodies, &tuning());
        assert_eq!(cuts.len(), 1);
        assert_eq!(cuts[0].victim_id, KiteId(2));
        assert_eq!(cuts[0].cutter_id, KiteId(1));
    }

    #[test]
    fn test_no_self_cut() {
        let tail = line_tail(Vec2::ZERO, Vec2::new(100.0, 0.0), 10);
        let bodies = [body(1, Vec2::new(50.0, 0.0), &tail)];
        assert!(find_cuts(&bodies, &tuning()).is_empty());
    }

    #[test]
    fn test_kite_cut_earlier_in_tick_cannot_cut() {
        // 1's tail crosses 2, and 2's tail crosses 3: only the first cut happens.
        let t1 = line_tail(Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0), 10);
        let t2 = line_tail(Vec2::new(0.0, 100.0), Vec2::new(100.0, 100.0), 10);
        let t3 = line_tail(Vec2::new(900.0, 900.0), Vec2::new(950.0, 900.0), 10);
        let bodies = [
            body(1, Vec2::new(400.0, 400.0), &t1),
            body(2, Vec2::new(50.0, 3.0), &t2),
            body(3, Vec2::new(50.0, 103.0), &t3),
        ];
        let cuts = find_cuts(&bodies, &tuning());
        assert_eq!(cuts.len(), 1);
        assert_eq!(cuts[0].victim_id, KiteId(2));
    }

    #[test]
    fn test_mutual_crossing_cuts_lower_id_victim_only() {
        let t1 = line_tail(Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0), 10);
        let t2 = line_tail(Vec2::new(0.0, 50.0), Vec2::new(100.0, 50.0), 10);
        let bodies = [
            body(1, Vec2::new(50.0, 48.0), &t1),
            body(2, Vec2::new(50.0, 2.0), &t2),
        ];
        let cuts = find_cuts(&bodies, &tuning());
        assert_eq!(cuts.len(), 1);
        assert_eq!(cuts[0].victim_id, KiteId(2));
    }

    #[test]
    fn test_kicking_body_severs_tail_owner() {
        let player_tail = line_tail(Vec2::ZERO, Vec2::new(200.0, 0.0), 10);
        let npc_tail = line_tail(Vec2::new(900.0, 900.0), Vec2::new(950.0, 900.0), 10);
        let mut player = body(0, Vec2::new(200.0, 0.0), &player_tail);
        player.is_player = true;
        let mut npc = body(1, Vec2::new(50.0, 2.0), &npc_tail);

        // Flying into the tail without kicking cuts the intruder.
        let cuts = find_cuts(&[player, npc], &tuning());
        assert_eq!(cuts[0].victim_id, KiteId(1));
        assert!(cuts[0].cutter_is_player);

        npc.is_kicking = true;
        let cuts = find_cuts(&[player, npc], &tuning());
        assert_eq!(cuts.len(), 1);
        assert_eq!(cuts[0].victim_id, KiteId(0));
        assert_eq!(cuts[0].cutter_id, KiteId(1));
        assert!(cuts[0].victim_is_player);
        assert!(!cuts[0].cutter_is_player);
    }

    #[test]
    fn test_kick_reaches_further_than_contact() {
        let tail = line_tail(Vec2::ZERO, Vec2::new(100.0, 0.0), 10);
        let far_tail = line_tail(Vec2::new(900.0, 900.0), Vec2::new(950.0, 900.0), 10);
        let owner = body(1, Vec2::new(100.0, 0.0), &tail);
        let mut kicker = body(2, Vec2::new(50.0, 15.0), &far_tail);
        assert!(find_cuts(&[owner, kicker], &tuning()).is_empty());
        kicker.is_kicking = true;
        let cuts = find_cuts(&[owner, kicker], &tuning());
        assert_eq!(cuts.len(), 1);
        assert_eq!(cuts[0].victim_id, KiteId(1));
    }

    #[test]
    fn test_head_points_are_skipped() {
        let tail = line_tail(Vec2::ZERO, Vec2::new(90.0, 0.0), 10);
        let far_tail = line_tail(Vec2::new(900.0, 900.0), Vec2::new(950.0, 900.0), 10);
        let bodies = [
            body(1, Vec2::new(90.0, 0.0), &tail),
            body(2, Vec2::new(88.0, 0.0), &far_tail),
        ];
        let mut t = tuning();
        t.tail_head_skip = 3;
        assert!(find_cuts(&bodies, &t).is_empty());
    }
}
