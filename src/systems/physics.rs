//! Kite physics.
//!
//! Every playing tick, for each kite:
//! 1. [`apply_kite_forces`] rewrites the accelerations on its
//!    [`RigidBody`] from the wind, its steering pull and its velocity.
//! 2. [`integrate`] advances velocity then position (semi-implicit Euler)
//!    and clamps the speed.
//! 3. The new position is appended to the kite's [`Tail`].
//!
//! The player kite is then kept inside the play field.
use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::kite::{Kite, KitePull, Player};
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::{Force, RigidBody};
use crate::components::tail::Tail;
use crate::resources::gameconfig::{GameConfig, PhysicsTuning};
use crate::resources::playfield::PlayField;
use crate::resources::wind::WindField;
use crate::resources::worldtime::WorldTime;

/// Recompute the forces acting on a kite.
///
/// Lift points up with a magnitude proportional to the airflow over the kite
/// (wind relative to the kite's velocity) and is bent by the steering pull.
/// A cut kite has neither lift nor pull. Drag opposes the velocity.
pub fn apply_kite_forces(
    body: &mut RigidBody,
    wind: Vec2,
    pull: Vec2,
    is_cut: bool,
    tuning: &PhysicsTuning,
) {
    let airflow = (wind - body.velocity).length();
    let lift = if is_cut {
        Vec2::ZERO
    } else {
        Vec2::NEG_Y * tuning.lift_coefficient * airflow
            + pull.clamp_length_max(1.0) * tuning.pull_strength
    };
    let drag = tuning.drag_coefficient * body.velocity.length();

    let drag_direction = -body.velocity.normalize_or_zero();
    body.set_force(Force::Gravity, Vec2::new(0.0, tuning.gravity));
    body.set_force(Force::Wind, wind);
    body.set_force(Force::Lift, lift);
    body.set_force(Force::Drag, drag_direction * drag);
    body.lift = lift;
    body.drag = drag;
}

/// Semi-implicit Euler step: velocity first, then position with the new
/// velocity.
pub fn integrate(pos: &mut Vec2, body: &mut RigidBody, dt: f32) {
    body.velocity += body.total_acceleration() * dt;
    body.clamp_speed();
    *pos += body.velocity * dt;
}

/// Keep `pos` inside the field, removing the velocity component that points
/// out of it.
pub fn confine(pos: &mut Vec2, velocity: &mut Vec2, field: &PlayField) {
    let clamped = field.clamp(*pos);
    if clamped.x != pos.x && (clamped.x - pos.x) * velocity.x < 0.0 {
        velocity.x = 0.0;
    }
    if clamped.y != pos.y && (clamped.y - pos.y) * velocity.y < 0.0 {
        velocity.y = 0.0;
    }
    *pos = clamped;
}

pub fn kite_physics(
    time: Res<WorldTime>,
    wind: Res<WindField>,
    config: Res<GameConfig>,
    field: Res<PlayField>,
    mut query: Query<(
        &Kite,
        &mut MapPosition,
        &mut RigidBody,
        &mut Tail,
        &KitePull,
        Has<Player>,
    )>,
) {
    let dt = time.delta;
    for (kite, mut position, mut body, mut tail, pull, is_player) in query.iter_mut() {
        apply_kite_forces(
            &mut body,
            wind.force,
            pull.direction,
            kite.is_cut,
            &config.physics,
        );
        let mut pos = position.pos;
        integrate(&mut pos, &mut body, dt);
        if is_player && !kite.is_cut {
            let mut velocity = body.velocity;
            confine(&mut pos, &mut velocity, &field);
            body.velocity = velocity;
        }
        position.pos = pos;
        tail.push(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_cut_kite_has_no_lift() {
        let mut body = RigidBody::new();
        let tuning = PhysicsTuning::default();
        apply_kite_forces(&mut body, Vec2::new(40.0, 0.0), Vec2::X, true, &tuning);
        assert_eq!(body.lift, Vec2::ZERO);
        assert_eq!(body.force(Force::Lift), Vec2::ZERO);
    }

    #[test]
    fn test_pull_bends_lift_toward_pull() {
        let mut body = RigidBody::new();
        let tuning = PhysicsTuning::default();
        apply_kite_forces(&mut body, Vec2::ZERO, Vec2::X, false, &tuning);
        assert!(approx_eq(body.lift.x, tuning.pull_strength));
        apply_kite_forces(&mut body, Vec2::ZERO, Vec2::NEG_X * 5.0, false, &tuning);
        assert!(approx_eq(body.lift.x, -tuning.pull_strength));
    }

    #[test]
    fn test_drag_opposes_velocity() {
        let mut body = RigidBody::new();
        body.velocity = Vec2::new(10.0, 0.0);
        let tuning = PhysicsTuning::default();
        apply_kite_forces(&mut body, Vec2::ZERO, Vec2::ZERO, true, &tuning);
        let drag = body.force(Force::Drag);
        assert!(drag.x < 0.0);
        assert!(approx_eq(body.drag, tuning.drag_coefficient * 10.0));
    }

    #[test]
    fn test_integrate_is_semi_implicit() {
        let mut body = RigidBody::new();
        body.set_force(Force::Gravity, Vec2::new(0.0, 10.0));
        let mut pos = Vec2::ZERO;
        integrate(&mut pos, &mut body, 0.5);
        assert!(approx_eq(body.velocity.y, 5.0));
        assert!(approx_eq(pos.y, 2.5));
    }

    #[test]
    fn test_integrate_clamps_speed() {
        let mut body = RigidBody::with_max_speed(Some(3.0));
        body.set_force(Force::Wind, Vec2::new(100.0, 0.0));
        let mut pos = Vec2::ZERO;
        integrate(&mut pos, &mut body, 1.0);
        assert!(approx_eq(body.velocity.length(), 3.0));
    }

    #[test]
    fn test_confine_removes_outward_velocity_only() {
        let field = PlayField {
            width: 100.0,
            height: 100.0,
            margin: 0.0,
        };
        let mut pos = Vec2::new(105.0, 50.0);
        let mut vel = Vec2::new(20.0, -3.0);
        confine(&mut pos, &mut vel, &field);
        assert_eq!(pos, Vec2::new(100.0, 50.0));
        assert_eq!(vel, Vec2::new(0.0, -3.0));
    }
}
