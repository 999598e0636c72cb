//! Kite body: velocity plus the accelerations acting on it.
//!
//! The physics system rewrites every [`Force`] each frame before integrating,
//! so nothing carries over except the velocity. The aerodynamic results of
//! the last step (`lift` vector and scalar `drag`) stay on the body for the
//! presentation layer.

use bevy_ecs::prelude::Component;
use glam::Vec2;
use rustc_hash::FxHashMap;

/// Accelerations a kite is subject to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Force {
    Gravity,
    Wind,
    /// Aerodynamic lift bent by the steering pull.
    Lift,
    Drag,
}

#[derive(Component, Clone, Debug, Default)]
pub struct RigidBody {
    /// Pixels per second.
    pub velocity: Vec2,
    pub forces: FxHashMap<Force, Vec2>,
    pub lift: Vec2,
    pub drag: f32,
    pub max_speed: Option<f32>,
}

impl RigidBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_speed(max_speed: Option<f32>) -> Self {
        Self {
            max_speed,
            ..Self::default()
        }
    }

    pub fn set_force(&mut self, force: Force, value: Vec2) {
        self.forces.insert(force, value);
    }

    /// Current value of `force`; zero if it was never set.
    pub fn force(&self, force: Force) -> Vec2 {
        self.forces.get(&force).copied().unwrap_or(Vec2::ZERO)
    }

    pub fn total_acceleration(&self) -> Vec2 {
        self.forces.values().fold(Vec2::ZERO, |total, f| total + *f)
    }

    /// Clamp the velocity to `max_speed`, keeping its direction.
    pub fn clamp_speed(&mut self) {
        if let Some(max) = self.max_speed {
            self.velocity = self.velocity.clamp_length_max(max.max(0.0));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_set_force_overwrites() {
        let mut body = RigidBody::new();
        body.set_force(Force::Lift, Vec2::new(0.0, -10.0));
        body.set_force(Force::Lift, Vec2::new(0.0, -20.0));
        assert_eq!(body.forces.len(), 1);
        assert!(approx_eq(body.force(Force::Lift).y, -20.0));
        assert_eq!(body.force(Force::Drag), Vec2::ZERO);
    }

    #[test]
    fn test_total_acceleration_sums_forces() {
        let mut body = RigidBody::new();
        body.set_force(Force::Gravity, Vec2::new(0.0, 60.0));
        body.set_force(Force::Wind, Vec2::new(30.0, 0.0));
        body.set_force(Force::Lift, Vec2::new(0.0, -100.0));
        let total = body.total_acceleration();
        assert!(approx_eq(total.x, 30.0));
        assert!(approx_eq(total.y, -40.0));
    }

    #[test]
    fn test_clamp_speed_keeps_direction() {
        let mut body = RigidBody::with_max_speed(Some(10.0));
        body.velocity = Vec2::new(30.0, 40.0);
        body.clamp_speed();
        assert!(approx_eq(body.velocity.x, 6.0));
        assert!(approx_eq(body.velocity.y, 8.0));
    }

    #[test]
    fn test_unbounded_body_keeps_speed() {
        let mut body = RigidBody::new();
        body.velocity = Vec2::new(3000.0, 0.0);
        body.clamp_speed();
        assert!(approx_eq(body.velocity.x, 3000.0));
    }
}
