//! Play field bounds.
//!
//! The field spans `(0, 0)` to `(width, height)` with y growing downward.
//! NPC kites may leave it; they are despawned once they are further than
//! `margin` outside.
use bevy_ecs::prelude::Resource;
use glam::Vec2;

use crate::resources::gameconfig::PlayfieldTuning;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct PlayField {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl Default for PlayField {
    fn default() -> Self {
        Self::from_tuning(&PlayfieldTuning::default())
    }
}

impl PlayField {
    pub fn from_tuning(tuning: &PlayfieldTuning) -> Self {
        PlayField {
            width: tuning.width.max(1.0),
            height: tuning.height.max(1.0),
            margin: tuning.margin.max(0.0),
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x <= self.width && p.y <= self.height
    }

    /// True once `p` is further than the margin outside the field.
    pub fn is_beyond_margin(&self, p: Vec2) -> bool {
        p.x < -self.margin
            || p.y < -self.margin
            || p.x > self.width + self.margin
            || p.y > self.height + self.margin
    }

    pub fn clamp(&self, p: Vec2) -> Vec2 {
        p.clamp(Vec2::ZERO, self.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_is_outside_the_field() {
        let field = PlayField {
            width: 100.0,
            height: 50.0,
            margin: 10.0,
        };
        assert!(field.contains(Vec2::new(100.0, 50.0)));
        assert!(!field.contains(Vec2::new(105.0, 10.0)));
        assert!(!field.is_beyond_margin(Vec2::new(105.0, 10.0)));
        assert!(field.is_beyond_margin(Vec2::new(111.0, 10.0)));
        assert!(field.is_beyond_margin(Vec2::new(10.0, -10.5)));
        assert_eq!(field.clamp(Vec2::new(-3.0, 70.0)), Vec2::new(0.0, 50.0));
    }
}
