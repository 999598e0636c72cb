//! Core kite components.
//!
//! Every kite entity, player or NPC, carries a [`Kite`] together with
//! [`MapPosition`](super::mapposition::MapPosition),
//! [`RigidBody`](super::rigidbody::RigidBody), [`Tail`](super::tail::Tail),
//! [`KitePull`] and [`Kick`]. The player kite is tagged with [`Player`]; NPC
//! kites additionally carry [`KiteAi`](super::kiteai::KiteAi) and
//! [`SpawnLifecycle`](super::spawnlifecycle::SpawnLifecycle).

use bevy_ecs::prelude::Component;
use glam::Vec2;
use serde::Serialize;

/// Unique kite identifier, stable for the lifetime of the kite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct KiteId(pub u32);

/// The fixed kite color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KiteColor {
    #[default]
    Crimson,
    Azure,
    Amber,
    Jade,
    Amethyst,
    Tangerine,
}

impl KiteColor {
    pub const PALETTE: [KiteColor; 6] = [
        KiteColor::Crimson,
        KiteColor::Azure,
        KiteColor::Amber,
        KiteColor::Jade,
        KiteColor::Amethyst,
        KiteColor::Tangerine,
    ];

    pub fn hex(self) -> &'static str {
        match self {
            KiteColor::Crimson => "#ff0055",
            KiteColor::Azure => "#0099ff",
            KiteColor::Amber => "#ffcc00",
            KiteColor::Jade => "#25d366",
            KiteColor::Amethyst => "#9b59b6",
            KiteColor::Tangerine => "#e67e22",
        }
    }

    pub fn from_hex(hex: &str) -> Option<KiteColor> {
        Self::PALETTE
            .into_iter()
            .find(|color| color.hex().eq_ignore_ascii_case(hex))
    }

    pub fn palette_index(self) -> usize {
        Self::PALETTE
            .iter()
            .position(|c| *c == self)
            .unwrap_or(0)
    }

    /// Palette entry at `index`, wrapping around the palette length.
    pub fn from_palette_index(index: usize) -> KiteColor {
        Self::PALETTE[index % Self::PALETTE.len()]
    }
}

/// Identity and terminal state of a kite.
#[derive(Component, Debug, Clone, Copy)]
pub struct Kite {
    pub id: KiteId,
    pub color: KiteColor,
    /// Set once by the cut resolver; never cleared.
    pub is_cut: bool,
}

impl Kite {
    pub fn new(id: KiteId, color: KiteColor) -> Self {
        Self {
            id,
            color,
            is_cut: false,
        }
    }

    /// Mark the kite as cut. Returns false if it already was.
    pub fn cut(&mut self) -> bool {
        if self.is_cut {
            return false;
        }
        self.is_cut = true;
        true
    }
}

/// Marker for the kite steered by the local player.
#[derive(Component, Debug, Clone, Copy)]
pub struct Player;

/// Steering pull applied on top of lift. Unit-length or shorter.
///
/// Written by the player controller from the steering intent, or by the AI
/// engine from its current heading.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct KitePull {
    pub direction: Vec2,
}

impl KitePull {
    pub fn set(&mut self, direction: Vec2) {
        self.direction = direction.clamp_length_max(1.0);
    }
}

/// Kick action state. A kick lasts a single tick and re-arms after
/// `cooldown` frames.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Kick {
    pub is_kicking: bool,
    pub cooldown: u32,
}

impl Kick {
    /// Advance one tick: clear last tick's kick and count the cooldown down.
    pub fn tick(&mut self) {
        self.is_kicking = false;
        self.cooldown = self.cooldown.saturating_sub(1);
    }

    /// Start a kick if the cooldown allows it.
    pub fn try_kick(&mut self, cooldown_frames: u32) -> bool {
        if self.cooldown > 0 {
            return false;
        }
        self.is_kicking = true;
        self.cooldown = cooldown_frames;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_round_trip_through_hex() {
        for color in KiteColor::PALETTE {
            assert_eq!(KiteColor::from_hex(color.hex()), Some(color));
        }
        assert_eq!(KiteColor::from_hex("#123456"), None);
    }

    #[test]
    fn test_palette_index_wraps() {
        assert_eq!(KiteColor::from_palette_index(6), KiteColor::Crimson);
        assert_eq!(KiteColor::from_palette_index(8), KiteColor::Amber);
        assert_eq!(KiteColor::Tangerine.palette_index(), 5);
    }

    #[test]
    fn test_cut_is_terminal_and_reported_once() {
        let mut kite = Kite::new(KiteId(1), KiteColor::Azure);
        assert!(kite.cut());
        assert!(!kite.cut());
        assert!(kite.is_cut);
    }

    #[test]
    fn test_kick_is_cooldown_gated() {
        let mut kick = Kick::default();
        assert!(kick.try_kick(3));
        assert!(kick.is_kicking);
        kick.tick();
        assert!(!kick.is_kicking);
        assert!(!kick.try_kick(3));
        kick.tick();
        kick.tick();
        assert_eq!(kick.cooldown, 0);
        assert!(kick.try_kick(3));
    }

    #[test]
    fn test_pull_is_clamped_to_unit_length() {
        let mut pull = KitePull::default();
        pull.set(Vec2::new(3.0, 4.0));
        assert!((pull.direction.length() - 1.0).abs() < 1e-6);
    }
}
