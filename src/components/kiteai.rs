//! Per-NPC behaviour state.
//!
//! [`KiteAi`] is the memory of the AI state machine driven by
//! [`crate::systems::ai`]. It holds no kinematics; the AI writes its decision
//! into the kite's [`KitePull`](super::kite::KitePull) and
//! [`Kick`](super::kite::Kick) components.

use bevy_ecs::prelude::Component;
use glam::Vec2;
use serde::Serialize;

use crate::components::kite::KiteId;

/// Behavioural category governing willingness to engage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Personality {
    Peaceful,
    Aggressive,
    Clever,
}

impl Personality {
    pub fn can_attack(self) -> bool {
        !matches!(self, Personality::Peaceful)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AiState {
    #[default]
    Roaming,
    Attacking,
    Fleeing,
}

#[derive(Component, Debug, Clone)]
pub struct KiteAi {
    pub personality: Personality,
    pub state: AiState,
    pub target: Option<KiteId>,
    pub roam_target: Option<Vec2>,
    /// Position the kite is fleeing from, if any.
    pub flee_from: Option<Vec2>,
    /// Frames spent in the current state.
    pub state_frames: u32,
    /// Consecutive frames the current target spent outside the aggression radius.
    pub out_of_range_frames: u32,
    /// Frames until the next target re-evaluation while roaming.
    pub decision_timer: u32,
}

impl KiteAi {
    pub fn new(personality: Personality) -> Self {
        Self {
            personality,
            state: AiState::Roaming,
            target: None,
            roam_target: None,
            flee_from: None,
            state_frames: 0,
            out_of_range_frames: 0,
            decision_timer: 0,
        }
    }

    /// Switch state, resetting the per-state counters.
    pub fn enter(&mut self, state: AiState) {
        if self.state != state {
            log::debug!("AI {:?} -> {:?}", self.state, state);
        }
        self.state = state;
        self.state_frames = 0;
        self.out_of_range_frames = 0;
        match state {
            AiState::Roaming => {
                self.target = None;
                self.flee_from = None;
            }
            AiState::Attacking => self.flee_from = None,
            AiState::Fleeing => self.target = None,
        }
    }
}
