//! High-level game state resource.
//!
//! Tracks the authoritative coordinator state. Only the game state
//! coordinator system changes it; every change is followed by a
//! [`GameStateChangedEvent`](crate::events::gamestate::GameStateChangedEvent)
//! whose observer runs the enter hooks.

use bevy_ecs::prelude::Resource;
use serde::Serialize;

/// Discrete high-level states the game can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStates {
    #[default]
    Menu,
    Playing,
    Paused,
}

/// Authoritative current game state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    /// Create a new state initialized to [`GameStates::Menu`].
    pub fn new() -> Self {
        GameState {
            current: GameStates::Menu,
        }
    }
    /// Read-only access to the current state.
    pub fn get(&self) -> GameStates {
        self.current
    }
    /// Update the current state immediately, returning the previous one.
    pub fn set(&mut self, state: GameStates) -> GameStates {
        std::mem::replace(&mut self.current, state)
    }
}
