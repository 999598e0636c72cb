//! Input action messages.
//!
//! This module defines [`InputEvent`], written by the input coordinator once
//! per edge-triggered action, and the [`InputAction`] vocabulary shared by the
//! keyboard and the gamepad.
//!
//! The game state coordinator reads these messages in order within the same
//! tick, so a frame that produces `PauseToggle` then `Select` applies them
//! sequentially.

use bevy_ecs::message::Message;

/// Enumeration of logical input actions.
///
/// These abstract the physical keys, sticks and buttons into navigation
/// actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    Up,
    Down,
    Left,
    Right,
    /// Confirm the focused item (gamepad A or X).
    Select,
    /// Pause or resume (Escape key, gamepad Start).
    PauseToggle,
}

/// Physical source an action came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard,
    Gamepad(u32),
}

/// Message emitted when an input action fires.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    /// The input action that fired.
    pub action: InputAction,
    /// Where it came from.
    pub source: InputSource,
}
