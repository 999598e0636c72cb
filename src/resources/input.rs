//! Per-frame input resources.
//!
//! - [`GamepadSnapshot`] / [`Gamepads`] – the raw state of every connected
//!   gamepad, refreshed by the platform layer before each tick.
//! - [`GamepadTracker`] – which gamepad index the coordinator listens to.
//! - [`InputEdgeState`] – previous-frame flags used to turn held buttons and
//!   deflected sticks into single edge-triggered actions.
//! - [`SteeringIntent`] – the player's pull/kick intent for the player kite.
//!
//! Axis values and button indices follow the standard gamepad mapping: axis 0
//! is the left stick X (right positive), axis 1 the left stick Y (down
//! positive); buttons 0/2 are A/X, 9 is Start and 12–15 the D-pad.
use arrayvec::ArrayVec;
use bevy_ecs::prelude::*;
use glam::Vec2;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::events::input::InputAction;

/// Analog stick magnitude below which a deflection is ignored.
pub const DEADZONE: f32 = 0.5;

pub const AXIS_LEFT_X: usize = 0;
pub const AXIS_LEFT_Y: usize = 1;
pub const BUTTON_A: usize = 0;
pub const BUTTON_X: usize = 2;
pub const BUTTON_START: usize = 9;
pub const BUTTON_DPAD_UP: usize = 12;
pub const BUTTON_DPAD_DOWN: usize = 13;
pub const BUTTON_DPAD_LEFT: usize = 14;
pub const BUTTON_DPAD_RIGHT: usize = 15;

pub const MAX_AXES: usize = 8;
pub const MAX_BUTTONS: usize = 24;

/// Raw state of one gamepad for one frame.
///
/// Axes or buttons the device does not report read as `0.0` / unpressed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GamepadSnapshot {
    pub axes: ArrayVec<f32, MAX_AXES>,
    pub buttons: ArrayVec<bool, MAX_BUTTONS>,
}

impl GamepadSnapshot {
    /// Build a snapshot, ignoring axes/buttons beyond the supported count.
    pub fn from_slices(axes: &[f32], buttons: &[bool]) -> Self {
        Self {
            axes: axes.iter().copied().take(MAX_AXES).collect(),
            buttons: buttons.iter().copied().take(MAX_BUTTONS).collect(),
        }
    }

    pub fn axis(&self, index: usize) -> f32 {
        match self.axes.get(index) {
            Some(value) if value.is_finite() => *value,
            _ => 0.0,
        }
    }

    pub fn pressed(&self, index: usize) -> bool {
        self.buttons.get(index).copied().unwrap_or(false)
    }

    pub fn set_axis(&mut self, index: usize, value: f32) {
        if index >= MAX_AXES {
            return;
        }
        while self.axes.len() <= index {
            self.axes.push(0.0);
        }
        self.axes[index] = value;
    }

    pub fn set_button(&mut self, index: usize, pressed: bool) {
        if index >= MAX_BUTTONS {
            return;
        }
        while self.buttons.len() <= index {
            self.buttons.push(false);
        }
        self.buttons[index] = pressed;
    }
}

/// Latest snapshot of every connected gamepad, keyed by platform index.
#[derive(Resource, Debug, Clone, Default)]
pub struct Gamepads {
    pub pads: FxHashMap<u32, GamepadSnapshot>,
}

impl Gamepads {
    pub fn get(&self, index: u32) -> Option<&GamepadSnapshot> {
        self.pads.get(&index)
    }

    pub fn set(&mut self, index: u32, snapshot: GamepadSnapshot) {
        self.pads.insert(index, snapshot);
    }

    pub fn remove(&mut self, index: u32) {
        self.pads.remove(&index);
    }
}

/// Index of the gamepad the coordinator follows.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GamepadTracker {
    pub index: Option<u32>,
}

impl GamepadTracker {
    /// Track `index` if nothing is tracked yet. Returns true if it was taken.
    pub fn connect(&mut self, index: u32) -> bool {
        if self.index.is_none() {
            self.index = Some(index);
            return true;
        }
        false
    }

    /// Stop tracking `index` if it is the tracked pad. Returns true if cleared.
    pub fn disconnect(&mut self, index: u32) -> bool {
        if self.index == Some(index) {
            self.index = None;
            return true;
        }
        false
    }
}

/// Per-axis pair of previous-frame flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxisPair {
    pub x: bool,
    pub y: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AxisEdge {
    Positive,
    Negative,
}

/// Edge detection for one axis pair fed by a stick axis and two D-pad
/// buttons. The stick and the D-pad are edge-triggered independently; the
/// positive direction wins when both directions fire in the same frame.
/// Both flags are updated every call.
fn axis_edge(
    value: f32,
    positive_button: bool,
    negative_button: bool,
    dpad_prev: &mut bool,
    axis_prev: &mut bool,
) -> Option<AxisEdge> {
    let edge = if (positive_button && !*dpad_prev) || (value > DEADZONE && !*axis_prev) {
        Some(AxisEdge::Positive)
    } else if (negative_button && !*dpad_prev) || (value < -DEADZONE && !*axis_prev) {
        Some(AxisEdge::Negative)
    } else {
        None
    };
    *dpad_prev = positive_button || negative_button;
    *axis_prev = value.abs() > DEADZONE;
    edge
}

/// Previous-frame state owned by the input coordinator.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputEdgeState {
    pub axis_moved: AxisPair,
    pub dpad_pressed: AxisPair,
    pub select_was_pressed: bool,
    pub pause_was_pressed: bool,
}

impl InputEdgeState {
    /// Forget every held input, e.g. when the tracked pad goes away.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Extract this frame's edge-triggered actions from a gamepad snapshot.
    ///
    /// Order: `PauseToggle`, vertical, horizontal, `Select`.
    pub fn poll(&mut self, pad: &GamepadSnapshot) -> SmallVec<[InputAction; 4]> {
        let mut actions = SmallVec::new();

        let start = pad.pressed(BUTTON_START);
        if start && !self.pause_was_pressed {
            actions.push(InputAction::PauseToggle);
        }
        self.pause_was_pressed = start;

        match axis_edge(
            pad.axis(AXIS_LEFT_Y),
            pad.pressed(BUTTON_DPAD_DOWN),
            pad.pressed(BUTTON_DPAD_UP),
            &mut self.dpad_pressed.y,
            &mut self.axis_moved.y,
        ) {
            Some(AxisEdge::Positive) => actions.push(InputAction::Down),
            Some(AxisEdge::Negative) => actions.push(InputAction::Up),
            None => {}
        }

        match axis_edge(
            pad.axis(AXIS_LEFT_X),
            pad.pressed(BUTTON_DPAD_RIGHT),
            pad.pressed(BUTTON_DPAD_LEFT),
            &mut self.dpad_pressed.x,
            &mut self.axis_moved.x,
        ) {
            Some(AxisEdge::Positive) => actions.push(InputAction::Right),
            Some(AxisEdge::Negative) => actions.push(InputAction::Left),
            None => {}
        }

        let select = pad.pressed(BUTTON_A) || pad.pressed(BUTTON_X);
        if select && !self.select_was_pressed {
            actions.push(InputAction::Select);
        }
        self.select_was_pressed = select;

        actions
    }
}

/// Player steering intent, supplied by the presentation layer each tick.
///
/// `pull` is a direction of at most unit length; `kick` requests a kick.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct SteeringIntent {
    pub pull: Vec2,
    pub kick: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pad_with_axis_y(value: f32) -> GamepadSnapshot {
        GamepadSnapshot::from_slices(&[0.0, value], &[])
    }

    #[test]
    fn test_missing_axes_and_buttons_read_as_neutral() {
        let pad = GamepadSnapshot::default();
        assert_eq!(pad.axis(AXIS_LEFT_Y), 0.0);
        assert!(!pad.pressed(BUTTON_START));
        let nan = GamepadSnapshot::from_slices(&[f32::NAN], &[]);
        assert_eq!(nan.axis(AXIS_LEFT_X), 0.0);
    }

    #[test]
    fn test_held_stick_fires_once() {
        let mut edges = InputEdgeState::default();
        let pad = pad_with_axis_y(0.9);
        let fired: usize = (0..10).map(|_| edges.poll(&pad).len()).sum();
        assert_eq!(fired, 1);
        assert!(edges.axis_moved.y);
    }

    #[test]
    fn test_stick_rearms_after_returning_inside_deadzone() {
        let mut edges = InputEdgeState::default();
        assert_eq!(edges.poll(&pad_with_axis_y(0.8)).as_slice(), &[InputAction::Down]);
        assert!(edges.poll(&pad_with_axis_y(0.4)).is_empty());
        assert_eq!(edges.poll(&pad_with_axis_y(-0.8)).as_slice(), &[InputAction::Up]);
    }

    #[test]
    fn test_stick_exactly_at_deadzone_is_ignored() {
        let mut edges = InputEdgeState::default();
        assert!(edges.poll(&pad_with_axis_y(DEADZONE)).is_empty());
    }

    #[test]
    fn test_dpad_and_stick_edges_are_independent() {
        let mut edges = InputEdgeState::default();
        let mut pad = pad_with_axis_y(0.9);
        assert_eq!(edges.poll(&pad).as_slice(), &[InputAction::Down]);
        // Stick still held, D-pad newly pressed: the D-pad edge fires.
        pad.set_button(BUTTON_DPAD_DOWN, true);
        assert_eq!(edges.poll(&pad).as_slice(), &[InputAction::Down]);
        assert!(edges.poll(&pad).is_empty());
    }

    #[test]
    fn test_select_uses_single_flag_for_a_and_x() {
        let mut edges = InputEdgeState::default();
        let mut pad = GamepadSnapshot::default();
        pad.set_button(BUTTON_A, true);
        assert_eq!(edges.poll(&pad).as_slice(), &[InputAction::Select]);
        pad.set_button(BUTTON_X, true);
        pad.set_button(BUTTON_A, false);
        assert!(edges.poll(&pad).is_empty());
    }

    #[test]
    fn test_poll_order_and_horizontal_priority() {
        let mut edges = InputEdgeState::default();
        let mut pad = GamepadSnapshot::from_slices(&[0.0, 0.0], &[]);
        pad.set_button(BUTTON_START, true);
        pad.set_button(BUTTON_DPAD_LEFT, true);
        pad.set_button(BUTTON_DPAD_RIGHT, true);
        pad.set_button(BUTTON_DPAD_UP, true);
        pad.set_button(BUTTON_A, true);
        assert_eq!(
            edges.poll(&pad).as_slice(),
            &[
                InputAction::PauseToggle,
                InputAction::Up,
                InputAction::Right,
                InputAction::Select
            ]
        );
    }

    #[test]
    fn test_tracker_keeps_first_pad() {
        let mut tracker = GamepadTracker::default();
        assert!(tracker.connect(2));
        assert!(!tracker.connect(0));
        assert!(!tracker.disconnect(0));
        assert_eq!(tracker.index, Some(2));
        assert!(tracker.disconnect(2));
        assert!(tracker.connect(0));
    }
}
