//! Input coordinator systems.
//!
//! Runs every frame regardless of the game state:
//! 1. [`update_input_messages`] advances the `Messages<InputEvent>` buffers.
//! 2. [`poll_input`] drains the platform bridge (keyboard key-downs and
//!    gamepad connection changes) and polls the tracked gamepad, writing one
//!    [`InputEvent`] per edge-triggered action.
//!
//! Keyboard actions come first, in arrival order, followed by the gamepad
//! actions in [`InputEdgeState::poll`] order.
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::events::input::{InputAction, InputEvent, InputSource};
use crate::resources::input::{GamepadTracker, Gamepads, InputEdgeState};
use crate::resources::platform::{Key, PlatformBridge, PlatformEvent};

/// Advance the input message double buffer. Must run before [`poll_input`].
pub fn update_input_messages(mut messages: ResMut<Messages<InputEvent>>) {
    messages.update();
}

pub fn poll_input(
    bridge: Option<Res<PlatformBridge>>,
    mut tracker: ResMut<GamepadTracker>,
    mut edges: ResMut<InputEdgeState>,
    mut gamepads: ResMut<Gamepads>,
    mut writer: MessageWriter<InputEvent>,
) {
    if let Some(bridge) = bridge {
        for event in bridge.rx.try_iter() {
            match event {
                PlatformEvent::KeyDown(Key::Escape) => {
                    writer.write(InputEvent {
                        action: InputAction::PauseToggle,
                        source: InputSource::Keyboard,
                    });
                }
                PlatformEvent::KeyDown(Key::Other) => {}
                PlatformEvent::GamepadConnected(index) => {
                    if tracker.connect(index) {
                        info!("Gamepad {} connected and tracked", index);
                    } else {
                        debug!("Gamepad {} connected, already tracking another", index);
                    }
                }
                PlatformEvent::GamepadDisconnected(index) => {
                    gamepads.remove(index);
                    if tracker.disconnect(index) {
                        edges.reset();
                        info!("Tracked gamepad {} disconnected", index);
                    }
                }
            }
        }
    }

    let Some(index) = tracker.index else {
        return;
    };
    let Some(pad) = gamepads.get(index) else {
        return;
    };
    for action in edges.poll(pad) {
        debug!("Gamepad {} action {:?}", index, action);
        writer.write(InputEvent {
            action,
            source: InputSource::Gamepad(index),
        });
    }
}
