//! Bridge between platform event listeners and the simulation tick.
//!
//! The platform layer (window/browser/OS callbacks) owns a [`PlatformSender`]
//! and pushes discrete [`PlatformEvent`]s whenever they happen, from any
//! thread. The ECS world owns the matching [`PlatformBridge`] resource, which
//! the input coordinator drains once per tick. Gamepad *state* is not sent
//! through the channel; it is polled from the [`Gamepads`] resource.
//!
//! [`Gamepads`]: crate::resources::input::Gamepads

use bevy_ecs::prelude::Resource;
use crossbeam_channel::{Receiver, Sender, TrySendError};
use log::warn;

/// Keys the core reacts to. Anything else is reported as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformEvent {
    /// A single key-down dispatch (platform auto-repeat included).
    KeyDown(Key),
    GamepadConnected(u32),
    GamepadDisconnected(u32),
}

/// Receiving end of the platform event channel.
#[derive(Resource)]
pub struct PlatformBridge {
    pub rx: Receiver<PlatformEvent>,
}

/// Sending end handed to the platform adapter.
#[derive(Clone)]
pub struct PlatformSender {
    tx: Sender<PlatformEvent>,
}

impl PlatformSender {
    /// Forward an event to the next tick. Dropped with a warning if the
    /// simulation is gone.
    pub fn send(&self, event: PlatformEvent) {
        match self.tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Disconnected(event)) => {
                warn!("Platform event {:?} dropped: simulation stopped", event);
            }
            Err(TrySendError::Full(event)) => {
                warn!("Platform event {:?} dropped: queue full", event);
            }
        }
    }

    pub fn key_down(&self, key: Key) {
        self.send(PlatformEvent::KeyDown(key));
    }

    pub fn gamepad_connected(&self, index: u32) {
        self.send(PlatformEvent::GamepadConnected(index));
    }

    pub fn gamepad_disconnected(&self, index: u32) {
        self.send(PlatformEvent::GamepadDisconnected(index));
    }
}

/// Create a connected sender/bridge pair.
pub fn platform_channel() -> (PlatformSender, PlatformBridge) {
    let (tx, rx) = crossbeam_channel::unbounded();
    (PlatformSender { tx }, PlatformBridge { rx })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_arrive_in_order() {
        let (sender, bridge) = platform_channel();
        sender.gamepad_connected(1);
        sender.key_down(Key::Escape);
        let events: Vec<PlatformEvent> = bridge.rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                PlatformEvent::GamepadConnected(1),
                PlatformEvent::KeyDown(Key::Escape)
            ]
        );
    }

    #[test]
    fn test_send_after_bridge_dropped_does_not_panic() {
        let (sender, bridge) = platform_channel();
        drop(bridge);
        sender.key_down(Key::Escape);
    }
}
