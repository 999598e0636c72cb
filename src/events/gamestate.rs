//! Game state transition event and observer.
//!
//! The game state coordinator updates [`GameState`] immediately and then
//! triggers a [`GameStateChangedEvent`] describing the transition. The
//! observer in this module runs the exit/enter hooks for it, looking the
//! hook systems up in [`SystemsStore`] under well-known keys.
//!
//! Hooks are queued through [`Commands`], so they are applied before the
//! simulation systems of the same tick run.
//!
//! [`GameState`]: crate::resources::gamestate::GameState
use crate::events::fullscreen::FullscreenRequestEvent;
use crate::resources::gamestate::GameStates;
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Name of the system that prepares a fresh game.
pub const ENTER_PLAY_HOOK: &str = "enter_play";
/// Name of the system that removes every kite.
pub const CLEAR_KITES_HOOK: &str = "clear_kites";

/// A transition that has just been applied to the game state.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameStateChangedEvent {
    pub from: GameStates,
    pub to: GameStates,
}

/// Observer that runs the enter hooks of a state transition.
///
/// - `menu -> playing`: requests fullscreen and runs `"enter_play"`.
/// - `paused -> menu`: runs `"clear_kites"`.
/// - Pausing and resuming have no hooks; the world is left untouched.
///
/// A missing hook is logged and skipped.
pub fn observe_gamestate_change_event(
    trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    systems_store: Option<Res<SystemsStore>>,
) {
    let GameStateChangedEvent { from, to } = *trigger.event();
    info!("Transitioning from {:?} to {:?}", from, to);
    debug!("Exited {:?} state", from);

    let Some(systems_store) = systems_store else {
        warn!("SystemsStore missing; skipping state hooks for {:?} -> {:?}", from, to);
        return;
    };
    on_state_enter(from, to, &mut commands, &systems_store);
}

fn run_hook(name: &str, commands: &mut Commands, systems_store: &SystemsStore) {
    match systems_store.get(name) {
        Some(id) => commands.run_system(id),
        None => warn!("{} system not found in SystemsStore", name),
    }
}

/// Internal: run state-specific "enter" hooks.
fn on_state_enter(
    from: GameStates,
    to: GameStates,
    commands: &mut Commands,
    systems_store: &SystemsStore,
) {
    match (from, to) {
        (GameStates::Menu, GameStates::Playing) => {
            commands.trigger(FullscreenRequestEvent {});
            run_hook(ENTER_PLAY_HOOK, commands, systems_store);
        }
        (GameStates::Paused, GameStates::Menu) => {
            run_hook(CLEAR_KITES_HOOK, commands, systems_store);
        }
        (_, state) => debug!("Entered {:?} state", state),
    }
}
