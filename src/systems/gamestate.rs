//! Game state coordinator.
//!
//! Consumes the tick's [`InputEvent`] messages in order and applies them to
//! the menu grid, the pause grid, the game parameters and the game state.
//! Each transition updates [`GameState`] at once and triggers a
//! [`GameStateChangedEvent`] so the enter hooks run before the
//! simulation systems of the same tick.
use bevy_ecs::prelude::*;
use log::info;

use crate::events::gamestate::GameStateChangedEvent;
use crate::events::input::{InputAction, InputEvent};
use crate::resources::focus::{MenuFocus, MenuOutcome, PauseFocus, PauseOutcome};
use crate::resources::gameparams::GameParams;
use crate::resources::gamestate::{GameState, GameStates};

pub fn state_is_playing(state: Res<GameState>) -> bool {
    matches!(state.get(), GameStates::Playing)
}

fn transition(state: &mut GameState, to: GameStates, commands: &mut Commands) {
    let from = state.set(to);
    commands.trigger(GameStateChangedEvent { from, to });
}

pub fn game_state_coordinator(
    mut reader: MessageReader<InputEvent>,
    mut state: ResMut<GameState>,
    mut params: ResMut<GameParams>,
    mut menu: ResMut<MenuFocus>,
    mut pause: ResMut<PauseFocus>,
    mut commands: Commands,
) {
    for event in reader.read() {
        let action = event.action;
        match state.get() {
            GameStates::Menu => match menu.navigate(action) {
                MenuOutcome::SetWeather(weather) => {
                    info!("Weather set to {:?}", weather);
                    params.weather = weather;
                }
                MenuOutcome::Start => {
                    params.reset_score();
                    transition(&mut state, GameStates::Playing, &mut commands);
                }
                MenuOutcome::None => {}
            },
            GameStates::Playing => {
                if action == InputAction::PauseToggle {
                    pause.open(params.kite_color);
                    transition(&mut state, GameStates::Paused, &mut commands);
                }
            }
            GameStates::Paused => {
                if action == InputAction::PauseToggle {
                    transition(&mut state, GameStates::Playing, &mut commands);
                    continue;
                }
                match pause.navigate(action, &mut params) {
                    PauseOutcome::Resume => {
                        transition(&mut state, GameStates::Playing, &mut commands);
                    }
                    PauseOutcome::ExitToMenu => {
                        menu.reset();
                        transition(&mut state, GameStates::Menu, &mut commands);
                    }
                    PauseOutcome::None => {}
                }
            }
        }
    }
}
