//! Focus grids of the main menu and the pause menu.
//!
//! Both grids are plain cursors with navigation methods that keep the index
//! in range by wrapping. Navigation returns a [`MenuOutcome`] /
//! [`PauseOutcome`] describing what the game state coordinator should do; the
//! grids themselves never touch game state.

use bevy_ecs::prelude::Resource;

use crate::components::kite::KiteColor;
use crate::events::input::InputAction;
use crate::resources::gameparams::{GameParams, Weather};

/// Number of weather buttons on the main menu.
pub const WEATHER_SLOTS: usize = 4;
/// Index of the "Start" button on the main menu.
pub const MENU_START_INDEX: usize = 4;

pub const PAUSE_WIND_INDEX: usize = 0;
pub const PAUSE_DIFFICULTY_INDEX: usize = 1;
pub const PAUSE_COLOR_INDEX: usize = 2;
pub const PAUSE_RESUME_INDEX: usize = 3;
pub const PAUSE_MENU_INDEX: usize = 4;
pub const PAUSE_SLOTS: usize = 5;

/// What a main menu action asks of the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    None,
    SetWeather(Weather),
    Start,
}

/// What a pause menu action asks of the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseOutcome {
    None,
    Resume,
    ExitToMenu,
}

/// Main menu cursor: weather buttons 0..=3 and Start at 4.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuFocus {
    index: usize,
    last_weather: usize,
}

impl Default for MenuFocus {
    fn default() -> Self {
        Self {
            index: MENU_START_INDEX,
            last_weather: 0,
        }
    }
}

impl MenuFocus {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn last_weather(&self) -> usize {
        self.last_weather
    }

    pub fn reset(&mut self) {
        self.index = MENU_START_INDEX;
    }

    pub fn navigate(&mut self, action: InputAction) -> MenuOutcome {
        let on_weather = self.index < WEATHER_SLOTS;
        match action {
            InputAction::Down if on_weather => self.index = MENU_START_INDEX,
            InputAction::Up if !on_weather => self.index = self.last_weather,
            InputAction::Right if on_weather => {
                self.index = (self.index + 1) % WEATHER_SLOTS;
                self.last_weather = self.index;
            }
            InputAction::Left if on_weather => {
                self.index = (self.index + WEATHER_SLOTS - 1) % WEATHER_SLOTS;
                self.last_weather = self.index;
            }
            InputAction::Select if on_weather => {
                return MenuOutcome::SetWeather(Weather::OPTIONS[self.index]);
            }
            InputAction::Select => return MenuOutcome::Start,
            _ => {}
        }
        MenuOutcome::None
    }
}

/// Pause menu cursor plus the color carousel cursor.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PauseFocus {
    index: usize,
    color_index: usize,
}

impl Default for PauseFocus {
    fn default() -> Self {
        Self {
            index: PAUSE_RESUME_INDEX,
            color_index: 0,
        }
    }
}

impl PauseFocus {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn color_index(&self) -> usize {
        self.color_index
    }

    /// Prepare the grid for a fresh pause: focus Resume and point the color
    /// carousel at the active kite color.
    pub fn open(&mut self, current_color: KiteColor) {
        self.index = PAUSE_RESUME_INDEX;
        self.color_index = current_color.palette_index();
    }

    pub fn navigate(&mut self, action: InputAction, params: &mut GameParams) -> PauseOutcome {
        let palette = KiteColor::PALETTE.len();
        match action {
            InputAction::Down => self.index = (self.index + 1) % PAUSE_SLOTS,
            InputAction::Up => self.index = (self.index + PAUSE_SLOTS - 1) % PAUSE_SLOTS,
            InputAction::Right | InputAction::Left => {
                let step = if action == InputAction::Right { 1 } else { -1 };
                match self.index {
                    PAUSE_WIND_INDEX => params.step_wind_speed(step),
                    PAUSE_DIFFICULTY_INDEX => params.step_difficulty(step),
                    PAUSE_COLOR_INDEX => {
                        self.color_index = if step > 0 {
                            (self.color_index + 1) % palette
                        } else {
                            (self.color_index + palette - 1) % palette
                        };
                    }
                    _ => {}
                }
            }
            InputAction::Select => match self.index {
                PAUSE_COLOR_INDEX => {
                    params.kite_color = KiteColor::from_palette_index(self.color_index);
                }
                PAUSE_RESUME_INDEX => return PauseOutcome::Resume,
                PAUSE_MENU_INDEX => return PauseOutcome::ExitToMenu,
                _ => {}
            },
            InputAction::PauseToggle => {}
        }
        PauseOutcome::None
    }
}
