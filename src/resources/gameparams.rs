//! Player-adjustable game parameters and the score.
//!
//! All mutation goes through methods that clamp at the point of change, so
//! the stored values are always inside their documented ranges.

use bevy_ecs::prelude::Resource;
use serde::Serialize;

use crate::components::kite::KiteColor;

pub const WIND_SPEED_MAX: f32 = 2.0;
pub const DIFFICULTY_MAX: f32 = 1.0;
/// Step applied by one Left/Right press on the pause grid sliders.
pub const PARAM_STEP: f32 = 0.1;

/// Sky condition; drives the wind gust profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    #[default]
    Sunny,
    Sunset,
    Stormy,
    Night,
}

impl Weather {
    /// Order of the weather buttons on the main menu.
    pub const OPTIONS: [Weather; 4] = [
        Weather::Sunny,
        Weather::Sunset,
        Weather::Stormy,
        Weather::Night,
    ];

    pub fn parse(name: &str) -> Option<Weather> {
        match name.to_ascii_lowercase().as_str() {
            "sunny" => Some(Weather::Sunny),
            "sunset" => Some(Weather::Sunset),
            "stormy" => Some(Weather::Stormy),
            "night" => Some(Weather::Night),
            _ => None,
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize)]
pub struct GameParams {
    wind_speed: f32,
    difficulty: f32,
    pub kite_color: KiteColor,
    pub weather: Weather,
    pub muted: bool,
    score: u32,
}

impl Default for GameParams {
    fn default() -> Self {
        Self {
            wind_speed: 0.5,
            difficulty: 0.5,
            kite_color: KiteColor::Crimson,
            weather: Weather::Sunny,
            muted: false,
            score: 0,
        }
    }
}

/// Round to one decimal so repeated 0.1 steps land on exact slider values.
fn step_value(value: f32, delta: f32, max: f32) -> f32 {
    (((value + delta) * 10.0).round() / 10.0).clamp(0.0, max)
}

impl GameParams {
    pub fn wind_speed(&self) -> f32 {
        self.wind_speed
    }

    pub fn difficulty(&self) -> f32 {
        self.difficulty
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn set_wind_speed(&mut self, value: f32) {
        self.wind_speed = if value.is_finite() {
            value.clamp(0.0, WIND_SPEED_MAX)
        } else {
            0.0
        };
    }

    pub fn set_difficulty(&mut self, value: f32) {
        self.difficulty = if value.is_finite() {
            value.clamp(0.0, DIFFICULTY_MAX)
        } else {
            0.0
        };
    }

    /// Step wind speed by `steps * 0.1`, clamped to [0, 2].
    pub fn step_wind_speed(&mut self, steps: i32) {
        self.wind_speed = step_value(self.wind_speed, steps as f32 * PARAM_STEP, WIND_SPEED_MAX);
    }

    /// Step difficulty by `steps * 0.1`, clamped to [0, 1].
    pub fn step_difficulty(&mut self, steps: i32) {
        self.difficulty = step_value(self.difficulty, steps as f32 * PARAM_STEP, DIFFICULTY_MAX);
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    pub fn reset_score(&mut self) {
        self.score = 0;
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wind_speed_steps_are_clamped() {
        let mut params = GameParams::default();
        for _ in 0..40 {
            params.step_wind_speed(1);
            assert!(params.wind_speed() <= WIND_SPEED_MAX);
        }
        assert_eq!(params.wind_speed(), 2.0);
        for _ in 0..40 {
            params.step_wind_speed(-1);
            assert!(params.wind_speed() >= 0.0);
        }
        assert_eq!(params.wind_speed(), 0.0);
    }

    #[test]
    fn test_difficulty_steps_land_on_tenths() {
        let mut params = GameParams::default();
        params.step_difficulty(1);
        params.step_difficulty(1);
        assert_eq!(params.difficulty(), 0.7);
        for _ in 0..10 {
            params.step_difficulty(1);
        }
        assert_eq!(params.difficulty(), 1.0);
    }

    #[test]
    fn test_direct_setters_clamp_and_reject_nan() {
        let mut params = GameParams::default();
        params.set_wind_speed(-3.0);
        assert_eq!(params.wind_speed(), 0.0);
        params.set_difficulty(f32::NAN);
        assert_eq!(params.difficulty(), 0.0);
        params.set_difficulty(4.0);
        assert_eq!(params.difficulty(), 1.0);
    }

    #[test]
    fn test_score_reset_and_saturation() {
        let mut params = GameParams::default();
        params.add_score(u32::MAX);
        params.add_score(5);
        assert_eq!(params.score(), u32::MAX);
        params.reset_score();
        assert_eq!(params.score(), 0);
    }

    #[test]
    fn test_toggle_mute_flips_and_reports() {
        let mut params = GameParams::default();
        assert!(!params.muted);
        assert!(params.toggle_mute());
        assert!(params.muted);
        assert!(!params.toggle_mute());
        assert!(!params.muted);
    }

    #[test]
    fn test_weather_parse() {
        assert_eq!(Weather::parse("Stormy"), Some(Weather::Stormy));
        assert_eq!(Weather::parse("foggy"), None);
    }
}
