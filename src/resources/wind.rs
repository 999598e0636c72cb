//! Wind field resource.
//!
//! The wind is a single world-wide force vector recomputed every tick from
//! the wind speed and the weather. Its only persistent state is a phase
//! accumulator advanced by the tick's `dt`, so gusting depends on simulated
//! time and not on how many frames were rendered.

use bevy_ecs::prelude::Resource;
use glam::Vec2;
use std::f32::consts::TAU;

use crate::resources::gameparams::Weather;

/// Gust shape of a weather mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindProfile {
    /// Relative strength of the along-wind gust oscillation.
    pub gust_amplitude: f32,
    /// Gust cycles per second.
    pub gust_frequency: f32,
    /// Relative strength of the vertical buffeting.
    pub lateral_amplitude: f32,
}

impl WindProfile {
    pub fn for_weather(weather: Weather) -> Self {
        match weather {
            Weather::Sunny => WindProfile {
                gust_amplitude: 0.15,
                gust_frequency: 0.3,
                lateral_amplitude: 0.05,
            },
            Weather::Sunset => WindProfile {
                gust_amplitude: 0.25,
                gust_frequency: 0.4,
                lateral_amplitude: 0.08,
            },
            Weather::Night => WindProfile {
                gust_amplitude: 0.2,
                gust_frequency: 0.25,
                lateral_amplitude: 0.06,
            },
            Weather::Stormy => WindProfile {
                gust_amplitude: 0.9,
                gust_frequency: 1.2,
                lateral_amplitude: 0.45,
            },
        }
    }
}

#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct WindField {
    /// Gust phase in radians, kept in [0, TAU).
    pub phase: f32,
    /// Force produced by the last [`WindField::advance`].
    pub force: Vec2,
}

impl WindField {
    /// Advance the phase by `dt` and return the new wind force.
    ///
    /// `strength` is the acceleration produced by wind speed 1.0 with no gust.
    pub fn advance(&mut self, dt: f32, wind_speed: f32, weather: Weather, strength: f32) -> Vec2 {
        let profile = WindProfile::for_weather(weather);
        if dt.is_finite() && dt > 0.0 {
            self.phase = (self.phase + dt * profile.gust_frequency * TAU).rem_euclid(TAU);
        }
        let p = self.phase;
        let base = wind_speed.max(0.0) * strength;
        let gust = profile.gust_amplitude * (p.sin() + 0.5 * (2.7 * p + 1.3).sin());
        let buffet = profile.lateral_amplitude * (1.7 * p).cos();
        self.force = Vec2::new(base * (1.0 + gust), base * buffet);
        self.force
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variance_of(weather: Weather, field: &mut WindField) -> f32 {
        let samples: Vec<f32> = (0..600)
            .map(|_| field.advance(1.0 / 60.0, 1.0, weather, 80.0).x)
            .collect();
        let mean = samples.iter().sum::<f32>() / samples.len() as f32;
        samples.iter().map(|x| (x - mean).powi(2)).sum::<f32>() / samples.len() as f32
    }

    #[test]
    fn test_stormy_is_much_gustier_than_sunny() {
        let sunny = variance_of(Weather::Sunny, &mut WindField::default());
        let stormy = variance_of(Weather::Stormy, &mut WindField::default());
        assert!(stormy > sunny * 10.0, "stormy {stormy} sunny {sunny}");
    }

    #[test]
    fn test_switching_back_to_sunny_restores_profile() {
        let mut field = WindField::default();
        let baseline = variance_of(Weather::Sunny, &mut WindField::default());
        let _ = variance_of(Weather::Stormy, &mut field);
        let after = variance_of(Weather::Sunny, &mut field);
        assert!((after - baseline).abs() < baseline * 0.25);
    }

    #[test]
    fn test_zero_wind_speed_is_calm() {
        let mut field = WindField::default();
        for _ in 0..100 {
            assert_eq!(field.advance(0.016, 0.0, Weather::Stormy, 80.0), Vec2::ZERO);
        }
    }

    #[test]
    fn test_phase_only_moves_with_time() {
        let mut field = WindField::default();
        field.advance(0.0, 1.0, Weather::Sunny, 80.0);
        assert_eq!(field.phase, 0.0);
        field.advance(0.5, 1.0, Weather::Sunny, 80.0);
        assert!(field.phase > 0.0 && field.phase < TAU);
    }
}
