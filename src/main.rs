//! Kite flight headless runner.
//!
//! Builds the simulation, drives it with a scripted player and logs how the
//! game goes. Useful to exercise the whole tick without a display:
//!
//! 1. Load `config.ini` (defaults if missing) and apply CLI overrides
//! 2. Connect a virtual gamepad and press Start on the main menu
//! 3. Steer the player kite with a slow sinusoidal pull, kicking now and then
//! 4. Pause with the gamepad halfway through and resume with Escape
//! 5. Log the score periodically, optionally dumping JSON snapshots
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run --release -- --frames 1800 --weather stormy
//! ```

use clap::Parser;
use glam::Vec2;
use log::{error, info};
use std::path::PathBuf;

use kiteflight::frameloop::{FrameLoop, InputDriver};
use kiteflight::game::Game;
use kiteflight::resources::gameconfig::GameConfig;
use kiteflight::resources::gameparams::Weather;
use kiteflight::resources::input::{
    BUTTON_A, BUTTON_START, GamepadSnapshot, SteeringIntent,
};
use kiteflight::resources::platform::Key;

/// Kite flight simulation, headless.
#[derive(Parser)]
#[command(version, about = "Headless kite flight simulation runner")]
struct Cli {
    /// Configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 3600)]
    frames: u64,

    /// Override the random seed from the configuration.
    #[arg(long)]
    seed: Option<u64>,

    /// Starting weather: sunny, sunset, stormy or night.
    #[arg(long, value_parser = parse_weather)]
    weather: Option<Weather>,

    /// Starting difficulty in [0, 1].
    #[arg(long)]
    difficulty: Option<f32>,

    /// Print one JSON snapshot every N frames.
    #[arg(long, value_name = "N")]
    dump_every: Option<u64>,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    save_config: bool,
}

fn parse_weather(name: &str) -> Result<Weather, String> {
    Weather::parse(name).ok_or_else(|| format!("unknown weather '{}'", name))
}

const PAD: u32 = 0;
/// Frame on which the scripted player presses Start on the main menu.
const START_FRAME: u64 = 2;

/// Scripted player: starts the game, steers, kicks, pauses and resumes.
struct ScriptedPlayer {
    pause_at: u64,
}

impl ScriptedPlayer {
    /// Pause halfway through a run of `frames`, never before the game started.
    fn new(frames: u64) -> Self {
        ScriptedPlayer {
            pause_at: (frames / 2).max(START_FRAME + 1),
        }
    }

    fn pad_with(buttons: &[usize]) -> GamepadSnapshot {
        let mut pad = GamepadSnapshot::from_slices(&[0.0, 0.0], &[]);
        for button in buttons {
            pad.set_button(*button, true);
        }
        pad
    }
}

impl InputDriver for ScriptedPlayer {
    fn before_tick(&mut self, frame: u64, game: &mut Game) {
        if frame == 0 {
            game.platform().gamepad_connected(PAD);
        }
        let pad = match frame {
            START_FRAME => Self::pad_with(&[BUTTON_A]),
            f if f == self.pause_at => Self::pad_with(&[BUTTON_START]),
            _ => Self::pad_with(&[]),
        };
        game.set_gamepad(PAD, pad);
        if frame == self.pause_at + 30 {
            game.platform().key_down(Key::Escape);
        }

        let t = frame as f32 / 60.0;
        game.set_steering(SteeringIntent {
            pull: Vec2::new((t * 0.7).sin(), (t * 0.5).cos() * 0.6 - 0.4),
            kick: frame % 120 == 60,
        });
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        info!("{}; using defaults", e);
    }
    if let Some(seed) = cli.seed {
        config.frame_loop.seed = seed;
    }

    if cli.save_config {
        match config.save_to_file() {
            Ok(()) => println!("Configuration written to {}", cli.config.display()),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let mut frame_loop = FrameLoop::new(&config.frame_loop).with_max_frames(Some(cli.frames));
    let mut game = match Game::new(config) {
        Ok(game) => game,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    {
        let mut params = game.params_mut();
        if let Some(weather) = cli.weather {
            params.weather = weather;
        }
        if let Some(difficulty) = cli.difficulty {
            params.set_difficulty(difficulty);
        }
    }

    let mut player = ScriptedPlayer::new(cli.frames);
    let dump_every = cli.dump_every.filter(|n| *n > 0);
    let frames = frame_loop.run(&mut game, &mut player, |frame, game| {
        if frame % 600 == 0 {
            info!(
                "frame {}: {:?}, score {}",
                frame,
                game.state(),
                game.params().score()
            );
        }
        if dump_every.is_some_and(|n| frame % n == 0) {
            match game.snapshot().to_json() {
                Ok(json) => println!("{json}"),
                Err(e) => error!("{}", e),
            }
        }
    });

    info!(
        "Simulated {} frames, final score {}",
        frames,
        game.params().score()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiteflight::resources::gamestate::GameStates;

    #[test]
    fn test_short_run_still_starts_then_pauses() {
        let mut player = ScriptedPlayer::new(4);
        assert_eq!(player.pause_at, START_FRAME + 1);
        let mut game = Game::new(GameConfig::default()).expect("game");
        for frame in 0..=START_FRAME {
            player.before_tick(frame, &mut game);
            game.tick(1.0 / 60.0);
        }
        assert_eq!(game.state(), GameStates::Playing);
        player.before_tick(player.pause_at, &mut game);
        game.tick(1.0 / 60.0);
        assert_eq!(game.state(), GameStates::Paused);
    }

    #[test]
    fn test_long_run_pauses_halfway() {
        assert_eq!(ScriptedPlayer::new(3600).pause_at, 1800);
    }
}
