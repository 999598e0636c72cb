//! Game configuration resource.
//!
//! Holds every tuning constant of the simulation, loaded from an INI
//! configuration file. Provides defaults for safe startup and methods to
//! load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [loop]
//! target_fps = 60
//! realtime = false
//! seed = 7
//!
//! [playfield]
//! width = 1280
//! height = 720
//! margin = 120
//!
//! [physics]
//! gravity = 60
//! wind_strength = 80
//! lift_coefficient = 0.6
//! drag_coefficient = 0.8
//! pull_strength = 220
//! max_speed = 320
//! tail_length = 24
//!
//! [ai]
//! aggression_radius_base = 220
//! aggression_radius_scale = 260
//! kick_range = 45
//! kick_cooldown_frames = 90
//! flee_frames = 120
//! reevaluate_frames = 30
//! lose_target_frames = 180
//! personal_space = 140
//! roam_reach = 30
//! closing_speed = 120
//!
//! [spawn]
//! min_kites = 2
//! max_kites = 8
//! spawn_interval_frames = 90
//! spawn_timer_frames = 60
//! cut_grace_frames = 90
//!
//! [collision]
//! cut_radius = 14
//! kick_reach = 1.8
//! tail_head_skip = 3
//! points_per_cut = 10
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Frame loop settings.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopTuning {
    pub target_fps: u32,
    /// Sleep between frames to match `target_fps`; headless runs go flat out.
    pub realtime: bool,
    pub seed: u64,
}

impl Default for LoopTuning {
    fn default() -> Self {
        Self {
            target_fps: 60,
            realtime: false,
            seed: 7,
        }
    }
}

impl LoopTuning {
    /// Fixed simulation step in seconds.
    pub fn frame_seconds(&self) -> f32 {
        1.0 / self.target_fps.max(1) as f32
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayfieldTuning {
    pub width: f32,
    pub height: f32,
    /// Distance outside the field an NPC may drift before it is removed.
    pub margin: f32,
}

impl Default for PlayfieldTuning {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            margin: 120.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsTuning {
    pub gravity: f32,
    /// Wind acceleration at wind speed 1.0.
    pub wind_strength: f32,
    pub lift_coefficient: f32,
    pub drag_coefficient: f32,
    pub pull_strength: f32,
    pub max_speed: f32,
    pub tail_length: usize,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            gravity: 60.0,
            wind_strength: 80.0,
            lift_coefficient: 0.6,
            drag_coefficient: 0.8,
            pull_strength: 220.0,
            max_speed: 320.0,
            tail_length: 24,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AiTuning {
    pub aggression_radius_base: f32,
    /// Extra aggression radius at difficulty 1.0.
    pub aggression_radius_scale: f32,
    pub kick_range: f32,
    pub kick_cooldown_frames: u32,
    pub flee_frames: u32,
    pub reevaluate_frames: u32,
    /// Frames a target may stay out of range at difficulty 0.0 (doubles at 1.0).
    pub lose_target_frames: u32,
    /// Radius inside which a peaceful kite feels threatened.
    pub personal_space: f32,
    /// Distance at which a roam target counts as reached.
    pub roam_reach: f32,
    /// Closing speed toward a clever kite that it reads as an incoming cut.
    pub closing_speed: f32,
}

impl Default for AiTuning {
    fn default() -> Self {
        Self {
            aggression_radius_base: 220.0,
            aggression_radius_scale: 260.0,
            kick_range: 45.0,
            kick_cooldown_frames: 90,
            flee_frames: 120,
            reevaluate_frames: 30,
            lose_target_frames: 180,
            personal_space: 140.0,
            roam_reach: 30.0,
            closing_speed: 120.0,
        }
    }
}

impl AiTuning {
    pub fn aggression_radius(&self, difficulty: f32) -> f32 {
        self.aggression_radius_base + self.aggression_radius_scale * difficulty.clamp(0.0, 1.0)
    }

    pub fn lose_target_after(&self, difficulty: f32) -> u32 {
        (self.lose_target_frames as f32 * (1.0 + difficulty.clamp(0.0, 1.0))).round() as u32
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpawnTuning {
    pub min_kites: u32,
    pub max_kites: u32,
    pub spawn_interval_frames: u32,
    pub spawn_timer_frames: u32,
    pub cut_grace_frames: u32,
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            min_kites: 2,
            max_kites: 8,
            spawn_interval_frames: 90,
            spawn_timer_frames: 60,
            cut_grace_frames: 90,
        }
    }
}

impl SpawnTuning {
    /// Target NPC count for a difficulty, bounded by `max_kites`.
    pub fn capacity(&self, difficulty: f32) -> u32 {
        let low = self.min_kites.min(self.max_kites);
        let span = self.max_kites.saturating_sub(low) as f32;
        low + (difficulty.clamp(0.0, 1.0) * span).round() as u32
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CutTuning {
    pub cut_radius: f32,
    /// Reach multiplier of a kicking kite's body against other tails.
    pub kick_reach: f32,
    pub tail_head_skip: usize,
    pub points_per_cut: u32,
}

impl Default for CutTuning {
    fn default() -> Self {
        Self {
            cut_radius: 14.0,
            kick_reach: 1.8,
            tail_head_skip: 3,
            points_per_cut: 10,
        }
    }
}

impl CutTuning {
    pub fn points(&self, difficulty: f32) -> u32 {
        (self.points_per_cut as f32 * (1.0 + difficulty.clamp(0.0, 1.0))).round() as u32
    }
}

/// Game configuration resource.
///
/// Stores every tuning constant grouped by concern. Values missing from the
/// configuration file keep their defaults.
#[derive(Resource, Debug, Clone, Default)]
pub struct GameConfig {
    pub frame_loop: LoopTuning,
    pub playfield: PlayfieldTuning,
    pub physics: PhysicsTuning,
    pub ai: AiTuning,
    pub spawn: SpawnTuning,
    pub cut: CutTuning,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

fn read_f32(config: &Ini, section: &str, key: &str, target: &mut f32) {
    if let Some(value) = config.getfloat(section, key).ok().flatten() {
        *target = value as f32;
    }
}

fn read_u32(config: &Ini, section: &str, key: &str, target: &mut u32) {
    if let Some(value) = config.getuint(section, key).ok().flatten() {
        *target = value.min(u32::MAX as u64) as u32;
    }
}

fn read_usize(config: &Ini, section: &str, key: &str, target: &mut usize) {
    if let Some(value) = config.getuint(section, key).ok().flatten() {
        *target = value as usize;
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            ..Default::default()
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);

        info!(
            "Loaded config: {}x{} field, fps={}, seed={}, kites {}..{}",
            self.playfield.width,
            self.playfield.height,
            self.frame_loop.target_fps,
            self.frame_loop.seed,
            self.spawn.min_kites,
            self.spawn.max_kites
        );

        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        // [loop] section
        read_u32(config, "loop", "target_fps", &mut self.frame_loop.target_fps);
        if let Some(realtime) = config.getbool("loop", "realtime").ok().flatten() {
            self.frame_loop.realtime = realtime;
        }
        if let Some(seed) = config.getuint("loop", "seed").ok().flatten() {
            self.frame_loop.seed = seed;
        }

        // [playfield] section
        read_f32(config, "playfield", "width", &mut self.playfield.width);
        read_f32(config, "playfield", "height", &mut self.playfield.height);
        read_f32(config, "playfield", "margin", &mut self.playfield.margin);

        // [physics] section
        let physics = &mut self.physics;
        read_f32(config, "physics", "gravity", &mut physics.gravity);
        read_f32(config, "physics", "wind_strength", &mut physics.wind_strength);
        read_f32(config, "physics", "lift_coefficient", &mut physics.lift_coefficient);
        read_f32(config, "physics", "drag_coefficient", &mut physics.drag_coefficient);
        read_f32(config, "physics", "pull_strength", &mut physics.pull_strength);
        read_f32(config, "physics", "max_speed", &mut physics.max_speed);
        read_usize(config, "physics", "tail_length", &mut physics.tail_length);

        // [ai] section
        let ai = &mut self.ai;
        read_f32(config, "ai", "aggression_radius_base", &mut ai.aggression_radius_base);
        read_f32(config, "ai", "aggression_radius_scale", &mut ai.aggression_radius_scale);
        read_f32(config, "ai", "kick_range", &mut ai.kick_range);
        read_u32(config, "ai", "kick_cooldown_frames", &mut ai.kick_cooldown_frames);
        read_u32(config, "ai", "flee_frames", &mut ai.flee_frames);
        read_u32(config, "ai", "reevaluate_frames", &mut ai.reevaluate_frames);
        read_u32(config, "ai", "lose_target_frames", &mut ai.lose_target_frames);
        read_f32(config, "ai", "personal_space", &mut ai.personal_space);
        read_f32(config, "ai", "roam_reach", &mut ai.roam_reach);
        read_f32(config, "ai", "closing_speed", &mut ai.closing_speed);

        // [spawn] section
        let spawn = &mut self.spawn;
        read_u32(config, "spawn", "min_kites", &mut spawn.min_kites);
        read_u32(config, "spawn", "max_kites", &mut spawn.max_kites);
        read_u32(config, "spawn", "spawn_interval_frames", &mut spawn.spawn_interval_frames);
        read_u32(config, "spawn", "spawn_timer_frames", &mut spawn.spawn_timer_frames);
        read_u32(config, "spawn", "cut_grace_frames", &mut spawn.cut_grace_frames);

        // [collision] section
        let cut = &mut self.cut;
        read_f32(config, "collision", "cut_radius", &mut cut.cut_radius);
        read_f32(config, "collision", "kick_reach", &mut cut.kick_reach);
        read_usize(config, "collision", "tail_head_skip", &mut cut.tail_head_skip);
        read_u32(config, "collision", "points_per_cut", &mut cut.points_per_cut);
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();
        let mut set = |section: &str, key: &str, value: String| {
            config.set(section, key, Some(value));
        };

        set("loop", "target_fps", self.frame_loop.target_fps.to_string());
        set("loop", "realtime", self.frame_loop.realtime.to_string());
        set("loop", "seed", self.frame_loop.seed.to_string());

        set("playfield", "width", self.playfield.width.to_string());
        set("playfield", "height", self.playfield.height.to_string());
        set("playfield", "margin", self.playfield.margin.to_string());

        let p = &self.physics;
        set("physics", "gravity", p.gravity.to_string());
        set("physics", "wind_strength", p.wind_strength.to_string());
        set("physics", "lift_coefficient", p.lift_coefficient.to_string());
        set("physics", "drag_coefficient", p.drag_coefficient.to_string());
        set("physics", "pull_strength", p.pull_strength.to_string());
        set("physics", "max_speed", p.max_speed.to_string());
        set("physics", "tail_length", p.tail_length.to_string());

        let a = &self.ai;
        set("ai", "aggression_radius_base", a.aggression_radius_base.to_string());
        set("ai", "aggression_radius_scale", a.aggression_radius_scale.to_string());
        set("ai", "kick_range", a.kick_range.to_string());
        set("ai", "kick_cooldown_frames", a.kick_cooldown_frames.to_string());
        set("ai", "flee_frames", a.flee_frames.to_string());
        set("ai", "reevaluate_frames", a.reevaluate_frames.to_string());
        set("ai", "lose_target_frames", a.lose_target_frames.to_string());
        set("ai", "personal_space", a.personal_space.to_string());
        set("ai", "roam_reach", a.roam_reach.to_string());
        set("ai", "closing_speed", a.closing_speed.to_string());

        let s = &self.spawn;
        set("spawn", "min_kites", s.min_kites.to_string());
        set("spawn", "max_kites", s.max_kites.to_string());
        set("spawn", "spawn_interval_frames", s.spawn_interval_frames.to_string());
        set("spawn", "spawn_timer_frames", s.spawn_timer_frames.to_string());
        set("spawn", "cut_grace_frames", s.cut_grace_frames.to_string());

        let c = &self.cut;
        set("collision", "cut_radius", c.cut_radius.to_string());
        set("collision", "kick_reach", c.kick_reach.to_string());
        set("collision", "tail_head_skip", c.tail_head_skip.to_string());
        set("collision", "points_per_cut", c.points_per_cut.to_string());

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sane() {
        let config = GameConfig::new();
        assert_eq!(config.config_path, PathBuf::from(DEFAULT_CONFIG_PATH));
        assert_eq!(config.frame_loop.target_fps, 60);
        assert!(config.spawn.min_kites <= config.spawn.max_kites);
    }

    #[test]
    fn test_load_from_str_overrides_only_present_keys() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[spawn]\nmax_kites = 12\n[ai]\nkick_range = 60.5\n")
            .unwrap();
        assert_eq!(config.spawn.max_kites, 12);
        assert_eq!(config.spawn.min_kites, 2);
        assert!((config.ai.kick_range - 60.5).abs() < 1e-6);
        assert_eq!(config.physics, PhysicsTuning::default());
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let mut config = GameConfig::with_path("./definitely/not/here.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.spawn, SpawnTuning::default());
    }

    #[test]
    fn test_capacity_grows_with_difficulty_and_is_bounded() {
        let spawn = SpawnTuning::default();
        assert_eq!(spawn.capacity(0.0), 2);
        assert_eq!(spawn.capacity(0.5), 5);
        assert_eq!(spawn.capacity(1.0), 8);
        assert_eq!(spawn.capacity(7.0), 8);
    }

    #[test]
    fn test_aggression_radius_scales_with_difficulty() {
        let ai = AiTuning::default();
        assert!(ai.aggression_radius(1.0) > ai.aggression_radius(0.0));
        assert_eq!(ai.lose_target_after(1.0), ai.lose_target_frames * 2);
    }

    #[test]
    fn test_points_scale_with_difficulty() {
        let cut = CutTuning::default();
        assert_eq!(cut.points(0.0), 10);
        assert_eq!(cut.points(0.5), 15);
    }
}
