//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: coordinator state, input state,
//! timing, tuning and the simulation's shared state. Each submodule
//! documents the semantics and intended usage of its resource(s).
//!
//! Overview
//! - `focus` – menu and pause focus grids
//! - `fullscreen` – fullscreen backend seam and marker
//! - `gameconfig` – INI-backed tuning of the whole simulation
//! - `gameparams` – player-adjustable parameters and the score
//! - `gamestate` – authoritative high-level game state
//! - `input` – gamepad snapshots, tracking, edge flags and steering intent
//! - `platform` – channel bridge for keyboard and gamepad connection events
//! - `playerinfo` – read-only projection of the player kite
//! - `playfield` – play field bounds
//! - `simrng` – seedable random source
//! - `spawndirector` – spawn cooldown and kite id allocation
//! - `systemsstore` – state transition hook systems by name
//! - `wind` – wind phase and force
//! - `worldtime` – simulation time and delta
pub mod focus;
pub mod fullscreen;
pub mod gameconfig;
pub mod gameparams;
pub mod gamestate;
pub mod input;
pub mod platform;
pub mod playerinfo;
pub mod playfield;
pub mod simrng;
pub mod spawndirector;
pub mod systemsstore;
pub mod wind;
pub mod worldtime;
