//! Simulation systems.
//!
//! This module groups all ECS systems that advance input, game state and
//! the kite simulation. [`crate::game`] chains them into the per-tick
//! schedule.
//!
//! Submodules overview
//! - [`ai`] – per-NPC roaming/attacking/fleeing state machine
//! - [`collision`] – tail-versus-body cut resolution and scoring
//! - [`gamestate`] – game state coordinator and run conditions
//! - [`input`] – platform bridge draining and edge-triggered gamepad polling
//! - [`physics`] – lift, drag and integration of kite bodies
//! - [`player`] – player steering, player view and relaunch
//! - [`spawn`] – NPC spawning, spawn timers and boundary despawn
//! - [`time`] – update simulation time and delta
//! - [`ttl`] – frame-count removal of cut kites
//! - [`wind`] – advance the wind field

pub mod ai;
pub mod collision;
pub mod gamestate;
pub mod input;
pub mod physics;
pub mod player;
pub mod spawn;
pub mod time;
pub mod ttl;
pub mod wind;
