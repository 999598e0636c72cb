//! Kite flight simulation library.
//!
//! This module exposes the simulation's ECS components, resources, systems
//! and events, the [`game::Game`] wrapper and the frame loop, for use by the
//! headless runner, a presentation layer and the integration tests.

pub mod components;
pub mod events;
pub mod frameloop;
pub mod game;
pub mod resources;
pub mod snapshot;
pub mod systems;
