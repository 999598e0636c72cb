//! ECS components for entities.
//!
//! This module groups all component types that can be attached to kite
//! entities. Components define data such as position, kinematics, the tail
//! polyline and AI memory.
//!
//! Submodules overview:
//! - [`kite`] – kite identity, palette, player marker, steering pull and kick
//! - [`kiteai`] – personality and AI state machine memory of NPC kites
//! - [`mapposition`] – play-field position of an entity
//! - [`rigidbody`] – kite body: velocity, per-force accelerations and aerodynamic state
//! - [`spawnlifecycle`] – spawning/active countdown of NPC kites
//! - [`tail`] – bounded trailing polyline used for cuts
//! - [`ttl`] – frame-count time-to-live for cut kites

pub mod kite;
pub mod kiteai;
pub mod mapposition;
pub mod rigidbody;
pub mod spawnlifecycle;
pub mod tail;
pub mod ttl;
