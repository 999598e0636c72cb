//! Event types and observers.
//!
//! Events decouple the systems that detect something from the code that
//! reacts to it.
//!
//! Submodules:
//! - [`collision`] – kite cut notifications and the removal grace observer
//! - [`fullscreen`] – best-effort fullscreen request on game start
//! - [`gamestate`] – state transition notifications and enter hooks
//! - [`input`] – edge-triggered input action messages
pub mod collision;
pub mod fullscreen;
pub mod gamestate;
pub mod input;
