//! Fullscreen request event and observer.
//!
//! Triggered when a game starts. The request is best effort: a denial is
//! logged and the game carries on windowed.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::resources::fullscreen::{FullScreen, FullscreenRequester};

#[derive(Event, Debug, Clone, Copy)]
pub struct FullscreenRequestEvent {}

/// Ask the installed backend for fullscreen. On success the [`FullScreen`]
/// marker resource is inserted.
pub fn fullscreen_request_observer(
    _trigger: On<FullscreenRequestEvent>,
    mut commands: Commands,
    requester: Option<ResMut<FullscreenRequester>>,
    fullscreen: Option<Res<FullScreen>>,
) {
    if fullscreen.is_some() {
        debug!("Already in full screen mode");
        return;
    }
    let Some(mut requester) = requester else {
        debug!("No fullscreen backend installed");
        return;
    };
    match requester.request() {
        Ok(()) => {
            info!("Full screen enabled");
            commands.insert_resource(FullScreen {});
        }
        Err(e) => warn!("Fullscreen request failed: {}", e),
    }
}
