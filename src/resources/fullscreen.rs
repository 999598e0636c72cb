//! Fullscreen request seam.
//!
//! Entering a game asks the platform for fullscreen on a best-effort basis.
//! The platform adapter installs its [`FullscreenBackend`] inside the
//! [`FullscreenRequester`] resource; the [`FullScreen`] marker resource is
//! present while the platform reports fullscreen.
use bevy_ecs::prelude::Resource;
use log::debug;

/// Platform hook able to switch the presentation to fullscreen.
pub trait FullscreenBackend {
    fn request_fullscreen(&mut self) -> Result<(), String>;
}

/// Marker resource: when present, the presentation runs in full screen mode.
#[derive(Resource, Clone, Copy)]
pub struct FullScreen {}

#[derive(Resource)]
pub struct FullscreenRequester(pub Box<dyn FullscreenBackend + Send + Sync>);

impl FullscreenRequester {
    pub fn new(backend: impl FullscreenBackend + Send + Sync + 'static) -> Self {
        FullscreenRequester(Box::new(backend))
    }

    pub fn request(&mut self) -> Result<(), String> {
        self.0.request_fullscreen()
    }
}

/// Backend for runs without a display. Grants every request unless built
/// with [`HeadlessFullscreen::denying`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessFullscreen {
    deny: bool,
}

impl HeadlessFullscreen {
    pub fn denying() -> Self {
        HeadlessFullscreen { deny: true }
    }
}

impl FullscreenBackend for HeadlessFullscreen {
    fn request_fullscreen(&mut self) -> Result<(), String> {
        if self.deny {
            return Err("fullscreen not permitted by the platform".to_string());
        }
        debug!("Headless fullscreen granted");
        Ok(())
    }
}
