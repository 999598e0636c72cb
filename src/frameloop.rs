//! Cancellable per-frame driver.
//!
//! [`FrameLoop`] runs one [`Game::tick`] per frame with a fixed delta taken
//! from the `[loop]` configuration. Before each tick the [`InputDriver`]
//! feeds the game (gamepad snapshots, steering, platform events); after it,
//! an observer callback sees the result. The loop stops when its
//! [`CancelHandle`] is cancelled, from any thread, or when the optional
//! frame limit is reached.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::game::Game;
use crate::resources::gameconfig::LoopTuning;

/// Cloneable flag used to stop a running [`FrameLoop`].
#[derive(Debug, Clone, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Supplies per-frame input to the game before each tick.
pub trait InputDriver {
    fn before_tick(&mut self, frame: u64, game: &mut Game);
}

/// Driver that never produces input.
pub struct NoInput;

impl InputDriver for NoInput {
    fn before_tick(&mut self, _frame: u64, _game: &mut Game) {}
}

pub struct FrameLoop {
    dt: f32,
    realtime: bool,
    max_frames: Option<u64>,
    cancel: CancelHandle,
}

impl FrameLoop {
    pub fn new(tuning: &LoopTuning) -> Self {
        FrameLoop {
            dt: tuning.frame_seconds(),
            realtime: tuning.realtime,
            max_frames: None,
            cancel: CancelHandle::default(),
        }
    }

    pub fn with_max_frames(mut self, frames: Option<u64>) -> Self {
        self.max_frames = frames;
        self
    }

    pub fn frame_seconds(&self) -> f32 {
        self.dt
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Run until cancelled or until the frame limit. Returns the number of
    /// frames run.
    pub fn run(
        &mut self,
        game: &mut Game,
        driver: &mut impl InputDriver,
        mut after_tick: impl FnMut(u64, &mut Game),
    ) -> u64 {
        let frame_duration = Duration::from_secs_f32(self.dt);
        let mut next_deadline = Instant::now() + frame_duration;
        let mut frame: u64 = 0;
        info!(
            "Frame loop started: dt {:.4}s, realtime {}, limit {:?}",
            self.dt, self.realtime, self.max_frames
        );
        while !self.cancel.is_cancelled() && self.max_frames.is_none_or(|max| frame < max) {
            driver.before_tick(frame, game);
            game.tick(self.dt);
            after_tick(frame, game);
            frame += 1;

            if self.realtime {
                let now = Instant::now();
                if next_deadline > now {
                    std::thread::sleep(next_deadline - now);
                    next_deadline += frame_duration;
                } else {
                    // Running behind: do not try to catch up.
                    next_deadline = now + frame_duration;
                }
            }
        }
        debug!("Frame loop stopped after {} frames", frame);
        frame
    }
}
