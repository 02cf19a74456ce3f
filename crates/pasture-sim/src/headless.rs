//! A backend with no window.
//!
//! Sprites are plain counters, draw calls are tallied, and keys are held
//! or released by the caller. Time is either virtual (every
//! [`Backend::present`] advances the clock by exactly one tick) or real
//! (present sleeps until the next tick is due).

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use crate::backend::{Backend, Direction, FrameLoader, InputSource, Renderer, SpriteId};
use crate::error::{SimError, SimResult};

#[derive(Debug, Clone, Copy)]
enum Pacing {
    Virtual,
    Realtime { started: Instant },
}

/// Backend for command-line runs and tests.
#[derive(Debug, Clone)]
pub struct HeadlessBackend {
    tick_rate: u32,
    pacing: Pacing,
    asset_root: Option<PathBuf>,
    sprites_loaded: u32,
    held: HashSet<Direction>,
    backgrounds: u64,
    sprites_drawn: u64,
    frames: u64,
    quit_after: Option<u64>,
}

impl HeadlessBackend {
    /// Virtual-time backend ticking at `tick_rate` per second.
    pub fn new(tick_rate: u32) -> Self {
        Self {
            tick_rate: tick_rate.max(1),
            pacing: Pacing::Virtual,
            asset_root: None,
            sprites_loaded: 0,
            held: HashSet::new(),
            backgrounds: 0,
            sprites_drawn: 0,
            frames: 0,
            quit_after: None,
        }
    }

    /// Pace ticks against the wall clock instead of virtual time.
    pub fn realtime(mut self) -> Self {
        self.pacing = Pacing::Realtime {
            started: Instant::now(),
        };
        self
    }

    /// Require every requested image to exist under `root`.
    pub fn with_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.asset_root = Some(root.into());
        self
    }

    /// Report a quit request once `frames` frames have been presented.
    pub fn with_quit_after(mut self, frames: u64) -> Self {
        self.quit_after = Some(frames);
        self
    }

    /// Press and keep holding a steering key.
    pub fn hold(&mut self, direction: Direction) {
        self.held.insert(direction);
    }

    /// Let go of a steering key.
    pub fn release(&mut self, direction: Direction) {
        self.held.remove(&direction);
    }

    /// Images handed out by [`FrameLoader::load_sprite`].
    pub fn sprites_loaded(&self) -> u32 {
        self.sprites_loaded
    }

    /// Sprite draw calls since creation.
    pub fn sprites_drawn(&self) -> u64 {
        self.sprites_drawn
    }

    /// Background clears since creation.
    pub fn backgrounds_drawn(&self) -> u64 {
        self.backgrounds
    }

    /// Frames presented since creation.
    pub fn frames_presented(&self) -> u64 {
        self.frames
    }

    /// When frame `n` is due, counted from the start of the run.
    fn time_of_frame(&self, n: u64) -> Duration {
        Duration::from_nanos(n.saturating_mul(1_000_000_000) / u64::from(self.tick_rate))
    }

    fn check_asset(root: &Path, path: &str) -> SimResult<()> {
        let full = root.join(path);
        if full.is_file() {
            Ok(())
        } else {
            Err(SimError::AssetLoad {
                path: full.display().to_string(),
                reason: "file not found".into(),
            })
        }
    }
}

impl Renderer for HeadlessBackend {
    fn draw_background(&mut self) {
        self.backgrounds += 1;
    }

    fn draw_sprite(&mut self, _sprite: SpriteId, _x: i32, _y: i32) {
        self.sprites_drawn += 1;
    }
}

impl InputSource for HeadlessBackend {
    fn is_key_down(&self, direction: Direction) -> bool {
        self.held.contains(&direction)
    }
}

impl FrameLoader for HeadlessBackend {
    fn load_sprite(&mut self, path: &str) -> SimResult<SpriteId> {
        if let Some(root) = &self.asset_root {
            Self::check_asset(root, path)?;
        }
        let id = SpriteId(self.sprites_loaded);
        self.sprites_loaded += 1;
        Ok(id)
    }
}

impl Backend for HeadlessBackend {
    fn elapsed(&self) -> Duration {
        match self.pacing {
            Pacing::Virtual => self.time_of_frame(self.frames),
            Pacing::Realtime { started } => started.elapsed(),
        }
    }

    fn quit_requested(&mut self) -> bool {
        self.quit_after.is_some_and(|n| self.frames >= n)
    }

    fn present(&mut self) {
        self.frames += 1;
        if let Pacing::Realtime { started } = self.pacing {
            let due = started + self.time_of_frame(self.frames);
            let now = Instant::now();
            if due > now {
                thread::sleep(due - now);
            }
        }
    }
}
