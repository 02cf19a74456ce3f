//! The contract between the engine and whatever draws, loads, and polls.
//!
//! The engine never touches pixels, files, or the keyboard directly. It asks
//! a [`FrameLoader`] for sprite handles once at startup, hands those handles
//! back to a [`Renderer`] every tick, and asks an [`InputSource`] which
//! arrow keys are held when the shepherd moves.

use std::fmt;
use std::time::Duration;

use crate::error::SimResult;

/// Opaque handle to an image owned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpriteId(pub u32);

impl fmt::Display for SpriteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sprite#{}", self.0)
    }
}

/// One of the four steering keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
}

/// Draw calls issued by the world each tick.
pub trait Renderer {
    /// Paint the empty field.
    fn draw_background(&mut self);

    /// Blit a sprite with its top-left corner at `(x, y)`.
    fn draw_sprite(&mut self, sprite: SpriteId, x: i32, y: i32);
}

/// Keyboard state polled by the shepherd.
pub trait InputSource {
    /// Return `true` while the key for `direction` is held.
    fn is_key_down(&self, direction: Direction) -> bool;
}

/// Image loading, used only during startup.
pub trait FrameLoader {
    /// Load a single image.
    fn load_sprite(&mut self, path: &str) -> SimResult<SpriteId>;

    /// Load `count` images from a pattern containing `{n}`, numbered from 1.
    ///
    /// `"media/wolfs/nw ({n}).png"` with a count of 12 loads
    /// `nw (1).png` through `nw (12).png`.
    fn load_frame_set(&mut self, pattern: &str, count: usize) -> SimResult<Vec<SpriteId>> {
        (1..=count)
            .map(|n| self.load_sprite(&frame_path(pattern, n)))
            .collect()
    }
}

/// Expand the `{n}` placeholder of a frame pattern.
pub fn frame_path(pattern: &str, n: usize) -> String {
    pattern.replace("{n}", &n.to_string())
}

/// What a tick draws onto and reads keys from.
pub trait Surface: Renderer + InputSource {}

impl<T: Renderer + InputSource + ?Sized> Surface for T {}

/// Everything the driver needs between and during ticks.
pub trait Backend: Surface {
    /// Wall-clock (or virtual) time since the run started.
    fn elapsed(&self) -> Duration;

    /// Return `true` once the user asked to quit. Checked between ticks only.
    fn quit_requested(&mut self) -> bool;

    /// Finish the frame and wait until the next tick is due.
    fn present(&mut self);
}
