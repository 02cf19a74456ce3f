use std::fmt;
use std::sync::Arc;

use crate::backend::{FrameLoader, SpriteId};
use crate::error::{SimError, SimResult};

/// Compass quadrant a sprite faces, picked from the velocity signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    /// Moving left and up.
    NorthWest,
    /// Moving right and up.
    NorthEast,
    /// Moving left and down, and the heading of an agent standing still.
    SouthWest,
    /// Moving right and down.
    SouthEast,
}

impl Heading {
    /// All headings in frame-set storage order.
    pub const ALL: [Heading; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// Pick the heading for a velocity. Checks run in a fixed order, so
    /// axis-aligned and zero velocities resolve south-west first.
    pub fn from_velocity(vx: i32, vy: i32) -> Self {
        if vx <= 0 && vy >= 0 {
            Self::SouthWest
        } else if vx >= 0 && vy >= 0 {
            Self::SouthEast
        } else if vx <= 0 && vy <= 0 {
            Self::NorthWest
        } else {
            Self::NorthEast
        }
    }

    /// Short key used in asset file names.
    pub fn key(self) -> &'static str {
        match self {
            Self::NorthWest => "nw",
            Self::NorthEast => "ne",
            Self::SouthWest => "sw",
            Self::SouthEast => "se",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::NorthWest => 0,
            Self::NorthEast => 1,
            Self::SouthWest => 2,
            Self::SouthEast => 3,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Animation frames for each of the four headings. Every heading has at least one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSet {
    frames: [Vec<SpriteId>; 4],
}

impl FrameSet {
    /// Build a frame set from per-heading frames in [`Heading::ALL`] order.
    pub fn new(frames: [Vec<SpriteId>; 4]) -> SimResult<Self> {
        for (heading, list) in Heading::ALL.iter().zip(&frames) {
            if list.is_empty() {
                return Err(SimError::EmptyFrameSet {
                    pattern: heading.key().to_string(),
                });
            }
        }
        Ok(Self { frames })
    }

    /// Load `<dir>/<key> (<n>).png` for every heading.
    pub fn load(loader: &mut dyn FrameLoader, dir: &str, count: usize) -> SimResult<Self> {
        let dir = dir.trim_end_matches('/');
        let mut frames: [Vec<SpriteId>; 4] = Default::default();
        for heading in Heading::ALL {
            let pattern = format!("{dir}/{} ({{n}}).png", heading.key());
            let list = loader.load_frame_set(&pattern, count)?;
            if list.is_empty() {
                return Err(SimError::EmptyFrameSet { pattern });
            }
            frames[heading.index()] = list;
        }
        Ok(Self { frames })
    }

    /// Frames for one heading.
    pub fn frames(&self, heading: Heading) -> &[SpriteId] {
        &self.frames[heading.index()]
    }

    /// Frame `index` of a heading, wrapping when the heading has fewer frames.
    pub fn frame(&self, heading: Heading, index: usize) -> SpriteId {
        let list = self.frames(heading);
        list[index % list.len()]
    }
}

/// Steps through a [`FrameSet`] every `interval` ticks.
#[derive(Debug, Clone)]
pub struct Animation {
    frames: Arc<FrameSet>,
    interval: u32,
    elapsed: u32,
    index: usize,
    current: SpriteId,
}

impl Animation {
    /// The elapsed counter starts full, so the first [`Animation::advance`]
    /// immediately picks a frame for the agent's actual heading.
    pub fn new(frames: Arc<FrameSet>, interval: u32) -> Self {
        let interval = interval.max(1);
        let current = frames.frame(Heading::SouthWest, 0);
        Self {
            frames,
            interval,
            elapsed: interval,
            index: 0,
            current,
        }
    }

    /// Count one tick; switch frames when the interval has passed.
    pub fn advance(&mut self, heading: Heading) {
        self.elapsed += 1;
        if self.elapsed >= self.interval {
            self.next_frame(heading);
        }
    }

    fn next_frame(&mut self, heading: Heading) {
        let count = self.frames.frames(heading).len();
        self.index = (self.index + 1) % count;
        self.current = self.frames.frame(heading, self.index);
        self.elapsed = 0;
    }

    /// The sprite to draw this tick.
    pub fn current(&self) -> SpriteId {
        self.current
    }

    /// Position of the cursor within the active heading's frames.
    pub fn frame_index(&self) -> usize {
        self.index
    }
}
