//! The macroquad implementation of the engine's backend contract.
//!
//! Draw calls made during a tick are recorded and replayed by
//! [`Backend::present`], so the window keeps showing the last completed tick
//! on frames where no tick was due.

use std::path::PathBuf;
use std::time::Duration;

use macroquad::prelude::*;

use pasture_sim::geometry::Field;
use pasture_sim::{
    Backend, Direction, FrameLoader, InputSource, Renderer, SimConfig, SimError, SimResult,
    SpriteId,
};

use crate::placeholder;

/// The field color.
pub const PASTURE_GREEN: Color = Color::new(0.016, 0.659, 0.553, 1.0);

/// Where sprite images come from.
#[derive(Debug, Clone)]
pub enum SpriteSource {
    /// PNG files relative to a media root.
    Files {
        /// Directory the configured `media/...` paths are joined onto.
        root: PathBuf,
    },
    /// Procedurally painted stand-ins.
    Placeholder {
        /// Sizes and paths used to recognize each requested image.
        config: Box<SimConfig>,
    },
}

fn key_for(direction: Direction) -> KeyCode {
    match direction {
        Direction::Up => KeyCode::Up,
        Direction::Down => KeyCode::Down,
        Direction::Left => KeyCode::Left,
        Direction::Right => KeyCode::Right,
    }
}

/// The window opens before any config file is read, so it always has the
/// default field size.
pub fn window_field() -> Field {
    Field::default()
}

/// Reject a configured field that would not map one to one onto the window.
pub fn check_field(field: Field) -> SimResult<()> {
    let window = window_field();
    if field == window {
        return Ok(());
    }
    Err(SimError::InvalidConfig(format!(
        "field {}x{} does not match the {}x{} window",
        field.width, field.height, window.width, window.height
    )))
}

/// Whole ticks of length `tick` that fit into `elapsed`.
pub fn ticks_due(elapsed: Duration, tick: Duration) -> u64 {
    let due = elapsed.as_nanos() / tick.as_nanos().max(1);
    u64::try_from(due).unwrap_or(u64::MAX)
}

#[derive(Debug, Clone, Copy)]
enum DrawCall {
    Background,
    Sprite(SpriteId, i32, i32),
}

/// Window, textures, and keyboard.
pub struct MacroquadBackend {
    source: SpriteSource,
    textures: Vec<Texture2D>,
    frame: Vec<DrawCall>,
    started: f64,
}

impl MacroquadBackend {
    /// A backend that has loaded nothing yet.
    pub fn new(source: SpriteSource) -> Self {
        Self {
            source,
            textures: Vec::new(),
            frame: Vec::new(),
            started: get_time(),
        }
    }

    /// Restart the run clock, after loading.
    pub fn reset_clock(&mut self) {
        self.started = get_time();
    }

    /// Forget the recorded draw calls before a new tick.
    pub fn begin_tick(&mut self) {
        self.frame.clear();
    }

    fn load_file(root: &std::path::Path, path: &str) -> SimResult<Texture2D> {
        let full = root.join(path);
        let fail = |reason: String| SimError::AssetLoad {
            path: full.display().to_string(),
            reason,
        };
        let bytes = std::fs::read(&full).map_err(|e| fail(e.to_string()))?;
        let image = Image::from_file_with_format(&bytes, None).map_err(|e| fail(e.to_string()))?;
        Ok(Texture2D::from_image(&image))
    }
}

impl FrameLoader for MacroquadBackend {
    fn load_sprite(&mut self, path: &str) -> SimResult<SpriteId> {
        let texture = match &self.source {
            SpriteSource::Files { root } => Self::load_file(root, path)?,
            SpriteSource::Placeholder { config } => {
                placeholder::texture(path, config).ok_or_else(|| SimError::AssetLoad {
                    path: path.to_string(),
                    reason: "no placeholder for this path".into(),
                })?
            }
        };
        let id = u32::try_from(self.textures.len()).map_err(|_| SimError::AssetLoad {
            path: path.to_string(),
            reason: "too many sprites".into(),
        })?;
        self.textures.push(texture);
        Ok(SpriteId(id))
    }
}

impl Renderer for MacroquadBackend {
    fn draw_background(&mut self) {
        self.frame.push(DrawCall::Background);
    }

    fn draw_sprite(&mut self, sprite: SpriteId, x: i32, y: i32) {
        self.frame.push(DrawCall::Sprite(sprite, x, y));
    }
}

impl InputSource for MacroquadBackend {
    fn is_key_down(&self, direction: Direction) -> bool {
        is_key_down(key_for(direction))
    }
}

impl Backend for MacroquadBackend {
    fn elapsed(&self) -> Duration {
        Duration::from_secs_f64((get_time() - self.started).max(0.0))
    }

    fn quit_requested(&mut self) -> bool {
        is_key_pressed(KeyCode::Escape) || is_quit_requested()
    }

    fn present(&mut self) {
        if self.frame.is_empty() {
            clear_background(PASTURE_GREEN);
        }
        for call in &self.frame {
            match *call {
                DrawCall::Background => clear_background(PASTURE_GREEN),
                DrawCall::Sprite(id, x, y) => {
                    if let Some(texture) = self.textures.get(id.0 as usize) {
                        draw_texture(texture, x as f32, y as f32, WHITE);
                    }
                }
            }
        }
    }
}
