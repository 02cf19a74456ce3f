use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};
use crate::geometry::Field;
use crate::motion::VerticalBias;

/// Sheep template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheepConfig {
    /// Sprite width in pixels.
    pub width: i32,
    /// Sprite height in pixels.
    pub height: i32,
    /// Velocity budget (`|vx| + |vy|`).
    pub speed: i32,
    /// Ticks between animation frames.
    pub frame_interval: u32,
    /// Frames per heading.
    pub frame_count: usize,
    /// Ticks a sheep waits after mating before it may mate again.
    pub procreate_cooldown: i32,
    /// Frame directory for male sheep.
    pub male_frames: String,
    /// Frame directory for female sheep.
    pub female_frames: String,
}

impl Default for SheepConfig {
    fn default() -> Self {
        Self {
            width: 68,
            height: 60,
            speed: 3,
            frame_interval: 10,
            frame_count: 10,
            procreate_cooldown: 500,
            male_frames: "media/sheepsM".into(),
            female_frames: "media/sheepsF".into(),
        }
    }
}

/// Wolf template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WolfConfig {
    /// Sprite width in pixels.
    pub width: i32,
    /// Sprite height in pixels.
    pub height: i32,
    /// Velocity budget (`|vx| + |vy|`).
    pub speed: i32,
    /// Ticks between animation frames.
    pub frame_interval: u32,
    /// Frames per heading.
    pub frame_count: usize,
    /// Ticks a wolf survives without eating.
    pub starvation_ticks: i32,
    /// Frame directory.
    pub frames: String,
}

impl Default for WolfConfig {
    fn default() -> Self {
        Self {
            width: 157,
            height: 110,
            speed: 4,
            frame_interval: 4,
            frame_count: 12,
            starvation_ticks: 500,
            frames: "media/wolfs".into(),
        }
    }
}

/// Shepherd template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShepherdConfig {
    /// Sprite width in pixels.
    pub width: i32,
    /// Sprite height in pixels.
    pub height: i32,
    /// Pixels per tick along each held axis.
    pub speed: i32,
    /// Sprite image path.
    pub sprite: String,
}

impl Default for ShepherdConfig {
    fn default() -> Self {
        Self {
            width: 49,
            height: 49,
            speed: 4,
            sprite: "media/shepherd.png".into(),
        }
    }
}

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// Playing field size.
    pub field: Field,
    /// Ticks per second the backend paces to.
    pub tick_rate: u32,
    /// Edge distance below which prey runs from a wolf.
    pub flee_radius: i32,
    /// Vertical sign policy for random walks.
    pub vertical_bias: VerticalBias,
    /// Maximum event log size (oldest events dropped when exceeded). 0 = unlimited.
    pub max_events: usize,
    /// Sheep size, speed, art, and breeding.
    pub sheep: SheepConfig,
    /// Wolf size, speed, art, and hunger.
    pub wolf: WolfConfig,
    /// Shepherd size, speed, and sprite.
    pub shepherd: ShepherdConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: None,
            field: Field::default(),
            tick_rate: 60,
            flee_radius: 200,
            vertical_bias: VerticalBias::Upward,
            max_events: 0,
            sheep: SheepConfig::default(),
            wolf: WolfConfig::default(),
            shepherd: ShepherdConfig::default(),
        }
    }
}

impl SimConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the field size.
    pub fn with_field(mut self, width: i32, height: i32) -> Self {
        self.field = Field::new(width, height);
        self
    }

    /// Set the tick rate the backend paces to.
    pub fn with_tick_rate(mut self, rate: u32) -> Self {
        self.tick_rate = rate;
        self
    }

    /// Set the vertical random-walk policy.
    pub fn with_vertical_bias(mut self, bias: VerticalBias) -> Self {
        self.vertical_bias = bias;
        self
    }

    /// Set the maximum event log size (0 = unlimited).
    pub fn with_max_events(mut self, max: usize) -> Self {
        self.max_events = max;
        self
    }

    /// Read a JSON config file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> SimResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| SimError::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json(text: &str) -> SimResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value the engine relies on.
    pub fn validate(&self) -> SimResult<()> {
        let bad = |msg: String| Err(SimError::InvalidConfig(msg));

        if self.tick_rate == 0 {
            return bad("tick_rate must be at least 1".into());
        }
        if self.flee_radius < 0 {
            return bad("flee_radius must not be negative".into());
        }

        let sprites = [
            ("sheep", self.sheep.width, self.sheep.height, self.sheep.speed),
            ("wolf", self.wolf.width, self.wolf.height, self.wolf.speed),
            (
                "shepherd",
                self.shepherd.width,
                self.shepherd.height,
                self.shepherd.speed,
            ),
        ];
        for (name, width, height, speed) in sprites {
            if width < 1 || height < 1 {
                return bad(format!("{name} sprite must be at least 1x1"));
            }
            if speed < 1 {
                return bad(format!("{name} speed must be at least 1"));
            }
            if width >= self.field.width || height >= self.field.height {
                return bad(format!(
                    "{name} sprite {width}x{height} does not fit the {}x{} field",
                    self.field.width, self.field.height
                ));
            }
        }

        if self.sheep.frame_count == 0 || self.wolf.frame_count == 0 {
            return bad("frame_count must be at least 1".into());
        }
        if self.sheep.frame_interval == 0 || self.wolf.frame_interval == 0 {
            return bad("frame_interval must be at least 1".into());
        }
        if self.sheep.procreate_cooldown < 1 {
            return bad("procreate_cooldown must be at least 1".into());
        }
        if self.wolf.starvation_ticks < 1 {
            return bad("starvation_ticks must be at least 1".into());
        }
        Ok(())
    }
}
