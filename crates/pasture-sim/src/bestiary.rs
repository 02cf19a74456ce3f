//! Species templates.
//!
//! Every sheep and wolf shares its species' frame set through an [`Arc`], so
//! a newborn never touches the image backend. All art is requested exactly
//! once, in [`Bestiary::load`].

use std::sync::Arc;

use rand::Rng;

use crate::agent::{Agent, AgentId, Gender, Role, Sheep, Shepherd, Wolf};
use crate::animation::{Animation, FrameSet};
use crate::backend::{FrameLoader, SpriteId};
use crate::config::{SheepConfig, ShepherdConfig, SimConfig, WolfConfig};
use crate::error::SimResult;
use crate::geometry::{Body, Field};
use crate::motion::{Motion, VerticalBias};

/// Loaded art plus per-species settings.
#[derive(Debug, Clone)]
pub struct Bestiary {
    sheep: SheepConfig,
    wolf: WolfConfig,
    shepherd: ShepherdConfig,
    bias: VerticalBias,
    male_frames: Arc<FrameSet>,
    female_frames: Arc<FrameSet>,
    wolf_frames: Arc<FrameSet>,
    shepherd_sprite: SpriteId,
}

impl Bestiary {
    /// Load every frame set and the shepherd sprite.
    pub fn load(config: &SimConfig, loader: &mut dyn FrameLoader) -> SimResult<Self> {
        let wolf_frames = FrameSet::load(loader, &config.wolf.frames, config.wolf.frame_count)?;
        let male_frames =
            FrameSet::load(loader, &config.sheep.male_frames, config.sheep.frame_count)?;
        let female_frames =
            FrameSet::load(loader, &config.sheep.female_frames, config.sheep.frame_count)?;
        let shepherd_sprite = loader.load_sprite(&config.shepherd.sprite)?;

        tracing::debug!(
            wolf_frames = config.wolf.frame_count,
            sheep_frames = config.sheep.frame_count,
            "loaded bestiary"
        );

        Ok(Self {
            sheep: config.sheep.clone(),
            wolf: config.wolf.clone(),
            shepherd: config.shepherd.clone(),
            bias: config.vertical_bias,
            male_frames: Arc::new(male_frames),
            female_frames: Arc::new(female_frames),
            wolf_frames: Arc::new(wolf_frames),
            shepherd_sprite,
        })
    }

    /// A sheep at `(x, y)`, already walking in a random direction.
    pub fn sheep<R: Rng + ?Sized>(
        &self,
        id: AgentId,
        x: i32,
        y: i32,
        gender: Gender,
        field: Field,
        rng: &mut R,
    ) -> Agent {
        let frames = match gender {
            Gender::Male => Arc::clone(&self.male_frames),
            Gender::Female => Arc::clone(&self.female_frames),
        };
        let animation = Animation::new(frames, self.sheep.frame_interval);
        let sheep = Sheep::new(gender, animation, self.sheep.procreate_cooldown);
        let body = Body::new(x, y, self.sheep.width, self.sheep.height);
        self.walking(id, body, self.sheep.speed, Role::Sheep(sheep), field, rng)
    }

    /// A sheep of random gender at a random spot.
    pub fn random_sheep<R: Rng + ?Sized>(&self, id: AgentId, field: Field, rng: &mut R) -> Agent {
        let (x, y) = random_spot(field, self.sheep.width, self.sheep.height, rng);
        let gender = Gender::random(rng);
        self.sheep(id, x, y, gender, field, rng)
    }

    /// A fed wolf at `(x, y)`.
    pub fn wolf<R: Rng + ?Sized>(
        &self,
        id: AgentId,
        x: i32,
        y: i32,
        field: Field,
        rng: &mut R,
    ) -> Agent {
        let animation = Animation::new(Arc::clone(&self.wolf_frames), self.wolf.frame_interval);
        let wolf = Wolf::new(animation, self.wolf.starvation_ticks);
        let body = Body::new(x, y, self.wolf.width, self.wolf.height);
        self.walking(id, body, self.wolf.speed, Role::Wolf(wolf), field, rng)
    }

    /// A wolf at a uniformly random spot that fits inside the field.
    pub fn random_wolf<R: Rng + ?Sized>(&self, id: AgentId, field: Field, rng: &mut R) -> Agent {
        let (x, y) = random_spot(field, self.wolf.width, self.wolf.height, rng);
        self.wolf(id, x, y, field, rng)
    }

    /// The shepherd, standing still at the field center.
    pub fn shepherd(&self, id: AgentId, field: Field) -> Agent {
        let (x, y) = field.center();
        let body = Body::new(x, y, self.shepherd.width, self.shepherd.height);
        let motion = Motion::new(self.shepherd.speed, self.bias);
        Agent::new(
            id,
            body,
            motion,
            Role::Shepherd(Shepherd::new(self.shepherd_sprite)),
        )
    }

    fn walking<R: Rng + ?Sized>(
        &self,
        id: AgentId,
        body: Body,
        speed: i32,
        role: Role,
        field: Field,
        rng: &mut R,
    ) -> Agent {
        let mut motion = Motion::new(speed, self.bias);
        motion.randomize(&body, field, rng);
        Agent::new(id, body, motion, role)
    }
}

/// Uniform top-left corner with `x` in `[0, W - w)` and `y` in `[0, H - h)`.
fn random_spot<R: Rng + ?Sized>(field: Field, width: i32, height: i32, rng: &mut R) -> (i32, i32) {
    let x = rng.random_range(0..(field.width - width).max(1));
    let y = rng.random_range(0..(field.height - height).max(1));
    (x, y)
}
