//! Agents: sheep, wolves, and the shepherd.
//!
//! Every agent is the same composition of tags, a [`Body`], and a
//! [`Motion`] controller. What differs per species lives in the closed
//! [`Role`] enum: sheep and wolves carry an animation plus a lifecycle
//! counter, the shepherd carries a single sprite and follows the keyboard.

mod interaction;
mod sheep;
mod shepherd;
mod wolf;

use std::fmt;

use rand::Rng;
use serde::Serialize;

pub use interaction::{PreyScan, interact};
pub use sheep::Sheep;
pub use shepherd::Shepherd;
pub use wolf::Wolf;

use crate::backend::SpriteId;
use crate::context::TickContext;
use crate::geometry::{Body, Field};
use crate::motion::Motion;
use crate::tags::{Tags, tag};

/// Stable identifier for an agent, assigned by the world and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct AgentId(pub u64);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which kind of animal (or person) an agent is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    /// Prey that flees wolves and breeds.
    Sheep,
    /// Predator that hunts prey and starves without it.
    Wolf,
    /// The keyboard-driven herder.
    Shepherd,
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sheep => write!(f, "sheep"),
            Self::Wolf => write!(f, "wolf"),
            Self::Shepherd => write!(f, "shepherd"),
        }
    }
}

/// Sheep gender, mirrored into the `male`/`female` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// A ram; initiates mating.
    Male,
    /// A ewe; carries the lamb.
    Female,
}

impl Gender {
    /// Fair coin flip.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Self::Male
        } else {
            Self::Female
        }
    }

    /// The tag this gender sets.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Male => tag::MALE,
            Self::Female => tag::FEMALE,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Species-specific state and behavior.
#[derive(Debug, Clone)]
pub enum Role {
    /// Gender, animation, and breeding cooldown.
    Sheep(Sheep),
    /// Animation and starvation countdown.
    Wolf(Wolf),
    /// A single still sprite.
    Shepherd(Shepherd),
}

/// A live participant in the world.
#[derive(Debug, Clone)]
pub struct Agent {
    id: AgentId,
    /// Behavioral state.
    pub tags: Tags,
    /// Position and sprite size.
    pub body: Body,
    /// Velocity controller.
    pub motion: Motion,
    role: Role,
}

impl Agent {
    /// Assemble an agent from its parts. Identity tags are added from the role.
    pub fn new(id: AgentId, body: Body, motion: Motion, role: Role) -> Self {
        let mut tags = Tags::new();
        match &role {
            Role::Sheep(sheep) => {
                tags.add(tag::SHEEP);
                tags.add(tag::PREY);
                tags.add(tag::CAN_PROCREATE);
                tags.add(sheep.gender().tag());
            }
            Role::Wolf(_) => {
                tags.add(tag::WOLF);
            }
            Role::Shepherd(_) => {
                tags.add(tag::SHEPHERD);
            }
        }
        Self {
            id,
            tags,
            body,
            motion,
            role,
        }
    }

    /// World-assigned identifier.
    pub fn id(&self) -> AgentId {
        self.id
    }

    /// Species-specific state.
    pub fn role(&self) -> &Role {
        &self.role
    }

    /// Mutable species-specific state.
    pub fn role_mut(&mut self) -> &mut Role {
        &mut self.role
    }

    /// The species, derived from the role.
    pub fn species(&self) -> Species {
        match self.role {
            Role::Sheep(_) => Species::Sheep,
            Role::Wolf(_) => Species::Wolf,
            Role::Shepherd(_) => Species::Shepherd,
        }
    }

    /// Return `true` for wolves, the only hunters.
    pub fn is_wolf(&self) -> bool {
        matches!(self.role, Role::Wolf(_))
    }

    /// Return `true` once tagged for the next cull.
    pub fn is_dead(&self) -> bool {
        self.tags.has(tag::DEAD)
    }

    /// Sprite position (top-left corner).
    pub fn position(&self) -> (i32, i32) {
        (self.body.x, self.body.y)
    }

    /// Pending per-tick displacement.
    pub fn velocity(&self) -> (i32, i32) {
        self.motion.velocity()
    }

    /// Gender, for sheep.
    pub fn gender(&self) -> Option<Gender> {
        match &self.role {
            Role::Sheep(sheep) => Some(sheep.gender()),
            _ => None,
        }
    }

    /// The sprite the renderer will draw for this agent.
    pub fn sprite(&self) -> SpriteId {
        match &self.role {
            Role::Sheep(sheep) => sheep.animation().current(),
            Role::Wolf(wolf) => wolf.animation().current(),
            Role::Shepherd(shepherd) => shepherd.sprite(),
        }
    }

    /// Nearest-edge distance between collision boxes. See [`Body::distance_to`].
    pub fn distance_to(&self, other: &Agent) -> i32 {
        self.body.distance_to(&other.body)
    }

    /// Collision-box overlap; touching counts.
    pub fn overlaps(&self, other: &Agent) -> bool {
        self.body.overlaps(&other.body)
    }

    /// Head for a point, keeping the speed budget.
    pub fn seek<R: Rng + ?Sized>(&mut self, target: (i32, i32), field: Field, rng: &mut R) {
        self.motion.seek(&self.body, target, field, rng);
    }

    /// Head away from a point, keeping the speed budget.
    pub fn flee<R: Rng + ?Sized>(&mut self, target: (i32, i32), field: Field, rng: &mut R) {
        self.motion.flee(&self.body, target, field, rng);
    }

    /// Per-tick update: move, animate, draw, and age.
    pub fn update(&mut self, ctx: &mut TickContext<'_>) {
        match self.species() {
            Species::Sheep => self.update_sheep(ctx),
            Species::Wolf => self.update_wolf(ctx),
            Species::Shepherd => self.update_shepherd(ctx),
        }
    }

    fn draw(&self, ctx: &mut TickContext<'_>) {
        ctx.surface.draw_sprite(self.sprite(), self.body.x, self.body.y);
    }
}
