//! Shared fixtures for unit tests.

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::agent::{Agent, AgentId, Gender};
use crate::animation::FrameSet;
use crate::backend::SpriteId;
use crate::bestiary::Bestiary;
use crate::config::SimConfig;
use crate::context::TickContext;
use crate::event::EventLog;
use crate::geometry::Field;
use crate::headless::HeadlessBackend;
use crate::world::World;

/// `n` distinct frames per heading.
pub(crate) fn frames(n: u32) -> Arc<FrameSet> {
    let heading = |h: u32| (0..n).map(|i| SpriteId(h * 100 + i)).collect::<Vec<_>>();
    Arc::new(FrameSet::new([heading(0), heading(1), heading(2), heading(3)]).unwrap())
}

/// A default-config bestiary, a headless backend, and a seeded RNG.
pub(crate) struct Harness {
    pub rng: StdRng,
    pub backend: HeadlessBackend,
    pub events: EventLog,
    pub field: Field,
    pub tick: u64,
    bestiary: Bestiary,
}

impl Harness {
    pub fn new(seed: u64) -> Self {
        let config = SimConfig::default();
        let mut backend = HeadlessBackend::new(config.tick_rate);
        let bestiary = Bestiary::load(&config, &mut backend).unwrap();
        Self {
            rng: StdRng::seed_from_u64(seed),
            backend,
            events: EventLog::new(0),
            field: config.field,
            tick: 1,
            bestiary,
        }
    }

    pub fn sheep(&mut self, id: u64, x: i32, y: i32, gender: Gender) -> Agent {
        self.bestiary
            .sheep(AgentId(id), x, y, gender, self.field, &mut self.rng)
    }

    pub fn wolf(&mut self, id: u64, x: i32, y: i32) -> Agent {
        self.bestiary
            .wolf(AgentId(id), x, y, self.field, &mut self.rng)
    }

    pub fn shepherd(&mut self, id: u64) -> Agent {
        self.bestiary.shepherd(AgentId(id), self.field)
    }

    /// An empty world sharing this harness's bestiary.
    pub fn world(&self) -> World {
        World::new(self.field, self.bestiary.clone())
    }

    pub fn ctx(&mut self) -> TickContext<'_> {
        TickContext::new(
            self.tick,
            self.field,
            SimConfig::default().flee_radius,
            &mut self.rng,
            &mut self.backend,
            &mut self.events,
        )
    }
}
