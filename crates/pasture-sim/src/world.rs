//! The agent collection and its tick pipeline.

use rand::Rng;
use serde::Serialize;

use crate::agent::{Agent, AgentId, Gender, PreyScan, Species, interact};
use crate::bestiary::Bestiary;
use crate::context::TickContext;
use crate::event::SimEventKind;
use crate::geometry::Field;
use crate::tags::tag;

/// What one tick changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TickReport {
    /// The tick this report covers.
    pub tick: u64,
    /// Lambs spawned.
    pub births: usize,
    /// Agents culled, from any cause.
    pub deaths: usize,
    /// Sheep caught.
    pub kills: u64,
    /// Wolves that starved.
    pub starvations: u64,
    /// Pregnancies started.
    pub matings: u64,
    /// Sheep alive after the tick.
    pub sheep: usize,
    /// Wolves alive after the tick.
    pub wolves: usize,
}

/// Owns every live agent in insertion order and runs the tick pipeline.
#[derive(Debug, Clone)]
pub struct World {
    field: Field,
    bestiary: Bestiary,
    agents: Vec<Agent>,
    next_id: u64,
}

impl World {
    /// An empty world on `field`, building agents from `bestiary`.
    pub fn new(field: Field, bestiary: Bestiary) -> Self {
        Self {
            field,
            bestiary,
            agents: Vec::new(),
            next_id: 0,
        }
    }

    /// Bounds agents move within.
    pub fn field(&self) -> Field {
        self.field
    }

    /// Hand out the next unused id.
    fn next_id(&mut self) -> AgentId {
        let id = AgentId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append an agent. Only ids from [`World::next_id`] reach here, so no
    /// agent can appear twice.
    fn add(&mut self, agent: Agent) -> AgentId {
        let id = agent.id();
        self.next_id = self.next_id.max(id.0 + 1);
        self.agents.push(agent);
        id
    }

    /// Place a sheep of `gender` with its sprite corner at `(x, y)`.
    pub fn add_sheep<R: Rng + ?Sized>(
        &mut self,
        x: i32,
        y: i32,
        gender: Gender,
        rng: &mut R,
    ) -> AgentId {
        let id = self.next_id();
        let sheep = self.bestiary.sheep(id, x, y, gender, self.field, rng);
        self.add(sheep)
    }

    /// Place a fed wolf with its sprite corner at `(x, y)`.
    pub fn add_wolf<R: Rng + ?Sized>(&mut self, x: i32, y: i32, rng: &mut R) -> AgentId {
        let id = self.next_id();
        let wolf = self.bestiary.wolf(id, x, y, self.field, rng);
        self.add(wolf)
    }

    /// Place the shepherd at the field center.
    pub fn add_shepherd(&mut self) -> AgentId {
        let id = self.next_id();
        let shepherd = self.bestiary.shepherd(id, self.field);
        self.add(shepherd)
    }

    /// Initial stocking: randomly placed sheep, then wolves, then the shepherd.
    pub fn populate<R: Rng + ?Sized>(&mut self, sheep: usize, wolves: usize, rng: &mut R) {
        for _ in 0..sheep {
            let id = self.next_id();
            let agent = self.bestiary.random_sheep(id, self.field, rng);
            self.add(agent);
        }
        for _ in 0..wolves {
            let id = self.next_id();
            let agent = self.bestiary.random_wolf(id, self.field, rng);
            self.add(agent);
        }
        self.add_shepherd();
        tracing::debug!(sheep, wolves, "stocked pasture");
    }

    /// Live agents in insertion order.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Number of live agents, shepherd included.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Return `true` if no agent is alive.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Live agents of one species.
    pub fn count(&self, species: Species) -> usize {
        self.agents
            .iter()
            .filter(|a| a.species() == species)
            .count()
    }

    /// Look up a live agent.
    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id() == id)
    }

    /// Look up a live agent for staging or inspection.
    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.iter_mut().find(|a| a.id() == id)
    }

    /// Run one full tick: background, interact and update, cull, spawn.
    pub fn tick(&mut self, ctx: &mut TickContext<'_>) -> TickReport {
        ctx.surface.draw_background();
        self.interact_pass(ctx);
        let deaths = self.cull_dead();
        let births = self.spawn_newborns(ctx);

        TickReport {
            tick: ctx.tick,
            births,
            deaths,
            kills: ctx.tally.kills,
            starvations: ctx.tally.starvations,
            matings: ctx.tally.matings,
            sheep: self.count(Species::Sheep),
            wolves: self.count(Species::Wolf),
        }
    }

    /// Each agent in order interacts with every other agent, then updates.
    ///
    /// Changes are visible immediately: later pairs see tags and velocities
    /// set by earlier ones in the same pass.
    fn interact_pass(&mut self, ctx: &mut TickContext<'_>) {
        for i in 0..self.agents.len() {
            let mut scan = PreyScan::default();
            for j in 0..self.agents.len() {
                if i == j {
                    continue;
                }
                let (actor, other) = pair_mut(&mut self.agents, i, j);
                interact(actor, other, &mut scan, ctx);
            }
            self.agents[i].update(ctx);
        }
    }

    /// Remove every agent tagged `dead`. Returns how many were removed.
    pub fn cull_dead(&mut self) -> usize {
        let before = self.agents.len();
        self.agents.retain(|a| {
            let dead = a.is_dead();
            if dead {
                tracing::debug!(agent = %a.id(), species = %a.species(), "removed");
            }
            !dead
        });
        before - self.agents.len()
    }

    /// Every pregnant agent gives birth to one sheep at its own position.
    /// Newborns are not themselves checked.
    pub fn spawn_newborns(&mut self, ctx: &mut TickContext<'_>) -> usize {
        let mothers: Vec<(AgentId, (i32, i32))> = self
            .agents
            .iter_mut()
            .filter_map(|a| {
                a.tags
                    .remove(tag::PREGNANT)
                    .then_some((a.id(), a.position()))
            })
            .collect();

        for &(mother, (x, y)) in &mothers {
            let gender = Gender::random(ctx.rng);
            let child = self.add_sheep(x, y, gender, ctx.rng);
            tracing::debug!(%child, %mother, %gender, "lamb born");
            ctx.emit(
                SimEventKind::Born { child, mother },
                format!("sheep {child} born to {mother}"),
            );
        }
        mothers.len()
    }
}

/// Two distinct elements of a slice, mutably, in the order asked for.
fn pair_mut(agents: &mut [Agent], a: usize, b: usize) -> (&mut Agent, &mut Agent) {
    debug_assert_ne!(a, b);
    if a < b {
        let (left, right) = agents.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = agents.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}
