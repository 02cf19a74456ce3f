use rand::rngs::StdRng;
use serde::Serialize;

use crate::backend::Surface;
use crate::event::{EventLog, SimEvent, SimEventKind};
use crate::geometry::Field;

/// Per-kind event counts for one tick. Unlike the event log these are
/// never trimmed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EventTally {
    /// Sheep caught by wolves.
    pub kills: u64,
    /// Wolves that ran out of time.
    pub starvations: u64,
    /// Pregnancies started.
    pub matings: u64,
    /// Lambs added in the spawn phase.
    pub births: u64,
}

impl EventTally {
    fn count(&mut self, kind: &SimEventKind) {
        match kind {
            SimEventKind::Killed { .. } => self.kills += 1,
            SimEventKind::Starved { .. } => self.starvations += 1,
            SimEventKind::Mated { .. } => self.matings += 1,
            SimEventKind::Born { .. } => self.births += 1,
        }
    }
}

/// Mutable context passed to every agent during a tick.
pub struct TickContext<'a> {
    /// The tick being run, starting at 1.
    pub tick: u64,
    /// Bounds every move is checked against.
    pub field: Field,
    /// Edge distance below which prey flees a wolf.
    pub flee_radius: i32,
    /// The simulation's single random source.
    pub rng: &'a mut StdRng,
    /// Draw target and keyboard state.
    pub surface: &'a mut dyn Surface,
    /// Where [`TickContext::emit`] records events.
    pub events: &'a mut EventLog,
    /// Events emitted through this context so far.
    pub tally: EventTally,
}

impl<'a> TickContext<'a> {
    /// Start a tick with an empty tally.
    pub fn new(
        tick: u64,
        field: Field,
        flee_radius: i32,
        rng: &'a mut StdRng,
        surface: &'a mut dyn Surface,
        events: &'a mut EventLog,
    ) -> Self {
        Self {
            tick,
            field,
            flee_radius,
            rng,
            surface,
            events,
            tally: EventTally::default(),
        }
    }

    /// Emit a simulation event at the current tick.
    pub fn emit(&mut self, kind: SimEventKind, description: impl Into<String>) {
        self.tally.count(&kind);
        self.events.push(SimEvent::new(self.tick, kind, description));
    }
}
