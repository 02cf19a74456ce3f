use serde::Serialize;

use crate::agent::AgentId;

/// What kind of simulation event occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SimEventKind {
    /// A wolf caught a prey animal.
    Killed {
        /// The wolf.
        predator: AgentId,
        /// The animal that was caught.
        prey: AgentId,
    },
    /// A wolf ran out of time without eating.
    Starved {
        /// The wolf that starved.
        wolf: AgentId,
    },
    /// Two sheep mated; the female is now pregnant.
    Mated {
        /// The male partner.
        male: AgentId,
        /// The female partner.
        female: AgentId,
    },
    /// A lamb was born.
    Born {
        /// The newborn.
        child: AgentId,
        /// The agent that carried it.
        mother: AgentId,
    },
}

impl SimEventKind {
    /// Check whether a given agent is involved in this event.
    pub fn involves(&self, id: AgentId) -> bool {
        match self {
            Self::Killed { predator, prey } => *predator == id || *prey == id,
            Self::Starved { wolf } => *wolf == id,
            Self::Mated { male, female } => *male == id || *female == id,
            Self::Born { child, mother } => *child == id || *mother == id,
        }
    }
}

/// A record of something that happened during simulation.
#[derive(Debug, Clone, Serialize)]
pub struct SimEvent {
    /// The simulation tick when this event occurred.
    pub tick: u64,
    /// The specific kind of event that occurred.
    pub kind: SimEventKind,
    /// A human-readable description of the event.
    pub description: String,
}

impl SimEvent {
    /// Create a new simulation event with the given tick, kind, and description.
    pub fn new(tick: u64, kind: SimEventKind, description: impl Into<String>) -> Self {
        Self {
            tick,
            kind,
            description: description.into(),
        }
    }
}

/// Accumulates events during a simulation run.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<SimEvent>,
    max_events: usize,
}

impl EventLog {
    /// Create a new event log with the given maximum capacity (0 = unlimited).
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Vec::new(),
            max_events,
        }
    }

    /// Append an event, dropping the oldest events if the log exceeds its capacity.
    pub fn push(&mut self, event: SimEvent) {
        self.events.push(event);
        if self.max_events > 0 && self.events.len() > self.max_events {
            let drain_count = self.events.len() - self.max_events;
            self.events.drain(..drain_count);
        }
    }

    /// Return a slice of all recorded events.
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    /// Return all events involving the given agent.
    pub fn events_for_agent(&self, id: AgentId) -> Vec<&SimEvent> {
        self.events.iter().filter(|e| e.kind.involves(id)).collect()
    }

    /// Number of events currently held.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Return `true` if nothing has been recorded (or everything was trimmed).
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
