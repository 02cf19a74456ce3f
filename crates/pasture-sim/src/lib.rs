//! Tick-based pasture simulation: sheep, wolves, and a shepherd.
//!
//! The engine owns the agent model (tags, collision geometry, velocity
//! control, sprite animation) and the per-tick world pipeline. Drawing,
//! image loading, keyboard polling, and frame pacing are delegated to a
//! [`Backend`]; a [`HeadlessBackend`] ships with the crate for CLI runs
//! and tests.

/// Agents and their species-specific policies.
pub mod agent;
/// Keyed multi-frame sprite animation.
pub mod animation;
/// The draw/input/pacing contract the engine calls into.
pub mod backend;
/// Species templates that construct agents from loaded art.
pub mod bestiary;
/// Tick counter for the driver.
pub mod clock;
/// Configuration types for simulation runs.
pub mod config;
/// Mutable context passed to agents each tick.
pub mod context;
/// Error types for the simulation crate.
pub mod error;
/// Simulation event types and the event log.
pub mod event;
/// Collision boxes, distances, and field bounds.
pub mod geometry;
/// Backend that never opens a window.
pub mod headless;
/// Bounded velocity, random walk, seek, and flee.
pub mod motion;
/// Top-level simulation driver.
pub mod simulation;
/// Behavioral state tags.
pub mod tags;
/// The agent collection and its tick pipeline.
pub mod world;

#[cfg(test)]
mod testing;

/// Re-exports of agent types.
pub use agent::{Agent, AgentId, Gender, Species};
/// Re-exports of the backend contract.
pub use backend::{Backend, Direction, FrameLoader, InputSource, Renderer, SpriteId, Surface};
/// Re-export of [`bestiary::Bestiary`].
pub use bestiary::Bestiary;
/// Re-export of [`config::SimConfig`].
pub use config::SimConfig;
/// Re-exports of [`error::SimError`] and [`error::SimResult`].
pub use error::{SimError, SimResult};
/// Re-exports of [`event::EventLog`], [`event::SimEvent`], and [`event::SimEventKind`].
pub use event::{EventLog, SimEvent, SimEventKind};
/// Re-export of [`headless::HeadlessBackend`].
pub use headless::HeadlessBackend;
/// Re-exports of the driver types.
pub use simulation::{RunSummary, Simulation, StopReason};
/// Re-exports of [`world::World`] and [`world::TickReport`].
pub use world::{TickReport, World};
/// Re-export of [`context::EventTally`].
pub use context::EventTally;
