use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::agent::Species;
use crate::backend::{Backend, FrameLoader, Surface};
use crate::bestiary::Bestiary;
use crate::clock::SimClock;
use crate::config::SimConfig;
use crate::context::TickContext;
use crate::error::SimResult;
use crate::event::EventLog;
use crate::world::{TickReport, World};

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The requested duration elapsed.
    Elapsed,
    /// The backend reported a quit request.
    Quit,
}

/// Totals for a whole run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    /// Ticks completed.
    pub ticks: u64,
    /// Lambs born.
    pub births: u64,
    /// Agents culled.
    pub deaths: u64,
    /// Sheep caught by wolves.
    pub kills: u64,
    /// Wolves that starved.
    pub starvations: u64,
    /// Pregnancies started.
    pub matings: u64,
    /// Sheep alive at the end.
    pub final_sheep: usize,
    /// Most sheep alive after any tick, counting the initial flock.
    pub peak_sheep: usize,
    /// Wolves alive at the end.
    pub final_wolves: usize,
    /// Backend time when the run stopped, in seconds.
    pub elapsed_secs: f64,
    /// Time covered by the ticks that ran, in seconds.
    pub simulated_secs: f64,
    /// Why the run loop exited.
    pub stopped_by: StopReason,
}

impl RunSummary {
    fn start(world: &World) -> Self {
        let sheep = world.count(Species::Sheep);
        Self {
            ticks: 0,
            births: 0,
            deaths: 0,
            kills: 0,
            starvations: 0,
            matings: 0,
            final_sheep: sheep,
            peak_sheep: sheep,
            final_wolves: world.count(Species::Wolf),
            elapsed_secs: 0.0,
            simulated_secs: 0.0,
            stopped_by: StopReason::Elapsed,
        }
    }

    fn record(&mut self, report: &TickReport) {
        self.ticks += 1;
        self.births += report.births as u64;
        self.deaths += report.deaths as u64;
        self.kills += report.kills;
        self.starvations += report.starvations;
        self.matings += report.matings;
        self.final_sheep = report.sheep;
        self.peak_sheep = self.peak_sheep.max(report.sheep);
        self.final_wolves = report.wolves;
    }
}

/// The top-level simulation driver.
///
/// Owns the world, clock, RNG, and event log. Ticks run through whatever
/// [`Surface`] the caller supplies; [`Simulation::run`] adds the pacing and
/// stop checks of a full [`Backend`].
pub struct Simulation {
    world: World,
    clock: SimClock,
    rng: StdRng,
    events: EventLog,
    config: SimConfig,
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("tick", &self.clock.tick())
            .field("agents", &self.world.len())
            .field("events", &self.events.len())
            .finish()
    }
}

impl Simulation {
    /// Validate the configuration and load all art. The world starts empty.
    pub fn new(config: SimConfig, loader: &mut dyn FrameLoader) -> SimResult<Self> {
        config.validate()?;
        let bestiary = Bestiary::load(&config, loader)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        tracing::info!(
            seed = ?config.seed,
            field_width = config.field.width,
            field_height = config.field.height,
            tick_rate = config.tick_rate,
            "simulation ready"
        );

        Ok(Self {
            world: World::new(config.field, bestiary),
            clock: SimClock::new(config.tick_rate),
            rng,
            events: EventLog::new(config.max_events),
            config,
        })
    }

    /// Initial stocking: sheep, then wolves, then the shepherd.
    pub fn populate(&mut self, sheep: usize, wolves: usize) {
        self.world.populate(sheep, wolves, &mut self.rng);
    }

    /// Advance the world by one tick, drawing onto `surface`.
    pub fn tick<S: Surface>(&mut self, surface: &mut S) -> TickReport {
        let tick = self.clock.advance();
        let mut ctx = TickContext::new(
            tick,
            self.world.field(),
            self.config.flee_radius,
            &mut self.rng,
            surface,
            &mut self.events,
        );
        let report = self.world.tick(&mut ctx);
        if report.births > 0 || report.deaths > 0 {
            tracing::debug!(
                tick,
                births = report.births,
                deaths = report.deaths,
                sheep = report.sheep,
                wolves = report.wolves,
                "population changed"
            );
        }
        report
    }

    /// Tick until `duration` of backend time has passed or the backend asks
    /// to quit. Both are checked only between ticks.
    pub fn run<B: Backend>(&mut self, backend: &mut B, duration: Duration) -> RunSummary {
        let mut summary = RunSummary::start(&self.world);
        loop {
            if backend.quit_requested() {
                summary.stopped_by = StopReason::Quit;
                break;
            }
            if backend.elapsed() >= duration {
                break;
            }
            let report = self.tick(backend);
            summary.record(&report);
            backend.present();
        }
        summary.elapsed_secs = backend.elapsed().as_secs_f64();
        summary.simulated_secs = self.clock.simulated().as_secs_f64();

        tracing::info!(
            ticks = summary.ticks,
            births = summary.births,
            deaths = summary.deaths,
            sheep = summary.final_sheep,
            wolves = summary.final_wolves,
            "run finished"
        );
        summary
    }

    /// The agents and the field they live on.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Tick counter and tick length.
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// Kills, starvations, matings, and births recorded so far.
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// The validated configuration this run was built from.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Number of ticks run so far.
    pub fn current_tick(&self) -> u64 {
        self.clock.tick()
    }
}
