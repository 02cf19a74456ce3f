//! Integration scenarios for the pasture simulation world.

use std::time::Duration;

use pasture_sim::agent::Role;
use pasture_sim::context::TickContext;
use pasture_sim::tags::tag;
use pasture_sim::{
    Bestiary, EventLog, Gender, HeadlessBackend, SimConfig, SimEventKind, Simulation, Species,
    World,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

struct Pasture {
    world: World,
    rng: StdRng,
    backend: HeadlessBackend,
    events: EventLog,
    tick: u64,
}

impl Pasture {
    fn new(seed: u64) -> Self {
        let config = SimConfig::default();
        let mut backend = HeadlessBackend::new(config.tick_rate);
        let bestiary = Bestiary::load(&config, &mut backend).unwrap();
        Self {
            world: World::new(config.field, bestiary),
            rng: StdRng::seed_from_u64(seed),
            backend,
            events: EventLog::new(0),
            tick: 0,
        }
    }

    fn tick(&mut self) -> pasture_sim::TickReport {
        self.tick += 1;
        let mut ctx = TickContext::new(
            self.tick,
            self.world.field(),
            200,
            &mut self.rng,
            &mut self.backend,
            &mut self.events,
        );
        self.world.tick(&mut ctx)
    }

    /// Put a sheep past its first tick, so the cooldown is already counting.
    fn aged_sheep(&mut self, x: i32, y: i32, gender: Gender) -> pasture_sim::AgentId {
        let id = self.world.add_sheep(x, y, gender, &mut self.rng);
        if let Some(Role::Sheep(sheep)) = self.world.get_mut(id).map(|a| a.role_mut()) {
            sheep.set_cooldown(-1);
        }
        id
    }
}

#[test]
fn wolf_eats_overlapping_sheep_and_cull_removes_it() {
    let mut pasture = Pasture::new(1);
    let wolf = pasture.world.add_wolf(0, 0, &mut pasture.rng);
    let sheep = pasture
        .world
        .add_sheep(40, 20, Gender::Female, &mut pasture.rng);

    let report = pasture.tick();

    assert!(pasture.world.get(sheep).is_none());
    assert_eq!(report.deaths, 1);
    assert_eq!(report.kills, 1);
    assert_eq!(report.sheep, 0);
    // The meal was consumed in the wolf's own update.
    let wolf = pasture.world.get(wolf).unwrap();
    assert!(!wolf.tags.has(tag::EAT));
    let Role::Wolf(w) = wolf.role() else {
        panic!("not a wolf");
    };
    assert_eq!(w.ticks_left(), 500);
}

#[test]
fn mating_produces_one_lamb_at_the_mother() {
    let mut pasture = Pasture::new(2);
    let ram = pasture.aged_sheep(300, 300, Gender::Male);
    let ewe = pasture.aged_sheep(310, 305, Gender::Female);

    let report = pasture.tick();

    assert_eq!(report.births, 1);
    assert_eq!(report.matings, 1);
    assert_eq!(pasture.world.len(), 3);

    let mother = pasture.world.get(ewe).unwrap();
    let lamb = &pasture.world.agents()[2];
    assert_eq!(lamb.position(), mother.position());
    assert_eq!(lamb.species(), Species::Sheep);
    assert!(lamb.tags.has(tag::CAN_PROCREATE));
    assert!(!mother.tags.has(tag::PREGNANT));
    assert!(!mother.tags.has(tag::CAN_PROCREATE));
    assert!(!pasture.world.get(ram).unwrap().tags.has(tag::CAN_PROCREATE));

    let born: Vec<_> = pasture
        .events
        .events()
        .iter()
        .filter(|e| matches!(e.kind, SimEventKind::Born { .. }))
        .collect();
    assert_eq!(born.len(), 1);
}

#[test]
fn partners_regain_eligibility_after_the_full_cooldown() {
    let mut pasture = Pasture::new(3);
    let ram = pasture.aged_sheep(300, 300, Gender::Male);
    pasture.aged_sheep(310, 305, Gender::Female);
    pasture.tick();

    // Reset to 500 on the mating tick, then 499 further updates reach zero.
    for _ in 0..499 {
        pasture.tick();
        assert!(!pasture.world.get(ram).unwrap().tags.has(tag::CAN_PROCREATE));
    }
    pasture.tick();
    assert!(pasture.world.get(ram).unwrap().tags.has(tag::CAN_PROCREATE));
}

/// Newly placed sheep start with a zero cooldown, so both partners get
/// their tag back in the update right after mating and breed again on the
/// next tick. Only then does the full cooldown apply.
#[test]
fn fresh_pair_breeds_on_two_consecutive_ticks() {
    let mut pasture = Pasture::new(5);
    let ram = pasture.world.add_sheep(300, 300, Gender::Male, &mut pasture.rng);
    let ewe = pasture
        .world
        .add_sheep(301, 300, Gender::Female, &mut pasture.rng);

    let first = pasture.tick();
    assert_eq!((first.matings, first.births), (1, 1));
    assert!(pasture.world.get(ram).unwrap().tags.has(tag::CAN_PROCREATE));
    assert!(pasture.world.get(ewe).unwrap().tags.has(tag::CAN_PROCREATE));

    let second = pasture.tick();
    assert_eq!((second.matings, second.births), (1, 1));
    for id in [ram, ewe] {
        let parent = pasture.world.get(id).unwrap();
        assert!(!parent.tags.has(tag::CAN_PROCREATE));
        let Role::Sheep(sheep) = parent.role() else {
            panic!("not a sheep");
        };
        assert_eq!(sheep.cooldown(), 499);
    }
}

/// Place a sheep between two wolves that are both inside the flee radius,
/// inserting `first_x` before `second_x`, and return where the sheep ends up.
fn sheep_between_wolves(first_x: i32, second_x: i32) -> ((i32, i32), (i32, i32)) {
    let mut pasture = Pasture::new(6);
    let sheep = pasture
        .world
        .add_sheep(300, 300, Gender::Female, &mut pasture.rng);
    pasture.world.add_wolf(first_x, 300, &mut pasture.rng);
    pasture.world.add_wolf(second_x, 300, &mut pasture.rng);

    let report = pasture.tick();
    assert_eq!(report.kills, 0);
    let sheep = pasture.world.get(sheep).unwrap();
    (sheep.position(), sheep.velocity())
}

#[test]
fn sheep_flees_the_last_wolf_in_range() {
    // Right-hand wolf first, left-hand wolf last: run right.
    assert_eq!(sheep_between_wolves(420, 150), ((303, 300), (3, 0)));
    // Same wolves, opposite order: run left.
    assert_eq!(sheep_between_wolves(150, 420), ((297, 300), (-3, 0)));
}

#[test]
fn lonely_wolf_starves_and_is_removed() {
    let mut pasture = Pasture::new(4);
    let wolf = pasture.world.add_wolf(300, 300, &mut pasture.rng);

    for _ in 0..499 {
        let report = pasture.tick();
        assert_eq!(report.wolves, 1);
    }
    let report = pasture.tick();
    assert_eq!(report.starvations, 1);
    assert_eq!(report.deaths, 1);
    assert!(pasture.world.get(wolf).is_none());
    assert_eq!(
        pasture.events.events_for_agent(wolf)[0].kind,
        SimEventKind::Starved { wolf }
    );
}

#[test]
fn headless_run_honours_duration() {
    let config = SimConfig::default().with_seed(7);
    let mut backend = HeadlessBackend::new(config.tick_rate);
    let mut sim = Simulation::new(config, &mut backend).unwrap();
    sim.populate(20, 3);
    assert_eq!(sim.world().len(), 24);

    let summary = sim.run(&mut backend, Duration::from_secs(3));
    assert_eq!(summary.ticks, 180);
    assert_eq!(
        sim.world().count(Species::Sheep),
        summary.final_sheep,
        "summary reflects the final world"
    );
    assert_eq!(sim.world().count(Species::Shepherd), 1);
}

#[test]
fn missing_media_is_fatal_before_any_tick() {
    let dir = tempfile::tempdir().unwrap();
    let mut backend = HeadlessBackend::new(60).with_asset_root(dir.path());
    let err = Simulation::new(SimConfig::default(), &mut backend).unwrap_err();
    assert!(err.to_string().contains("media/wolfs"));
}
