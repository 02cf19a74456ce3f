use crate::animation::{Animation, Heading};
use crate::context::TickContext;
use crate::event::SimEventKind;
use crate::tags::{Tags, tag};

use super::interaction::PreyScan;
use super::{Agent, Role};

/// Wolf state: animation plus the starvation countdown.
#[derive(Debug, Clone)]
pub struct Wolf {
    animation: Animation,
    ticks_left: i32,
    budget: i32,
}

impl Wolf {
    /// A fed wolf with `budget` ticks to live without eating.
    pub fn new(animation: Animation, budget: i32) -> Self {
        Self {
            animation,
            ticks_left: budget,
            budget,
        }
    }

    /// Run cycle for the current heading.
    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    /// Ticks left before starving.
    pub fn ticks_left(&self) -> i32 {
        self.ticks_left
    }

    /// Override the countdown, e.g. to stage a hungry wolf.
    pub fn set_ticks_left(&mut self, ticks: i32) {
        self.ticks_left = ticks;
    }

    /// Count down one tick of hunger. Eating this tick (the `eat` tag) is
    /// consumed and refills the budget. Returns `true` if the wolf starved
    /// on this call.
    pub fn update_starvation(&mut self, tags: &mut Tags) -> bool {
        self.ticks_left -= 1;
        if tags.remove(tag::EAT) {
            self.ticks_left = self.budget;
            false
        } else if self.ticks_left <= 0 {
            tags.add(tag::DEAD)
        } else {
            false
        }
    }
}

impl Agent {
    /// Consider `prey` as this wolf's target for the current scan.
    ///
    /// The wolf re-targets whenever `prey` is the first candidate or strictly
    /// closer than the best one so far. Non-wolves ignore the call.
    pub fn choose_prey(&mut self, prey: &Agent, scan: &mut PreyScan, ctx: &mut TickContext<'_>) {
        if !self.is_wolf() {
            return;
        }
        let distance = self.distance_to(prey);
        if scan.offer(distance) {
            self.seek(prey.body.box_origin(), ctx.field, ctx.rng);
        }
    }

    pub(super) fn update_wolf(&mut self, ctx: &mut TickContext<'_>) {
        let Role::Wolf(wolf) = &mut self.role else {
            return;
        };
        self.motion.step(&mut self.body, ctx.field, ctx.rng);
        let (vx, vy) = self.motion.velocity();
        wolf.animation.advance(Heading::from_velocity(vx, vy));
        ctx.surface
            .draw_sprite(wolf.animation.current(), self.body.x, self.body.y);

        if wolf.update_starvation(&mut self.tags) {
            tracing::debug!(wolf = %self.id, "wolf starved");
            ctx.emit(
                SimEventKind::Starved { wolf: self.id },
                format!("wolf {} starved", self.id),
            );
        }
    }
}
