use crate::animation::{Animation, Heading};
use crate::context::TickContext;
use crate::tags::{Tags, tag};

use super::{Agent, Gender, Role};

/// Sheep state: animation plus the mating cooldown.
#[derive(Debug, Clone)]
pub struct Sheep {
    gender: Gender,
    animation: Animation,
    cooldown: i32,
    cooldown_reset: i32,
}

impl Sheep {
    /// A newborn sheep. The cooldown starts at zero; newborns are eligible to mate.
    pub fn new(gender: Gender, animation: Animation, cooldown_reset: i32) -> Self {
        Self {
            gender,
            animation,
            cooldown: 0,
            cooldown_reset,
        }
    }

    /// Fixed at birth.
    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Walk cycle for the current heading.
    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    /// Ticks until mating eligibility returns (meaningless while eligible).
    pub fn cooldown(&self) -> i32 {
        self.cooldown
    }

    /// Override the cooldown, e.g. to stage an already-aged sheep.
    pub fn set_cooldown(&mut self, cooldown: i32) {
        self.cooldown = cooldown;
    }

    /// Age the mating cooldown by one tick.
    ///
    /// An ineligible sheep whose cooldown sits at exactly zero regains
    /// `canprocreate`. An ineligible sheep with a negative cooldown has just
    /// mated, so the cooldown restarts from the full reset value.
    pub fn update_cooldown(&mut self, tags: &mut Tags) {
        if !tags.has(tag::CAN_PROCREATE) {
            if self.cooldown == 0 {
                tags.add(tag::CAN_PROCREATE);
            } else if self.cooldown < 0 {
                self.cooldown = self.cooldown_reset;
            }
        }
        self.cooldown -= 1;
    }
}

impl Agent {
    pub(super) fn update_sheep(&mut self, ctx: &mut TickContext<'_>) {
        let Role::Sheep(sheep) = &mut self.role else {
            return;
        };
        self.motion.step(&mut self.body, ctx.field, ctx.rng);
        let (vx, vy) = self.motion.velocity();
        sheep.animation.advance(Heading::from_velocity(vx, vy));
        ctx.surface
            .draw_sprite(sheep.animation.current(), self.body.x, self.body.y);
        sheep.update_cooldown(&mut self.tags);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Harness, frames};

    fn ewe() -> Sheep {
        Sheep::new(Gender::Female, Animation::new(frames(2), 10), 500)
    }

    #[test]
    fn zero_cooldown_grants_eligibility_on_next_update() {
        let mut sheep = ewe();
        let mut tags = Tags::new();
        sheep.update_cooldown(&mut tags);
        assert!(tags.has(tag::CAN_PROCREATE));
    }

    #[test]
    fn eligible_sheep_keeps_counting_down() {
        let mut sheep = ewe();
        let mut tags: Tags = [tag::CAN_PROCREATE].into_iter().collect();
        for _ in 0..3 {
            sheep.update_cooldown(&mut tags);
        }
        assert_eq!(sheep.cooldown(), -3);
        assert!(tags.has(tag::CAN_PROCREATE));
    }

    #[test]
    fn mating_restarts_full_cooldown() {
        let mut sheep = ewe();
        sheep.set_cooldown(-40);
        let mut tags = Tags::new();

        sheep.update_cooldown(&mut tags);
        assert_eq!(sheep.cooldown(), 499);
        assert!(!tags.has(tag::CAN_PROCREATE));

        for _ in 0..499 {
            sheep.update_cooldown(&mut tags);
        }
        assert_eq!(sheep.cooldown(), 0);
        assert!(!tags.has(tag::CAN_PROCREATE));

        sheep.update_cooldown(&mut tags);
        assert!(tags.has(tag::CAN_PROCREATE));
    }

    #[test]
    fn update_moves_animates_and_draws() {
        let mut harness = Harness::new(11);
        let mut agent = harness.sheep(1, 300, 300, Gender::Male);
        let before = agent.position();
        let mut ctx = harness.ctx();
        agent.update(&mut ctx);

        assert_ne!(agent.position(), before);
        assert_eq!(agent.motion.speed(), 3);
        let Role::Sheep(sheep) = agent.role() else {
            panic!("not a sheep");
        };
        assert_eq!(sheep.animation().frame_index(), 1);
        assert_eq!(harness.backend.sprites_drawn(), 1);
    }
}
