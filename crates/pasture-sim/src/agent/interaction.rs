//! Pairwise interaction rules.
//!
//! [`interact`] is called once per ordered pair per tick with the acting
//! agent first. The rules are deliberately one-sided: a wolf only hunts when
//! it is the actor, and a mating only happens when the male is the actor.

use crate::context::TickContext;
use crate::event::SimEventKind;
use crate::tags::tag;

use super::Agent;

/// Nearest-prey bookkeeping for one actor's interaction pass.
///
/// A fresh scan is created for every acting agent, so nothing carries over
/// between agents or ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreyScan {
    best: Option<i32>,
}

impl PreyScan {
    /// Offer a candidate at `distance`. Returns `true` (and remembers it) if
    /// it is the first candidate or strictly closer than the best so far.
    pub fn offer(&mut self, distance: i32) -> bool {
        match self.best {
            Some(best) if distance >= best => false,
            _ => {
                self.best = Some(distance);
                true
            }
        }
    }

    /// Distance to the current target, if any candidate was offered.
    pub fn best_distance(&self) -> Option<i32> {
        self.best
    }
}

/// Apply every interaction rule for `actor` acting on `other`.
///
/// The rules are independent; more than one can fire for the same pair.
/// Only tags and velocities change here.
pub fn interact(
    actor: &mut Agent,
    other: &mut Agent,
    scan: &mut PreyScan,
    ctx: &mut TickContext<'_>,
) {
    if actor.is_wolf() && other.tags.has(tag::PREY) {
        if actor.overlaps(other) {
            actor.tags.add(tag::EAT);
            if other.tags.add(tag::DEAD) {
                tracing::debug!(wolf = %actor.id(), prey = %other.id(), "kill");
                ctx.emit(
                    SimEventKind::Killed {
                        predator: actor.id(),
                        prey: other.id(),
                    },
                    format!("wolf {} killed sheep {}", actor.id(), other.id()),
                );
            }
        } else {
            actor.choose_prey(other, scan, ctx);
        }
    }

    if actor.tags.has(tag::PREY)
        && other.tags.has(tag::WOLF)
        && actor.distance_to(other) < ctx.flee_radius
    {
        actor.flee(other.body.box_origin(), ctx.field, ctx.rng);
    }

    if actor.tags.has(tag::CAN_PROCREATE)
        && other.tags.has(tag::CAN_PROCREATE)
        && actor.tags.has(tag::MALE)
        && other.tags.has(tag::FEMALE)
        && actor.overlaps(other)
    {
        actor.tags.remove(tag::CAN_PROCREATE);
        other.tags.remove(tag::CAN_PROCREATE);
        other.tags.add(tag::PREGNANT);
        tracing::debug!(male = %actor.id(), female = %other.id(), "mating");
        ctx.emit(
            SimEventKind::Mated {
                male: actor.id(),
                female: other.id(),
            },
            format!("sheep {} and {} mated", actor.id(), other.id()),
        );
    }
}
