use crate::backend::{Direction, SpriteId};
use crate::context::TickContext;

use super::Agent;

/// The player-steered shepherd. Draws a single still sprite.
#[derive(Debug, Clone)]
pub struct Shepherd {
    sprite: SpriteId,
}

impl Shepherd {
    /// A shepherd drawn with `sprite`.
    pub fn new(sprite: SpriteId) -> Self {
        Self { sprite }
    }

    /// The one sprite the shepherd is drawn with.
    pub fn sprite(&self) -> SpriteId {
        self.sprite
    }
}

/// Full speed along one axis: `-t` for the negative key, `t` for the
/// positive one, zero when neither is held. The negative key wins a tie.
fn axis(ctx: &TickContext<'_>, negative: Direction, positive: Direction, t: i32) -> i32 {
    if ctx.surface.is_key_down(negative) {
        -t
    } else if ctx.surface.is_key_down(positive) {
        t
    } else {
        0
    }
}

impl Agent {
    pub(super) fn update_shepherd(&mut self, ctx: &mut TickContext<'_>) {
        let t = self.motion.total_speed();
        let vx = axis(ctx, Direction::Left, Direction::Right, t);
        let vy = axis(ctx, Direction::Up, Direction::Down, t);
        self.motion.set_velocity(vx, vy);

        if self.motion.can_move_x(&self.body, ctx.field) {
            self.body.x += vx;
        }
        if self.motion.can_move_y(&self.body, ctx.field) {
            self.body.y += vy;
        }
        self.draw(ctx);
    }
}
