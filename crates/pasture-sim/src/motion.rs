use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::geometry::{Body, Field};

/// How a random walk picks the sign of its vertical component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalBias {
    /// Always head up unless the top edge forbids it. This is how the
    /// herd has always drifted and is observable behavior.
    #[default]
    Upward,
    /// Flip a fair coin for the vertical sign.
    Fair,
}

/// Bounded 2D velocity with a fixed `|vx| + |vy|` budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motion {
    total_speed: i32,
    vx: i32,
    vy: i32,
    bias: VerticalBias,
}

impl Motion {
    /// Create a stationary controller. Call [`Motion::randomize`] to start walking.
    pub fn new(total_speed: i32, bias: VerticalBias) -> Self {
        Self {
            total_speed: total_speed.max(0),
            vx: 0,
            vy: 0,
            bias,
        }
    }

    /// The fixed `|vx| + |vy|` every randomized or steered velocity spends.
    pub fn total_speed(&self) -> i32 {
        self.total_speed
    }

    /// Current `(vx, vy)`.
    pub fn velocity(&self) -> (i32, i32) {
        (self.vx, self.vy)
    }

    /// Overwrite the velocity without any correction.
    pub fn set_velocity(&mut self, vx: i32, vy: i32) {
        self.vx = vx;
        self.vy = vy;
    }

    /// `|vx| + |vy|`.
    pub fn speed(&self) -> i32 {
        self.vx.abs() + self.vy.abs()
    }

    /// Would the collision box stay inside the field horizontally after this tick's move?
    pub fn can_move_x(&self, body: &Body, field: Field) -> bool {
        let b = body.collision_box();
        let next = b.x + self.vx;
        next >= 0 && next + b.w < field.width
    }

    /// Would the collision box stay inside the field vertically after this tick's move?
    pub fn can_move_y(&self, body: &Body, field: Field) -> bool {
        let b = body.collision_box();
        let next = b.y + self.vy;
        next >= 0 && next + b.h < field.height
    }

    /// Pick a fresh random heading that spends the whole speed budget.
    pub fn randomize<R: Rng + ?Sized>(&mut self, body: &Body, field: Field, rng: &mut R) {
        let t = self.total_speed;
        if t == 0 {
            self.vx = 0;
            self.vy = 0;
            return;
        }

        self.vx = rng.random_range(-t..t);
        if !self.can_move_x(body, field) {
            self.vx = -self.vx;
        }

        let up = match self.bias {
            VerticalBias::Upward => true,
            VerticalBias::Fair => rng.random_bool(0.5),
        };
        let magnitude = t - self.vx.abs();
        self.vy = if up { -magnitude } else { magnitude };
        if !self.can_move_y(body, field) {
            self.vy = -self.vy;
        }
    }

    /// Pull the velocity back into bounds and onto the speed budget.
    ///
    /// Out-of-bounds axes shrink toward zero first, then `vx` (and `vy` if
    /// still needed) shrink until the budget fits. A velocity left below the
    /// budget is thrown away and re-randomized.
    pub fn adjust<R: Rng + ?Sized>(&mut self, body: &Body, field: Field, rng: &mut R) {
        while !self.can_move_x(body, field) && self.vx != 0 {
            self.vx -= self.vx.signum();
        }
        while !self.can_move_y(body, field) && self.vy != 0 {
            self.vy -= self.vy.signum();
        }

        while self.speed() > self.total_speed {
            self.vx -= self.vx.signum();
            if self.speed() > self.total_speed {
                self.vy -= self.vy.signum();
            }
        }

        if self.speed() < self.total_speed {
            self.randomize(body, field, rng);
        }
    }

    /// Head for a point (usually another agent's box origin).
    pub fn seek<R: Rng + ?Sized>(
        &mut self,
        body: &Body,
        target: (i32, i32),
        field: Field,
        rng: &mut R,
    ) {
        let (ox, oy) = body.box_origin();
        self.vx = target.0 - ox;
        self.vy = target.1 - oy;
        self.adjust(body, field, rng);
    }

    /// Head directly away from a point.
    pub fn flee<R: Rng + ?Sized>(
        &mut self,
        body: &Body,
        target: (i32, i32),
        field: Field,
        rng: &mut R,
    ) {
        let (ox, oy) = body.box_origin();
        self.vx = ox - target.0;
        self.vy = oy - target.1;
        self.adjust(body, field, rng);
    }

    /// Apply one tick of movement.
    ///
    /// A velocity that would leave the field on either axis is replaced by a
    /// random one first; the move itself is applied unconditionally.
    pub fn step<R: Rng + ?Sized>(&mut self, body: &mut Body, field: Field, rng: &mut R) {
        if !self.can_move_x(body, field) || !self.can_move_y(body, field) {
            self.randomize(body, field, rng);
        }
        body.x += self.vx;
        body.y += self.vy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sheep_at(x: i32, y: i32) -> Body {
        Body::new(x, y, 68, 60)
    }

    #[test]
    fn randomize_spends_full_budget() {
        let mut rng = StdRng::seed_from_u64(7);
        let body = sheep_at(300, 300);
        let mut motion = Motion::new(3, VerticalBias::Upward);
        for _ in 0..200 {
            motion.randomize(&body, Field::default(), &mut rng);
            assert_eq!(motion.speed(), 3);
        }
    }

    #[test]
    fn upward_bias_heads_up_away_from_top_edge() {
        let mut rng = StdRng::seed_from_u64(1);
        let body = sheep_at(300, 300);
        let mut motion = Motion::new(4, VerticalBias::Upward);
        for _ in 0..100 {
            motion.randomize(&body, Field::default(), &mut rng);
            assert!(motion.velocity().1 <= 0);
        }
    }

    #[test]
    fn upward_bias_flips_at_top_edge() {
        let mut rng = StdRng::seed_from_u64(2);
        // Box top sits at y = 6; any upward step beyond 6 leaves the field.
        let body = sheep_at(300, 0);
        let mut motion = Motion::new(20, VerticalBias::Upward);
        for _ in 0..100 {
            motion.randomize(&body, Field::default(), &mut rng);
            let (_, vy) = motion.velocity();
            assert!(vy >= -6, "vy {vy} would leave the field");
        }
    }

    #[test]
    fn fair_bias_goes_both_ways() {
        let mut rng = StdRng::seed_from_u64(3);
        let body = sheep_at(300, 300);
        let mut motion = Motion::new(4, VerticalBias::Fair);
        let (mut up, mut down) = (false, false);
        for _ in 0..200 {
            motion.randomize(&body, Field::default(), &mut rng);
            match motion.velocity().1 {
                vy if vy < 0 => up = true,
                vy if vy > 0 => down = true,
                _ => {}
            }
        }
        assert!(up && down);
    }

    #[test]
    fn zero_budget_stands_still() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut motion = Motion::new(0, VerticalBias::Upward);
        motion.randomize(&sheep_at(10, 10), Field::default(), &mut rng);
        assert_eq!(motion.velocity(), (0, 0));
    }

    #[test]
    fn adjust_shrinks_over_budget_x_first() {
        let mut rng = StdRng::seed_from_u64(0);
        let body = sheep_at(300, 300);
        let mut motion = Motion::new(4, VerticalBias::Upward);
        motion.set_velocity(10, 2);
        motion.adjust(&body, Field::default(), &mut rng);
        // Alternating x then y: (9,1) (8,0) then x alone down to 4.
        assert_eq!(motion.velocity(), (4, 0));
    }

    #[test]
    fn adjust_rerandomizes_below_budget() {
        let mut rng = StdRng::seed_from_u64(0);
        let body = sheep_at(300, 300);
        let mut motion = Motion::new(4, VerticalBias::Upward);
        motion.set_velocity(1, 1);
        motion.adjust(&body, Field::default(), &mut rng);
        assert_eq!(motion.speed(), 4);
    }

    #[test]
    fn seek_points_at_target() {
        let mut rng = StdRng::seed_from_u64(0);
        let body = sheep_at(300, 300);
        let (ox, oy) = body.box_origin();
        let mut motion = Motion::new(3, VerticalBias::Upward);
        motion.seek(&body, (ox + 100, oy), Field::default(), &mut rng);
        assert_eq!(motion.velocity(), (3, 0));
        motion.flee(&body, (ox + 100, oy), Field::default(), &mut rng);
        assert_eq!(motion.velocity(), (-3, 0));
    }

    #[test]
    fn step_moves_by_velocity() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut body = sheep_at(300, 300);
        let mut motion = Motion::new(3, VerticalBias::Upward);
        motion.set_velocity(2, -1);
        motion.step(&mut body, Field::default(), &mut rng);
        assert_eq!((body.x, body.y), (302, 299));
    }

    #[test]
    fn step_rerandomizes_when_blocked() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut body = sheep_at(0, 300);
        let mut motion = Motion::new(3, VerticalBias::Upward);
        // Box left edge is at 17; -30 would leave the field.
        motion.set_velocity(-30, 0);
        motion.step(&mut body, Field::default(), &mut rng);
        assert_eq!(motion.speed(), 3);
    }

    proptest! {
        #[test]
        fn seek_and_flee_keep_budget(
            x in 0i32..700,
            y in 0i32..600,
            tx in -200i32..1000,
            ty in -200i32..900,
            speed in 1i32..8,
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let body = sheep_at(x, y);
            let field = Field::default();
            let mut motion = Motion::new(speed, VerticalBias::Upward);

            motion.seek(&body, (tx, ty), field, &mut rng);
            prop_assert_eq!(motion.speed(), speed);

            motion.flee(&body, (tx, ty), field, &mut rng);
            prop_assert_eq!(motion.speed(), speed);

            motion.randomize(&body, field, &mut rng);
            prop_assert_eq!(motion.speed(), speed);
        }
    }
}
