use serde::{Deserialize, Serialize};

/// Size of the playing field in pixels. Positions live in `[0, width) x [0, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field width in pixels.
    pub width: i32,
    /// Field height in pixels.
    pub height: i32,
}

impl Field {
    /// Create a field of the given size.
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Center point, where the shepherd starts.
    pub fn center(&self) -> (i32, i32) {
        (self.width / 2, self.height / 2)
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(800, 700)
    }
}

/// An integer axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub w: i32,
    /// Height.
    pub h: i32,
}

impl Rect {
    /// AABB overlap. Rectangles that share an edge count as overlapping.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x <= other.x + other.w
            && self.x + self.w >= other.x
            && self.y <= other.y + other.h
            && self.y + self.h >= other.y
    }

    /// Return `true` if `other` lies entirely within `self`.
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.x + other.w <= self.x + self.w
            && other.y + other.h <= self.y + self.h
    }
}

/// Position and sprite size of an agent.
///
/// The full sprite rectangle is what gets drawn; the narrower collision box
/// (half the width, four fifths of the height, centered) is what touches,
/// flees, and hunts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Body {
    /// Sprite left edge.
    pub x: i32,
    /// Sprite top edge.
    pub y: i32,
    /// Sprite width.
    pub width: i32,
    /// Sprite height.
    pub height: i32,
}

impl Body {
    /// A sprite of `width` x `height` with its top-left corner at `(x, y)`.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The full sprite rectangle.
    pub fn sprite_rect(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            w: self.width,
            h: self.height,
        }
    }

    /// The collision box, derived from the sprite rectangle.
    pub fn collision_box(&self) -> Rect {
        let w = self.width / 2;
        let h = self.height * 4 / 5;
        Rect {
            x: self.x + (self.width - w) / 2,
            y: self.y + (self.height - h) / 2,
            w,
            h,
        }
    }

    /// Top-left corner of the collision box; the point others seek or flee.
    pub fn box_origin(&self) -> (i32, i32) {
        let b = self.collision_box();
        (b.x, b.y)
    }

    /// Nearest-edge proximity heuristic between two collision boxes.
    ///
    /// Per axis this takes the smaller of the origin gap and the gap to the
    /// other box's far edge, then combines the axes with a truncating integer
    /// square root. It is not a metric (it is not symmetric in general).
    pub fn distance_to(&self, other: &Body) -> i32 {
        let a = self.collision_box();
        let b = other.collision_box();
        let dx = (a.x - b.x).unsigned_abs().min((a.x - b.x - b.w).unsigned_abs());
        let dy = (a.y - b.y).unsigned_abs().min((a.y - b.y - b.h).unsigned_abs());
        let (dx, dy) = (u64::from(dx), u64::from(dy));
        i32::try_from((dx * dx + dy * dy).isqrt()).unwrap_or(i32::MAX)
    }

    /// Collision-box overlap test.
    pub fn overlaps(&self, other: &Body) -> bool {
        self.collision_box().overlaps(&other.collision_box())
    }
}
