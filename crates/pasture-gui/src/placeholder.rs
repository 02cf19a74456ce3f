//! Procedural stand-in sprites for running without the media directory.
//!
//! Every requested image path is mapped back to a creature, heading, and
//! frame number, then painted as a simple silhouette: an oval body, a head on
//! the side the creature faces, and legs that alternate between frames.

use macroquad::prelude::*;

use pasture_sim::SimConfig;
use pasture_sim::animation::Heading;

/// What a placeholder sprite depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Creature {
    /// Male sheep.
    Ram,
    /// Female sheep.
    Ewe,
    /// Any wolf frame.
    Wolf,
    /// The shepherd's still sprite.
    Shepherd,
}

impl Creature {
    fn coat(self) -> [u8; 4] {
        match self {
            Self::Ram => [236, 236, 228, 255],
            Self::Ewe => [250, 226, 196, 255],
            Self::Wolf => [112, 112, 120, 255],
            Self::Shepherd => [139, 90, 43, 255],
        }
    }

    fn head(self) -> [u8; 4] {
        match self {
            Self::Ram | Self::Ewe => [48, 44, 40, 255],
            Self::Wolf => [72, 72, 80, 255],
            Self::Shepherd => [240, 200, 160, 255],
        }
    }
}

/// Work out which creature, heading, and frame a configured path refers to.
pub fn classify(path: &str, config: &SimConfig) -> Option<(Creature, Heading, usize)> {
    if path == config.shepherd.sprite {
        return Some((Creature::Shepherd, Heading::SouthWest, 1));
    }
    let (dir, file) = path.rsplit_once('/')?;
    let creature = if dir == config.wolf.frames.trim_end_matches('/') {
        Creature::Wolf
    } else if dir == config.sheep.male_frames.trim_end_matches('/') {
        Creature::Ram
    } else if dir == config.sheep.female_frames.trim_end_matches('/') {
        Creature::Ewe
    } else {
        return None;
    };
    let heading = Heading::ALL
        .into_iter()
        .find(|h| file.starts_with(h.key()))?;
    let frame = file
        .split_once('(')
        .and_then(|(_, rest)| rest.split_once(')'))
        .and_then(|(n, _)| n.parse().ok())?;
    Some((creature, heading, frame))
}

/// RGBA pixels for a `width` x `height` placeholder.
pub fn pixels(
    creature: Creature,
    heading: Heading,
    frame: usize,
    width: u16,
    height: u16,
) -> Vec<u8> {
    let (w, h) = (f32::from(width), f32::from(height));
    let mut out = vec![0u8; usize::from(width) * usize::from(height) * 4];
    let mut paint = |x: f32, y: f32, color: [u8; 4]| {
        if !(0.0..w).contains(&x) || !(0.0..h).contains(&y) {
            return;
        }
        let i = (y as usize * usize::from(width) + x as usize) * 4;
        out[i..i + 4].copy_from_slice(&color);
    };

    if creature == Creature::Shepherd {
        // Standing figure: head on top, robe below.
        for y in 0..height {
            for x in 0..width {
                let (fx, fy) = (f32::from(x), f32::from(y));
                let dx = (fx - w / 2.0) / (w / 6.0);
                let dy = (fy - h / 5.0) / (h / 6.0);
                if dx * dx + dy * dy <= 1.0 {
                    paint(fx, fy, creature.head());
                } else if fy > h * 0.35 && (fx - w / 2.0).abs() < w * (fy / h) * 0.4 {
                    paint(fx, fy, creature.coat());
                }
            }
        }
        return out;
    }

    let east = matches!(heading, Heading::NorthEast | Heading::SouthEast);
    let north = matches!(heading, Heading::NorthWest | Heading::NorthEast);
    let stride = if frame % 2 == 0 { 1.0 } else { -1.0 };

    let (cx, cy) = (w / 2.0, h * 0.45);
    let (rx, ry) = (w * 0.34, h * 0.28);
    let head_x = if east { w * 0.84 } else { w * 0.16 };
    let head_y = if north { h * 0.22 } else { h * 0.36 };
    let head_r = w.min(h) * 0.14;
    let leg_w = (w * 0.05).max(1.0);

    for y in 0..height {
        for x in 0..width {
            let (fx, fy) = (f32::from(x), f32::from(y));
            let bx = (fx - cx) / rx;
            let by = (fy - cy) / ry;
            let hx = (fx - head_x) / head_r;
            let hy = (fy - head_y) / head_r;
            if hx * hx + hy * hy <= 1.0 {
                paint(fx, fy, creature.head());
            } else if bx * bx + by * by <= 1.0 {
                paint(fx, fy, creature.coat());
            } else if fy > cy && fy < h * 0.95 {
                for (n, offset) in [-0.22f32, -0.08, 0.08, 0.22].into_iter().enumerate() {
                    let swing = if n % 2 == 0 { stride } else { -stride };
                    let lx = cx + offset * w + swing * (fy - cy) * 0.15;
                    if (fx - lx).abs() < leg_w {
                        paint(fx, fy, creature.head());
                    }
                }
            }
        }
    }
    out
}

/// Sprite size configured for a creature.
pub fn size(creature: Creature, config: &SimConfig) -> (u16, u16) {
    let (w, h) = match creature {
        Creature::Ram | Creature::Ewe => (config.sheep.width, config.sheep.height),
        Creature::Wolf => (config.wolf.width, config.wolf.height),
        Creature::Shepherd => (config.shepherd.width, config.shepherd.height),
    };
    let clamp = |v: i32| u16::try_from(v.max(1)).unwrap_or(u16::MAX);
    (clamp(w), clamp(h))
}

/// Build the placeholder texture for a configured image path.
pub fn texture(path: &str, config: &SimConfig) -> Option<Texture2D> {
    let (creature, heading, frame) = classify(path, config)?;
    let (w, h) = size(creature, config);
    let texture = Texture2D::from_rgba8(w, h, &pixels(creature, heading, frame, w, h));
    texture.set_filter(FilterMode::Nearest);
    Some(texture)
}
