//! Pixel-accurate collision masks.
//!
//! A mask is a packed bitmap of the opaque pixels of a sprite, with the same
//! dimensions as the sprite's bounding rectangle. Two masks collide iff at
//! least one pair of set bits lands on the same screen pixel.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Alpha value above which a pixel counts as opaque.
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 127;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionMask {
    width: u32,
    height: u32,
    /// Row-major bits, `words_per_row` u64 words per row.
    bits: Vec<u64>,
}

impl CollisionMask {
    /// An empty (fully transparent) mask.
    pub fn empty(width: u32, height: u32) -> Self {
        let words = Self::words_for(width) * height as usize;
        Self {
            width,
            height,
            bits: vec![0; words],
        }
    }

    /// A fully opaque mask.
    pub fn solid(width: u32, height: u32) -> Self {
        let mut mask = Self::empty(width, height);
        for y in 0..height {
            for x in 0..width {
                mask.set(x, y);
            }
        }
        mask
    }

    /// An ellipse inscribed in the bounding rectangle.
    pub fn ellipse(width: u32, height: u32) -> Self {
        let mut mask = Self::empty(width, height);
        let rx = width as f32 / 2.0;
        let ry = height as f32 / 2.0;
        if rx <= 0.0 || ry <= 0.0 {
            return mask;
        }
        for y in 0..height {
            for x in 0..width {
                let dx = (x as f32 + 0.5 - rx) / rx;
                let dy = (y as f32 + 0.5 - ry) / ry;
                if dx * dx + dy * dy <= 1.0 {
                    mask.set(x, y);
                }
            }
        }
        mask
    }

    /// A `width` x `height` rectangle rotated counter-clockwise (as seen on
    /// screen) by `angle` radians. The resulting mask is sized to the
    /// rotated bounding box, like a rotated sprite surface.
    pub fn rotated_rect(width: f32, height: f32, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        let bw = (width * cos.abs() + height * sin.abs()).round().max(1.0) as u32;
        let bh = (width * sin.abs() + height * cos.abs()).round().max(1.0) as u32;
        let mut mask = Self::empty(bw, bh);

        let half_w = width / 2.0;
        let half_h = height / 2.0;
        let unrotate = Vec2::from_angle(-angle);
        for y in 0..bh {
            for x in 0..bw {
                // Screen y points down; flip into math orientation first.
                let p = Vec2::new(
                    x as f32 + 0.5 - bw as f32 / 2.0,
                    -(y as f32 + 0.5 - bh as f32 / 2.0),
                );
                let local = unrotate.rotate(p);
                if local.x.abs() <= half_w && local.y.abs() <= half_h {
                    mask.set(x, y);
                }
            }
        }
        mask
    }

    /// Build a mask from a row-major alpha channel. Pixels with alpha above
    /// `DEFAULT_ALPHA_THRESHOLD` are opaque. Returns `None` when the buffer
    /// length does not match the dimensions.
    pub fn from_alpha(width: u32, height: u32, alpha: &[u8]) -> Option<Self> {
        if alpha.len() != width as usize * height as usize {
            return None;
        }
        let mut mask = Self::empty(width, height);
        for (i, &a) in alpha.iter().enumerate() {
            if a > DEFAULT_ALPHA_THRESHOLD {
                mask.set(i as u32 % width, i as u32 / width);
            }
        }
        Some(mask)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the pixel at (x, y) is opaque. Out-of-range pixels are not.
    pub fn get(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let (word, bit) = self.index(x, y);
        self.bits[word] & (1 << bit) != 0
    }

    pub fn set(&mut self, x: u32, y: u32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let (word, bit) = self.index(x, y);
        self.bits[word] |= 1 << bit;
    }

    /// Number of opaque pixels.
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|w| w.count_ones()).sum()
    }

    /// Test overlap against `other`, whose top-left corner sits at
    /// `offset` relative to this mask's top-left corner.
    pub fn overlaps(&self, other: &CollisionMask, offset: (i32, i32)) -> bool {
        let (ox, oy) = offset;
        let x_start = ox.max(0);
        let y_start = oy.max(0);
        let x_end = (self.width as i32).min(ox + other.width as i32);
        let y_end = (self.height as i32).min(oy + other.height as i32);
        if x_start >= x_end || y_start >= y_end {
            return false;
        }

        for y in y_start..y_end {
            for x in x_start..x_end {
                if self.get(x as u32, y as u32) && other.get((x - ox) as u32, (y - oy) as u32) {
                    return true;
                }
            }
        }
        false
    }

    fn words_for(width: u32) -> usize {
        (width as usize).div_ceil(64)
    }

    fn index(&self, x: u32, y: u32) -> (usize, u32) {
        let word = y as usize * Self::words_for(self.width) + (x / 64) as usize;
        (word, x % 64)
    }
}
