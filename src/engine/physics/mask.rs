// Per-pixel occupancy masks for exact-shape overlap testing

use image::RgbaImage;

/// Exact per-pixel occupancy of a sprite's opaque region.
///
/// Collision testing uses these instead of bounding boxes so irregular
/// shapes (flame tips, rounded terrain) only collide where they are
/// actually drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl PixelMask {
    /// Create a fully-occupied rectangular mask
    pub fn filled(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![true; (width * height) as usize],
        }
    }

    /// Create a fully-empty mask
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; (width * height) as usize],
        }
    }

    /// Build a mask from an image's alpha channel (occupied where alpha > 0)
    pub fn from_alpha(image: &RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        let bits = image.pixels().map(|p| p.0[3] > 0).collect();
        Self {
            width,
            height,
            bits,
        }
    }

    /// Build a mask from a closure over pixel coordinates
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> bool) -> Self {
        let mut bits = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                bits.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            bits,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the pixel at (x, y) is occupied. Out-of-range is unoccupied.
    pub fn is_set(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.bits[(y * self.width + x) as usize]
    }

    /// Number of occupied pixels
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Mirrored copy, for left-facing frames cut from right-facing art
    pub fn flipped_horizontal(&self) -> Self {
        Self::from_fn(self.width, self.height, |x, y| {
            self.is_set(self.width - 1 - x, y)
        })
    }

    /// Exact shape-overlap test between two positioned masks.
    ///
    /// Positions are world-space top-left corners; they are floored to
    /// integer pixels before testing, matching how the masks were sampled.
    pub fn overlaps(&self, pos: (f32, f32), other: &PixelMask, other_pos: (f32, f32)) -> bool {
        let (ax, ay) = (pos.0.floor() as i64, pos.1.floor() as i64);
        let (bx, by) = (other_pos.0.floor() as i64, other_pos.1.floor() as i64);

        let x0 = ax.max(bx);
        let y0 = ay.max(by);
        let x1 = (ax + self.width as i64).min(bx + other.width as i64);
        let y1 = (ay + self.height as i64).min(by + other.height as i64);

        for y in y0..y1 {
            for x in x0..x1 {
                if self.is_set((x - ax) as u32, (y - ay) as u32)
                    && other.is_set((x - bx) as u32, (y - by) as u32)
                {
                    return true;
                }
            }
        }

        false
    }
}
