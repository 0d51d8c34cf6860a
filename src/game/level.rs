// Level construction
//
// Builds the static collision world: a floor strip three screens wide,
// a couple of raised blocks, and one flame trap resting on the floor.

use super::config::{BLOCK_SIZE, WINDOW_HEIGHT, WINDOW_WIDTH};
use super::trap::FlameTrap;
use crate::engine::assets::SpriteLibrary;
use crate::engine::physics::{CollisionWorld, PixelMask, StaticObject};

/// Flame trap sprite dimensions after 2x scaling
pub const TRAP_WIDTH: u32 = 32;
pub const TRAP_HEIGHT: u32 = 64;

/// A built level: the immutable collision world plus the trap handle
pub struct Level {
    pub world: CollisionWorld,
    pub trap: FlameTrap,
}

impl Level {
    /// Construct the standard level. Terrain blocks use filled masks;
    /// the trap's collision mask is cut from its lit sprite frame.
    pub fn build(library: &SpriteLibrary) -> Self {
        let mut world = CollisionWorld::new();
        let block = BLOCK_SIZE as f32;
        let floor_y = WINDOW_HEIGHT as f32 - block;

        // Floor: one screen to the left of the origin, two to the
        // right. Floored division keeps the partial left block, so the
        // strip covers the whole left screen.
        let start = (-(WINDOW_WIDTH as i32)).div_euclid(BLOCK_SIZE as i32);
        let end = (WINDOW_WIDTH as i32 * 2).div_euclid(BLOCK_SIZE as i32);
        for i in start..end {
            world.push(StaticObject::solid(
                i as f32 * block,
                floor_y,
                terrain_mask(),
            ));
        }

        // Raised blocks
        world.push(StaticObject::solid(0.0, floor_y - block, terrain_mask()));
        world.push(StaticObject::solid(
            block * 3.0,
            floor_y - block * 3.0,
            terrain_mask(),
        ));

        let trap_index = world.push(StaticObject::hazard(
            100.0,
            floor_y - TRAP_HEIGHT as f32,
            trap_mask(library),
        ));

        Self {
            world,
            trap: FlameTrap::new(trap_index),
        }
    }
}

fn terrain_mask() -> PixelMask {
    PixelMask::filled(BLOCK_SIZE, BLOCK_SIZE)
}

fn trap_mask(library: &SpriteLibrary) -> PixelMask {
    match library.frames("fire_on") {
        Some(frames) if !frames.is_empty() => frames[0].mask.clone(),
        _ => PixelMask::filled(TRAP_WIDTH, TRAP_HEIGHT),
    }
}
