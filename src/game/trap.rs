// Flame trap animation state
//
// The trap's collision mask is fixed at level setup (static objects are
// immutable); this state only drives which sprite frame is drawn.

use super::config::ANIMATION_DELAY;
use crate::engine::assets::SpriteLibrary;

/// Animation bookkeeping for one flame trap in the world
#[derive(Debug)]
pub struct FlameTrap {
    /// Index of the trap's static object in the collision world
    object: usize,
    lit: bool,
    animation_count: u32,
}

impl FlameTrap {
    pub fn new(object: usize) -> Self {
        Self {
            object,
            lit: false,
            animation_count: 0,
        }
    }

    pub fn object_index(&self) -> usize {
        self.object
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }

    pub fn ignite(&mut self) {
        self.lit = true;
    }

    pub fn quench(&mut self) {
        self.lit = false;
    }

    /// Sprite-library key for the current state
    pub fn sprite_key(&self) -> &'static str {
        if self.lit {
            "fire_on"
        } else {
            "fire_off"
        }
    }

    /// Advance the animation one tick, wrapping once a full cycle has
    /// played
    pub fn tick(&mut self, library: &SpriteLibrary) {
        self.animation_count += 1;
        let frames = library.frame_count(self.sprite_key());
        if frames > 0 && (self.animation_count / ANIMATION_DELAY) as usize > frames {
            self.animation_count = 0;
        }
    }

    /// Raw counter for frame selection; the library wraps it by set length
    pub fn animation_count(&self) -> u32 {
        self.animation_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::animation::frame_index;

    #[test]
    fn test_trap_starts_quenched() {
        let trap = FlameTrap::new(0);
        assert!(!trap.is_lit());
        assert_eq!(trap.sprite_key(), "fire_off");
    }

    #[test]
    fn test_ignite_switches_sprite_set() {
        let mut trap = FlameTrap::new(3);
        trap.ignite();
        assert!(trap.is_lit());
        assert_eq!(trap.sprite_key(), "fire_on");
        assert_eq!(trap.object_index(), 3);

        trap.quench();
        assert_eq!(trap.sprite_key(), "fire_off");
    }

    #[test]
    fn test_animation_advances_and_wraps() {
        let library = SpriteLibrary::placeholder();
        let mut trap = FlameTrap::new(0);
        trap.ignite();

        let frames = library.frame_count("fire_on");
        assert!(frames > 1);

        // Run through more than one full cycle; the counter must stay
        // within one cycle's worth of ticks after wrapping
        for _ in 0..(frames as u32 * ANIMATION_DELAY * 3) {
            trap.tick(&library);
            let index = frame_index(trap.animation_count(), ANIMATION_DELAY, frames);
            assert!(index < frames);
        }
    }
}
