// One playthrough: player, level, camera, and the per-tick step order

use super::config::{
    ANIMATION_DELAY, FRAME_RATE, PLAYER_SPAWN_X, PLAYER_SPAWN_Y, PLAYER_VEL, SCROLL_DEAD_ZONE,
    WINDOW_HEIGHT, WINDOW_WIDTH,
};
use super::level::Level;
use super::player::{Player, MAX_JUMPS};
use crate::engine::assets::SpriteLibrary;
use crate::engine::input::{Action, InputState};
use crate::engine::physics::{
    probe_horizontal, resolve_vertical, ContactKind, PixelMask,
};
use crate::engine::renderer::camera::ScrollCamera;

/// Live game state advanced one fixed step at a time.
///
/// The step order is load-bearing: jump input, player integration, trap
/// animation, horizontal probes and vetoed movement, vertical resolution,
/// hazard checks, then the camera. Reordering changes observable physics.
pub struct Session {
    pub player: Player,
    pub level: Level,
    pub camera: ScrollCamera,
}

impl Session {
    pub fn new(library: &SpriteLibrary) -> Self {
        let mut level = Level::build(library);
        level.trap.ignite();

        Self {
            player: Player::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            level,
            camera: ScrollCamera::new(
                WINDOW_WIDTH as f32,
                WINDOW_HEIGHT as f32,
                SCROLL_DEAD_ZONE,
            ),
        }
    }

    /// Advance the simulation by one tick
    pub fn step(&mut self, input: &InputState, library: &SpriteLibrary) {
        // Edge-triggered: one jump per key press, never per held frame
        if input.just_pressed(Action::Jump) && self.player.jump_count() < MAX_JUMPS {
            self.player.jump();
        }

        self.player.tick(FRAME_RATE);
        self.level.trap.tick(library);

        // The collision mask tracks the sprite frame chosen this tick
        let fallback;
        let mask = match library.frame(
            &self.player.sprite_key(),
            self.player.animation_count() as usize / ANIMATION_DELAY as usize,
        ) {
            Some(frame) => &frame.mask,
            None => {
                fallback = PixelMask::filled(
                    self.player.body().width(),
                    self.player.body().height(),
                );
                &fallback
            }
        };

        // Horizontal pass: probe both directions, then only apply the
        // velocity for an unobstructed held direction
        self.player.halt();
        let world = &self.level.world;
        let probe = PLAYER_VEL * 2.0;
        let blocked_left = probe_horizontal(self.player.body(), mask, world, -probe);
        let blocked_right = probe_horizontal(self.player.body(), mask, world, probe);

        if input.is_pressed(Action::MoveLeft) && blocked_left.is_none() {
            self.player.run_left(PLAYER_VEL);
        }
        if input.is_pressed(Action::MoveRight) && blocked_right.is_none() {
            self.player.run_right(PLAYER_VEL);
        }

        // Vertical pass: resolve against everything the body now overlaps
        let dy = self.player.body().vy;
        let contacts = resolve_vertical(self.player.body_mut(), mask, &self.level.world, dy);
        for contact in &contacts {
            match contact.kind {
                ContactKind::Landed => self.player.landed(),
                ContactKind::HeadBump => self.player.hit_head(),
                ContactKind::Touch => {}
            }
        }

        // Any touched hazard wounds the player, probes included
        let touched = blocked_left
            .into_iter()
            .chain(blocked_right)
            .chain(contacts.iter().map(|c| c.object));
        for index in touched {
            if self.level.world.get(index).is_some_and(|o| o.is_hazard()) {
                self.player.register_hit();
            }
        }

        self.camera.update(self.player.body());
    }
}
