// Player controller: gravity integration, double jump, hit timer, pose

use super::animation::{self, Facing, Pose};
use super::config::{GRAVITY, JUMP_IMPULSE, PLAYER_HEIGHT, PLAYER_WIDTH};
use crate::engine::physics::KinematicBody;

/// Jumps available between landings
pub const MAX_JUMPS: u8 = 2;

/// The controllable character.
///
/// Owns one kinematic body plus the bookkeeping that drives gravity
/// accumulation, the double-jump limit, hit invulnerability timing, and
/// pose selection.
#[derive(Debug)]
pub struct Player {
    body: KinematicBody,
    facing: Facing,
    /// 0 = grounded, 1 = single jump used, 2 = double jump used
    jump_count: u8,
    /// Frames since last grounded or jump-reset; drives the gravity ramp
    fall_count: u32,
    hit: bool,
    /// Frames since the last hit
    hit_count: u32,
    /// Monotonic counter driving sprite-frame selection
    animation_count: u32,
    pose: Pose,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            body: KinematicBody::new(x, y, PLAYER_WIDTH, PLAYER_HEIGHT),
            facing: Facing::Left,
            jump_count: 0,
            fall_count: 0,
            hit: false,
            hit_count: 0,
            animation_count: 0,
            pose: Pose::Idle,
        }
    }

    pub fn body(&self) -> &KinematicBody {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut KinematicBody {
        &mut self.body
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn jump_count(&self) -> u8 {
        self.jump_count
    }

    pub fn fall_count(&self) -> u32 {
        self.fall_count
    }

    pub fn is_hit(&self) -> bool {
        self.hit
    }

    pub fn animation_count(&self) -> u32 {
        self.animation_count
    }

    /// Sprite-library key for the current pose and facing
    pub fn sprite_key(&self) -> String {
        animation::sprite_key(self.pose, self.facing)
    }

    /// Launch upward. Ignored once both jumps are used; the count never
    /// exceeds `MAX_JUMPS`.
    pub fn jump(&mut self) {
        if self.jump_count >= MAX_JUMPS {
            return;
        }
        self.body.vy = -JUMP_IMPULSE;
        self.animation_count = 0;
        self.jump_count += 1;
        if self.jump_count == 1 {
            // Gravity re-accumulates from zero for the first jump
            self.fall_count = 0;
        }
    }

    /// Run left at `vel`. Facing flips (and the animation restarts) only
    /// on an actual direction change, so held movement does not stutter.
    pub fn run_left(&mut self, vel: f32) {
        self.body.vx = -vel;
        if self.facing != Facing::Left {
            self.facing = Facing::Left;
            self.animation_count = 0;
        }
    }

    /// Run right at `vel`
    pub fn run_right(&mut self, vel: f32) {
        self.body.vx = vel;
        if self.facing != Facing::Right {
            self.facing = Facing::Right;
            self.animation_count = 0;
        }
    }

    /// Stop horizontal motion without touching facing or animation
    pub fn halt(&mut self) {
        self.body.vx = 0.0;
    }

    /// Per-frame update: integrate velocity, ramp gravity, advance the
    /// hit and fall timers, recompute the pose.
    pub fn tick(&mut self, frame_rate: u32) {
        self.body.translate(self.body.vx, self.body.vy);

        // Frame-rate-normalized gravity ramp, saturating at 1 px/frame^2
        self.body.vy += ((self.fall_count as f32 / frame_rate as f32) * GRAVITY).min(1.0);

        if self.hit {
            self.hit_count += 1;
        }
        if self.hit_count > frame_rate * 2 {
            // Invulnerability window is exactly two seconds
            self.hit = false;
            self.hit_count = 0;
        }

        self.fall_count += 1;
        self.animation_count += 1;
        self.pose = self.select_pose();
    }

    /// Landed on a surface: stop falling, reset gravity ramp and jumps
    pub fn landed(&mut self) {
        self.fall_count = 0;
        self.body.vy = 0.0;
        self.jump_count = 0;
    }

    /// Bumped a ceiling: push back down, reset jumps
    pub fn hit_head(&mut self) {
        self.body.vy = -1.0;
        self.jump_count = 0;
    }

    /// Contact with a hazard. Re-triggering while already hit restarts
    /// the invulnerability window.
    pub fn register_hit(&mut self) {
        self.hit = true;
        self.hit_count = 0;
    }

    // Pose priority: hit, then run, then jump/double-jump/fall, then idle
    fn select_pose(&self) -> Pose {
        let mut pose = Pose::Idle;

        if self.body.vy < 0.0 {
            if self.jump_count == 1 {
                pose = Pose::Jump;
            } else if self.jump_count == 2 {
                pose = Pose::DoubleJump;
            }
        } else if self.body.vy > GRAVITY * 2.0 {
            pose = Pose::Fall;
        }

        if self.body.vx != 0.0 {
            pose = Pose::Run;
        }

        if self.hit {
            pose = Pose::Hit;
        }

        pose
    }
}
