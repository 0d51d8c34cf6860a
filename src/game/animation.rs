// Pose labels and sprite-frame selection
//
// The animation state is a driver, not a renderer: it picks a logical
// pose label from kinematic/hit state; the sprite renderer maps the
// label to an image.

/// Which way the player faces. Only changes when horizontal velocity
/// changes sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Logical animation pose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pose {
    Idle,
    Run,
    Jump,
    DoubleJump,
    Fall,
    Hit,
}

impl Pose {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Run => "run",
            Self::Jump => "jump",
            Self::DoubleJump => "double_jump",
            Self::Fall => "fall",
            Self::Hit => "hit",
        }
    }

    pub const ALL: [Pose; 6] = [
        Pose::Idle,
        Pose::Run,
        Pose::Jump,
        Pose::DoubleJump,
        Pose::Fall,
        Pose::Hit,
    ];
}

/// Sprite-library key for a pose/facing pair, e.g. `"run_left"`
pub fn sprite_key(pose: Pose, facing: Facing) -> String {
    format!("{}_{}", pose.label(), facing.suffix())
}

/// Sprite-frame index for a monotonic animation counter
pub fn frame_index(animation_count: u32, delay: u32, frame_count: usize) -> usize {
    if frame_count == 0 {
        return 0;
    }
    (animation_count / delay) as usize % frame_count
}

/// Every sprite key the player controller can ask for; used for startup
/// validation of the sprite library
pub fn player_sprite_keys() -> Vec<String> {
    let mut keys = Vec::with_capacity(Pose::ALL.len() * 2);
    for pose in Pose::ALL {
        keys.push(sprite_key(pose, Facing::Right));
        keys.push(sprite_key(pose, Facing::Left));
    }
    keys
}
