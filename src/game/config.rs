// Tuning constants. Units are pixels and pixels-per-frame unless noted.

pub const WINDOW_WIDTH: u32 = 1000;
pub const WINDOW_HEIGHT: u32 = 800;

/// Simulation steps per second
pub const FRAME_RATE: u32 = 60;

/// Horizontal run speed
pub const PLAYER_VEL: f32 = 5.0;

/// Per-second gravity ramp factor; the per-frame increment saturates at 1
pub const GRAVITY: f32 = 1.0;

/// Jump impulse is this many gravity units upward
pub const JUMP_IMPULSE: f32 = GRAVITY * 8.0;

/// Screen-space margin inside which the camera does not scroll
pub const SCROLL_DEAD_ZONE: f32 = 200.0;

/// Terrain blocks are square with this edge length
pub const BLOCK_SIZE: u32 = 96;

/// Simulation ticks per animation frame
pub const ANIMATION_DELAY: u32 = 3;

/// Body box matches the character frames: 32px art at 2x scale.
/// Snap edges and mask collision disagree if these drift apart.
pub const PLAYER_WIDTH: u32 = 64;
pub const PLAYER_HEIGHT: u32 = 64;

pub const PLAYER_SPAWN_X: f32 = 100.0;
pub const PLAYER_SPAWN_Y: f32 = 100.0;
