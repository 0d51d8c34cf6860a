// Pixel-accurate platformer physics
//
// No rigid-body engine here: the simulation is a kinematic body moved by
// per-frame velocity, with axis-separated collision resolution against
// exact occupancy masks.

pub mod body;
pub mod collision;
pub mod mask;
pub mod world;

pub use body::KinematicBody;
pub use collision::{probe_horizontal, resolve_vertical, ContactKind, VerticalContact};
pub use mask::PixelMask;
pub use world::{CollisionWorld, StaticObject, SurfaceKind};
