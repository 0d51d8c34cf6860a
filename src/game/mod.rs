// Game layer: rules and state on top of the engine

pub mod animation;
pub mod config;
pub mod level;
pub mod player;
pub mod session;
pub mod trap;

pub use session::Session;
