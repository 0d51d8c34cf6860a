// Engine modules: physics, input, assets, rendering, frame pacing

pub mod assets;
pub mod game_loop;
pub mod input;
pub mod physics;
pub mod renderer;
