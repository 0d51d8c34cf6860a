use anyhow::Result;
use log::{debug, info, warn};
use std::path::Path;
use std::sync::Arc;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod engine;
mod game;

use engine::assets::SpriteLibrary;
use engine::game_loop::FrameClock;
use engine::input::{Action, InputState};
use engine::renderer::{Renderer, SpriteInstance};
use game::animation::frame_index;
use game::config::{ANIMATION_DELAY, FRAME_RATE, WINDOW_HEIGHT, WINDOW_WIDTH};
use game::Session;

const ASSET_ROOT: &str = "assets";

fn load_library() -> Result<SpriteLibrary> {
    let root = Path::new(ASSET_ROOT);
    let library = if root.is_dir() {
        SpriteLibrary::load(root)?
    } else {
        warn!("Asset directory {ASSET_ROOT} not found, using placeholder art");
        SpriteLibrary::placeholder()
    };

    let mut required = game::animation::player_sprite_keys();
    required.extend(
        ["fire_on", "fire_off", "terrain", "background"]
            .iter()
            .map(|s| s.to_string()),
    );
    let required_refs: Vec<&str> = required.iter().map(String::as_str).collect();
    library.validate(&required_refs)?;

    Ok(library)
}

/// Build the frame's draw list: background, terrain, trap, then player
fn draw_list(session: &Session, library: &SpriteLibrary) -> Vec<SpriteInstance> {
    let mut instances = Vec::new();

    // The backdrop is fixed to the screen, so tiles follow the camera
    if let Some(frames) = library.frames("background") {
        if let Some(frame) = frames.first() {
            let (tile_w, tile_h) = frame.image.dimensions();
            let offset = session.camera.offset_x();
            for ty in 0..WINDOW_HEIGHT.div_ceil(tile_h) {
                for tx in 0..WINDOW_WIDTH.div_ceil(tile_w) {
                    instances.push(SpriteInstance::new(
                        "background",
                        0,
                        offset + (tx * tile_w) as f32,
                        (ty * tile_h) as f32,
                    ));
                }
            }
        }
    }

    let trap = &session.level.trap;
    for (index, object) in session.level.world.objects().iter().enumerate() {
        let (x, y) = object.position();
        if index == trap.object_index() {
            let key = trap.sprite_key();
            let frame = frame_index(
                trap.animation_count(),
                ANIMATION_DELAY,
                library.frame_count(key),
            );
            instances.push(SpriteInstance::new(key, frame, x, y));
        } else {
            instances.push(SpriteInstance::new("terrain", 0, x, y));
        }
    }

    let player = &session.player;
    let key = player.sprite_key();
    let frame = frame_index(
        player.animation_count(),
        ANIMATION_DELAY,
        library.frame_count(&key),
    );
    instances.push(SpriteInstance::new(
        key,
        frame,
        player.body().x,
        player.body().y,
    ));

    instances
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Emberfall...");

    let library = load_library()?;

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Emberfall")
            .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .with_resizable(false)
            .build(&event_loop)?,
    );

    let mut renderer = pollster::block_on(Renderer::new(window.clone()))?;
    renderer.upload_library(&library);

    let mut session = Session::new(&library);
    let mut input = InputState::default();
    let mut clock = FrameClock::new(FRAME_RATE);

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    input.process_key_event(&event);
                }
                WindowEvent::Resized(physical_size) => {
                    renderer.resize(physical_size);
                }
                WindowEvent::Focused(false) => {
                    // Keys released while unfocused never reach us
                    input.reset();
                }
                WindowEvent::RedrawRequested => {
                    // Per-redraw actions take their edges immediately;
                    // the jump edge stays buffered for the next step
                    if input.consume(Action::Quit) {
                        elwt.exit();
                        return;
                    }
                    if input.consume(Action::Pause) {
                        clock.toggle_pause();
                    }

                    let steps = clock.begin_frame();
                    for _ in 0..steps {
                        session.step(&input, &library);
                        input.end_frame();
                    }
                    if clock.is_paused() {
                        input.end_frame();
                    }

                    let instances = draw_list(&session, &library);
                    if let Err(e) = renderer.render(&instances, &session.camera) {
                        warn!("Render error: {e}");
                    }

                    if clock.frame_count() % 300 == 0 {
                        debug!("{:.1} fps, {} ticks", clock.fps(), clock.tick_count());
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
