//! Headless run of the example game.
//!
//! Loads the bundled map, replays a short scripted joystick gesture and a
//! keyboard walk, and logs where the player ends up.
//!
//! ```bash
//! RUST_LOG=info cargo run --example rpg [path/to/map.json]
//! ```

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use pygame_ios::demo::keyboard::KeyState;
use pygame_ios::demo::tilemap::TileMap;
use pygame_ios::demo::viewport::{SafeArea, Viewport};
use pygame_ios::demo::{Game, TouchEvent};

const DT: f32 = 1.0 / 60.0;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let path = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/assets/map.json"));
    let map = TileMap::load(&path).with_context(|| format!("Failed to load {}", path.display()))?;

    // iPhone landscape resolution in points, with a notch on the left
    let insets = SafeArea {
        left: 47.0,
        bottom: 21.0,
        ..SafeArea::default()
    };
    let mut game = Game::new(map, Viewport::new(874.0, 402.0), insets);
    info!(
        "spawned at {} with joystick at {}",
        game.player().position,
        game.joystick().base()
    );

    // Drag the joystick to the right for one second
    let mut footsteps = 0;
    game.handle_touch(TouchEvent::Down { finger: 1, x: 0.1, y: 0.8 });
    game.handle_touch(TouchEvent::Motion { finger: 1, x: 0.2, y: 0.8 });
    for _ in 0..60 {
        if game.update(DT, None).footstep {
            footsteps += 1;
        }
    }
    info!(
        "joystick walk: position {} animation {} footsteps {}",
        game.player().position,
        game.animation_key(),
        footsteps
    );
    game.handle_touch(TouchEvent::Up { finger: 1 });
    game.update(DT, None);
    info!("released: animation {}", game.animation_key());

    // Walk up with the keyboard until the wall stops the player
    let keys = KeyState {
        up: true,
        ..KeyState::default()
    };
    for _ in 0..120 {
        game.update(DT, Some(keys));
    }
    game.update(DT, Some(KeyState::default()));
    info!(
        "keyboard walk: position {} animation {} camera {}",
        game.player().position,
        game.animation_key(),
        game.camera()
    );

    Ok(())
}
