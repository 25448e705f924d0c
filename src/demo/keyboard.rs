//! Keyboard (WASD / arrow keys) movement for desktop runs.

use glam::Vec2;

/// Which direction keys are held. Each flag covers both the letter key and
/// the matching arrow key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Returns the normalized movement direction, or `None` when no effective
/// key is held. Opposite keys cancel each other out.
pub fn direction(keys: KeyState) -> Option<Vec2> {
    let y = match (keys.up, keys.down) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    };
    let x = match (keys.left, keys.right) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    };

    let raw = Vec2::new(x, y);
    if raw == Vec2::ZERO {
        None
    } else {
        Some(raw.normalize())
    }
}
