//! Camera that follows the player inside the map bounds.

use glam::Vec2;

use super::player::PLAYER_SIZE;

/// Returns the draw offset that centers the player on a `canvas`-sized view,
/// clamped so the view never leaves a map of `map_size` pixels.
pub fn follow(player: Vec2, canvas: Vec2, map_size: Vec2) -> Vec2 {
    let centered = -player + canvas / 2.0 - Vec2::splat(PLAYER_SIZE / 2.0);
    Vec2::new(
        clamp(centered.x, -map_size.x + canvas.x, 0.0),
        clamp(centered.y, -map_size.y + canvas.y, 0.0),
    )
}

// f32::clamp panics when the map is smaller than the canvas (min > max).
fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
