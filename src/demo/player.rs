//! Player movement with tile collision.

use glam::Vec2;

use super::rect::Rect;

/// Width and height of one player sprite frame.
pub const PLAYER_SIZE: f32 = 16.0;

/// Offset of the hitbox from the sprite's top-left corner.
pub const HITBOX_OFFSET: Vec2 = Vec2::new(3.0, 6.0);

pub const HITBOX_SIZE: f32 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Sprite position (top-left).
    pub position: Vec2,
    pub hitbox: Rect,
    /// Direction of the last movement input.
    pub facing: Vec2,
}

impl Player {
    pub fn spawn(position: Vec2) -> Self {
        Self {
            position,
            hitbox: Rect::new(
                position.x + HITBOX_OFFSET.x,
                position.y + HITBOX_OFFSET.y,
                HITBOX_SIZE,
                HITBOX_SIZE,
            ),
            facing: Vec2::Y,
        }
    }

    /// Moves by `delta`, resolving collisions one axis at a time.
    ///
    /// X is applied and resolved before Y, so sliding along a wall works
    /// while pressing diagonally into it.
    pub fn move_and_collide(&mut self, delta: Vec2, tiles: &[Rect]) {
        self.position.x += delta.x;
        self.hitbox.x = self.position.x + HITBOX_OFFSET.x;
        for tile in tiles {
            if tile.collides(&self.hitbox) {
                if delta.x > 0.0 {
                    self.hitbox.set_right(tile.left());
                } else {
                    self.hitbox.set_left(tile.right());
                }
                self.position.x = self.hitbox.x - HITBOX_OFFSET.x;
            }
        }

        self.position.y += delta.y;
        self.hitbox.y = self.position.y + HITBOX_OFFSET.y;
        for tile in tiles {
            if tile.collides(&self.hitbox) {
                if delta.y > 0.0 {
                    self.hitbox.set_bottom(tile.top());
                } else {
                    self.hitbox.set_top(tile.bottom());
                }
                self.position.y = self.hitbox.y - HITBOX_OFFSET.y;
            }
        }
    }
}
