//! Player animation selection.
//!
//! The player sheet is a 4x3 grid of 16px frames: the first row holds the
//! idle pose for each direction, the other two rows hold the walk poses.

use std::fmt;

use glam::Vec2;

use super::player::PLAYER_SIZE;
use super::rect::Rect;

/// Seconds each animation frame stays on screen.
pub const FRAME_TIME: f32 = 0.15;

/// Input length below which the player counts as standing still.
const WALK_THRESHOLD: f32 = 0.01;

const SHEET_COLUMNS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motion {
    Idle,
    Walk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facing {
    Down,
    Right,
    Up,
    Left,
}

impl Facing {
    /// Picks the facing for a direction in screen space (y grows down).
    pub fn from_direction(direction: Vec2) -> Self {
        let angle = direction.y.atan2(direction.x).to_degrees();
        if angle > -135.0 && angle < -45.0 {
            Facing::Up
        } else if (-45.0..=45.0).contains(&angle) {
            Facing::Right
        } else if angle > 45.0 && angle < 135.0 {
            Facing::Down
        } else {
            Facing::Left
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimKey {
    pub motion: Motion,
    pub facing: Facing,
}

impl AnimKey {
    pub fn select(facing: Vec2, input: Vec2) -> Self {
        let motion = if input.length() > WALK_THRESHOLD {
            Motion::Walk
        } else {
            Motion::Idle
        };
        Self {
            motion,
            facing: Facing::from_direction(facing),
        }
    }

    /// Frame indices into the player sheet.
    pub fn frames(&self) -> &'static [usize] {
        match (self.motion, self.facing) {
            (Motion::Idle, Facing::Down) => &[0],
            (Motion::Idle, Facing::Right) => &[1],
            (Motion::Idle, Facing::Up) => &[2],
            (Motion::Idle, Facing::Left) => &[3],
            (Motion::Walk, Facing::Down) => &[4, 0, 8, 0],
            (Motion::Walk, Facing::Right) => &[5, 1, 9, 1],
            (Motion::Walk, Facing::Up) => &[6, 2, 10, 2],
            (Motion::Walk, Facing::Left) => &[7, 3, 11, 3],
        }
    }
}

impl fmt::Display for AnimKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let motion = match self.motion {
            Motion::Idle => "idle",
            Motion::Walk => "walk",
        };
        let facing = match self.facing {
            Facing::Down => "down",
            Facing::Right => "right",
            Facing::Up => "up",
            Facing::Left => "left",
        };
        write!(f, "{}{}", motion, facing)
    }
}

/// Spritesheet region for a frame index.
pub fn frame_rect(frame: usize) -> Rect {
    Rect::new(
        (frame % SHEET_COLUMNS) as f32 * PLAYER_SIZE,
        (frame / SHEET_COLUMNS) as f32 * PLAYER_SIZE,
        PLAYER_SIZE,
        PLAYER_SIZE,
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct Animator {
    key: AnimKey,
    index: usize,
    timer: f32,
}

impl Default for Animator {
    fn default() -> Self {
        Self {
            key: AnimKey {
                motion: Motion::Walk,
                facing: Facing::Down,
            },
            index: 0,
            timer: 0.0,
        }
    }
}

impl Animator {
    pub fn key(&self) -> AnimKey {
        self.key
    }

    /// Current frame index into the player sheet.
    pub fn frame(&self) -> usize {
        self.key.frames()[self.index]
    }

    /// Advances the frame timer, then switches animation if the key changed.
    /// A key change restarts the new animation from its first frame.
    pub fn update(&mut self, dt: f32, facing: Vec2, input: Vec2) {
        self.timer += dt;
        if self.timer > FRAME_TIME {
            self.index = (self.index + 1) % self.key.frames().len();
            self.timer = 0.0;
        }

        let key = AnimKey::select(facing, input);
        if key != self.key {
            self.key = key;
            self.index = 0;
            self.timer = 0.0;
        }
    }
}
