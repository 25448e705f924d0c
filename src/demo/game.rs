//! One frame of game logic, without drawing or audio.

use glam::Vec2;

use super::animation::{self, AnimKey, Animator};
use super::camera;
use super::joystick::{FingerId, Joystick};
use super::keyboard::{self, KeyState};
use super::player::Player;
use super::rect::Rect;
use super::tilemap::TileMap;
use super::viewport::{SafeArea, Viewport};

/// Seconds between footstep sounds while moving.
pub const FOOTSTEP_INTERVAL: f32 = 0.3;

pub const MAX_HEALTH: usize = 4;

/// A touch event with coordinates normalized to 0..1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    Down { finger: FingerId, x: f32, y: f32 },
    Motion { finger: FingerId, x: f32, y: f32 },
    Up { finger: FingerId },
}

/// Things that happened during an update the presentation layer reacts to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameEvents {
    /// A footstep sound should be played.
    pub footstep: bool,
}

pub struct Game {
    map: TileMap,
    collisions: Vec<Rect>,
    viewport: Viewport,
    player: Player,
    animator: Animator,
    joystick: Joystick,
    input: Vec2,
    footstep_timer: f32,
    footstep_active: bool,
    camera: Vec2,
    health_pips: Vec<Vec2>,
}

impl Game {
    pub fn new(map: TileMap, viewport: Viewport, insets: SafeArea) -> Self {
        let collisions = map.collision_rects();
        let player = Player::spawn(map.player_spawn());
        let joystick = Joystick::new(viewport.joystick_rest(insets));
        let health_pips = viewport.health_pips(MAX_HEALTH, insets);

        Self {
            map,
            collisions,
            viewport,
            player,
            animator: Animator::default(),
            joystick,
            input: Vec2::ZERO,
            footstep_timer: FOOTSTEP_INTERVAL,
            footstep_active: false,
            camera: Vec2::ZERO,
            health_pips,
        }
    }

    pub fn handle_touch(&mut self, event: TouchEvent) {
        match event {
            TouchEvent::Down { finger, x, y } => {
                let position = self.viewport.touch_to_canvas(Vec2::new(x, y));
                self.joystick.finger_down(finger, position);
            }
            TouchEvent::Motion { finger, x, y } => {
                let position = self.viewport.touch_to_canvas(Vec2::new(x, y));
                if let Some(direction) = self.joystick.finger_motion(finger, position) {
                    // A knob resting on the base yields zero, which faces right
                    self.input = direction;
                    self.player.facing = direction;
                    self.footstep_active = true;
                }
            }
            TouchEvent::Up { finger } => {
                if self.joystick.finger_up(finger) {
                    self.input = Vec2::ZERO;
                    self.footstep_active = false;
                }
            }
        }
    }

    /// Advances the game by `dt` seconds.
    ///
    /// `keys` is the keyboard state on desktop; pass `None` on touch devices,
    /// where movement comes from [`Game::handle_touch`] instead.
    pub fn update(&mut self, dt: f32, keys: Option<KeyState>) -> FrameEvents {
        if let Some(keys) = keys {
            match keyboard::direction(keys) {
                Some(direction) => {
                    self.input = direction;
                    self.player.facing = direction;
                    self.footstep_active = true;
                }
                None => {
                    self.input = Vec2::ZERO;
                    self.footstep_active = false;
                }
            }
        }

        self.player.move_and_collide(self.input, &self.collisions);

        let mut events = FrameEvents::default();
        self.footstep_timer += dt;
        if self.footstep_active && self.footstep_timer > FOOTSTEP_INTERVAL {
            events.footstep = true;
            self.footstep_timer = 0.0;
        }

        self.animator.update(dt, self.player.facing, self.input);
        self.camera = camera::follow(
            self.player.position,
            self.viewport.canvas_size(),
            self.map.pixel_size(),
        );

        events
    }

    pub fn map(&self) -> &TileMap {
        &self.map
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn joystick(&self) -> &Joystick {
        &self.joystick
    }

    pub fn animation_key(&self) -> AnimKey {
        self.animator.key()
    }

    /// Spritesheet region of the player's current frame.
    pub fn player_frame(&self) -> Rect {
        animation::frame_rect(self.animator.frame())
    }

    /// Draw offset for world-space positions.
    pub fn camera(&self) -> Vec2 {
        self.camera
    }

    pub fn health_pips(&self) -> &[Vec2] {
        &self.health_pips
    }
}
