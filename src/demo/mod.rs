//! # Example Game Logic
//!
//! The game logic of the pixel-art example shipped with the template: a
//! player walking around a Sprite Fusion tilemap, steered by an on-screen
//! joystick on touch devices or by the keyboard on desktop.
//!
//! Everything here is pure simulation. Drawing, audio and window events
//! belong to whatever rendering library hosts the game; it feeds
//! [`game::TouchEvent`]s and key states in, calls [`game::Game::update`] once
//! per frame, and draws using the positions and sprite regions the game
//! exposes.
//!
//! - `tilemap`: map documents, collision rectangles, spawn point.
//! - `player`: axis-separated movement and collision.
//! - `animation`: direction-to-animation selection and frame timing.
//! - `joystick` / `keyboard`: input mapping.
//! - `camera` / `viewport`: view placement, scaling and safe areas.

pub mod animation;
pub mod camera;
pub mod game;
pub mod joystick;
pub mod keyboard;
pub mod player;
pub mod rect;
pub mod tilemap;
pub mod viewport;

pub use game::{FrameEvents, Game, TouchEvent};
