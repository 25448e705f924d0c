//! Screen scaling and safe-area layout.
//!
//! The game draws to a small canvas and scales it up by an integer factor
//! chosen so that the canvas is about [`LOGICAL_WIDTH`] units wide. On
//! devices with notches, the on-screen controls and HUD are shifted by the
//! safe-area insets.

use glam::Vec2;

/// Target canvas width the scale factor is chosen for.
pub const LOGICAL_WIDTH: f32 = 300.0;

/// Distance of the joystick's rest position from the bottom-left corner.
const JOYSTICK_MARGIN: f32 = 30.0;
const PIP_MARGIN: f32 = 10.0;
const PIP_SPACING: f32 = 12.0;

/// Safe-area insets in screen pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SafeArea {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub screen: Vec2,
    pub scale: f32,
}

impl Viewport {
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        Self {
            screen: Vec2::new(screen_width, screen_height),
            scale: (screen_width / LOGICAL_WIDTH).round().max(1.0),
        }
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.screen / self.scale
    }

    /// Converts a normalized (0..1) touch position to canvas coordinates.
    pub fn touch_to_canvas(&self, normalized: Vec2) -> Vec2 {
        normalized * self.screen / self.scale
    }

    pub fn joystick_rest(&self, insets: SafeArea) -> Vec2 {
        Vec2::new(
            JOYSTICK_MARGIN + insets.left / self.scale,
            self.canvas_size().y - JOYSTICK_MARGIN - insets.bottom / self.scale,
        )
    }

    /// Top-left positions of `count` health pips stacked down the left edge.
    pub fn health_pips(&self, count: usize, insets: SafeArea) -> Vec<Vec2> {
        (0..count)
            .map(|i| {
                Vec2::new(
                    PIP_MARGIN + insets.left / self.scale,
                    PIP_MARGIN + PIP_SPACING * i as f32 + insets.top / self.scale,
                )
            })
            .collect()
    }
}
