//! On-screen joystick driven by touch input.
//!
//! Only one finger controls the stick at a time. Touching anywhere moves
//! the stick's base under the finger; dragging moves the knob, which is held
//! within [`MAX_KNOB_DISTANCE`] of the base.

use glam::Vec2;

/// Maximum distance between the knob and the base, in canvas units.
pub const MAX_KNOB_DISTANCE: f32 = 15.0;

pub type FingerId = i64;

#[derive(Debug, Clone, PartialEq)]
pub struct Joystick {
    rest: Vec2,
    base: Vec2,
    knob: Vec2,
    finger: Option<FingerId>,
}

impl Joystick {
    /// Creates a joystick resting at `rest` (canvas coordinates).
    pub fn new(rest: Vec2) -> Self {
        Self {
            rest,
            base: rest,
            knob: rest,
            finger: None,
        }
    }

    pub fn base(&self) -> Vec2 {
        self.base
    }

    pub fn knob(&self) -> Vec2 {
        self.knob
    }

    pub fn finger(&self) -> Option<FingerId> {
        self.finger
    }

    /// Claims the stick for `finger` if it is free. Returns whether it did.
    pub fn finger_down(&mut self, finger: FingerId, position: Vec2) -> bool {
        if self.finger.is_some() {
            return false;
        }
        self.finger = Some(finger);
        self.base = position;
        self.knob = position;
        true
    }

    /// Moves the knob for the owning finger and returns the new input
    /// direction (unit length, or zero when the knob sits on the base).
    pub fn finger_motion(&mut self, finger: FingerId, position: Vec2) -> Option<Vec2> {
        if self.finger != Some(finger) {
            return None;
        }
        let offset = (position - self.base).clamp_length_max(MAX_KNOB_DISTANCE);
        self.knob = self.base + offset;
        Some(offset.normalize_or_zero())
    }

    /// Releases the stick if `finger` owns it, returning it to rest.
    pub fn finger_up(&mut self, finger: FingerId) -> bool {
        if self.finger != Some(finger) {
            return false;
        }
        self.finger = None;
        self.base = self.rest;
        self.knob = self.rest;
        true
    }
}
