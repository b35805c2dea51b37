//! Gesture tracker - continuous pointer input to discrete commands.
//!
//! Drags and rotations are measured against an anchor. Once the distance
//! from the anchor passes the threshold a single command is emitted and the
//! anchor moves to the current point, so a long drag produces a stream of
//! steps rather than one large jump.
//!
//! Screen coordinates: x grows rightward, y grows downward. Dragging down is
//! a soft drop, flicking up is a hard drop.

use crate::types::Command;

/// Distance (in points) a drag must exceed to emit a command.
pub const DEFAULT_DRAG_THRESHOLD: f32 = 10.0;

/// Angle (in degrees) a rotation gesture must exceed to emit a command.
pub const DEFAULT_ROTATE_THRESHOLD_DEG: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GestureTracker {
    drag_threshold: f32,
    rotate_threshold: f32,
    drag_anchor: Option<Point>,
    /// Whether the current drag has emitted anything yet.
    drag_emitted: bool,
    rotate_anchor: Option<f32>,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_THRESHOLD, DEFAULT_ROTATE_THRESHOLD_DEG)
    }
}

impl GestureTracker {
    pub fn new(drag_threshold: f32, rotate_threshold: f32) -> Self {
        Self {
            drag_threshold,
            rotate_threshold,
            drag_anchor: None,
            drag_emitted: false,
            rotate_anchor: None,
        }
    }

    /// Tracker tuned for terminal mouse input, where one unit is one cell.
    pub fn for_terminal() -> Self {
        Self::new(1.0, 10.0)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Feed the current pointer location of an ongoing drag.
    ///
    /// The first call only sets the anchor. Horizontal movement wins over
    /// vertical when both pass the threshold.
    pub fn drag_changed(&mut self, location: Point) -> Option<Command> {
        let Some(start) = self.drag_anchor else {
            self.drag_anchor = Some(location);
            self.drag_emitted = false;
            return None;
        };

        let dx = location.x - start.x;
        let dy = location.y - start.y;
        let command = if dx > self.drag_threshold {
            Command::MoveRight
        } else if dx < -self.drag_threshold {
            Command::MoveLeft
        } else if dy > self.drag_threshold {
            Command::SoftDrop
        } else if dy < -self.drag_threshold {
            Command::HardDrop
        } else {
            return None;
        };

        self.drag_anchor = Some(location);
        self.drag_emitted = true;
        Some(command)
    }

    /// End the current drag.
    ///
    /// A press that never moved far enough to emit counts as a tap, which
    /// rotates clockwise.
    pub fn drag_ended(&mut self) -> Option<Command> {
        let was_tap = self.drag_anchor.is_some() && !self.drag_emitted;
        self.drag_anchor = None;
        self.drag_emitted = false;
        was_tap.then_some(Command::RotateCw)
    }

    /// Feed the current absolute angle (degrees) of a rotation gesture.
    pub fn rotate_changed(&mut self, angle_deg: f32) -> Option<Command> {
        let Some(start) = self.rotate_anchor else {
            self.rotate_anchor = Some(angle_deg);
            return None;
        };

        let diff = angle_deg - start;
        let command = if diff > self.rotate_threshold {
            Command::RotateCw
        } else if diff < -self.rotate_threshold {
            Command::RotateCcw
        } else {
            return None;
        };

        self.rotate_anchor = Some(angle_deg);
        Some(command)
    }

    pub fn rotate_ended(&mut self) {
        self.rotate_anchor = None;
    }

    /// A discrete tap always rotates clockwise.
    pub fn tap(&self) -> Command {
        Command::RotateCw
    }
}
