// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe detection.
//!
//! A gesture starts on finger press and is measured against the press
//! position on every move. Once the horizontal displacement passes the
//! threshold the gesture is dropped, so one swipe navigates at most once.

use super::navigation::Direction;
use iced::touch::Finger;
use iced::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
struct TouchStart {
    finger: Finger,
    position: Point,
}

#[derive(Debug, Clone)]
pub struct SwipeTracker {
    start: Option<TouchStart>,
    threshold: f32,
}

impl SwipeTracker {
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            start: None,
            threshold,
        }
    }

    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Whether a gesture is in progress.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Records the first finger of a gesture. Additional fingers are ignored
    /// until the gesture ends.
    pub fn press(&mut self, finger: Finger, position: Point) {
        if self.start.is_none() {
            self.start = Some(TouchStart { finger, position });
        }
    }

    /// Measures the gesture against the current sample.
    ///
    /// Returns the direction to navigate once the displacement strictly
    /// exceeds the threshold; the gesture is consumed at that point.
    pub fn moved(&mut self, finger: Finger, position: Point) -> Option<Direction> {
        let start = self.start.filter(|start| start.finger == finger)?;
        let displacement = start.position.x - position.x;

        let direction = if displacement > self.threshold {
            Direction::Next
        } else if displacement < -self.threshold {
            Direction::Previous
        } else {
            return None;
        };

        self.start = None;
        Some(direction)
    }

    /// Ends the gesture when its finger lifts or is lost.
    pub fn release(&mut self, finger: Finger) {
        if self.start.is_some_and(|start| start.finger == finger) {
            self.start = None;
        }
    }

    pub fn reset(&mut self) {
        self.start = None;
    }
}
