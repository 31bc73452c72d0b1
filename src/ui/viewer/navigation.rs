// SPDX-License-Identifier: MPL-2.0
//! Index arithmetic for moving through an image sequence.
//!
//! Moving past either end wraps around. Sequences with fewer than two images
//! have nowhere to go, so every step is rejected.

/// Direction of a relative move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Returns the index one step from `current` in `direction`, or `None` when
/// navigation is unavailable.
#[must_use]
pub fn step(current: usize, len: usize, direction: Direction) -> Option<usize> {
    if len < 2 || current >= len {
        return None;
    }
    Some(match direction {
        Direction::Next => (current + 1) % len,
        Direction::Previous => (current + len - 1) % len,
    })
}

/// Validates a direct jump. Out-of-range targets, and any jump within a
/// single-image sequence, are rejected.
#[must_use]
pub fn jump(target: usize, len: usize) -> Option<usize> {
    (len > 1 && target < len).then_some(target)
}
