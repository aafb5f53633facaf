use std::collections::HashSet;

use crate::direction::Direction;
use crate::geometry::Cell;

/// Outcome of advancing the snake by one tick
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub new_head: Cell,
    /// The head landed on the food and the tail was kept
    pub grew: bool,
}

/// The snake body together with its steering state
#[derive(Debug, Clone, PartialEq)]
pub struct SnakeState {
    /// Body segments, head at index 0. Never empty.
    body: Vec<Cell>,
    /// Direction applied by the last tick
    direction: Direction,
    /// Last accepted input not yet applied by a tick
    pending: Direction,
}

impl SnakeState {
    pub fn new(start: Cell) -> Self {
        Self {
            body: vec![start],
            direction: Direction::None,
            pending: Direction::None,
        }
    }

    /// Back to a single segment at `start`, with no direction
    pub fn reset(&mut self, start: Cell) {
        self.body.clear();
        self.body.push(start);
        self.direction = Direction::None;
        self.pending = Direction::None;
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending
    }

    pub fn occupied(&self) -> HashSet<Cell> {
        self.body.iter().copied().collect()
    }

    /// Buffer a steering input for the next tick.
    ///
    /// The input is checked against the direction the snake is actually
    /// travelling, so several inputs within one tick cannot chain into a
    /// turn back onto the neck. Returns false when the input was rejected;
    /// the buffer is then left untouched.
    pub fn buffer_direction(&mut self, direction: Direction) -> bool {
        if direction == Direction::None || self.direction.is_reversal(direction) {
            return false;
        }
        self.pending = direction;
        true
    }

    /// Commit the pending direction and move one cell, growing when the new
    /// head lands on `food`. A snake that was never steered stays put.
    pub fn advance(&mut self, food: Cell) -> MoveResult {
        self.direction = self.pending;
        if self.direction == Direction::None {
            return MoveResult {
                new_head: self.head(),
                grew: false,
            };
        }

        let (dx, dy) = self.direction.delta();
        let new_head = self.head().offset(dx, dy);
        self.body.insert(0, new_head);

        let grew = new_head == food;
        if !grew {
            self.body.pop();
        }

        MoveResult { new_head, grew }
    }

    #[cfg(test)]
    pub(crate) fn from_body(body: Vec<Cell>, direction: Direction) -> Self {
        assert!(!body.is_empty());
        Self {
            body,
            direction,
            pending: direction,
        }
    }
}
