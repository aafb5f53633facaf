use crate::geometry::{Cell, Grid};

/// What the head ran into, if anything
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Collision {
    None,
    /// Head left the grid
    Wall,
    /// Head entered one of the snake's own segments
    SelfCollision,
}

pub struct CollisionDetector {
    grid: Grid,
}

impl CollisionDetector {
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    /// Check a head-first body against the walls and itself
    pub fn check(&self, body: &[Cell]) -> Collision {
        let Some((head, rest)) = body.split_first() else {
            return Collision::None;
        };
        if !self.grid.contains(*head) {
            Collision::Wall
        } else if rest.contains(head) {
            Collision::SelfCollision
        } else {
            Collision::None
        }
    }
}
