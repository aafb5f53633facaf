//! Pulse Snake - a grid snake game
//!
//! The simulation (movement, growth, collisions, tick scheduling and
//! scoring) runs without a window: it only borrows macroquad's `Color` type
//! and seedable random generator. Drawing and input handling live in
//! `render` and `input`.

pub mod collision;
pub mod config;
pub mod direction;
pub mod food;
pub mod game_loop;
pub mod geometry;
pub mod input;
pub mod render;
pub mod scheduler;
pub mod score;
pub mod snake;

pub use config::GameConfig;
pub use direction::Direction;
pub use game_loop::{GameLoopController, GameOverReason, Phase, TickOutcome};
pub use geometry::{Cell, Grid};
