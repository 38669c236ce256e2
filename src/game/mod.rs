//! Core game logic for tile snake
//!
//! Everything in here is pure state and arithmetic with no I/O or
//! rendering dependencies, so whole rounds can be simulated under test
//! without a display or a clock.

pub mod action;
pub mod config;
pub mod engine;
pub mod grid;
pub mod session;
pub mod snake;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::GameConfig;
pub use engine::{Collision, GameEngine, TickOutcome};
pub use grid::{Grid, Position};
pub use session::{Fruit, Score, Session};
pub use snake::{ColorTag, Snake};
