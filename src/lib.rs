//! Tile Snake - a real-time snake where every body segment is its own
//! colored tile on a pixel grid
//!
//! This library provides:
//! - Core game logic with no I/O dependencies (game module)
//! - The display boundary and tile rendering (render module)
//! - Keyboard mapping (input module)
//! - Cross-round counters (metrics module)
//! - The interactive game loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
