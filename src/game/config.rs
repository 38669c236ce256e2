use serde::{Deserialize, Serialize};

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of one grid cell in pixels
    pub cell_size: i32,
    /// Snake length at the start of every round
    pub initial_snake_length: usize,
    /// Pixels reserved above the playable rectangle
    pub top_margin: i32,
    /// Pixels reserved below the playable rectangle
    pub bottom_margin: i32,
    /// Milliseconds between game ticks
    pub tick_ms: u64,
    /// The snake turns its alert color within this many cells of a wall
    pub proximity_cells: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_size: 50,
            initial_snake_length: 6,
            top_margin: 0,
            bottom_margin: 0,
            tick_ms: 100,
            proximity_cells: 5,
        }
    }
}
