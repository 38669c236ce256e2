//! Rendering: the display boundary and everything behind it
//!
//! The simulation only ever talks to the [`Surface`] trait; the terminal
//! implementation and the tile bookkeeping live here.

pub mod scene;
pub mod surface;
pub mod tui;

pub use scene::Scene;
pub use surface::{Surface, TileColor, TileId};
pub use tui::{Renderer, TerminalSurface};
