use crate::game::Position;

/// Handle to one visual unit owned by a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileId(pub u32);

/// Fill color of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileColor {
    Green,
    Yellow,
    Red,
}

/// The display boundary the simulation renders through.
///
/// A surface owns rectangular colored tiles addressed by `TileId` and
/// reports its usable pixel dimensions; it knows nothing about snakes or
/// fruit. Key events travel the other way, through the terminal event
/// stream in the game loop.
pub trait Surface {
    /// Usable display size in pixels (width, height)
    fn dimensions(&self) -> (i32, i32);

    /// Create a square tile of `size` pixels at `pos`
    fn create_tile(&mut self, pos: Position, size: i32, color: TileColor) -> TileId;

    /// Reposition an existing tile
    fn move_tile(&mut self, id: TileId, pos: Position);

    /// Change an existing tile's fill color
    fn recolor_tile(&mut self, id: TileId, color: TileColor);

    /// Remove a tile from the display
    fn destroy_tile(&mut self, id: TileId);
}
