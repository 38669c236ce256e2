use rand::Rng;

use super::action::Direction;

/// A pixel position aligned to the grid (multiples of the cell size,
/// offset from the playable rectangle's origin)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position one cell of `step` pixels in a direction
    pub fn stepped(&self, direction: Direction, step: i32) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx * step, dy * step)
    }
}

/// The playable rectangle, derived once from the display size.
///
/// Width and height are the largest multiples of the cell size that fit
/// the usable display area (minus any reserved margins), centered within
/// it. Immutable for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cell: i32,
    origin: Position,
    width: i32,
    height: i32,
}

impl Grid {
    /// Derive the playable rectangle from raw display dimensions.
    ///
    /// `top_margin` and `bottom_margin` reserve vertical pixels for chrome
    /// and are excluded from the usable area before rounding down to cell
    /// multiples. The display is assumed larger than a single cell.
    pub fn from_display(
        display_width: i32,
        display_height: i32,
        cell: i32,
        top_margin: i32,
        bottom_margin: i32,
    ) -> Self {
        let usable_height = display_height - top_margin - bottom_margin;
        let width = display_width - display_width % cell;
        let height = usable_height - usable_height % cell;
        let origin = Position::new(
            (display_width - width) / 2,
            top_margin + (usable_height - height) / 2,
        );

        Self {
            cell,
            origin,
            width,
            height,
        }
    }

    pub fn cell(&self) -> i32 {
        self.cell
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of cells per row / column
    pub fn columns(&self) -> i32 {
        self.width / self.cell
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell
    }

    /// True iff a cell-aligned position lies inside the rectangle.
    ///
    /// Boundary-exact and half-open per axis: a cell whose origin sits at
    /// `origin + dimension` has left the rectangle; one at the last cell
    /// column/row has not.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= self.origin.x
            && pos.x < self.origin.x + self.width
            && pos.y >= self.origin.y
            && pos.y < self.origin.y + self.height
    }

    /// True iff the position is within `cells` cells of any rectangle
    /// edge, inclusive: a head exactly `cells` cells from a wall counts
    /// as near.
    pub fn near_edge(&self, pos: Position, cells: i32) -> bool {
        let margin = cells * self.cell;
        pos.x <= self.origin.x + margin
            || pos.x + self.cell >= self.origin.x + self.width - margin
            || pos.y <= self.origin.y + margin
            || pos.y + self.cell >= self.origin.y + self.height - margin
    }

    /// Pick a uniformly random cell-aligned position inside the rectangle
    pub fn random_cell<R: Rng>(&self, rng: &mut R) -> Position {
        let col = rng.gen_range(0..self.columns());
        let row = rng.gen_range(0..self.rows());
        Position::new(
            self.origin.x + col * self.cell,
            self.origin.y + row * self.cell,
        )
    }
}
