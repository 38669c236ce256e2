use super::action::Direction;
use super::grid::{Grid, Position};

/// Cosmetic color tag for the snake, recomputed every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTag {
    /// Default body color
    Normal,
    /// Head is close to a wall
    Alert,
}

/// The snake: a direction plus an ordered history of cell positions.
///
/// The head lives at index 0; every later index holds the position its
/// predecessor occupied one tick earlier, which is what makes the
/// segments trail. Segments spawn coincident with the head and fan out
/// as the snake moves, so a fresh snake never starts outside the
/// rectangle or on top of its own trail.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, head at index 0
    body: Vec<Position>,
    direction: Direction,
    /// Pixels moved per tick (one grid cell)
    step: i32,
}

impl Snake {
    pub fn new(head: Position, direction: Direction, length: usize, step: i32) -> Self {
        Self {
            body: vec![head; length.max(1)],
            direction,
            step,
        }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Trailing segments, excluding the head
    pub fn trail(&self) -> &[Position] {
        &self.body[1..]
    }

    /// All segment positions, head first
    pub fn segments(&self) -> &[Position] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Turn toward `direction`. A request for the exact reverse of the
    /// current direction is ignored, which rules out instant
    /// self-reversal.
    pub fn set_direction(&mut self, direction: Direction) {
        if !self.direction.is_opposite(direction) {
            self.direction = direction;
        }
    }

    /// The position the head will occupy after the next advance
    pub fn next_head(&self) -> Position {
        self.head().stepped(self.direction, self.step)
    }

    /// Move one cell in the current direction. Each trailing segment
    /// takes the position its predecessor held before the move; the old
    /// tail is dropped unless `grow` is set, in which case it stays and
    /// the snake is one segment longer.
    pub fn advance(&mut self, grow: bool) {
        let new_head = self.next_head();
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    /// True iff the head occupies the same cell as any trailing segment
    pub fn hits_self(&self) -> bool {
        self.trail().contains(&self.head())
    }

    /// True iff `pos` is covered by any segment
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Alert when the head is within `cells` cells of a rectangle edge
    pub fn proximity_color(&self, grid: &Grid, cells: i32) -> ColorTag {
        if grid.near_edge(self.head(), cells) {
            ColorTag::Alert
        } else {
            ColorTag::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake() -> Snake {
        Snake::new(Position::new(250, 250), Direction::Right, 6, 50)
    }

    #[test]
    fn test_spawn_is_coincident() {
        let s = snake();
        assert_eq!(s.len(), 6);
        assert_eq!(s.head(), Position::new(250, 250));
        assert!(s.trail().iter().all(|&p| p == Position::new(250, 250)));
        assert!(!s.hits_self());
    }

    #[test]
    fn test_advance_moves_one_cell() {
        let mut s = snake();
        s.advance(false);
        assert_eq!(s.head(), Position::new(300, 250));
        assert_eq!(s.trail()[0], Position::new(250, 250));
    }

    #[test]
    fn test_advance_preserves_length_without_growth() {
        let mut s = snake();
        for _ in 0..20 {
            s.advance(false);
        }
        assert_eq!(s.len(), 6);
    }

    #[test]
    fn test_trail_is_one_step_delay_chain() {
        let mut s = snake();
        s.advance(false);
        s.set_direction(Direction::Down);
        s.advance(false);

        // head went (250,250) -> (300,250) -> (300,300)
        assert_eq!(s.head(), Position::new(300, 300));
        assert_eq!(s.trail()[0], Position::new(300, 250));
        assert_eq!(s.trail()[1], Position::new(250, 250));
    }

    #[test]
    fn test_growth_keeps_tail_in_place() {
        let mut s = snake();
        for _ in 0..6 {
            s.advance(false);
        }
        let tail_before = *s.segments().last().unwrap();

        s.advance(true);
        assert_eq!(s.len(), 7);
        assert_eq!(*s.segments().last().unwrap(), tail_before);
    }

    #[test]
    fn test_reverse_direction_is_rejected() {
        let mut s = snake();
        s.set_direction(Direction::Left);
        assert_eq!(s.direction(), Direction::Right);

        s.set_direction(Direction::Up);
        assert_eq!(s.direction(), Direction::Up);
        s.set_direction(Direction::Down);
        assert_eq!(s.direction(), Direction::Up);
    }

    #[test]
    fn test_self_collision_in_tight_loop() {
        // Length 5 is enough to close a 2x2 loop
        let mut s = Snake::new(Position::new(250, 250), Direction::Right, 5, 50);
        for _ in 0..4 {
            s.advance(false);
        }
        assert!(!s.hits_self());

        s.advance(false); // (500,250)
        s.set_direction(Direction::Down);
        s.advance(false); // (500,300)
        s.set_direction(Direction::Left);
        s.advance(false); // (450,300)
        s.set_direction(Direction::Up);
        s.advance(false); // (450,250) - occupied by the trail

        assert!(s.hits_self());
    }

    #[test]
    fn test_proximity_color() {
        let grid = Grid::from_display(1000, 1000, 50, 0, 0);
        let center = Snake::new(Position::new(500, 500), Direction::Down, 6, 50);
        assert_eq!(center.proximity_color(&grid, 5), ColorTag::Normal);

        let near_wall = Snake::new(Position::new(500, 50), Direction::Down, 6, 50);
        assert_eq!(near_wall.proximity_color(&grid, 5), ColorTag::Alert);
    }
}
