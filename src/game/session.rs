use rand::Rng;

use super::grid::{Grid, Position};
use super::snake::{ColorTag, Snake};

/// A single fruit, always cell-aligned and inside the playable rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fruit {
    pub pos: Position,
}

impl Fruit {
    /// Spawn at a uniformly random cell inside the rectangle.
    ///
    /// Spawning does not avoid snake-occupied cells; a fruit landing
    /// under the snake is simply eaten a few ticks later. Kept as-is
    /// from the original game.
    pub fn spawn<R: Rng>(grid: &Grid, rng: &mut R) -> Self {
        Self {
            pos: grid.random_cell(rng),
        }
    }
}

/// Points scored in the current round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score(u32);

impl Score {
    pub fn increment(&mut self) {
        self.0 += 1;
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

/// Everything that lives and dies with one round: the snake, the fruit,
/// the score, and the current cosmetic color. The engine replaces the
/// whole aggregate on reset; nothing outside it needs rebinding.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub snake: Snake,
    pub fruit: Fruit,
    pub score: Score,
    pub color: ColorTag,
}

impl Session {
    pub fn new(snake: Snake, fruit: Fruit) -> Self {
        Self {
            snake,
            fruit,
            score: Score::default(),
            color: ColorTag::Normal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_counts_up_and_resets() {
        let mut score = Score::default();
        assert_eq!(score.value(), 0);

        score.increment();
        score.increment();
        assert_eq!(score.value(), 2);

        score.reset();
        assert_eq!(score.value(), 0);
    }

    #[test]
    fn test_fruit_spawns_inside_grid() {
        let grid = Grid::from_display(500, 500, 50, 0, 0);
        let mut rng = rand::thread_rng();

        for _ in 0..50 {
            let fruit = Fruit::spawn(&grid, &mut rng);
            assert!(grid.contains(fruit.pos));
        }
    }
}
