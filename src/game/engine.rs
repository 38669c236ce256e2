use super::action::{Action, Direction};
use super::config::GameConfig;
use super::grid::Grid;
use super::session::{Fruit, Session};
use super::snake::Snake;

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Head left the playable rectangle
    Wall,
    /// Head ran into the trail
    SelfHit,
}

/// What one tick did to the session.
///
/// Collisions are reported here instead of flipping any flag inside the
/// checks; the loop that called `step` owns the round-over transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Whether the snake ate the fruit this tick
    pub ate_fruit: bool,
    /// The collision that ended the round, if any
    pub collision: Option<Collision>,
}

/// The game engine: owns the grid, the config, and the fruit RNG, and
/// advances a `Session` one tick at a time. Stepping never touches the
/// clock, so any number of ticks can be simulated instantly.
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    pub fn new(config: GameConfig, grid: Grid) -> Self {
        Self {
            config,
            grid,
            rng: rand::thread_rng(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Build a fresh session: a snake of the configured length at the
    /// rectangle origin heading down, a random fruit, and a zero score.
    pub fn new_round(&mut self) -> Session {
        let snake = Snake::new(
            self.grid.origin(),
            Direction::Down,
            self.config.initial_snake_length,
            self.grid.cell(),
        );
        let fruit = Fruit::spawn(&self.grid, &mut self.rng);

        Session::new(snake, fruit)
    }

    /// Execute one tick: apply the buffered action, advance the snake,
    /// resolve the fruit, evaluate collisions, refresh the color tag.
    pub fn step(&mut self, session: &mut Session, action: Action) -> TickOutcome {
        if let Action::Move(direction) = action {
            session.snake.set_direction(direction);
        }

        // Growth is folded into the advance so the new segment appears
        // at the old tail position and the trail never shows a gap.
        let ate_fruit = session.snake.next_head() == session.fruit.pos;
        session.snake.advance(ate_fruit);

        if ate_fruit {
            session.score.increment();
            session.fruit = Fruit::spawn(&self.grid, &mut self.rng);
        }

        let head = session.snake.head();
        let collision = if !self.grid.contains(head) {
            Some(Collision::Wall)
        } else if session.snake.hits_self() {
            Some(Collision::SelfHit)
        } else {
            None
        };

        session.color = session
            .snake
            .proximity_color(&self.grid, self.config.proximity_cells);

        TickOutcome {
            ate_fruit,
            collision,
        }
    }
}
