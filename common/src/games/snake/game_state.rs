use crate::games::SessionRng;

use super::collision::check_collision;
use super::food::place_food;
use super::grid::Grid;
use super::snake::{Snake, set_direction};
use super::types::{Cell, Direction, GameOverReason, GameStatus, Velocity};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub ate_food: bool,
    pub game_over: Option<GameOverReason>,
}

#[derive(Clone, Debug)]
pub struct SnakeGameState {
    grid: Grid,
    initial_length: usize,
    snake: Snake,
    velocity: Velocity,
    /// Velocity of the last step actually taken. Turns are checked against it.
    heading: Velocity,
    food: Option<Cell>,
    score: u32,
    status: GameStatus,
    game_over_reason: Option<GameOverReason>,
}

impl SnakeGameState {
    pub fn new(grid: Grid, initial_length: usize, rng: &mut SessionRng) -> Self {
        let snake = Snake::initial(&grid, initial_length);
        let food = place_food(&grid, &snake.occupied(), rng);
        let velocity = Velocity::new(Direction::Right, grid.unit_size());
        Self {
            grid,
            initial_length,
            snake,
            velocity,
            heading: velocity,
            food,
            score: 0,
            status: GameStatus::Idle,
            game_over_reason: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over_reason
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// Applies a turn request. Returns `true` when it moved the game from idle to running.
    ///
    /// A request that reverses the last step taken is dropped and leaves any earlier turn
    /// queued for the next tick in place.
    pub fn apply_direction(&mut self, direction: Direction) -> bool {
        if self.status == GameStatus::GameOver {
            return false;
        }

        let started = self.status == GameStatus::Idle && direction.starts_game();
        if started {
            self.status = GameStatus::Running;
        }

        let unit_size = self.grid.unit_size();
        if !Velocity::new(direction, unit_size).is_opposite(&self.heading) {
            self.velocity = set_direction(direction, self.heading, unit_size);
        }
        started
    }

    /// One simulation step: move, eat, check for the end. A no-op unless running.
    pub fn tick(&mut self, rng: &mut SessionRng) -> TickOutcome {
        if self.status != GameStatus::Running {
            return TickOutcome::default();
        }

        let ate_food = self.snake.step(self.velocity, self.food);
        self.heading = self.velocity;
        if ate_food {
            self.score += 1;
            self.food = place_food(&self.grid, &self.snake.occupied(), rng);
        }

        let game_over = check_collision(&self.snake, &self.grid);
        if game_over.is_some() {
            self.status = GameStatus::GameOver;
            self.game_over_reason = game_over;
        }

        TickOutcome { ate_food, game_over }
    }

    /// Back to a fresh idle game. Refused while running.
    pub fn restart(&mut self, rng: &mut SessionRng) -> bool {
        if self.status == GameStatus::Running {
            return false;
        }
        *self = Self::new(self.grid, self.initial_length, rng);
        true
    }

    #[cfg(test)]
    pub(crate) fn set_snake(&mut self, snake: Snake, velocity: Velocity) {
        self.snake = snake;
        self.velocity = velocity;
        self.heading = velocity;
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, food: Option<Cell>) {
        self.food = food;
    }
}
