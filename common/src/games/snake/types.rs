#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, velocity: Velocity) -> Cell {
        Cell::new(self.x + velocity.dx, self.y + velocity.dy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }

    /// Directions that take a fresh game out of idle. Left alone does not.
    pub fn starts_game(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down | Direction::Right)
    }
}

/// Per-tick displacement in pixels. Exactly one component is non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Velocity {
    pub dx: i32,
    pub dy: i32,
}

impl Velocity {
    pub fn new(direction: Direction, unit_size: i32) -> Self {
        let (dx, dy) = match direction {
            Direction::Up => (0, -unit_size),
            Direction::Down => (0, unit_size),
            Direction::Left => (-unit_size, 0),
            Direction::Right => (unit_size, 0),
        };
        Self { dx, dy }
    }

    pub fn direction(&self) -> Direction {
        if self.dx > 0 {
            Direction::Right
        } else if self.dx < 0 {
            Direction::Left
        } else if self.dy < 0 {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    pub fn is_opposite(&self, other: &Velocity) -> bool {
        self.dx == -other.dx && self.dy == -other.dy
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Idle,
    Running,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverReason {
    WallCollision,
    SelfCollision,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Food,
    SnakeHead,
    SnakeBody,
}
