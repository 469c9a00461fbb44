use std::collections::{HashSet, VecDeque};

use super::grid::Grid;
use super::types::{Cell, Direction, Velocity};

/// Body segments, head first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Builds a snake from its segments, head first.
    ///
    /// # Panics
    ///
    /// Panics when `cells` is empty.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        assert!(!body.is_empty(), "Snake needs at least one segment");
        Self { body }
    }

    /// Horizontal snake on row 1 with its head in column `length`, facing right.
    pub fn initial(grid: &Grid, length: usize) -> Self {
        let length = length.max(1) as i32;
        Self::from_cells((1..=length).rev().map(|column| grid.cell_at(column, 1)))
    }

    pub fn head(&self) -> Cell {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Cell {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }

    pub fn occupied(&self) -> HashSet<Cell> {
        self.body.iter().copied().collect()
    }

    /// Moves one step. Keeps the tail and returns `true` when the new head lands on `food`.
    pub fn step(&mut self, velocity: Velocity, food: Option<Cell>) -> bool {
        let next_head = self.head().offset(velocity);
        self.body.push_front(next_head);

        if food == Some(next_head) {
            true
        } else {
            self.body.pop_back();
            false
        }
    }
}

/// Non-mutating form of [`Snake::step`].
pub fn advance(snake: &Snake, velocity: Velocity, food: Option<Cell>) -> (Snake, bool) {
    let mut next = snake.clone();
    let ate_food = next.step(velocity, food);
    (next, ate_food)
}

/// Keeps `current` when `requested` would reverse it.
pub fn set_direction(requested: Direction, current: Velocity, unit_size: i32) -> Velocity {
    let candidate = Velocity::new(requested, unit_size);
    if candidate.is_opposite(&current) {
        current
    } else {
        candidate
    }
}
