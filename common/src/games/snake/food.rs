use std::collections::HashSet;

use crate::games::SessionRng;

use super::grid::Grid;
use super::types::Cell;

/// Rejection attempts before falling back to enumerating the free cells.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 256;

/// Picks a uniformly random free cell, or `None` when every cell is occupied.
pub fn place_food(grid: &Grid, occupied: &HashSet<Cell>, rng: &mut SessionRng) -> Option<Cell> {
    if grid.cell_count() == 0 {
        return None;
    }

    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let cell = grid.random_cell(rng);
        if !occupied.contains(&cell) {
            return Some(cell);
        }
    }

    let free: Vec<Cell> = grid.cells().filter(|cell| !occupied.contains(cell)).collect();
    if free.is_empty() {
        return None;
    }
    Some(free[rng.random_range(0..free.len())])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_avoids_occupied_cells() {
        let grid = Grid::new(125, 125, 25);
        let occupied: HashSet<Cell> = grid.cells().take(20).collect();
        let mut rng = SessionRng::new(11);

        for _ in 0..200 {
            let cell = place_food(&grid, &occupied, &mut rng).unwrap();
            assert!(grid.contains(cell));
            assert!(!occupied.contains(&cell));
        }
    }

    #[test]
    fn test_single_free_cell_is_found() {
        let grid = Grid::new(500, 500, 25);
        let free = Cell::new(250, 475);
        let occupied: HashSet<Cell> = grid.cells().filter(|cell| *cell != free).collect();
        let mut rng = SessionRng::new(5);

        assert_eq!(place_food(&grid, &occupied, &mut rng), Some(free));
    }

    #[test]
    fn test_full_board_returns_none() {
        let grid = Grid::new(50, 50, 25);
        let occupied: HashSet<Cell> = grid.cells().collect();
        let mut rng = SessionRng::new(5);

        assert_eq!(place_food(&grid, &occupied, &mut rng), None);
    }
}
