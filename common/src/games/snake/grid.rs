use crate::games::SessionRng;

use super::types::Cell;

/// Pixel board split into square cells of `unit_size`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    unit_size: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32, unit_size: i32) -> Self {
        Self {
            width,
            height,
            unit_size,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn unit_size(&self) -> i32 {
        self.unit_size
    }

    pub fn columns(&self) -> i32 {
        self.width / self.unit_size
    }

    pub fn rows(&self) -> i32 {
        self.height / self.unit_size
    }

    pub fn cell_count(&self) -> usize {
        (self.columns().max(0) as usize) * (self.rows().max(0) as usize)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    pub fn cell_at(&self, column: i32, row: i32) -> Cell {
        Cell::new(column * self.unit_size, row * self.unit_size)
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows()).flat_map(move |row| (0..self.columns()).map(move |column| self.cell_at(column, row)))
    }

    /// Needs at least one column and one row.
    pub(crate) fn random_cell(&self, rng: &mut SessionRng) -> Cell {
        let column = rng.random_range(0..self.columns());
        let row = rng.random_range(0..self.rows());
        self.cell_at(column, row)
    }

    pub fn center(&self) -> (i32, i32) {
        (self.width / 2, self.height / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_boundaries() {
        let grid = Grid::new(500, 500, 25);
        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(475, 475)));
        assert!(grid.contains(Cell::new(499, 0)));
        assert!(!grid.contains(Cell::new(500, 0)));
        assert!(!grid.contains(Cell::new(-1, 0)));
        assert!(!grid.contains(Cell::new(0, 500)));
        assert!(!grid.contains(Cell::new(0, -25)));
    }

    #[test]
    fn test_cells_cover_grid_once() {
        let grid = Grid::new(100, 50, 25);
        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(cells.len(), grid.cell_count());
        assert_eq!(cells.len(), 8);
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[7], Cell::new(75, 25));
    }

    #[test]
    fn test_random_cell_is_aligned_and_on_board() {
        let grid = Grid::new(500, 300, 25);
        let mut rng = SessionRng::new(3);
        for _ in 0..500 {
            let cell = grid.random_cell(&mut rng);
            assert!(grid.contains(cell));
            assert_eq!(cell.x % 25, 0);
            assert_eq!(cell.y % 25, 0);
        }
    }
}
