use serde::{Deserialize, Serialize};

/// A position on the game grid, in cells rather than pixels
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell reached by moving `(dx, dy)` from this one
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Top-left pixel corner of the cell
    pub fn to_pixel(self, cell_size: f32) -> (f32, f32) {
        (self.x as f32 * cell_size, self.y as f32 * cell_size)
    }
}

/// Playfield dimensions in cells
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    pub fn area(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }

    /// Every cell of the grid, row by row
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell { x, y }))
    }

    pub fn pixel_size(&self, cell_size: f32) -> (f32, f32) {
        (self.width as f32 * cell_size, self.height as f32 * cell_size)
    }
}

/// Pixel rectangle `(x, y, side)` of a food block of `size` pixels,
/// centred on `cell`. The block spills over the cell edges when
/// `size > cell_size`.
pub fn food_block_rect(cell: Cell, size: f32, cell_size: f32) -> (f32, f32, f32) {
    let (px, py) = cell.to_pixel(cell_size);
    let spill = (size - cell_size) / 2.0;
    (px - spill, py - spill, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        let c = Cell::new(5, 5);
        assert_eq!(c.offset(1, 0), Cell::new(6, 5));
        assert_eq!(c.offset(0, -1), Cell::new(5, 4));
    }

    #[test]
    fn test_bounds() {
        let grid = Grid::new(20, 20);
        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(19, 19)));
        assert!(!grid.contains(Cell::new(-1, 5)));
        assert!(!grid.contains(Cell::new(20, 0)));
        assert!(!grid.contains(Cell::new(0, 20)));
    }

    #[test]
    fn test_cells_cover_grid() {
        let grid = Grid::new(3, 2);
        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(cells.len(), grid.area());
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[5], Cell::new(2, 1));
    }

    #[test]
    fn test_pixel_conversion() {
        assert_eq!(Cell::new(3, 4).to_pixel(10.0), (30.0, 40.0));
        assert_eq!(Grid::new(40, 30).pixel_size(10.0), (400.0, 300.0));
    }

    #[test]
    fn test_food_block_is_centred() {
        assert_eq!(food_block_rect(Cell::new(2, 2), 10.0, 10.0), (20.0, 20.0, 10.0));
        assert_eq!(food_block_rect(Cell::new(2, 2), 14.0, 10.0), (18.0, 18.0, 14.0));
    }
}
