use itertools::Itertools;

use crate::{
    cell::Cell,
    error::{Error, Result},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// A grid with every cell dead.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; len],
        })
    }

    /// Take ownership of an existing row-major buffer.
    pub fn with_cells(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self> {
        let len = check_dimensions(width, height)?;
        check_length(len, cells.len())?;
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn from_bytes(width: usize, height: usize, bytes: Vec<u8>) -> Result<Self> {
        Self::with_cells(width, height, bytes.into_iter().map(Cell::from).collect())
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.cells.iter().copied().map(u8::from).collect()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// (width, height)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn index_for(&self, row: isize, col: isize) -> Option<usize> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    pub fn coords_for(&self, index: usize) -> Option<(isize, isize)> {
        if index >= self.cells.len() {
            return None;
        }
        let row = index / self.width;
        let col = index - row * self.width;
        Some((row as isize, col as isize))
    }

    /// Out of bounds reads are dead.
    pub fn get(&self, row: isize, col: isize) -> Cell {
        self.index_for(row, col).map_or(Cell::Dead, |i| self.cells[i])
    }

    /// Out of bounds writes are dropped.
    pub fn set(&mut self, row: isize, col: isize, value: impl Into<Cell>) {
        if let Some(i) = self.index_for(row, col) {
            self.cells[i] = value.into();
        }
    }

    pub fn toggle(&mut self, row: isize, col: isize) {
        let flipped = !self.get(row, col);
        self.set(row, col, flipped);
    }

    /// Live cells among the eight Moore neighbours. Neighbours off the grid
    /// count as dead.
    pub fn living_neighbors(&self, row: isize, col: isize) -> u8 {
        neighbours((row, col))
            .filter_map(|(y, x)| self.index_for(y, x))
            .filter(|&i| self.cells[i].is_alive())
            .count() as u8
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Live coordinates in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (isize, isize)> + '_ {
        (0..self.height as isize)
            .cartesian_product(0..self.width as isize)
            .filter(|&(row, col)| self.get(row, col).is_alive())
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Swap in a whole new generation.
    pub fn replace_cells(&mut self, cells: Vec<Cell>) -> Result<()> {
        check_length(self.cells.len(), cells.len())?;
        self.cells = cells;
        Ok(())
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            width: 32,
            height: 32,
            cells: vec![Cell::Dead; 32 * 32],
        }
    }
}

fn neighbours((y, x): (isize, isize)) -> impl Iterator<Item = (isize, isize)> {
    (-1..=1)
        .cartesian_product(-1..=1)
        .filter(|&d| d != (0, 0))
        .filter_map(move |(dy, dx)| Some((y.checked_add(dy)?, x.checked_add(dx)?)))
}

/// The cell count of a `width` x `height` grid. Both sides must be positive,
/// and the count must fit an allocation and `isize` coordinates.
fn check_dimensions(width: usize, height: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::EmptyDimensions { width, height });
    }
    match width.checked_mul(height) {
        Some(len) if len <= isize::MAX as usize => Ok(len),
        _ => Err(Error::TooLarge { width, height }),
    }
}

fn check_length(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(Error::BufferLength { expected, actual });
    }
    Ok(())
}
