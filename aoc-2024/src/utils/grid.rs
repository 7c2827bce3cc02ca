//! Dense 2D grid used by the grid-traversal days.

use aoc_solver::ParseError;
use std::fmt;
use std::ops::{Index, IndexMut};

/// A rectangular grid backed by a flat `Vec<T>` in row-major order.
///
/// Indexing with `grid[(row, col)]` panics out of bounds; [`Grid::get`] is
/// the checked alternative. Byte grids ([`Grid<u8>`]) can be read from and
/// written back to the line-oriented puzzle format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Grid of the given dimensions with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }

    /// Build a grid from row vectors; all rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, ParseError> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != cols) {
            return Err(ParseError::InvalidFormat(
                "grid rows differ in length".into(),
            ));
        }
        Ok(Self {
            rows: row_count,
            cols,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn flat_index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Bounds-checked cell access.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.flat_index(row, col).map(|i| &self.cells[i])
    }

    /// Bounds-checked mutable cell access.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.flat_index(row, col).map(|i| &mut self.cells[i])
    }

    /// One row as a slice. Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// All cells in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.cells.iter()
    }

    /// All (row, col) positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |r| (0..cols).map(move |c| (r, c)))
    }

    /// Move from `pos` by a signed delta, or `None` when that leaves the
    /// grid.
    pub fn step(&self, pos: (usize, usize), delta: (isize, isize)) -> Option<(usize, usize)> {
        let row = pos.0.checked_add_signed(delta.0)?;
        let col = pos.1.checked_add_signed(delta.1)?;
        (row < self.rows && col < self.cols).then_some((row, col))
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.get(row, col) {
            Some(cell) => cell,
            None => panic!(
                "grid position ({row}, {col}) out of bounds for {}x{} grid",
                self.rows, self.cols
            ),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let (rows, cols) = (self.rows, self.cols);
        match self.get_mut(row, col) {
            Some(cell) => cell,
            None => panic!("grid position ({row}, {col}) out of bounds for {rows}x{cols} grid"),
        }
    }
}

impl Grid<u8> {
    /// Read a rectangular block of lines as a byte grid.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut lines = input.lines();
        let first = lines
            .next()
            .ok_or_else(|| ParseError::MissingData("empty grid".into()))?;

        let cols = first.len();
        let mut cells: Vec<u8> = first.bytes().collect();
        let mut rows = 1;
        for line in lines {
            if line.len() != cols {
                return Err(ParseError::InvalidFormat(format!(
                    "grid line {} is {} wide, expected {cols}",
                    rows + 1,
                    line.len()
                )));
            }
            cells.extend(line.bytes());
            rows += 1;
        }

        Ok(Self { rows, cols, cells })
    }
}

/// Inverse of [`Grid::parse`]: one line per row, trailing newline.
impl fmt::Display for Grid<u8> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            let line = std::str::from_utf8(self.row(r)).map_err(|_| fmt::Error)?;
            f.write_str(line)?;
            f.write_str("\n")?;
        }
        Ok(())
    }
}
