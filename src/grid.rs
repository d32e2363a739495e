use std::fmt;

use rand::Rng;

use crate::Coord;

/// What to write into every cell of a buffer.
#[derive(Clone, Copy)]
pub enum Fill {
    /// A literal dead/alive value
    Value(bool),

    /// An independent uniform coin flip per cell
    Random,
}

/// A fixed-shape rectangular field of binary cell states.
///
/// Backed by a flat row-major `Vec<bool>`. The shape never changes after
/// construction; resets overwrite the cells in place.
pub struct Grid {
    cells: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![false; rows * cols],
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Read a cell. Anything outside `[0, rows) x [0, cols)` reads as dead.
    ///
    /// The bounds check is explicit so the grid has no edge failure mode:
    /// neighbor lookups past the border are ordinary dead cells.
    pub fn get(&self, row: Coord, col: Coord) -> bool {
        if row < 0 || col < 0 {
            return false;
        }

        let (row, col) = (row as usize, col as usize);
        if row >= self.rows || col >= self.cols {
            return false;
        }

        self.cells[row * self.cols + col]
    }

    /// Write a cell. Unlike [`Grid::get`], the coordinates must be in
    /// range; an out-of-range write is a caller bug and panics.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        assert!(row < self.rows && col < self.cols, "cell out of range");

        self.cells[row * self.cols + col] = alive;
    }

    pub fn fill(&mut self, fill: Fill) {
        match fill {
            Fill::Value(v) => self.cells.fill(v),
            Fill::Random => {
                let mut rng = rand::rng();

                for cell in &mut self.cells {
                    *cell = rng.random_bool(0.5);
                }
            }
        }
    }

    /// Iterate the (row, col) positions of all live cells.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(i, _)| (i / self.cols, i % self.cols))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let c = if self.cells[row * self.cols + col] {
                    '#'
                } else {
                    '.'
                };

                write!(f, "{c}")?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

/// The double buffer: two same-shaped [`Grid`]s plus an index selecting
/// which one holds the current generation.
///
/// The active buffer is what gets displayed and read; the inactive buffer
/// is scratch space for the next generation. Both are allocated once and
/// overwritten in place for the life of the process.
pub struct GridPair {
    bufs: [Grid; 2],
    active: usize,
}

impl GridPair {
    /// Allocate both buffers, all cells dead, buffer 0 active.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            bufs: [Grid::new(rows, cols), Grid::new(rows, cols)],
            active: 0,
        }
    }

    pub fn rows(&self) -> usize {
        self.bufs[0].rows()
    }

    pub fn cols(&self) -> usize {
        self.bufs[0].cols()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &Grid {
        &self.bufs[self.active]
    }

    pub fn active_mut(&mut self) -> &mut Grid {
        &mut self.bufs[self.active]
    }

    pub fn inactive(&self) -> &Grid {
        &self.bufs[1 - self.active]
    }

    pub fn inactive_mut(&mut self) -> &mut Grid {
        &mut self.bufs[1 - self.active]
    }

    /// Overwrite every cell of the selected buffer (0 or 1).
    pub fn fill(&mut self, buffer: usize, fill: Fill) {
        self.bufs[buffer].fill(fill);
    }

    /// Bounds-safe read of the active buffer. See [`Grid::get`].
    pub fn get(&self, row: Coord, col: Coord) -> bool {
        self.active().get(row, col)
    }

    /// Flip which buffer is active.
    pub fn swap(&mut self) {
        self.active ^= 1;
    }

    pub fn set_active(&mut self, index: usize) {
        assert!(index < 2, "buffer index out of range");

        self.active = index;
    }
}
