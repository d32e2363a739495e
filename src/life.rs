use tracing::info;

use crate::Coord;
use crate::events::Command;
use crate::grid::Fill;
use crate::grid::GridPair;

/// One independent Life simulation: the double-buffered grid plus the
/// run/pause and quit flags the driving loop consults.
///
/// The simulation starts running (not paused) and has no terminal state of
/// its own; the quit flag is only ever raised by a command.
pub struct Simulation {
    grids: GridPair,
    paused: bool,
    quit: bool,
}

impl Simulation {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            grids: GridPair::new(rows, cols),
            paused: false,
            quit: false,
        }
    }

    pub fn grids(&self) -> &GridPair {
        &self.grids
    }

    pub fn grids_mut(&mut self) -> &mut GridPair {
        &mut self.grids
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Number of live cells in the 8-cell Moore neighborhood of (row, col)
    /// on the active buffer. Neighbors past the grid edges count as dead.
    pub fn live_neighbors(&self, row: Coord, col: Coord) -> u8 {
        let mut count = 0;

        for dr in -1..=1 {
            for dc in -1..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }

                count += self.grids.get(row + dr, col + dc) as u8;
            }
        }

        count
    }

    /// The B3/S23 rule applied to the active buffer's cell at (row, col).
    ///
    /// Pure read of the current generation; never mutates state.
    pub fn next_state(&self, row: Coord, col: Coord) -> bool {
        let alive = self.grids.get(row, col);
        let neighbors = self.live_neighbors(row, col);

        match (alive, neighbors) {
            // survives
            (true, 2 | 3) => true,
            // born
            (false, 3) => true,
            // under/overpopulation, or stays dead
            _ => false,
        }
    }

    /// Compute the next generation into the inactive buffer, then swap.
    ///
    /// The inactive buffer is cleared first, then every cell of the grid is
    /// written, including the last row and column. The previously active
    /// buffer becomes the scratch space for the following call; outside this
    /// method no partially written generation is ever observable.
    pub fn advance(&mut self) {
        let scratch = 1 - self.grids.active_index();
        self.grids.fill(scratch, Fill::Value(false));

        for row in 0..self.grids.rows() {
            for col in 0..self.grids.cols() {
                let alive = self.next_state(row as Coord, col as Coord);
                self.grids.inactive_mut().set(row, col, alive);
            }
        }

        self.grids.swap();
    }

    /// Reseed the run: buffer 0 becomes a fresh random field and the active
    /// generation, buffer 1 goes back to all-dead scratch.
    pub fn randomize(&mut self) {
        self.grids.set_active(0);
        self.grids.fill(0, Fill::Random);
        self.grids.fill(1, Fill::Value(false));
    }

    /// Apply a keyboard command. Quit commands only raise a flag; the
    /// driving loop finishes the current tick before it checks it.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::TogglePause => {
                self.paused = !self.paused;
                info!(paused = self.paused, "toggling pause");
            }
            Command::Randomize => {
                info!("randomizing grid");
                self.randomize();
            }
            Command::Quit | Command::ForceQuit => {
                info!("exiting");
                self.quit = true;
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::Simulation;
    use crate::events::Command;

    fn with_live_cells(rows: usize, cols: usize, cells: &[(usize, usize)]) -> Simulation {
        let mut sim = Simulation::new(rows, cols);

        for &(row, col) in cells {
            sim.grids_mut().active_mut().set(row, col, true);
        }

        sim
    }

    #[test]
    fn dead_cell_with_three_neighbors_is_born() {
        let sim = with_live_cells(5, 5, &[(1, 1), (1, 2), (1, 3)]);

        assert_eq!(sim.live_neighbors(2, 2), 3);
        assert!(sim.next_state(2, 2));
    }

    #[test]
    fn live_cell_survives_only_on_two_or_three() {
        // (2, 2) is alive; surround it with 0..=8 live neighbors
        let neighbors = [
            (1, 1),
            (1, 2),
            (1, 3),
            (2, 1),
            (2, 3),
            (3, 1),
            (3, 2),
            (3, 3),
        ];

        for n in 0..=8 {
            let mut cells = vec![(2, 2)];
            cells.extend_from_slice(&neighbors[..n]);

            let sim = with_live_cells(5, 5, &cells);

            assert_eq!(sim.live_neighbors(2, 2) as usize, n);
            assert_eq!(sim.next_state(2, 2), n == 2 || n == 3, "count {n}");
        }
    }

    #[test]
    fn empty_grid_stays_empty() {
        let mut sim = Simulation::new(6, 6);
        sim.advance();

        for row in 0..6 {
            for col in 0..6 {
                assert!(!sim.grids().get(row, col));
            }
        }
    }

    #[test]
    fn lone_cell_dies_of_underpopulation() {
        let mut sim = with_live_cells(5, 5, &[(2, 2)]);
        sim.advance();

        assert!(!sim.grids().get(2, 2));
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        // vertical blinker in the middle of the grid
        let mut sim = with_live_cells(5, 5, &[(1, 2), (2, 2), (3, 2)]);

        sim.advance();

        // horizontal after one step
        assert!(sim.grids().get(2, 1));
        assert!(sim.grids().get(2, 2));
        assert!(sim.grids().get(2, 3));
        assert!(!sim.grids().get(1, 2));
        assert!(!sim.grids().get(3, 2));

        sim.advance();

        // back to vertical after two
        assert!(sim.grids().get(1, 2));
        assert!(sim.grids().get(2, 2));
        assert!(sim.grids().get(3, 2));
        assert!(!sim.grids().get(2, 1));
        assert!(!sim.grids().get(2, 3));
    }

    #[test]
    fn blinker_against_the_last_column_still_oscillates() {
        // The update covers the whole grid, edges included, so a pattern
        // touching the last row or column evolves like any other.
        let mut sim = with_live_cells(5, 5, &[(1, 4), (2, 4), (3, 4)]);

        sim.advance();

        // the horizontal phase pokes out of bounds and is clipped
        assert!(sim.grids().get(2, 3));
        assert!(sim.grids().get(2, 4));
        assert!(!sim.grids().get(1, 4));
        assert!(!sim.grids().get(3, 4));
    }

    #[test]
    fn advance_swaps_the_active_buffer() {
        let mut sim = Simulation::new(3, 3);

        assert_eq!(sim.grids().active_index(), 0);
        sim.advance();
        assert_eq!(sim.grids().active_index(), 1);
        sim.advance();
        assert_eq!(sim.grids().active_index(), 0);
    }

    #[test]
    fn randomize_resets_active_and_clears_scratch() {
        let mut sim = Simulation::new(8, 8);

        // move off buffer 0 and dirty both buffers
        sim.grids_mut().active_mut().set(0, 0, true);
        sim.advance();
        sim.apply(Command::Randomize);

        assert_eq!(sim.grids().active_index(), 0);

        for row in 0..8 {
            for col in 0..8 {
                assert!(!sim.grids().inactive().get(row, col));
            }
        }
    }

    #[test]
    fn pause_toggle_flips_state() {
        let mut sim = Simulation::new(2, 2);

        assert!(!sim.is_paused());
        sim.apply(Command::TogglePause);
        assert!(sim.is_paused());
        sim.apply(Command::TogglePause);
        assert!(!sim.is_paused());
    }

    #[test]
    fn quit_raises_the_flag() {
        let mut sim = Simulation::new(2, 2);

        assert!(!sim.quit_requested());
        sim.apply(Command::Quit);
        assert!(sim.quit_requested());
    }
}
