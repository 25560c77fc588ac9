//! Defines the grid of cells that backs a player's board.

use std::ops::{Index, IndexMut};

use crate::board::coordinate::{Coordinate, BOARD_SIZE};

const TOTAL_CELLS: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

/// The state of a single cell in a player's grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CellState {
    /// Open water, never fired upon.
    Empty,
    /// Occupied by a placed ship, not yet hit.
    Ship,
    /// Occupied by a placed ship and hit.
    Hit,
    /// Fired upon without hitting a ship.
    Miss,
}

impl CellState {
    /// Integer code for this cell state, as rendered at the serialization
    /// boundary. These values are part of the engine's observable contract
    /// and must not change.
    pub fn code(self) -> i8 {
        match self {
            CellState::Empty => 0,
            CellState::Ship => 1,
            CellState::Hit => 2,
            CellState::Miss => -1,
        }
    }

    /// Recover a cell state from its integer code.
    pub fn from_code(code: i8) -> Option<Self> {
        match code {
            0 => Some(CellState::Empty),
            1 => Some(CellState::Ship),
            2 => Some(CellState::Hit),
            -1 => Some(CellState::Miss),
            _ => None,
        }
    }
}

impl Default for CellState {
    fn default() -> Self {
        CellState::Empty
    }
}

/// Fixed 10x10 grid of cell states, stored row-major.
#[derive(Debug)]
pub(super) struct Grid {
    cells: [CellState; TOTAL_CELLS],
}

impl Grid {
    pub(super) fn new() -> Self {
        Self {
            cells: [CellState::Empty; TOTAL_CELLS],
        }
    }

    /// Convert a coordinate to a linear index, or `None` if out of bounds.
    fn linearize(coord: Coordinate) -> Option<usize> {
        if coord.in_bounds() {
            Some((coord.y as usize - 1) * BOARD_SIZE as usize + (coord.x as usize - 1))
        } else {
            None
        }
    }

    /// Get the state of the cell at the given [`Coordinate`].
    pub(super) fn get(&self, coord: Coordinate) -> Option<CellState> {
        Self::linearize(coord).map(|i| self.cells[i])
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut(&mut self, coord: Coordinate) -> Option<&mut CellState> {
        Self::linearize(coord).map(move |i| &mut self.cells[i])
    }

    /// Count the cells currently in the given state.
    pub(super) fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }
}

impl Index<Coordinate> for Grid {
    type Output = CellState;

    fn index(&self, coord: Coordinate) -> &Self::Output {
        let i = Self::linearize(coord).expect("coordinate out of bounds");
        &self.cells[i]
    }
}

impl IndexMut<Coordinate> for Grid {
    fn index_mut(&mut self, coord: Coordinate) -> &mut Self::Output {
        let i = Self::linearize(coord).expect("coordinate out of bounds");
        &mut self.cells[i]
    }
}
