//! One side's board: a 10x10 grid of cells plus the fleet placed on it.

use log::{debug, trace};

use crate::ships::{covered_cells, Orientation, Ship, ShipKind, NUM_SHIPS};

use self::grid::Grid;
pub use self::{
    coordinate::{
        format_grid_label, parse_grid_label, Coordinate, OutOfBoundsError, ParseLabelError,
        BOARD_SIZE,
    },
    errors::{FireError, PlaceError},
    grid::CellState,
};

mod coordinate;
mod errors;
mod grid;

/// Outcome of a successfully resolved shot.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FireOutcome {
    /// Nothing was hit.
    Miss,
    /// The given ship was hit but not sunk.
    Hit(ShipKind),
    /// The given ship was hit and every one of its cells has now been hit.
    Sunk(ShipKind),
}

impl FireOutcome {
    /// The plain hit/miss boolean reported at the request boundary.
    pub fn is_hit(self) -> bool {
        !matches!(self, FireOutcome::Miss)
    }
}

/// Summary of one ship's placement status, for the fleet-list query.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ShipStatus {
    /// Kind of the ship.
    pub kind: ShipKind,
    /// Length of the ship.
    pub len: usize,
    /// Whether the ship has been placed.
    pub placed: bool,
}

/// Represents a single player's board, including their ships and their side
/// of the ocean.
///
/// A cell is [`CellState::Ship`] or [`CellState::Hit`] iff exactly one placed
/// ship covers it; overlap is rejected when the ship is placed.
#[derive(Debug)]
pub struct Board {
    /// Grid of cells, updated as ships are placed and shots resolve.
    grid: Grid,
    /// The fleet, one ship of each kind, indexed by kind discriminant.
    ships: [Ship; NUM_SHIPS],
}

impl Board {
    /// Create an empty board with a full fleet of unplaced ships.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            ships: ShipKind::ALL.map(Ship::new),
        }
    }

    /// Whether a ship of `kind` would fit entirely on the board when placed
    /// at `coord` in `orientation`.
    fn fits(kind: ShipKind, coord: Coordinate, orientation: Orientation) -> bool {
        let end = match orientation {
            Orientation::Horizontal => coord.x,
            Orientation::Vertical => coord.y,
        } as usize
            + kind.len()
            - 1;
        coord.in_bounds() && end <= BOARD_SIZE as usize
    }

    /// Dry-run placement check: whether a ship of `kind` could be placed at
    /// `coord` in `orientation`. Returns `false` when the ship would extend
    /// past the edge of the board or any covered cell is not empty. Never
    /// mutates; used by retry loops and by [`place_ship`][Self::place_ship].
    pub fn check_placement(
        &self,
        kind: ShipKind,
        coord: Coordinate,
        orientation: Orientation,
    ) -> bool {
        Self::fits(kind, coord, orientation)
            && covered_cells(kind, coord, orientation)
                .all(|c| self.grid.get(c) == Some(CellState::Empty))
    }

    /// Place the ship of `kind` at `coord` in `orientation`: validate, then
    /// record the placement on the ship and mark every covered cell as
    /// [`CellState::Ship`].
    pub fn place_ship(
        &mut self,
        kind: ShipKind,
        coord: Coordinate,
        orientation: Orientation,
    ) -> Result<(), PlaceError> {
        if self.ship(kind).is_placed() {
            return Err(PlaceError::AlreadyPlaced(kind));
        }
        if !Self::fits(kind, coord, orientation) {
            return Err(PlaceError::OutOfBounds(kind));
        }
        if covered_cells(kind, coord, orientation).any(|c| self.grid[c] != CellState::Empty) {
            return Err(PlaceError::Occupied(kind));
        }
        for c in covered_cells(kind, coord, orientation) {
            self.grid[c] = CellState::Ship;
        }
        self.ships[kind as usize].set_placement(coord, orientation);
        debug!("placed {:?} at ({}, {}) {:?}", kind, coord.x, coord.y, orientation);
        Ok(())
    }

    /// Resolve a shot at `coord`.
    ///
    /// A [`CellState::Ship`] cell becomes [`CellState::Hit`] and the covering
    /// ship records the hit; any other cell becomes [`CellState::Miss`].
    /// Repeat shots at the same cell overwrite its state without error, so a
    /// previously hit cell re-resolves as a miss; callers wanting stricter
    /// behavior gate on [`can_fire`][Self::can_fire].
    pub fn fire(&mut self, coord: Coordinate) -> Result<FireOutcome, FireError> {
        let cell = self.grid.get(coord).ok_or(FireError(coord))?;
        let outcome = if cell == CellState::Ship {
            self.grid[coord] = CellState::Hit;
            match self.ships.iter_mut().find(|ship| ship.covers(coord)) {
                Some(ship) => {
                    ship.record_hit();
                    if ship.is_sunk() {
                        FireOutcome::Sunk(ship.kind())
                    } else {
                        FireOutcome::Hit(ship.kind())
                    }
                }
                // A Ship cell is always covered by exactly one placed ship.
                None => unreachable!("ship cell with no covering ship"),
            }
        } else {
            self.grid[coord] = CellState::Miss;
            FireOutcome::Miss
        };
        trace!("shot at ({}, {}): {:?}", coord.x, coord.y, outcome);
        Ok(outcome)
    }

    /// Whether `coord` is on the board and has not been fired upon yet.
    pub fn can_fire(&self, coord: Coordinate) -> bool {
        matches!(
            self.grid.get(coord),
            Some(CellState::Empty) | Some(CellState::Ship)
        )
    }

    /// Get the state of the cell at `coord`, or `None` if out of bounds.
    pub fn cell(&self, coord: Coordinate) -> Option<CellState> {
        self.grid.get(coord)
    }

    /// Get the ship of the given kind.
    pub fn ship(&self, kind: ShipKind) -> &Ship {
        &self.ships[kind as usize]
    }

    /// Iterate the fleet's placement statuses, in fleet order.
    pub fn ships(&self) -> impl Iterator<Item = ShipStatus> + '_ {
        self.ships.iter().map(|ship| ShipStatus {
            kind: ship.kind(),
            len: ship.len(),
            placed: ship.is_placed(),
        })
    }

    /// Iterate the kinds of ship that still need to be placed.
    pub fn unplaced_ships(&self) -> impl Iterator<Item = ShipKind> + '_ {
        self.ships
            .iter()
            .filter(|ship| !ship.is_placed())
            .map(Ship::kind)
    }

    /// Whether every ship in the fleet has been placed.
    pub fn all_placed(&self) -> bool {
        self.ships.iter().all(Ship::is_placed)
    }

    /// Number of [`CellState::Ship`] cells remaining. Win detection is based
    /// on this count reaching zero.
    pub fn ship_cells_remaining(&self) -> usize {
        self.grid.count(CellState::Ship)
    }

    /// Get an iterator over the rows of this board for rendering. The
    /// iterator's item is another iterator over the cells of a single row.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = CellState> + '_> + '_ {
        (1..=BOARD_SIZE)
            .map(move |y| (1..=BOARD_SIZE).map(move |x| self.grid[Coordinate::new(x, y)]))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
