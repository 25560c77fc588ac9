//! Errors used by [`Board`][crate::board::Board] operations.

use thiserror::Error;

use crate::board::coordinate::Coordinate;
use crate::ships::ShipKind;

/// Reason why a ship could not be placed at a given position.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum PlaceError {
    /// The ship would extend past the edge of the board, or the origin
    /// itself is off the board.
    #[error("{0:?} does not fit on the board at the requested position")]
    OutOfBounds(ShipKind),
    /// One or more of the cells the ship would cover is already occupied.
    #[error("{0:?} would overlap a ship that was already placed")]
    Occupied(ShipKind),
    /// The ship was already placed; ships are placed exactly once.
    #[error("{0:?} was already placed")]
    AlreadyPlaced(ShipKind),
}

/// Error returned when a shot targets a cell outside the board.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("cannot fire at ({}, {}): coordinate is out of bounds", .0.x, .0.y)]
pub struct FireError(pub Coordinate);
