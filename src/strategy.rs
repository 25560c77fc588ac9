//! Randomized strategy for the computer opponent: fleet placement by
//! rejection sampling and uniformly random targeting.

use log::{debug, trace};
use rand::Rng;
use thiserror::Error;

use crate::board::{Board, Coordinate, BOARD_SIZE};
use crate::ships::{Orientation, ShipKind};

/// Cap on placement samples per ship. The reference behavior retries
/// unboundedly; at standard fleet density a valid placement turns up within
/// a handful of samples, so hitting this cap means something is wrong.
const MAX_ATTEMPTS: u32 = 1_000;

/// Error returned when rejection sampling fails to find a valid placement
/// within the attempt cap.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not find a valid placement for {0:?} within the attempt limit")]
pub struct PlacementExhausted(pub ShipKind);

/// Sample a uniformly random on-board coordinate.
fn random_coordinate<R: Rng + ?Sized>(rng: &mut R) -> Coordinate {
    Coordinate::new(
        rng.gen_range(1, BOARD_SIZE + 1),
        rng.gen_range(1, BOARD_SIZE + 1),
    )
}

/// Sample a uniformly random orientation.
fn random_orientation<R: Rng + ?Sized>(rng: &mut R) -> Orientation {
    if rng.gen() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    }
}

/// Place every ship still unplaced on `board` at random: sample a coordinate
/// and orientation until the dry-run check passes, then commit. No spatial
/// heuristics are applied.
pub fn place_all_ships<R: Rng + ?Sized>(
    board: &mut Board,
    rng: &mut R,
) -> Result<(), PlacementExhausted> {
    for kind in ShipKind::ALL.iter().copied() {
        if board.ship(kind).is_placed() {
            continue;
        }
        place_randomly(board, rng, kind)?;
    }
    debug!("fleet placed at random");
    Ok(())
}

fn place_randomly<R: Rng + ?Sized>(
    board: &mut Board,
    rng: &mut R,
    kind: ShipKind,
) -> Result<(), PlacementExhausted> {
    for _ in 0..MAX_ATTEMPTS {
        let coord = random_coordinate(rng);
        let orientation = random_orientation(rng);
        if board.check_placement(kind, coord, orientation) {
            // The dry-run just passed on an unplaced ship, so the commit
            // cannot fail.
            return board
                .place_ship(kind, coord, orientation)
                .map_err(|_| PlacementExhausted(kind));
        }
        trace!(
            "rejected sample for {:?} at ({}, {})",
            kind,
            coord.x,
            coord.y
        );
    }
    Err(PlacementExhausted(kind))
}

/// Pick the computer's next shot: a uniformly random cell. Previously fired
/// cells are not excluded.
pub fn random_target<R: Rng + ?Sized>(rng: &mut R) -> Coordinate {
    random_coordinate(rng)
}
