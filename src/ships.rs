//! Types used for defining ships: kinds, orientations, and per-ship state.

use std::str::FromStr;

use thiserror::Error;

use crate::board::Coordinate;

/// Number of ships in a standard fleet.
pub const NUM_SHIPS: usize = 5;

/// Total number of cells a fully placed fleet occupies.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Fixed (name, length) table for the standard fleet, indexed by the
/// [`ShipKind`] discriminant.
const SHIP_TABLE: [(&str, usize); NUM_SHIPS] = [
    ("carrier", 5),
    ("battleship", 4),
    ("cruiser", 3),
    ("submarine", 3),
    ("destroyer", 2),
];

/// The kinds of ship in a standard fleet. Each board holds exactly one ship
/// of each kind.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShipKind {
    Carrier,
    Battleship,
    Cruiser,
    Submarine,
    Destroyer,
}

impl ShipKind {
    /// All ship kinds, in fleet order.
    pub const ALL: [ShipKind; NUM_SHIPS] = [
        ShipKind::Carrier,
        ShipKind::Battleship,
        ShipKind::Cruiser,
        ShipKind::Submarine,
        ShipKind::Destroyer,
    ];

    /// Get the length of this kind of ship.
    pub fn len(self) -> usize {
        SHIP_TABLE[self as usize].1
    }

    /// Lowercase name of this kind, as used at the request boundary.
    pub fn name(self) -> &'static str {
        SHIP_TABLE[self as usize].0
    }
}

/// Error returned when a ship name from an external caller does not match
/// any kind in the fleet.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("unknown ship kind {0:?}")]
pub struct UnknownKindError(pub String);

impl FromStr for ShipKind {
    type Err = UnknownKindError;

    /// Parse a ship kind from its name, case-insensitively. Unknown names
    /// are rejected before any ship is constructed from them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShipKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownKindError(s.to_owned()))
    }
}

/// Placement orientation of a ship. Horizontal ships extend in `+x` from
/// their origin, vertical ships in `+y`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Iterate the cells a ship of `kind` covers from `origin` in `orientation`.
/// Performs no bounds checking.
pub(crate) fn covered_cells(
    kind: ShipKind,
    origin: Coordinate,
    orientation: Orientation,
) -> impl Iterator<Item = Coordinate> {
    (0..kind.len() as u8).map(move |i| match orientation {
        Orientation::Horizontal => Coordinate::new(origin.x + i, origin.y),
        Orientation::Vertical => Coordinate::new(origin.x, origin.y + i),
    })
}

/// A single ship in a fleet: its kind, its placement if it has one, and the
/// number of hits it has taken.
///
/// Ships are created unplaced when their board is created, gain a placement
/// exactly once, and are never un-placed.
#[derive(Debug, Clone)]
pub struct Ship {
    kind: ShipKind,
    placement: Option<(Coordinate, Orientation)>,
    hits: usize,
}

impl Ship {
    /// Create an unplaced, undamaged ship of the given kind.
    pub(crate) fn new(kind: ShipKind) -> Self {
        Self {
            kind,
            placement: None,
            hits: 0,
        }
    }

    /// This ship's kind.
    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    /// Length of this ship, derived from its kind.
    pub fn len(&self) -> usize {
        self.kind.len()
    }

    /// Whether this ship has been placed on its board.
    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    /// The origin and orientation of this ship, if it has been placed.
    pub fn placement(&self) -> Option<(Coordinate, Orientation)> {
        self.placement
    }

    /// Number of hits this ship has taken. Never exceeds its length.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Whether every cell of this ship has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits == self.len()
    }

    /// Iterate the cells this ship covers. Empty if the ship is unplaced.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let kind = self.kind;
        self.placement
            .into_iter()
            .flat_map(move |(origin, orientation)| covered_cells(kind, origin, orientation))
    }

    /// Whether this ship is placed and covers the given coordinate.
    pub(crate) fn covers(&self, coord: Coordinate) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// Commit a placement. The board validates before calling this.
    pub(crate) fn set_placement(&mut self, origin: Coordinate, orientation: Orientation) {
        self.placement = Some((origin, orientation));
    }

    /// Record one hit against this ship.
    pub(crate) fn record_hit(&mut self) {
        debug_assert!(self.hits < self.len());
        self.hits += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_match_the_standard_fleet() {
        assert_eq!(ShipKind::Carrier.len(), 5);
        assert_eq!(ShipKind::Battleship.len(), 4);
        assert_eq!(ShipKind::Cruiser.len(), 3);
        assert_eq!(ShipKind::Submarine.len(), 3);
        assert_eq!(ShipKind::Destroyer.len(), 2);
        assert_eq!(
            ShipKind::ALL.iter().map(|k| k.len()).sum::<usize>(),
            TOTAL_SHIP_CELLS
        );
    }

    #[test]
    fn kinds_parse_from_names() {
        assert_eq!("carrier".parse(), Ok(ShipKind::Carrier));
        assert_eq!("Destroyer".parse(), Ok(ShipKind::Destroyer));
        assert_eq!(
            "dreadnought".parse::<ShipKind>(),
            Err(UnknownKindError("dreadnought".to_owned()))
        );
    }

    #[test]
    fn cells_follow_the_orientation() {
        let mut ship = Ship::new(ShipKind::Cruiser);
        assert!(!ship.is_placed());
        assert_eq!(ship.cells().count(), 0);

        ship.set_placement(Coordinate::new(2, 3), Orientation::Vertical);
        let cells: Vec<_> = ship.cells().collect();
        assert_eq!(
            cells,
            vec![
                Coordinate::new(2, 3),
                Coordinate::new(2, 4),
                Coordinate::new(2, 5),
            ]
        );
    }

    #[test]
    fn sinks_after_len_hits() {
        let mut ship = Ship::new(ShipKind::Destroyer);
        ship.set_placement(Coordinate::new(1, 1), Orientation::Horizontal);
        ship.record_hit();
        assert!(!ship.is_sunk());
        ship.record_hit();
        assert!(ship.is_sunk());
    }
}
