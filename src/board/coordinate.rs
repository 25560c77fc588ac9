//! Board coordinates and their human-readable grid-label form.

use thiserror::Error;

/// Width and height of the board.
pub const BOARD_SIZE: u8 = 10;

/// The coordinates of a cell in the board.
///
/// Both components are 1-based: the top-left cell of the grid is `(1, 1)` and
/// the bottom-right is `(10, 10)`. A `Coordinate` is a plain value and may
/// hold out-of-range components; bounds are checked by the operations that
/// consume it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coordinate {
    /// Horizontal position of the cell.
    pub x: u8,
    /// Vertical position of the cell.
    pub y: u8,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `x` and `y`.
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Whether this coordinate lies on the board.
    pub fn in_bounds(self) -> bool {
        (1..=BOARD_SIZE).contains(&self.x) && (1..=BOARD_SIZE).contains(&self.y)
    }
}

impl From<(u8, u8)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(x, y)` pair.
    fn from((x, y): (u8, u8)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (u8, u8) {
    /// Convert the [`Coordinate`] into an `(x, y)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.x, coord.y)
    }
}

/// Error returned when a grid label cannot be parsed into a [`Coordinate`].
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ParseLabelError {
    /// The label was not a letter followed by a number.
    #[error("grid label {0:?} is malformed; expected a letter A-J followed by a number 1-10")]
    Malformed(String),
    /// The row letter was outside A-J.
    #[error("row letter {0:?} is outside A-J")]
    LetterOutOfRange(char),
    /// The column number was outside 1-10.
    #[error("column number {0} is outside 1-10")]
    NumberOutOfRange(u32),
}

/// Error returned when a [`Coordinate`] falls outside the board.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("coordinate ({}, {}) is out of bounds for the {size}x{size} board", .0.x, .0.y, size = BOARD_SIZE)]
pub struct OutOfBoundsError(pub Coordinate);

/// Parse a grid label like `"A1"` into a [`Coordinate`].
///
/// The leading letter (case-insensitive) selects the row: `A` is `y = 1`
/// through `J` at `y = 10`. The trailing number is the column `x`, in
/// `[1, 10]`. Exact inverse of [`format_grid_label`] over the valid range.
pub fn parse_grid_label(label: &str) -> Result<Coordinate, ParseLabelError> {
    let malformed = || ParseLabelError::Malformed(label.to_owned());
    let mut chars = label.chars();
    let letter = chars.next().ok_or_else(malformed)?;
    if !letter.is_ascii_alphabetic() {
        return Err(malformed());
    }
    let number: u32 = chars.as_str().parse().map_err(|_| malformed())?;

    let row = letter.to_ascii_uppercase();
    if !('A'..='J').contains(&row) {
        return Err(ParseLabelError::LetterOutOfRange(letter));
    }
    if !(1..=BOARD_SIZE as u32).contains(&number) {
        return Err(ParseLabelError::NumberOutOfRange(number));
    }
    Ok(Coordinate::new(number as u8, row as u8 - b'A' + 1))
}

/// Format a [`Coordinate`] as a grid label like `"A1"`.
///
/// Exact inverse of [`parse_grid_label`]; fails if the coordinate is off the
/// board.
pub fn format_grid_label(coord: Coordinate) -> Result<String, OutOfBoundsError> {
    if !coord.in_bounds() {
        return Err(OutOfBoundsError(coord));
    }
    let letter = (b'A' + coord.y - 1) as char;
    Ok(format!("{}{}", letter, coord.x))
}
