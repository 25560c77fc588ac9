//! Rules engine for the classic game Battleship, played by a human against a
//! computer opponent.
//!
//! The crate owns everything about how the game is *played*: the 10x10 grids,
//! ship placement validation, shot resolution, turn bookkeeping, and the
//! computer's randomized fleet placement. It deliberately owns nothing about
//! how the game is *presented*: an embedding layer (HTTP handlers, a CLI,
//! whatever) translates requests into calls on [`game::Game`] and serializes
//! the results back out.
//!
//! The observable contract the embedding layer relies on:
//!
//! * Grid cells are [`board::CellState`] values with the fixed integer codes
//!   Empty=0, Ship=1, Hit=2, Miss=-1.
//! * Coordinates have a human-readable grid-label form like `"A1"`, where the
//!   letter selects the row (`y`) and the number the column (`x`). Parsing
//!   and formatting are exact inverses over the valid range.
//!
//! No logger is installed and no randomness source is created here; callers
//! inject an [`rand::Rng`] wherever the computer needs one, so games replay
//! deterministically under a seeded generator.

pub mod board;
pub mod game;
pub mod ships;
pub mod strategy;
