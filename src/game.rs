//! Orchestration of a full game: two boards, the turn cycle, lifecycle
//! state, and win detection.

use log::debug;
use rand::Rng;
use thiserror::Error;

use crate::board::{
    parse_grid_label, Board, Coordinate, FireError, FireOutcome, ParseLabelError, PlaceError,
};
use crate::ships::{Orientation, ShipKind, UnknownKindError};
use crate::strategy::{self, PlacementExhausted};

/// The two sides of a game. The human plays [`Side::Player`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    /// Get the opponent of this side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

/// Lifecycle state of a game.
///
/// A game starts in [`PlacingShips`][GameState::PlacingShips] and moves to
/// [`Playing`][GameState::Playing] once when both fleets are down; the two
/// terminal states are reachable only from `Playing`, and only one of them.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GameState {
    PlacingShips,
    Playing,
    PlayerWon,
    ComputerWon,
}

/// Failure surfaced to the request layer. Every variant carries a
/// human-readable message describing the cause; the layer reports them
/// uniformly as a rejected request.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum GameError {
    /// A grid label could not be parsed into a coordinate.
    #[error(transparent)]
    InvalidLabel(#[from] ParseLabelError),
    /// A ship name from the caller matched no kind in the fleet.
    #[error(transparent)]
    UnknownKind(#[from] UnknownKindError),
    /// A placement was rejected.
    #[error(transparent)]
    Place(#[from] PlaceError),
    /// A shot targeted a cell off the board.
    #[error(transparent)]
    Fire(#[from] FireError),
    /// Randomized placement exhausted its attempt cap.
    #[error(transparent)]
    Placement(#[from] PlacementExhausted),
}

/// A full game: the two boards, whose turn it nominally is, and the
/// lifecycle state.
///
/// The engine does not enforce turn alternation or gate firing on the
/// lifecycle state; it tracks whose turn it is and leaves sequencing to the
/// caller, which drives one logical sequence of turns per game.
#[derive(Debug)]
pub struct Game {
    state: GameState,
    player: Board,
    computer: Board,
    turn: Side,
}

impl Game {
    /// Create a new game: two empty boards with unplaced fleets, in the
    /// [`GameState::PlacingShips`] state, with the player to move first.
    pub fn new() -> Self {
        Self {
            state: GameState::PlacingShips,
            player: Board::new(),
            computer: Board::new(),
            turn: Side::Player,
        }
    }

    /// Get the board belonging to `side`.
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Player => &self.player,
            Side::Computer => &self.computer,
        }
    }

    /// Mutably get the board belonging to `side`.
    pub fn board_mut(&mut self, side: Side) -> &mut Board {
        match side {
            Side::Player => &mut self.player,
            Side::Computer => &mut self.computer,
        }
    }

    /// Place a ship on the player's board, parsing the coordinate from a
    /// grid label like `"A1"`.
    pub fn place_player_ship(
        &mut self,
        kind: ShipKind,
        label: &str,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        let coord = parse_grid_label(label)?;
        self.player.place_ship(kind, coord, orientation)?;
        Ok(())
    }

    /// Run randomized placement for every ship the computer has not placed.
    pub fn place_computer_ships<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        strategy::place_all_ships(&mut self.computer, rng)?;
        Ok(())
    }

    /// Fire at `coord` on `target`'s board.
    pub fn fire(&mut self, target: Side, coord: Coordinate) -> Result<FireOutcome, GameError> {
        Ok(self.board_mut(target).fire(coord)?)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Force the lifecycle state. The surrounding layer uses this to advance
    /// [`GameState::PlacingShips`] to [`GameState::Playing`] once both
    /// fleets are down; the engine does not advance it automatically.
    pub fn set_state(&mut self, state: GameState) {
        if state != self.state {
            debug!("game state {:?} -> {:?}", self.state, state);
        }
        self.state = state;
    }

    /// The side whose turn it nominally is.
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Advance the turn cycle to the other side. Calling this after each
    /// action is the caller's responsibility.
    pub fn advance_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    /// Recompute win/loss from the grids and return the (possibly updated)
    /// state. Idempotent: no counters are kept, only remaining ship cells.
    ///
    /// From [`GameState::Playing`], the player wins when the computer board
    /// has no ship cells left while the player board still does, and
    /// symmetrically for the computer. Both sides reaching zero in the same
    /// check leaves the state untouched; that situation is unreachable under
    /// alternating single-shot fire.
    pub fn check_win(&mut self) -> GameState {
        if self.state == GameState::Playing {
            let player_cells = self.player.ship_cells_remaining();
            let computer_cells = self.computer.ship_cells_remaining();
            if computer_cells == 0 && player_cells > 0 {
                self.set_state(GameState::PlayerWon);
            } else if player_cells == 0 && computer_cells > 0 {
                self.set_state(GameState::ComputerWon);
            }
        }
        self.state
    }

    /// Discard this game and start over: fresh boards, the computer's fleet
    /// re-placed at random, state back to [`GameState::PlacingShips`].
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        *self = Game::new();
        self.place_computer_ships(rng)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::board::CellState;

    use super::*;

    /// Sink every remaining ship cell on `side`'s board.
    fn sink_fleet(game: &mut Game, side: Side) {
        let targets: Vec<Coordinate> = game
            .board(side)
            .rows()
            .enumerate()
            .flat_map(|(y, row)| {
                row.enumerate().filter_map(move |(x, cell)| {
                    if cell == CellState::Ship {
                        Some(Coordinate::new(x as u8 + 1, y as u8 + 1))
                    } else {
                        None
                    }
                })
            })
            .collect();
        for coord in targets {
            game.fire(side, coord).unwrap();
        }
    }

    fn playing_game() -> Game {
        let mut rng = StdRng::seed_from_u64(11);
        let mut game = Game::new();
        for (i, kind) in ShipKind::ALL.iter().copied().enumerate() {
            game.board_mut(Side::Player)
                .place_ship(kind, Coordinate::new(1, i as u8 + 1), Orientation::Horizontal)
                .unwrap();
        }
        game.place_computer_ships(&mut rng).unwrap();
        game.set_state(GameState::Playing);
        game
    }

    #[test]
    fn new_games_start_placing_with_the_player_to_move() {
        let game = Game::new();
        assert_eq!(game.state(), GameState::PlacingShips);
        assert_eq!(game.turn(), Side::Player);
        assert_eq!(game.board(Side::Player).unplaced_ships().count(), 5);
        assert_eq!(game.board(Side::Computer).unplaced_ships().count(), 5);
    }

    #[test]
    fn player_ships_place_from_grid_labels() {
        let mut game = Game::new();
        game.place_player_ship(ShipKind::Carrier, "A1", Orientation::Horizontal)
            .unwrap();
        assert_eq!(
            game.board(Side::Player)
                .ship(ShipKind::Carrier)
                .placement(),
            Some((Coordinate::new(1, 1), Orientation::Horizontal))
        );

        let err = game
            .place_player_ship(ShipKind::Battleship, "K1", Orientation::Horizontal)
            .unwrap_err();
        assert!(matches!(err, GameError::InvalidLabel(_)));
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn turn_cycle_alternates() {
        let mut game = Game::new();
        assert_eq!(game.turn(), Side::Player);
        game.advance_turn();
        assert_eq!(game.turn(), Side::Computer);
        game.advance_turn();
        assert_eq!(game.turn(), Side::Player);
    }

    #[test]
    fn check_win_is_quiet_before_playing() {
        let mut game = Game::new();
        assert_eq!(game.check_win(), GameState::PlacingShips);
    }

    #[test]
    fn player_wins_when_the_computer_fleet_is_gone() {
        let mut game = playing_game();
        assert_eq!(game.check_win(), GameState::Playing);
        sink_fleet(&mut game, Side::Computer);
        assert_eq!(game.check_win(), GameState::PlayerWon);
        // Idempotent on repeat calls.
        assert_eq!(game.check_win(), GameState::PlayerWon);
    }

    #[test]
    fn computer_wins_when_the_player_fleet_is_gone() {
        let mut game = playing_game();
        sink_fleet(&mut game, Side::Player);
        assert_eq!(game.check_win(), GameState::ComputerWon);
    }

    #[test]
    fn double_elimination_leaves_the_state_untouched() {
        let mut game = playing_game();
        sink_fleet(&mut game, Side::Player);
        sink_fleet(&mut game, Side::Computer);
        // Unreachable in real play; the engine refuses to pick a winner.
        assert_eq!(game.check_win(), GameState::Playing);
    }

    #[test]
    fn reset_recreates_the_boards_and_the_computer_fleet() {
        let mut rng = StdRng::seed_from_u64(23);
        let mut game = playing_game();
        sink_fleet(&mut game, Side::Computer);
        game.check_win();

        game.reset(&mut rng).unwrap();
        assert_eq!(game.state(), GameState::PlacingShips);
        assert_eq!(game.turn(), Side::Player);
        assert_eq!(game.board(Side::Player).unplaced_ships().count(), 5);
        assert!(game.board(Side::Computer).all_placed());
    }
}
