//! Isolation board: a rectangular grid where each player occupies one cell,
//! every visited cell stays blocked, and a player who cannot move loses.
//!
//! Movement follows knight jumps, except that each player's first move may
//! claim any blank cell. Occupancy is kept in a single `u64` bitboard, which
//! caps the board at 64 cells; the standard tournament board is 7x7.

use std::fmt;

use thiserror::Error;

use crate::searcher::{GameState, MoveList};

mod display;


/// The eight knight jump offsets, in fixed generation order. Move ordering is
/// observable through search tie-breaking, so this order must stay stable.
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Player::One => write!(f, "player 1"),
            Player::Two => write!(f, "player 2"),
        }
    }
}

/// A board coordinate, row-major from the top-left corner.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Move {
    pub row: u8,
    pub col: u8,
}

impl Move {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("move {0} is not legal for the active player")]
    IllegalMove(Move),
}

/// One immutable-per-ply snapshot of an Isolation game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    occupied: u64,
    locations: [Option<Move>; 2],
    active: Player,
    move_count: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}

impl Board {
    pub const DEFAULT_WIDTH: u8 = 7;
    pub const DEFAULT_HEIGHT: u8 = 7;

    /// An empty board with player 1 to move. The cell count must fit the
    /// occupancy bitboard.
    pub fn new(width: u8, height: u8) -> Self {
        assert!(width >= 1 && height >= 1, "board must have at least one cell");
        assert!(
            (width as u16) * (height as u16) <= 64,
            "board must fit in 64 cells"
        );
        Self {
            width,
            height,
            occupied: 0,
            locations: [None, None],
            active: Player::One,
            move_count: 0,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn active_player(&self) -> Player {
        self.active
    }

    pub fn set_active_player(&mut self, player: Player) {
        self.active = player;
    }

    pub fn player_location(&self, player: Player) -> Option<Move> {
        self.locations[player.index()]
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn blank_space_count(&self) -> usize {
        (self.width as usize) * (self.height as usize) - self.occupied.count_ones() as usize
    }

    /// The geometric center cell, played as the opening shortcut.
    pub fn center(&self) -> Move {
        Move::new(self.height / 2, self.width / 2)
    }

    fn bit(&self, mv: Move) -> u64 {
        1u64 << (mv.row as u32 * self.width as u32 + mv.col as u32)
    }

    /// True for an in-bounds, unoccupied cell.
    pub fn is_blank(&self, mv: Move) -> bool {
        mv.row < self.height && mv.col < self.width && self.occupied & self.bit(mv) == 0
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        self.moves_for(self.active).contains(&mv)
    }

    /// Applies a move for the active player, blocking the target cell and
    /// passing the turn.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), BoardError> {
        if !self.is_legal(mv) {
            return Err(BoardError::IllegalMove(mv));
        }
        self.place(mv);
        Ok(())
    }

    fn place(&mut self, mv: Move) {
        self.occupied |= self.bit(mv);
        self.locations[self.active.index()] = Some(mv);
        self.active = self.active.opponent();
        self.move_count += 1;
    }

    /// Legal moves for a player: every blank cell before the player has been
    /// placed, knight jumps to blank cells afterwards.
    fn moves_for(&self, player: Player) -> MoveList<Move> {
        let mut moves = MoveList::new();
        match self.locations[player.index()] {
            None => {
                for row in 0..self.height {
                    for col in 0..self.width {
                        let mv = Move::new(row, col);
                        if self.is_blank(mv) {
                            moves.push(mv);
                        }
                    }
                }
            }
            Some(from) => {
                for &(dr, dc) in KNIGHT_JUMPS.iter() {
                    let row = from.row as i16 + dr as i16;
                    let col = from.col as i16 + dc as i16;
                    if row < 0 || col < 0 {
                        continue;
                    }
                    let mv = Move::new(row as u8, col as u8);
                    if self.is_blank(mv) {
                        moves.push(mv);
                    }
                }
            }
        }
        moves
    }

    /// Blocks a cell without placing a player there. Position-construction
    /// helper for tests and the `isolation_position!` macro; counts as one
    /// played move.
    pub fn block_cell(&mut self, mv: Move) {
        assert!(self.is_blank(mv), "cannot block occupied cell {}", mv);
        self.occupied |= self.bit(mv);
        self.move_count += 1;
    }

    /// Places a player on a blank cell. Position-construction helper; counts
    /// as one played move.
    pub fn place_player(&mut self, player: Player, mv: Move) {
        assert!(self.is_blank(mv), "cannot place {} on occupied cell {}", player, mv);
        self.occupied |= self.bit(mv);
        self.locations[player.index()] = Some(mv);
        self.move_count += 1;
    }
}

impl GameState for Board {
    type Move = Move;
    type Player = Player;

    #[inline]
    fn active_player(&self) -> Player {
        self.active
    }

    #[inline]
    fn opponent(&self, player: Player) -> Player {
        player.opponent()
    }

    fn legal_moves_for(&self, player: Player) -> MoveList<Move> {
        self.moves_for(player)
    }

    fn forecast_move(&self, mv: Move) -> Board {
        debug_assert!(
            self.is_legal(mv),
            "forecast_move precondition violated: {} is not legal",
            mv
        );
        let mut next = self.clone();
        next.place(mv);
        next
    }

    /// A player wins when the opponent is to move and cannot.
    fn is_winner(&self, player: Player) -> bool {
        self.is_loser(player.opponent())
    }

    /// A player loses when it is their turn and they have no legal moves.
    fn is_loser(&self, player: Player) -> bool {
        self.active == player && self.moves_for(player).is_empty()
    }

    #[inline]
    fn move_count(&self) -> usize {
        self.move_count
    }

    #[inline]
    fn blank_space_count(&self) -> usize {
        Board::blank_space_count(self)
    }

    #[inline]
    fn center_move(&self) -> Move {
        self.center()
    }
}
