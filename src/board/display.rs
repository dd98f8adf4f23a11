use std::fmt;

use super::{Board, Move, Player};

/// Builds a board from a picture of the position, for tests and examples.
///
/// `.` is a blank cell, `x` a blocked cell, `1` and `2` the players' current
/// cells (also blocked). The active player defaults to player 1; the move
/// count equals the number of non-blank cells.
///
/// ```
/// use isolation::board::{Board, Move, Player};
/// use isolation::isolation_position;
///
/// let board = isolation_position! {
///     3 x 3;
///     . . .
///     . x .
///     . . 1
/// };
/// assert_eq!(board.move_count(), 2);
/// ```
#[macro_export]
macro_rules! isolation_position {
    ($width:literal x $height:literal; $($cell:tt)*) => {{
        let mut board = Board::new($width, $height);
        // Convert all input tokens to a string and filter out whitespace.
        let cells: Vec<char> = stringify!($($cell)*)
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        assert_eq!(
            cells.len(),
            ($width as usize) * ($height as usize),
            "invalid number of cells. Expected {}, got {}",
            ($width as usize) * ($height as usize),
            cells.len()
        );
        for (i, &c) in cells.iter().enumerate() {
            let mv = Move::new(
                (i / ($width as usize)) as u8,
                (i % ($width as usize)) as u8,
            );
            match c {
                '.' => (),
                'x' => board.block_cell(mv),
                '1' => board.place_player(Player::One, mv),
                '2' => board.place_player(Player::Two, mv),
                _ => panic!("invalid character in isolation position"),
            }
        }
        board
    }};
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.height() {
            for col in 0..self.width() {
                let mv = Move::new(row, col);
                let symbol = if self.player_location(Player::One) == Some(mv) {
                    '1'
                } else if self.player_location(Player::Two) == Some(mv) {
                    '2'
                } else if self.is_blank(mv) {
                    '.'
                } else {
                    'x'
                };
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
