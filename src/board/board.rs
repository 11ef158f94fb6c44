//! Board structure: one bitboard per color

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};
use crate::error::{BoardError, BoardResult};

/// Game board.
///
/// `Board` is a small `Copy` value. Search nodes take their own copy before
/// applying a move, so sibling branches never share a mutable board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Black discs bitboard
    pub black: Bitboard,
    /// White discs bitboard
    pub white: Bitboard,
}

impl Board {
    /// Empty board.
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Standard starting position: white on (3,3) and (4,4), black on (3,4) and (4,3).
    pub fn initial() -> Self {
        let mut board = Self::new();
        board.place_stone(Pos::new(3, 3), Stone::White);
        board.place_stone(Pos::new(4, 4), Stone::White);
        board.place_stone(Pos::new(3, 4), Stone::Black);
        board.place_stone(Pos::new(4, 3), Stone::Black);
        board
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Put a disc on a square, replacing whatever was there.
    /// `Stone::Empty` clears the square.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        match stone {
            Stone::Black => {
                self.white.clear(pos);
                self.black.set(pos);
            }
            Stone::White => {
                self.black.clear(pos);
                self.white.set(pos);
            }
            Stone::Empty => self.remove_stone(pos),
        }
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.black.clear(pos);
        self.white.clear(pos);
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// Number of discs of a color. For `Stone::Empty`, the number of empty squares.
    #[inline]
    pub fn count(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black.count(),
            Stone::White => self.white.count(),
            Stone::Empty => TOTAL_CELLS as u32 - self.stone_count(),
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// Build a board from a `cells[x][y]` grid of {-1, 0, 1}.
    pub fn from_cells(cells: &[[i8; BOARD_SIZE]; BOARD_SIZE]) -> BoardResult<Self> {
        let mut board = Self::new();
        for pos in Pos::all() {
            let value = cells[pos.x as usize][pos.y as usize];
            let stone = Stone::from_value(value).ok_or(BoardError::InvalidCell {
                index: pos.to_index(),
                value: i64::from(value),
            })?;
            board.place_stone(pos, stone);
        }
        Ok(board)
    }

    /// The board as a `cells[x][y]` grid of {-1, 0, 1}.
    pub fn to_cells(&self) -> [[i8; BOARD_SIZE]; BOARD_SIZE] {
        let mut cells = [[0i8; BOARD_SIZE]; BOARD_SIZE];
        for pos in Pos::all() {
            cells[pos.x as usize][pos.y as usize] = self.get(pos).value();
        }
        cells
    }

    /// Parse a server board snapshot: 64 whitespace-separated integers in
    /// x-major order (x outer, y inner).
    ///
    /// ```
    /// use othello::{Board, Pos, Stone};
    ///
    /// let payload = Board::initial().to_payload();
    /// let board = Board::from_payload(&payload).unwrap();
    /// assert_eq!(board.get(Pos::new(3, 4)), Stone::Black);
    /// ```
    pub fn from_payload(payload: &str) -> BoardResult<Self> {
        let tokens: Vec<&str> = payload.split_whitespace().collect();
        if tokens.len() != TOTAL_CELLS {
            return Err(BoardError::WrongCellCount(tokens.len()));
        }

        let mut board = Self::new();
        for (index, token) in tokens.iter().enumerate() {
            let value: i64 = token.parse().map_err(|_| BoardError::InvalidToken {
                index,
                token: (*token).to_string(),
            })?;
            let stone = i8::try_from(value)
                .ok()
                .and_then(Stone::from_value)
                .ok_or(BoardError::InvalidCell { index, value })?;
            board.place_stone(Pos::from_index(index), stone);
        }
        Ok(board)
    }

    /// Render the board in the same format [`Board::from_payload`] accepts.
    pub fn to_payload(&self) -> String {
        Pos::all()
            .map(|pos| self.get(pos).value().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for Board {
    /// One row per `y`, columns are `x`; `X` black, `O` white, `.` empty.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "  ")?;
        for x in 0..BOARD_SIZE {
            write!(f, "{x}")?;
        }
        writeln!(f)?;
        for y in 0..BOARD_SIZE as u8 {
            write!(f, "{y} ")?;
            for x in 0..BOARD_SIZE as u8 {
                let c = match self.get(Pos::new(x, y)) {
                    Stone::Black => 'X',
                    Stone::White => 'O',
                    Stone::Empty => '.',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
