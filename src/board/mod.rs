//! Board representation for Othello

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 64

/// Disc colors.
///
/// On the wire and in the search the colors are the integers `+1` (black)
/// and `-1` (white), so the opponent is plain negation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Integer encoding: black `1`, white `-1`, empty `0`.
    #[inline]
    pub fn value(self) -> i8 {
        match self {
            Stone::Black => 1,
            Stone::White => -1,
            Stone::Empty => 0,
        }
    }

    /// Inverse of [`Stone::value`]. Returns `None` outside {-1, 0, 1}.
    #[inline]
    pub fn from_value(v: i8) -> Option<Stone> {
        match v {
            1 => Some(Stone::Black),
            -1 => Some(Stone::White),
            0 => Some(Stone::Empty),
            _ => None,
        }
    }

    /// Index into per-color tables (black 0, white 1).
    #[inline]
    pub(crate) fn color_index(self) -> usize {
        debug_assert!(self != Stone::Empty);
        if self == Stone::Black {
            0
        } else {
            1
        }
    }
}

/// Position on the board.
///
/// Coordinates follow the `board[x][y]` convention of the game server:
/// `x` is the outer index, `y` the inner one, and a move is sent as `PUT x y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        debug_assert!(x < BOARD_SIZE as u8 && y < BOARD_SIZE as u8);
        Self { x, y }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.x as usize * BOARD_SIZE + self.y as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            x: (idx / BOARD_SIZE) as u8,
            y: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(x: i32, y: i32) -> bool {
        x >= 0 && x < BOARD_SIZE as i32 && y >= 0 && y < BOARD_SIZE as i32
    }

    /// Step `steps` squares in direction `(dx, dy)`, or `None` off the board.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32, steps: i32) -> Option<Pos> {
        let x = i32::from(self.x) + dx * steps;
        let y = i32::from(self.y) + dy * steps;
        if Pos::is_valid(x, y) {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Some(Pos::new(x as u8, y as u8))
        } else {
            None
        }
    }

    /// Iterate over all 64 squares in x-major order.
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..TOTAL_CELLS).map(Pos::from_index)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
