//! Board symmetry canonicalization for the transposition table
//!
//! The 8 symmetries of the square (identity, 3 rotations, 4 reflections) act
//! on the board. Positions that are images of each other share one
//! transposition-table entry by hashing a single canonical reading: the
//! lexicographically smallest of the 8 transformed boards.
//!
//! A [`Transform`] maps *canonical* coordinates to *original* coordinates.
//! A best move found in the original frame is stored through
//! [`Transform::to_canonical`] and read back through [`Transform::to_original`].

use crate::board::{Board, Pos, Stone};

use super::ZobristTable;

/// One of the 8 board symmetries.
///
/// Represented as a 2x2 integer matrix acting on doubled, centered
/// coordinates `(2x - 7, 2y - 7)`, so every symmetry is linear and the
/// inverse is the transpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transform {
    id: u8,
    m: [[i8; 2]; 2],
}

impl Transform {
    /// `(x, y)`
    pub const IDENTITY: Transform = Transform::new(0, [[1, 0], [0, 1]]);

    /// All symmetries, indexed by [`Transform::id`]. Canonical `(x, y)` maps to
    /// original coordinates:
    /// 0 `(x, y)`, 1 `(7-y, x)`, 2 `(7-x, 7-y)`, 3 `(y, 7-x)`,
    /// 4 `(7-x, y)`, 5 `(y, x)`, 6 `(x, 7-y)`, 7 `(7-y, 7-x)`.
    pub const ALL: [Transform; 8] = [
        Transform::IDENTITY,
        Transform::new(1, [[0, -1], [1, 0]]),
        Transform::new(2, [[-1, 0], [0, -1]]),
        Transform::new(3, [[0, 1], [-1, 0]]),
        Transform::new(4, [[-1, 0], [0, 1]]),
        Transform::new(5, [[0, 1], [1, 0]]),
        Transform::new(6, [[1, 0], [0, -1]]),
        Transform::new(7, [[0, -1], [-1, 0]]),
    ];

    const fn new(id: u8, m: [[i8; 2]; 2]) -> Self {
        Self { id, m }
    }

    /// Index 0..8 of this transform in [`Transform::ALL`].
    #[inline]
    pub fn id(self) -> u8 {
        self.id
    }

    /// The transform that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Transform {
        let t = [[self.m[0][0], self.m[1][0]], [self.m[0][1], self.m[1][1]]];
        Transform::ALL
            .into_iter()
            .find(|c| c.m == t)
            .unwrap_or(Transform::IDENTITY)
    }

    #[inline]
    fn map(m: [[i8; 2]; 2], pos: Pos) -> Pos {
        let u = 2 * i32::from(pos.x) - 7;
        let v = 2 * i32::from(pos.y) - 7;
        let ou = i32::from(m[0][0]) * u + i32::from(m[0][1]) * v;
        let ov = i32::from(m[1][0]) * u + i32::from(m[1][1]) * v;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Pos::new(((ou + 7) / 2) as u8, ((ov + 7) / 2) as u8)
    }

    /// Canonical coordinates to original coordinates.
    #[inline]
    #[must_use]
    pub fn to_original(self, canonical: Pos) -> Pos {
        Self::map(self.m, canonical)
    }

    /// Original coordinates to canonical coordinates.
    #[inline]
    #[must_use]
    pub fn to_canonical(self, original: Pos) -> Pos {
        Self::map(self.inverse().m, original)
    }

    /// The board as read through this transform: cell `(x, y)` of the result
    /// is cell `to_original(x, y)` of `board`.
    #[must_use]
    pub fn apply(self, board: &Board) -> Board {
        let mut out = Board::new();
        for pos in Pos::all() {
            out.place_stone(pos, board.get(self.to_original(pos)));
        }
        out
    }
}

/// Transposition-table key of the canonical reading, plus the transform that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalKey {
    pub key: u64,
    pub transform: Transform,
}

/// Cell ordering for comparing readings: white < empty < black.
#[inline]
fn cell_rank(stone: Stone) -> i8 {
    stone.value() + 1
}

/// Compare two transformed readings of `board` cell by cell in x-major order.
fn compare_readings(board: &Board, a: Transform, b: Transform) -> std::cmp::Ordering {
    let read = |t: Transform, p: Pos| cell_rank(board.get(t.to_original(p)));
    Pos::all()
        .map(|p| read(a, p).cmp(&read(b, p)))
        .find(|o| o.is_ne())
        .unwrap_or(std::cmp::Ordering::Equal)
}

/// Pick the transform whose reading is lexicographically smallest.
/// Ties go to the lowest transform index.
#[must_use]
pub fn canonical_transform(board: &Board) -> Transform {
    let mut best = Transform::IDENTITY;
    for t in Transform::ALL.into_iter().skip(1) {
        if compare_readings(board, t, best).is_lt() {
            best = t;
        }
    }
    best
}

/// Canonical reading of `board` and the transform that produced it.
#[must_use]
pub fn canonicalize(board: &Board) -> (Board, Transform) {
    let t = canonical_transform(board);
    (t.apply(board), t)
}

/// Hash the canonical reading of `(board, side_to_move)`.
///
/// ```
/// use othello::board::{Board, Stone};
/// use othello::search::ZobristTable;
/// use othello::search::symmetry::{canonical_key, Transform};
///
/// let zt = ZobristTable::new();
/// let board = Board::initial();
/// let rotated = Transform::ALL[1].apply(&board);
/// assert_eq!(
///     canonical_key(&zt, &board, Stone::Black).key,
///     canonical_key(&zt, &rotated, Stone::Black).key,
/// );
/// ```
#[must_use]
pub fn canonical_key(zobrist: &ZobristTable, board: &Board, side_to_move: Stone) -> CanonicalKey {
    let (canonical, transform) = canonicalize(board);
    CanonicalKey {
        key: zobrist.hash(&canonical, side_to_move),
        transform,
    }
}
