//! Board coordinates.
//!
//! A [`Coordinate`] is a `(col, row)` pair that is always on the board. The
//! text form used by the CLI and in log output is a column letter followed
//! by a 1-based row, so `(2, 6)` prints as `C7`.

use core::fmt;
use core::str::FromStr;

use crate::common::GameError;
use crate::config::BOARD_SIZE;

/// Offsets of the eight surrounding cells.
const NEIGHBOURS_8: [(i8, i8); 8] = [
    (1, 0),
    (0, 1),
    (1, 1),
    (-1, 0),
    (0, -1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

/// Offsets of the four orthogonal neighbours.
const NEIGHBOURS_4: [(i8, i8); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// An on-board cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "RawCoordinate"))]
pub struct Coordinate {
    col: u8,
    row: u8,
}

#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct RawCoordinate {
    col: usize,
    row: usize,
}

#[cfg(feature = "std")]
impl TryFrom<RawCoordinate> for Coordinate {
    type Error = GameError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(raw.col, raw.row)
    }
}

impl Coordinate {
    /// Build a coordinate, rejecting anything outside the board.
    pub fn new(col: usize, row: usize) -> Result<Self, GameError> {
        if col >= BOARD_SIZE || row >= BOARD_SIZE {
            return Err(GameError::OutOfBounds { col, row });
        }
        Ok(Self {
            col: col as u8,
            row: row as u8,
        })
    }

    pub fn col(self) -> usize {
        self.col as usize
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Row-major index in `0..BOARD_SIZE * BOARD_SIZE`.
    pub fn index(self) -> usize {
        self.row() * BOARD_SIZE + self.col()
    }

    /// Inverse of [`Coordinate::index`].
    pub fn from_index(idx: usize) -> Option<Self> {
        Self::new(idx % BOARD_SIZE, idx / BOARD_SIZE).ok()
    }

    /// The cell shifted by `(d_col, d_row)`, or `None` if that leaves the
    /// board.
    pub fn offset(self, d_col: i8, d_row: i8) -> Option<Self> {
        let col = self.col as i16 + d_col as i16;
        let row = self.row as i16 + d_row as i16;
        if col < 0 || row < 0 {
            return None;
        }
        Self::new(col as usize, row as usize).ok()
    }

    /// The up to eight in-bounds cells touching this one, diagonals included.
    pub fn neighbours8(self) -> impl Iterator<Item = Coordinate> {
        NEIGHBOURS_8
            .into_iter()
            .filter_map(move |(dc, dr)| self.offset(dc, dr))
    }

    /// The up to four in-bounds cells sharing an edge with this one.
    pub fn neighbours4(self) -> impl Iterator<Item = Coordinate> {
        NEIGHBOURS_4
            .into_iter()
            .filter_map(move |(dc, dr)| self.offset(dc, dr))
    }

    /// Every coordinate on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE * BOARD_SIZE).filter_map(Self::from_index)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = (b'A' + self.col) as char;
        write!(f, "{}{}", letter, self.row + 1)
    }
}

impl FromStr for Coordinate {
    type Err = GameError;

    /// Parse the `C7` form. Column letters are case-insensitive.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let mut chars = input.chars();
        let letter = chars.next().ok_or(GameError::Unparsable)?;
        if !letter.is_ascii_alphabetic() {
            return Err(GameError::Unparsable);
        }
        let col = (letter.to_ascii_uppercase() as u8 - b'A') as usize;
        let row: usize = chars.as_str().parse().map_err(|_| GameError::Unparsable)?;
        if row == 0 {
            return Err(GameError::Unparsable);
        }
        Self::new(col, row - 1)
    }
}
