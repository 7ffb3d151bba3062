//! Bit-packed coordinate sets.
//!
//! `BitBoard<T, N>` stores an `N×N` grid of flags in the unsigned integer
//! `T`, one bit per cell in row-major order. The engine uses the 10×10
//! [`CellSet`] alias for ship masks, fleet occupancy and the AI's candidate
//! pool. Nothing here allocates.

use core::ops::{BitAnd, BitOr, Not, Sub};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::config::BOARD_SIZE;
use crate::coord::Coordinate;

/// Errors returned by bitboard construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested board size N*N exceeds capacity of `T::BITS`.
    SizeTooLarge { n: usize, capacity: usize },
    /// N is wider than the game board, so some bits could never hold a
    /// `Coordinate`.
    WiderThanBoard { n: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { n, capacity } => {
                write!(f, "SizeTooLarge: N*N={} exceeds T::BITS={}", n * n, capacity)
            }
            BitBoardError::WiderThanBoard { n } => {
                write!(f, "WiderThanBoard: N={} exceeds BOARD_SIZE={}", n, BOARD_SIZE)
            }
        }
    }
}

/// A set of cells on an `N×N` board stored in `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

/// The set type used throughout the engine.
pub type CellSet = BitBoard<u128, BOARD_SIZE>;

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const BOARD_BITS: usize = N * N;

    #[inline]
    fn mask() -> T {
        if Self::BOARD_BITS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::BOARD_BITS) - T::one()
        }
    }

    #[inline]
    fn bit(at: Coordinate) -> Option<T> {
        if at.col() >= N || at.row() >= N {
            None
        } else {
            Some(T::one() << (at.row() * N + at.col()))
        }
    }

    /// Empty set, without a size check. Members are `Coordinate`s, so only
    /// `N <= BOARD_SIZE` is meaningful; use [`BitBoard::try_new`] to check.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Empty set; `Err(WiderThanBoard)` if `N > BOARD_SIZE`,
    /// `Err(SizeTooLarge)` if N*N does not fit in `T`.
    pub fn try_new() -> Result<Self, BitBoardError> {
        let capacity = mem::size_of::<T>() * 8;
        if N > BOARD_SIZE {
            Err(BitBoardError::WiderThanBoard { n: N })
        } else if Self::BOARD_BITS > capacity {
            Err(BitBoardError::SizeTooLarge { n: N, capacity })
        } else {
            Ok(Self::new())
        }
    }

    /// Set holding every cell of the board.
    #[inline]
    pub fn full() -> Self {
        BitBoard { bits: Self::mask() }
    }

    /// Number of cells in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Whether `at` is in the set. Cells beyond `N` are never members.
    pub fn contains(&self, at: Coordinate) -> bool {
        Self::bit(at).is_some_and(|bit| !(self.bits & bit).is_zero())
    }

    /// Add `at`; returns `true` if it was not already present. Cells
    /// beyond `N` are ignored.
    pub fn insert(&mut self, at: Coordinate) -> bool {
        match Self::bit(at) {
            Some(bit) => {
                let fresh = (self.bits & bit).is_zero();
                self.bits = self.bits | bit;
                fresh
            }
            None => false,
        }
    }

    /// Remove `at`; returns `true` if it was present.
    pub fn remove(&mut self, at: Coordinate) -> bool {
        match Self::bit(at) {
            Some(bit) => {
                let present = !(self.bits & bit).is_zero();
                self.bits = self.bits & !bit;
                present
            }
            None => false,
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.bits = T::zero();
    }

    /// `true` if the two sets share at least one cell.
    pub fn intersects(&self, other: &Self) -> bool {
        !(self.bits & other.bits).is_zero()
    }

    /// The set grown by one cell in all eight directions.
    pub fn dilate(&self) -> Self {
        let mut grown = *self;
        for at in self.iter() {
            for n in at.neighbours8() {
                grown.insert(n);
            }
        }
        grown
    }

    /// The `n`-th member in row-major order.
    pub fn nth(&self, n: usize) -> Option<Coordinate> {
        self.iter().nth(n)
    }

    /// Members in row-major order.
    #[inline]
    pub fn iter(&self) -> Cells<T, N> {
        Cells {
            bits: self.bits,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> FromIterator<Coordinate> for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        let mut set = Self::new();
        for at in iter {
            set.insert(at);
        }
        set
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the members of a bitboard.
#[derive(Clone, Copy)]
pub struct Cells<T, const N: usize> {
    bits: T,
    idx: usize,
}

impl<T, const N: usize> Iterator for Cells<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if !((self.bits >> idx) & T::one()).is_zero() {
                if let Ok(at) = Coordinate::new(idx % N, idx / N) {
                    return Some(at);
                }
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits | rhs.bits,
        }
    }
}

/// Set difference.
impl<T, const N: usize> Sub for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits & !rhs.bits,
        }
    }
}

/// Complement within the board.
impl<T, const N: usize> Not for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        BitBoard {
            bits: !self.bits & Self::mask(),
        }
    }
}
