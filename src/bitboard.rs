//! Sets of board cells packed into a single unsigned integer.
//!
//! Cell `(row, col)` of an `N×N` grid is bit `row * N + col`, so membership,
//! union and intersection are single word operations. Never allocates.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};
use core::{fmt, mem};

use num_traits::{PrimInt, Unsigned};

use crate::coord::Coord;

/// Unsigned integer wide enough to back a bitboard.
pub trait Word: PrimInt + Unsigned {}

impl<T: PrimInt + Unsigned> Word for T {}

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBoardError {
    /// Coordinate outside `[0, N)` on either axis.
    IndexOutOfBounds { row: i32, col: i32 },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "cell ({}, {}) is outside the board", row, col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}

/// An `N×N` set of cells stored in `T`, which must hold at least `N*N` bits.
/// Bits above `N*N` are always zero.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T: Word, const N: usize> {
    bits: T,
}

impl<T: Word, const N: usize> BitBoard<T, N> {
    const CELLS: usize = N * N;
    const CAPACITY: usize = mem::size_of::<T>() * 8;

    /// Word with every in-board bit set.
    fn board_mask() -> T {
        if Self::CELLS >= Self::CAPACITY {
            T::max_value()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    fn bit(coord: Coord) -> Result<T, BitBoardError> {
        let n = N as i32;
        if (0..n).contains(&coord.row) && (0..n).contains(&coord.col) {
            Ok(T::one() << (coord.row as usize * N + coord.col as usize))
        } else {
            Err(BitBoardError::IndexOutOfBounds {
                row: coord.row,
                col: coord.col,
            })
        }
    }

    pub fn new() -> Self {
        Self { bits: T::zero() }
    }

    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    pub fn get(&self, coord: Coord) -> Result<bool, BitBoardError> {
        Ok(!(self.bits & Self::bit(coord)?).is_zero())
    }

    pub fn set(&mut self, coord: Coord) -> Result<(), BitBoardError> {
        self.bits = self.bits | Self::bit(coord)?;
        Ok(())
    }

    /// Membership test; off-board cells are never members.
    pub fn contains(&self, coord: Coord) -> bool {
        self.get(coord).unwrap_or(false)
    }

    /// Add `coord`, returning whether it was absent.
    pub fn insert(&mut self, coord: Coord) -> Result<bool, BitBoardError> {
        let bit = Self::bit(coord)?;
        let fresh = (self.bits & bit).is_zero();
        self.bits = self.bits | bit;
        Ok(fresh)
    }

    /// Collect coordinates into a set. Fails on the first off-board one.
    pub fn from_coords<I>(coords: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = Coord>,
    {
        coords.into_iter().try_fold(Self::new(), |mut set, c| {
            set.set(c)?;
            Ok(set)
        })
    }

    /// Members in row-major order.
    pub fn iter_set_bits(&self) -> SetBits<T, N> {
        SetBits { rest: self.bits }
    }
}

impl<T: Word, const N: usize> Default for BitBoard<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Word, const N: usize> fmt::Debug for BitBoard<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter_set_bits().map(|c| (c.row, c.col)))
            .finish()
    }
}

/// Iterator over the members of a [`BitBoard`], lowest bit first.
#[derive(Clone, Copy)]
pub struct SetBits<T: Word, const N: usize> {
    rest: T,
}

impl<T: Word, const N: usize> Iterator for SetBits<T, N> {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.rest.is_zero() {
            return None;
        }
        let idx = self.rest.trailing_zeros() as usize;
        // drop the lowest set bit
        self.rest = self.rest & (self.rest - T::one());
        Some(Coord::new((idx / N) as i32, (idx % N) as i32))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.rest.count_ones() as usize;
        (n, Some(n))
    }
}

impl<T: Word, const N: usize> ExactSizeIterator for SetBits<T, N> {}

impl<T: Word, const N: usize> BitAnd for BitBoard<T, N> {
    type Output = Self;

    fn bitand(mut self, rhs: Self) -> Self {
        self &= rhs;
        self
    }
}

impl<T: Word, const N: usize> BitOr for BitBoard<T, N> {
    type Output = Self;

    fn bitor(mut self, rhs: Self) -> Self {
        self |= rhs;
        self
    }
}

/// Complement within the board.
impl<T: Word, const N: usize> Not for BitBoard<T, N> {
    type Output = Self;

    fn not(self) -> Self {
        Self {
            bits: !self.bits & Self::board_mask(),
        }
    }
}

impl<T: Word, const N: usize> BitAndAssign for BitBoard<T, N> {
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits = self.bits & rhs.bits;
    }
}

impl<T: Word, const N: usize> BitOrAssign for BitBoard<T, N> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}
