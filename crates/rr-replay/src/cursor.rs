//! The row cursor and its two wrapping transitions.

use std::num::NonZeroUsize;

/// One of the two navigation commands.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// `+1` or `-1`.
    #[inline]
    pub fn delta(self) -> isize {
        match self {
            Direction::Forward  => 1,
            Direction::Backward => -1,
        }
    }
}

/// `(index + delta) mod len`, never leaving `[0, len)`.
#[inline]
pub fn step_index(index: usize, len: NonZeroUsize, direction: Direction) -> usize {
    let n = len.get();
    match direction {
        Direction::Forward  => (index % n + 1) % n,
        Direction::Backward => (index % n + n - 1) % n,
    }
}

/// Current row index into a table of fixed length.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Cursor {
    index: usize,
    len:   NonZeroUsize,
}

impl Cursor {
    /// Cursor at `index` (taken modulo `len`).
    pub fn at(index: usize, len: NonZeroUsize) -> Self {
        Self { index: index % len.get(), len }
    }

    /// Cursor parked on the last row so the first forward step shows row 0.
    pub fn before_first(len: NonZeroUsize) -> Self {
        Self { index: len.get() - 1, len }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn len(&self) -> NonZeroUsize {
        self.len
    }

    /// Move one row and return the new index.
    pub fn step(&mut self, direction: Direction) -> usize {
        self.index = step_index(self.index, self.len, direction);
        self.index
    }
}
