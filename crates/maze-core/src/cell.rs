//! The [`Cell`] type: four walls, a visited flag and A* bookkeeping.

use crate::geom::{Direction, Point};

/// Cost sentinel for a cell no search has reached yet.
pub const UNREACHABLE: i32 = i32::MAX;

/// The four wall flags of a cell packed into one byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Walls(u8);

impl Walls {
    /// All four walls standing.
    pub const ALL: Walls = Walls(0b1111);

    /// Whether the wall on `side` is standing.
    #[inline]
    pub const fn has(self, side: Direction) -> bool {
        self.0 & side.bit() != 0
    }

    /// Raise or clear the wall on `side`.
    #[inline]
    pub fn set(&mut self, side: Direction, present: bool) {
        if present {
            self.0 |= side.bit();
        } else {
            self.0 &= !side.bit();
        }
    }

    /// Number of standing walls.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }
}

impl Default for Walls {
    #[inline]
    fn default() -> Self {
        Self::ALL
    }
}

/// A single maze cell.
///
/// `visited` is shared between phases: during generation it means "part of
/// the spanning tree", during A* it means "finalized". `g`, `h`, `f` and
/// `parent` are only meaningful during an A* search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub walls: Walls,
    pub visited: bool,
    pub g: i32,
    pub h: i32,
    pub f: i32,
    pub parent: Option<Point>,
}

impl Cell {
    /// Whether the wall on `side` is standing.
    #[inline]
    pub const fn has_wall(&self, side: Direction) -> bool {
        self.walls.has(side)
    }

    /// Restore the traversal state, leaving walls untouched.
    #[inline]
    pub fn reset_search(&mut self) {
        self.visited = false;
        self.g = UNREACHABLE;
        self.h = 0;
        self.f = UNREACHABLE;
        self.parent = None;
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self {
            walls: Walls::ALL,
            visited: false,
            g: UNREACHABLE,
            h: 0,
            f: UNREACHABLE,
            parent: None,
        }
    }
}
