//! Geometry primitives: [`Point`], [`Direction`] and the cell [`Range`].
//!
//! Points address cells by column (`x`) and row (`y`); rows grow downwards,
//! so [`Direction::Top`] is `y - 1`.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A cell coordinate: `x` is the column, `y` is the row.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0), the maze entrance.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent point one step towards `dir`.
    #[inline]
    pub fn step(self, dir: Direction) -> Self {
        self + dir.offset()
    }

    /// The direction leading from `self` to `other`, if the two points are
    /// exactly one step apart on a single axis.
    pub fn direction_to(self, other: Point) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&d| self.step(d) == other)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four axis directions, also naming the wall on that side of a
/// cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Left,
    Right,
    Top,
    Bottom,
}

impl Direction {
    /// All directions in the fixed search order: left, right, top, bottom.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Top,
        Direction::Bottom,
    ];

    /// Unit offset of one step in this direction.
    #[inline]
    pub const fn offset(self) -> Point {
        match self {
            Direction::Left => Point::new(-1, 0),
            Direction::Right => Point::new(1, 0),
            Direction::Top => Point::new(0, -1),
            Direction::Bottom => Point::new(0, 1),
        }
    }

    /// The facing direction: the wall a neighbor shares with us.
    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Top => Direction::Bottom,
            Direction::Bottom => Direction::Top,
        }
    }

    #[inline]
    pub(crate) const fn bit(self) -> u8 {
        match self {
            Direction::Left => 1,
            Direction::Right => 1 << 1,
            Direction::Top => 1 << 2,
            Direction::Bottom => 1 << 3,
        }
    }
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        self.opposite()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Top => "top",
            Direction::Bottom => "bottom",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// The cells of a `width × height` block anchored at the origin, walked
/// row by row.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Range {
    width: i32,
    height: i32,
}

impl Range {
    /// Block of `width` columns and `height` rows. Non-positive sizes give an
    /// empty range.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            next: Point::ZERO,
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

/// Row-major walk over a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    next: Point,
}

impl Iterator for RangeIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.range.width <= 0 || self.next.y >= self.range.height {
            return None;
        }
        let p = self.next;
        self.next.x += 1;
        if self.next.x == self.range.width {
            self.next = Point::new(0, p.y + 1);
        }
        Some(p)
    }
}
