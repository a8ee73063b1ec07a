//! The [`Grid`] type: a fixed `cols × rows` array of walled [`Cell`]s.
//!
//! Storage is a single row-major `Vec` owned by the grid, so a grid can be
//! moved into whichever thread runs its session.

use crate::cell::Cell;
use crate::error::GridError;
use crate::geom::{Direction, Point, Range};

/// A rectangular maze grid.
///
/// Every cell starts with all four walls standing. Walls are cleared in
/// facing pairs by [`break_wall`](Grid::break_wall); the single-sided
/// [`set_wall`](Grid::set_wall) exists for building external or malformed
/// grids.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid"))]
pub struct Grid {
    cols: i32,
    rows: i32,
    cells: Vec<Cell>,
}

/// Unchecked wire form of a [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    cols: i32,
    rows: i32,
    cells: Vec<Cell>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, GridError> {
        let RawGrid { cols, rows, cells } = raw;
        if cols <= 0 || rows <= 0 {
            return Err(GridError::InvalidDimensions { cols, rows });
        }
        if cells.len() != (cols as usize) * (rows as usize) {
            return Err(GridError::CellCount {
                cols,
                rows,
                found: cells.len(),
            });
        }
        Ok(Self { cols, rows, cells })
    }
}

impl Grid {
    /// Create a fully walled grid with `cols` columns and `rows` rows.
    pub fn new(cols: i32, rows: i32) -> Result<Self, GridError> {
        if cols <= 0 || rows <= 0 {
            return Err(GridError::InvalidDimensions { cols, rows });
        }
        let len = (cols as usize) * (rows as usize);
        Ok(Self {
            cols,
            rows,
            cells: vec![Cell::default(); len],
        })
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The range covering every cell.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(self.cols, self.rows)
    }

    /// Whether `p` addresses a cell of this grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.cols && p.y < self.rows
    }

    /// Top-left cell, whose top wall is the way in.
    #[inline]
    pub fn entrance(&self) -> Point {
        Point::ZERO
    }

    /// Bottom-right cell, whose bottom wall is the way out.
    #[inline]
    pub fn exit(&self) -> Point {
        Point::new(self.cols - 1, self.rows - 1)
    }

    /// Flat index of `p`, or `None` if out of range.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some((p.y as usize) * (self.cols as usize) + (p.x as usize))
        } else {
            None
        }
    }

    /// The cell at `p`, or `None` if out of range.
    #[inline]
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.idx(p).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `p`.
    #[inline]
    pub fn cell_mut(&mut self, p: Point) -> Option<&mut Cell> {
        self.idx(p).map(move |i| &mut self.cells[i])
    }

    /// Iterate over `(Point, &Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &Cell)> + '_ {
        self.bounds().iter().zip(self.cells.iter())
    }

    // -----------------------------------------------------------------------
    // Walls
    // -----------------------------------------------------------------------

    /// Whether the wall on `side` of `p` is standing. Out-of-range cells
    /// report every wall as standing.
    #[inline]
    pub fn has_wall(&self, p: Point, side: Direction) -> bool {
        self.cell(p).is_none_or(|c| c.has_wall(side))
    }

    /// Whether one can step from `p` towards `dir`: the neighbor exists and
    /// `p`'s own wall on that side is down. The neighbor's wall is not
    /// consulted.
    #[inline]
    pub fn is_open(&self, p: Point, dir: Direction) -> bool {
        self.contains(p.step(dir)) && !self.has_wall(p, dir)
    }

    /// Whether `a` and `b` are adjacent and the wall between them is down on
    /// both sides.
    pub fn has_passage(&self, a: Point, b: Point) -> bool {
        match a.direction_to(b) {
            Some(d) => self.is_open(a, d) && self.is_open(b, d.opposite()),
            None => false,
        }
    }

    /// Append the cells reachable from `p` through its own open walls, in
    /// left, right, top, bottom order. The caller clears `buf`.
    pub fn open_neighbors_into(&self, p: Point, buf: &mut Vec<Point>) {
        if !self.contains(p) {
            return;
        }
        for d in Direction::ALL {
            if self.is_open(p, d) {
                buf.push(p.step(d));
            }
        }
    }

    /// The cells reachable from `p` through its own open walls.
    pub fn open_neighbors(&self, p: Point) -> Vec<Point> {
        let mut buf = Vec::with_capacity(4);
        self.open_neighbors_into(p, &mut buf);
        buf
    }

    /// Clear the wall pair shared by two axis-adjacent cells.
    ///
    /// Leaves the grid untouched and returns
    /// [`GridError::InvalidAdjacency`] if either cell is out of range or the
    /// cells are not exactly one step apart.
    pub fn break_wall(&mut self, a: Point, b: Point) -> Result<Direction, GridError> {
        let invalid = GridError::InvalidAdjacency { a, b };
        let (Some(ia), Some(ib)) = (self.idx(a), self.idx(b)) else {
            return Err(invalid);
        };
        let dir = a.direction_to(b).ok_or(invalid)?;
        self.cells[ia].walls.set(dir, false);
        self.cells[ib].walls.set(dir.opposite(), false);
        Ok(dir)
    }

    /// Raise or clear a single wall on one cell only.
    ///
    /// This does not touch the neighbor and can break wall symmetry; it is
    /// meant for the boundary openings and for hand-built grids.
    pub fn set_wall(&mut self, p: Point, side: Direction, present: bool) -> Result<(), GridError> {
        let cell = self
            .cell_mut(p)
            .ok_or(GridError::InvalidAdjacency { a: p, b: p.step(side) })?;
        cell.walls.set(side, present);
        Ok(())
    }

    /// Number of open passages: adjacent pairs open on both sides.
    pub fn passage_count(&self) -> usize {
        self.bounds()
            .iter()
            .map(|p| {
                [Direction::Right, Direction::Bottom]
                    .into_iter()
                    .filter(|&d| self.has_passage(p, p.step(d)))
                    .count()
            })
            .sum()
    }

    /// Whether every interior wall agrees with its facing wall.
    pub fn is_wall_symmetric(&self) -> bool {
        self.bounds().iter().all(|p| {
            [Direction::Right, Direction::Bottom].into_iter().all(|d| {
                let n = p.step(d);
                !self.contains(n) || self.has_wall(p, d) == self.has_wall(n, d.opposite())
            })
        })
    }

    // -----------------------------------------------------------------------
    // Traversal state
    // -----------------------------------------------------------------------

    /// Whether `p` is marked visited. Out-of-range cells are not.
    #[inline]
    pub fn visited(&self, p: Point) -> bool {
        self.cell(p).is_some_and(|c| c.visited)
    }

    /// Set the visited flag of `p`. Out-of-range points are ignored.
    #[inline]
    pub fn set_visited(&mut self, p: Point, visited: bool) {
        if let Some(c) = self.cell_mut(p) {
            c.visited = visited;
        }
    }

    /// Clear the visited flag and A* state of every cell.
    ///
    /// Must run between generation and search, and between two searches.
    pub fn reset_visited(&mut self) {
        for c in self.cells.iter_mut() {
            c.reset_search();
        }
    }
}
