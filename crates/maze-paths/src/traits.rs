use maze_core::{Grid, Point};

use crate::distance::manhattan;

/// Minimal search interface: neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with an admissible heuristic, as needed by A*.
pub trait AstarPather: Pather {
    /// Heuristic estimate of the number of steps from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Point, to: Point) -> i32;
}

/// Moves follow open passages, judged by the moving cell's own walls.
impl Pather for Grid {
    #[inline]
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        self.open_neighbors_into(p, buf);
    }
}

/// Every step crosses one cell, so grid-unit Manhattan distance never
/// overestimates.
impl AstarPather for Grid {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}
