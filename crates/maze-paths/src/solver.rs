use std::collections::BinaryHeap;
use std::fmt;
use std::time::Duration;

use maze_core::Point;

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The goal was reached.
    Found,
    /// The frontier ran dry first. Normal on hand-built grids.
    Unreachable,
    /// The interrupt fired between two steps.
    Cancelled,
}

/// The result of one search run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Search {
    pub outcome: Outcome,
    /// Cells from start to goal inclusive; empty unless `outcome` is
    /// [`Outcome::Found`].
    pub path: Vec<Point>,
    /// Forward steps for DFS, finalized nodes for A*.
    pub moves: usize,
    pub elapsed: Duration,
}

impl Search {
    /// Whether the goal was reached.
    #[inline]
    pub fn solved(&self) -> bool {
        self.outcome == Outcome::Found
    }

    pub(crate) fn failed(outcome: Outcome, moves: usize, elapsed: Duration) -> Self {
        Self {
            outcome,
            path: Vec::new(),
            moves,
            elapsed,
        }
    }
}

impl fmt::Display for Search {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::Found => write!(f, "solved in {:?} with {} moves", self.elapsed, self.moves),
            Outcome::Unreachable => write!(
                f,
                "unsolved after {:?} with {} moves",
                self.elapsed, self.moves
            ),
            Outcome::Cancelled => write!(f, "cancelled after {} moves", self.moves),
        }
    }
}

/// Tuning for [`Solver::dfs_path`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DfsOptions {
    /// Clear a cell's visited flag once all its branches failed, so sibling
    /// branches may pass through it again. Inert on perfect mazes;
    /// exponential on grids with cycles.
    pub unmark_on_backtrack: bool,
}

// ---------------------------------------------------------------------------
// Internal search state
// ---------------------------------------------------------------------------

/// Open-set entry, ordered for `BinaryHeap` so the lowest `f` pops first
/// and ties go to the lowest `(x, y)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) f: i32,
    pub(crate) pos: Point,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .f
            .cmp(&self.f)
            .then_with(|| (other.pos.x, other.pos.y).cmp(&(self.pos.x, self.pos.y)))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// One suspended level of the depth-first search.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DfsFrame {
    pub(crate) cell: Point,
    /// Index into `Direction::ALL` of the next direction to try.
    pub(crate) next: usize,
}

// ---------------------------------------------------------------------------
// Solver
// ---------------------------------------------------------------------------

/// Runs searches over a [`Grid`](maze_core::Grid).
///
/// `Solver` owns the open list, the DFS stack and a neighbor buffer, so
/// repeated searches reuse their allocations. Per-cell costs and visited
/// flags live on the grid itself and are reset at the start of each search.
#[derive(Debug, Default)]
pub struct Solver {
    pub dfs: DfsOptions,
    pub(crate) open: BinaryHeap<NodeRef>,
    pub(crate) dfs_stack: Vec<DfsFrame>,
    pub(crate) nbuf: Vec<Point>,
}

impl Solver {
    /// Create a solver with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver with the given depth-first options.
    pub fn with_dfs_options(dfs: DfsOptions) -> Self {
        Self {
            dfs,
            ..Self::default()
        }
    }
}
