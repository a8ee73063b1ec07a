//! Path search over walled maze grids.
//!
//! Two strategies share one [`Solver`], which owns and reuses its scratch
//! buffers between runs:
//!
//! - **Depth-first backtracking** ([`Solver::dfs_path`]): finds *a* path,
//!   trying directions in a fixed order for replayable traces.
//! - **A\*** ([`Solver::astar_path`]): finds a shortest path with a
//!   Manhattan heuristic and lazy deletion of stale heap entries.
//!
//! Both follow a cell's own open walls, reset the grid's traversal state
//! before starting, report progress to a [`maze_core::MazeObserver`] and
//! poll a [`maze_core::Interrupt`] between steps.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`AstarPather`] : [`Pather`] | A* heuristic |

mod astar;
mod dfs;
mod distance;
mod solver;
mod traits;

pub use distance::manhattan;
pub use solver::{DfsOptions, Outcome, Search, Solver};
pub use traits::{AstarPather, Pather};
