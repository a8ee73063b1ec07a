//! Randomized recursive backtracker.
//!
//! Depth-first spanning-tree construction: from the current cell, try the
//! four directions in a freshly shuffled order, carve into the first
//! unvisited neighbor and continue from there; when a cell runs out of
//! candidates, fall back to the cell that carved into it. Every cell is
//! entered exactly once through exactly one new passage, so the result is a
//! perfect maze with `cols * rows - 1` passages.
//!
//! The recursion is unrolled onto an explicit stack of [`Frame`]s, so a
//! serpentine layout as deep as the whole grid costs heap, not call stack.

use maze_core::{Direction, Grid, GridError, Interrupt, MazeObserver, NoopObserver, Point};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Outcome of a [`Backtracker::carve`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carve {
    /// Wall pairs cleared while carving (boundary openings excluded).
    pub passages: usize,
    /// False if the interrupt fired before the spanning tree was complete.
    pub completed: bool,
}

/// One suspended level of the depth-first walk.
#[derive(Debug, Clone, Copy)]
struct Frame {
    cell: Point,
    dirs: [Direction; 4],
    next: usize,
}

/// Perfect-maze generator driven by a random source `R`.
pub struct Backtracker<R: Rng> {
    pub rng: R,
    stack: Vec<Frame>,
}

impl Backtracker<StdRng> {
    /// A generator whose output is fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Backtracker<R> {
    /// Create a generator drawing its shuffles from `rng`.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            stack: Vec::new(),
        }
    }

    /// Build a fresh `cols × rows` maze, ready for searching.
    pub fn generate(&mut self, cols: i32, rows: i32) -> Result<Grid, GridError> {
        let mut grid = Grid::new(cols, rows)?;
        self.carve(&mut grid, &mut NoopObserver, &())?;
        grid.reset_visited();
        Ok(grid)
    }

    /// Open the entrance and exit, then carve a spanning tree into `grid`
    /// starting from the entrance.
    ///
    /// `grid` is expected to be fully walled and unvisited. Visited flags are
    /// left set afterwards; reset them before searching. If `interrupt`
    /// fires, carving stops between two steps and the partial grid is
    /// reported with `completed == false`.
    pub fn carve(
        &mut self,
        grid: &mut Grid,
        observer: &mut impl MazeObserver,
        interrupt: &impl Interrupt,
    ) -> Result<Carve, GridError> {
        let entrance = grid.entrance();
        let exit = grid.exit();
        grid.set_wall(entrance, Direction::Top, false)?;
        observer.wall_changed(entrance, Direction::Top, true);
        grid.set_wall(exit, Direction::Bottom, false)?;
        observer.wall_changed(exit, Direction::Bottom, true);

        self.stack.clear();
        grid.set_visited(entrance, true);
        observer.cell_visited(entrance);
        let first = self.frame(entrance);
        self.stack.push(first);

        let mut passages = 0;
        while let Some(top) = self.stack.last_mut() {
            if interrupt.is_interrupted() {
                log::warn!("carving interrupted after {passages} passages");
                self.stack.clear();
                return Ok(Carve {
                    passages,
                    completed: false,
                });
            }

            if top.next == top.dirs.len() {
                self.stack.pop();
                continue;
            }
            let cur = top.cell;
            let dir = top.dirs[top.next];
            top.next += 1;

            let n = cur.step(dir);
            if !grid.contains(n) || grid.visited(n) {
                continue;
            }

            grid.break_wall(cur, n)?;
            observer.wall_changed(cur, dir, true);
            observer.wall_changed(n, dir.opposite(), true);
            grid.set_visited(n, true);
            observer.cell_visited(n);
            passages += 1;
            log::trace!("carved {cur} -> {n}");

            let frame = self.frame(n);
            self.stack.push(frame);
        }

        log::debug!(
            "carved {}x{} maze with {passages} passages",
            grid.cols(),
            grid.rows()
        );
        Ok(Carve {
            passages,
            completed: true,
        })
    }

    fn frame(&mut self, cell: Point) -> Frame {
        let mut dirs = Direction::ALL;
        dirs.shuffle(&mut self.rng);
        Frame { cell, dirs, next: 0 }
    }
}
