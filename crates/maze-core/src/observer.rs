//! Hooks through which generation and search report progress.
//!
//! The grid itself never talks to a renderer or a scoreboard. Generators and
//! solvers receive these collaborators as arguments instead.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::geom::{Direction, Point};

/// Receives step-by-step notifications from a generator or solver.
///
/// Every method defaults to a no-op; algorithms behave identically whether
/// or not anything is listening.
pub trait MazeObserver {
    /// A wall of `cell` changed state.
    fn wall_changed(&mut self, cell: Point, side: Direction, open: bool) {
        let _ = (cell, side, open);
    }

    /// Generation added `cell` to the spanning tree.
    fn cell_visited(&mut self, cell: Point) {
        let _ = cell;
    }

    /// A search stepped from `from` to `to`, or backed out of `from` into
    /// `to` when `undo` is set.
    fn move_made(&mut self, from: Point, to: Point, undo: bool) {
        let _ = (from, to, undo);
    }

    /// Next cell of a found path, emitted entrance first.
    fn path_point(&mut self, cell: Point) {
        let _ = cell;
    }
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl MazeObserver for NoopObserver {}

impl<O: MazeObserver + ?Sized> MazeObserver for &mut O {
    fn wall_changed(&mut self, cell: Point, side: Direction, open: bool) {
        (**self).wall_changed(cell, side, open);
    }

    fn cell_visited(&mut self, cell: Point) {
        (**self).cell_visited(cell);
    }

    fn move_made(&mut self, from: Point, to: Point, undo: bool) {
        (**self).move_made(from, to, undo);
    }

    fn path_point(&mut self, cell: Point) {
        (**self).path_point(cell);
    }
}

/// Receives phase labels and final results, keyed by maze identifier.
///
/// Implementations shared between sessions must serialize updates
/// themselves.
pub trait StatusSink {
    fn update(&self, maze_id: &str, status: &str);
}

impl<S: StatusSink + ?Sized> StatusSink for &S {
    fn update(&self, maze_id: &str, status: &str) {
        (**self).update(maze_id, status);
    }
}

/// Cooperative cancellation check, polled between algorithm steps.
pub trait Interrupt {
    fn is_interrupted(&self) -> bool;
}

/// Never interrupts.
impl Interrupt for () {
    #[inline]
    fn is_interrupted(&self) -> bool {
        false
    }
}

impl Interrupt for AtomicBool {
    #[inline]
    fn is_interrupted(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl<F: Fn() -> bool> Interrupt for F {
    #[inline]
    fn is_interrupted(&self) -> bool {
        self()
    }
}
