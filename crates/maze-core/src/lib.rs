//! **maze-core**: the walled grid model shared by maze generation and
//! search.
//!
//! This crate provides geometry primitives, the [`Cell`] / [`Grid`] data
//! model with its wall and traversal state, and the collaborator traits
//! ([`MazeObserver`], [`StatusSink`], [`Interrupt`]) through which
//! algorithms report progress and poll for cancellation.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod observer;

pub use cell::{Cell, UNREACHABLE, Walls};
pub use error::GridError;
pub use geom::{Direction, Point, Range};
pub use grid::Grid;
pub use observer::{Interrupt, MazeObserver, NoopObserver, StatusSink};
