//! Maze sessions shared by the `maze-runner` binary.
//!
//! A [`Session`] generates one maze with its own seeded random stream,
//! resets it and searches it, reporting phases to a
//! [`maze_core::StatusSink`] such as the thread-safe [`Scoreboard`].
//! [`text`] draws finished mazes and records observer traces.

mod scoreboard;
mod session;
pub mod text;

pub use scoreboard::Scoreboard;
pub use session::{Report, Session, SessionConfig, Strategy};
