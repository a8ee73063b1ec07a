//! Perfect-maze generation for [`maze_core::Grid`].
//!
//! [`Backtracker`] carves a random spanning tree with the recursive
//! backtracker algorithm. Seed it through [`Backtracker::seeded`] for
//! reproducible layouts, or hand it any [`rand::Rng`].

mod backtracker;

pub use backtracker::{Backtracker, Carve};
