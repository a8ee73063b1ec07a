use std::fmt;

use crate::geom::Point;

/// Errors raised by [`Grid`](crate::Grid) construction and wall mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Both dimensions must be at least 1.
    InvalidDimensions { cols: i32, rows: i32 },
    /// The two cells are out of range or not one axis step apart.
    InvalidAdjacency { a: Point, b: Point },
    /// A stored grid whose cell list does not cover `cols × rows`.
    CellCount { cols: i32, rows: i32, found: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { cols, rows } => {
                write!(f, "invalid maze dimensions {cols}x{rows}: both must be positive")
            }
            Self::InvalidAdjacency { a, b } => {
                write!(f, "cells {a} and {b} are not adjacent grid cells")
            }
            Self::CellCount { cols, rows, found } => {
                write!(f, "{found} cells do not fill a {cols}x{rows} maze")
            }
        }
    }
}

impl std::error::Error for GridError {}
