//! Plain-text rendering of mazes and observer traces.

use std::collections::HashSet;
use std::fmt::Write;

use maze_core::{Direction, Grid, MazeObserver, Point};

/// Draw `grid` with ASCII walls, marking the cells of `path` with `*`.
///
/// A separator between two rows shows the upper cells' bottom walls; the
/// outer frame shows each border cell's own wall.
pub fn render(grid: &Grid, path: &[Point]) -> String {
    let on_path: HashSet<Point> = path.iter().copied().collect();
    let mut out = String::new();

    horizontal(&mut out, grid, 0, Direction::Top);
    for y in 0..grid.rows() {
        for x in 0..grid.cols() {
            let p = Point::new(x, y);
            out.push(if grid.has_wall(p, Direction::Left) { '|' } else { ' ' });
            out.push_str(if on_path.contains(&p) { " * " } else { "   " });
        }
        let last = Point::new(grid.cols() - 1, y);
        out.push(if grid.has_wall(last, Direction::Right) { '|' } else { ' ' });
        out.push('\n');
        horizontal(&mut out, grid, y, Direction::Bottom);
    }
    out
}

fn horizontal(out: &mut String, grid: &Grid, y: i32, side: Direction) {
    for x in 0..grid.cols() {
        out.push('+');
        out.push_str(if grid.has_wall(Point::new(x, y), side) { "---" } else { "   " });
    }
    out.push_str("+\n");
}

/// Observer that writes one line per notification.
#[derive(Debug, Default)]
pub struct Trace {
    pub lines: Vec<String>,
}

impl MazeObserver for Trace {
    fn wall_changed(&mut self, cell: Point, side: Direction, open: bool) {
        let state = if open { "open" } else { "closed" };
        self.lines.push(format!("wall {cell} {side} {state}"));
    }

    fn cell_visited(&mut self, cell: Point) {
        self.lines.push(format!("visit {cell}"));
    }

    fn move_made(&mut self, from: Point, to: Point, undo: bool) {
        let verb = if undo { "undo" } else { "move" };
        self.lines.push(format!("{verb} {from} -> {to}"));
    }

    fn path_point(&mut self, cell: Point) {
        self.lines.push(format!("path {cell}"));
    }
}

impl Trace {
    /// All lines joined, one per row.
    pub fn to_text(&self) -> String {
        let mut s = String::new();
        for line in &self.lines {
            let _ = writeln!(s, "{line}");
        }
        s
    }
}
