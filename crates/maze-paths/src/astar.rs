use std::time::Instant;

use maze_core::{Grid, Interrupt, MazeObserver, Point};

use crate::solver::{NodeRef, Outcome, Search, Solver};
use crate::traits::{AstarPather, Pather};

impl Solver {
    /// Compute the shortest path from `from` to `to` using A*.
    ///
    /// Costs live on the grid cells: `g` counts steps from `from`, `h` is
    /// the grid's [`AstarPather::estimate`], `f = g + h`. A cell is
    /// finalized (marked visited) when it is popped. Improving a cell's `g`
    /// pushes a fresh heap entry rather than updating the old one, so the
    /// heap may hold stale duplicates; those are skipped when they surface.
    ///
    /// `moves` counts finalized cells, the goal excluded. Resets the grid's
    /// traversal state before starting.
    pub fn astar_path(
        &mut self,
        grid: &mut Grid,
        from: Point,
        to: Point,
        observer: &mut impl MazeObserver,
        interrupt: &impl Interrupt,
    ) -> Search {
        let started = Instant::now();
        grid.reset_visited();
        if !grid.contains(from) || !grid.contains(to) {
            return Search::failed(Outcome::Unreachable, 0, started.elapsed());
        }

        self.open.clear();
        let h = grid.estimate(from, to);
        if let Some(start) = grid.cell_mut(from) {
            start.g = 0;
            start.h = h;
            start.f = h;
            start.parent = None;
        }
        self.open.push(NodeRef { f: h, pos: from });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut moves = 0;

        let outcome = loop {
            if interrupt.is_interrupted() {
                break Outcome::Cancelled;
            }
            let Some(current) = self.open.pop() else {
                break Outcome::Unreachable;
            };
            let cp = current.pos;
            let Some(&cell) = grid.cell(cp) else {
                continue;
            };

            // Stale entry.
            if cell.visited {
                continue;
            }

            if cp == to {
                break Outcome::Found;
            }

            grid.set_visited(cp, true);
            moves += 1;
            if let Some(parent) = cell.parent {
                observer.move_made(parent, cp, false);
            }

            nbuf.clear();
            grid.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                if grid.visited(np) {
                    continue;
                }
                let tentative_g = cell.g + 1;
                let h = grid.estimate(np, to);
                let Some(n) = grid.cell_mut(np) else {
                    continue;
                };
                if tentative_g >= n.g {
                    continue;
                }
                n.g = tentative_g;
                n.h = h;
                n.f = tentative_g + h;
                n.parent = Some(cp);
                self.open.push(NodeRef { f: n.f, pos: np });
            }
        };

        self.nbuf = nbuf;
        self.open.clear();
        let elapsed = started.elapsed();
        log::debug!("astar {from} -> {to}: {outcome:?} after {moves} moves");

        if outcome != Outcome::Found {
            if outcome == Outcome::Cancelled {
                log::warn!("astar interrupted after {moves} moves");
            }
            return Search::failed(outcome, moves, elapsed);
        }

        // Reconstruct path.
        let mut path = Vec::new();
        let mut cur = Some(to);
        while let Some(p) = cur {
            path.push(p);
            cur = grid.cell(p).and_then(|c| c.parent);
        }
        path.reverse();
        for &p in &path {
            observer.path_point(p);
        }

        Search {
            outcome,
            path,
            moves,
            elapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::{Direction, NoopObserver};
    use maze_gen::Backtracker;
    use std::collections::VecDeque;
    use std::sync::atomic::AtomicBool;

    fn solve(grid: &mut Grid) -> Search {
        let (from, to) = (grid.entrance(), grid.exit());
        Solver::new().astar_path(grid, from, to, &mut NoopObserver, &())
    }

    /// Breadth-first step count through two-sided passages.
    fn bfs_len(grid: &Grid, from: Point, to: Point) -> Option<usize> {
        let mut dist = vec![usize::MAX; grid.len()];
        dist[grid.idx(from)?] = 0;
        let mut queue = VecDeque::from([from]);
        while let Some(p) = queue.pop_front() {
            let d = dist[grid.idx(p)?];
            if p == to {
                return Some(d);
            }
            for n in grid.open_neighbors(p) {
                let i = grid.idx(n)?;
                if grid.has_passage(p, n) && dist[i] == usize::MAX {
                    dist[i] = d + 1;
                    queue.push_back(n);
                }
            }
        }
        None
    }

    /// Open every interior wall.
    fn open_field(cols: i32, rows: i32) -> Grid {
        let mut grid = Grid::new(cols, rows).unwrap();
        for p in grid.bounds() {
            for d in [Direction::Right, Direction::Bottom] {
                let n = p.step(d);
                if grid.contains(n) {
                    grid.break_wall(p, n).unwrap();
                }
            }
        }
        grid
    }

    #[test]
    fn two_by_two_seed_seven_path() {
        let mut grid = Backtracker::seeded(7).generate(2, 2).unwrap();
        let expected = vec![Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)];

        let a = solve(&mut grid);
        assert_eq!(a.path, expected);
        assert_eq!(a.moves, 2);

        let (from, to) = (grid.entrance(), grid.exit());
        let d = Solver::new().dfs_path(&mut grid, from, to, &mut NoopObserver, &());
        assert_eq!(d.path, expected);
        assert_eq!(d.moves, 2);
    }

    #[test]
    fn single_cell_needs_no_expansion() {
        let mut grid = Backtracker::seeded(1).generate(1, 1).unwrap();
        let s = solve(&mut grid);
        assert!(s.solved());
        assert_eq!(s.path, vec![Point::ZERO]);
        assert_eq!(s.moves, 0);
    }

    #[test]
    fn agrees_with_dfs_and_bfs_on_perfect_mazes() {
        for seed in 0..10 {
            let mut grid = Backtracker::seeded(seed).generate(15, 11).unwrap();
            let (from, to) = (grid.entrance(), grid.exit());
            let mut solver = Solver::new();
            let a = solver.astar_path(&mut grid, from, to, &mut NoopObserver, &());
            let d = solver.dfs_path(&mut grid, from, to, &mut NoopObserver, &());
            assert!(a.solved() && d.solved(), "seed {seed}");
            // A tree has exactly one simple path.
            assert_eq!(a.path, d.path, "seed {seed}");
            assert_eq!(Some(a.path.len() - 1), bfs_len(&grid, from, to));
            for w in a.path.windows(2) {
                assert!(grid.has_passage(w[0], w[1]));
            }
        }
    }

    #[test]
    fn finds_shortest_path_on_open_field() {
        let mut grid = open_field(6, 4);
        let s = solve(&mut grid);
        assert!(s.solved());
        assert_eq!(s.path.len() - 1, 5 + 3);
        for w in s.path.windows(2) {
            assert!(grid.has_passage(w[0], w[1]));
        }
    }

    #[test]
    fn tie_break_is_deterministic() {
        let mut grid = open_field(5, 5);
        let first = solve(&mut grid);
        let second = solve(&mut grid);
        assert_eq!(first.path, second.path);
        assert_eq!(first.moves, second.moves);
        // Lowest x wins ties, so the walk goes down the left edge first.
        assert_eq!(first.path[1], Point::new(0, 1));
    }

    #[test]
    fn same_seed_same_path() {
        let mut a = Backtracker::seeded(77).generate(25, 25).unwrap();
        let mut b = Backtracker::seeded(77).generate(25, 25).unwrap();
        let (sa, sb) = (solve(&mut a), solve(&mut b));
        assert_eq!(sa.path, sb.path);
        assert_eq!(sa.moves, sb.moves);
    }

    #[test]
    fn reports_path_points_in_order() {
        #[derive(Default)]
        struct Points(Vec<Point>);
        impl MazeObserver for Points {
            fn path_point(&mut self, cell: Point) {
                self.0.push(cell);
            }
        }

        let mut grid = Backtracker::seeded(4).generate(7, 5).unwrap();
        let mut points = Points::default();
        let (from, to) = (grid.entrance(), grid.exit());
        let s = Solver::new().astar_path(&mut grid, from, to, &mut points, &());
        assert_eq!(points.0, s.path);
    }

    #[test]
    fn each_cell_is_finalized_once() {
        // Open fields are full of cycles, so cells are pushed more than once.
        let mut grid = open_field(6, 5);
        let mut moves = Vec::new();
        struct Moves<'a>(&'a mut Vec<(Point, Point)>);
        impl MazeObserver for Moves<'_> {
            fn move_made(&mut self, from: Point, to: Point, _: bool) {
                self.0.push((from, to));
            }
        }
        let s = Solver::new().astar_path(
            &mut grid,
            Point::new(5, 0),
            Point::new(0, 4),
            &mut Moves(&mut moves),
            &(),
        );
        assert!(s.solved());
        let mut finalized: Vec<Point> = moves.iter().map(|m| m.1).collect();
        let before = finalized.len();
        finalized.sort_by_key(|p| (p.x, p.y));
        finalized.dedup();
        assert_eq!(finalized.len(), before);
        assert_eq!(s.moves, before + 1);
    }

    #[test]
    fn disconnected_goal_is_unreachable() {
        let mut grid = open_field(4, 4);
        let exit = grid.exit();
        grid.set_wall(exit.step(Direction::Left), Direction::Right, true).unwrap();
        grid.set_wall(exit.step(Direction::Top), Direction::Bottom, true).unwrap();
        let s = solve(&mut grid);
        assert_eq!(s.outcome, Outcome::Unreachable);
        assert_eq!(s.moves, 15);
        assert!(s.path.is_empty());
    }

    #[test]
    fn interrupt_cancels_before_first_pop() {
        let mut grid = Backtracker::seeded(8).generate(9, 9).unwrap();
        let stop = AtomicBool::new(true);
        let s = Solver::new().astar_path(&mut grid, Point::ZERO, Point::new(8, 8), &mut NoopObserver, &stop);
        assert_eq!(s.outcome, Outcome::Cancelled);
        assert_eq!(s.moves, 0);
    }

    #[test]
    fn costs_are_left_on_the_grid() {
        let mut grid = open_field(3, 1);
        let s = solve(&mut grid);
        assert!(s.solved());
        let exit = grid.cell(Point::new(2, 0)).unwrap();
        assert_eq!(exit.g, 2);
        assert_eq!(exit.f, 2);
        assert_eq!(exit.parent, Some(Point::new(1, 0)));
    }
}
