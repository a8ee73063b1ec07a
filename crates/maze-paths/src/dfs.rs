//! Exhaustive depth-first search.

use std::time::Instant;

use maze_core::{Direction, Grid, Interrupt, MazeObserver, Point};

use crate::solver::{DfsFrame, Outcome, Search, Solver};

impl Solver {
    /// Find *a* path from `from` to `to` by depth-first backtracking.
    ///
    /// Directions are tried in the fixed order left, right, top, bottom, so
    /// traces are replayable. The first path found wins; it is the shortest
    /// only when the grid is a tree. Every forward step and every backtrack
    /// is reported through `observer.move_made`.
    ///
    /// Resets the grid's traversal state before starting.
    pub fn dfs_path(
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

        self.dfs_stack.clear();
        grid.set_visited(from, true);
        self.dfs_stack.push(DfsFrame { cell: from, next: 0 });
        let mut moves = 0;

        let outcome = loop {
            let Some(top) = self.dfs_stack.last_mut() else {
                break Outcome::Unreachable;
            };
            let cur = top.cell;
            if cur == to {
                break Outcome::Found;
            }
            if interrupt.is_interrupted() {
                break Outcome::Cancelled;
            }

            // All branches below `cur` failed.
            if top.next == Direction::ALL.len() {
                self.dfs_stack.pop();
                if self.dfs.unmark_on_backtrack {
                    grid.set_visited(cur, false);
                }
                if let Some(parent) = self.dfs_stack.last() {
                    observer.move_made(cur, parent.cell, true);
                }
                continue;
            }

            let dir = Direction::ALL[top.next];
            top.next += 1;
            if !grid.is_open(cur, dir) {
                continue;
            }
            let n = cur.step(dir);
            if grid.visited(n) {
                continue;
            }

            grid.set_visited(n, true);
            moves += 1;
            observer.move_made(cur, n, false);
            self.dfs_stack.push(DfsFrame { cell: n, next: 0 });
        };

        let elapsed = started.elapsed();
        log::debug!("dfs {from} -> {to}: {outcome:?} after {moves} moves");
        if outcome != Outcome::Found {
            if outcome == Outcome::Cancelled {
                log::warn!("dfs interrupted after {moves} moves");
            }
            self.dfs_stack.clear();
            return Search::failed(outcome, moves, elapsed);
        }

        let path: Vec<Point> = self.dfs_stack.iter().map(|f| f.cell).collect();
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
    use maze_core::NoopObserver;
    use maze_gen::Backtracker;

    #[derive(Default)]
    struct Trace {
        moves: Vec<(Point, Point, bool)>,
        path: Vec<Point>,
    }

    impl MazeObserver for Trace {
        fn move_made(&mut self, from: Point, to: Point, undo: bool) {
            self.moves.push((from, to, undo));
        }

        fn path_point(&mut self, cell: Point) {
            self.path.push(cell);
        }
    }

    fn solve(grid: &mut Grid) -> Search {
        let (from, to) = (grid.entrance(), grid.exit());
        Solver::new().dfs_path(grid, from, to, &mut NoopObserver, &())
    }

    #[test]
    fn solves_generated_mazes() {
        for seed in 0..10 {
            let mut grid = Backtracker::seeded(seed).generate(12, 9).unwrap();
            let s = solve(&mut grid);
            assert!(s.solved(), "seed {seed}");
            assert_eq!(s.path.first(), Some(&grid.entrance()));
            assert_eq!(s.path.last(), Some(&grid.exit()));
            for w in s.path.windows(2) {
                assert!(grid.has_passage(w[0], w[1]));
            }
        }
    }

    #[test]
    fn single_cell_is_solved_without_moves() {
        let mut grid = Backtracker::seeded(0).generate(1, 1).unwrap();
        let s = solve(&mut grid);
        assert!(s.solved());
        assert_eq!(s.path, vec![Point::ZERO]);
        assert_eq!(s.moves, 0);
    }

    #[test]
    fn walled_grid_is_unreachable() {
        let mut grid = Grid::new(3, 3).unwrap();
        let s = solve(&mut grid);
        assert_eq!(s.outcome, Outcome::Unreachable);
        assert!(s.path.is_empty());
    }

    #[test]
    fn explores_in_fixed_order_and_reports_backtracks() {
        // 3x1 corridor plus a dead end below the entrance:
        //   (0,0) - (1,0) - (2,0)
        //     |
        //   (0,1)
        let mut grid = Grid::new(3, 2).unwrap();
        grid.break_wall(Point::new(0, 0), Point::new(1, 0)).unwrap();
        grid.break_wall(Point::new(1, 0), Point::new(2, 0)).unwrap();
        grid.break_wall(Point::new(0, 0), Point::new(0, 1)).unwrap();

        let mut trace = Trace::default();
        let s = Solver::new().dfs_path(&mut grid, Point::new(0, 1), Point::new(2, 0), &mut trace, &());
        assert!(s.solved());
        assert_eq!(
            trace.moves,
            vec![
                (Point::new(0, 1), Point::new(0, 0), false),
                (Point::new(0, 0), Point::new(1, 0), false),
                (Point::new(1, 0), Point::new(2, 0), false),
            ]
        );
        assert_eq!(trace.path, s.path);

        // Left comes first, so the walk runs straight down the corridor.
        let mut trace = Trace::default();
        let s = Solver::new().dfs_path(&mut grid, Point::new(2, 0), Point::new(0, 1), &mut trace, &());
        assert!(s.solved());
        assert_eq!(s.path, vec![Point::new(2, 0), Point::new(1, 0), Point::new(0, 0), Point::new(0, 1)]);
        assert!(trace.moves.iter().all(|m| !m.2));

        let mut trace = Trace::default();
        let s = Solver::new().dfs_path(&mut grid, Point::new(1, 0), Point::new(0, 1), &mut trace, &());
        assert!(s.solved());
        assert_eq!(
            trace.moves,
            vec![
                (Point::new(1, 0), Point::new(0, 0), false),
                (Point::new(0, 0), Point::new(0, 1), false),
            ]
        );
    }

    #[test]
    fn backtrack_emits_undo_moves() {
        // Dead end to the left of the start, goal to the right.
        let mut grid = Grid::new(3, 1).unwrap();
        grid.break_wall(Point::new(0, 0), Point::new(1, 0)).unwrap();
        grid.break_wall(Point::new(1, 0), Point::new(2, 0)).unwrap();
        let mut trace = Trace::default();
        let s = Solver::new().dfs_path(&mut grid, Point::new(1, 0), Point::new(2, 0), &mut trace, &());
        assert!(s.solved());
        assert_eq!(
            trace.moves,
            vec![
                (Point::new(1, 0), Point::new(0, 0), false),
                (Point::new(0, 0), Point::new(1, 0), true),
                (Point::new(1, 0), Point::new(2, 0), false),
            ]
        );
        assert_eq!(s.moves, 2);
        assert_eq!(s.path, vec![Point::new(1, 0), Point::new(2, 0)]);
        // The dead end stays marked without the unmark option.
        assert!(grid.visited(Point::new(0, 0)));
    }

    #[test]
    fn unmark_option_clears_dead_ends() {
        let mut grid = Grid::new(3, 1).unwrap();
        grid.break_wall(Point::new(0, 0), Point::new(1, 0)).unwrap();
        grid.break_wall(Point::new(1, 0), Point::new(2, 0)).unwrap();
        let mut solver = Solver::with_dfs_options(crate::DfsOptions {
            unmark_on_backtrack: true,
        });
        let s = solver.dfs_path(&mut grid, Point::new(1, 0), Point::new(2, 0), &mut NoopObserver, &());
        assert!(s.solved());
        assert!(!grid.visited(Point::new(0, 0)));
    }

    #[test]
    fn unmark_option_still_solves_grids_with_cycles() {
        let mut grid = Grid::new(3, 3).unwrap();
        for p in grid.bounds() {
            for d in [Direction::Right, Direction::Bottom] {
                let n = p.step(d);
                if grid.contains(n) {
                    grid.break_wall(p, n).unwrap();
                }
            }
        }
        let mut solver = Solver::with_dfs_options(crate::DfsOptions {
            unmark_on_backtrack: true,
        });
        let (from, to) = (grid.entrance(), grid.exit());
        let s = solver.dfs_path(&mut grid, from, to, &mut NoopObserver, &());
        assert!(s.solved());
        for w in s.path.windows(2) {
            assert!(grid.has_passage(w[0], w[1]));
        }
    }

    #[test]
    fn follows_own_side_walls_only() {
        // (0,0) is open towards (1,0) but (1,0) is walled back.
        let mut grid = Grid::new(2, 1).unwrap();
        grid.set_wall(Point::new(0, 0), Direction::Right, false).unwrap();
        let mut solver = Solver::new();
        let there = solver.dfs_path(&mut grid, Point::new(0, 0), Point::new(1, 0), &mut NoopObserver, &());
        assert!(there.solved());
        let back = solver.dfs_path(&mut grid, Point::new(1, 0), Point::new(0, 0), &mut NoopObserver, &());
        assert_eq!(back.outcome, Outcome::Unreachable);
    }

    #[test]
    fn repeated_runs_reset_state() {
        let mut grid = Backtracker::seeded(11).generate(8, 8).unwrap();
        let mut solver = Solver::new();
        let a = solve(&mut grid);
        let b = solver.dfs_path(&mut grid, Point::ZERO, Point::new(7, 7), &mut NoopObserver, &());
        let c = solver.dfs_path(&mut grid, Point::ZERO, Point::new(7, 7), &mut NoopObserver, &());
        assert_eq!(a.path, b.path);
        assert_eq!(b.path, c.path);
        assert_eq!(b.moves, c.moves);
    }

    #[test]
    fn interrupt_cancels() {
        let mut grid = Backtracker::seeded(2).generate(10, 10).unwrap();
        let s = Solver::new().dfs_path(&mut grid, Point::ZERO, Point::new(9, 9), &mut NoopObserver, &|| true);
        assert_eq!(s.outcome, Outcome::Cancelled);
        assert!(s.path.is_empty());
    }

    #[test]
    fn out_of_range_endpoints_are_unreachable() {
        let mut grid = Backtracker::seeded(2).generate(3, 3).unwrap();
        let s = Solver::new().dfs_path(&mut grid, Point::ZERO, Point::new(3, 3), &mut NoopObserver, &());
        assert_eq!(s.outcome, Outcome::Unreachable);
    }

    #[test]
    fn long_corridor_does_not_overflow() {
        let mut grid = Backtracker::seeded(4).generate(150_000, 1).unwrap();
        let s = solve(&mut grid);
        assert!(s.solved());
        assert_eq!(s.path.len(), 150_000);
    }
}
