//! One self-contained maze run: generate, reset, solve, report.

use std::fmt;
use std::str::FromStr;

use maze_core::{Grid, GridError, Interrupt, MazeObserver, StatusSink};
use maze_gen::{Backtracker, Carve};
use maze_paths::{DfsOptions, Search, Solver};

/// Which search a session runs once its maze is carved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    Dfs,
    #[default]
    Astar,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Dfs => f.write_str("dfs"),
            Strategy::Astar => f.write_str("astar"),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" => Ok(Strategy::Dfs),
            "astar" | "a*" => Ok(Strategy::Astar),
            other => Err(format!("unknown strategy {other:?}, expected dfs or astar")),
        }
    }
}

/// Parameters of a single session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub cols: i32,
    pub rows: i32,
    /// Seed of the session's private random stream.
    pub seed: u64,
    pub strategy: Strategy,
    pub dfs: DfsOptions,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cols: 16,
            rows: 12,
            seed: 0,
            strategy: Strategy::default(),
            dfs: DfsOptions::default(),
        }
    }
}

/// What a finished session leaves behind.
#[derive(Debug, Clone)]
pub struct Report {
    pub grid: Grid,
    pub carve: Carve,
    /// `None` if generation was interrupted before the search began.
    pub search: Option<Search>,
}

impl Report {
    /// Whether the search reached the exit.
    pub fn solved(&self) -> bool {
        self.search.as_ref().is_some_and(Search::solved)
    }
}

/// A maze session. Owns nothing shared: its grid, random stream and solver
/// are created inside [`run`](Session::run).
#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub config: SessionConfig,
}

impl Session {
    pub fn new(id: impl Into<String>, config: SessionConfig) -> Self {
        Self {
            id: id.into(),
            config,
        }
    }

    /// Generate the maze, reset it and search from entrance to exit.
    ///
    /// Phase labels and the final result are sent to `status` under this
    /// session's id. `interrupt` is polled between generation steps and
    /// between search steps.
    pub fn run(
        &self,
        observer: &mut impl MazeObserver,
        status: &impl StatusSink,
        interrupt: &impl Interrupt,
    ) -> Result<Report, GridError> {
        let cfg = &self.config;
        status.update(&self.id, "generating");
        let mut grid = Grid::new(cfg.cols, cfg.rows).inspect_err(|e| {
            log::error!("maze {}: {e}", self.id);
            status.update(&self.id, "failed");
        })?;

        let carve = Backtracker::seeded(cfg.seed).carve(&mut grid, observer, interrupt)?;
        if !carve.completed {
            status.update(&self.id, "cancelled");
            return Ok(Report {
                grid,
                carve,
                search: None,
            });
        }
        log::info!(
            "maze {} created: {}x{}, seed {}",
            self.id,
            cfg.cols,
            cfg.rows,
            cfg.seed
        );
        grid.reset_visited();

        status.update(&self.id, "solving");
        let mut solver = Solver::with_dfs_options(cfg.dfs);
        let (from, to) = (grid.entrance(), grid.exit());
        let search = match cfg.strategy {
            Strategy::Dfs => solver.dfs_path(&mut grid, from, to, observer, interrupt),
            Strategy::Astar => solver.astar_path(&mut grid, from, to, observer, interrupt),
        };

        if search.solved() {
            log::info!("maze {} solved with {}: {search}", self.id, cfg.strategy);
        } else {
            log::warn!("maze {} not solved with {}: {search}", self.id, cfg.strategy);
        }
        status.update(&self.id, &search.to_string());

        Ok(Report {
            grid,
            carve,
            search: Some(search),
        })
    }
}
