//! Generate and solve several independent mazes side by side.
//!
//! Run: cargo run --bin maze-runner -- --sessions 4 --strategy dfs
//!
//! Each session runs on its own thread with its own seeded random stream;
//! the only thing they share is the scoreboard. Set `RUST_LOG=debug` for
//! phase-level logging.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use clap::Parser;
use maze_core::NoopObserver;
use maze_demos::text::{self, Trace};
use maze_demos::{Scoreboard, Session, SessionConfig, Strategy};
use maze_paths::DfsOptions;

#[derive(Parser)]
#[command(name = "maze-runner", version, about = "Generate and solve perfect mazes")]
struct Cli {
    /// Columns per maze.
    #[arg(long, default_value_t = 16)]
    cols: i32,
    /// Rows per maze.
    #[arg(long, default_value_t = 12)]
    rows: i32,
    /// Number of independent sessions.
    #[arg(long, default_value_t = 4)]
    sessions: usize,
    /// Base seed; session `i` uses `seed + i`. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Search strategy: dfs or astar.
    #[arg(long, default_value_t = Strategy::Astar)]
    strategy: Strategy,
    /// Let DFS revisit cells whose branches all failed.
    #[arg(long)]
    unmark_on_backtrack: bool,
    /// Cancel every unfinished session after this many milliseconds.
    #[arg(long)]
    timeout_ms: Option<u64>,
    /// Print every generation and search notification.
    #[arg(long)]
    trace: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("running {} sessions from seed {seed}", cli.sessions);

    let board = Scoreboard::new();
    let stop = AtomicBool::new(false);
    let (done_tx, done_rx) = mpsc::channel::<()>();

    let results = thread::scope(|s| {
        if let Some(ms) = cli.timeout_ms {
            let stop = &stop;
            s.spawn(move || {
                if let Err(mpsc::RecvTimeoutError::Timeout) =
                    done_rx.recv_timeout(Duration::from_millis(ms))
                {
                    log::warn!("timeout after {ms}ms, cancelling sessions");
                    stop.store(true, Ordering::Relaxed);
                }
            });
        }

        let handles: Vec<_> = (0..cli.sessions)
            .map(|i| {
                let cfg = SessionConfig {
                    cols: cli.cols,
                    rows: cli.rows,
                    seed: seed.wrapping_add(i as u64),
                    strategy: cli.strategy,
                    dfs: DfsOptions {
                        unmark_on_backtrack: cli.unmark_on_backtrack,
                    },
                };
                let session = Session::new((i + 1).to_string(), cfg);
                let (board, stop, tracing) = (&board, &stop, cli.trace);
                s.spawn(move || {
                    let mut trace = Trace::default();
                    let report = if tracing {
                        session.run(&mut trace, board, stop)
                    } else {
                        session.run(&mut NoopObserver, board, stop)
                    };
                    (session, report, trace)
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join()).collect();
        drop(done_tx);
        results
    });

    let mut failed = false;
    for joined in results {
        match joined {
            Ok((session, Ok(report), trace)) => {
                println!("maze {}:", session.id);
                if cli.trace {
                    print!("{}", trace.to_text());
                }
                let path = report
                    .search
                    .as_ref()
                    .map(|s| s.path.as_slice())
                    .unwrap_or_default();
                print!("{}", text::render(&report.grid, path));
            }
            Ok((session, Err(e), _)) => {
                log::error!("maze {}: {e}", session.id);
                failed = true;
            }
            Err(_) => {
                log::error!("a maze session panicked");
                failed = true;
            }
        }
    }

    print!("{board}");
    if failed {
        std::process::exit(1);
    }
}
