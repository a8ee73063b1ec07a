use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Mutex, PoisonError};

use maze_core::StatusSink;

/// Latest status line of every session, safe to share between threads.
#[derive(Debug, Default)]
pub struct Scoreboard {
    entries: Mutex<BTreeMap<String, String>>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current status of `maze_id`, if it ever reported.
    pub fn get(&self, maze_id: &str) -> Option<String> {
        self.lock().get(maze_id).cloned()
    }

    /// All entries, ordered by maze id.
    pub fn snapshot(&self) -> Vec<(String, String)> {
        self.lock()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        // A panicking session must not take the whole board down with it.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StatusSink for Scoreboard {
    fn update(&self, maze_id: &str, status: &str) {
        log::debug!("maze {maze_id}: {status}");
        self.lock().insert(maze_id.to_string(), status.to_string());
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, status) in self.lock().iter() {
            writeln!(f, "maze {id}: {status}")?;
        }
        Ok(())
    }
}
