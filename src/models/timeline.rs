//! Dispatch timeline model.
//!
//! A timeline records every CPU slice handed out during a simulation run,
//! in dispatch order. It is the raw material for Gantt-style views and for
//! conservation checks (busy time equals total burst).

use serde::{Deserialize, Serialize};

/// The ordered log of CPU slices produced by one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Slices in dispatch order.
    pub slices: Vec<Slice>,
}

/// One contiguous interval during which a process held the CPU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Name of the dispatched process.
    pub process: String,
    /// Slice start time.
    pub start: i64,
    /// Slice end time (exclusive).
    pub end: i64,
}

impl Slice {
    /// Creates a new slice.
    pub fn new(process: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            process: process.into(),
            start,
            end,
        }
    }

    /// Slice length (end - start).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice.
    pub fn push(&mut self, slice: Slice) {
        self.slices.push(slice);
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether nothing was dispatched.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Makespan: latest slice end, or 0 when nothing ran.
    pub fn makespan(&self) -> i64 {
        self.slices.iter().map(|s| s.end).max().unwrap_or(0)
    }

    /// Total CPU time handed out across all slices.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(Slice::duration).sum()
    }

    /// All slices for one process, in dispatch order.
    pub fn slices_for(&self, process: &str) -> Vec<&Slice> {
        self.slices.iter().filter(|s| s.process == process).collect()
    }

    /// Process names in order of first dispatch.
    pub fn dispatch_order(&self) -> Vec<&str> {
        let mut order: Vec<&str> = Vec::new();
        for slice in &self.slices {
            if !order.contains(&slice.process.as_str()) {
                order.push(&slice.process);
            }
        }
        order
    }
}
