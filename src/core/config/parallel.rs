//! Parallel processing configuration for batch segmentation.

use serde::{Deserialize, Serialize};

use super::errors::{ConfigError, ConfigValidator};

/// Controls how many worker threads process images concurrently.
///
/// Images are independent, so a batch is an embarrassingly parallel map. The
/// policy bounds the worker count by the available CPU parallelism minus the
/// cores reserved for the coordinating thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParallelPolicy {
    /// Explicit number of worker threads.
    /// If None, derived from `std::thread::available_parallelism`.
    /// Default: None
    #[serde(default)]
    pub max_workers: Option<usize>,

    /// Cores left free for the coordinator when the worker count is derived.
    /// Default: 1
    #[serde(default = "ParallelPolicy::default_reserved_cores")]
    pub reserved_cores: usize,

    /// Batches with at most this many images run on the calling thread.
    /// Default: 1
    #[serde(default = "ParallelPolicy::default_sequential_threshold")]
    pub sequential_threshold: usize,
}

impl ParallelPolicy {
    /// Create a new ParallelPolicy with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of workers.
    pub fn with_max_workers(mut self, max_workers: Option<usize>) -> Self {
        self.max_workers = max_workers;
        self
    }

    /// Set the number of reserved cores.
    pub fn with_reserved_cores(mut self, reserved_cores: usize) -> Self {
        self.reserved_cores = reserved_cores;
        self
    }

    /// Set the sequential threshold.
    pub fn with_sequential_threshold(mut self, threshold: usize) -> Self {
        self.sequential_threshold = threshold;
        self
    }

    /// Number of worker threads to spawn, never less than one.
    pub fn worker_count(&self) -> usize {
        if let Some(workers) = self.max_workers {
            return workers.max(1);
        }
        let available = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(2);
        available.saturating_sub(self.reserved_cores).max(1)
    }

    fn default_reserved_cores() -> usize {
        1
    }

    fn default_sequential_threshold() -> usize {
        1
    }
}

impl Default for ParallelPolicy {
    fn default() -> Self {
        Self {
            max_workers: None,
            reserved_cores: Self::default_reserved_cores(),
            sequential_threshold: Self::default_sequential_threshold(),
        }
    }
}

impl ConfigValidator for ParallelPolicy {
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(workers) = self.max_workers {
            self.validate_thread_count(workers)?;
        }
        Ok(())
    }

    fn get_defaults() -> Self {
        Self::default()
    }
}
