//! Configuration for the parallel search run.

/// Worker-pool configuration. Each worker runs the full deterministic search
/// on its own automaton copy; the partition of work between them is static.
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Number of worker threads to spawn.
    pub num_workers: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_workers: num_cpus::get(),
        }
    }
}

impl ParallelConfig {
    /// Set the worker count; at least one worker always runs.
    pub fn with_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = num_workers.max(1);
        self
    }

    /// Set the worker count from an Option, keeping the default when `None`.
    pub fn with_workers_option(self, num_workers: Option<usize>) -> Self {
        match num_workers {
            Some(n) => self.with_workers(n),
            None => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_at_least_one_worker() {
        assert!(ParallelConfig::default().num_workers >= 1);
    }

    #[test]
    fn test_with_workers_clamps_to_one() {
        assert_eq!(ParallelConfig::default().with_workers(0).num_workers, 1);
        assert_eq!(ParallelConfig::default().with_workers(8).num_workers, 8);
    }

    #[test]
    fn test_with_workers_option() {
        let default_workers = ParallelConfig::default().num_workers;
        assert_eq!(
            ParallelConfig::default()
                .with_workers_option(None)
                .num_workers,
            default_workers
        );
        assert_eq!(
            ParallelConfig::default()
                .with_workers_option(Some(3))
                .num_workers,
            3
        );
    }
}
