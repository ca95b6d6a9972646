//! Static partitioning of one logical search tree across workers.
//!
//! Every worker runs the identical deterministic search. The first recursion
//! level whose cumulative branching estimate exceeds `4 * size` becomes the
//! cutoff depth, fixed for the rest of the run. From then on, arrivals at
//! exactly that depth are counted, and a worker enters a branch only when the
//! count lands on its own rank modulo the worker count. Because all workers
//! enumerate the same branches in the same order above the cutoff, every
//! branch at the cutoff is owned by exactly one worker.

/// Per-worker partition state. `cutoff_depth` and `cutoff_count` span the
/// whole run, including later iterative-deepening rounds; they are never
/// reset between rounds.
#[derive(Debug, Clone)]
pub struct Partitioner {
    rank: u64,
    size: u64,
    cutoff_depth: Option<usize>,
    cutoff_count: u64,
}

impl Partitioner {
    /// Partition state for worker `rank` of `size`. A zero `size` is treated
    /// as a single worker.
    pub fn new(rank: usize, size: usize) -> Self {
        Self {
            rank: rank as u64,
            size: size.max(1) as u64,
            cutoff_depth: None,
            cutoff_count: 0,
        }
    }

    /// Partition state for a run with a single worker; admits every branch.
    pub fn single() -> Self {
        Self::new(0, 1)
    }

    /// Decide whether this worker enters the branch reached at `level` with
    /// the given running branching-estimate product. While the cutoff depth
    /// is undetermined, the first level where the product exceeds `4 * size`
    /// fixes it and resets the product; afterwards, arrivals at the cutoff
    /// depth are handed out round-robin by rank.
    pub fn admit(&mut self, level: usize, product: &mut u64) -> bool {
        match self.cutoff_depth {
            None => {
                if *product > 4 * self.size {
                    self.cutoff_depth = Some(level);
                    *product = 1;
                }
                true
            }
            Some(depth) => {
                if level == depth {
                    self.cutoff_count += 1;
                    self.cutoff_count % self.size == self.rank
                } else {
                    true
                }
            }
        }
    }

    /// The depth at which branches are divided, once determined.
    pub fn cutoff_depth(&self) -> Option<usize> {
        self.cutoff_depth
    }
}
