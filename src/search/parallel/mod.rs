//! Parallel execution of the exbar search across worker threads.

pub mod config;
pub mod coordinator;
pub mod sync;

pub use config::ParallelConfig;
pub use coordinator::{run_parallel_search, ParallelResult};
