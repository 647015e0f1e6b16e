//! # tanhsinh-core
//!
//! Node-count solver and table model for tanh-sinh quadrature table generation.
//!
//! Key types:
//! - [`SolverConfig`]: step size, precision digits, search ceiling, optional deadline
//! - [`QuadratureTable`]: symmetric `2N+1` abscissa/weight table plus its step size
//! - [`TableSink`]: injected consumer that serializes a finished table
//! - [`SolverError`] / [`SinkError`]: explicit failure taxonomy
//!
//! [`generate`] validates a config, solves the radius with a scan-all,
//! take-last search and evaluates every node from `-N` to `N`.

pub mod config;
pub mod error;
pub mod sink;
pub mod solver;
pub mod table;

pub use config::{SolverConfig, DEFAULT_MAX_INDEX};
pub use error::{SinkError, SolverError};
pub use sink::{MemorySink, TableSink};
pub use solver::{build_table, generate, qualifies, solve_radius};
pub use table::QuadratureTable;
