use std::time::{Duration, Instant};

use tanhsinh_math::{abscissa, pow10, weight};

use crate::config::SolverConfig;
use crate::error::SolverError;
use crate::table::QuadratureTable;

/// How many candidates are scanned between deadline checks.
const DEADLINE_CHECK_INTERVAL: u64 = 4096;

/// Thresholds derived from the precision, computed once per run.
#[derive(Debug, Clone, Copy)]
struct Thresholds {
    /// `10^p`, applied to both sides of the abscissa comparison.
    scale: f64,
    /// Noise floor `η = 10^-p`.
    eta: f64,
}

impl Thresholds {
    fn new(precision: i32) -> Self {
        Self {
            scale: pow10(precision),
            eta: pow10(-precision),
        }
    }

    /// Scaled abscissa still below the scaled boundary, and weight at or
    /// under the noise floor. NaN fails both comparisons.
    #[inline]
    fn admits(&self, h: f64, n: f64) -> bool {
        abscissa(h, n) * self.scale < 1.0 * self.scale && weight(h, n) <= self.eta
    }
}

/// Whether node index `n` satisfies both thresholds for step `h` at `precision` digits.
pub fn qualifies(h: f64, n: u64, precision: i32) -> bool {
    Thresholds::new(precision).admits(h, n as f64)
}

/// Find the table radius `N` for `config`.
///
/// # Algorithm (scan-all, take-last)
/// 1. Validate the configuration
/// 2. For every `n` in `[1, max_index)`, in increasing order, test
///    `abscissa(h, n)·10^p < 1·10^p` and `weight(h, n) ≤ 10^-p`
/// 3. Keep the last `n` that passed; the scan never stops early, since
///    rounding near the saturation point can interleave passing and
///    failing candidates
///
/// # Errors
/// - [`SolverError::InvalidConfiguration`] before any evaluation
/// - [`SolverError::NoSolutionFound`] if no candidate passed
/// - [`SolverError::DeadlineExceeded`] if `deadline_ms` is set and elapses
pub fn solve_radius(config: &SolverConfig) -> Result<usize, SolverError> {
    config.validate()?;
    log::debug!(
        "Solving radius: h = {}, p = {}, max_index = {}",
        config.step_size,
        config.precision,
        config.max_index
    );

    let h = config.step_size;
    let thresholds = Thresholds::new(config.precision);
    let deadline = config.deadline_ms.map(|ms| (ms, Duration::from_millis(ms)));
    let last = last_qualifier(config.max_index, deadline, |n| thresholds.admits(h, n as f64))?;

    match last {
        Some(n) => {
            log::info!("Solved radius N = {} ({} nodes)", n, 2 * n + 1);
            Ok(n as usize)
        }
        None => {
            log::warn!(
                "No qualifying node index below {} for h = {}, p = {}",
                config.max_index,
                h,
                config.precision
            );
            Err(SolverError::NoSolutionFound {
                max_index: config.max_index,
            })
        }
    }
}

/// Last `n` in `[1, max_index)` accepted by `admits`, visiting every
/// candidate in increasing order. A rejected candidate never ends the scan.
fn last_qualifier(
    max_index: u64,
    deadline: Option<(u64, Duration)>,
    mut admits: impl FnMut(u64) -> bool,
) -> Result<Option<u64>, SolverError> {
    let start = Instant::now();
    let mut last = None;
    for n in 1..max_index {
        if let Some((ms, budget)) = deadline {
            if (n - 1) % DEADLINE_CHECK_INTERVAL == 0 && start.elapsed() >= budget {
                log::warn!("Radius search aborted at n = {} after {}ms", n, ms);
                return Err(SolverError::DeadlineExceeded { deadline_ms: ms });
            }
        }
        if admits(n) {
            last = Some(n);
        }
    }
    Ok(last)
}

/// Evaluate every node `j` in `[-radius, radius]`, in increasing order of `j`.
pub fn build_table(h: f64, radius: usize) -> QuadratureTable {
    let radius = radius as i64;
    let len = (2 * radius + 1) as usize;
    let mut abscissas = Vec::with_capacity(len);
    let mut weights = Vec::with_capacity(len);

    for j in -radius..=radius {
        abscissas.push(abscissa(h, j as f64));
        weights.push(weight(h, j as f64));
    }

    QuadratureTable::from_parts(h, abscissas, weights)
}

/// Validate, solve and build: the full table for `config`, or nothing.
pub fn generate(config: &SolverConfig) -> Result<QuadratureTable, SolverError> {
    let radius = solve_radius(config)?;
    Ok(build_table(config.step_size, radius))
}
