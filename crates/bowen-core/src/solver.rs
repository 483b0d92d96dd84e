// ─────────────────────────────────────────────────────────────────────
// Bowen Dimension Core — Bowen Formula Solver
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! BowenFormulaSolver — Hausdorff dimension of a limit set by partition refinement.
//!
//! Each pass:
//!   a. Build the transition matrix T of the current partition
//!   b. Fail if T is numerically zero
//!   c. Solve rho(T^∘alpha) = 1
//!   d. Record alpha and the largest block diameter
//!   e. Stop when alpha and the diameter have both settled
//!   f. Otherwise refine, stopping early if the block budget would be exceeded

use crate::equation::BowenEquationSolver;
use crate::partition::MarkovPartition;
use crate::transition::TransitionMatrixBuilder;
use bowen_types::config::{BowenConfig, SolveOptions, SolverConfig};
use bowen_types::constants::{DIAMETER_TOLERANCE_FACTOR, SIZE_LIMIT_FACTOR};
use bowen_types::error::{BowenError, BowenResult};
use bowen_types::state::{IterationRecord, RootEstimate, SolveStatus};
use tracing::{debug, info, warn};

/// Outcome of a full solve.
#[derive(Debug, Clone)]
pub struct DimensionResult {
    /// Final dimension estimate.
    pub alpha: f64,
    /// How the final alpha was obtained.
    pub root: RootEstimate,
    pub status: SolveStatus,
    pub iterations: usize,
    pub history: Vec<IterationRecord>,
    /// Partition the final alpha was computed on.
    pub partition: MarkovPartition,
}

impl DimensionResult {
    pub fn is_converged(&self) -> bool {
        self.status.is_converged()
    }
}

/// Refine → build → solve loop.
#[derive(Debug, Clone)]
pub struct BowenFormulaSolver {
    config: SolverConfig,
    options: SolveOptions,
    builder: TransitionMatrixBuilder,
    equation: BowenEquationSolver,
}

impl BowenFormulaSolver {
    /// Create a solver from a validated configuration.
    pub fn new(config: BowenConfig) -> BowenResult<Self> {
        config.validate()?;
        Ok(Self {
            config: config.solver,
            options: config.options,
            builder: TransitionMatrixBuilder::new(),
            equation: BowenEquationSolver::new(config.equation, config.spectral),
        })
    }

    /// Solver with default equation and spectral settings.
    pub fn with_solver_config(config: SolverConfig) -> BowenResult<Self> {
        Self::new(BowenConfig {
            solver: config,
            ..BowenConfig::default()
        })
    }

    /// Create a solver from a JSON config file.
    pub fn from_file(path: &str) -> BowenResult<Self> {
        Self::new(BowenConfig::from_file(path)?)
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn equation(&self) -> &BowenEquationSolver {
        &self.equation
    }

    /// Solve with the options from the configuration.
    pub fn solve_default(&self, initial: MarkovPartition) -> BowenResult<DimensionResult> {
        self.solve(initial, self.options)
    }

    /// Run the loop to one terminal outcome.
    ///
    /// The only error is `DegenerateMatrix`: the current partition has no
    /// usable transition. Every numerical difficulty in the root search is
    /// absorbed and shows up in `RootEstimate` / `IterationRecord::method`.
    pub fn solve(
        &self,
        initial: MarkovPartition,
        options: SolveOptions,
    ) -> BowenResult<DimensionResult> {
        let max_iter = self.config.max_iter;
        let tol = self.config.tolerance;
        let block_limit = options.min_blocks.saturating_mul(SIZE_LIMIT_FACTOR);

        let mut partition = initial;
        let mut history: Vec<IterationRecord> = Vec::with_capacity(max_iter);
        let mut status = SolveStatus::MaxIterStopped;
        let mut last_root = None;

        for k in 0..max_iter {
            let t = self.builder.build(&partition);
            if TransitionMatrixBuilder::is_degenerate(&t) {
                warn!(
                    iteration = k,
                    n_blocks = partition.len(),
                    "transition matrix is numerically zero"
                );
                return Err(BowenError::DegenerateMatrix {
                    iteration: k,
                    n_blocks: partition.len(),
                });
            }

            let root = self.equation.solve(&t);
            let alpha = root.alpha();
            let max_diameter = partition.max_diameter();

            let record = IterationRecord {
                iteration: k,
                n_blocks: partition.len(),
                alpha,
                max_diameter,
                method: root.method(),
            };
            self.report(&record);
            history.push(record);
            last_root = Some(root);

            if let [.., prev, _] = history.as_slice() {
                if (alpha - prev.alpha).abs() < tol && max_diameter < tol * DIAMETER_TOLERANCE_FACTOR {
                    status = SolveStatus::Converged;
                    break;
                }
            }

            if k + 1 < max_iter {
                if !options.adaptive {
                    partition = partition.refine();
                    continue;
                }
                match partition.refine_within(block_limit) {
                    Some(refined) => partition = refined,
                    None => {
                        debug!(iteration = k, block_limit, "stopping at block budget");
                        status = SolveStatus::SizeLimitStopped;
                        break;
                    }
                }
            }
        }

        let root = last_root.ok_or_else(|| {
            BowenError::ConfigError("solver ran zero iterations".to_string())
        })?;
        let iterations = history.len();

        if self.config.verbose {
            info!(?status, iterations, alpha = root.alpha(), "bowen solve finished");
        } else {
            debug!(?status, iterations, alpha = root.alpha(), "bowen solve finished");
        }

        Ok(DimensionResult {
            alpha: root.alpha(),
            root,
            status,
            iterations,
            history,
            partition,
        })
    }

    fn report(&self, r: &IterationRecord) {
        if self.config.verbose {
            info!(
                method = %r.method,
                "iteration {}: {} blocks, alpha = {:.8}, max diameter = {:.3e}",
                r.iteration, r.n_blocks, r.alpha, r.max_diameter
            );
        } else {
            debug!(
                iteration = r.iteration,
                n_blocks = r.n_blocks,
                alpha = r.alpha,
                max_diameter = r.max_diameter,
                method = %r.method,
                "bowen iteration"
            );
        }
    }
}

impl Default for BowenFormulaSolver {
    fn default() -> Self {
        Self {
            config: SolverConfig::default(),
            options: SolveOptions::default(),
            builder: TransitionMatrixBuilder::new(),
            equation: BowenEquationSolver::default(),
        }
    }
}
