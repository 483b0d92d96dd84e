// ─────────────────────────────────────────────────────────────────────
// Bowen Dimension Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::constants::{ALPHA_CEILING, ALPHA_FLOOR, DIRECT_EIGEN_MAX_SIZE, NEGLIGIBLE};
use crate::error::{BowenError, BowenResult};
use serde::{Deserialize, Serialize};

/// Top-level solver configuration.
/// Every section and every field is optional in JSON; missing values take defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BowenConfig {
    #[serde(default)]
    pub solver: SolverConfig,
    #[serde(default)]
    pub options: SolveOptions,
    #[serde(default)]
    pub equation: EquationConfig,
    #[serde(default)]
    pub spectral: SpectralConfig,
}

/// Outer refinement loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Maximum number of refine/solve passes.
    #[serde(default = "default_max_iter")]
    pub max_iter: usize,
    /// Convergence tolerance on successive alpha estimates.
    /// The diameter criterion uses ten times this value.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Emit per-iteration progress at `info` level instead of `debug`.
    #[serde(default)]
    pub verbose: bool,
}

/// Per-call options of `BowenFormulaSolver::solve`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SolveOptions {
    /// Stop refining once the block count would exceed `min_blocks * 10`.
    #[serde(default = "default_adaptive")]
    pub adaptive: bool,
    #[serde(default = "default_min_blocks")]
    pub min_blocks: usize,
}

/// Bracket and fallback settings for the Bowen equation root search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquationConfig {
    #[serde(default = "default_alpha_min")]
    pub alpha_min: f64,
    #[serde(default = "default_alpha_max")]
    pub alpha_max: f64,
    /// Bracket expansion never halves `alpha_min` below this.
    #[serde(default = "default_alpha_floor")]
    pub alpha_floor: f64,
    /// Bracket expansion never doubles `alpha_max` above this.
    #[serde(default = "default_alpha_ceiling")]
    pub alpha_ceiling: f64,
    /// Absolute tolerance on alpha for the Brent solve.
    #[serde(default = "default_xtol")]
    pub xtol: f64,
    #[serde(default = "default_brent_max_iter")]
    pub brent_max_iter: usize,
    /// Sample count of the no-sign-change grid scan.
    #[serde(default = "default_grid_points")]
    pub grid_points: usize,
    #[serde(default = "default_bisection_max_iter")]
    pub bisection_max_iter: usize,
    /// Bracket width at which the manual bisection stops.
    #[serde(default = "default_bisection_tol")]
    pub bisection_tol: f64,
}

/// Spectral radius estimator settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpectralConfig {
    /// Largest matrix size handled by the direct eigen solve.
    #[serde(default = "default_direct_max_size")]
    pub direct_max_size: usize,
    /// Power iteration cap.
    #[serde(default = "default_power_max_iter")]
    pub max_iter: usize,
    /// Power iteration stops when successive estimates differ by less than this.
    #[serde(default = "default_power_tol")]
    pub tol: f64,
    /// Iterate norms below this are reported as spectral radius 0.
    #[serde(default = "default_collapse_tol")]
    pub collapse_tol: f64,
    /// Seed for the power iteration start vector.
    #[serde(default)]
    pub seed: u64,
}

fn default_max_iter() -> usize {
    20
}
fn default_tolerance() -> f64 {
    1e-6
}
fn default_adaptive() -> bool {
    true
}
fn default_min_blocks() -> usize {
    1000
}
fn default_alpha_min() -> f64 {
    0.01
}
fn default_alpha_max() -> f64 {
    3.0
}
fn default_alpha_floor() -> f64 {
    ALPHA_FLOOR
}
fn default_alpha_ceiling() -> f64 {
    ALPHA_CEILING
}
fn default_xtol() -> f64 {
    1e-12
}
fn default_brent_max_iter() -> usize {
    100
}
fn default_grid_points() -> usize {
    100
}
fn default_bisection_max_iter() -> usize {
    100
}
fn default_bisection_tol() -> f64 {
    1e-10
}
fn default_direct_max_size() -> usize {
    DIRECT_EIGEN_MAX_SIZE
}
fn default_power_max_iter() -> usize {
    1000
}
fn default_power_tol() -> f64 {
    1e-12
}
fn default_collapse_tol() -> f64 {
    NEGLIGIBLE
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            max_iter: default_max_iter(),
            tolerance: default_tolerance(),
            verbose: false,
        }
    }
}

impl Default for SolveOptions {
    fn default() -> Self {
        SolveOptions {
            adaptive: default_adaptive(),
            min_blocks: default_min_blocks(),
        }
    }
}

impl Default for EquationConfig {
    fn default() -> Self {
        EquationConfig {
            alpha_min: default_alpha_min(),
            alpha_max: default_alpha_max(),
            alpha_floor: default_alpha_floor(),
            alpha_ceiling: default_alpha_ceiling(),
            xtol: default_xtol(),
            brent_max_iter: default_brent_max_iter(),
            grid_points: default_grid_points(),
            bisection_max_iter: default_bisection_max_iter(),
            bisection_tol: default_bisection_tol(),
        }
    }
}

impl Default for SpectralConfig {
    fn default() -> Self {
        SpectralConfig {
            direct_max_size: default_direct_max_size(),
            max_iter: default_power_max_iter(),
            tol: default_power_tol(),
            collapse_tol: default_collapse_tol(),
            seed: 0,
        }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> BowenResult<()> {
        if self.max_iter == 0 {
            return Err(BowenError::ConfigError(
                "max_iter must be at least 1".to_string(),
            ));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(BowenError::ConfigError(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

impl EquationConfig {
    pub fn validate(&self) -> BowenResult<()> {
        let finite = [
            self.alpha_min,
            self.alpha_max,
            self.alpha_floor,
            self.alpha_ceiling,
            self.xtol,
            self.bisection_tol,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(BowenError::ConfigError(
                "equation bounds and tolerances must be finite".to_string(),
            ));
        }
        if self.alpha_floor <= 0.0 || self.alpha_floor > self.alpha_ceiling {
            return Err(BowenError::ConfigError(format!(
                "alpha clamp [{}, {}] is not a positive interval",
                self.alpha_floor, self.alpha_ceiling
            )));
        }
        if self.alpha_min >= self.alpha_max {
            return Err(BowenError::ConfigError(format!(
                "alpha_min ({}) must be below alpha_max ({})",
                self.alpha_min, self.alpha_max
            )));
        }
        if self.alpha_min < self.alpha_floor || self.alpha_max > self.alpha_ceiling {
            return Err(BowenError::ConfigError(format!(
                "initial bracket [{}, {}] lies outside the clamp [{}, {}]",
                self.alpha_min, self.alpha_max, self.alpha_floor, self.alpha_ceiling
            )));
        }
        if self.grid_points < 2 {
            return Err(BowenError::ConfigError(
                "grid_points must be at least 2".to_string(),
            ));
        }
        if self.xtol <= 0.0 || self.bisection_tol <= 0.0 {
            return Err(BowenError::ConfigError(
                "root tolerances must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl SpectralConfig {
    pub fn validate(&self) -> BowenResult<()> {
        if self.max_iter == 0 {
            return Err(BowenError::ConfigError(
                "power iteration max_iter must be at least 1".to_string(),
            ));
        }
        if !(self.tol.is_finite() && self.tol > 0.0) {
            return Err(BowenError::ConfigError(format!(
                "power iteration tol must be positive and finite, got {}",
                self.tol
            )));
        }
        if !(self.collapse_tol.is_finite() && self.collapse_tol >= 0.0) {
            return Err(BowenError::ConfigError(format!(
                "collapse_tol must be non-negative and finite, got {}",
                self.collapse_tol
            )));
        }
        Ok(())
    }
}

impl BowenConfig {
    /// Load from JSON file.
    pub fn from_file(path: &str) -> BowenResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> BowenResult<()> {
        self.solver.validate()?;
        self.equation.validate()?;
        self.spectral.validate()
    }
}
