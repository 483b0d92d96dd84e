// ─────────────────────────────────────────────────────────────────────
// Bowen Dimension Core — Spectral Radius
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Spectral radius estimation.
//!
//! Small matrices (size <= `direct_max_size`) get the exact maximum eigenvalue
//! modulus from a Schur decomposition. Larger matrices, or small ones where the
//! direct solve fails, go through power iteration:
//!   v <- M v;  lambda <- |v|;  v <- v / lambda
//! started from a seeded random nonnegative vector.

use crate::linalg::{eigenvalue_moduli, norm_l2};
use bowen_types::config::SpectralConfig;
use bowen_types::error::BowenResult;
use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

/// Dominant eigenvalue modulus of a square matrix.
#[derive(Debug, Clone, Default)]
pub struct SpectralRadiusEstimator {
    config: SpectralConfig,
}

impl SpectralRadiusEstimator {
    pub fn new(config: SpectralConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SpectralConfig {
        &self.config
    }

    /// Spectral radius with the power-iteration start vector drawn from the configured seed.
    ///
    /// Two calls on the same matrix always agree.
    pub fn estimate(&self, m: &Array2<f64>) -> f64 {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        self.estimate_with_rng(m, &mut rng)
    }

    /// Spectral radius using a caller-supplied generator for the power-iteration fallback.
    pub fn estimate_with_rng<R: Rng>(&self, m: &Array2<f64>, rng: &mut R) -> f64 {
        let (n, cols) = m.dim();
        if n != cols {
            debug!(rows = n, cols, "spectral radius of a non-square matrix, returning 0");
            return 0.0;
        }
        if n == 0 {
            return 0.0;
        }

        if n <= self.config.direct_max_size {
            match self.direct(m) {
                Ok(rho) => return rho,
                Err(e) => debug!(size = n, error = %e, "direct eigen solve failed, using power iteration"),
            }
        }

        self.power_iteration(m, rng)
    }

    /// Exact spectral radius from the full eigenvalue spectrum.
    pub fn direct(&self, m: &Array2<f64>) -> BowenResult<f64> {
        let moduli = eigenvalue_moduli(m)?;
        Ok(moduli.into_iter().fold(0.0_f64, f64::max))
    }

    /// Power iteration estimate.
    ///
    /// Returns 0 as soon as an iterate collapses below `collapse_tol` (nilpotent
    /// or otherwise degenerate input). A non-finite iterate norm is returned as is.
    /// Non-square input has no spectrum and gives 0.
    pub fn power_iteration<R: Rng>(&self, m: &Array2<f64>, rng: &mut R) -> f64 {
        let (n, cols) = m.dim();
        if n == 0 || n != cols {
            return 0.0;
        }

        let mut v = Array1::from_shape_fn(n, |_| rng.gen::<f64>());
        let mut norm = norm_l2(&v);
        if norm < self.config.collapse_tol {
            v = Array1::from_elem(n, 1.0);
            norm = (n as f64).sqrt();
        }
        v /= norm;

        let mut lambda = 0.0_f64;
        for k in 0..self.config.max_iter {
            let w = m.dot(&v);
            let next = norm_l2(&w);
            if !next.is_finite() {
                debug!(iteration = k, "power iteration produced a non-finite norm");
                return next;
            }
            if next < self.config.collapse_tol {
                trace!(iteration = k, "power iteration collapsed");
                return 0.0;
            }
            v = w / next;
            if (next - lambda).abs() < self.config.tol {
                trace!(iterations = k + 1, lambda = next, "power iteration converged");
                return next;
            }
            lambda = next;
        }

        debug!(
            max_iter = self.config.max_iter,
            lambda, "power iteration hit the iteration cap"
        );
        lambda
    }
}
