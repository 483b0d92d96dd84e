// ─────────────────────────────────────────────────────────────────────
// Bowen Dimension Core — Bowen Equation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Solve rho(T^∘alpha) = 1 for the pressure exponent alpha.
//!
//! T^∘alpha is the entrywise power. Fallback chain:
//! 1. Expand the bracket: halve `alpha_min` while objective > 0 (down to the
//!    floor), double `alpha_max` while objective < 0 (up to the ceiling).
//! 2. No sign change: linear scan, return the smallest |objective|.
//! 3. Sign change: Brent to `xtol`.
//! 4. Brent fails: manual bisection on the same bracket.
//!
//! Every path returns a finite alpha inside [alpha_floor, alpha_ceiling].

use bowen_math::linalg::entrywise_power;
use bowen_math::roots::{bisect, brent_root, grid_minimize};
use bowen_math::spectral::SpectralRadiusEstimator;
use bowen_types::config::{EquationConfig, SpectralConfig};
use bowen_types::state::RootEstimate;
use ndarray::Array2;
use tracing::{debug, trace};

#[derive(Debug, Clone, Default)]
pub struct BowenEquationSolver {
    config: EquationConfig,
    estimator: SpectralRadiusEstimator,
}

impl BowenEquationSolver {
    pub fn new(config: EquationConfig, spectral: SpectralConfig) -> Self {
        Self {
            config,
            estimator: SpectralRadiusEstimator::new(spectral),
        }
    }

    pub fn config(&self) -> &EquationConfig {
        &self.config
    }

    pub fn estimator(&self) -> &SpectralRadiusEstimator {
        &self.estimator
    }

    /// rho(T^∘alpha) - 1.
    pub fn objective(&self, t: &Array2<f64>, alpha: f64) -> f64 {
        self.estimator.estimate(&entrywise_power(t, alpha)) - 1.0
    }

    /// Solve on the configured initial bracket.
    pub fn solve(&self, t: &Array2<f64>) -> RootEstimate {
        self.solve_with_bounds(t, self.config.alpha_min, self.config.alpha_max)
    }

    /// Solve starting from `[alpha_min, alpha_max]`. Never fails.
    ///
    /// When rho(T^∘alpha) < 1 already at `alpha_min` (subcritical T) the lower end
    /// is not widened, and the `Approximated` estimate stays at `alpha_min` rather
    /// than moving toward the floor. It is not a root.
    pub fn solve_with_bounds(&self, t: &Array2<f64>, alpha_min: f64, alpha_max: f64) -> RootEstimate {
        let cfg = &self.config;
        let floor = cfg.alpha_floor;
        let ceiling = cfg.alpha_ceiling;
        let f = |alpha: f64| self.objective(t, alpha);

        let (mut lo, mut hi) = (sanitize(alpha_min, floor, ceiling), sanitize(alpha_max, floor, ceiling));
        if lo > hi {
            std::mem::swap(&mut lo, &mut hi);
        }

        let mut f_lo = f(lo);
        while f_lo > 0.0 && lo > floor {
            lo = (lo * 0.5).max(floor);
            f_lo = f(lo);
        }
        let mut f_hi = f(hi);
        while f_hi < 0.0 && hi < ceiling {
            hi = (hi * 2.0).min(ceiling);
            f_hi = f(hi);
        }
        trace!(lo, hi, f_lo, f_hi, "bowen bracket");

        // NaN on either end counts as no sign change.
        let bracketed = f_lo * f_hi <= 0.0;
        if !bracketed {
            let (alpha, residual) = grid_minimize(f, lo, hi, cfg.grid_points);
            debug!(lo, hi, alpha, residual, "no sign change, grid-search estimate");
            return RootEstimate::Approximated(sanitize(alpha, floor, ceiling));
        }

        match brent_root(f, lo, hi, cfg.xtol, cfg.brent_max_iter) {
            Ok(alpha) => RootEstimate::Found(sanitize(alpha, floor, ceiling)),
            Err(e) => {
                debug!(error = %e, lo, hi, "brent failed, bisecting");
                let alpha = bisect(f, lo, hi, cfg.bisection_tol, cfg.bisection_max_iter);
                RootEstimate::Bisected(sanitize(alpha, floor, ceiling))
            }
        }
    }
}

/// Clamp into [floor, ceiling]; non-finite values go to the floor.
fn sanitize(alpha: f64, floor: f64, ceiling: f64) -> f64 {
    if alpha.is_finite() {
        alpha.clamp(floor, ceiling)
    } else {
        floor
    }
}
