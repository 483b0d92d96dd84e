// ─────────────────────────────────────────────────────────────────────
// Bowen Dimension Core — Property-Based Tests (proptest) for bowen-math
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for bowen-math using proptest.
//!
//! Covers: direct vs power-iteration spectral radius, entrywise power,
//! Brent and bisection root finding.

use bowen_math::linalg::entrywise_power;
use bowen_math::roots::{bisect, brent_root, grid_minimize};
use bowen_math::spectral::SpectralRadiusEstimator;
use ndarray::Array2;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn square_matrix(lo: f64, hi: f64) -> impl Strategy<Value = Array2<f64>> {
    (1usize..10).prop_flat_map(move |n| {
        prop::collection::vec(lo..hi, n * n)
            .prop_map(move |data| Array2::from_shape_vec((n, n), data).unwrap())
    })
}

// ── Spectral Radius Properties ───────────────────────────────────────

proptest! {
    /// Both estimation paths agree on strictly positive matrices.
    #[test]
    fn direct_and_power_iteration_agree(m in square_matrix(0.05, 1.0), seed in any::<u64>()) {
        let est = SpectralRadiusEstimator::default();
        let mut rng = StdRng::seed_from_u64(seed);
        let direct = est.direct(&m).unwrap();
        let power = est.power_iteration(&m, &mut rng);
        prop_assert!((direct - power).abs() < 1e-6 * direct.max(1.0),
            "direct = {}, power = {}", direct, power);
    }

    /// Perron root of a nonnegative matrix lies between min and max row sums.
    #[test]
    fn spectral_radius_within_row_sum_bounds(m in square_matrix(0.0, 2.0)) {
        let est = SpectralRadiusEstimator::default();
        let rho = est.estimate(&m);
        let sums: Vec<f64> = m.rows().into_iter().map(|r| r.sum()).collect();
        let lo = sums.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = sums.iter().cloned().fold(0.0_f64, f64::max);
        prop_assert!(rho >= lo - 1e-8 && rho <= hi + 1e-8,
            "rho = {}, row sums in [{}, {}]", rho, lo, hi);
    }

    /// rho(c * M) = c * rho(M) for c > 0.
    #[test]
    fn spectral_radius_is_homogeneous(m in square_matrix(0.05, 1.0), c in 0.1f64..5.0) {
        let est = SpectralRadiusEstimator::default();
        let scaled = m.mapv(|v| v * c);
        let rho = est.estimate(&m);
        let rho_scaled = est.estimate(&scaled);
        prop_assert!((rho_scaled - c * rho).abs() < 1e-8 * (c * rho).max(1.0));
    }
}

// ── Entrywise Power Properties ───────────────────────────────────────

proptest! {
    /// Zero pattern is preserved and entries below 1 shrink as alpha grows.
    #[test]
    fn entrywise_power_monotone_in_alpha(
        m in square_matrix(0.0, 0.99),
        a1 in 0.01f64..3.0,
        delta in 0.01f64..3.0,
    ) {
        let p1 = entrywise_power(&m, a1);
        let p2 = entrywise_power(&m, a1 + delta);
        for ((&x, &y), &orig) in p1.iter().zip(p2.iter()).zip(m.iter()) {
            if orig == 0.0 {
                prop_assert_eq!(x, 0.0);
                prop_assert_eq!(y, 0.0);
            } else {
                prop_assert!(y <= x + 1e-15);
            }
        }
    }

    /// Pressure is non-increasing in alpha for entries below 1.
    #[test]
    fn pressure_decreasing_in_alpha(m in square_matrix(0.05, 0.9), a in 0.01f64..3.0) {
        let est = SpectralRadiusEstimator::default();
        let r1 = est.estimate(&entrywise_power(&m, a));
        let r2 = est.estimate(&entrywise_power(&m, a + 0.5));
        prop_assert!(r2 <= r1 + 1e-10, "rho({}) = {}, rho({}) = {}", a, r1, a + 0.5, r2);
    }
}

// ── Root Finding Properties ──────────────────────────────────────────

proptest! {
    /// Brent locates the root of n * r^x - 1 to the requested tolerance.
    #[test]
    fn brent_finds_similarity_dimension(n in 2u32..10, r in 0.05f64..0.9) {
        let expected = (n as f64).ln() / (1.0 / r).ln();
        prop_assume!(expected > 0.001 && expected < 10.0);
        let f = |x: f64| n as f64 * r.powf(x) - 1.0;
        let root = brent_root(f, 0.001, 10.0, 1e-12, 100).unwrap();
        prop_assert!((root - expected).abs() < 1e-9, "root = {}, expected = {}", root, expected);
    }

    /// Bisection agrees with Brent on a bracketed root.
    #[test]
    fn bisection_agrees_with_brent(shift in 0.1f64..9.9) {
        let f = |x: f64| (x - shift) * (1.0 + (x - shift).powi(2));
        let b = brent_root(f, 0.0, 10.0, 1e-12, 100).unwrap();
        let m = bisect(f, 0.0, 10.0, 1e-10, 100);
        prop_assert!((b - shift).abs() < 1e-9);
        prop_assert!((m - shift).abs() < 1e-9);
    }

    /// Grid search always returns a sample inside the interval.
    #[test]
    fn grid_minimize_stays_in_interval(lo in -5.0f64..5.0, width in 0.1f64..5.0, c in -10.0f64..10.0) {
        let hi = lo + width;
        let (x, fx) = grid_minimize(|x| x - c, lo, hi, 100);
        prop_assert!(x >= lo && x <= hi);
        prop_assert!(fx.is_finite());
    }
}
