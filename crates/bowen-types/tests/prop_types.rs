// ─────────────────────────────────────────────────────────────────────
// Bowen Dimension Core — Property-Based Tests (proptest) for bowen-types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for bowen-types using proptest.
//!
//! Covers: configuration validation, JSON roundtrip of configs and history records.

use bowen_types::config::{BowenConfig, EquationConfig, SolverConfig};
use bowen_types::state::{IterationRecord, RootEstimate, RootMethod};
use proptest::prelude::*;

// ── Configuration Validation ─────────────────────────────────────────

proptest! {
    /// Any positive tolerance with at least one iteration is accepted.
    #[test]
    fn solver_config_accepts_positive_tolerance(
        max_iter in 1usize..500,
        tol_exp in -14i32..0,
    ) {
        let cfg = SolverConfig { max_iter, tolerance: 10f64.powi(tol_exp), verbose: false };
        prop_assert!(cfg.validate().is_ok());
    }

    /// Non-positive tolerances are rejected.
    #[test]
    fn solver_config_rejects_nonpositive_tolerance(tol in -1.0f64..=0.0) {
        let cfg = SolverConfig { tolerance: tol, ..SolverConfig::default() };
        prop_assert!(cfg.validate().is_err());
    }

    /// A bracket inside the clamp with alpha_min < alpha_max validates.
    #[test]
    fn equation_bracket_inside_clamp_is_valid(
        lo in 0.001f64..4.0,
        width in 0.01f64..5.0,
    ) {
        let cfg = EquationConfig { alpha_min: lo, alpha_max: lo + width, ..EquationConfig::default() };
        prop_assert!(cfg.validate().is_ok());
    }

    /// Solver settings survive a JSON roundtrip.
    #[test]
    fn config_json_roundtrip(
        max_iter in 1usize..100,
        min_blocks in 1usize..5000,
        seed in any::<u64>(),
        verbose in any::<bool>(),
    ) {
        let mut cfg = BowenConfig::default();
        cfg.solver.max_iter = max_iter;
        cfg.solver.verbose = verbose;
        cfg.options.min_blocks = min_blocks;
        cfg.spectral.seed = seed;

        let json = serde_json::to_string(&cfg).unwrap();
        let back: BowenConfig = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back.solver.max_iter, max_iter);
        prop_assert_eq!(back.solver.verbose, verbose);
        prop_assert_eq!(back.options.min_blocks, min_blocks);
        prop_assert_eq!(back.spectral.seed, seed);
    }
}

// ── History Records ──────────────────────────────────────────────────

proptest! {
    /// Records keep every field through JSON.
    #[test]
    fn record_json_roundtrip(
        iteration in 0usize..1000,
        n_blocks in 0usize..100_000,
        alpha in 0.001f64..10.0,
        max_diameter in 0.0f64..10.0,
        method_idx in 0usize..3,
    ) {
        let method = [RootMethod::Brent, RootMethod::GridSearch, RootMethod::Bisection][method_idx];
        let rec = IterationRecord { iteration, n_blocks, alpha, max_diameter, method };
        let json = serde_json::to_string(&rec).unwrap();
        let back: IterationRecord = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, rec);
    }

    /// The tag and the carried alpha are independent of each other.
    #[test]
    fn root_estimate_alpha_is_payload(alpha in 0.001f64..10.0) {
        for est in [
            RootEstimate::Found(alpha),
            RootEstimate::Approximated(alpha),
            RootEstimate::Bisected(alpha),
        ] {
            prop_assert_eq!(est.alpha(), alpha);
        }
    }
}
