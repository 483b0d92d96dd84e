// ─────────────────────────────────────────────────────────────────────
// Bowen Dimension Core — End-to-End Dimension Scenarios
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Full refine → build → solve runs on systems with known dimension.

use bowen_core::block::ConformalBlock;
use bowen_core::equation::BowenEquationSolver;
use bowen_core::maps::{AffineMap, MobiusMap, Point};
use bowen_core::partition::MarkovPartition;
use bowen_core::solver::BowenFormulaSolver;
use bowen_core::systems::{cantor_partition, mobius_partition, power_map_partition, similarity_dimension};
use bowen_types::config::{SolveOptions, SolverConfig};
use bowen_types::error::BowenError;
use bowen_types::state::{IterationRecord, RootMethod, SolveStatus};
use ndarray::array;
use std::sync::Arc;

fn solver(max_iter: usize, tolerance: f64) -> BowenFormulaSolver {
    BowenFormulaSolver::with_solver_config(SolverConfig {
        max_iter,
        tolerance,
        verbose: false,
    })
    .unwrap()
}

fn config_path(name: &str) -> String {
    format!("{}/../../configs/{}", env!("CARGO_MANIFEST_DIR"), name)
}

// ── Known Closed Forms ───────────────────────────────────────────────

#[test]
fn two_halving_blocks_have_dimension_one() {
    // Derivative magnitude 2 everywhere, fully connected.
    let blocks = vec![
        ConformalBlock::new(
            Arc::new(AffineMap::new(Point::new(2.0, 0.0), Point::new(0.0, 0.0))),
            Point::new(0.0, 0.0),
        ),
        ConformalBlock::new(
            Arc::new(AffineMap::new(Point::new(2.0, 0.0), Point::new(-1.0, 0.0))),
            Point::new(1.0, 0.0),
        ),
    ];
    let p = MarkovPartition::from_adjacency(blocks, &array![[1, 1], [1, 1]]).unwrap();
    let result = solver(20, 1e-3).solve(p, SolveOptions::default()).unwrap();
    assert_eq!(result.status, SolveStatus::Converged);
    assert!((result.alpha - 1.0).abs() < 1e-3, "alpha = {}", result.alpha);
}

#[test]
fn three_thirds_blocks_have_dimension_one() {
    let p = cantor_partition(3, 1.0 / 3.0).unwrap();
    let result = solver(20, 1e-3).solve(p, SolveOptions::default()).unwrap();
    assert_eq!(result.status, SolveStatus::Converged);
    assert!((result.alpha - 1.0).abs() < 1e-3, "alpha = {}", result.alpha);
}

#[test]
fn uniform_contractions_match_similarity_dimension() {
    for &(n, ratio, tol) in &[(2usize, 1.0 / 3.0, 1e-4), (3, 0.2, 1e-3), (4, 0.1, 1e-3)] {
        let p = cantor_partition(n, ratio).unwrap();
        let result = solver(20, tol).solve(p, SolveOptions::default()).unwrap();
        let expected = similarity_dimension(n, ratio);
        assert_eq!(result.status, SolveStatus::Converged, "n = {n}, r = {ratio}");
        assert!(
            (result.alpha - expected).abs() < tol,
            "n = {n}, r = {ratio}: alpha = {}, expected {}",
            result.alpha,
            expected
        );
        assert!(result.root.is_exact());
    }
}

#[test]
fn unit_circle_julia_set_has_dimension_one() {
    let p = power_map_partition(2).unwrap();
    let result = solver(4, 1e-3).solve(p, SolveOptions::default()).unwrap();
    for rec in &result.history {
        assert!((rec.alpha - 1.0).abs() < 1e-9, "iteration {}: {}", rec.iteration, rec.alpha);
    }
}

// ── Diameters ────────────────────────────────────────────────────────

fn assert_non_increasing(history: &[IterationRecord]) {
    for w in history.windows(2) {
        assert!(
            w[1].max_diameter <= w[0].max_diameter + 1e-15,
            "diameter grew from {} to {} at iteration {}",
            w[0].max_diameter,
            w[1].max_diameter,
            w[1].iteration
        );
    }
}

#[test]
fn max_diameter_never_grows_on_cantor_system() {
    let p = cantor_partition(3, 0.3).unwrap();
    let result = solver(6, 1e-12).solve(p, SolveOptions::default()).unwrap();
    assert_eq!(result.history.len(), 6);
    assert_non_increasing(&result.history);
    let first = result.history[0].max_diameter;
    let last = result.history[5].max_diameter;
    assert!(last < first * 0.01);
}

#[test]
fn max_diameter_never_grows_on_mobius_system() {
    let one = Point::new(1.0, 0.0);
    let zero = Point::new(0.0, 0.0);
    let contractions = [
        MobiusMap::new(Point::new(0.5, 0.0), zero, zero, one).unwrap(),
        // z ↦ 1 / (z + 3)
        MobiusMap::new(zero, one, one, Point::new(3.0, 0.0)).unwrap(),
    ];
    let p = mobius_partition(&contractions).unwrap();
    let result = solver(6, 1e-12).solve(p, SolveOptions::default()).unwrap();
    assert_non_increasing(&result.history);
    assert!(result.alpha > 0.0 && result.alpha < 1.0, "alpha = {}", result.alpha);
}

// ── Failure and Edge Cases ───────────────────────────────────────────

#[test]
fn empty_transition_graph_is_fatal() {
    let block = ConformalBlock::new(
        Arc::new(AffineMap::expanding_inverse_of(0.5, 0.0)),
        Point::new(0.0, 0.0),
    );
    let p = MarkovPartition::new(vec![block], Some(array![[false]])).unwrap();
    let err = solver(20, 1e-6).solve(p, SolveOptions::default()).unwrap_err();
    assert!(err.is_degenerate());
    assert!(matches!(
        err,
        BowenError::DegenerateMatrix {
            iteration: 0,
            n_blocks: 1
        }
    ));
}

#[test]
fn single_contraction_is_searched_not_defaulted() {
    let eq = BowenEquationSolver::default();
    let root = eq.solve(&array![[0.5]]);
    assert_eq!(root.method(), RootMethod::GridSearch);
    // Subcritical: the estimate stays at alpha_min, not at the 0.001 floor.
    assert!((root.alpha() - eq.config().alpha_min).abs() < 1e-12, "alpha = {}", root.alpha());
    assert!((0.5f64.powf(root.alpha()) - 1.0).abs() < 0.01);
}

#[test]
fn wide_system_stops_at_block_budget() {
    // 320 blocks refine to 102400 > 10 * 1000: one pass, then stop.
    let p = cantor_partition(320, 1.0 / 400.0).unwrap();
    let result = BowenFormulaSolver::default()
        .solve(p, SolveOptions::default())
        .unwrap();
    assert_eq!(result.status, SolveStatus::SizeLimitStopped);
    assert_eq!(result.iterations, 1);
    assert_eq!(result.partition.len(), 320);
    let expected = similarity_dimension(320, 1.0 / 400.0);
    assert!((result.alpha - expected).abs() < 1e-9, "alpha = {}", result.alpha);
}

// ── Configuration and Reporting ──────────────────────────────────────

#[test]
fn solver_from_config_file() {
    let s = BowenFormulaSolver::from_file(&config_path("cantor_quick.json")).unwrap();
    assert_eq!(s.config().max_iter, 12);
    assert!(s.config().verbose);

    let p = cantor_partition(2, 1.0 / 3.0).unwrap();
    let result = s.solve_default(p).unwrap();
    assert!(result.is_converged());
    assert!((result.alpha - similarity_dimension(2, 1.0 / 3.0)).abs() < 1e-3);
}

#[test]
fn missing_config_file_is_io_error() {
    let err = BowenFormulaSolver::from_file(&config_path("does_not_exist.json")).unwrap_err();
    assert!(matches!(err, BowenError::Io(_)));
}

#[test]
fn history_serializes_to_json() {
    let p = cantor_partition(2, 0.5).unwrap();
    let result = solver(3, 1e-9).solve(p, SolveOptions::default()).unwrap();
    let json = serde_json::to_string(&result.history).unwrap();
    let back: Vec<IterationRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result.history);
    assert!(json.contains("\"n_blocks\":8"));
}
