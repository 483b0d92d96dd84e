// ─────────────────────────────────────────────────────────────────────
// Bowen Dimension Core — Transition Matrix
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Pressure (transfer) matrix of a Markov partition.
//!
//!   T[i, j] = 1 / |block_i.derivative(y_ij)|,  y_ij = block_i.inverse(sample_j)
//!
//! on every transition-graph edge, 0 elsewhere.

use crate::block::ConformalBlock;
use crate::maps::Point;
use crate::partition::MarkovPartition;
use bowen_math::linalg::is_negligible;
use bowen_types::constants::NEGLIGIBLE;
use ndarray::Array2;
use tracing::trace;

#[derive(Debug, Clone, Copy, Default)]
pub struct TransitionMatrixBuilder;

impl TransitionMatrixBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Local contraction weight of the edge `block -> target`.
    ///
    /// `None` when the inverse is undefined or the weight is not a finite
    /// number (derivative vanishing at the preimage).
    pub fn edge_weight(&self, block: &ConformalBlock, target: Point) -> Option<f64> {
        let y = block.pull_back(target)?;
        let weight = 1.0 / block.derivative(y).norm();
        weight.is_finite().then_some(weight)
    }

    /// Square matrix of edge weights, same order as the partition's blocks.
    /// Failed edges are left at 0.
    pub fn build(&self, partition: &MarkovPartition) -> Array2<f64> {
        let n = partition.len();
        let samples = partition.sample_points();
        let mut t = Array2::zeros((n, n));
        let mut failed = 0usize;

        for (i, block) in partition.blocks().iter().enumerate() {
            for j in partition.successors(i) {
                match self.edge_weight(block, samples[j]) {
                    Some(w) => t[[i, j]] = w,
                    None => failed += 1,
                }
            }
        }

        if failed > 0 {
            trace!(n_blocks = n, failed, "transition entries zeroed");
        }
        t
    }

    /// True when the matrix carries no usable transition (all entries below 1e-15).
    pub fn is_degenerate(t: &Array2<f64>) -> bool {
        is_negligible(t, NEGLIGIBLE)
    }
}
