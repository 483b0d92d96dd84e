// ─────────────────────────────────────────────────────────────────────
// Bowen Dimension Core — Markov Partition
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Markov partitions and their refinement.
//!
//! Refinement pulls every target sample point back through every block that
//! transitions into it:
//!   y = block_i.inverse(block_j.sample_point)   for each edge i -> j
//! and chains the new blocks so that a -> b iff a.target == b.parent.
//! Paths through the old transition graph become paths through the new one.

use crate::block::ConformalBlock;
use crate::maps::Point;
use bowen_types::error::{BowenError, BowenResult};
use ndarray::Array2;
use std::collections::HashMap;
use tracing::debug;

/// An immutable, ordered set of blocks with a 0/1 transition relation.
///
/// Block order is the row/column order of every matrix built from the partition.
#[derive(Debug, Clone)]
pub struct MarkovPartition {
    blocks: Vec<ConformalBlock>,
    transition_graph: Array2<bool>,
    sample_points: Vec<Point>,
}

impl MarkovPartition {
    /// Build from blocks and an optional transition graph.
    ///
    /// A missing graph means every block transitions to every block.
    pub fn new(
        blocks: Vec<ConformalBlock>,
        transition_graph: Option<Array2<bool>>,
    ) -> BowenResult<Self> {
        let n = blocks.len();
        let graph = match transition_graph {
            Some(g) => {
                let (rows, cols) = g.dim();
                if rows != n || cols != n {
                    return Err(BowenError::ShapeMismatch {
                        expected: n,
                        rows,
                        cols,
                    });
                }
                g
            }
            None => Array2::from_elem((n, n), true),
        };
        Ok(Self::from_parts(blocks, graph))
    }

    /// Every block transitions to every block.
    pub fn fully_connected(blocks: Vec<ConformalBlock>) -> Self {
        let n = blocks.len();
        Self::from_parts(blocks, Array2::from_elem((n, n), true))
    }

    /// Build from a 0/1 integer matrix; any non-zero entry is an edge.
    pub fn from_adjacency(blocks: Vec<ConformalBlock>, adjacency: &Array2<u8>) -> BowenResult<Self> {
        Self::new(blocks, Some(adjacency.mapv(|v| v != 0)))
    }

    fn from_parts(blocks: Vec<ConformalBlock>, transition_graph: Array2<bool>) -> Self {
        let sample_points = blocks.iter().map(|b| b.sample_point()).collect();
        Self {
            blocks,
            transition_graph,
            sample_points,
        }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn blocks(&self) -> &[ConformalBlock] {
        &self.blocks
    }

    pub fn transition_graph(&self) -> &Array2<bool> {
        &self.transition_graph
    }

    pub fn sample_points(&self) -> &[Point] {
        &self.sample_points
    }

    /// Number of edges in the transition graph.
    pub fn n_transitions(&self) -> usize {
        self.transition_graph.iter().filter(|&&e| e).count()
    }

    /// Indices `j` with an edge `i -> j`.
    pub fn successors(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        self.transition_graph
            .row(i)
            .into_iter()
            .enumerate()
            .filter_map(|(j, &e)| if e { Some(j) } else { None })
    }

    /// Strictly finer partition.
    ///
    /// Never fails: edges whose inverse solve fails produce no block. If every
    /// edge fails the result is empty, which the solver rejects as degenerate.
    pub fn refine(&self) -> MarkovPartition {
        let (blocks, skipped) = self.children();
        self.chain(blocks, skipped)
    }

    /// `refine()` under a block budget.
    ///
    /// Returns `None` when the refinement would hold more than `max_blocks`
    /// blocks. The check runs before the transition graph is allocated.
    pub fn refine_within(&self, max_blocks: usize) -> Option<MarkovPartition> {
        let (blocks, skipped) = self.children();
        if blocks.len() > max_blocks {
            debug!(
                from_blocks = self.len(),
                to_blocks = blocks.len(),
                max_blocks,
                "refinement exceeds block budget"
            );
            return None;
        }
        Some(self.chain(blocks, skipped))
    }

    /// One child per edge whose inverse succeeds, plus the number of failed edges.
    fn children(&self) -> (Vec<ConformalBlock>, usize) {
        let mut blocks = Vec::with_capacity(self.n_transitions());
        let mut skipped = 0usize;

        for (i, block) in self.blocks.iter().enumerate() {
            for j in self.successors(i) {
                match block.pull_back(self.sample_points[j]) {
                    Some(y) => blocks.push(block.child(y, i, j)),
                    None => skipped += 1,
                }
            }
        }
        (blocks, skipped)
    }

    /// Chain children: a -> b iff a.target == b.parent.
    fn chain(&self, blocks: Vec<ConformalBlock>, skipped: usize) -> MarkovPartition {
        let mut by_parent: Vec<Vec<usize>> = vec![Vec::new(); self.len()];
        for (idx, b) in blocks.iter().enumerate() {
            if let Some(p) = b.parent_index() {
                by_parent[p].push(idx);
            }
        }

        let n = blocks.len();
        let mut graph = Array2::from_elem((n, n), false);
        for (a, block) in blocks.iter().enumerate() {
            if let Some(t) = block.target_index() {
                for &b in &by_parent[t] {
                    graph[[a, b]] = true;
                }
            }
        }

        debug!(
            from_blocks = self.len(),
            to_blocks = n,
            skipped,
            "refined Markov partition"
        );
        Self::from_parts(blocks, graph)
    }

    /// Approximate per-block diameters.
    ///
    /// Blocks sharing a `parent_index` (root blocks all share "no parent") get
    /// the largest pairwise distance among the group's sample points. A block
    /// with no siblings gets `1 / sqrt(n_blocks)`. Neither is a true geometric
    /// diameter of the cell; the singleton value in particular carries no
    /// geometric information.
    pub fn diameters(&self) -> Vec<f64> {
        let n = self.len();
        if n == 0 {
            return Vec::new();
        }
        let fallback = 1.0 / (n as f64).sqrt();

        let mut groups: HashMap<Option<usize>, Vec<usize>> = HashMap::new();
        for (idx, b) in self.blocks.iter().enumerate() {
            groups.entry(b.parent_index()).or_default().push(idx);
        }

        let mut diameters = vec![fallback; n];
        for members in groups.values() {
            if members.len() < 2 {
                continue;
            }
            let mut spread = 0.0_f64;
            for (k, &a) in members.iter().enumerate() {
                for &b in &members[k + 1..] {
                    spread = spread.max((self.sample_points[a] - self.sample_points[b]).norm());
                }
            }
            for &m in members {
                diameters[m] = spread;
            }
        }
        diameters
    }

    /// Largest entry of `diameters()`, 0 for an empty partition.
    pub fn max_diameter(&self) -> f64 {
        self.diameters().into_iter().fold(0.0_f64, f64::max)
    }
}
