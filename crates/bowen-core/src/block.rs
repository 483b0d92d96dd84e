// ─────────────────────────────────────────────────────────────────────
// Bowen Dimension Core — Conformal Block
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! One cell of a Markov partition.

use crate::maps::{ConformalMap, Point};
use std::fmt;
use std::sync::Arc;

/// A partition cell: a shared conformal map plus a representative point.
///
/// `parent_index` and `target_index` are lookup keys into the block list of
/// the partition this block was refined from. They are never valid against
/// any other generation.
#[derive(Clone)]
pub struct ConformalBlock {
    map: Arc<dyn ConformalMap>,
    sample_point: Point,
    parent_index: Option<usize>,
    target_index: Option<usize>,
}

impl ConformalBlock {
    /// Root block supplied by the caller (no lineage).
    pub fn new(map: Arc<dyn ConformalMap>, sample_point: Point) -> Self {
        Self {
            map,
            sample_point,
            parent_index: None,
            target_index: None,
        }
    }

    /// Block produced by refinement; shares `self`'s map.
    pub(crate) fn child(&self, sample_point: Point, parent: usize, target: usize) -> Self {
        Self {
            map: Arc::clone(&self.map),
            sample_point,
            parent_index: Some(parent),
            target_index: Some(target),
        }
    }

    pub fn sample_point(&self) -> Point {
        self.sample_point
    }

    pub fn parent_index(&self) -> Option<usize> {
        self.parent_index
    }

    pub fn target_index(&self) -> Option<usize> {
        self.target_index
    }

    pub fn map(&self) -> &Arc<dyn ConformalMap> {
        &self.map
    }

    pub fn apply(&self, z: Point) -> Point {
        self.map.apply(z)
    }

    pub fn derivative(&self, z: Point) -> Point {
        self.map.derivative(z)
    }

    /// Solve `map(y) = target` for `y`. `None` if the inverse is undefined or not finite.
    pub fn pull_back(&self, target: Point) -> Option<Point> {
        self.map
            .inverse(target)
            .filter(|y| y.re.is_finite() && y.im.is_finite())
    }

    /// True when both blocks hold the same map allocation.
    pub fn shares_map_with(&self, other: &ConformalBlock) -> bool {
        std::ptr::eq(
            Arc::as_ptr(&self.map) as *const (),
            Arc::as_ptr(&other.map) as *const (),
        )
    }
}

impl fmt::Debug for ConformalBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConformalBlock")
            .field("sample_point", &self.sample_point)
            .field("parent_index", &self.parent_index)
            .field("target_index", &self.target_index)
            .finish_non_exhaustive()
    }
}
