// ─────────────────────────────────────────────────────────────────────
// Bowen Dimension Core — Standard Systems
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Ready-made initial partitions for standard expanding systems.

use crate::block::ConformalBlock;
use crate::maps::{AffineMap, MobiusMap, Point, PowerBranch};
use crate::partition::MarkovPartition;
use bowen_types::error::{BowenError, BowenResult};
use std::f64::consts::PI;
use std::sync::Arc;

/// Closed-form dimension of N similitudes with common ratio r (open set condition).
pub fn similarity_dimension(n: usize, ratio: f64) -> f64 {
    (n as f64).ln() / (1.0 / ratio).ln()
}

/// N expanding affine maps of [0, 1] whose inverse branches are the contractions
///   h_k(z) = ratio·z + k·(1 - ratio)/(N - 1),   k = 0..N-1
/// with the fixed points of h_k as sample points. Fully connected.
///
/// `cantor_partition(2, 1/3)` is the middle-thirds Cantor set.
pub fn cantor_partition(n: usize, ratio: f64) -> BowenResult<MarkovPartition> {
    if n == 0 {
        return Err(BowenError::ConfigError(
            "a Cantor system needs at least one map".to_string(),
        ));
    }
    if !(ratio > 0.0 && ratio < 1.0) {
        return Err(BowenError::ConfigError(format!(
            "contraction ratio must lie in (0, 1), got {ratio}"
        )));
    }

    let gap = if n > 1 {
        (1.0 - ratio) / (n - 1) as f64
    } else {
        0.0
    };
    let blocks = (0..n)
        .map(|k| {
            let offset = k as f64 * gap;
            let fixed_point = offset / (1.0 - ratio);
            ConformalBlock::new(
                Arc::new(AffineMap::expanding_inverse_of(ratio, offset)),
                Point::new(fixed_point, 0.0),
            )
        })
        .collect();
    Ok(MarkovPartition::fully_connected(blocks))
}

/// z ↦ z^degree on the unit circle, one block per inverse branch.
///
/// Sample points are the `degree`-th roots of unity. The Julia set is the unit
/// circle, so the dimension is 1.
pub fn power_map_partition(degree: u32) -> BowenResult<MarkovPartition> {
    if degree < 2 {
        return Err(BowenError::ConfigError(format!(
            "power map needs degree >= 2 to be expanding, got {degree}"
        )));
    }
    let blocks = (0..degree)
        .map(|k| {
            let angle = 2.0 * PI * k as f64 / degree as f64;
            ConformalBlock::new(
                Arc::new(PowerBranch::new(degree, k)),
                Point::from_polar(1.0, angle),
            )
        })
        .collect();
    Ok(MarkovPartition::fully_connected(blocks))
}

/// Partition from Möbius contractions: each block carries the inverse
/// (expanding) transformation and the contraction's attracting fixed point as
/// sample point. Fully connected.
pub fn mobius_partition(contractions: &[MobiusMap]) -> BowenResult<MarkovPartition> {
    let blocks = contractions
        .iter()
        .map(|m| {
            let fixed = attracting_fixed_point(m).ok_or_else(|| {
                BowenError::ConfigError(format!("Möbius map {m:?} has no attracting fixed point"))
            })?;
            Ok(ConformalBlock::new(Arc::new(m.inverted()), fixed))
        })
        .collect::<BowenResult<Vec<_>>>()?;
    Ok(MarkovPartition::fully_connected(blocks))
}

/// Finite fixed point z of `m` with |m'(z)| < 1.
fn attracting_fixed_point(m: &MobiusMap) -> Option<Point> {
    use crate::maps::ConformalMap;

    let candidates = if m.c.norm() < 1e-14 {
        // Affine: a z + b = d z.
        let slope = m.d - m.a;
        if slope.norm() < 1e-14 {
            return None;
        }
        vec![m.b / slope]
    } else {
        // c z^2 + (d - a) z - b = 0.
        let qa = m.c;
        let qb = m.d - m.a;
        let qc = -m.b;
        let disc = (qb * qb - qa * qc * 4.0).sqrt();
        vec![(-qb + disc) / (qa * 2.0), (-qb - disc) / (qa * 2.0)]
    };

    candidates
        .into_iter()
        .filter(|z| z.re.is_finite() && z.im.is_finite())
        .find(|&z| m.derivative(z).norm() < 1.0)
}
