// ─────────────────────────────────────────────────────────────────────
// Bowen Dimension Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Matrix entries and iterate norms below this are treated as zero.
pub const NEGLIGIBLE: f64 = 1e-15;

/// Hard lower clamp on the Bowen exponent.
pub const ALPHA_FLOOR: f64 = 0.001;

/// Hard upper clamp on the Bowen exponent.
pub const ALPHA_CEILING: f64 = 10.0;

/// Matrices up to this size go through the direct eigen solve.
pub const DIRECT_EIGEN_MAX_SIZE: usize = 100;

/// Convergence requires `max_diameter < tolerance * DIAMETER_TOLERANCE_FACTOR`.
pub const DIAMETER_TOLERANCE_FACTOR: f64 = 10.0;

/// Adaptive refinement stops once the block count exceeds `min_blocks * SIZE_LIMIT_FACTOR`.
pub const SIZE_LIMIT_FACTOR: usize = 10;
