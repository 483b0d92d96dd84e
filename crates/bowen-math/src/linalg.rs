//! Matrix utilities.
//!
//! Entrywise power, negligibility test, and direct eigenvalue moduli via a
//! real Schur decomposition.

use bowen_types::error::{BowenError, BowenResult};
use nalgebra::linalg::Schur;
use nalgebra::DMatrix;
use ndarray::{Array1, Array2};

/// Sweep cap for the Schur QR iteration.
const SCHUR_MAX_SWEEPS: usize = 10_000;

/// Raise every entry to `alpha` independently (not a matrix power).
///
/// Non-positive entries map to 0, so the sparsity pattern survives for any
/// `alpha`, including the `0^0 = 1` corner.
pub fn entrywise_power(t: &Array2<f64>, alpha: f64) -> Array2<f64> {
    t.mapv(|x| if x > 0.0 { x.powf(alpha) } else { 0.0 })
}

/// True when every entry has magnitude below `threshold`. Empty matrices are negligible.
pub fn is_negligible(m: &Array2<f64>, threshold: f64) -> bool {
    m.iter().all(|&x| x.abs() < threshold)
}

/// Euclidean norm.
pub fn norm_l2(v: &Array1<f64>) -> f64 {
    v.dot(v).sqrt()
}

/// Moduli of all eigenvalues of a square matrix.
///
/// Uses the real Schur form, so complex conjugate pairs are handled. Fails on
/// non-finite input or when the QR sweep does not converge.
pub fn eigenvalue_moduli(m: &Array2<f64>) -> BowenResult<Vec<f64>> {
    let (rows, cols) = m.dim();
    if rows != cols {
        return Err(BowenError::LinAlg(format!(
            "eigenvalues need a square matrix, got {rows}x{cols}"
        )));
    }
    if m.iter().any(|v| !v.is_finite()) {
        return Err(BowenError::LinAlg(
            "matrix contains non-finite entries".to_string(),
        ));
    }
    if rows == 0 {
        return Ok(Vec::new());
    }

    let dm = DMatrix::from_fn(rows, cols, |i, j| m[[i, j]]);
    let schur = Schur::try_new(dm, f64::EPSILON, SCHUR_MAX_SWEEPS).ok_or_else(|| {
        BowenError::LinAlg(format!("Schur decomposition did not converge ({rows}x{rows})"))
    })?;

    let moduli: Vec<f64> = schur
        .complex_eigenvalues()
        .iter()
        .map(|z| z.norm())
        .collect();
    if moduli.iter().any(|v| !v.is_finite()) {
        return Err(BowenError::LinAlg(
            "Schur decomposition produced non-finite eigenvalues".to_string(),
        ));
    }
    Ok(moduli)
}
