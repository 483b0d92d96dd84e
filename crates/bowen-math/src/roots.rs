// ─────────────────────────────────────────────────────────────────────
// Bowen Dimension Core — Scalar Root Finding
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! One-dimensional root finding on a bracket.
//!
//! - `brent_root`: inverse quadratic interpolation / secant / bisection hybrid
//!   (Brent 1973). Fails loudly on a missing sign change, non-finite objective
//!   values, or an exhausted iteration budget.
//! - `grid_minimize`: linear scan for the smallest |f|, used when no sign change exists.
//! - `bisect`: plain sign-test bisection, the last-resort fallback.

use bowen_types::error::{BowenError, BowenResult};

fn diverged(iteration: usize, message: String) -> BowenError {
    BowenError::SolverDiverged { iteration, message }
}

/// Locate a root of `f` in `[a, b]` to absolute tolerance `xtol`.
///
/// Requires `f(a)` and `f(b)` of opposite sign (or one of them zero).
pub fn brent_root<F>(mut f: F, a: f64, b: f64, xtol: f64, max_iter: usize) -> BowenResult<f64>
where
    F: FnMut(f64) -> f64,
{
    let mut a = a;
    let mut b = b;
    let mut fa = f(a);
    let mut fb = f(b);

    if !fa.is_finite() || !fb.is_finite() {
        return Err(diverged(
            0,
            format!("non-finite objective at bracket ends: f({a}) = {fa}, f({b}) = {fb}"),
        ));
    }
    if fa == 0.0 {
        return Ok(a);
    }
    if fb == 0.0 {
        return Ok(b);
    }
    if fa.signum() == fb.signum() {
        return Err(diverged(
            0,
            format!("no sign change on [{a}, {b}]: f = ({fa}, {fb})"),
        ));
    }

    let mut c = b;
    let mut fc = fb;
    let mut d = b - a;
    let mut e = d;

    for iter in 0..max_iter {
        // Keep the root between b and c.
        if fb.signum() == fc.signum() {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        // b is the best estimate so far.
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol1 = 2.0 * f64::EPSILON * b.abs() + 0.5 * xtol;
        let xm = 0.5 * (c - b);
        if xm.abs() <= tol1 || fb == 0.0 {
            return Ok(b);
        }

        if e.abs() >= tol1 && fa.abs() > fb.abs() {
            let s = fb / fa;
            let (mut p, mut q) = if a == c {
                // Secant step.
                (2.0 * xm * s, 1.0 - s)
            } else {
                // Inverse quadratic interpolation.
                let q = fa / fc;
                let r = fb / fc;
                (
                    s * (2.0 * xm * q * (q - r) - (b - a) * (r - 1.0)),
                    (q - 1.0) * (r - 1.0) * (s - 1.0),
                )
            };
            if p > 0.0 {
                q = -q;
            }
            p = p.abs();

            let min1 = 3.0 * xm * q - (tol1 * q).abs();
            let min2 = (e * q).abs();
            if 2.0 * p < min1.min(min2) {
                e = d;
                d = p / q;
            } else {
                d = xm;
                e = d;
            }
        } else {
            d = xm;
            e = d;
        }

        a = b;
        fa = fb;
        if d.abs() > tol1 {
            b += d;
        } else {
            b += tol1.copysign(xm);
        }
        fb = f(b);
        if !fb.is_finite() {
            return Err(diverged(iter + 1, format!("non-finite objective f({b}) = {fb}")));
        }
    }

    Err(diverged(
        max_iter,
        format!("no convergence within {max_iter} iterations, last estimate {b}"),
    ))
}

/// Evaluate `f` at `n` evenly spaced points of `[lo, hi]` and return the point
/// with the smallest |f| together with that |f|.
///
/// Non-finite samples are skipped; if every sample is non-finite, `(lo, inf)` is returned.
pub fn grid_minimize<F>(mut f: F, lo: f64, hi: f64, n: usize) -> (f64, f64)
where
    F: FnMut(f64) -> f64,
{
    let n = n.max(2);
    let step = (hi - lo) / (n - 1) as f64;
    let mut best_x = lo;
    let mut best_abs = f64::INFINITY;

    for i in 0..n {
        let x = if i == n - 1 { hi } else { lo + step * i as f64 };
        let fx = f(x).abs();
        if fx.is_finite() && fx < best_abs {
            best_abs = fx;
            best_x = x;
        }
    }

    (best_x, best_abs)
}

/// Bisection on `[lo, hi]` driven by the sign of `f`.
///
/// Stops after `max_iter` halvings or when the bracket is narrower than `tol`,
/// returning the midpoint. Never fails; a bracket without a sign change
/// collapses onto one of its ends.
pub fn bisect<F>(mut f: F, lo: f64, hi: f64, tol: f64, max_iter: usize) -> f64
where
    F: FnMut(f64) -> f64,
{
    let mut lo = lo;
    let mut hi = hi;
    let mut f_lo = f(lo);

    for _ in 0..max_iter {
        if (hi - lo).abs() < tol {
            break;
        }
        let mid = 0.5 * (lo + hi);
        let f_mid = f(mid);
        if f_lo * f_mid <= 0.0 {
            hi = mid;
        } else {
            lo = mid;
            f_lo = f_mid;
        }
    }

    0.5 * (lo + hi)
}
