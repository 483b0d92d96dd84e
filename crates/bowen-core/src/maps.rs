// ─────────────────────────────────────────────────────────────────────
// Bowen Dimension Core — Conformal Maps
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Conformal maps of the complex plane.
//!
//! A map exposes its value, its complex derivative (local scaling factor) and
//! an inverse. The inverse may be undefined at a point; it then returns `None`
//! and the caller skips that point instead of failing.

use num_complex::Complex64;
use std::f64::consts::PI;
use std::fmt;

/// Point of the ambient space.
pub type Point = Complex64;

/// Inverses closer than this to a pole or critical value are reported as undefined.
const SINGULAR_EPS: f64 = 1e-300;

pub trait ConformalMap: Send + Sync {
    fn apply(&self, z: Point) -> Point;

    fn derivative(&self, z: Point) -> Point;

    /// Preimage of `w`, or `None` where the inverse is undefined.
    fn inverse(&self, w: Point) -> Option<Point>;
}

/// z ↦ scale·z + shift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineMap {
    pub scale: Point,
    pub shift: Point,
}

impl AffineMap {
    pub fn new(scale: Point, shift: Point) -> Self {
        Self { scale, shift }
    }

    /// Expanding map whose inverse is the contraction z ↦ ratio·z + offset.
    pub fn expanding_inverse_of(ratio: f64, offset: f64) -> Self {
        let scale = Point::new(1.0 / ratio, 0.0);
        Self {
            scale,
            shift: Point::new(-offset / ratio, 0.0),
        }
    }
}

impl ConformalMap for AffineMap {
    fn apply(&self, z: Point) -> Point {
        self.scale * z + self.shift
    }

    fn derivative(&self, _z: Point) -> Point {
        self.scale
    }

    fn inverse(&self, w: Point) -> Option<Point> {
        if self.scale.norm() < SINGULAR_EPS {
            return None;
        }
        Some((w - self.shift) / self.scale)
    }
}

/// Möbius transformation z ↦ (a·z + b) / (c·z + d).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MobiusMap {
    pub a: Point,
    pub b: Point,
    pub c: Point,
    pub d: Point,
}

impl MobiusMap {
    /// Returns `None` when `ad - bc = 0` (not invertible).
    pub fn new(a: Point, b: Point, c: Point, d: Point) -> Option<Self> {
        if (a * d - b * c).norm() < SINGULAR_EPS {
            return None;
        }
        Some(Self { a, b, c, d })
    }

    pub fn determinant(&self) -> Point {
        self.a * self.d - self.b * self.c
    }

    /// The inverse transformation as a Möbius map.
    pub fn inverted(&self) -> Self {
        Self {
            a: self.d,
            b: -self.b,
            c: -self.c,
            d: self.a,
        }
    }
}

impl ConformalMap for MobiusMap {
    fn apply(&self, z: Point) -> Point {
        (self.a * z + self.b) / (self.c * z + self.d)
    }

    fn derivative(&self, z: Point) -> Point {
        let den = self.c * z + self.d;
        self.determinant() / (den * den)
    }

    fn inverse(&self, w: Point) -> Option<Point> {
        let den = -self.c * w + self.a;
        if den.norm() < SINGULAR_EPS {
            return None;
        }
        Some((self.d * w - self.b) / den)
    }
}

/// z ↦ z^degree with one fixed inverse branch.
///
/// Branch `k` maps w to |w|^(1/d)·exp(i(arg w + 2πk)/d). The inverse is
/// undefined at the critical value 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerBranch {
    degree: u32,
    branch: u32,
}

impl PowerBranch {
    pub fn new(degree: u32, branch: u32) -> Self {
        let degree = degree.max(1);
        Self {
            degree,
            branch: branch % degree,
        }
    }

    pub fn degree(&self) -> u32 {
        self.degree
    }

    pub fn branch(&self) -> u32 {
        self.branch
    }
}

impl ConformalMap for PowerBranch {
    fn apply(&self, z: Point) -> Point {
        z.powu(self.degree)
    }

    fn derivative(&self, z: Point) -> Point {
        z.powu(self.degree.saturating_sub(1)) * self.degree as f64
    }

    fn inverse(&self, w: Point) -> Option<Point> {
        let (r, theta) = w.to_polar();
        if r < SINGULAR_EPS {
            return None;
        }
        let d = self.degree as f64;
        let angle = (theta + 2.0 * PI * self.branch as f64) / d;
        Some(Point::from_polar(r.powf(1.0 / d), angle))
    }
}

/// Map assembled from three caller-supplied closures.
pub struct FnMap<F, D, I> {
    apply: F,
    derivative: D,
    inverse: I,
}

impl<F, D, I> FnMap<F, D, I>
where
    F: Fn(Point) -> Point + Send + Sync,
    D: Fn(Point) -> Point + Send + Sync,
    I: Fn(Point) -> Option<Point> + Send + Sync,
{
    pub fn new(apply: F, derivative: D, inverse: I) -> Self {
        Self {
            apply,
            derivative,
            inverse,
        }
    }
}

impl<F, D, I> ConformalMap for FnMap<F, D, I>
where
    F: Fn(Point) -> Point + Send + Sync,
    D: Fn(Point) -> Point + Send + Sync,
    I: Fn(Point) -> Option<Point> + Send + Sync,
{
    fn apply(&self, z: Point) -> Point {
        (self.apply)(z)
    }

    fn derivative(&self, z: Point) -> Point {
        (self.derivative)(z)
    }

    fn inverse(&self, w: Point) -> Option<Point> {
        (self.inverse)(w)
    }
}

impl<F, D, I> fmt::Debug for FnMap<F, D, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnMap").finish_non_exhaustive()
    }
}
