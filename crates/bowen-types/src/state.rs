// ─────────────────────────────────────────────────────────────────────
// Bowen Dimension Core — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which stage of the root-search fallback chain produced an alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RootMethod {
    /// Bracketing solve converged on a sign change.
    Brent,
    /// No sign change in the bracket; best point of a linear scan.
    GridSearch,
    /// Brent failed internally; manual bisection midpoint.
    Bisection,
}

impl fmt::Display for RootMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RootMethod::Brent => "brent",
            RootMethod::GridSearch => "grid-search",
            RootMethod::Bisection => "bisection",
        };
        f.write_str(name)
    }
}

/// Solution of the Bowen equation, tagged with how much to trust it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RootEstimate {
    /// A genuine root located to the configured tolerance.
    Found(f64),
    /// Minimiser of |objective| on a grid; not a root.
    Approximated(f64),
    /// Midpoint of a bisection bracket after the primary solver failed.
    Bisected(f64),
}

impl RootEstimate {
    pub fn alpha(&self) -> f64 {
        match *self {
            RootEstimate::Found(a) | RootEstimate::Approximated(a) | RootEstimate::Bisected(a) => a,
        }
    }

    pub fn method(&self) -> RootMethod {
        match self {
            RootEstimate::Found(_) => RootMethod::Brent,
            RootEstimate::Approximated(_) => RootMethod::GridSearch,
            RootEstimate::Bisected(_) => RootMethod::Bisection,
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, RootEstimate::Found(_))
    }
}

/// How the refinement loop terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveStatus {
    /// Alpha and the partition diameter both settled below tolerance.
    Converged,
    /// Adaptive refinement would have exceeded the block budget.
    SizeLimitStopped,
    /// `max_iter` passes ran without convergence; alpha is a best-effort snapshot.
    MaxIterStopped,
}

impl SolveStatus {
    pub fn is_converged(&self) -> bool {
        matches!(self, SolveStatus::Converged)
    }
}

/// One entry of the solver's append-only history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterationRecord {
    pub iteration: usize,
    pub n_blocks: usize,
    pub alpha: f64,
    pub max_diameter: f64,
    pub method: RootMethod,
}
