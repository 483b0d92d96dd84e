//! Numerical primitives for the Bowen dimension solver.

pub mod linalg;
pub mod roots;
pub mod spectral;
