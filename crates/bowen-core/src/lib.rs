//! Markov partition refinement and Bowen-formula dimension solver.
//!
//! Stage 1: maps, blocks, partitions
//! Stage 2: transition matrix, Bowen equation, refinement loop

pub mod block;
pub mod equation;
pub mod maps;
pub mod partition;
pub mod solver;
pub mod systems;
pub mod transition;
