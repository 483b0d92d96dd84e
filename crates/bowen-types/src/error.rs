use thiserror::Error;

#[derive(Error, Debug)]
pub enum BowenError {
    #[error("Transition matrix is numerically zero at iteration {iteration} ({n_blocks} blocks)")]
    DegenerateMatrix { iteration: usize, n_blocks: usize },

    #[error("Solver diverged at iteration {iteration}: {message}")]
    SolverDiverged { iteration: usize, message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Transition graph shape mismatch: expected {expected}x{expected}, got {rows}x{cols}")]
    ShapeMismatch {
        expected: usize,
        rows: usize,
        cols: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Linear algebra error: {0}")]
    LinAlg(String),
}

impl BowenError {
    /// True for the one condition the solver pipeline cannot recover from.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, BowenError::DegenerateMatrix { .. })
    }
}

pub type BowenResult<T> = Result<T, BowenError>;
