//! Error kinds reported by the graph engine

use thiserror::Error;

/// Recoverable failures of graph operations. None of them leave the graph
/// partially modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("User {0} not found")]
    NotFound(String),

    #[error("No path exists between {from} and {to}")]
    NoPathExists { from: String, to: String },

    #[error("User limit of {0} reached")]
    CapacityExceeded(usize),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("User {0} already exists")]
    DuplicateName(String),
}

pub type GraphResult<T> = std::result::Result<T, GraphError>;
