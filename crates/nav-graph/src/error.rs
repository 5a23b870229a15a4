//! Graph-subsystem error type.

use thiserror::Error;

use nav_core::{NodeId, Vec2};

/// Errors produced by `nav-graph`.
///
/// Construction and table-loading variants are fatal configuration errors;
/// [`NoPath`](GraphError::NoPath) is the one per-request, recoverable case.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("no path from {from} to {to}")]
    NoPath { from: NodeId, to: NodeId },

    #[error("landmark at {0} lies outside every region")]
    LandmarkOutsideRegions(Vec2),

    #[error("lookup table holds {got} values, expected {expected}")]
    TableSize { expected: usize, got: usize },

    #[error("lookup table line {line}: invalid value {value:?}")]
    TableValue { line: usize, value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
