//! Planner error type.

use thiserror::Error;

use nav_core::{RegionId, Vec2};
use nav_graph::GraphError;

use crate::planner::GraphKind;

/// Errors produced by `nav-plan`.
///
/// Builder-time variants are fatal configuration errors; the request-time
/// variants (`OutsideRegions`, `EmptyRegion`, and `Graph(NoPath)`) are
/// local failures the caller reports and moves on from.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("point {0} lies outside every region")]
    OutsideRegions(Vec2),

    #[error("{0} contains no navigable nodes")]
    EmptyRegion(RegionId),

    #[error("no {0} graph was configured")]
    GraphNotConfigured(GraphKind),

    #[error("no lookup table loaded for the {0} graph")]
    TableNotLoaded(GraphKind),

    #[error("landmark list is empty")]
    NoLandmarks,

    #[error("no graph source configured: supply a grid config or landmarks")]
    NoGraphSource,

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type PlanResult<T> = Result<T, PlanError>;
