use std::path::PathBuf;

use thiserror::Error;

use crate::geometry::GeometryKind;
use crate::glacier::GlacierId;

pub type Result<T> = std::result::Result<T, Error>;

/// crate specific Error enum
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    #[error("Expected exactly one outline polygon for glacier {id}, found {found}")]
    Grouping { id: GlacierId, found: usize },
    #[error("The direction defining points of the cross-section coincide or are not finite")]
    InvalidSegment,
    #[error("The intersection of the extended line and the outline is a {0}, expected a line")]
    UnsupportedIntersection(GeometryKind),
    #[error("No intersection candidate to choose from")]
    NoCandidates,
    #[error("A line needs at least 2 points, got {0}")]
    TooFewPoints(usize),
    #[error("The outline polygon is degenerate")]
    DegeneratePolygon,
    #[error("Extrapolation ratio must be finite and larger than 1, got {0}")]
    InvalidRatio(f64),
    #[error("EPSG code {0} is not a known coordinate reference system")]
    UnknownCrs(u16),
    #[error("Invalid vector layer {path:?}: {reason}")]
    InvalidLayer { path: PathBuf, reason: String },
    #[error("Feature {index} has no usable {field:?} property")]
    MissingProperty { index: usize, field: String },
    #[error("Feature {index} has geometry type {found}, expected {expected}")]
    UnsupportedGeometry {
        index: usize,
        found: String,
        expected: &'static str,
    },
}
