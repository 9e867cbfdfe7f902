use thiserror::Error;

/// Top-level error type for the sketch geometry core.
#[derive(Debug, Error)]
pub enum SketchGeomError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Construction domain errors. These point at a programming error upstream
/// and are never repaired silently.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("circle radius must not be negative, got {0}")]
    NegativeRadius(f64),

    #[error("rect {dimension} must not be negative, got {value}")]
    NegativeDimension { dimension: &'static str, value: f64 },

    #[error("arc length {0} exceeds 360 degrees")]
    ArcTooLong(f64),

    #[error("arc length must not be negative, got {0}")]
    NegativeArcLength(f64),

    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Errors raised while running a geometric operation.
#[derive(Debug, Error)]
pub enum OperationError {
    /// A result that must exist by construction was not found.
    #[error("invariant violated: {0}")]
    InvariantViolated(String),
}

/// Convenience type alias for results using [`SketchGeomError`].
pub type Result<T> = std::result::Result<T, SketchGeomError>;
