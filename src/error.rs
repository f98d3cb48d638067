//! Error types for annotation construction.

use thiserror::Error;

/// Errors raised when building annotations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnnotationError {
    /// Latitude or longitude outside the valid geographic range.
    #[error("invalid coordinate: latitude {latitude}, longitude {longitude} (expected latitude in [-90, 90], longitude in [-180, 180])")]
    InvalidCoordinate {
        /// The rejected latitude in degrees.
        latitude: f64,
        /// The rejected longitude in degrees.
        longitude: f64,
    },
}
