//! Geographic and screen-space value types.

use serde::{Deserialize, Serialize};

use crate::error::AnnotationError;

/// A geographic coordinate in degrees.
///
/// Latitude is positive north, longitude positive east. All map math in
/// this crate works in `f64`; degree-scale precision over the whole globe
/// exceeds what `f32` can represent.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, nominally in [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees, nominally in [-180, 180].
    pub longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate without range checking.
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Create a coordinate, rejecting out-of-range values.
    pub fn validated(latitude: f64, longitude: f64) -> Result<Self, AnnotationError> {
        let coordinate = Self::new(latitude, longitude);
        if coordinate.is_valid() {
            Ok(coordinate)
        } else {
            Err(AnnotationError::InvalidCoordinate {
                latitude,
                longitude,
            })
        }
    }

    /// Check that latitude and longitude fall in their valid ranges.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// The extent of a map region in degrees of latitude and longitude.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct CoordinateSpan {
    /// North-south extent in degrees.
    pub latitude_delta: f64,
    /// East-west extent in degrees.
    pub longitude_delta: f64,
}

impl CoordinateSpan {
    /// Create a new span.
    #[inline]
    pub const fn new(latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            latitude_delta,
            longitude_delta,
        }
    }
}

/// A position in screen points.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    /// Horizontal position in points.
    pub x: f64,
    /// Vertical position in points (down-positive).
    pub y: f64,
}

impl ScreenPoint {
    /// Create a new screen point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point, in points.
    #[inline]
    pub fn distance(&self, other: &ScreenPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// The size of a map view's drawable area in screen points.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenSize {
    /// Width in points.
    pub width: f64,
    /// Height in points.
    pub height: f64,
}

impl ScreenSize {
    /// Create a new screen size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
