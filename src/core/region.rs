//! Map regions: a center coordinate plus a latitude/longitude span.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::coord::{Coordinate, CoordinateSpan};

/// A rectangular map region defined by its center and extent in degrees.
///
/// This is the unit a map view displays: everything within
/// `center ± span/2` on both axes is on screen. Bounds tests are
/// inclusive and do not wrap across the ±180° antimeridian.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Region {
    /// Center of the region.
    pub center: Coordinate,
    /// Extent of the region in degrees.
    pub span: CoordinateSpan,
}

impl Region {
    /// Create a new region from center and span.
    #[inline]
    pub const fn new(center: Coordinate, span: CoordinateSpan) -> Self {
        Self { center, span }
    }

    /// Southernmost latitude of the region.
    #[inline]
    pub fn min_latitude(&self) -> f64 {
        self.center.latitude - self.span.latitude_delta / 2.0
    }

    /// Northernmost latitude of the region.
    #[inline]
    pub fn max_latitude(&self) -> f64 {
        self.center.latitude + self.span.latitude_delta / 2.0
    }

    /// Westernmost longitude of the region.
    #[inline]
    pub fn min_longitude(&self) -> f64 {
        self.center.longitude - self.span.longitude_delta / 2.0
    }

    /// Easternmost longitude of the region.
    #[inline]
    pub fn max_longitude(&self) -> f64 {
        self.center.longitude + self.span.longitude_delta / 2.0
    }

    /// Check whether a coordinate lies inside the region (inclusive).
    #[inline]
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.latitude >= self.min_latitude()
            && coordinate.latitude <= self.max_latitude()
            && coordinate.longitude >= self.min_longitude()
            && coordinate.longitude <= self.max_longitude()
    }

    /// Minimal region containing every coordinate in `coordinates`,
    /// padded by the multiplicative factor `padding` and floored at
    /// `min_span` degrees on both axes.
    ///
    /// Returns `None` when `coordinates` is empty.
    pub fn fitting(coordinates: &[Coordinate], padding: f64, min_span: f64) -> Option<Self> {
        let first = coordinates.first()?;

        let mut min_lat = first.latitude;
        let mut max_lat = first.latitude;
        let mut min_lon = first.longitude;
        let mut max_lon = first.longitude;
        for c in &coordinates[1..] {
            min_lat = min_lat.min(c.latitude);
            max_lat = max_lat.max(c.latitude);
            min_lon = min_lon.min(c.longitude);
            max_lon = max_lon.max(c.longitude);
        }

        let center = Coordinate::new((min_lat + max_lat) / 2.0, (min_lon + max_lon) / 2.0);
        let span = CoordinateSpan::new(
            ((max_lat - min_lat) * padding).max(min_span),
            ((max_lon - min_lon) * padding).max(min_span),
        );
        Some(Self::new(center, span))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "center ({:.6}, {:.6}) span ({:.6}, {:.6})",
            self.center.latitude,
            self.center.longitude,
            self.span.latitude_delta,
            self.span.longitude_delta
        )
    }
}
