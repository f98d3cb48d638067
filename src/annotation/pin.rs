//! Pin annotations and the capability traits they satisfy.

use std::any::Any;
use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::core::Coordinate;
use crate::error::AnnotationError;

/// A map-displayable point of interest.
///
/// Anything shown as a pin on a map view implements this: it has a
/// display position and optional callout strings.
pub trait Annotation: Any + Debug {
    /// The coordinate at which the annotation is currently drawn.
    fn coordinate(&self) -> Coordinate;

    /// Primary callout string, if any.
    fn title(&self) -> Option<&str>;

    /// Secondary callout string, if any.
    fn subtitle(&self) -> Option<&str>;

    /// Runtime-type hook so annotation sets can be filtered by concrete
    /// type (see `MapViewExt::annotations_except`).
    fn as_any(&self) -> &dyn Any;
}

/// An annotation that can be absorbed into a cluster.
///
/// Clusterable annotations carry two positions: the immutable true
/// location, and the location at which they are currently displayed.
/// Clustering logic moves the display location onto the cluster it joins;
/// the true location never changes.
pub trait Clusterable: Annotation {
    /// The true geographic location, fixed at construction.
    fn actual_coordinate(&self) -> Coordinate;

    /// The location at which the annotation is currently displayed.
    fn cluster_coordinate(&self) -> Coordinate;

    /// Move the display location. Never validated; callers pass
    /// coordinates derived from already-valid annotations.
    fn set_cluster_coordinate(&mut self, coordinate: Coordinate);
}

/// A concrete clusterable pin.
///
/// Starts out displayed at its true location; external clustering logic
/// may later move the display location via
/// [`Clusterable::set_cluster_coordinate`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PinAnnotation {
    actual_coordinate: Coordinate,
    cluster_coordinate: Coordinate,
    title: Option<String>,
    subtitle: Option<String>,
}

impl PinAnnotation {
    /// Create a pin at `coordinate`, rejecting out-of-range coordinates.
    ///
    /// The cluster coordinate starts equal to the actual coordinate.
    pub fn new(coordinate: Coordinate) -> Result<Self, AnnotationError> {
        let coordinate = Coordinate::validated(coordinate.latitude, coordinate.longitude)?;
        Ok(Self {
            actual_coordinate: coordinate,
            cluster_coordinate: coordinate,
            title: None,
            subtitle: None,
        })
    }

    /// Set the primary callout string. The pin stores its own copy.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Set the secondary callout string. The pin stores its own copy.
    pub fn set_subtitle(&mut self, subtitle: impl Into<String>) {
        self.subtitle = Some(subtitle.into());
    }
}

impl Annotation for PinAnnotation {
    #[inline]
    fn coordinate(&self) -> Coordinate {
        self.cluster_coordinate
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Clusterable for PinAnnotation {
    #[inline]
    fn actual_coordinate(&self) -> Coordinate {
        self.actual_coordinate
    }

    #[inline]
    fn cluster_coordinate(&self) -> Coordinate {
        self.cluster_coordinate
    }

    #[inline]
    fn set_cluster_coordinate(&mut self, coordinate: Coordinate) {
        self.cluster_coordinate = coordinate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_actual_coordinate() {
        let c = Coordinate::new(37.0, -122.0);
        let pin = PinAnnotation::new(c).unwrap();

        assert_eq!(pin.actual_coordinate(), c);
        assert_eq!(pin.cluster_coordinate(), c);
        assert_eq!(pin.coordinate(), c);
        assert!(pin.title().is_none());
        assert!(pin.subtitle().is_none());
    }

    #[test]
    fn test_new_rejects_invalid_coordinate() {
        let err = PinAnnotation::new(Coordinate::new(120.0, 0.0)).unwrap_err();
        assert_eq!(
            err,
            AnnotationError::InvalidCoordinate {
                latitude: 120.0,
                longitude: 0.0
            }
        );
    }

    #[test]
    fn test_set_cluster_coordinate_leaves_actual_unchanged() {
        let c = Coordinate::new(37.0, -122.0);
        let moved = Coordinate::new(37.5, -121.5);
        let mut pin = PinAnnotation::new(c).unwrap();

        pin.set_cluster_coordinate(moved);

        assert_eq!(pin.cluster_coordinate(), moved);
        assert_eq!(pin.coordinate(), moved);
        assert_eq!(pin.actual_coordinate(), c);
    }

    #[test]
    fn test_title_has_value_semantics() {
        let mut pin = PinAnnotation::new(Coordinate::new(0.0, 0.0)).unwrap();
        let mut source = String::from("Coffee");
        pin.set_title(source.clone());
        source.push_str(" Roasters");

        assert_eq!(pin.title(), Some("Coffee"));
    }
}
