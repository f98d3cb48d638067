//! Geometry operations available on any [`MapView`].

use std::any::Any;

use crate::annotation::SharedAnnotation;
use crate::core::mercator;
use crate::core::{Coordinate, Region};

use super::view::MapView;

/// Geometry helpers for map views.
///
/// Blanket-implemented for every [`MapView`], so a real toolkit-backed
/// view gets these for free once it implements the five-method contract.
pub trait MapViewExt: MapView {
    /// The view's annotations whose concrete type is not `T`, in their
    /// original order. Non-destructive; returns cloned handles.
    fn annotations_except<T: Any>(&self) -> Vec<SharedAnnotation> {
        self.annotations()
            .iter()
            .filter(|a| !a.borrow().as_any().is::<T>())
            .cloned()
            .collect()
    }

    /// Move the view to the smallest padded region containing every
    /// annotation's display coordinate.
    ///
    /// Padding and the minimum span come from the view's config. An
    /// empty slice leaves the region untouched.
    fn span_to_fit_annotations(&mut self, annotations: &[SharedAnnotation], animate: bool) {
        let coordinates: Vec<Coordinate> =
            annotations.iter().map(|a| a.borrow().coordinate()).collect();

        let config = self.config();
        match Region::fitting(&coordinates, config.span_padding, config.min_span_degrees) {
            Some(region) => {
                log::debug!("fitting {} annotations into {region}", coordinates.len());
                self.set_region(region, animate);
            }
            None => log::debug!("span_to_fit_annotations: nothing to fit"),
        }
    }

    /// The zoom level implied by the current longitude span and screen
    /// width. Fractional; larger means closer in.
    fn zoom_level(&self) -> f64 {
        let config = self.config();
        mercator::zoom_for_longitude_span(
            self.region().span.longitude_delta,
            self.screen_size().width,
            config.tile_size,
        )
    }

    /// Center the view on `coordinate` at `zoom`, clamped to the
    /// configured maximum.
    fn set_center_coordinate(&mut self, coordinate: Coordinate, zoom: f64, animated: bool) {
        let config = self.config();
        let zoom = zoom.clamp(0.0, config.max_zoom);
        let span = mercator::span_for_zoom(coordinate, zoom, self.screen_size(), config.tile_size);
        self.set_region(Region::new(coordinate, span), animated);
    }

    /// Whether `coordinate` lies inside the displayed region
    /// (inclusive of the edges).
    fn is_coordinate_visible(&self, coordinate: Coordinate) -> bool {
        self.region().contains(coordinate)
    }

    /// Euclidean distance in screen points between `coordinate` and the
    /// view center, both projected at the current zoom level. This is
    /// on-screen distance, not great-circle distance.
    fn distance_from_center(&self, coordinate: Coordinate) -> f64 {
        let config = self.config();
        let zoom = self.zoom_level();
        let point = mercator::project(coordinate, zoom, config.tile_size);
        let center = mercator::project(self.region().center, zoom, config.tile_size);
        point.distance(&center)
    }
}

impl<V: MapView + ?Sized> MapViewExt for V {}
