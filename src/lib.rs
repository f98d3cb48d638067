//! # Pinmap: Map Annotation and Cluster Primitives
//!
//! A small library for map pins and the clusters that stand in for them,
//! plus the viewport geometry a map view needs around them.
//!
//! ## Features
//!
//! - **Annotation model**: [`PinAnnotation`] with an immutable true
//!   location and a movable display location, and [`ClusterAnnotation`]
//!   owning an ordered list of shared child pins
//! - **Capability traits**: [`Annotation`] and [`Clusterable`] so any
//!   concrete type can participate in clustering and display
//! - **Viewport geometry**: web-mercator zoom conversion, fit-to-span,
//!   visibility and on-screen distance queries over a [`MapView`]
//!   contract any widget can implement
//!
//! Deciding *which* pins form a cluster is out of scope: this crate is
//! the data model and geometry a clustering policy plugs into.
//!
//! ## Quick Start
//!
//! ```rust
//! use pinmap::{
//!     Coordinate, CoordinateSpan, MapViewExt, MapViewport, PinAnnotation, Region, ScreenSize,
//! };
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let region = Region::new(Coordinate::new(37.0, -122.0), CoordinateSpan::new(0.1, 0.1));
//! let mut view = MapViewport::new(region, ScreenSize::new(640.0, 480.0));
//!
//! let pin = PinAnnotation::new(Coordinate::new(37.02, -122.01)).unwrap();
//! view.add_annotation(Rc::new(RefCell::new(pin)));
//!
//! let pins = view.annotations_except::<pinmap::ClusterAnnotation>();
//! view.span_to_fit_annotations(&pins, false);
//! println!("zoom level: {:.2}", view.zoom_level());
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: coordinate, span, region, and screen types plus
//!   [`core::mercator`] projection math
//! - [`annotation`]: pins, clusters, and their capability traits
//! - [`viewport`]: the [`MapView`] contract, the headless
//!   [`MapViewport`], and the [`MapViewExt`] geometry operations
//! - [`config`]: YAML-loadable geometry tunables
//!
//! Annotations are shared single-threaded handles
//! (`Rc<RefCell<…>>`): a map view lives on one thread, and pins are
//! shared by reference between their data source, the view, and any
//! cluster that absorbs them.

pub mod annotation;
pub mod config;
pub mod core;
pub mod error;
pub mod viewport;

// Re-export main types at crate root
pub use annotation::{
    Annotation, ClusterAnnotation, Clusterable, PinAnnotation, SharedAnnotation, SharedPin,
};
pub use config::{ConfigLoadError, ViewConfig};
pub use core::{Coordinate, CoordinateSpan, Region, ScreenPoint, ScreenSize};
pub use error::AnnotationError;
pub use viewport::{MapView, MapViewExt, MapViewport};
