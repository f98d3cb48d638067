//! Annotation data model: pins, clusters, and their capability traits.
//!
//! - [`Annotation`]: anything displayable as a map pin
//! - [`Clusterable`]: annotations that carry a true location plus a
//!   movable display location
//! - [`PinAnnotation`]: concrete clusterable pin
//! - [`ClusterAnnotation`]: one annotation standing in for many pins

mod cluster;
mod pin;

pub use cluster::{ClusterAnnotation, SharedAnnotation, SharedPin};
pub use pin::{Annotation, Clusterable, PinAnnotation};
