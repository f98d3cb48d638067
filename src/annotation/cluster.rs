//! Cluster annotations: one pin standing in for many.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use crate::core::Coordinate;
use crate::error::AnnotationError;

use super::pin::{Annotation, Clusterable};

/// A shared handle to any displayable annotation.
///
/// Annotation objects are produced by a data source and shared by
/// reference with the map view and with any cluster that absorbs them.
/// The model is single-threaded (map views live on one thread), so
/// `Rc<RefCell<…>>` rather than `Arc<Mutex<…>>`.
pub type SharedAnnotation = Rc<RefCell<dyn Annotation>>;

/// A shared handle to a clusterable annotation.
pub type SharedPin = Rc<RefCell<dyn Clusterable>>;

/// A cluster of nearby pins drawn as a single annotation.
///
/// The cluster exclusively owns its ordered child list, but the children
/// themselves are shared handles: dropping the cluster does not drop the
/// pins, which stay alive through the data source that produced them.
///
/// The representative coordinate is externally assigned by whatever
/// clustering policy built the cluster; it is never derived from the
/// children here.
#[derive(Clone, Debug, Default)]
pub struct ClusterAnnotation {
    coordinate: Coordinate,
    title: Option<String>,
    subtitle: Option<String>,
    children: Vec<SharedPin>,
}

impl ClusterAnnotation {
    /// Create an empty cluster displayed at `coordinate`, rejecting
    /// out-of-range coordinates.
    pub fn new(coordinate: Coordinate) -> Result<Self, AnnotationError> {
        let coordinate = Coordinate::validated(coordinate.latitude, coordinate.longitude)?;
        Ok(Self {
            coordinate,
            title: None,
            subtitle: None,
            children: Vec::new(),
        })
    }

    /// Move the cluster's representative coordinate. Never validated;
    /// the clustering policy owns this value.
    #[inline]
    pub fn set_coordinate(&mut self, coordinate: Coordinate) {
        self.coordinate = coordinate;
    }

    /// Append a child pin.
    ///
    /// Children are kept in insertion order. No de-duplication is
    /// performed and the representative coordinate is not recomputed;
    /// both are the caller's responsibility.
    pub fn add_child(&mut self, child: SharedPin) {
        self.children.push(child);
    }

    /// Drop all child handles. The representative coordinate is
    /// unchanged; the pins stay alive through their other owners.
    pub fn remove_all_children(&mut self) {
        self.children.clear();
    }

    /// The child pins, in insertion order.
    pub fn children(&self) -> &[SharedPin] {
        &self.children
    }

    /// Number of child pins.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// True when the cluster has no children.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Set the primary callout string.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Set the secondary callout string.
    pub fn set_subtitle(&mut self, subtitle: impl Into<String>) {
        self.subtitle = Some(subtitle.into());
    }
}

impl Annotation for ClusterAnnotation {
    #[inline]
    fn coordinate(&self) -> Coordinate {
        self.coordinate
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
