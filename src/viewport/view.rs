//! The map view contract and a headless in-memory implementation.

use crate::annotation::SharedAnnotation;
use crate::config::ViewConfig;
use crate::core::{Region, ScreenSize};

/// The contract a map view collaborator must satisfy.
///
/// A real map view (whatever UI toolkit renders it) exposes its current
/// displayed region, its drawable size in screen points, the annotations
/// it holds, and a way to move to a new region. Everything in
/// [`MapViewExt`](super::MapViewExt) is built on this surface alone.
pub trait MapView {
    /// The currently displayed region.
    fn region(&self) -> Region;

    /// Drawable area in screen points.
    fn screen_size(&self) -> ScreenSize;

    /// The annotations currently on the view.
    fn annotations(&self) -> &[SharedAnnotation];

    /// Display a new region, optionally animating the transition.
    fn set_region(&mut self, region: Region, animated: bool);

    /// Geometry tunables for this view.
    fn config(&self) -> ViewConfig {
        ViewConfig::default()
    }
}

/// A headless map view holding region, screen size, and annotations in
/// memory.
///
/// Useful on its own for driving geometry without a UI, and as the
/// reference implementation of [`MapView`]. "Animation" is recorded but
/// has no visual effect here.
#[derive(Clone, Debug)]
pub struct MapViewport {
    region: Region,
    screen_size: ScreenSize,
    annotations: Vec<SharedAnnotation>,
    config: ViewConfig,
    last_change_animated: bool,
}

impl MapViewport {
    /// Create a viewport with the default configuration.
    pub fn new(region: Region, screen_size: ScreenSize) -> Self {
        Self::with_config(region, screen_size, ViewConfig::default())
    }

    /// Create a viewport with an explicit configuration.
    pub fn with_config(region: Region, screen_size: ScreenSize, config: ViewConfig) -> Self {
        Self {
            region,
            screen_size,
            annotations: Vec::new(),
            config,
            last_change_animated: false,
        }
    }

    /// Add an annotation to the view.
    pub fn add_annotation(&mut self, annotation: SharedAnnotation) {
        self.annotations.push(annotation);
    }

    /// Remove every annotation from the view. The annotation objects
    /// stay alive through their other owners.
    pub fn remove_all_annotations(&mut self) {
        self.annotations.clear();
    }

    /// Whether the most recent region change asked for animation.
    #[inline]
    pub fn last_change_animated(&self) -> bool {
        self.last_change_animated
    }
}

impl MapView for MapViewport {
    #[inline]
    fn region(&self) -> Region {
        self.region
    }

    #[inline]
    fn screen_size(&self) -> ScreenSize {
        self.screen_size
    }

    fn annotations(&self) -> &[SharedAnnotation] {
        &self.annotations
    }

    fn set_region(&mut self, region: Region, animated: bool) {
        log::debug!("region change to {region} (animated: {animated})");
        self.region = region;
        self.last_change_animated = animated;
    }

    fn config(&self) -> ViewConfig {
        self.config
    }
}
