//! Map view geometry configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults;
use super::error::ConfigLoadError;

/// Tunables for viewport geometry, loaded from YAML.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ViewConfig {
    /// Side length of a map tile in screen points.
    #[serde(default = "defaults::tile_size")]
    pub tile_size: f64,

    /// Multiplicative padding applied when fitting a region to a set of
    /// annotations, so pins do not sit on the view edge.
    #[serde(default = "defaults::span_padding")]
    pub span_padding: f64,

    /// Smallest span (degrees) a fitted region may have on either axis.
    /// Keeps a single annotation from producing a zero-size region.
    #[serde(default = "defaults::min_span_degrees")]
    pub min_span_degrees: f64,

    /// Upper bound applied when setting the zoom level.
    #[serde(default = "defaults::max_zoom")]
    pub max_zoom: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            tile_size: defaults::tile_size(),
            span_padding: defaults::span_padding(),
            min_span_degrees: defaults::min_span_degrees(),
            max_zoom: defaults::max_zoom(),
        }
    }
}

impl ViewConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from the default config path (configs/view.yaml), falling
    /// back to defaults when the file does not exist.
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/view.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }
}
