//! Configuration loading for pinmap.
//!
//! Geometry tunables live in a single YAML file; every field has a
//! default so partial files (or no file at all) work.

mod defaults;
mod error;
mod view;

pub use error::ConfigLoadError;
pub use view::ViewConfig;
