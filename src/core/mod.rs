//! Core geographic types for the pinmap library.
//!
//! This module provides the fundamental types used throughout the library:
//! - [`Coordinate`] and [`CoordinateSpan`]: geographic value types
//! - [`ScreenPoint`] and [`ScreenSize`]: screen-space value types
//! - [`Region`]: a displayed map area (center + span)
//! - [`mercator`]: web-mercator projection and zoom math

mod coord;
mod region;

pub mod mercator;

pub use coord::{Coordinate, CoordinateSpan, ScreenPoint, ScreenSize};
pub use region::Region;
