//! Map view contract and viewport geometry operations.
//!
//! [`MapView`] is the surface an actual map widget must expose;
//! [`MapViewport`] is a headless implementation of it, and
//! [`MapViewExt`] layers the geometry helpers (fit-to-span, zoom
//! conversion, visibility, on-screen distance) over any implementor.

mod ops;
mod view;

pub use ops::MapViewExt;
pub use view::{MapView, MapViewport};
