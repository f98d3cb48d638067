//! Web-mercator projection and zoom-level math.
//!
//! All functions are pure. A zoom level `z` maps the full globe onto a
//! square of `tile_size * 2^z` pixels; zoom levels may be fractional.
//! Latitudes are clamped to the mercator-valid range before projection.

use std::f64::consts::PI;

use super::coord::{Coordinate, CoordinateSpan, ScreenPoint, ScreenSize};

/// Highest latitude representable in the web-mercator projection.
pub const MAX_MERCATOR_LATITUDE: f64 = 85.051_128_779_806_59;

/// Side length of the world map in pixels at a given zoom level.
#[inline]
fn world_size(zoom: f64, tile_size: f64) -> f64 {
    tile_size * 2.0_f64.powf(zoom)
}

/// Project a coordinate to world pixel space at `zoom`.
///
/// The origin is the top-left corner of the world map (latitude
/// `MAX_MERCATOR_LATITUDE`, longitude -180°); y grows southward.
pub fn project(coordinate: Coordinate, zoom: f64, tile_size: f64) -> ScreenPoint {
    let world = world_size(zoom, tile_size);
    let latitude = coordinate
        .latitude
        .clamp(-MAX_MERCATOR_LATITUDE, MAX_MERCATOR_LATITUDE);
    let lat_rad = latitude.to_radians();

    let x = (coordinate.longitude + 180.0) / 360.0 * world;
    let y = (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0 * world;
    ScreenPoint::new(x, y)
}

/// Inverse of [`project`]: world pixel space back to a coordinate.
pub fn unproject(point: ScreenPoint, zoom: f64, tile_size: f64) -> Coordinate {
    let world = world_size(zoom, tile_size);

    let longitude = point.x / world * 360.0 - 180.0;
    let latitude = (PI * (1.0 - 2.0 * point.y / world)).sinh().atan().to_degrees();
    Coordinate::new(latitude, longitude)
}

/// Zoom level at which `longitude_delta` degrees fill `screen_width`
/// points: `log2(360 * width / (delta * tile_size))`.
pub fn zoom_for_longitude_span(longitude_delta: f64, screen_width: f64, tile_size: f64) -> f64 {
    (360.0 * screen_width / (longitude_delta * tile_size)).log2()
}

/// Coordinate span displayed by a view of `screen` points centered on
/// `center` at `zoom`.
///
/// The longitude span follows directly from the zoom formula; the
/// latitude span is found by projecting the center, stepping half the
/// screen height up and down, and unprojecting. The longitude span is
/// capped at the full globe.
pub fn span_for_zoom(
    center: Coordinate,
    zoom: f64,
    screen: ScreenSize,
    tile_size: f64,
) -> CoordinateSpan {
    let longitude_delta = (360.0 * screen.width / (tile_size * 2.0_f64.powf(zoom))).min(360.0);

    let center_px = project(center, zoom, tile_size);
    let top = unproject(
        ScreenPoint::new(center_px.x, center_px.y - screen.height / 2.0),
        zoom,
        tile_size,
    );
    let bottom = unproject(
        ScreenPoint::new(center_px.x, center_px.y + screen.height / 2.0),
        zoom,
        tile_size,
    );
    let latitude_delta = (top.latitude - bottom.latitude).abs();

    CoordinateSpan::new(latitude_delta, longitude_delta)
}
