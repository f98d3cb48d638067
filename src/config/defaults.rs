//! Default value functions for serde deserialization.

pub fn tile_size() -> f64 {
    256.0
}

pub fn span_padding() -> f64 {
    1.1
}

pub fn min_span_degrees() -> f64 {
    0.005
}

pub fn max_zoom() -> f64 {
    22.0
}
