//! Cross-module scenarios: a data source producing pins, an external
//! clustering policy absorbing them, and a viewport navigating around
//! the result.

use std::cell::RefCell;
use std::rc::Rc;

use pinmap::{
    Annotation, ClusterAnnotation, Clusterable, Coordinate, CoordinateSpan, MapView, MapViewExt,
    MapViewport, PinAnnotation, Region, ScreenSize, ViewConfig,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn shared_pin(lat: f64, lon: f64) -> Rc<RefCell<PinAnnotation>> {
    Rc::new(RefCell::new(
        PinAnnotation::new(Coordinate::new(lat, lon)).unwrap(),
    ))
}

fn bay_area_viewport() -> MapViewport {
    MapViewport::new(
        Region::new(Coordinate::new(37.0, -122.0), CoordinateSpan::new(0.5, 0.5)),
        ScreenSize::new(640.0, 480.0),
    )
}

#[test]
fn cluster_absorbs_pins_and_view_filters_them() {
    init_logging();

    // Data source produces pins and keeps its own handles.
    let pins = [
        shared_pin(37.01, -122.01),
        shared_pin(37.02, -122.02),
        shared_pin(37.03, -122.03),
    ];

    // An external clustering policy decides these belong together and
    // anchors the cluster at the first pin's true location.
    let anchor = pins[0].borrow().actual_coordinate();
    let mut cluster = ClusterAnnotation::new(anchor).unwrap();
    for pin in &pins {
        pin.borrow_mut().set_cluster_coordinate(anchor);
        cluster.add_child(pin.clone());
    }
    cluster.set_title(format!("{} pins", cluster.child_count()));
    assert_eq!(cluster.child_count(), 3);
    assert_eq!(cluster.title(), Some("3 pins"));

    // The view shows the cluster plus one free-standing pin.
    let mut view = bay_area_viewport();
    view.add_annotation(Rc::new(RefCell::new(cluster)));
    let lone = shared_pin(37.2, -121.8);
    view.add_annotation(lone);

    let without_clusters = view.annotations_except::<ClusterAnnotation>();
    assert_eq!(without_clusters.len(), 1);
    assert_eq!(
        without_clusters[0].borrow().coordinate(),
        Coordinate::new(37.2, -121.8)
    );

    // Absorbed pins are displayed at the anchor but remember where
    // they really are.
    for pin in &pins {
        assert_eq!(pin.borrow().coordinate(), anchor);
    }
    for pin in &pins[1..] {
        assert_ne!(pin.borrow().actual_coordinate(), anchor);
    }
}

#[test]
fn fitted_region_shows_every_annotation() {
    init_logging();

    let mut view = bay_area_viewport();
    let annotations: Vec<pinmap::SharedAnnotation> = vec![
        shared_pin(37.33, -122.03),
        shared_pin(37.77, -122.42),
        shared_pin(36.97, -122.03),
    ];

    view.span_to_fit_annotations(&annotations, true);

    assert!(view.last_change_animated());
    for a in &annotations {
        let c = a.borrow().coordinate();
        assert!(view.is_coordinate_visible(c), "{c:?} fell outside the fit");
    }

    // The fitted center is at distance zero; everything else is a
    // finite positive distance from it.
    assert!(view.distance_from_center(view.region().center) < 1e-9);
    for a in &annotations {
        let d = view.distance_from_center(a.borrow().coordinate());
        assert!(d.is_finite() && d > 0.0);
    }
}

#[test]
fn zoom_roundtrip_at_representative_levels() {
    init_logging();

    let mut view = bay_area_viewport();
    let center = Coordinate::new(37.331, -122.031);

    for zoom in [2.0, 5.0, 10.0, 15.0, 18.0] {
        view.set_center_coordinate(center, zoom, false);
        let recovered = view.zoom_level();
        assert!(
            (recovered - zoom).abs() < 0.01,
            "zoom {zoom} recovered as {recovered}"
        );
        assert!(view.is_coordinate_visible(center));
        assert!(view.distance_from_center(center) < 1e-9);
    }
}

#[test]
fn padding_config_widens_the_fit() {
    init_logging();

    let region = Region::new(Coordinate::new(37.0, -122.0), CoordinateSpan::new(0.5, 0.5));
    let screen = ScreenSize::new(640.0, 480.0);
    let annotations: Vec<pinmap::SharedAnnotation> =
        vec![shared_pin(37.0, -122.0), shared_pin(37.5, -121.5)];

    let mut snug = MapViewport::with_config(
        region,
        screen,
        ViewConfig {
            span_padding: 1.0,
            ..ViewConfig::default()
        },
    );
    let mut roomy = MapViewport::with_config(
        region,
        screen,
        ViewConfig {
            span_padding: 2.0,
            ..ViewConfig::default()
        },
    );

    snug.span_to_fit_annotations(&annotations, false);
    roomy.span_to_fit_annotations(&annotations, false);

    assert!(roomy.region().span.latitude_delta > snug.region().span.latitude_delta);
    assert!(roomy.region().span.longitude_delta > snug.region().span.longitude_delta);
    assert_eq!(roomy.region().center, snug.region().center);
}

#[test]
fn dropping_the_view_and_cluster_keeps_source_pins() {
    init_logging();

    let pin = shared_pin(37.0, -122.0);
    {
        let mut cluster = ClusterAnnotation::new(Coordinate::new(37.0, -122.0)).unwrap();
        cluster.add_child(pin.clone());

        let mut view = bay_area_viewport();
        view.add_annotation(pin.clone());
        assert_eq!(Rc::strong_count(&pin), 3);
    }
    // View and cluster gone; the data source still owns its pin.
    assert_eq!(Rc::strong_count(&pin), 1);
    assert!(pin.borrow().coordinate().is_valid());
}
