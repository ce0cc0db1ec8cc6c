//! Classify a handful of lon/lat probes against a geofence ring that spans
//! the antimeridian.
//!
//! Why this shape
//! - A fence straddling lon ±180 is the case naive point-in-polygon code
//!   gets wrong; the winding predicate normalizes longitude differences, so
//!   the same four vertices just work.
//!
//! Run: cargo run -p ringwind --example geofence

use nalgebra::Vector2;
use ringwind::Winding;

fn main() {
    let fence = [
        Vector2::new(170.0, -10.0),
        Vector2::new(170.0, 10.0),
        Vector2::new(-170.0, 10.0),
        Vector2::new(-170.0, -10.0),
    ];
    let winding = Winding::spherical_degrees();

    let probes = [
        ("ship_a", 180.0, 0.0),
        ("ship_b", 150.0, 0.0),
        ("ship_c", -179.0, 8.0),
        ("buoy", 170.0, 0.0),
        ("port", 0.0, 45.0),
    ];
    for (name, lon, lat) in probes {
        let loc = winding.classify(Vector2::new(lon, lat), &fence);
        println!("{name}: lon={lon} lat={lat} -> {loc:?}");
    }
}
