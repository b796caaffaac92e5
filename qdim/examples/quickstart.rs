//! Minimal end-to-end example: build the SI bundle and convert a speed.

use qdim::{Imperial, Si, Velocity};

fn main() {
    let si: Si = Si::default();
    let imperial = Imperial::new(&si);

    let speed: Velocity = si.km_h * 90.0;
    let metres_per_second = si.meter / si.second;
    assert!((f64::from(speed / metres_per_second) - 25.0).abs() < 1e-9);

    let kilometres = f64::from(imperial.mile / si.kilo / si.meter);
    assert!((kilometres - 1.609344).abs() < 1e-6);
}
