//! Integration-level smoke tests for the `qdim` facade crate.
#![cfg(not(feature = "unchecked"))]

use qdim::*;

use approx::assert_relative_eq;

#[test]
fn smoke_test_si() {
    let si = Si::default();
    assert_eq!(si.meter.scalar(), 1.0);
    assert_eq!(si.hour.scalar(), 3600.0);
    assert_relative_eq!(
        f64::from(si.joule / (si.newton * si.meter)),
        1.0,
        max_relative = 1e-12
    );
}

#[test]
fn smoke_test_imperial() {
    let si: Si = Si::default();
    let imperial = Imperial::new(&si);
    assert_relative_eq!(imperial.mile.scalar(), 1609.3439941, max_relative = 1e-9);
    assert_relative_eq!(imperial.btu.scalar(), 1055.05585262, max_relative = 1e-12);
}

#[test]
fn smoke_test_us() {
    let si = Si::default();
    let imperial = Imperial::new(&si);
    let us = Us::new(&si);

    // The US gallon is smaller than the imperial one by this well-known ratio.
    assert_relative_eq!(
        f64::from(us.gallon / imperial.gallon),
        0.83267,
        max_relative = 1e-5
    );
}

#[test]
fn smoke_test_electrical() {
    let si = Si::default();
    let electrical = Electrical::new(&si);

    // Ohm's law: one volt across one ohm drives one ampere.
    assert_relative_eq!(
        f64::from(electrical.volt / electrical.ohm / si.ampere),
        1.0,
        max_relative = 1e-12
    );
}

#[test]
fn smoke_test_binary() {
    let si = Si::default();
    let binary = Binary::new(&si);

    // 1 KByte = 1024 * 8 bits, exact in any binary float.
    assert_eq!(f64::from(binary.kbyte / si.count), 8192.0);
}

#[test]
fn acceleration_in_kilometres_round_trips() {
    let si = Si::default();

    // 10 km/s² measured in m/s² is exactly 10 000.
    let acceleration = si.kilo * si.meter * 10 / si.second / si.second;
    let unit = si.meter / si.second / si.second;
    assert_eq!(f64::from(acceleration / unit), 10_000.0);
}

#[test]
fn force_recovers_the_newton() {
    let si = Si::default();

    // F = m · a: one kilogram at 10 mm/s² is a centinewton.
    let acceleration = si.milli * si.meter * 10 / si.second / si.second;
    let force = si.kilogram * acceleration;
    assert_relative_eq!(f64::from(force / si.newton), 0.01, max_relative = 1e-12);
}

#[test]
fn mile_measured_in_kilometres() {
    let si = Si::default();
    let imperial = Imperial::new(&si);

    let kilometre = si.kilo * si.meter;
    assert_relative_eq!(
        f64::from(imperial.mile / kilometre),
        1.609344,
        max_relative = 1e-6
    );
}

#[test]
fn braking_distance_from_speed_and_deceleration() {
    let si = Si::default();

    // 90 km/h is 25 m/s; stopping at 1 g takes v² / (2·g) metres.
    let speed: Velocity = si.km_h * 90;
    let distance: Length = speed * speed / (si.gravity * 2);
    assert_relative_eq!(
        f64::from(distance / si.meter),
        625.0 / (2.0 * 9.80665),
        max_relative = 1e-9
    );
}

#[test]
fn fuel_economy_bridges_mileage_and_consumption() {
    let si = Si::default();
    let us = Us::new(&si);

    // Mileage times consumption is dimensionless; the inverse product is the
    // familiar 235.215 factor between mpg (US) and L/100 km.
    let product = f64::from(us.mpg * si.l_100km);
    assert_relative_eq!(1.0 / product, 235.215, max_relative = 1e-5);
}

#[test]
fn integer_scales_preserve_representation() {
    let scales = Scales::<i64> {
        length: 1000,
        ..Scales::default()
    };
    let si = Si::with_scales(scales);
    let imperial = Imperial::new(&si);
    let us = Us::new(&si);

    // Millimetre lengths: every constant stays an i64 end to end.
    assert_eq!(imperial.mile.scalar(), 1_609_343);
    assert_eq!(imperial.yard.scalar(), 914);
    assert_eq!(us.gallon.scalar(), 3_785_411);

    // A mile per gallon truncates to zero metres per cubic millimetre.
    assert_eq!(us.mpg.scalar(), 0);
}

#[test]
fn representations_convert_only_on_request() {
    let si: Si = Si::default();
    let imperial = Imperial::new(&si);

    let rounded = imperial.mile.to_rep::<i32>();
    assert_eq!(rounded.scalar(), 1609);
}

#[test]
fn quantity_basic_arithmetic() {
    let a = Length::new(10.0);
    let b = Length::new(5.0);

    assert_eq!((a + b).scalar(), 15.0);
    assert_eq!((a - b).scalar(), 5.0);
    assert_eq!((a * 2.0f64).scalar(), 20.0);
    assert_eq!((a / 2.0f64).scalar(), 5.0);
}

#[test]
fn dimensionless_behaves_as_a_scalar() {
    let ratio: Dimensionless = 0.5.into();
    assert_eq!(ratio, 0.5);
    assert!(ratio < 1.0);

    let back: f64 = ratio.into();
    assert_eq!(back, 0.5);
}

#[test]
fn debug_formatting_is_stable() {
    let si: Si = Si::default();
    let binary = Binary::new(&si);

    assert_eq!(
        format!("{:?}", si.newton),
        "< 1, 1,-2, 0, 0, 0, 0, T>            1"
    );
    assert_eq!(
        format!("{:?}", binary.kbyte / si.count),
        "<                    , T>         8192"
    );
}

#[cfg(feature = "serde")]
mod serde_round_trips {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[test]
    fn plain_serialization_is_the_raw_scalar() {
        let si = Si::default();
        let json = serde_json::to_string(&si.hour).unwrap();
        assert_eq!(json, "3600.0");

        let parsed: Time = serde_json::from_str("3600.0").unwrap();
        assert_eq!(parsed, si.hour);
    }

    #[test]
    fn tagged_serialization_checks_the_dimension() {
        #[derive(Serialize, Deserialize)]
        struct Reading {
            #[serde(with = "qdim::serde_with_dim")]
            speed: Velocity,
        }

        let reading = Reading {
            speed: Velocity::new(12.5),
        };
        let json = serde_json::to_string(&reading).unwrap();
        assert_eq!(json, r#"{"speed":{"scalar":12.5,"dim":[0,1,-1,0,0,0,0]}}"#);

        #[derive(Deserialize, Debug)]
        struct Mislabelled {
            #[serde(with = "qdim::serde_with_dim")]
            #[allow(dead_code)]
            speed: Force,
        }

        let err = serde_json::from_str::<Mislabelled>(&json).unwrap_err();
        assert!(err.to_string().contains("dimension mismatch"));
    }
}
