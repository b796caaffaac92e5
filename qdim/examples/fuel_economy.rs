//! Fuel economy in three unit systems from one measurement.

use qdim::{Imperial, Si, Us};

fn main() {
    let si: Si = Si::default();
    let imperial = Imperial::new(&si);
    let us = Us::new(&si);

    // A tank of 48 litres lasted 600 km.
    let fuel = si.liter * 48.0;
    let distance = si.kilo * si.meter * 600.0;

    let consumption = fuel / distance;
    println!(
        "consumption: {:.2} L/100km",
        f64::from(consumption / si.l_100km)
    );

    let economy = distance / fuel;
    println!(
        "economy:     {:.2} mpg (imperial)",
        f64::from(economy / imperial.mpg)
    );
    println!(
        "economy:     {:.2} mpg (US)",
        f64::from(economy / us.mpg)
    );
}
