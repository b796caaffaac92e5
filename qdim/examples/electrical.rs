//! Electrical constants: Ohm's law, dissipated power, accumulated charge.

use qdim::{Electrical, Si};

fn main() {
    let si: Si = Si::default();
    let electrical = Electrical::new(&si);

    // 12 V across 48 Ω drives 250 mA.
    let current = electrical.volt * 12.0 / (electrical.ohm * 48.0);
    assert!((f64::from(current / si.ampere) - 0.25).abs() < 1e-12);

    // P = V² / R.
    let power = electrical.volt * 12.0 * (electrical.volt * 12.0) / (electrical.ohm * 48.0);
    assert!((f64::from(power / si.watt) - 3.0).abs() < 1e-12);

    // Q = I·t.
    let charge = si.ampere * 0.25 * (si.second * 60.0);
    assert!((f64::from(charge / electrical.coulomb) - 15.0).abs() < 1e-12);
}
