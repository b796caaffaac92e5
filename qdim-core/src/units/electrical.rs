//! Electrical constants derived from an SI bundle.

use num_traits::One;

use crate::rep::Rep;
use crate::units::si::Si;
use crate::{
    Capacitance, Charge, Conductance, Dimensionless, ElecPotential, Inductance, MagneticFlux,
    Resistance,
};

/// Electrical constants built over an [`Si`] bundle.
///
/// These carry deep negative time exponents, so they are generally only
/// meaningful for floating-point representations; an integer bundle truncates
/// most of them to zero.
///
/// # Examples
///
/// ```rust
/// use qdim_core::{Electrical, Si};
///
/// let si = Si::new();
/// let elec = Electrical::new(&si);
/// let unity = f64::from(elec.volt / elec.ohm / si.ampere);
/// assert!((unity - 1.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Electrical<R: Rep = f64> {
    /// Volt.
    pub volt: ElecPotential<R>,
    /// Coulomb.
    pub coulomb: Charge<R>,
    /// Farad.
    pub farad: Capacitance<R>,
    /// Ohm.
    pub ohm: Resistance<R>,
    /// Siemens, the reciprocal ohm.
    pub siemens: Conductance<R>,
    /// Weber.
    pub weber: MagneticFlux<R>,
    /// Henry.
    pub henry: Inductance<R>,
}

impl<R: Rep> Electrical<R> {
    /// Derives the electrical constants from an already-built SI bundle.
    #[cfg(not(feature = "unchecked"))]
    pub fn new(base: &Si<R>) -> Self {
        let volt = base.watt / base.ampere;
        let coulomb = base.ampere * base.second;
        let farad = volt / coulomb;
        let ohm = volt / base.ampere;
        let siemens = Dimensionless::one() / ohm;
        let weber = volt * base.second;
        let henry = weber / base.ampere;

        Self {
            volt,
            coulomb,
            farad,
            ohm,
            siemens,
            weber,
            henry,
        }
    }

    /// Builds the bundle with every constant collapsed to one.
    #[cfg(feature = "unchecked")]
    pub fn new(_base: &Si<R>) -> Self {
        let unit = R::one();
        Self {
            volt: unit,
            coulomb: unit,
            farad: unit,
            ohm: unit,
            siemens: unit,
            weber: unit,
            henry: unit,
        }
    }
}

#[cfg(all(test, not(feature = "unchecked")))]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ohms_law_round_trips() {
        let si = Si::<f64>::new();
        let elec = Electrical::new(&si);
        assert_relative_eq!(
            f64::from(elec.volt / elec.ohm / si.ampere),
            1.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn charge_and_capacitance_are_consistent() {
        let si = Si::<f64>::new();
        let elec = Electrical::new(&si);
        assert_relative_eq!(
            f64::from(elec.coulomb / (si.ampere * si.second)),
            1.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            f64::from(elec.farad * elec.coulomb / elec.volt),
            1.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn reciprocal_pairs_cancel() {
        let si = Si::<f64>::new();
        let elec = Electrical::new(&si);
        assert_relative_eq!(
            f64::from(elec.siemens * elec.ohm),
            1.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            f64::from(elec.henry * si.ampere / elec.weber),
            1.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn scaled_time_changes_the_derived_constants() {
        let si = Si::<f64>::with_scales(crate::Scales {
            time: 2.0,
            ..crate::Scales::default()
        });
        let elec = Electrical::new(&si);
        // volt carries time⁻³, so doubling the time scale divides it by 8.
        assert_relative_eq!(elec.volt.scalar(), 0.125, max_relative = 1e-12);
        assert_relative_eq!(elec.coulomb.scalar(), 2.0, max_relative = 1e-12);
    }
}
