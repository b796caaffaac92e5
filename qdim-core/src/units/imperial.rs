//! Imperial units derived from a scaled SI bundle.

#[cfg(feature = "unchecked")]
use num_traits::One;
#[cfg(not(feature = "unchecked"))]
use num_traits::Zero;

use crate::rep::Rep;
use crate::units::si::Si;
use crate::{Energy, Force, Length, Mileage, Velocity, Volume};

/// Imperial constants built over an [`Si`] bundle.
///
/// `pound` is a force, not a mass. `mpg` is guarded: an integer-represented
/// bundle can round the gallon down to zero, and dividing by that would
/// poison the constant, so the guard pins `mpg` to zero instead.
///
/// # Examples
///
/// ```rust
/// use qdim_core::{Imperial, Si};
///
/// let si = Si::new();
/// let imp = Imperial::new(&si);
/// let km = f64::from(imp.mile / si.kilo / si.meter);
/// assert!((km - 1.609344).abs() < 1e-6);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Imperial<R: Rep = f64> {
    /// Statute mile.
    pub mile: Length<R>,
    /// Yard, a 1760th of the mile.
    pub yard: Length<R>,
    /// Foot, a third of the yard.
    pub feet: Length<R>,
    /// Inch, a twelfth of the foot.
    pub inch: Length<R>,
    /// Pound-force.
    pub pound: Force<R>,
    /// Ounce-force, a sixteenth of the pound.
    pub oz: Force<R>,
    /// Imperial gallon.
    pub gallon: Volume<R>,
    /// Quart, a quarter gallon.
    pub quart: Volume<R>,
    /// Pint, half a quart.
    pub pint: Volume<R>,
    /// Imperial fluid ounce, a twentieth of the pint.
    pub ounce: Volume<R>,
    /// Miles per hour.
    pub miles_hour: Velocity<R>,
    /// Foot-pound of work.
    pub foot_pound: Energy<R>,
    /// British thermal unit.
    pub btu: Energy<R>,
    /// Miles per gallon; zero when the gallon itself rounds to zero.
    pub mpg: Mileage<R>,
}

impl<R: Rep> Imperial<R> {
    /// Derives the imperial constants from an already-built SI bundle.
    #[cfg(not(feature = "unchecked"))]
    pub fn new(base: &Si<R>) -> Self {
        let mile = base.meter * 5280 * 0.3047999989;
        let yard = mile / 1760;
        let feet = yard / 3;
        let inch = feet / 12;
        let pound = base.newton * 4.44822161526;
        let oz = pound / 16;
        let gallon = base.meter * base.meter * base.meter * 4.54609 / 1000;
        let quart = gallon / 4;
        let pint = quart / 2;
        let ounce = pint / 20;
        let miles_hour = mile / base.hour;
        let foot_pound = feet * pound;
        let btu = base.kilo * base.joule * 1.05505585262;
        let mpg = if gallon > Volume::zero() {
            mile / gallon
        } else {
            Mileage::zero()
        };

        Self {
            mile,
            yard,
            feet,
            inch,
            pound,
            oz,
            gallon,
            quart,
            pint,
            ounce,
            miles_hour,
            foot_pound,
            btu,
            mpg,
        }
    }

    /// Builds the bundle with every constant collapsed to one.
    #[cfg(feature = "unchecked")]
    pub fn new(_base: &Si<R>) -> Self {
        let unit = R::one();
        Self {
            mile: unit,
            yard: unit,
            feet: unit,
            inch: unit,
            pound: unit,
            oz: unit,
            gallon: unit,
            quart: unit,
            pint: unit,
            ounce: unit,
            miles_hour: unit,
            foot_pound: unit,
            btu: unit,
            mpg: unit,
        }
    }
}
