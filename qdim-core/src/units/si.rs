//! SI bundle: scaled base units, decimal multipliers, derived constants.
//!
//! # Design notes
//!
//! - Construction is strictly functional. Every derived constant is an
//!   expression over already-built ones, so the bundle is complete the moment
//!   [`Si::with_scales`] returns and never changes afterwards.
//! - Scales exist for integer representations: a caller who wants millimetre
//!   precision over `i64` asks for 1000 scale units per metre and keeps
//!   sub-metre constants exact instead of rounding them to zero.
//! - Fractional definitions (`gravity`, `revolution`, the sub-unit
//!   multipliers) are computed in the wide lane and narrowed to `R` once, per
//!   constant.

#[cfg(not(feature = "unchecked"))]
use core::f64::consts::PI;

use num_traits::One;

use crate::rep::Rep;
use crate::{
    Acceleration, Current, Dimensionless, Efficiency, Energy, Force, Frequency, Length, Luminance,
    Mass, Matter, Power, Pressure, Temperature, Time, Velocity, Volume,
};

/// Scale parameters for an [`Si`] bundle, one per base unit.
///
/// Each scale is the number of representation units that make up one SI base
/// unit, defaulting to 1 everywhere. Floating-point bundles rarely need
/// anything else; integer bundles pick larger scales to keep sub-unit
/// precision.
///
/// # Examples
///
/// ```rust
/// use qdim_core::Scales;
///
/// let fine = Scales::<i64> {
///     length: 10_000,
///     ..Scales::default()
/// };
/// assert_eq!(fine.length, 10_000);
/// assert_eq!(fine.mass, 1);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Scales<R: Rep> {
    /// Representation units per kilogram.
    pub mass: R,
    /// Representation units per metre.
    pub length: R,
    /// Representation units per second.
    pub time: R,
    /// Representation units per ampere.
    pub current: R,
    /// Representation units per kelvin.
    pub temperature: R,
    /// Representation units per mole.
    pub matter: R,
    /// Representation units per candela.
    pub luminance: R,
    /// Representation units per radian.
    pub plane_angle: R,
    /// Representation units per steradian.
    pub solid_angle: R,
    /// Representation units per counted item.
    pub count: R,
}

impl<R: Rep> Default for Scales<R> {
    fn default() -> Self {
        Self {
            mass: R::one(),
            length: R::one(),
            time: R::one(),
            current: R::one(),
            temperature: R::one(),
            matter: R::one(),
            luminance: R::one(),
            plane_angle: R::one(),
            solid_angle: R::one(),
            count: R::one(),
        }
    }
}

/// The SI bundle: base units, decimal multipliers, and derived constants.
///
/// # Examples
///
/// ```rust
/// use qdim_core::{Si, Velocity};
///
/// let si = Si::new();
/// let speed: Velocity = si.kilo * si.meter * 100 / si.hour;
/// assert!((f64::from(speed / si.km_h) - 100.0).abs() < 1e-9);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Si<R: Rep = f64> {
    /// Kilogram, the scaled mass base unit.
    pub kilogram: Mass<R>,
    /// Metre, the scaled length base unit.
    pub meter: Length<R>,
    /// Second, the scaled time base unit.
    pub second: Time<R>,
    /// Ampere, the scaled current base unit.
    pub ampere: Current<R>,
    /// Kelvin, the scaled temperature base unit.
    pub kelvin: Temperature<R>,
    /// Mole, the scaled amount-of-matter base unit.
    pub mole: Matter<R>,
    /// Candela, the scaled luminous-intensity base unit.
    pub candela: Luminance<R>,
    /// Radian; dimensionless.
    pub radian: Dimensionless<R>,
    /// Steradian; dimensionless.
    pub steradian: Dimensionless<R>,
    /// One counted item; dimensionless.
    pub count: Dimensionless<R>,
    /// One tenth.
    pub deci: Dimensionless<R>,
    /// One hundredth.
    pub centi: Dimensionless<R>,
    /// One thousandth.
    pub milli: Dimensionless<R>,
    /// One millionth.
    pub micro: Dimensionless<R>,
    /// One billionth.
    pub nano: Dimensionless<R>,
    /// Ten.
    pub deca: Dimensionless<R>,
    /// One hundred.
    pub hecto: Dimensionless<R>,
    /// One thousand.
    pub kilo: Dimensionless<R>,
    /// One million.
    pub mega: Dimensionless<R>,
    /// One billion.
    pub giga: Dimensionless<R>,
    /// Litre, a thousandth of a cubic metre.
    pub liter: Volume<R>,
    /// Minute.
    pub minute: Time<R>,
    /// Hour.
    pub hour: Time<R>,
    /// Day.
    pub day: Time<R>,
    /// Newton.
    pub newton: Force<R>,
    /// Joule.
    pub joule: Energy<R>,
    /// Kilometres per hour.
    pub km_h: Velocity<R>,
    /// One full turn in radians.
    pub revolution: Dimensionless<R>,
    /// One degree of arc.
    pub degree: Dimensionless<R>,
    /// One clock-face hour of arc, a twelfth of a turn.
    pub clock: Dimensionless<R>,
    /// Hertz, one count per second.
    pub hertz: Frequency<R>,
    /// Standard gravity.
    pub gravity: Acceleration<R>,
    /// Pascal.
    pub pascal: Pressure<R>,
    /// Watt.
    pub watt: Power<R>,
    /// Litres per hundred kilometres, the metric fuel-economy constant.
    pub l_100km: Efficiency<R>,
}

impl<R: Rep> Si<R> {
    /// Builds the bundle with all scales at their default of 1.
    pub fn new() -> Self {
        Self::with_scales(Scales::default())
    }

    /// Builds the bundle from explicit per-dimension scales.
    #[cfg(not(feature = "unchecked"))]
    pub fn with_scales(scales: Scales<R>) -> Self {
        let kilogram = Mass::new(scales.mass);
        let meter = Length::new(scales.length);
        let second = Time::new(scales.time);
        let ampere = Current::new(scales.current);
        let kelvin = Temperature::new(scales.temperature);
        let mole = Matter::new(scales.matter);
        let candela = Luminance::new(scales.luminance);
        let radian = Dimensionless::new(scales.plane_angle);
        let steradian = Dimensionless::new(scales.solid_angle);
        let count = Dimensionless::new(scales.count);

        let deci = Dimensionless::one() / 10;
        let centi = Dimensionless::one() / 100;
        let milli = Dimensionless::one() / 1000;
        let micro = milli / 1000;
        let nano = micro / 1000;
        let deca = Dimensionless::one() * 10;
        let hecto = Dimensionless::one() * 100;
        let kilo = Dimensionless::one() * 1000;
        let mega = kilo * 1000;
        let giga = mega * 1000;

        let liter = meter * meter * meter / 1000;
        let minute = second * 60;
        let hour = minute * 60;
        let day = hour * 24;
        let newton = kilogram * meter / second / second;
        let joule = newton * meter;
        let km_h = kilo * meter / hour;
        let revolution = radian * 2 * PI;
        let degree = revolution / 360;
        let clock = revolution / 12;
        let hertz = count / second;
        let gravity = meter * 9.80665 / second / second;
        let pascal = newton / meter / meter;
        let watt = joule / second;
        let l_100km = meter * meter * meter / (kilo * meter * 100) / 1000;

        Self {
            kilogram,
            meter,
            second,
            ampere,
            kelvin,
            mole,
            candela,
            radian,
            steradian,
            count,
            deci,
            centi,
            milli,
            micro,
            nano,
            deca,
            hecto,
            kilo,
            mega,
            giga,
            liter,
            minute,
            hour,
            day,
            newton,
            joule,
            km_h,
            revolution,
            degree,
            clock,
            hertz,
            gravity,
            pascal,
            watt,
            l_100km,
        }
    }

    /// Builds the bundle with every constant collapsed to one; the scales are
    /// ignored because nothing is tracked.
    #[cfg(feature = "unchecked")]
    pub fn with_scales(_scales: Scales<R>) -> Self {
        let unit = R::one();
        Self {
            kilogram: unit,
            meter: unit,
            second: unit,
            ampere: unit,
            kelvin: unit,
            mole: unit,
            candela: unit,
            radian: unit,
            steradian: unit,
            count: unit,
            deci: unit,
            centi: unit,
            milli: unit,
            micro: unit,
            nano: unit,
            deca: unit,
            hecto: unit,
            kilo: unit,
            mega: unit,
            giga: unit,
            liter: unit,
            minute: unit,
            hour: unit,
            day: unit,
            newton: unit,
            joule: unit,
            km_h: unit,
            revolution: unit,
            degree: unit,
            clock: unit,
            hertz: unit,
            gravity: unit,
            pascal: unit,
            watt: unit,
            l_100km: unit,
        }
    }
}

impl<R: Rep> Default for Si<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, not(feature = "unchecked")))]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use core::f64::consts::TAU;

    #[test]
    fn default_scales_leave_base_units_at_unity() {
        let si = Si::<f64>::new();
        assert_eq!(si.kilogram.scalar(), 1.0);
        assert_eq!(si.meter.scalar(), 1.0);
        assert_eq!(si.second.scalar(), 1.0);
        assert_eq!(si.radian.scalar(), 1.0);
        assert_eq!(si.count.scalar(), 1.0);
    }

    #[test]
    fn decimal_multipliers_chain_exactly() {
        let si = Si::<f64>::new();
        assert_eq!(si.deci.scalar(), 0.1);
        assert_eq!(si.centi.scalar(), 0.01);
        assert_eq!(si.milli.scalar(), 0.001);
        assert_relative_eq!(si.micro.scalar(), 1e-6, max_relative = 1e-12);
        assert_relative_eq!(si.nano.scalar(), 1e-9, max_relative = 1e-12);
        assert_eq!(si.deca.scalar(), 10.0);
        assert_eq!(si.hecto.scalar(), 100.0);
        assert_eq!(si.kilo.scalar(), 1000.0);
        assert_eq!(si.mega.scalar(), 1e6);
        assert_eq!(si.giga.scalar(), 1e9);
    }

    #[test]
    fn calendar_constants_stack_from_the_second() {
        let si = Si::<f64>::new();
        assert_eq!(si.minute.scalar(), 60.0);
        assert_eq!(si.hour.scalar(), 3600.0);
        assert_eq!(si.day.scalar(), 86_400.0);
    }

    #[test]
    fn mechanical_chain_holds_at_unit_scales() {
        let si = Si::<f64>::new();
        assert_eq!(si.newton.scalar(), 1.0);
        assert_eq!(si.joule.scalar(), 1.0);
        assert_eq!(si.pascal.scalar(), 1.0);
        assert_eq!(si.watt.scalar(), 1.0);
        assert_eq!(si.gravity.scalar(), 9.80665);
        assert_eq!(si.liter.scalar(), 0.001);
        assert_eq!(si.hertz.scalar(), 1.0);
    }

    #[test]
    fn angular_constants_divide_the_turn() {
        let si = Si::<f64>::new();
        assert_relative_eq!(si.revolution.scalar(), TAU, max_relative = 1e-12);
        assert_relative_eq!(si.degree.scalar(), TAU / 360.0, max_relative = 1e-12);
        assert_relative_eq!(si.clock.scalar(), TAU / 12.0, max_relative = 1e-12);
    }

    #[test]
    fn travel_constants_match_their_definitions() {
        let si = Si::<f64>::new();
        assert_relative_eq!(si.km_h.scalar(), 1000.0 / 3600.0, max_relative = 1e-12);
        assert_relative_eq!(si.l_100km.scalar(), 1e-8, max_relative = 1e-12);
    }

    #[test]
    fn length_scale_propagates_into_derived_constants() {
        let si = Si::with_scales(Scales {
            length: 2.0,
            ..Scales::default()
        });
        assert_eq!(si.meter.scalar(), 2.0);
        assert_eq!(si.liter.scalar(), 0.008);
        assert_eq!(si.newton.scalar(), 2.0);
        assert_relative_eq!(si.km_h.scalar(), 2000.0 / 3600.0, max_relative = 1e-12);
    }

    #[test]
    fn integer_bundle_keeps_coarse_constants_exact() {
        let si = Si::<i64>::with_scales(Scales {
            length: 1000,
            time: 1000,
            ..Scales::default()
        });
        assert_eq!(si.meter.scalar(), 1000);
        assert_eq!(si.minute.scalar(), 60_000);
        assert_eq!(si.hour.scalar(), 3_600_000);
        assert_eq!(si.day.scalar(), 86_400_000);
        assert_eq!(si.liter.scalar(), 1_000_000);
    }

    #[test]
    fn integer_bundle_truncates_sub_unit_constants() {
        let si = Si::<i32>::new();
        assert_eq!(si.milli.scalar(), 0);
        assert_eq!(si.liter.scalar(), 0);
        assert_eq!(si.kilo.scalar(), 1000);
    }
}

#[cfg(all(test, feature = "unchecked"))]
mod unchecked_tests {
    use super::*;

    #[test]
    fn every_constant_collapses_to_one() {
        let si = Si::<f64>::new();
        assert_eq!(si.meter, 1.0);
        assert_eq!(si.kilo, 1.0);
        assert_eq!(si.gravity, 1.0);
        assert_eq!(si.l_100km, 1.0);
    }

    #[test]
    fn scales_are_ignored_entirely() {
        let si = Si::<i32>::with_scales(Scales {
            length: 100,
            ..Scales::default()
        });
        assert_eq!(si.meter, 1);
        assert_eq!(si.kilogram, 1);
    }
}
