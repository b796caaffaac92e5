//! Named quantity aliases over the canonical dimension tuples.
//!
//! Each alias is `Quantity<E, R>` for a fixed tuple `E`, with `R` defaulting
//! to `f64`. With the `unchecked` feature enabled every alias collapses to the
//! bare representation instead, which elides all dimension tracking; that mode
//! exists for benchmarking against raw arithmetic and for porting legacy code
//! one module at a time.
//!
//! A few aliases intentionally share a tuple: `Torque` is `Energy`,
//! `Mileage` is `Density` (both length⁻²), and `Efficiency` is `Area`. The
//! type system does not tell them apart; the names are documentation.

#[cfg(not(feature = "unchecked"))]
use crate::dim;
use crate::macros::dimension_aliases;
#[cfg(not(feature = "unchecked"))]
use crate::quantity::Quantity;

dimension_aliases! {
    /// Dimensionless quantity `(0,0,0,0,0,0,0)`.
    Dimensionless => dim::Dimensionless;
    /// Mass `(1,0,0,0,0,0,0)`.
    Mass => dim::Mass;
    /// Length `(0,1,0,0,0,0,0)`.
    Length => dim::Length;
    /// Time `(0,0,1,0,0,0,0)`.
    Time => dim::Time;
    /// Electric current `(0,0,0,1,0,0,0)`.
    Current => dim::Current;
    /// Thermodynamic temperature `(0,0,0,0,1,0,0)`.
    Temperature => dim::Temperature;
    /// Amount of matter `(0,0,0,0,0,1,0)`.
    Matter => dim::Matter;
    /// Luminous intensity `(0,0,0,0,0,0,1)`.
    Luminance => dim::Luminance;
    /// Area `(0,2,0,0,0,0,0)`.
    Area => dim::Area;
    /// Volume `(0,3,0,0,0,0,0)`.
    Volume => dim::Volume;
    /// Velocity `(0,1,-1,0,0,0,0)`.
    Velocity => dim::Velocity;
    /// Acceleration `(0,1,-2,0,0,0,0)`.
    Acceleration => dim::Acceleration;
    /// Force `(1,1,-2,0,0,0,0)`.
    Force => dim::Force;
    /// Pressure `(1,-1,-2,0,0,0,0)`.
    Pressure => dim::Pressure;
    /// Energy `(1,2,-2,0,0,0,0)`.
    Energy => dim::Energy;
    /// Torque `(1,2,-2,0,0,0,0)`. Shares its tuple with [`Energy`].
    Torque => dim::Torque;
    /// Power `(1,2,-3,0,0,0,0)`.
    Power => dim::Power;
    /// Frequency `(0,0,-1,0,0,0,0)`.
    Frequency => dim::Frequency;
    /// Volumetric flow rate `(0,3,-1,0,0,0,0)`.
    Flowrate => dim::Flowrate;
    /// Electric charge `(0,0,1,1,0,0,0)`.
    Charge => dim::Charge;
    /// Electric potential `(1,2,-3,-1,0,0,0)`.
    ElecPotential => dim::ElecPotential;
    /// Capacitance `(1,2,-4,-2,0,0,0)`.
    Capacitance => dim::Capacitance;
    /// Electrical resistance `(1,2,-3,-2,0,0,0)`.
    Resistance => dim::Resistance;
    /// Electrical conductance `(-1,-2,3,2,0,0,0)`.
    Conductance => dim::Conductance;
    /// Magnetic flux `(1,2,-2,-1,0,0,0)`.
    MagneticFlux => dim::MagneticFlux;
    /// Inductance `(1,2,-2,-2,0,0,0)`.
    Inductance => dim::Inductance;
    /// Per-area density `(0,-2,0,0,0,0,0)`.
    Density => dim::Density;
    /// Mileage `(0,-2,0,0,0,0,0)`. Shares its tuple with [`Density`].
    Mileage => dim::Mileage;
    /// Efficiency `(0,2,0,0,0,0,0)`. Shares its tuple with [`Area`].
    Efficiency => dim::Efficiency;
    /// Mass consumption rate `(1,0,-1,0,0,0,0)`.
    Consumption => dim::Consumption;
    /// Specific consumption `(0,-1,1,0,0,0,0)`.
    SpecificConsumption => dim::SpecificConsumption;
}


#[cfg(all(test, feature = "unchecked"))]
mod unchecked_tests {
    use super::*;

    #[test]
    fn aliases_collapse_to_the_bare_representation() {
        let d: Length = 120.0;
        let t: Time = 4.0;
        let v: Velocity = d / t;
        assert_eq!(v, 30.0);
    }

    #[test]
    fn collapsed_aliases_honor_the_representation_parameter() {
        let n: Dimensionless<i64> = 42;
        assert_eq!(n + 1, 43);
    }
}
