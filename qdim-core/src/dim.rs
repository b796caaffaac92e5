//! Type-level dimension exponent tuples.
//!
//! Every quantity carries a tuple of seven integer exponents
//! `(m, l, t, i, k, n, j)` covering mass, length, time, electric current,
//! temperature, amount of matter, and luminous intensity. The tuple lives
//! entirely in the type system: it is a seven-element [`typenum`] type array
//! whose elements implement [`typenum::Integer`], so exponent bookkeeping is
//! element-wise type arithmetic and costs nothing at runtime.
//!
//! [`Dim`] builds a tuple from seven `typenum` integers; the aliases below
//! name the tuples of the conventional base and derived dimensions.
//! Quantity-level aliases over these tuples (`Mass<R>`, `Force<R>`, …) live at
//! the crate root.
//!
//! # Examples
//!
//! ```rust
//! use qdim_core::{dim, Quantity};
//!
//! let pressure: Quantity<dim::Pressure> = Quantity::new(101_325.0);
//! assert_eq!(pressure.scalar(), 101_325.0);
//! ```
//!
//! Custom tuples are spelled with `typenum` integers directly:
//!
//! ```rust
//! use qdim_core::{dim::Dim, Quantity};
//! use typenum::{N2, P1, Z0};
//!
//! // Surface tension: mass/time², (1, 0, -2, 0, 0, 0, 0).
//! type SurfaceTension = Quantity<Dim<P1, Z0, N2, Z0, Z0, Z0, Z0>>;
//! let gamma = SurfaceTension::new(0.0728);
//! assert!(gamma.scalar() > 0.0);
//! ```

use typenum::{ATerm, Diff, Negate, Sum, TArr, P1, Z0};

/// Builds the exponent tuple `(m, l, t, i, k, n, j)` from seven
/// [`typenum::Integer`]s.
///
/// The tuple is a nested [`TArr`]; `typenum` supplies element-wise `Add`,
/// `Sub`, and `Neg` over it, which is what the quantity operators lean on.
pub type Dim<Ma, Le, Ti, Cu, Te, Am, Lu> =
    TArr<Ma, TArr<Le, TArr<Ti, TArr<Cu, TArr<Te, TArr<Am, TArr<Lu, ATerm>>>>>>>;

// ─────────────────────────────────────────────────────────────────────────────
// Base dimensions
// ─────────────────────────────────────────────────────────────────────────────

/// The dimensionless tuple `(0, 0, 0, 0, 0, 0, 0)`.
pub type Dimensionless = Dim<Z0, Z0, Z0, Z0, Z0, Z0, Z0>;

/// Mass `(1, 0, 0, 0, 0, 0, 0)`.
pub type Mass = Dim<P1, Z0, Z0, Z0, Z0, Z0, Z0>;

/// Length `(0, 1, 0, 0, 0, 0, 0)`.
pub type Length = Dim<Z0, P1, Z0, Z0, Z0, Z0, Z0>;

/// Time `(0, 0, 1, 0, 0, 0, 0)`.
pub type Time = Dim<Z0, Z0, P1, Z0, Z0, Z0, Z0>;

/// Electric current `(0, 0, 0, 1, 0, 0, 0)`.
pub type Current = Dim<Z0, Z0, Z0, P1, Z0, Z0, Z0>;

/// Thermodynamic temperature `(0, 0, 0, 0, 1, 0, 0)`.
pub type Temperature = Dim<Z0, Z0, Z0, Z0, P1, Z0, Z0>;

/// Amount of matter `(0, 0, 0, 0, 0, 1, 0)`.
pub type Matter = Dim<Z0, Z0, Z0, Z0, Z0, P1, Z0>;

/// Luminous intensity `(0, 0, 0, 0, 0, 0, 1)`.
pub type Luminance = Dim<Z0, Z0, Z0, Z0, Z0, Z0, P1>;

// ─────────────────────────────────────────────────────────────────────────────
// Derived dimensions, composed element-wise from the bases
// ─────────────────────────────────────────────────────────────────────────────

/// Area `(0, 2, 0, 0, 0, 0, 0)`.
pub type Area = Sum<Length, Length>;

/// Volume `(0, 3, 0, 0, 0, 0, 0)`.
pub type Volume = Sum<Area, Length>;

/// Velocity `(0, 1, -1, 0, 0, 0, 0)`.
pub type Velocity = Diff<Length, Time>;

/// Acceleration `(0, 1, -2, 0, 0, 0, 0)`.
pub type Acceleration = Diff<Velocity, Time>;

/// Force `(1, 1, -2, 0, 0, 0, 0)`.
pub type Force = Sum<Mass, Acceleration>;

/// Pressure `(1, -1, -2, 0, 0, 0, 0)`.
pub type Pressure = Diff<Force, Area>;

/// Energy `(1, 2, -2, 0, 0, 0, 0)`.
pub type Energy = Sum<Force, Length>;

/// Torque `(1, 2, -2, 0, 0, 0, 0)`. Same tuple as [`Energy`]; the algebra
/// does not tell them apart.
pub type Torque = Energy;

/// Power `(1, 2, -3, 0, 0, 0, 0)`.
pub type Power = Diff<Energy, Time>;

/// Frequency `(0, 0, -1, 0, 0, 0, 0)`.
pub type Frequency = Negate<Time>;

/// Volumetric flow rate `(0, 3, -1, 0, 0, 0, 0)`.
pub type Flowrate = Diff<Volume, Time>;

/// Electric charge `(0, 0, 1, 1, 0, 0, 0)`.
pub type Charge = Sum<Current, Time>;

/// Electric potential `(1, 2, -3, -1, 0, 0, 0)`.
pub type ElecPotential = Diff<Power, Current>;

/// Capacitance `(1, 2, -4, -2, 0, 0, 0)`.
pub type Capacitance = Diff<ElecPotential, Charge>;

/// Electrical resistance `(1, 2, -3, -2, 0, 0, 0)`.
pub type Resistance = Diff<ElecPotential, Current>;

/// Electrical conductance `(-1, -2, 3, 2, 0, 0, 0)`.
pub type Conductance = Negate<Resistance>;

/// Magnetic flux `(1, 2, -2, -1, 0, 0, 0)`.
pub type MagneticFlux = Sum<ElecPotential, Time>;

/// Inductance `(1, 2, -2, -2, 0, 0, 0)`.
pub type Inductance = Diff<MagneticFlux, Current>;

/// Per-area density `(0, -2, 0, 0, 0, 0, 0)`.
pub type Density = Negate<Area>;

/// Mileage `(0, -2, 0, 0, 0, 0, 0)`. Same tuple as [`Density`] (both are
/// length⁻²); the algebra does not tell them apart.
pub type Mileage = Density;

/// Efficiency `(0, 2, 0, 0, 0, 0, 0)`. Same tuple as [`Area`].
pub type Efficiency = Area;

/// Mass consumption rate `(1, 0, -1, 0, 0, 0, 0)`.
pub type Consumption = Diff<Mass, Time>;

/// Specific consumption `(0, -1, 1, 0, 0, 0, 0)`.
pub type SpecificConsumption = Diff<Time, Length>;
