//! Strongly typed physical quantities with compile-time dimension checking.
//!
//! `qdim` is the user-facing crate in this workspace. It re-exports the full API from `qdim-core`: the
//! [`Quantity`] type, the dimension aliases (`Length`, `Force`, `Mileage`, …) and the predefined unit
//! bundles (`Si`, `Imperial`, `Us`, `Electrical`, `Binary`).
//!
//! The core idea is: a value is always a `Quantity<E, R>`, where `E` is a type-level list of the seven
//! base-dimension exponents and `R` is the numeric representation. Dimensions live entirely in the type
//! system; at runtime a quantity is exactly one `R`.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add metres to seconds, or compare a force
//!   against a time).
//! - Tracks dimensions through arbitrary products and quotients: dividing a `Length` by a `Time`
//!   *is* a `Velocity`, with no conversion step.
//! - Makes units ordinary values: `imperial.mile` is just a `Length` holding 1609.34…, so unit
//!   conversion is plain arithmetic (`distance / imperial.mile`).
//! - Works with any numeric representation (`f64`, `f32`, the integer primitives, or your own type
//!   implementing [`Rep`]).
//!
//! # What this crate does not try to solve
//!
//! - Runtime (dynamic) dimensions: the exponent vector is fixed at compile time.
//! - Rational or fractional exponents; only integer powers of the seven base dimensions.
//! - Unit symbol printing or parsing; `Debug` shows the raw exponents and scalar.
//!
//! # Quick start
//!
//! Convert a length between unit systems:
//!
//! ```rust
//! use qdim::{Imperial, Si};
//!
//! let si = Si::default();
//! let imperial = Imperial::new(&si);
//!
//! let kilometre = si.kilo * si.meter;
//! let ratio = imperial.mile / kilometre;
//! assert!((f64::from(ratio) - 1.609344).abs() < 1e-6);
//! ```
//!
//! Compose derived quantities (velocity = length / time):
//!
//! ```rust
//! use qdim::{Si, Velocity};
//!
//! let si = Si::default();
//! let speed: Velocity = si.km_h * 90;
//! let metres_per_second = si.meter / si.second;
//! assert!((f64::from(speed / metres_per_second) - 25.0).abs() < 1e-12);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! A bare number carries no dimensions, so it cannot become a dimensioned quantity by assignment:
//!
//! ```compile_fail
//! use qdim::Length;
//!
//! let distance: Length = 5.0;
//! ```
//!
//! Sums require identical dimensions on both sides:
//!
//! ```compile_fail
//! use qdim::{Length, Time};
//!
//! let _ = Length::new(1.0) + Time::new(1.0);
//! ```
//!
//! So do comparisons:
//!
//! ```compile_fail
//! use qdim::{Length, Time};
//!
//! let _ = Length::new(1.0) < Time::new(1.0);
//! ```
//!
//! And a dimensioned quantity never converts back to a bare scalar implicitly; only dimensionless
//! quantities do:
//!
//! ```compile_fail
//! use qdim::Length;
//!
//! let speed: f64 = Length::new(1.0).into();
//! ```
//!
//! # Modules
//!
//! Unit bundles are grouped under modules (their structs are also re-exported at the crate root):
//!
//! - `qdim::si` (the seven SI base units, prefixes, and common derived units)
//! - `qdim::imperial` (miles, pounds, gallons, BTU, miles per gallon)
//! - `qdim::us` (US customary volumes layered over the imperial bundle)
//! - `qdim::electrical` (volts, ohms, farads, webers, henries)
//! - `qdim::binary` (binary prefixes, bytes, bit rates)
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `qdim-core`.
//! - `serde`: enables `serde` support for `Quantity`; plain serialization is the raw scalar only,
//!   while the `serde_with_dim` adapter also embeds the exponent vector.
//! - `unchecked`: collapses every dimension alias to its bare representation and every bundle
//!   constant to one. Arithmetic compiles to plain scalar maths and *none* of the type errors shown
//!   above are caught. Intended for release builds that want zero compile-time cost after the types
//!   have done their job in development.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! qdim = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! This crate does not define an error type and does not return `Result` from its operations.
//! Arithmetic follows the representation: `f64` obeys IEEE-754 (NaN and infinities propagate),
//! integer representations truncate toward zero and saturate at their bounds when a wide result is
//! narrowed back, as described on [`Rep`].
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub use qdim_core::*;

pub use qdim_core::units::binary;
pub use qdim_core::units::electrical;
pub use qdim_core::units::imperial;
pub use qdim_core::units::si;
pub use qdim_core::units::us;
