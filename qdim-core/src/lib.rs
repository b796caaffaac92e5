//! Core algebra for compile-time dimensional analysis.
//!
//! `qdim-core` tags every scalar with a type-level tuple of seven dimension
//! exponents (mass, length, time, current, temperature, matter, luminous
//! intensity). Adding metres to seconds, comparing a force with a pressure,
//! or handing a bare number to a dimensioned variable is a compile error; at
//! runtime a quantity is exactly one scalar, and the operators compile down
//! to plain arithmetic.
//!
//! Most users should depend on `qdim` (the facade crate) unless they need
//! direct access to these primitives.
//!
//! # What this crate solves
//!
//! - **Dimension errors caught at build time.** The exponent tuple lives in
//!   the type; mismatches never reach a running program.
//! - **Zero-cost checking.** No unit strings, no registries, no branching.
//!   Every operator is `#[inline]` scalar arithmetic.
//! - **Any numeric representation.** Quantities are generic over [`Rep`];
//!   integer bundles use per-dimension scales to keep sub-unit precision.
//! - **Ready-made constants.** Scaled SI, imperial, US, electrical, and
//!   binary bundles, built functionally from a handful of scale parameters.
//!
//! # What this crate does not try to solve
//!
//! - **Affine units.** Celsius and Fahrenheit offsets break the purely
//!   multiplicative algebra (`2 · °C` has no meaning) and are excluded.
//! - **Unit names at runtime.** The formatter prints exponent tuples, not
//!   symbols; pretty-printing belongs to the caller.
//! - **Numeric robustness.** Overflow, division by zero, and floating-point
//!   special values behave exactly as they do in the representation type.
//!
//! # Quick start
//!
//! ```rust
//! use qdim_core::{Si, Velocity};
//!
//! let si = Si::new();
//!
//! let distance = si.kilo * si.meter * 12;
//! let elapsed = si.minute * 8;
//! let pace: Velocity = distance / elapsed;
//!
//! assert!((f64::from(pace / si.km_h) - 90.0).abs() < 1e-9);
//! ```
//!
//! Dimension mismatches never survive type checking:
//!
//! ```compile_fail
//! use qdim_core::{Length, Time};
//!
//! let d = Length::new(5.0);
//! let t = Time::new(2.0);
//! let nonsense = d + t;
//! ```
//!
//! # `no_std`
//!
//! The crate is `no_std` by default when the `std` feature is disabled; the
//! only thing `std` is used for is `f64::powi` in [`Quantity::powi`], which
//! falls back to `libm` otherwise. No allocation anywhere.
//!
//! # Feature flags
//!
//! - `std` *(default)*: use the standard library's float intrinsics.
//! - `serde`: serialize quantities transparently as their scalar, plus the
//!   [`serde_with_dim`] helpers for self-describing payloads.
//! - `unchecked`: collapse every dimension alias to the bare representation
//!   and every bundle constant to one. All checking is elided; this exists
//!   for benchmarking against raw arithmetic and for porting legacy code,
//!   and is **not** the default.
//!
//! # Panics and errors
//!
//! The algebra itself produces no runtime errors: every dimensional mistake
//! is a compile failure. Arithmetic edge cases (overflow, division by zero,
//! NaN) are inherited from the representation type unchanged. Fractional
//! unit constants applied to integer representations are narrowed with one
//! deliberate `as`-style cast per result; see [`Rep::from_wide`].
//!
//! # SemVer and stability
//!
//! Pre-1.0: minor versions may adjust trait bounds and bundle contents.
//! The exponent order `(m, l, t, i, k, n, j)` and the Debug format are
//! stable.

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ────────────────────────────────────────────────────────────────────────────
// Modules
// ────────────────────────────────────────────────────────────────────────────

mod alias;
pub mod dim;
mod macros;
mod quantity;
mod rep;
pub mod units;

// ────────────────────────────────────────────────────────────────────────────
// Re-exports
// ────────────────────────────────────────────────────────────────────────────

pub use alias::*;
#[cfg(feature = "serde")]
pub use quantity::serde_with_dim;
pub use quantity::Quantity;
pub use rep::Rep;
pub use typenum;
pub use units::binary::Binary;
pub use units::electrical::Electrical;
pub use units::imperial::Imperial;
pub use units::si::{Scales, Si};
pub use units::us::Us;
