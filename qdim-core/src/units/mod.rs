//! Constant bundles built from per-dimension scale parameters.
//!
//! Bundles are plain immutable records of named unit constants. Construction
//! is functional and ordered: the SI bundle is built first from a
//! [`si::Scales`] record, and every other bundle derives its constants from a
//! borrowed [`si::Si`]. Nothing is mutated after construction.
//!
//! # Modules
//!
//! - [`si`]: scales, base units, decimal multipliers, derived constants.
//! - [`imperial`]: lengths, forces, volumes, and fuel economy over SI.
//! - [`us`]: US customary overrides on top of the imperial bundle.
//! - [`electrical`]: volt, coulomb, farad, ohm, siemens, weber, henry.
//! - [`binary`]: 1024-based prefixes, bit rates, and byte sizes.

pub mod binary;
pub mod electrical;
pub mod imperial;
pub mod si;
pub mod us;
