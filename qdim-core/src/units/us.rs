//! US customary overrides on top of the imperial bundle.

use core::ops::Deref;

#[cfg(feature = "unchecked")]
use num_traits::One;
#[cfg(not(feature = "unchecked"))]
use num_traits::Zero;

use crate::rep::Rep;
use crate::units::imperial::Imperial;
use crate::units::si::Si;
use crate::{Mileage, Volume};

/// US customary constants; everything not overridden falls through to the
/// embedded [`Imperial`] bundle via `Deref`.
///
/// `us.mile` therefore resolves to the imperial mile, while `us.gallon`,
/// `us.quart`, `us.pint`, and `us.mpg` resolve to the US liquid measures. A
/// US pint is 16 US fluid ounces where the imperial pint holds 20 imperial
/// ones.
///
/// # Examples
///
/// ```rust
/// use qdim_core::{Imperial, Si, Us};
///
/// let si = Si::new();
/// let imp = Imperial::new(&si);
/// let us = Us::new(&si);
/// assert_eq!(us.mile, imp.mile);
/// let ratio = f64::from(us.gallon / imp.gallon);
/// assert!((ratio - 0.83267).abs() < 1e-5);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Us<R: Rep = f64> {
    /// The imperial bundle the US system inherits from.
    pub imperial: Imperial<R>,
    /// US liquid gallon.
    pub gallon: Volume<R>,
    /// US quart, a quarter gallon.
    pub quart: Volume<R>,
    /// US pint, half a quart.
    pub pint: Volume<R>,
    /// Miles per US gallon; zero when the gallon rounds to zero.
    pub mpg: Mileage<R>,
}

impl<R: Rep> Us<R> {
    /// Derives the US constants from an already-built SI bundle.
    #[cfg(not(feature = "unchecked"))]
    pub fn new(base: &Si<R>) -> Self {
        let imperial = Imperial::new(base);
        let gallon = base.meter * base.meter * base.meter * 3.785411784 / 1000;
        let quart = gallon / 4;
        let pint = quart / 2;
        let mpg = if gallon > Volume::zero() {
            imperial.mile / gallon
        } else {
            Mileage::zero()
        };

        Self {
            imperial,
            gallon,
            quart,
            pint,
            mpg,
        }
    }

    /// Builds the bundle with every constant collapsed to one.
    #[cfg(feature = "unchecked")]
    pub fn new(base: &Si<R>) -> Self {
        let unit = R::one();
        Self {
            imperial: Imperial::new(base),
            gallon: unit,
            quart: unit,
            pint: unit,
            mpg: unit,
        }
    }
}

impl<R: Rep> Deref for Us<R> {
    type Target = Imperial<R>;

    fn deref(&self) -> &Imperial<R> {
        &self.imperial
    }
}
