//! Scalar representations a quantity can wrap.

use core::fmt;
use core::ops::Sub;

use num_traits::{AsPrimitive, One, Zero};

use crate::macros::impl_rep;

/// Numeric types usable as the stored scalar of a quantity.
///
/// Multiplicative operators compute in a wide `f64` lane and narrow the result
/// back with [`Rep::from_wide`], which has `as`-cast semantics. That keeps
/// fractional unit definitions meaningful for integer representations: the
/// truncation happens once, on the finished product, not on each factor.
///
/// Implemented for every primitive float and integer type. The trait is not
/// sealed; a custom scalar only has to be `Copy`, ordered, and convertible
/// through the wide lane.
///
/// # Examples
///
/// ```rust
/// use qdim_core::Rep;
///
/// assert_eq!(<i32 as Rep>::from_wide(1609.343), 1609);
/// assert_eq!(42u16.widen(), 42.0);
/// ```
pub trait Rep:
    Copy
    + PartialOrd
    + Zero
    + One
    + Sub<Output = Self>
    + AsPrimitive<Self>
    + fmt::Debug
    + fmt::Display
    + 'static
{
    /// Widens the scalar into the `f64` computation lane.
    fn widen(self) -> f64;

    /// Narrows a wide result back into this representation with `as`-cast
    /// semantics (saturating, truncating toward zero for integers).
    fn from_wide(wide: f64) -> Self;
}

impl_rep!(f64, f32, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
