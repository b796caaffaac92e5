//! Binary-prefix constants, bit rates, and byte sizes.

use num_traits::One;

use crate::rep::Rep;
use crate::units::si::Si;
use crate::{Dimensionless, Frequency};

/// Binary constants built over an [`Si`] bundle.
///
/// The prefixes are binary on purpose: `k` is 1024, not the decimal kilo that
/// lives in the SI bundle. Counts inherit the SI `count` scale, so a scaled
/// integer bundle scales its bytes too.
///
/// # Examples
///
/// ```rust
/// use qdim_core::{Binary, Si};
///
/// let si = Si::new();
/// let bin = Binary::new(&si);
/// assert_eq!(f64::from(bin.kbyte / si.count), 8192.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Binary<R: Rep = f64> {
    /// 1024.
    pub k: Dimensionless<R>,
    /// IEC spelling of [`Binary::k`].
    pub kibi: Dimensionless<R>,
    /// 1024².
    pub m: Dimensionless<R>,
    /// IEC spelling of [`Binary::m`].
    pub mibi: Dimensionless<R>,
    /// 1024³.
    pub g: Dimensionless<R>,
    /// IEC spelling of [`Binary::g`].
    pub gibi: Dimensionless<R>,
    /// Bits per second.
    pub bps: Frequency<R>,
    /// Kilobits (1024 bits) per second.
    pub kbps: Frequency<R>,
    /// Megabits per second.
    pub mbps: Frequency<R>,
    /// Eight counted bits.
    pub byte: Dimensionless<R>,
    /// 1024 bytes.
    pub kbyte: Dimensionless<R>,
    /// 1024 kilobytes.
    pub mbyte: Dimensionless<R>,
}

impl<R: Rep> Binary<R> {
    /// Derives the binary constants from an already-built SI bundle.
    #[cfg(not(feature = "unchecked"))]
    pub fn new(base: &Si<R>) -> Self {
        let k = Dimensionless::one() * 1024;
        let kibi = k;
        let m = k * k;
        let mibi = m;
        let g = m * k;
        let gibi = g;
        let bps = base.count / base.second;
        let kbps = bps * k;
        let mbps = kbps * k;
        let byte = base.count * 8;
        let kbyte = byte * k;
        let mbyte = kbyte * k;

        Self {
            k,
            kibi,
            m,
            mibi,
            g,
            gibi,
            bps,
            kbps,
            mbps,
            byte,
            kbyte,
            mbyte,
        }
    }

    /// Builds the bundle with every constant collapsed to one.
    #[cfg(feature = "unchecked")]
    pub fn new(_base: &Si<R>) -> Self {
        let unit = R::one();
        Self {
            k: unit,
            kibi: unit,
            m: unit,
            mibi: unit,
            g: unit,
            gibi: unit,
            bps: unit,
            kbps: unit,
            mbps: unit,
            byte: unit,
            kbyte: unit,
            mbyte: unit,
        }
    }
}

#[cfg(all(test, not(feature = "unchecked")))]
mod tests {
    use super::*;

    #[test]
    fn prefixes_are_powers_of_1024() {
        let si = Si::<f64>::new();
        let bin = Binary::new(&si);
        assert_eq!(bin.k.scalar(), 1024.0);
        assert_eq!(bin.m.scalar(), 1024.0 * 1024.0);
        assert_eq!(bin.g.scalar(), 1024.0 * 1024.0 * 1024.0);
        assert_eq!(bin.kibi, bin.k);
        assert_eq!(bin.mibi, bin.m);
        assert_eq!(bin.gibi, bin.g);
    }

    #[test]
    fn byte_sizes_stack_from_the_count() {
        let si = Si::<f64>::new();
        let bin = Binary::new(&si);
        assert_eq!(f64::from(bin.byte / si.count), 8.0);
        assert_eq!(f64::from(bin.kbyte / si.count), 8192.0);
        assert_eq!(f64::from(bin.mbyte / si.count), 8192.0 * 1024.0);
    }

    #[test]
    fn bit_rates_scale_by_k() {
        let si = Si::<f64>::new();
        let bin = Binary::new(&si);
        assert_eq!(f64::from(bin.kbps / bin.bps), 1024.0);
        assert_eq!(f64::from(bin.mbps / bin.bps), 1024.0 * 1024.0);
    }

    #[test]
    fn integer_representations_hold_the_exact_powers() {
        let si = Si::<i32>::new();
        let bin = Binary::new(&si);
        assert_eq!(bin.k.scalar(), 1024);
        assert_eq!(bin.m.scalar(), 1_048_576);
        assert_eq!(bin.g.scalar(), 1_073_741_824);
        assert_eq!(bin.kbyte.scalar(), 8192);
    }

    #[test]
    fn count_scale_propagates_into_bytes() {
        let si = Si::<i64>::with_scales(crate::Scales {
            count: 4,
            ..crate::Scales::default()
        });
        let bin = Binary::new(&si);
        assert_eq!(bin.byte.scalar(), 32);
        assert_eq!(bin.kbyte.scalar(), 32_768);
        assert_eq!(bin.k.scalar(), 1024);
    }
}

#[cfg(all(test, feature = "unchecked"))]
mod unchecked_tests {
    use super::*;

    #[test]
    fn every_constant_collapses_to_one() {
        let si = Si::<f64>::new();
        let bin = Binary::new(&si);
        assert_eq!(bin.k, 1.0);
        assert_eq!(bin.byte, 1.0);
        assert_eq!(bin.mbps, 1.0);
    }
}
