//! The quantity type and its algebra.
//!
//! [`Quantity<E, R>`] stores a single scalar of representation `R` and tags it
//! with a type-level exponent tuple `E` (see [`crate::dim`]). Additive
//! operators and comparisons demand an equal tuple; multiplication and
//! division combine tuples element-wise in the type system. The only runtime
//! work is the scalar arithmetic itself.
//!
//! Multiplicative results are computed in a wide `f64` lane and narrowed back
//! to the left operand's representation with an explicit `as`-style cast (see
//! [`Rep::from_wide`]). That narrowing is deliberate: unit definitions carry
//! fractional constants, and integer-represented quantities should absorb
//! them with a single truncation on the finished product rather than reject
//! them outright.

use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{AsPrimitive, One, Zero};
use typenum::{Diff, Integer, Prod, Sum};

use crate::dim::{self, Dim};
use crate::macros::{impl_dimensionless_bridge, impl_scalar_ops};
use crate::rep::Rep;

/// A scalar tagged with a type-level dimension exponent tuple.
///
/// The tuple `E` is one of the [`crate::dim`] aliases (or any seven-element
/// `typenum` array built with [`Dim`]); `R` is the stored numeric type and
/// defaults to `f64`. A quantity is exactly as big as its scalar.
///
/// # Examples
///
/// ```rust
/// use qdim_core::{dim, Quantity};
///
/// let distance: Quantity<dim::Length> = Quantity::new(120.0);
/// let elapsed: Quantity<dim::Time> = Quantity::new(4.0);
/// let speed: Quantity<dim::Velocity> = distance / elapsed;
/// assert_eq!(speed.scalar(), 30.0);
/// ```
///
/// Mismatched tuples are rejected before the program runs:
///
/// ```compile_fail
/// use qdim_core::{dim, Quantity};
///
/// let distance: Quantity<dim::Length> = Quantity::new(120.0);
/// let elapsed: Quantity<dim::Time> = Quantity::new(4.0);
/// let nonsense = distance + elapsed;
/// ```
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Quantity<E, R = f64>(R, PhantomData<E>);

impl<E, R: Rep> Quantity<E, R> {
    /// Wraps a raw scalar as a quantity of dimension `E`.
    ///
    /// This is the one deliberate gate between bare numbers and the checked
    /// algebra; everything downstream preserves the tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use qdim_core::{dim, Quantity};
    ///
    /// const STEP: Quantity<dim::Time> = Quantity::new(0.25);
    /// assert_eq!(STEP.scalar(), 0.25);
    /// ```
    #[inline]
    pub const fn new(scalar: R) -> Self {
        Self(scalar, PhantomData)
    }

    /// Read-only access to the underlying scalar.
    #[inline]
    pub fn scalar(&self) -> R {
        self.0
    }

    /// Copies this quantity into another representation of the same
    /// dimension. The cast has `as` semantics, so narrowing truncates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use qdim_core::{dim, Quantity};
    ///
    /// let precise: Quantity<dim::Length, f64> = Quantity::new(1609.343);
    /// let coarse: Quantity<dim::Length, i32> = precise.to_rep();
    /// assert_eq!(coarse.scalar(), 1609);
    /// ```
    #[inline]
    pub fn to_rep<V>(self) -> Quantity<E, V>
    where
        V: Rep,
        R: AsPrimitive<V>,
    {
        Quantity::new(self.0.as_())
    }

    /// Raises the quantity to a static integer power, multiplying every
    /// exponent in the tuple by `K`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use qdim_core::{dim, Quantity};
    /// use typenum::{N1, P2};
    ///
    /// let side: Quantity<dim::Length> = Quantity::new(3.0);
    /// let area: Quantity<dim::Area> = side.powi::<P2>();
    /// assert_eq!(area.scalar(), 9.0);
    ///
    /// let period: Quantity<dim::Time> = Quantity::new(0.5);
    /// let rate: Quantity<dim::Frequency> = period.powi::<N1>();
    /// assert_eq!(rate.scalar(), 2.0);
    /// ```
    #[inline]
    pub fn powi<K>(self) -> Quantity<Prod<E, K>, R>
    where
        K: Integer,
        E: Mul<K>,
    {
        let wide = self.0.widen();
        #[cfg(feature = "std")]
        let raised = wide.powi(K::I32);
        #[cfg(not(feature = "std"))]
        let raised = libm::pow(wide, K::I32 as f64);
        Quantity::new(R::from_wide(raised))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Additive algebra (equal tuples only)
// ────────────────────────────────────────────────────────────────────────────

impl<E, R, V> Add<Quantity<E, V>> for Quantity<E, R>
where
    R: Rep,
    V: Rep + AsPrimitive<R>,
{
    type Output = Quantity<E, R>;

    #[inline]
    fn add(self, rhs: Quantity<E, V>) -> Quantity<E, R> {
        Quantity::new(self.0 + rhs.0.as_())
    }
}

impl<E, R, V> AddAssign<Quantity<E, V>> for Quantity<E, R>
where
    R: Rep,
    V: Rep + AsPrimitive<R>,
{
    #[inline]
    fn add_assign(&mut self, rhs: Quantity<E, V>) {
        self.0 = self.0 + rhs.0.as_();
    }
}

impl<E, R, V> Sub<Quantity<E, V>> for Quantity<E, R>
where
    R: Rep,
    V: Rep + AsPrimitive<R>,
{
    type Output = Quantity<E, R>;

    #[inline]
    fn sub(self, rhs: Quantity<E, V>) -> Quantity<E, R> {
        Quantity::new(self.0 - rhs.0.as_())
    }
}

impl<E, R, V> SubAssign<Quantity<E, V>> for Quantity<E, R>
where
    R: Rep,
    V: Rep + AsPrimitive<R>,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Quantity<E, V>) {
        self.0 = self.0 - rhs.0.as_();
    }
}

impl<E, R> Neg for Quantity<E, R>
where
    R: Rep + Neg<Output = R>,
{
    type Output = Quantity<E, R>;

    #[inline]
    fn neg(self) -> Quantity<E, R> {
        Quantity::new(-self.0)
    }
}

impl<E, R: Rep> Zero for Quantity<E, R> {
    #[inline]
    fn zero() -> Self {
        Quantity::new(R::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Dimensional multiplication and division
// ────────────────────────────────────────────────────────────────────────────

impl<El, Er, R, V> Mul<Quantity<Er, V>> for Quantity<El, R>
where
    El: Add<Er>,
    R: Rep,
    V: Rep,
{
    type Output = Quantity<Sum<El, Er>, R>;

    #[inline]
    fn mul(self, rhs: Quantity<Er, V>) -> Self::Output {
        Quantity::new(R::from_wide(self.0.widen() * rhs.0.widen()))
    }
}

impl<El, Er, R, V> Div<Quantity<Er, V>> for Quantity<El, R>
where
    El: Sub<Er>,
    R: Rep,
    V: Rep,
{
    type Output = Quantity<Diff<El, Er>, R>;

    #[inline]
    fn div(self, rhs: Quantity<Er, V>) -> Self::Output {
        Quantity::new(R::from_wide(self.0.widen() / rhs.0.widen()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scalar channel (dimension preserved; scalar stays on the right)
// ────────────────────────────────────────────────────────────────────────────

impl_scalar_ops!(f64, f32, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<E, R, V> MulAssign<Quantity<dim::Dimensionless, V>> for Quantity<E, R>
where
    R: Rep,
    V: Rep,
{
    #[inline]
    fn mul_assign(&mut self, rhs: Quantity<dim::Dimensionless, V>) {
        self.0 = R::from_wide(self.0.widen() * rhs.0.widen());
    }
}

impl<E, R, V> DivAssign<Quantity<dim::Dimensionless, V>> for Quantity<E, R>
where
    R: Rep,
    V: Rep,
{
    #[inline]
    fn div_assign(&mut self, rhs: Quantity<dim::Dimensionless, V>) {
        self.0 = R::from_wide(self.0.widen() / rhs.0.widen());
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Dimensionless privileges
// ────────────────────────────────────────────────────────────────────────────

impl_dimensionless_bridge!(f64, f32, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<R: Rep> Default for Quantity<dim::Dimensionless, R> {
    /// Defaults to one, so named dimensionless constants act as identity
    /// multipliers. Dimensioned quantities have no default at all.
    #[inline]
    fn default() -> Self {
        Quantity::new(R::one())
    }
}

impl<R: Rep> One for Quantity<dim::Dimensionless, R> {
    #[inline]
    fn one() -> Self {
        Quantity::new(R::one())
    }
}

impl<R: Rep> fmt::Display for Quantity<dim::Dimensionless, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Comparisons (equal tuples, equal representations)
// ────────────────────────────────────────────────────────────────────────────

impl<E, R: Rep> PartialEq for Quantity<E, R> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<E, R: Rep> PartialOrd for Quantity<E, R> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Formatting
// ────────────────────────────────────────────────────────────────────────────

impl<Ma, Le, Ti, Cu, Te, Am, Lu, R> fmt::Debug for Quantity<Dim<Ma, Le, Ti, Cu, Te, Am, Lu>, R>
where
    Ma: Integer,
    Le: Integer,
    Ti: Integer,
    Cu: Integer,
    Te: Integer,
    Am: Integer,
    Lu: Integer,
    R: Rep,
{
    /// Emits `<m, l, t, i, k, n, j, T>` with each exponent right-aligned in
    /// two columns, then the scalar right-aligned in thirteen. A dimensionless
    /// quantity renders the exponent block as spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let exponents = [
            Ma::I32,
            Le::I32,
            Ti::I32,
            Cu::I32,
            Te::I32,
            Am::I32,
            Lu::I32,
        ];
        if exponents == [0; 7] {
            write!(f, "<{:20}, T>{:>13}", "", self.0)
        } else {
            write!(
                f,
                "<{:>2},{:>2},{:>2},{:>2},{:>2},{:>2},{:>2}, T>{:>13}",
                exponents[0],
                exponents[1],
                exponents[2],
                exponents[3],
                exponents[4],
                exponents[5],
                exponents[6],
                self.0
            )
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Serde support
// ────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<E, R> serde::Serialize for Quantity<E, R>
where
    R: Rep + serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, E, R> serde::Deserialize<'de> for Quantity<E, R>
where
    R: Rep + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        R::deserialize(deserializer).map(Quantity::new)
    }
}

/// Serde helpers that tag the scalar with its dimension exponents.
///
/// By default a [`Quantity`] serializes transparently as its bare scalar. For
/// payloads that should be self-describing, annotate the field with
/// `#[serde(with = "qdim_core::serde_with_dim")]`: serialization then writes
/// `{ "scalar": …, "dim": [m, l, t, i, k, n, j] }`, and deserialization
/// refuses a payload whose `dim` array does not match the field's static
/// exponents.
///
/// # Examples
///
/// ```rust
/// use qdim_core::{dim, Quantity};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Reading {
///     #[serde(with = "qdim_core::serde_with_dim")]
///     distance: Quantity<dim::Length>,
/// }
///
/// let json = r#"{"distance":{"scalar":3.5,"dim":[0,1,0,0,0,0,0]}}"#;
/// let reading: Reading = serde_json::from_str(json).unwrap();
/// assert_eq!(reading.distance.scalar(), 3.5);
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_dim {
    use core::fmt;
    use core::marker::PhantomData;

    use serde::de::{self, MapAccess, SeqAccess, Visitor};
    use serde::ser::SerializeStruct;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use typenum::Integer;

    use super::Quantity;
    use crate::dim::Dim;
    use crate::rep::Rep;

    struct DimMismatch {
        expected: [i32; 7],
        found: [i32; 7],
    }

    impl fmt::Display for DimMismatch {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(
                f,
                "dimension mismatch: expected {:?}, found {:?}",
                self.expected, self.found
            )
        }
    }

    /// Serializes the quantity as a `{ scalar, dim }` struct.
    pub fn serialize<Ma, Le, Ti, Cu, Te, Am, Lu, R, S>(
        quantity: &Quantity<Dim<Ma, Le, Ti, Cu, Te, Am, Lu>, R>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        Ma: Integer,
        Le: Integer,
        Ti: Integer,
        Cu: Integer,
        Te: Integer,
        Am: Integer,
        Lu: Integer,
        R: Rep + Serialize,
        S: Serializer,
    {
        let dim = [
            Ma::I32,
            Le::I32,
            Ti::I32,
            Cu::I32,
            Te::I32,
            Am::I32,
            Lu::I32,
        ];
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("scalar", &quantity.scalar())?;
        state.serialize_field("dim", &dim)?;
        state.end()
    }

    /// Deserializes a `{ scalar, dim }` struct, verifying the exponents.
    pub fn deserialize<'de, Ma, Le, Ti, Cu, Te, Am, Lu, R, D>(
        deserializer: D,
    ) -> Result<Quantity<Dim<Ma, Le, Ti, Cu, Te, Am, Lu>, R>, D::Error>
    where
        Ma: Integer,
        Le: Integer,
        Ti: Integer,
        Cu: Integer,
        Te: Integer,
        Am: Integer,
        Lu: Integer,
        R: Rep + Deserialize<'de>,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Scalar,
            Dim,
        }

        struct QuantityVisitor<E, R> {
            marker: PhantomData<(E, R)>,
        }

        impl<'de, Ma, Le, Ti, Cu, Te, Am, Lu, R> Visitor<'de>
            for QuantityVisitor<Dim<Ma, Le, Ti, Cu, Te, Am, Lu>, R>
        where
            Ma: Integer,
            Le: Integer,
            Ti: Integer,
            Cu: Integer,
            Te: Integer,
            Am: Integer,
            Lu: Integer,
            R: Rep + Deserialize<'de>,
        {
            type Value = Quantity<Dim<Ma, Le, Ti, Cu, Te, Am, Lu>, R>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("struct Quantity with fields scalar and dim")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let scalar: R = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let found: [i32; 7] = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                check_dim::<Ma, Le, Ti, Cu, Te, Am, Lu, A::Error>(found)?;
                Ok(Quantity::new(scalar))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut scalar: Option<R> = None;
                let mut found: Option<[i32; 7]> = None;
                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Scalar => {
                            if scalar.is_some() {
                                return Err(de::Error::duplicate_field("scalar"));
                            }
                            scalar = Some(map.next_value()?);
                        }
                        Field::Dim => {
                            if found.is_some() {
                                return Err(de::Error::duplicate_field("dim"));
                            }
                            found = Some(map.next_value()?);
                        }
                    }
                }
                let scalar = scalar.ok_or_else(|| de::Error::missing_field("scalar"))?;
                let found = found.ok_or_else(|| de::Error::missing_field("dim"))?;
                check_dim::<Ma, Le, Ti, Cu, Te, Am, Lu, A::Error>(found)?;
                Ok(Quantity::new(scalar))
            }
        }

        fn check_dim<Ma, Le, Ti, Cu, Te, Am, Lu, E>(found: [i32; 7]) -> Result<(), E>
        where
            Ma: Integer,
            Le: Integer,
            Ti: Integer,
            Cu: Integer,
            Te: Integer,
            Am: Integer,
            Lu: Integer,
            E: de::Error,
        {
            let expected = [
                Ma::I32,
                Le::I32,
                Ti::I32,
                Cu::I32,
                Te::I32,
                Am::I32,
                Lu::I32,
            ];
            if found == expected {
                Ok(())
            } else {
                Err(E::custom(DimMismatch { expected, found }))
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["scalar", "dim"],
            QuantityVisitor {
                marker: PhantomData,
            },
        )
    }
}
