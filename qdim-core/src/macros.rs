//! Internal macros that stamp out per-primitive impl families.
//!
//! Coherence rules out blanket impls over "any numeric type" next to the
//! dimensional operators, so the scalar-facing surface is generated once per
//! primitive instead. Call sites must have the relevant `core::ops` traits,
//! [`crate::Quantity`], and [`crate::Rep`] in scope.

/// Implements [`crate::Rep`] for a list of primitive numeric types.
macro_rules! impl_rep {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Rep for $t {
                #[inline]
                fn widen(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_wide(wide: f64) -> Self {
                    wide as $t
                }
            }
        )+
    };
}

/// Implements the scalar channel (`q * s`, `q / s`, `q *= s`, `q /= s`) for a
/// list of primitive right-hand types. The dimension tuple is preserved; the
/// product is computed in the wide lane and narrowed back to `R`.
macro_rules! impl_scalar_ops {
    ($($s:ty),+ $(,)?) => {
        $(
            impl<E, R: Rep> Mul<$s> for Quantity<E, R> {
                type Output = Quantity<E, R>;

                #[inline]
                fn mul(self, rhs: $s) -> Quantity<E, R> {
                    Quantity::new(R::from_wide(self.0.widen() * rhs.widen()))
                }
            }

            impl<E, R: Rep> Div<$s> for Quantity<E, R> {
                type Output = Quantity<E, R>;

                #[inline]
                fn div(self, rhs: $s) -> Quantity<E, R> {
                    Quantity::new(R::from_wide(self.0.widen() / rhs.widen()))
                }
            }

            impl<E, R: Rep> MulAssign<$s> for Quantity<E, R> {
                #[inline]
                fn mul_assign(&mut self, rhs: $s) {
                    self.0 = R::from_wide(self.0.widen() * rhs.widen());
                }
            }

            impl<E, R: Rep> DivAssign<$s> for Quantity<E, R> {
                #[inline]
                fn div_assign(&mut self, rhs: $s) {
                    self.0 = R::from_wide(self.0.widen() / rhs.widen());
                }
            }
        )+
    };
}

/// Implements the dimensionless privileges against a list of primitive
/// scalar types: implicit construction from a bare scalar, conversion back
/// into a bare scalar, and direct comparison with one.
macro_rules! impl_dimensionless_bridge {
    ($($s:ty),+ $(,)?) => {
        $(
            impl<R: Rep> From<$s> for Quantity<dim::Dimensionless, R>
            where
                $s: AsPrimitive<R>,
            {
                #[inline]
                fn from(scalar: $s) -> Self {
                    Quantity::new(scalar.as_())
                }
            }

            impl From<Quantity<dim::Dimensionless, $s>> for $s {
                #[inline]
                fn from(quantity: Quantity<dim::Dimensionless, $s>) -> $s {
                    quantity.0
                }
            }

            impl PartialEq<$s> for Quantity<dim::Dimensionless, $s> {
                #[inline]
                fn eq(&self, other: &$s) -> bool {
                    self.0 == *other
                }
            }

            impl PartialOrd<$s> for Quantity<dim::Dimensionless, $s> {
                #[inline]
                fn partial_cmp(&self, other: &$s) -> Option<Ordering> {
                    self.0.partial_cmp(other)
                }
            }
        )+
    };
}

/// Declares the named dimension aliases. Each entry expands to
/// `Quantity<$dim, R>` in the checked build and to the bare representation
/// `R` when the `unchecked` feature elides dimension tracking.
macro_rules! dimension_aliases {
    ($($(#[$meta:meta])* $name:ident => $dim:ty;)+) => {
        $(
            $(#[$meta])*
            #[cfg(not(feature = "unchecked"))]
            pub type $name<R = f64> = Quantity<$dim, R>;

            $(#[$meta])*
            #[cfg(feature = "unchecked")]
            pub type $name<R = f64> = R;
        )+
    };
}

pub(crate) use dimension_aliases;
pub(crate) use impl_dimensionless_bridge;
pub(crate) use impl_rep;
pub(crate) use impl_scalar_ops;
