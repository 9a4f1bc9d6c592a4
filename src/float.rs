use std::{fmt::Debug, str::FromStr};

/// Trait for floating-point types, so that geometry can be generic over {f32, f64}.
///
/// # Notes
///
/// * Only intended to be implemented on primitive floating-point types; parsers rely on
///   [FromStr] accepting the usual decimal & exponent notations.
pub trait Float:
    num_traits::Float
    + nalgebra::Scalar
    + nalgebra::SimdPartialOrd
    + std::ops::AddAssign
    + std::ops::SubAssign
    + FromStr
    + Debug
    + Copy
    + Send
    + Sync
{
    /// `0`
    const ZERO: Self;
    /// `1`
    const ONE: Self;
    /// `2`
    const TWO: Self;

    /// Convert from an `f64`, rounding to the nearest representable value.
    fn from_f64(v: f64) -> Self;
}

macro_rules! impl_float {
    ($($Real:ty),+) => {$(
        impl Float for $Real {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;

            #[inline]
            fn from_f64(v: f64) -> Self {
                v as Self
            }
        }
    )+};
}

impl_float!(f32, f64);
