use std::{fmt::{Debug, Display},
          str::FromStr};

use serde::Serialize;

/// Edge weight type usable by the CSR view and the MST engine.
/// `infinity()` is the sentinel for "not reached yet", so no valid weight may equal it.
pub trait Weight: Copy + PartialOrd + Debug + Display + FromStr + Serialize {
    fn zero() -> Self;

    fn infinity() -> Self;

    /// Finite, non-negative and strictly below `infinity()`
    fn is_valid(&self) -> bool;

    /// Conversion used when sampling random weights.
    /// Saturates at the largest valid weight of the type.
    fn from_u32(value: u32) -> Self;

    /// Widening conversion used for sums, which may lose precision but never overflows
    fn to_f64(&self) -> f64;
}

macro_rules! impl_weight_float {
    ($t:ty) => {
        impl Weight for $t {
            #[inline(always)]
            fn zero() -> Self {
                0.0
            }

            #[inline(always)]
            fn infinity() -> Self {
                <$t>::INFINITY
            }

            #[inline(always)]
            fn is_valid(&self) -> bool {
                self.is_finite() && *self >= 0.0
            }

            #[inline(always)]
            fn from_u32(value: u32) -> Self {
                value as $t
            }

            #[inline(always)]
            fn to_f64(&self) -> f64 {
                *self as f64
            }
        }
    };
}

macro_rules! impl_weight_int {
    ($t:ty) => {
        impl Weight for $t {
            #[inline(always)]
            fn zero() -> Self {
                0
            }

            #[inline(always)]
            fn infinity() -> Self {
                <$t>::MAX
            }

            #[inline(always)]
            fn is_valid(&self) -> bool {
                *self >= Self::zero() && *self != <$t>::MAX
            }

            #[inline(always)]
            fn from_u32(value: u32) -> Self {
                // MAX is the sentinel, so the largest valid weight is MAX - 1
                let max_valid = <$t>::MAX as i128 - 1;
                (value as i128).min(max_valid) as $t
            }

            #[inline(always)]
            fn to_f64(&self) -> f64 {
                *self as f64
            }
        }
    };
}

impl_weight_float!(f32);
impl_weight_float!(f64);
impl_weight_int!(u8);
impl_weight_int!(u16);
impl_weight_int!(u32);
impl_weight_int!(u64);
impl_weight_int!(usize);
impl_weight_int!(i8);
impl_weight_int!(i16);
impl_weight_int!(i32);
impl_weight_int!(i64);
impl_weight_int!(isize);
