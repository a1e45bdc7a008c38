use std::fmt;
use std::ops::{Add, Sub};

/// `Number` is implemented by the primitive numeric types that a [Range][crate::Range] can be
/// built over: all the integer types up to 64 bits (plus `isize` and `usize`) and `f32`/`f64`.
///
/// Values of a sequence are calculated directly as `start + step * k`, and that arithmetic is
/// checked for integers, so walking a sequence can never overflow or accumulate rounding error.
pub trait Number:
    Copy
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
{
    /// The additive identity, the default `start` of a range
    const ZERO: Self;
    /// The default `step` of a range
    const ONE: Self;

    /// Return `true` if this value is not a number (only possible for floats)
    fn is_nan(self) -> bool;

    /// Return `true` if this value is neither infinite nor NaN
    fn is_finite(self) -> bool;

    /// Calculate `self + step * count` directly, returning `None` if it cannot be represented
    fn offset(self, step: Self, count: usize) -> Option<Self>;

    /// The number of values `start + k*step` that are less than `stop`.
    ///
    /// Returns `Some(0)` if `start >= stop` or `step` is not positive, and `None` if the count
    /// does not fit in a `usize` (which includes an infinite `stop`)
    fn steps(start: Self, stop: Self, step: Self) -> Option<usize>;

    /// Return `true` if `value` is `start + k*step` for some whole `k >= 0`
    fn on_step(start: Self, step: Self, value: Self) -> bool;

    /// Convert to a `f64`, losing precision for very large integers
    fn to_f64(self) -> f64;
}

macro_rules! integer_number {
    ($($t:ty)*) => {$(
        impl Number for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            fn is_nan(self) -> bool {
                false
            }

            fn is_finite(self) -> bool {
                true
            }

            fn offset(self, step: Self, count: usize) -> Option<Self> {
                let count = i128::try_from(count).ok()?;
                let value = (self as i128).checked_add((step as i128).checked_mul(count)?)?;
                Self::try_from(value).ok()
            }

            fn steps(start: Self, stop: Self, step: Self) -> Option<usize> {
                if start >= stop || step <= Self::ZERO {
                    return Some(0);
                }

                // i128 holds the span between any two 64 bit values
                let span = stop as i128 - start as i128;
                let step = step as i128;
                usize::try_from((span + step - 1) / step).ok()
            }

            fn on_step(start: Self, step: Self, value: Self) -> bool {
                let offset = value as i128 - start as i128;
                let step = step as i128;
                step != 0 && offset >= 0 && offset % step == 0
            }

            #[allow(clippy::cast_precision_loss)]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

macro_rules! float_number {
    ($($t:ty)*) => {$(
        impl Number for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            fn is_nan(self) -> bool {
                <$t>::is_nan(self)
            }

            fn is_finite(self) -> bool {
                <$t>::is_finite(self)
            }

            #[allow(clippy::cast_precision_loss)]
            fn offset(self, step: Self, count: usize) -> Option<Self> {
                let value = self + step * count as $t;
                if value.is_finite() {
                    Some(value)
                } else {
                    None
                }
            }

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
            fn steps(start: Self, stop: Self, step: Self) -> Option<usize> {
                if !(start < stop) || !(step > 0.0) {
                    return Some(0);
                }

                let estimate = ((stop - start) / step).ceil();
                if !(estimate.is_finite() && estimate < usize::MAX as $t) {
                    return None;
                }

                // the division can be off by one from the values the cursor produces
                let mut count = estimate as usize;
                while count > 0 && start + step * (count - 1) as $t >= stop {
                    count -= 1;
                }
                while start + step * count as $t < stop {
                    count += 1;
                }
                Some(count)
            }

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
            fn on_step(start: Self, step: Self, value: Self) -> bool {
                let index = ((value - start) / step).round();
                index >= 0.0
                    && index < usize::MAX as $t
                    && start.offset(step, index as usize) == Some(value)
            }

            fn to_f64(self) -> f64 {
                f64::from(self)
            }
        }
    )*};
}

integer_number!(i8 i16 i32 i64 isize u8 u16 u32 u64 usize);
float_number!(f32 f64);
