// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

/// A trait for types that widen into the common `u128` representation by value.
///
/// The conversion is a plain `as` cast: non-negative values map to their exact
/// mathematical value, while negative values reinterpret through sign
/// extension. Callers that need the exact-value guarantee must establish
/// non-negativity first; the validated operations in this crate always do.
///
/// # Examples
///
/// ```rust
/// # use plimsoll::num::repr::AsU128Lossy;
/// assert_eq!(42u8.as_u128_lossy(), 42u128);
/// assert_eq!(42i64.as_u128_lossy(), 42u128);
/// assert_eq!((-1i8).as_u128_lossy(), u128::MAX); // Sign extension, not a value.
/// ```
pub trait AsU128Lossy: Sized {
    /// Widens `self` to `u128` by value, reinterpreting negative values.
    fn as_u128_lossy(self) -> u128;
}

/// A trait for types that narrow from the common `u128` representation by value.
///
/// The conversion is a plain `as` cast and truncates out-of-range input.
/// Callers must have established that the value fits the target type; the
/// validated operations in this crate always do.
///
/// # Examples
///
/// ```rust
/// # use plimsoll::num::repr::FromU128Lossy;
/// assert_eq!(<u8 as FromU128Lossy>::from_u128_lossy(200), 200u8);
/// assert_eq!(<i8 as FromU128Lossy>::from_u128_lossy(300), 44i8); // Truncation.
/// ```
pub trait FromU128Lossy: Sized {
    /// Narrows `v` to `Self` by value, truncating out-of-range input.
    fn from_u128_lossy(v: u128) -> Self;
}

macro_rules! as_u128_impl_val {
    ($t:ty) => {
        impl AsU128Lossy for $t {
            #[inline(always)]
            fn as_u128_lossy(self) -> u128 {
                self as u128
            }
        }
    };
}

macro_rules! from_u128_impl_val {
    ($t:ty) => {
        impl FromU128Lossy for $t {
            #[inline(always)]
            fn from_u128_lossy(v: u128) -> $t {
                v as $t
            }
        }
    };
}

as_u128_impl_val!(u8);
as_u128_impl_val!(u16);
as_u128_impl_val!(u32);
as_u128_impl_val!(u64);
as_u128_impl_val!(usize);
as_u128_impl_val!(u128);

as_u128_impl_val!(i8);
as_u128_impl_val!(i16);
as_u128_impl_val!(i32);
as_u128_impl_val!(i64);
as_u128_impl_val!(isize);
as_u128_impl_val!(i128);

from_u128_impl_val!(u8);
from_u128_impl_val!(u16);
from_u128_impl_val!(u32);
from_u128_impl_val!(u64);
from_u128_impl_val!(usize);
from_u128_impl_val!(u128);

from_u128_impl_val!(i8);
from_u128_impl_val!(i16);
from_u128_impl_val!(i32);
from_u128_impl_val!(i64);
from_u128_impl_val!(isize);
from_u128_impl_val!(i128);
