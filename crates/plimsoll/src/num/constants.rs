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

/// A trait for integer types that expose their maximum value widened to `u128`.
///
/// `u128` is wide enough to hold the maximum of every primitive integer type,
/// which makes it the common representation for compile-time bound arithmetic:
/// bounds of differently sized and differently signed types become directly
/// comparable without promotion surprises.
pub trait MaxAsU128 {
    /// The type's maximum value, widened to `u128`.
    const MAX_AS_U128: u128;
}

/// A trait for integer types that expose their signedness as a constant.
pub trait Signedness {
    /// Whether the implementing type is signed.
    const IS_SIGNED: bool;
}

/// A trait for integer types that expose their number of value bits.
///
/// This counts the binary digits available for the magnitude, excluding the
/// sign bit of signed types: `u8` has 8, `i8` has 7. It mirrors what a
/// radix-2 `numeric_limits`-style `digits` would report and drives the
/// compile-time decision of whether a value of this type can always be
/// represented exactly in a given floating-point format.
pub trait Digits {
    /// The number of non-sign binary digits of the implementing type.
    const DIGITS: u32;
}

/// A trait for floating-point types that expose their mantissa width.
pub trait FloatDigits {
    /// The number of binary digits in the significand, including the
    /// implicit leading bit (24 for `f32`, 53 for `f64`).
    const MANTISSA_DIGITS: u32;
}

macro_rules! impl_const_for {
    ($trait_name:ident, $const_name:ident, $const_ty:ty, $value:expr, $t:ty) => {
        impl $trait_name for $t {
            const $const_name: $const_ty = $value;
        }
    };
}

macro_rules! impl_signed_facts_for {
    ($t:ty) => {
        impl_const_for!(MaxAsU128, MAX_AS_U128, u128, <$t>::MAX as u128, $t);
        impl_const_for!(Signedness, IS_SIGNED, bool, true, $t);
        impl_const_for!(Digits, DIGITS, u32, <$t>::BITS - 1, $t);
    };
}

macro_rules! impl_unsigned_facts_for {
    ($t:ty) => {
        impl_const_for!(MaxAsU128, MAX_AS_U128, u128, <$t>::MAX as u128, $t);
        impl_const_for!(Signedness, IS_SIGNED, bool, false, $t);
        impl_const_for!(Digits, DIGITS, u32, <$t>::BITS, $t);
    };
}

impl_signed_facts_for!(i8);
impl_signed_facts_for!(i16);
impl_signed_facts_for!(i32);
impl_signed_facts_for!(i64);
impl_signed_facts_for!(i128);
impl_signed_facts_for!(isize);

impl_unsigned_facts_for!(u8);
impl_unsigned_facts_for!(u16);
impl_unsigned_facts_for!(u32);
impl_unsigned_facts_for!(u64);
impl_unsigned_facts_for!(u128);
impl_unsigned_facts_for!(usize);

impl_const_for!(FloatDigits, MANTISSA_DIGITS, u32, f32::MANTISSA_DIGITS, f32);
impl_const_for!(FloatDigits, MANTISSA_DIGITS, u32, f64::MANTISSA_DIGITS, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_as_u128() {
        assert_eq!(<u8 as MaxAsU128>::MAX_AS_U128, 255);
        assert_eq!(<i8 as MaxAsU128>::MAX_AS_U128, 127);
        assert_eq!(<u128 as MaxAsU128>::MAX_AS_U128, u128::MAX);
        assert_eq!(<i128 as MaxAsU128>::MAX_AS_U128, i128::MAX as u128);
        assert_eq!(<usize as MaxAsU128>::MAX_AS_U128, usize::MAX as u128);
    }

    #[test]
    fn test_signedness() {
        assert!(<i64 as Signedness>::IS_SIGNED);
        assert!(<isize as Signedness>::IS_SIGNED);
        assert!(!<u64 as Signedness>::IS_SIGNED);
        assert!(!<usize as Signedness>::IS_SIGNED);
    }

    #[test]
    fn test_digits_exclude_sign_bit() {
        assert_eq!(<u8 as Digits>::DIGITS, 8);
        assert_eq!(<i8 as Digits>::DIGITS, 7);
        assert_eq!(<u64 as Digits>::DIGITS, 64);
        assert_eq!(<i64 as Digits>::DIGITS, 63);
    }

    #[test]
    fn test_float_digits() {
        assert_eq!(<f32 as FloatDigits>::MANTISSA_DIGITS, 24);
        assert_eq!(<f64 as FloatDigits>::MANTISSA_DIGITS, 53);
    }
}
