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

//! # Floating-Point Boundary
//!
//! Conversions between floating-point values and size integers. Floats
//! enter a size computation from file formats and user input and leave it
//! toward ratios and averages; both directions hide range and precision
//! traps that `as` silently papers over. [`from_float`] truncates and
//! range-checks on the way in; [`to_float`] refuses integers the mantissa
//! cannot hold exactly on the way out, and that precision check elides
//! when the attested bound proves exactness.

use crate::attest::Attestation;
use crate::error::SizeError;
use crate::num::constants::FloatDigits;
use crate::num::SizeInt;
use crate::verify::check_non_negative;
use num_traits::{Float, One, Zero};
use std::marker::PhantomData;

/// Returns whether converting a value attested as `V` into the float `F`
/// needs a runtime precision check.
///
/// Integers up to `2^MANTISSA_DIGITS` convert exactly; the check is
/// unnecessary exactly when the attested bound stays within that range.
pub const fn needs_precision_check<F: FloatDigits, V: Attestation>() -> bool {
    V::BOUND > 1u128 << F::MANTISSA_DIGITS
}

// Same constant-hoisting trick as the arithmetic gates: reading the gate
// through an associated constant makes the guard a literal after
// monomorphization.
struct PrecisionGate<F, V>(PhantomData<(F, V)>);

impl<F: FloatDigits, V: Attestation> PrecisionGate<F, V> {
    const NEEDED: bool = needs_precision_check::<F, V>();
}

/// Converts a float to a size integer by truncation.
///
/// The fractional part is discarded, so `123.9` becomes `123`. The
/// truncated value must be non-negative and must fit `I`; note that
/// `-0.4` truncates to zero and is accepted.
///
/// # Errors
///
/// Returns [`SizeError::Overflow`] for NaN and for values at or above
/// `2^DIGITS` of the destination, and [`SizeError::OutOfRange`] for
/// values that truncate to something negative.
///
/// # Examples
///
/// ```rust
/// # use plimsoll::error::SizeError;
/// # use plimsoll::float::from_float;
/// assert_eq!(from_float::<u8, f64>(123.9), Ok(123));
/// assert_eq!(from_float::<u8, f64>(258.5), Err(SizeError::Overflow));
/// assert_eq!(from_float::<u8, f64>(-1.0), Err(SizeError::OutOfRange));
/// ```
#[inline]
pub fn from_float<I: SizeInt, F: Float>(x: F) -> Result<I, SizeError> {
    if x.is_nan() {
        return Err(SizeError::Overflow);
    }
    let truncated = x.trunc();
    if truncated < F::zero() {
        return Err(SizeError::OutOfRange);
    }
    // 2^DIGITS in the float's own domain; one past the largest value the
    // destination can hold. Overflows of this power to infinity are
    // exactly right: every finite float then fits the destination.
    let limit = (F::one() + F::one()).powi(I::DIGITS as i32);
    if truncated >= limit {
        return Err(SizeError::Overflow);
    }
    let widened = truncated.to_u128().ok_or(SizeError::Overflow)?;
    Ok(I::from_u128_lossy(widened))
}

/// Converts an attested size integer to a float, exactly.
///
/// A `u64` byte count squeezed into an `f64` loses its low bits once it
/// passes `2^53`; this refuses the conversion instead. The precision
/// check elides whenever [`needs_precision_check`] is `false` for the
/// operand type.
///
/// # Errors
///
/// Returns [`SizeError::OutOfRange`] if the operand is negative without a
/// static proof, and [`SizeError::Overflow`] if `F`'s mantissa cannot
/// represent the value exactly.
///
/// # Examples
///
/// ```rust
/// # use plimsoll::error::SizeError;
/// # use plimsoll::float::to_float;
/// assert_eq!(to_float::<f64, _>(3u8), Ok(3.0));
/// assert_eq!(to_float::<f64, _>(u64::MAX), Err(SizeError::Overflow));
/// ```
#[inline]
pub fn to_float<F, V>(x: V) -> Result<F, SizeError>
where
    F: Float + FloatDigits,
    V: Attestation,
{
    check_non_negative(x)?;
    let value = x.value();
    if value == V::Int::zero() {
        return Ok(F::zero());
    }
    // Exact iff value <= 2^MANTISSA_DIGITS, tested as a shift of
    // value - 1. A true gate implies the operand type is wider than the
    // mantissa, so the shift amount is always in range.
    if PrecisionGate::<F, V>::NEEDED
        && (value - V::Int::one()) >> (F::MANTISSA_DIGITS as usize) != V::Int::zero()
    {
        return Err(SizeError::Overflow);
    }
    F::from(value).ok_or(SizeError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attest::Attested;

    #[test]
    fn test_from_float_truncates() {
        assert_eq!(from_float::<u8, f64>(123.9), Ok(123));
        assert_eq!(from_float::<u32, f64>(0.99), Ok(0));
        assert_eq!(from_float::<u64, f32>(5.0), Ok(5));
    }

    #[test]
    fn test_from_float_rejects_values_past_the_destination() {
        assert_eq!(from_float::<u8, f64>(255.9), Ok(255));
        assert_eq!(from_float::<u8, f64>(256.0), Err(SizeError::Overflow));
        assert_eq!(from_float::<u8, f64>(258.5), Err(SizeError::Overflow));
        assert_eq!(from_float::<i8, f64>(127.5), Ok(127));
        assert_eq!(from_float::<i8, f64>(128.0), Err(SizeError::Overflow));
    }

    #[test]
    fn test_from_float_rejects_negative_values() {
        assert_eq!(from_float::<u32, f64>(-1.0), Err(SizeError::OutOfRange));
        assert_eq!(from_float::<i32, f64>(-1.5), Err(SizeError::OutOfRange));
    }

    #[test]
    fn test_from_float_accepts_negative_fractions_above_minus_one() {
        // Truncation lands on negative zero, which compares equal to zero.
        assert_eq!(from_float::<u32, f64>(-0.4), Ok(0));
    }

    #[test]
    fn test_from_float_rejects_nan_and_infinity() {
        assert_eq!(from_float::<u32, f64>(f64::NAN), Err(SizeError::Overflow));
        assert_eq!(
            from_float::<u32, f64>(f64::INFINITY),
            Err(SizeError::Overflow)
        );
        assert_eq!(
            from_float::<u128, f32>(f32::INFINITY),
            Err(SizeError::Overflow)
        );
    }

    #[test]
    fn test_from_float_widest_destination() {
        // Every finite f32 fits u128, including the largest one.
        assert_eq!(
            from_float::<u128, f32>(f32::MAX),
            Ok(340_282_346_638_528_859_811_704_183_484_516_925_440)
        );
    }

    #[test]
    fn test_to_float_exact_values() {
        assert_eq!(to_float::<f64, _>(3u8), Ok(3.0));
        assert_eq!(to_float::<f64, _>(0u64), Ok(0.0));
        assert_eq!(to_float::<f32, _>(1u32 << 24), Ok(16_777_216.0));
        assert_eq!(to_float::<f64, _>(1u64 << 53), Ok(9_007_199_254_740_992.0));
    }

    #[test]
    fn test_to_float_rejects_inexact_values() {
        assert_eq!(
            to_float::<f32, _>((1u32 << 24) + 1),
            Err(SizeError::Overflow)
        );
        assert_eq!(
            to_float::<f64, _>((1u64 << 53) + 1),
            Err(SizeError::Overflow)
        );
        assert_eq!(to_float::<f64, _>(u64::MAX), Err(SizeError::Overflow));
    }

    #[test]
    fn test_to_float_rejects_negative_values() {
        assert_eq!(to_float::<f64, _>(-5i32), Err(SizeError::OutOfRange));
    }

    #[test]
    fn test_precision_gate_constants() {
        const _: () = assert!(!needs_precision_check::<f64, u32>());
        const _: () = assert!(needs_precision_check::<f64, u64>());
        const _: () = assert!(needs_precision_check::<f32, u32>());
        const _: () = assert!(!needs_precision_check::<f32, u16>());
    }

    #[test]
    fn test_precision_gate_uses_attested_bounds() {
        // u64 would normally need the f32 check; a bound within the
        // mantissa proves it away.
        type Capped = Attested<u64, true, 1_000_000>;
        const _: () = assert!(!needs_precision_check::<f32, Capped>());

        let x = Capped::new(1_000_000);
        assert_eq!(to_float::<f32, _>(x), Ok(1_000_000.0));
    }
}
