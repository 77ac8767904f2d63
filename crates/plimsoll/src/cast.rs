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

//! # Validated Narrowing
//!
//! Conversions into a destination integer type that surface sign and range
//! violations as errors instead of silently truncating. `cast` fails on
//! any value the destination cannot represent, `cap` clamps instead, and
//! the offset helpers validate indices against `isize` ahead of pointer
//! arithmetic.

use crate::attest::Attestation;
use crate::error::SizeError;
use crate::num::repr::AsU128Lossy;
use crate::num::SizeInt;
use crate::verify::{check_non_negative, ensure_fits};

/// Casts `x` into the destination type `D`, validating sign and range.
///
/// When the attestation proves both facts, the call compiles down to the
/// narrowing conversion alone.
///
/// # Errors
///
/// Returns [`SizeError::OutOfRange`] if `x` is negative without a static
/// proof, and [`SizeError::Overflow`] if it exceeds `D::MAX`.
///
/// # Examples
///
/// ```rust
/// # use plimsoll::cast::cast;
/// # use plimsoll::error::SizeError;
/// assert_eq!(cast::<u8, u32>(200), Ok(200u8));
/// assert_eq!(cast::<u8, u32>(300), Err(SizeError::Overflow));
/// assert_eq!(cast::<u8, i32>(-1), Err(SizeError::OutOfRange));
/// ```
#[inline]
pub fn cast<D: SizeInt, V: Attestation>(x: V) -> Result<D, SizeError> {
    let x = ensure_fits::<D, V>(x)?;
    Ok(D::from_u128_lossy(x.value().as_u128_lossy()))
}

/// Casts `x` into `D`, clamping to `D::MAX` instead of failing on excess.
///
/// Intended for deriving safe default capacities: the requested value is
/// honored when representable and pinned to the destination's maximum when
/// not. When the attested bound already fits `D` the clamp compiles down to
/// the narrowing conversion; otherwise the runtime value decides.
///
/// # Errors
///
/// Returns [`SizeError::OutOfRange`] if `x` is negative without a static
/// proof. Excess magnitude is never an error here.
///
/// # Examples
///
/// ```rust
/// # use plimsoll::cast::cap;
/// assert_eq!(cap::<u8, u32>(1000), Ok(255u8));
/// assert_eq!(cap::<u8, u32>(100), Ok(100u8));
/// ```
#[inline]
pub fn cap<D: SizeInt, V: Attestation>(x: V) -> Result<D, SizeError> {
    check_non_negative(x)?;
    let widened = x.value().as_u128_lossy();
    if V::BOUND <= D::MAX_AS_U128 || widened <= D::MAX_AS_U128 {
        Ok(D::from_u128_lossy(widened))
    } else {
        Ok(D::max_value())
    }
}

/// Casts a non-negative index into `isize` for pointer arithmetic.
///
/// `pointer::offset` and friends take `isize`; this is [`cast`] with that
/// destination fixed, so an index that exceeds `isize::MAX` errors instead
/// of silently flipping sign.
#[inline]
pub fn to_offset<V: Attestation>(x: V) -> Result<isize, SizeError> {
    cast::<isize, V>(x)
}

/// Checks that `x` is usable as a pointer offset and returns it unchanged.
///
/// The validating half of [`to_offset`], for callers that only need the
/// guarantee and want to keep the value in its original type.
#[inline]
pub fn ensure_offset<V: Attestation>(x: V) -> Result<V, SizeError> {
    ensure_fits::<isize, V>(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attest::Attested;

    #[test]
    fn test_cast_preserves_in_range_values() {
        assert_eq!(cast::<u8, u32>(0), Ok(0));
        assert_eq!(cast::<u8, u32>(255), Ok(255));
        assert_eq!(cast::<i64, u8>(255), Ok(255));
        assert_eq!(cast::<u32, i32>(i32::MAX), Ok(i32::MAX as u32));
    }

    #[test]
    fn test_cast_rejects_oversized_values() {
        assert_eq!(cast::<u8, u32>(256), Err(SizeError::Overflow));
        assert_eq!(cast::<i8, u8>(128), Err(SizeError::Overflow));
        assert_eq!(cast::<usize, u128>(u128::MAX), Err(SizeError::Overflow));
    }

    #[test]
    fn test_cast_rejects_negative_values() {
        assert_eq!(cast::<u8, i32>(-1), Err(SizeError::OutOfRange));
        assert_eq!(cast::<i64, i8>(-1), Err(SizeError::OutOfRange));
    }

    #[test]
    fn test_cast_round_trips_through_wider_type() {
        let x: u8 = 200;
        let wide = cast::<u64, u8>(x).and_then(cast::<u8, u64>);
        assert_eq!(wide, Ok(x));
    }

    #[test]
    fn test_cast_with_attested_operand() {
        let x = Attested::<u64, true, 200>::new(150);
        assert_eq!(cast::<u8, _>(x), Ok(150));
    }

    #[test]
    fn test_cap_clamps_to_destination_maximum() {
        assert_eq!(cap::<u8, u32>(1000), Ok(255));
        assert_eq!(cap::<u8, u128>(u128::MAX), Ok(255));
        assert_eq!(cap::<i8, u32>(128), Ok(127));
    }

    #[test]
    fn test_cap_passes_fitting_values_through() {
        assert_eq!(cap::<u8, u32>(0), Ok(0));
        assert_eq!(cap::<u8, u32>(255), Ok(255));
        assert_eq!(cap::<u64, u8>(17), Ok(17));
    }

    #[test]
    fn test_cap_rejects_only_negatives() {
        assert_eq!(cap::<u8, i32>(-1), Err(SizeError::OutOfRange));
        assert_eq!(cap::<u8, i32>(i32::MAX), Ok(255));
    }

    #[test]
    fn test_cap_consults_runtime_value_when_bound_is_inconclusive() {
        // The bound exceeds u8 but the value fits, so it passes unclamped.
        let x = Attested::<u32, true, 1000>::new(90);
        assert_eq!(cap::<u8, _>(x), Ok(90));
    }

    #[test]
    fn test_to_offset_accepts_valid_indices() {
        assert_eq!(to_offset(0usize), Ok(0));
        assert_eq!(to_offset(1024u32), Ok(1024));
        assert_eq!(to_offset(isize::MAX as usize), Ok(isize::MAX));
    }

    #[test]
    fn test_to_offset_rejects_oversized_indices() {
        assert_eq!(to_offset(usize::MAX), Err(SizeError::Overflow));
        assert_eq!(to_offset(u128::MAX), Err(SizeError::Overflow));
    }

    #[test]
    fn test_ensure_offset_keeps_original_type() {
        let x: u32 = 77;
        assert_eq!(ensure_offset(x), Ok(77u32));
        assert_eq!(ensure_offset(-1i32), Err(SizeError::OutOfRange));
    }
}
