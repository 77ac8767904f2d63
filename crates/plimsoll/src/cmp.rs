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

//! # Signedness-Safe Comparisons
//!
//! Comparison and selection between two possibly-differently-typed,
//! possibly-attested integers. Each operation validates that both operands
//! are non-negative, then compares them in the common `u128`
//! representation, which removes the classic mixed signed/unsigned
//! comparison bug class by construction. `min` and `max` narrow the
//! selected operand into a caller-chosen destination type with the usual
//! static elision of the narrowing check.

use crate::attest::Attestation;
use crate::cast::cast;
use crate::error::SizeError;
use crate::num::repr::AsU128Lossy;
use crate::num::SizeInt;
use crate::verify::check_non_negative;

// Validates both operands and widens them into the common representation.
#[inline(always)]
fn validated_pair<L: Attestation, R: Attestation>(
    left: L,
    right: R,
) -> Result<(u128, u128), SizeError> {
    check_non_negative(left)?;
    check_non_negative(right)?;
    Ok((
        left.value().as_u128_lossy(),
        right.value().as_u128_lossy(),
    ))
}

/// Returns whether `left` equals `right`, compared as mathematical values.
///
/// # Errors
///
/// Returns [`SizeError::OutOfRange`] if either operand is negative without
/// a static proof.
///
/// # Examples
///
/// ```rust
/// # use plimsoll::cmp::is_equal;
/// // A plain `==` between these representations would be a type error or,
/// // with casts, a sign bug. This compares values.
/// assert_eq!(is_equal(200u8, 200i64), Ok(true));
/// assert_eq!(is_equal(200u8, 201i64), Ok(false));
/// ```
#[inline]
pub fn is_equal<L: Attestation, R: Attestation>(left: L, right: R) -> Result<bool, SizeError> {
    let (l, r) = validated_pair(left, right)?;
    Ok(l == r)
}

/// Returns whether `left` is strictly less than `right`, with the same
/// validation as [`is_equal`].
#[inline]
pub fn is_less_than<L: Attestation, R: Attestation>(left: L, right: R) -> Result<bool, SizeError> {
    let (l, r) = validated_pair(left, right)?;
    Ok(l < r)
}

/// Returns whether `left` is less than or equal to `right`, with the same
/// validation as [`is_equal`].
#[inline]
pub fn is_less_than_or_equal<L: Attestation, R: Attestation>(
    left: L,
    right: R,
) -> Result<bool, SizeError> {
    let (l, r) = validated_pair(left, right)?;
    Ok(l <= r)
}

/// Returns whether `left` is strictly greater than `right`, with the same
/// validation as [`is_equal`].
#[inline]
pub fn is_greater_than<L: Attestation, R: Attestation>(
    left: L,
    right: R,
) -> Result<bool, SizeError> {
    let (l, r) = validated_pair(left, right)?;
    Ok(l > r)
}

/// Returns whether `left` is greater than or equal to `right`, with the
/// same validation as [`is_equal`].
#[inline]
pub fn is_greater_than_or_equal<L: Attestation, R: Attestation>(
    left: L,
    right: R,
) -> Result<bool, SizeError> {
    let (l, r) = validated_pair(left, right)?;
    Ok(l >= r)
}

/// Returns the smaller of the two operands, narrowed into `D`.
///
/// The comparison happens in the common representation, so operands of
/// different widths and signedness select correctly. Only the selected
/// operand is narrowed, and that check elides whenever its attested bound
/// already fits `D`.
///
/// # Errors
///
/// Returns [`SizeError::OutOfRange`] if either operand is negative without
/// a static proof, and [`SizeError::Overflow`] if the selected operand does
/// not fit `D`.
///
/// # Examples
///
/// ```rust
/// # use plimsoll::cmp::min;
/// let limit: u64 = 10_000;
/// let requested: u16 = 300;
/// assert_eq!(min::<u16, _, _>(limit, requested), Ok(300u16));
/// ```
#[inline]
pub fn min<D: SizeInt, L: Attestation, R: Attestation>(
    left: L,
    right: R,
) -> Result<D, SizeError> {
    let (l, r) = validated_pair(left, right)?;
    if l <= r {
        cast::<D, L>(left)
    } else {
        cast::<D, R>(right)
    }
}

/// Returns the larger of the two operands, narrowed into `D`.
///
/// The counterpart of [`min`]; the same validation and elision rules
/// apply.
#[inline]
pub fn max<D: SizeInt, L: Attestation, R: Attestation>(
    left: L,
    right: R,
) -> Result<D, SizeError> {
    let (l, r) = validated_pair(left, right)?;
    if l >= r {
        cast::<D, L>(left)
    } else {
        cast::<D, R>(right)
    }
}
