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

//! # Operand Verification
//!
//! The two choke-point checks every validated operation runs before
//! consuming an operand: non-negativity and destination fit. Both consult
//! the operand's attestation first and emit a runtime test only when the
//! static facts leave the question open. This is where the crate's
//! performance argument lives: a chain of operations over sufficiently
//! attested operands carries no redundant runtime tests at all.

use crate::attest::Attestation;
use crate::error::SizeError;
use crate::num::repr::AsU128Lossy;
use crate::num::SizeInt;
use num_traits::Zero;

/// Checks that `x` is non-negative.
///
/// When the attestation already proves non-negativity (any unsigned type,
/// or a [`crate::attest::NonNegative`] wrapper), the check compiles away
/// entirely.
///
/// # Errors
///
/// Returns [`SizeError::OutOfRange`] if `x` is negative at runtime without
/// a static proof ruling that out.
///
/// # Examples
///
/// ```rust
/// # use plimsoll::error::SizeError;
/// # use plimsoll::verify::check_non_negative;
/// assert!(check_non_negative(7i32).is_ok());
/// assert_eq!(check_non_negative(-7i32), Err(SizeError::OutOfRange));
/// ```
#[inline]
pub fn check_non_negative<V: Attestation>(x: V) -> Result<(), SizeError> {
    if !V::NON_NEGATIVE && x.value() < V::Int::zero() {
        return Err(SizeError::OutOfRange);
    }
    Ok(())
}

/// Checks that `x` does not exceed the maximum of the destination type `D`.
///
/// When the attested bound already fits `D`, the check compiles away
/// entirely. A negative value never reports `Overflow` here; sign
/// violations are [`check_non_negative`]'s concern.
///
/// # Errors
///
/// Returns [`SizeError::Overflow`] if `x` exceeds `D::MAX` at runtime.
///
/// # Examples
///
/// ```rust
/// # use plimsoll::error::SizeError;
/// # use plimsoll::verify::check_fits;
/// assert!(check_fits::<u8, u32>(255).is_ok());
/// assert_eq!(check_fits::<u8, u32>(256), Err(SizeError::Overflow));
/// ```
#[inline]
pub fn check_fits<D: SizeInt, V: Attestation>(x: V) -> Result<(), SizeError> {
    if V::BOUND > D::MAX_AS_U128 {
        let value = x.value();
        if value > V::Int::zero() && value.as_u128_lossy() > D::MAX_AS_U128 {
            return Err(SizeError::Overflow);
        }
    }
    Ok(())
}

/// Runs both operand checks against `D` and returns `x` unchanged.
///
/// Useful for validating a value ahead of an operation that consumes it
/// elsewhere, for example an index that will later reach a container, while
/// keeping any attestation it carries.
#[inline]
pub fn ensure_fits<D: SizeInt, V: Attestation>(x: V) -> Result<V, SizeError> {
    check_non_negative(x)?;
    check_fits::<D, V>(x)?;
    Ok(x)
}
