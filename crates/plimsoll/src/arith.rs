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

//! # Overflow-Checked Arithmetic
//!
//! Addition and multiplication over attested operands with a result that
//! is guaranteed to be exact or an error, never wrapped. Every operand is
//! first narrowed into the destination type, then the operation itself is
//! guarded by an overflow check.
//!
//! ## Static Elision
//!
//! The overflow guard is gated on a constant computed from the operands'
//! attested bounds: when the bounds prove the operation cannot overflow
//! the destination, the gate constant is `false`, the guard branch is
//! dead at monomorphization time, and the emitted code is a bare add or
//! multiply. [`needs_sum_check`] and [`needs_product_check`] expose the
//! gates so callers can assert elision in their own code.

use crate::attest::Attestation;
use crate::cast::cast;
use crate::error::SizeError;
use crate::num::repr::AsU128Lossy;
use crate::num::SizeInt;
use crate::verify::ensure_fits;
use std::marker::PhantomData;

/// Returns whether a sum of operands attested as `L` and `R` needs a
/// runtime overflow check when computed in `D`.
///
/// The decision uses only the attested bounds: if `L::BOUND + R::BOUND`
/// fits `D`, no pair of in-bound operands can overflow and the check is
/// unnecessary. The bound sum is itself computed with overflow detection,
/// so two extreme bounds conservatively answer `true`.
///
/// # Examples
///
/// ```rust
/// # use plimsoll::arith::needs_sum_check;
/// // Two u32 values always fit a u64 sum.
/// const _: () = assert!(!needs_sum_check::<u64, u32, u32>());
/// // Two u32 values may not fit a u32 sum.
/// const _: () = assert!(needs_sum_check::<u32, u32, u32>());
/// ```
pub const fn needs_sum_check<D: SizeInt, L: Attestation, R: Attestation>() -> bool {
    match L::BOUND.checked_add(R::BOUND) {
        Some(total) => total > D::MAX_AS_U128,
        None => true,
    }
}

/// Returns whether a product of operands attested as `L` and `R` needs a
/// runtime overflow check when computed in `D`.
///
/// The counterpart of [`needs_sum_check`] for multiplication: the check
/// is unnecessary exactly when `L::BOUND * R::BOUND` fits `D`.
pub const fn needs_product_check<D: SizeInt, L: Attestation, R: Attestation>() -> bool {
    match L::BOUND.checked_mul(R::BOUND) {
        Some(total) => total > D::MAX_AS_U128,
        None => true,
    }
}

// Hoists the gate decisions into associated constants. Reading the gate
// through a constant rather than a function call guarantees the guard
// condition is a literal in the monomorphized body, so the dead branch
// folds away even in debug builds.
struct Gates<D, L, R>(PhantomData<(D, L, R)>);

impl<D: SizeInt, L: Attestation, R: Attestation> Gates<D, L, R> {
    const SUM_NEEDED: bool = needs_sum_check::<D, L, R>();
    const PRODUCT_NEEDED: bool = needs_product_check::<D, L, R>();
}

/// Adds two attested operands, producing an exact `D` or an error.
///
/// Both operands are narrowed into `D` first, so an operand that does not
/// fit the destination fails even when the mathematical sum would. The
/// overflow guard on the addition itself elides whenever
/// [`needs_sum_check`] is `false` for the operand types.
///
/// # Errors
///
/// Returns [`SizeError::OutOfRange`] if an operand is negative without a
/// static proof, and [`SizeError::Overflow`] if an operand or the sum does
/// not fit `D`.
///
/// # Examples
///
/// ```rust
/// # use plimsoll::arith::sum;
/// # use plimsoll::error::SizeError;
/// assert_eq!(sum::<u32, _, _>(70_000u64, 5u8), Ok(70_005));
/// assert_eq!(sum::<u8, _, _>(200u32, 100u32), Err(SizeError::Overflow));
/// ```
#[inline]
pub fn sum<D: SizeInt, L: Attestation, R: Attestation>(
    left: L,
    right: R,
) -> Result<D, SizeError> {
    let l = cast::<D, L>(left)?;
    let r = cast::<D, R>(right)?;
    if Gates::<D, L, R>::SUM_NEEDED && D::max_value() - l < r {
        return Err(SizeError::Overflow);
    }
    Ok(l + r)
}

/// Multiplies two attested operands, producing an exact `D` or an error.
///
/// As with [`sum`], both operands must fit `D` on their own; `0 * x`
/// therefore still fails when `x` does not fit. The overflow guard elides
/// whenever [`needs_product_check`] is `false` for the operand types.
///
/// # Errors
///
/// Returns [`SizeError::OutOfRange`] if an operand is negative without a
/// static proof, and [`SizeError::Overflow`] if an operand or the product
/// does not fit `D`.
///
/// # Examples
///
/// ```rust
/// # use plimsoll::arith::product;
/// # use plimsoll::error::SizeError;
/// assert_eq!(product::<u16, _, _>(16u8, 16u8), Ok(256));
/// assert_eq!(product::<u8, _, _>(16u8, 16u8), Err(SizeError::Overflow));
/// ```
#[inline]
pub fn product<D: SizeInt, L: Attestation, R: Attestation>(
    left: L,
    right: R,
) -> Result<D, SizeError> {
    let l = cast::<D, L>(left)?;
    let r = cast::<D, R>(right)?;
    if Gates::<D, L, R>::PRODUCT_NEEDED && l != D::zero() && D::max_value() / l < r {
        return Err(SizeError::Overflow);
    }
    Ok(l * r)
}

/// Adds any number of same-typed attested operands.
///
/// Folds [`sum`] over the slice with a `D`-typed accumulator, erroring as
/// [`sum`] does at the first operand or partial sum that fails. The empty
/// slice sums to zero.
#[inline]
pub fn sum_all<D, V>(operands: &[V]) -> Result<D, SizeError>
where
    D: SizeInt + Attestation<Int = D>,
    V: Attestation,
{
    let mut total = D::zero();
    for &operand in operands {
        total = sum::<D, D, V>(total, operand)?;
    }
    Ok(total)
}

/// Multiplies any number of same-typed attested operands.
///
/// Folds [`product`] over the slice with a `D`-typed accumulator, erroring
/// as [`product`] does at the first operand or partial product that fails.
/// The empty slice multiplies to one.
#[inline]
pub fn product_all<D, V>(operands: &[V]) -> Result<D, SizeError>
where
    D: SizeInt + Attestation<Int = D>,
    V: Attestation,
{
    let mut total = D::one();
    for &operand in operands {
        total = product::<D, D, V>(total, operand)?;
    }
    Ok(total)
}

/// Adds two operands without validation.
///
/// The caller must guarantee that both operands and the sum fit `D`; a
/// violated contract yields an unspecified numeric result. Debug builds
/// assert the operand half of the contract.
#[inline(always)]
pub fn sum_unchecked<D: SizeInt, L: Attestation, R: Attestation>(left: L, right: R) -> D {
    debug_assert!(ensure_fits::<D, L>(left).is_ok());
    debug_assert!(ensure_fits::<D, R>(right).is_ok());
    let l = D::from_u128_lossy(left.value().as_u128_lossy());
    let r = D::from_u128_lossy(right.value().as_u128_lossy());
    l + r
}

/// Multiplies two operands without validation.
///
/// The multiplicative counterpart of [`sum_unchecked`], with the same
/// contract.
#[inline(always)]
pub fn product_unchecked<D: SizeInt, L: Attestation, R: Attestation>(left: L, right: R) -> D {
    debug_assert!(ensure_fits::<D, L>(left).is_ok());
    debug_assert!(ensure_fits::<D, R>(right).is_ok());
    let l = D::from_u128_lossy(left.value().as_u128_lossy());
    let r = D::from_u128_lossy(right.value().as_u128_lossy());
    l * r
}
