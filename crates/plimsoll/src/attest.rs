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

//! # Bound Attestations
//!
//! Integer operands annotated at compile time with a non-negativity proof
//! and an upper bound. Every validated operation in this crate is generic
//! over [`Attestation`], so plain integers and attested wrappers flow
//! through the same call surface, and any runtime check an attestation
//! already answers statically is compiled out.
//!
//! ## Highlights
//!
//! - [`Attestation`]: the operand interface, pairing a runtime value with
//!   the compile-time facts `NON_NEGATIVE` and `BOUND`.
//! - Plain integers implement it as the weakest attestation of their type:
//!   unsigned types are non-negative by construction, and the bound is the
//!   type maximum.
//! - [`Attested`]: a zero-cost wrapper fixing both facts as const
//!   parameters, with asserting (`new`) and debug-asserting
//!   (`new_unchecked`) constructors.
//! - [`NonNegative`] and [`WithBound`]: derived attestations produced by
//!   [`attest_non_negative`] and [`attest_bound`], each tightening one fact
//!   and carrying the rest through unchanged.
//!
//! ## Motivation
//!
//! Validated size arithmetic pays for its guarantees with sign and range
//! tests on every operand. Most of those tests are redundant: a value
//! already proven to fit `u32` cannot overflow a `u64` accumulator, and an
//! unsigned value cannot be negative. Attestations move those proofs into
//! the type so the compiler deletes the corresponding branches at
//! monomorphization, leaving exactly the checks that remain genuinely
//! undecidable before runtime.
//!
//! Bounds are normalized to `u128`, which holds the maximum of every
//! supported integer type; the static gates compare bounds in that one
//! representation and can never overflow themselves.

use std::fmt;

use num_traits::Zero;

use crate::num::repr::AsU128Lossy;
use crate::num::SizeInt;

/// An integer operand carrying compile-time sign and bound facts.
///
/// Implementors pair a runtime value with two associated constants:
/// `NON_NEGATIVE` states that the value can never be negative, and `BOUND`
/// is the tightest statically known upper limit, widened to `u128`. The
/// checks in [`crate::verify`] consult these constants first and emit a
/// runtime test only when the static answer is inconclusive.
///
/// Plain integers are the weakest attestation of their own type, so any
/// integer can be passed wherever an `Attestation` is expected.
///
/// # Examples
///
/// ```rust
/// # use plimsoll::attest::Attestation;
/// assert!(<u32 as Attestation>::NON_NEGATIVE);
/// assert!(!<i32 as Attestation>::NON_NEGATIVE);
/// assert_eq!(<u8 as Attestation>::BOUND, 255);
/// assert_eq!(42u8.value(), 42);
/// ```
pub trait Attestation: Copy {
    /// The underlying integer representation.
    type Int: SizeInt;

    /// Whether the value is statically known to be non-negative.
    const NON_NEGATIVE: bool;

    /// The statically known upper bound, widened to `u128`.
    const BOUND: u128;

    /// Returns the runtime value.
    fn value(self) -> Self::Int;
}

macro_rules! attestation_impl_prim {
    ($t:ty, $non_negative:expr) => {
        impl Attestation for $t {
            type Int = $t;
            const NON_NEGATIVE: bool = $non_negative;
            const BOUND: u128 = <$t>::MAX as u128;

            #[inline(always)]
            fn value(self) -> $t {
                self
            }
        }
    };
}

attestation_impl_prim!(u8, true);
attestation_impl_prim!(u16, true);
attestation_impl_prim!(u32, true);
attestation_impl_prim!(u64, true);
attestation_impl_prim!(u128, true);
attestation_impl_prim!(usize, true);

attestation_impl_prim!(i8, false);
attestation_impl_prim!(i16, false);
attestation_impl_prim!(i32, false);
attestation_impl_prim!(i64, false);
attestation_impl_prim!(i128, false);
attestation_impl_prim!(isize, false);

/// An integer whose sign and bound facts are fixed as const parameters.
///
/// This is the direct form of attestation: the caller states both facts in
/// the type and the constructor verifies that the wrapped value honors
/// them. Metadata that cannot hold for the representation at all, such as an
/// unsigned type claiming `NON_NEGATIVE = false` or a bound above the type's
/// maximum, is rejected at compile time.
///
/// # Examples
///
/// ```rust
/// # use plimsoll::attest::{Attestation, Attested};
/// let extent = Attested::<i64, true, 100>::new(42);
/// assert_eq!(extent.get(), 42);
/// assert_eq!(<Attested<i64, true, 100> as Attestation>::BOUND, 100);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Attested<T, const NON_NEGATIVE: bool, const BOUND: u128> {
    value: T,
}

impl<T: SizeInt, const NON_NEGATIVE: bool, const BOUND: u128> Attested<T, NON_NEGATIVE, BOUND> {
    // Referenced from the constructors so every instantiation evaluates it.
    const VALID_METADATA: () = {
        assert!(
            NON_NEGATIVE || T::IS_SIGNED,
            "an unsigned representation must attest non-negativity"
        );
        assert!(
            BOUND <= T::MAX_AS_U128,
            "an attested bound cannot exceed the type's maximum"
        );
    };

    /// Wraps `value`, asserting that it honors the attested facts.
    ///
    /// # Panics
    ///
    /// Panics if `value` exceeds `BOUND`, or is negative while
    /// `NON_NEGATIVE` is claimed. Both are contract violations by the
    /// constructing code, not recoverable conditions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use plimsoll::attest::Attested;
    /// let len = Attested::<usize, true, 1024>::new(512);
    /// assert_eq!(len.get(), 512);
    /// ```
    #[inline]
    pub fn new(value: T) -> Self {
        let _ = Self::VALID_METADATA;
        if NON_NEGATIVE && T::IS_SIGNED {
            assert!(
                value >= T::zero(),
                "attested value {value} is negative but claims a non-negativity proof"
            );
        }
        assert!(
            value < T::zero() || value.as_u128_lossy() <= BOUND,
            "attested value {value} exceeds its claimed bound {BOUND}"
        );
        Self { value }
    }

    /// Wraps `value` without runtime validation.
    ///
    /// The caller promises that `value` honors the attested facts; debug
    /// builds still check the promise. Intended for hot paths where the
    /// facts were established by an earlier validated operation.
    #[inline(always)]
    pub fn new_unchecked(value: T) -> Self {
        let _ = Self::VALID_METADATA;
        if NON_NEGATIVE && T::IS_SIGNED {
            debug_assert!(
                value >= T::zero(),
                "attested value {value} is negative but claims a non-negativity proof"
            );
        }
        debug_assert!(
            value < T::zero() || value.as_u128_lossy() <= BOUND,
            "attested value {value} exceeds its claimed bound {BOUND}"
        );
        Self { value }
    }

    /// Returns the wrapped value.
    #[inline(always)]
    pub fn get(&self) -> T {
        self.value
    }
}

impl<T: SizeInt, const NON_NEGATIVE: bool, const BOUND: u128> Attestation
    for Attested<T, NON_NEGATIVE, BOUND>
{
    type Int = T;
    const NON_NEGATIVE: bool = NON_NEGATIVE;
    const BOUND: u128 = BOUND;

    #[inline(always)]
    fn value(self) -> T {
        self.value
    }
}

impl<T: SizeInt, const NON_NEGATIVE: bool, const BOUND: u128> fmt::Debug
    for Attested<T, NON_NEGATIVE, BOUND>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attested")
            .field("value", &self.value)
            .field("non_negative", &NON_NEGATIVE)
            .field("bound", &BOUND)
            .finish()
    }
}

impl<T: SizeInt, const NON_NEGATIVE: bool, const BOUND: u128> fmt::Display
    for Attested<T, NON_NEGATIVE, BOUND>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A derived attestation adding a non-negativity proof to an operand.
///
/// Produced by [`attest_non_negative`]. The bound carries through
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct NonNegative<V> {
    inner: V,
}

impl<V: Attestation> Attestation for NonNegative<V> {
    type Int = V::Int;
    const NON_NEGATIVE: bool = true;
    const BOUND: u128 = V::BOUND;

    #[inline(always)]
    fn value(self) -> V::Int {
        self.inner.value()
    }
}

/// A derived attestation tightening an operand's upper bound.
///
/// Produced by [`attest_bound`]. The effective bound is the tighter of
/// `LIMIT` and the operand's existing bound, so the wrapper never weakens
/// what is already proven and repeated application is idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct WithBound<V, const LIMIT: u128> {
    inner: V,
}

impl<V: Attestation, const LIMIT: u128> Attestation for WithBound<V, LIMIT> {
    type Int = V::Int;
    const NON_NEGATIVE: bool = V::NON_NEGATIVE;
    const BOUND: u128 = if LIMIT < V::BOUND { LIMIT } else { V::BOUND };

    #[inline(always)]
    fn value(self) -> V::Int {
        self.inner.value()
    }
}

/// Attests that `x` is non-negative.
///
/// If `x` is already statically proven non-negative, no runtime test is
/// emitted and the proof is simply restated; otherwise the value is checked
/// once, here, so that downstream operations never have to.
///
/// # Panics
///
/// Panics if `x` is negative. Claiming non-negativity for a negative value
/// is a contract violation by the caller, not a recoverable condition; the
/// recoverable path for possibly-negative input is
/// [`crate::verify::check_non_negative`].
///
/// # Examples
///
/// ```rust
/// # use plimsoll::attest::{attest_non_negative, Attestation, NonNegative};
/// let x: i64 = 7;
/// let proven = attest_non_negative(x);
/// assert!(<NonNegative<i64> as Attestation>::NON_NEGATIVE);
/// assert_eq!(proven.value(), 7);
/// ```
#[inline]
pub fn attest_non_negative<V: Attestation>(x: V) -> NonNegative<V> {
    if !V::NON_NEGATIVE {
        assert!(
            x.value() >= V::Int::zero(),
            "cannot attest non-negativity of a negative value"
        );
    }
    NonNegative { inner: x }
}

/// Attests that `x` never exceeds `LIMIT`.
///
/// The resulting bound is the tighter of `LIMIT` and the existing bound. If
/// the existing bound already proves `LIMIT`, no runtime test is emitted.
///
/// # Panics
///
/// Panics if `x` is non-negative and exceeds `LIMIT` at runtime. A negative
/// value trivially satisfies any upper bound; its sign remains unproven.
///
/// # Examples
///
/// ```rust
/// # use plimsoll::attest::{attest_bound, Attestation, WithBound};
/// let columns = attest_bound::<100, u64>(64);
/// assert_eq!(<WithBound<u64, 100> as Attestation>::BOUND, 100);
/// assert_eq!(columns.value(), 64);
/// ```
#[inline]
pub fn attest_bound<const LIMIT: u128, V: Attestation>(x: V) -> WithBound<V, LIMIT> {
    if LIMIT < V::BOUND {
        let value = x.value();
        assert!(
            value < V::Int::zero() || value.as_u128_lossy() <= LIMIT,
            "cannot attest a bound the value already exceeds"
        );
    }
    WithBound { inner: x }
}

macro_rules! attest_fits_impl {
    ($name:ident, $t:ty) => {
        /// Attests that the value fits the named type's range, without
        /// changing its representation. Useful ahead of repeated casts into
        /// a known destination type.
        #[inline]
        pub fn $name<V: Attestation>(x: V) -> WithBound<V, { <$t>::MAX as u128 }> {
            attest_bound::<{ <$t>::MAX as u128 }, V>(x)
        }
    };
}

attest_fits_impl!(attest_fits_u8, u8);
attest_fits_impl!(attest_fits_u16, u16);
attest_fits_impl!(attest_fits_u32, u32);
attest_fits_impl!(attest_fits_u64, u64);
attest_fits_impl!(attest_fits_u128, u128);
attest_fits_impl!(attest_fits_usize, usize);

attest_fits_impl!(attest_fits_i8, i8);
attest_fits_impl!(attest_fits_i16, i16);
attest_fits_impl!(attest_fits_i32, i32);
attest_fits_impl!(attest_fits_i64, i64);
attest_fits_impl!(attest_fits_i128, i128);
attest_fits_impl!(attest_fits_isize, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_integers_are_weakest_attestations() {
        assert!(<u8 as Attestation>::NON_NEGATIVE);
        assert!(<usize as Attestation>::NON_NEGATIVE);
        assert!(!<i8 as Attestation>::NON_NEGATIVE);
        assert!(!<isize as Attestation>::NON_NEGATIVE);

        assert_eq!(<u8 as Attestation>::BOUND, u8::MAX as u128);
        assert_eq!(<i64 as Attestation>::BOUND, i64::MAX as u128);
        assert_eq!(<u128 as Attestation>::BOUND, u128::MAX);
    }

    #[test]
    fn test_plain_integer_value_is_identity() {
        assert_eq!(42u16.value(), 42);
        assert_eq!((-3i32).value(), -3);
    }

    #[test]
    fn test_attested_new_accepts_valid_values() {
        let x = Attested::<u32, true, 1000>::new(1000);
        assert_eq!(x.get(), 1000);
        assert_eq!(x.value(), 1000);
    }

    #[test]
    fn test_attested_allows_negative_without_proof() {
        let x = Attested::<i32, false, 100>::new(-5);
        assert_eq!(x.get(), -5);
    }

    #[test]
    #[should_panic(expected = "exceeds its claimed bound")]
    fn test_attested_new_rejects_value_above_bound() {
        let _ = Attested::<u32, true, 1000>::new(1001);
    }

    #[test]
    #[should_panic(expected = "is negative")]
    fn test_attested_new_rejects_negative_with_proof() {
        let _ = Attested::<i32, true, 100>::new(-1);
    }

    #[test]
    fn test_attested_new_unchecked_wraps_valid_values() {
        let x = Attested::<i64, true, 50>::new_unchecked(49);
        assert_eq!(x.get(), 49);
    }

    #[test]
    fn test_attested_display_and_debug() {
        let x = Attested::<u8, true, 200>::new(7);
        assert_eq!(format!("{}", x), "7");
        let debug = format!("{:?}", x);
        assert!(debug.contains("value: 7"));
        assert!(debug.contains("bound: 200"));
    }

    #[test]
    fn test_attest_non_negative_proves_sign() {
        let x = attest_non_negative(5i32);
        assert!(<NonNegative<i32> as Attestation>::NON_NEGATIVE);
        assert_eq!(<NonNegative<i32> as Attestation>::BOUND, i32::MAX as u128);
        assert_eq!(x.value(), 5);
    }

    #[test]
    #[should_panic(expected = "cannot attest non-negativity")]
    fn test_attest_non_negative_rejects_negative_value() {
        let _ = attest_non_negative(-1i32);
    }

    #[test]
    fn test_attest_bound_tightens() {
        let x = attest_bound::<100, u64>(64);
        assert_eq!(<WithBound<u64, 100> as Attestation>::BOUND, 100);
        assert_eq!(x.value(), 64);
    }

    #[test]
    fn test_attest_bound_keeps_tighter_existing_bound() {
        // A limit looser than the type maximum leaves the bound untouched.
        let x = attest_bound::<{ u128::MAX }, u8>(10);
        assert_eq!(<WithBound<u8, { u128::MAX }> as Attestation>::BOUND, u8::MAX as u128);
        assert_eq!(x.value(), 10);
    }

    #[test]
    fn test_attest_bound_is_idempotent() {
        let once = attest_bound::<100, u64>(64);
        let twice = attest_bound::<100, WithBound<u64, 100>>(once);
        assert_eq!(
            <WithBound<WithBound<u64, 100>, 100> as Attestation>::BOUND,
            <WithBound<u64, 100> as Attestation>::BOUND
        );
        assert_eq!(twice.value(), 64);
    }

    #[test]
    fn test_attest_bound_allows_negative_value() {
        // A negative value satisfies any upper bound; only the sign fact
        // stays unproven.
        let x = attest_bound::<100, i32>(-7);
        assert!(!<WithBound<i32, 100> as Attestation>::NON_NEGATIVE);
        assert_eq!(x.value(), -7);
    }

    #[test]
    #[should_panic(expected = "already exceeds")]
    fn test_attest_bound_rejects_value_above_limit() {
        let _ = attest_bound::<100, u64>(101);
    }

    #[test]
    fn test_attest_fits_by_type() {
        let x = attest_fits_u8(200u64);
        assert_eq!(<WithBound<u64, { u8::MAX as u128 }> as Attestation>::BOUND, 255);
        assert_eq!(x.value(), 200);
    }

    #[test]
    #[should_panic(expected = "already exceeds")]
    fn test_attest_fits_rejects_oversized_value() {
        let _ = attest_fits_u8(256u64);
    }

    #[test]
    fn test_nested_attestations_compose() {
        let x = attest_bound::<1000, _>(attest_non_negative(512i64));
        assert!(<WithBound<NonNegative<i64>, 1000> as Attestation>::NON_NEGATIVE);
        assert_eq!(<WithBound<NonNegative<i64>, 1000> as Attestation>::BOUND, 1000);
        assert_eq!(x.value(), 512);
    }
}
